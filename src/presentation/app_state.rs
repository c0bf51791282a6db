// Application state shared by command handlers
use crate::application::auth_service::AuthService;
use crate::application::dashboard_service::DashboardService;
use crate::application::editor_service::EditorService;
use crate::application::profile_service::ProfileService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub editor_service: EditorService,
    pub profile_service: ProfileService,
}
