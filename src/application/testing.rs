// In-memory fakes for service tests
use crate::application::error::{ClientError, ClientResult};
use crate::application::notes_api::{
    AuthGrant, CategoryChanges, Credentials, NotesApi, Registration,
};
use crate::application::session_store::{Session, SessionStore};
use crate::domain::category::{Category, CategoryId};
use crate::domain::note::{Note, NoteChanges, NoteId};
use crate::domain::profile::{Profile, ProfileUpdate};
use async_trait::async_trait;
use std::sync::Mutex;

const DEFAULT_CATEGORIES: [(&str, &str); 3] = [
    ("Random Thoughts", "#FFCBCB"),
    ("School", "#FFF176"),
    ("Personal", "#AFC7BD"),
];

fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, color))| {
            Category::new(CategoryId(i as i64 + 1), name.to_string(), color.to_string())
        })
        .collect()
}

struct FakeState {
    notes: Vec<Note>,
    categories: Vec<Category>,
    profile: Profile,
    password: String,
    next_id: i64,
    fail_logout: bool,
}

pub struct FakeNotesApi {
    state: Mutex<FakeState>,
}

impl FakeNotesApi {
    pub const TOKEN: &'static str = "test-token";

    /// Three default categories and four notes, one of them uncategorized.
    pub fn new() -> Self {
        let api = Self::empty();
        let categories = default_categories();
        let cat = |i: usize| Some(categories[i].clone());
        let notes = vec![
            Note::new(NoteId(10), "Idea".to_string(), "Write it down".to_string(), cat(0)),
            Note::new(NoteId(11), "Exam".to_string(), "Friday".to_string(), cat(1)),
            Note::new(NoteId(12), "Dream".to_string(), "Flying".to_string(), cat(0)),
            Note::new(NoteId(13), "Loose".to_string(), "No home".to_string(), None),
        ];
        {
            let mut state = api.state.lock().unwrap();
            state.categories = categories;
            state.notes = notes;
        }
        api
    }

    pub fn empty() -> Self {
        Self {
            state: Mutex::new(FakeState {
                notes: Vec::new(),
                categories: Vec::new(),
                profile: Profile {
                    id: 1,
                    username: "mary@example.com".to_string(),
                    first_name: "Mary".to_string(),
                    last_name: "Smith".to_string(),
                },
                password: "pw".to_string(),
                next_id: 100,
                fail_logout: false,
            }),
        }
    }

    pub fn note_count(&self) -> usize {
        self.state.lock().unwrap().notes.len()
    }

    pub fn category_count(&self) -> usize {
        self.state.lock().unwrap().categories.len()
    }

    pub fn profile(&self) -> Profile {
        self.state.lock().unwrap().profile.clone()
    }

    pub fn fail_next_logout(&self) {
        self.state.lock().unwrap().fail_logout = true;
    }

    pub fn insert_note(&self, title: &str, content: &str, category: Option<CategoryId>) -> NoteId {
        let mut state = self.state.lock().unwrap();
        let category = category.and_then(|id| state.categories.iter().find(|c| c.id == id).cloned());
        let id = NoteId(state.next_id);
        state.next_id += 1;
        state
            .notes
            .push(Note::new(id, title.to_string(), content.to_string(), category));
        id
    }

    fn check(token: &str) -> ClientResult<()> {
        if token == Self::TOKEN {
            Ok(())
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            message: "Not found.".to_string(),
        }
    }
}

#[async_trait]
impl NotesApi for FakeNotesApi {
    async fn register(&self, registration: &Registration) -> ClientResult<AuthGrant> {
        let mut state = self.state.lock().unwrap();
        state.profile = Profile {
            id: 2,
            username: registration.username.clone(),
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
        };
        state.password = registration.password.clone();
        state.categories = default_categories();
        Ok(AuthGrant {
            token: Self::TOKEN.to_string(),
            profile: state.profile.clone(),
        })
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthGrant> {
        let state = self.state.lock().unwrap();
        if credentials.username != state.profile.username || credentials.password != state.password
        {
            return Err(ClientError::Unauthorized);
        }
        Ok(AuthGrant {
            token: Self::TOKEN.to_string(),
            profile: state.profile.clone(),
        })
    }

    async fn logout(&self, token: &str) -> ClientResult<()> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        if state.fail_logout {
            state.fail_logout = false;
            return Err(ClientError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }

    async fn list_notes(&self, token: &str) -> ClientResult<Vec<Note>> {
        Self::check(token)?;
        Ok(self.state.lock().unwrap().notes.clone())
    }

    async fn get_note(&self, token: &str, id: NoteId) -> ClientResult<Note> {
        Self::check(token)?;
        let state = self.state.lock().unwrap();
        state
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_note(&self, token: &str, category_id: Option<CategoryId>) -> ClientResult<Note> {
        Self::check(token)?;
        let id = self.insert_note("", "", category_id);
        self.get_note(token, id).await
    }

    async fn update_note(&self, token: &str, id: NoteId, changes: &NoteChanges) -> ClientResult<Note> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        let categories = state.categories.clone();
        let note = state
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(Self::not_found)?;
        changes.apply_to(note, &categories);
        Ok(note.clone())
    }

    async fn delete_note(&self, token: &str, id: NoteId) -> ClientResult<()> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn list_categories(&self, token: &str) -> ClientResult<Vec<Category>> {
        Self::check(token)?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn create_category(&self, token: &str, name: &str, color: &str) -> ClientResult<Category> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        let next = state.categories.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let category = Category::new(CategoryId(next), name.to_string(), color.to_string());
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        token: &str,
        id: CategoryId,
        changes: &CategoryChanges,
    ) -> ClientResult<Category> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(name) = &changes.name {
            category.name = name.clone();
        }
        if let Some(color) = &changes.color {
            category.color = color.clone();
        }
        Ok(category.clone())
    }

    async fn get_profile(&self, token: &str) -> ClientResult<Profile> {
        Self::check(token)?;
        Ok(self.profile())
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ClientResult<Profile> {
        Self::check(token)?;
        let mut state = self.state.lock().unwrap();
        if let Some(change) = update.password.as_ref().filter(|c| !c.new.is_empty()) {
            if change.current != state.password {
                return Err(ClientError::Api {
                    status: 400,
                    message: "Current password is incorrect.".to_string(),
                });
            }
            state.password = change.new.clone();
        }
        if let Some(first_name) = &update.first_name {
            state.profile.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            state.profile.last_name = last_name.clone();
        }
        Ok(state.profile.clone())
    }

    async fn populate(&self, token: &str, subject: &str) -> ClientResult<usize> {
        Self::check(token)?;
        let targets: Vec<CategoryId> = {
            let state = self.state.lock().unwrap();
            state
                .categories
                .iter()
                .filter(|c| DEFAULT_CATEGORIES.iter().any(|(name, _)| *name == c.name))
                .map(|c| c.id)
                .collect()
        };
        let mut created = 0;
        for id in targets {
            for i in 0..3 {
                self.insert_note(&format!("{} #{}", subject, i + 1), "Generated", Some(id));
                created += 1;
            }
        }
        Ok(created)
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn logged_in() -> Self {
        Self {
            session: Mutex::new(Some(Session {
                token: FakeNotesApi::TOKEN.to_string(),
                first_name: "mary".to_string(),
            })),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
