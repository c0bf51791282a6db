// Wire types for the notes REST API and their mapping to domain models
use crate::domain::category::{Category, CategoryId};
use crate::domain::note::{Note, NoteChanges, NoteId};
use crate::domain::profile::{Profile, ProfileUpdate};
use crate::application::notes_api::{CategoryChanges, Credentials, Registration};
use serde::{Deserialize, Serialize};

const FALLBACK_COLOR: &str = "#FFFFFF";

fn fallback_color() -> String {
    FALLBACK_COLOR.to_string()
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default = "fallback_color")]
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteDto {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub struct PopulateResponse {
    #[serde(default)]
    pub count: usize,
}

/// Error payloads: `{"error": ...}` from the app views, `{"detail": ...}` from the framework.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn message(self) -> Option<String> {
        self.error.or(self.detail)
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: &registration.username,
            password: &registration.password,
            first_name: &registration.first_name,
            last_name: &registration.last_name,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct NoteWrite<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl<'a> From<&'a NoteChanges> for NoteWrite<'a> {
    fn from(changes: &'a NoteChanges) -> Self {
        Self {
            title: changes.title.as_deref(),
            content: changes.content.as_deref(),
            category_id: changes.category_id.map(|id| id.0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryCreate<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CategoryWrite<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
}

impl<'a> From<&'a CategoryChanges> for CategoryWrite<'a> {
    fn from(changes: &'a CategoryChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            color: changes.color.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileWrite<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_new_password: Option<&'a str>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileWrite<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        let password = update.password.as_ref();
        Self {
            first_name: update.first_name.as_deref(),
            last_name: update.last_name.as_deref(),
            current_password: password.map(|p| p.current.as_str()),
            new_password: password.map(|p| p.new.as_str()),
            repeat_new_password: password.map(|p| p.repeat.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PopulateRequest<'a> {
    pub subject: &'a str,
}

pub fn category_from_dto(dto: CategoryDto) -> Category {
    Category::new(CategoryId(dto.id), dto.name, dto.color)
}

pub fn note_from_dto(dto: NoteDto) -> Note {
    Note {
        id: NoteId(dto.id),
        title: dto.title.unwrap_or_default(),
        content: dto.content.unwrap_or_default(),
        category: dto.category.map(category_from_dto),
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    }
}

pub fn profile_from_dto(dto: UserDto) -> Profile {
    Profile {
        id: dto.id,
        username: dto.username,
        first_name: dto.first_name,
        last_name: dto.last_name,
    }
}
