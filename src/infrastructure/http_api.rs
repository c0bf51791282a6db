// REST implementation of the notes API
use crate::application::error::{ClientError, ClientResult};
use crate::application::notes_api::{
    AuthGrant, CategoryChanges, Credentials, NotesApi, Registration,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::note::{Note, NoteChanges, NoteId};
use crate::domain::profile::{Profile, ProfileUpdate};
use crate::infrastructure::api_types::{
    category_from_dto, note_from_dto, profile_from_dto, AuthResponse, CategoryCreate, CategoryDto,
    CategoryWrite,
    ErrorBody, LoginRequest, NoteDto, NoteWrite, PopulateRequest, PopulateResponse, ProfileWrite,
    RegisterRequest, UserDto,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotesApi {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("Accept", "application/json")
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path)
            .header("Authorization", format!("Token {}", token))
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Notes API returned {}: {}", status, body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::message)
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.execute(request).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn register(&self, registration: &Registration) -> ClientResult<AuthGrant> {
        let request = self
            .request(Method::POST, "register/")
            .json(&RegisterRequest::from(registration));
        let auth: AuthResponse = self.fetch(request).await?;
        Ok(AuthGrant {
            token: auth.token,
            profile: profile_from_dto(auth.user),
        })
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthGrant> {
        let request = self
            .request(Method::POST, "login/")
            .json(&LoginRequest::from(credentials));
        let auth: AuthResponse = self.fetch(request).await?;
        Ok(AuthGrant {
            token: auth.token,
            profile: profile_from_dto(auth.user),
        })
    }

    async fn logout(&self, token: &str) -> ClientResult<()> {
        self.execute(self.authed(Method::POST, "logout/", token)).await?;
        Ok(())
    }

    async fn list_notes(&self, token: &str) -> ClientResult<Vec<Note>> {
        let notes: Vec<NoteDto> = self.fetch(self.authed(Method::GET, "notes/", token)).await?;
        tracing::debug!("Fetched {} notes", notes.len());
        Ok(notes.into_iter().map(note_from_dto).collect())
    }

    async fn get_note(&self, token: &str, id: NoteId) -> ClientResult<Note> {
        let path = format!("notes/{}/", id);
        let note: NoteDto = self.fetch(self.authed(Method::GET, &path, token)).await?;
        Ok(note_from_dto(note))
    }

    async fn create_note(&self, token: &str, category_id: Option<CategoryId>) -> ClientResult<Note> {
        let body = NoteWrite {
            category_id: category_id.map(|id| id.0),
            ..Default::default()
        };
        let request = self.authed(Method::POST, "notes/", token).json(&body);
        let note: NoteDto = self.fetch(request).await?;
        Ok(note_from_dto(note))
    }

    async fn update_note(&self, token: &str, id: NoteId, changes: &NoteChanges) -> ClientResult<Note> {
        let path = format!("notes/{}/", id);
        let request = self
            .authed(Method::PATCH, &path, token)
            .json(&NoteWrite::from(changes));
        let note: NoteDto = self.fetch(request).await?;
        Ok(note_from_dto(note))
    }

    async fn delete_note(&self, token: &str, id: NoteId) -> ClientResult<()> {
        let path = format!("notes/{}/", id);
        self.execute(self.authed(Method::DELETE, &path, token)).await?;
        Ok(())
    }

    async fn list_categories(&self, token: &str) -> ClientResult<Vec<Category>> {
        let categories: Vec<CategoryDto> = self
            .fetch(self.authed(Method::GET, "categories/", token))
            .await?;
        Ok(categories.into_iter().map(category_from_dto).collect())
    }

    async fn create_category(&self, token: &str, name: &str, color: &str) -> ClientResult<Category> {
        let request = self
            .authed(Method::POST, "categories/", token)
            .json(&CategoryCreate { name, color });
        let category: CategoryDto = self.fetch(request).await?;
        Ok(category_from_dto(category))
    }

    async fn update_category(
        &self,
        token: &str,
        id: CategoryId,
        changes: &CategoryChanges,
    ) -> ClientResult<Category> {
        let path = format!("categories/{}/", id);
        let request = self
            .authed(Method::PATCH, &path, token)
            .json(&CategoryWrite::from(changes));
        let category: CategoryDto = self.fetch(request).await?;
        Ok(category_from_dto(category))
    }

    async fn get_profile(&self, token: &str) -> ClientResult<Profile> {
        let user: UserDto = self.fetch(self.authed(Method::GET, "profile/", token)).await?;
        Ok(profile_from_dto(user))
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ClientResult<Profile> {
        let request = self
            .authed(Method::PUT, "profile/", token)
            .json(&ProfileWrite::from(update));
        let user: UserDto = self.fetch(request).await?;
        Ok(profile_from_dto(user))
    }

    async fn populate(&self, token: &str, subject: &str) -> ClientResult<usize> {
        let request = self
            .authed(Method::POST, "populate_llm/", token)
            .json(&PopulateRequest { subject });
        let response: PopulateResponse = self.fetch(request).await?;
        Ok(response.count)
    }
}
