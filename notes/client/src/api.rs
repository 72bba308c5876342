use notes_core::{Note, NoteDraft};
use serde::de::DeserializeOwned;

/// Errors that can occur while talking to the notes API.
///
/// A non-2xx answer is reported like a transport failure would be, the caller is not expected
/// to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server answered with HTTP {0}")]
    Status(u16),
}

/// The notes REST API, one method per endpoint.
#[allow(async_fn_in_trait)]
#[cfg_attr(test, mockall::automock)]
pub trait NotesApi {
    /// GET /notes
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    /// GET /notes/{id}
    async fn get_note(&self, id: u32) -> Result<Note, ApiError>;
    /// POST /notes
    async fn create_note(&self, draft: NoteDraft) -> Result<Note, ApiError>;
    /// PUT /notes/{id}
    async fn update_note(&self, id: u32, draft: NoteDraft) -> Result<Note, ApiError>;
    /// DELETE /notes/{id}
    async fn delete_note(&self, id: u32) -> Result<Note, ApiError>;
}

/// [`NotesApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotesApi {
    /// `base_url` points at the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: u32) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

/// Decodes a JSON body, turning any non-2xx status into an error.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        tracing::error!("{} answered with {}", response.url(), status);
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response.json::<T>().await?)
}

impl NotesApi for HttpNotesApi {
    #[tracing::instrument(skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let response = self.client.get(self.notes_url()).send().await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_note(&self, id: u32) -> Result<Note, ApiError> {
        let response = self.client.get(self.note_url(id)).send().await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn create_note(&self, draft: NoteDraft) -> Result<Note, ApiError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&draft)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_note(&self, id: u32, draft: NoteDraft) -> Result<Note, ApiError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&draft)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_note(&self, id: u32) -> Result<Note, ApiError> {
        let response = self.client.delete(self.note_url(id)).send().await?;
        decode(response).await
    }
}
