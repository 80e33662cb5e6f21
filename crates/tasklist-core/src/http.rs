use anyhow::{Context, anyhow};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{RepositoryError, RepositoryResult};
use crate::repository::TaskRepository;
use crate::task::{NewTask, Task, TaskId};

const COLLECTION: &str = "tasks";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// REST client for the `tasks` collection resource.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    client: Client,
    collection_url: Url,
}

impl HttpTaskRepository {
    /// `base_url` is the API root; the collection is served at
    /// `{base_url}/tasks`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let collection_url = collection_url(base_url)?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(REQUEST_TIMEOUT);
        let client = builder
            .build()
            .context("failed building HTTP client for task API")?;

        debug!(url = %collection_url, "configured task API client");
        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn item_url(&self, id: &TaskId) -> RepositoryResult<Url> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RepositoryError::Network(format!(
                    "{} cannot take an id segment",
                    self.collection_url
                ))
            })?
            .push(&id.to_string());
        Ok(url)
    }
}

pub(crate) fn collection_url(base_url: &str) -> anyhow::Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(anyhow!("task API base URL is empty"));
    }

    let url = Url::parse(&format!("{trimmed}/{COLLECTION}"))
        .with_context(|| format!("invalid task API base URL: {base_url}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("task API base URL cannot hold a path: {base_url}"));
    }
    Ok(url)
}

fn transport_error(err: reqwest::Error) -> RepositoryError {
    if err.is_decode() {
        RepositoryError::Decode(err.to_string())
    } else {
        RepositoryError::Network(err.to_string())
    }
}

/// Map a non-success status onto the error taxonomy. `target` is the id the
/// request addressed, if any; a 404 without one is a broken endpoint rather
/// than a missing task.
async fn check_status(response: Response, target: Option<&TaskId>) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(%status, body = %body, "task API returned failure status");

    match (status, target) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(RepositoryError::NotFound(id.clone())),
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            Err(RepositoryError::Validation(if body.is_empty() {
                status.to_string()
            } else {
                body
            }))
        }
        _ => Err(RepositoryError::Network(format!("HTTP {status}"))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> RepositoryResult<T> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|err| RepositoryError::Decode(err.to_string()))
}

impl TaskRepository for HttpTaskRepository {
    #[instrument(skip(self), fields(url = %self.collection_url))]
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        let response = self
            .client
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        let tasks: Vec<Task> = decode(check_status(response, None).await?).await?;
        debug!(count = tasks.len(), "fetched task collection");
        Ok(tasks)
    }

    #[instrument(skip(self, draft), fields(assigned_to = %draft.assigned_to))]
    async fn create(&self, draft: &NewTask) -> RepositoryResult<Task> {
        let response = self
            .client
            .post(self.collection_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        let task: Task = decode(check_status(response, None).await?).await?;
        debug!(id = %task.id, "created task");
        Ok(task)
    }

    #[instrument(skip(self, task), fields(id = %task.id))]
    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let response = self
            .client
            .put(self.item_url(&task.id)?)
            .json(task)
            .send()
            .await
            .map_err(transport_error)?;
        decode(check_status(response, Some(&task.id)).await?).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &TaskId) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.item_url(id)?)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_appends_resource_once() {
        let url = collection_url("http://localhost:3001/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/tasks");

        let nested = collection_url("https://api.example.com/v1").unwrap();
        assert_eq!(nested.as_str(), "https://api.example.com/v1/tasks");
    }

    #[test]
    fn item_urls_escape_text_ids() {
        let repo = HttpTaskRepository::new("http://localhost:3001").unwrap();

        let numeric = repo.item_url(&TaskId::Int(12)).unwrap();
        assert_eq!(numeric.as_str(), "http://localhost:3001/tasks/12");

        let text = repo.item_url(&TaskId::from("a b")).unwrap();
        assert_eq!(text.as_str(), "http://localhost:3001/tasks/a%20b");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(collection_url("   ").is_err());
        assert!(collection_url("not a url").is_err());
        assert!(collection_url("mailto:someone@example.com").is_err());
    }
}
