//! Access to the Category Directory and Post Storage services.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::form::PostSubmission;
use crate::types::{Category, CreatedPost};

const CATEGORIES_PATH: &str = "api/v1/categories";
const POSTS_PATH: &str = "api/v1/posts";

/// Remote operations the form depends on.
///
/// Futures are not required to be `Send`: the form runs on a single UI event
/// loop, and browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait PostApi {
    /// List every category, in server order.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Persist a new post.
    async fn create_post(&self, submission: &PostSubmission) -> Result<CreatedPost>;
}

/// `PostApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpPostApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpPostApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing reqwest client (connection pool, proxies, ...).
    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Turn a response into `T`, treating any non-2xx status as failure.
    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait(?Send)]
impl PostApi for HttpPostApi {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.config.endpoint(CATEGORIES_PATH)?;
        tracing::debug!(%url, "Fetching categories");

        let resp = self.client.get(url).send().await?;
        let categories: Vec<Category> = Self::read_json(resp).await?;

        tracing::debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }

    async fn create_post(&self, submission: &PostSubmission) -> Result<CreatedPost> {
        let url = self.config.endpoint(POSTS_PATH)?;
        tracing::debug!(%url, tags = submission.tags.len(), "Creating post");

        // .json() sets Content-Type: application/json
        let resp = self.client.post(url).json(submission).send().await?;
        let post: CreatedPost = Self::read_json(resp).await?;

        tracing::debug!(id = ?post.id, "Post created");
        Ok(post)
    }
}
