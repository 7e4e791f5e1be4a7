//! HTTP client helpers (REST).

use crate::core::error::ApiError;
use gloo_net::http::Request;
use postview_models::{Author, Comment, Endpoints, Post};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub endpoints: Endpoints,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network {
                url: url.clone(),
                message: err.to_string(),
            })?;
        if !response.ok() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }
        response.json::<T>().await.map_err(|err| ApiError::Decode {
            url,
            message: err.to_string(),
        })
    }

    pub(crate) async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(self.endpoints.posts()).await
    }

    pub(crate) async fn fetch_author(&self, user_id: u64) -> Result<Author, ApiError> {
        self.get_json(self.endpoints.user(user_id)).await
    }

    pub(crate) async fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(self.endpoints.comments_for(post_id)).await
    }
}
