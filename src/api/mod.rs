//! Backend API Bindings
//!
//! JSON-over-POST calls to the outfit backend, organized by domain.
//! The [`Backend`] trait is the seam between the workflows and the network.

mod outfit;
mod recommend;
mod wardrobe;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use thiserror::Error;

pub use outfit::*;
pub use recommend::*;
pub use wardrobe::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid endpoint url: {0}")]
    Url(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Outfit backend operations. Futures are local (not `Send`) because the
/// browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait Backend {
    async fn recommend(&self, request: &RecommendRequest) -> ApiResult<RecommendResponse>;

    async fn create_outfit(&self, request: &CreateOutfitRequest) -> ApiResult<CreateOutfitResponse>;

    async fn delete_outfit(&self, request: &DeleteOutfitRequest) -> ApiResult<()>;

    async fn remove_wardrobe_item(&self, request: &RemoveWardrobeItemRequest) -> ApiResult<()>;
}

// ========================
// Endpoints
// ========================

pub const RECOMMEND: &str = "recommend";
pub const CREATE_OUTFIT: &str = "create_outfit";
pub const DELETE_OUTFIT: &str = "delete_outfit";
pub const REMOVE_WARDROBE_ITEM: &str = "remove_wardrobe_item";

/// Resolve the API base (e.g. `api/`) against the page URL
pub fn resolve_base(page_url: &str, api_base: &str) -> ApiResult<Url> {
    let page = Url::parse(page_url).map_err(|e| ApiError::Url(e.to_string()))?;
    let mut base = api_base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    page.join(&base).map_err(|e| ApiError::Url(e.to_string()))
}

// ========================
// HTTP Backend
// ========================

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn endpoint(&self, name: &str) -> ApiResult<Url> {
        self.base.join(name).map_err(|e| ApiError::Url(e.to_string()))
    }

    async fn post<B: Serialize + ?Sized>(&self, name: &str, body: &B) -> ApiResult<reqwest::Response> {
        let url = self.endpoint(name)?;
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn recommend(&self, request: &RecommendRequest) -> ApiResult<RecommendResponse> {
        let response = self.post(RECOMMEND, request).await?;
        response
            .json::<RecommendResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_outfit(&self, request: &CreateOutfitRequest) -> ApiResult<CreateOutfitResponse> {
        let response = self.post(CREATE_OUTFIT, request).await?;
        // Any 2xx counts as created; the body is informational.
        let body = response.text().await.unwrap_or_default();
        Ok(CreateOutfitResponse::parse_lenient(&body))
    }

    async fn delete_outfit(&self, request: &DeleteOutfitRequest) -> ApiResult<()> {
        self.post(DELETE_OUTFIT, request).await?;
        Ok(())
    }

    async fn remove_wardrobe_item(&self, request: &RemoveWardrobeItemRequest) -> ApiResult<()> {
        self.post(REMOVE_WARDROBE_ITEM, request).await?;
        Ok(())
    }
}
