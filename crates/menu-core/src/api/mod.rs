//! Backend Client Layer
//!
//! Abstract access to the food REST API. `HttpFoodApi` is the real one;
//! tests drive the view through an in-memory implementation.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{FoodId, FoodItem, NewFood};

pub use http::HttpFoodApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// A request that did not produce what the caller asked for
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, CORS rejection, invalid URL
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },
    /// Server answered with a non-2xx status
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    /// Response body was not the expected JSON
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// CRUD contract of the food backend.
///
/// Futures are not `Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<FoodItem>>;

    /// `POST /foods`. The response body is ignored.
    async fn create_food(&self, food: &NewFood) -> ApiResult<()>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, food: &FoodItem) -> ApiResult<()>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: &FoodId) -> ApiResult<()>;
}
