//! HTTP Food API
//!
//! `reqwest` client for the food endpoints. Uses `fetch` when compiled to
//! wasm32.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};

use super::{ApiError, ApiResult, FoodApi};
use crate::config::MenuConfig;
use crate::domain::{FoodId, FoodItem, NewFood};

/// Characters that cannot appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// API client for the food backend
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    base_url: String,
    client: Client,
}

impl HttpFoodApi {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            client: Client::new(),
        }
    }

    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    pub fn food_url(&self, id: &FoodId) -> String {
        format!(
            "{}/foods/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    /// Send and reject anything outside 2xx
    async fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> ApiResult<Response> {
        log::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|e| ApiError::Transport {
            method,
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<FoodItem>> {
        let url = self.foods_url();
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        response.json().await.map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<()> {
        let url = self.foods_url();
        self.send("POST", &url, self.client.post(&url).json(food)).await?;
        Ok(())
    }

    async fn update_food(&self, food: &FoodItem) -> ApiResult<()> {
        let url = self.food_url(&food.id);
        self.send("PUT", &url, self.client.put(&url).json(food)).await?;
        Ok(())
    }

    async fn delete_food(&self, id: &FoodId) -> ApiResult<()> {
        let url = self.food_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpFoodApi {
        HttpFoodApi::new(&MenuConfig::new("https://menu.example.com/").unwrap())
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(api().foods_url(), "https://menu.example.com/foods");
    }

    #[test]
    fn test_item_url_uses_id_as_one_segment() {
        assert_eq!(
            api().food_url(&FoodId::new("65a1f0c2")),
            "https://menu.example.com/foods/65a1f0c2"
        );
        assert_eq!(
            api().food_url(&FoodId::new("a/b c?")),
            "https://menu.example.com/foods/a%2Fb%20c%3F"
        );
    }

    #[tokio::test]
    #[ignore = "opens a loopback socket"]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on loopback refuses connections on any sane host
        let api = HttpFoodApi::new(&MenuConfig::new("http://127.0.0.1:9").unwrap());

        let err = api.list_foods().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { method: "GET", .. }));
    }
}
