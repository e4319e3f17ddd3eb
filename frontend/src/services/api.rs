use gloo::net::http::Request;
use shared::{ApiError, Category, CategoryListResponse, CreateRecordRequest, Record};

/// API client for the remote record-keeping service.
///
/// A thin wrapper over two REST endpoints: no retry, batching, auth, or
/// caching.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the available categories.
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api/categories/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CategoryListResponse>().await {
                        Ok(data) => Ok(data.results),
                        Err(e) => Err(ApiError::Decode(e.to_string())),
                    }
                } else {
                    let status = response.status();
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(ApiError::Http { status, message })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Create a new expense/income record.
    pub async fn create_record(&self, request: CreateRecordRequest) -> Result<Record, ApiError> {
        let url = format!("{}/api/records/", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Record>().await {
                        Ok(record) => Ok(record),
                        Err(e) => Err(ApiError::Decode(e.to_string())),
                    }
                } else {
                    let status = response.status();
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(ApiError::Http { status, message })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
