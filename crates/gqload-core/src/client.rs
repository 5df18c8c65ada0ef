//! GraphQL endpoint client.
//!
//! Sends one compiled batch document to a resolved [`Endpoint`] and hands
//! back the response's `data` value. No retries and no response
//! interpretation beyond surfacing the GraphQL error collection.

use crate::endpoint::Endpoint;
use crate::error::{GraphQLError, LoadError};

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Endpoint,
}

/// Raw GraphQL response shape.
#[derive(serde::Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLError>>,
}

impl Client {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn url(&self) -> &str {
        &self.endpoint.url
    }

    /// Send one batch document and return the response's `data` value.
    pub async fn execute(&self, document: &str) -> Result<serde_json::Value, LoadError> {
        let body = serde_json::json!({ "query": document });

        let mut request = self
            .http
            .post(&self.endpoint.url)
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("gqload/{}", env!("CARGO_PKG_VERSION")))
            .json(&body);
        for (name, value) in &self.endpoint.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let gql_response: GraphQLResponse = response.json().await?;

        if let Some(errors) = gql_response.errors {
            if !errors.is_empty() {
                return Err(LoadError::GraphQL { errors });
            }
        }

        gql_response
            .data
            .ok_or_else(|| LoadError::MissingData("no data in response".to_string()))
    }
}
