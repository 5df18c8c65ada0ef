//! Error types for gqload.
//!
//! [`LoadError`] covers configuration problems that abort a run before any
//! document is produced, plus transport and GraphQL-level failures from the
//! endpoint. Per-record outcomes (skipped records, list parse warnings) are
//! not errors — they are reported through
//! [`Diagnostics`](crate::compile::Diagnostics).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single GraphQL error from the endpoint's response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

/// Errors that can occur while compiling or sending a batch document.
#[derive(Debug)]
pub enum LoadError {
    /// Project configuration is unreadable or incomplete.
    Config(String),
    /// The schema file could not be read or parsed.
    Schema(String),
    /// The requested mutation does not exist on the mutation root.
    MutationNotFound {
        name: String,
        available: Vec<String>,
    },
    /// The field mapping is not a JSON object of strings.
    Mapping(String),
    /// Network or HTTP transport error.
    Network(reqwest::Error),
    /// Non-2xx HTTP response from the endpoint.
    Http { status: u16, body: String },
    /// GraphQL errors returned by the endpoint.
    GraphQL { errors: Vec<GraphQLError> },
    /// The response carried no `data` value.
    MissingData(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Schema(msg) => write!(f, "Schema error: {}", msg),
            Self::MutationNotFound { name, available } => {
                if available.is_empty() {
                    write!(f, "Mutation \"{}\" not found", name)
                } else {
                    write!(
                        f,
                        "Mutation \"{}\" not found. Available mutations: {}",
                        name,
                        available.join(", ")
                    )
                }
            }
            Self::Mapping(msg) => write!(f, "Invalid mapping: {}", msg),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Http { status, body } => write!(f, "HTTP error {}: {}", status, body),
            Self::GraphQL { errors } => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        let mut parts = vec![e.message.clone()];
                        if let Some(path) = &e.path {
                            let path_str: Vec<String> =
                                path.iter().map(|p| p.to_string()).collect();
                            parts.push(format!("at {}", path_str.join(".")));
                        }
                        if let Some(ext) = &e.extensions {
                            parts.push(format!("({})", ext));
                        }
                        parts.join(" ")
                    })
                    .collect();
                write!(f, "GraphQL errors: {}", msgs.join("; "))
            }
            Self::MissingData(msg) => write!(f, "Missing data in response: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}
