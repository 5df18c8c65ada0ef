//! Resolved endpoint description.
//!
//! An endpoint is a URL plus the headers to send with it. Values may carry
//! `${env:VAR}` placeholders (the `.graphqlconfig` convention for keeping
//! secrets out of the file); they expand at resolution time.

use crate::error::LoadError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl Endpoint {
    /// Build an endpoint, expanding `${env:VAR}` placeholders in the URL
    /// and every header value.
    pub fn resolve(url: &str, headers: &BTreeMap<String, String>) -> Result<Self, LoadError> {
        let url = expand_env(url)?;
        let mut expanded = BTreeMap::new();
        for (name, value) in headers {
            expanded.insert(name.clone(), expand_env(value)?);
        }
        Ok(Endpoint {
            url,
            headers: expanded,
        })
    }
}

fn expand_env(text: &str) -> Result<String, LoadError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("${env:") {
        out.push_str(&rest[..start]);
        let after = &rest[start + "${env:".len()..];
        let Some(end) = after.find('}') else {
            return Err(LoadError::Config(format!(
                "Unclosed ${{env:...}} placeholder in \"{}\"",
                text
            )));
        };
        let name = &after[..end];
        let value = std::env::var(name).map_err(|_| {
            LoadError::Config(format!("Environment variable {} is not set", name))
        })?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_placeholders_is_verbatim() {
        let endpoint = Endpoint::resolve("http://localhost:4000/graphql", &BTreeMap::new()).unwrap();
        assert_eq!(endpoint.url, "http://localhost:4000/graphql");
        assert!(endpoint.headers.is_empty());
    }

    #[test]
    fn resolve_expands_env_placeholders() {
        std::env::set_var("GQLOAD_TEST_TOKEN", "s3cret");
        let headers = BTreeMap::from([(
            "Authorization".to_string(),
            "Bearer ${env:GQLOAD_TEST_TOKEN}".to_string(),
        )]);
        let endpoint = Endpoint::resolve("http://localhost/graphql", &headers).unwrap();
        assert_eq!(endpoint.headers["Authorization"], "Bearer s3cret");
    }

    #[test]
    fn resolve_fails_on_missing_variable() {
        let err = Endpoint::resolve("${env:GQLOAD_TEST_UNSET_VARIABLE}/graphql", &BTreeMap::new())
            .unwrap_err();
        match err {
            LoadError::Config(msg) => assert!(msg.contains("GQLOAD_TEST_UNSET_VARIABLE")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn resolve_fails_on_unclosed_placeholder() {
        let err = Endpoint::resolve("http://x/${env:OOPS", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }
}
