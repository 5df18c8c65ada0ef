//! `.graphqlconfig` project configuration.
//!
//! The file is JSON: a `schemaPath` plus `extensions.endpoints` (name to
//! URL or `{ url, headers }`) and `extensions.load` defaults for the load
//! command. Relative paths resolve against the config file's directory.

use anyhow::{bail, Context};
use gqload_core::{Endpoint, ParsedSchema};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    schema_path: Option<String>,
    #[serde(default)]
    pub extensions: Extensions,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct Extensions {
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointConfig>,
    #[serde(default)]
    pub load: LoadOptions,
}

/// An endpoint entry: a bare URL string or a full object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EndpointConfig {
    Url(String),
    Full {
        url: String,
        #[serde(default)]
        headers: BTreeMap<String, String>,
    },
}

/// Defaults for the load command, all overridable by flags.
#[derive(Debug, Default, Deserialize)]
pub struct LoadOptions {
    pub csv: Option<String>,
    pub json: Option<String>,
    pub mutation: Option<String>,
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
    pub delim: Option<String>,
}

impl ProjectConfig {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let mut config: ProjectConfig = serde_json::from_str(&text)
            .with_context(|| format!("could not parse config file {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Resolve a possibly-relative path against the config file's directory.
    pub fn resolve_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Parse the configured schema file.
    pub fn load_schema(&self) -> anyhow::Result<ParsedSchema> {
        let Some(file) = &self.schema_path else {
            bail!("no schemaPath in config");
        };
        let path = self.resolve_path(file);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read schema {}", path.display()))?;
        Ok(gqload_core::schema::parse(&text)?)
    }

    /// Pick an endpoint by name, or the only configured one.
    pub fn endpoint(&self, name: Option<&str>) -> anyhow::Result<(String, Endpoint)> {
        let endpoints = &self.extensions.endpoints;
        if endpoints.is_empty() {
            bail!("no endpoints configured");
        }
        let names = || {
            endpoints
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let (key, entry) = match name {
            Some(n) => {
                let entry = endpoints.get(n).ok_or_else(|| {
                    anyhow::anyhow!("endpoint \"{}\" not found; configured: {}", n, names())
                })?;
                (n.to_string(), entry)
            }
            None => {
                if endpoints.len() > 1 {
                    bail!(
                        "several endpoints configured ({}); pick one with --endpoint",
                        names()
                    );
                }
                let (k, v) = endpoints.iter().next().unwrap();
                (k.clone(), v)
            }
        };
        let endpoint = match entry {
            EndpointConfig::Url(url) => Endpoint::resolve(url, &BTreeMap::new())?,
            EndpointConfig::Full { url, headers } => Endpoint::resolve(url, headers)?,
        };
        Ok((key, endpoint))
    }
}
