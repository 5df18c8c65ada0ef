use anyhow::bail;
use clap::Args;
use gqload_core::{compile_document, Client, FieldMapping, LoadError, Record};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::output::{self, Format};
use crate::sources;

/// Compile a CSV or JSON file into one batch mutation and send it.
#[derive(Debug, Args)]
pub struct LoadCmd {
    /// CSV file to load (overrides the config's load.csv).
    #[arg(long, short = 'c')]
    pub csv: Option<PathBuf>,

    /// JSON file to load (overrides the config's load.json).
    #[arg(long, short = 'j')]
    pub json: Option<PathBuf>,

    /// Mutation to call.
    #[arg(long, short = 'm')]
    pub mutation: Option<String>,

    /// Endpoint name to use.
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,

    /// Field-to-argument name mapping, as a JSON object.
    #[arg(long, short = 'p')]
    pub mapping: Option<String>,

    /// Delimiter for splitting scalar text into list values.
    #[arg(long, short = 'd')]
    pub delim: Option<String>,

    /// Compile and print the document without sending it.
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(cmd: LoadCmd, config_path: &Path, format: Format) -> anyhow::Result<()> {
    let config = ProjectConfig::read(config_path)?;
    let schema = config.load_schema()?;

    let Some(mutation) = cmd
        .mutation
        .clone()
        .or_else(|| config.extensions.load.mutation.clone())
    else {
        bail!("no mutation specified; use --mutation or set extensions.load.mutation");
    };
    let field = schema.mutation_field(&mutation)?;
    match &field.description {
        Some(desc) => output::status(format!("Using mutation \"{}\": {}", field.name, desc)),
        None => output::status(format!("Using mutation \"{}\"", field.name)),
    }

    let (records, source) = read_records(&cmd, &config)?;
    output::status(format!(
        "Done parsing {}: {} rows",
        source.display(),
        records.len()
    ));

    let pairs: BTreeMap<String, String> = match &cmd.mapping {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| LoadError::Mapping(format!("{} ({})", text, e)))?,
        None => config.extensions.load.mapping.clone(),
    };
    if !pairs.is_empty() {
        output::notice(format!("Using mapping: {}", serde_json::to_string(&pairs)?));
    }
    let mapping = FieldMapping::new(pairs);

    let delimiter = cmd
        .delim
        .clone()
        .or_else(|| config.extensions.load.delim.clone())
        .unwrap_or_else(|| ";".to_string());

    let (document, diagnostics) =
        compile_document(&schema, field, &records, &mapping, &delimiter);

    for skipped in &diagnostics.skipped {
        output::notice(format!(
            "Record {} skipped: missing required field(s) {}",
            skipped.record,
            skipped.missing.join(", ")
        ));
    }
    for warning in &diagnostics.warnings {
        output::notice(format!(
            "Record {}: value {} for list argument \"{}\" is not a list; sending as-is",
            warning.record, warning.value, warning.argument
        ));
    }
    output::status(format!(
        "Compiled {} of {} records into operations",
        diagnostics.satisfied, diagnostics.records
    ));

    if cmd.dry_run {
        println!("{}", document);
        return Ok(());
    }

    if diagnostics.satisfied == 0 {
        output::notice("No operations to send.");
        return Ok(());
    }

    let (endpoint_name, endpoint) = config.endpoint(cmd.endpoint.as_deref())?;
    output::status(format!("Using endpoint {}: {}", endpoint_name, endpoint.url));

    let preview: String = document.chars().take(200).collect();
    output::notice(format!("Sending mutations:\n{}...", preview));

    let client = Client::new(endpoint);
    match client.execute(&document).await {
        Ok(data) => {
            output::status("✔ Call succeeded");
            output::print_one(&data, format);
            Ok(())
        }
        Err(e) => {
            output::failure("✗ Call failed");
            Err(e.into())
        }
    }
}

/// Pick the record source: flags beat config, CSV beats JSON.
fn read_records(cmd: &LoadCmd, config: &ProjectConfig) -> anyhow::Result<(Vec<Record>, PathBuf)> {
    if let Some(path) = &cmd.csv {
        return Ok((sources::read_csv(path)?, path.clone()));
    }
    if let Some(path) = &cmd.json {
        return Ok((sources::read_json(path)?, path.clone()));
    }
    if let Some(file) = &config.extensions.load.csv {
        let path = config.resolve_path(file);
        return Ok((sources::read_csv(&path)?, path));
    }
    if let Some(file) = &config.extensions.load.json {
        let path = config.resolve_path(file);
        return Ok((sources::read_json(&path)?, path));
    }
    bail!("no csv or json file given; use --csv/--json or configure extensions.load");
}
