use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::config::ProjectConfig;
use crate::output::{self, Format};

#[derive(Debug, Serialize, Tabled)]
pub struct MutationRow {
    pub name: String,
    pub arguments: String,
    pub returns: String,
    pub description: String,
}

/// List the operations the schema's mutation root offers.
pub fn run(config_path: &Path, format: Format) -> anyhow::Result<()> {
    let config = ProjectConfig::read(config_path)?;
    let schema = config.load_schema()?;

    let rows: Vec<MutationRow> = schema
        .mutation_fields
        .iter()
        .map(|field| MutationRow {
            name: field.name.clone(),
            arguments: field
                .arguments
                .iter()
                .map(|a| format!("{}: {}", a.name, a.ty))
                .collect::<Vec<_>>()
                .join(", "),
            returns: field.ty.to_string(),
            description: field.description.clone().unwrap_or_default(),
        })
        .collect();

    output::print_table(&rows, format);
    Ok(())
}
