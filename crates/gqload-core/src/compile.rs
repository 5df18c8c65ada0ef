//! Per-record operation compilation and batch document assembly.
//!
//! Each input record becomes at most one aliased operation; records that
//! cannot satisfy a required argument are discarded, never fatal. The
//! emitter joins the survivors under the root keyword and the caller gets
//! a [`Diagnostics`] value describing what happened to every record.

use crate::coerce::{coerce, Coerced};
use crate::mapping::FieldMapping;
use crate::schema::{FieldDef, ParsedSchema, TypeDescriptor};
use serde::Serialize;
use serde_json::Value;

/// One input row: field name to raw value.
pub type Record = serde_json::Map<String, Value>;

/// Root operation keyword wrapping every batch document.
pub const MUTATION_ROOT: &str = "mutation";

/// An argument name with its classified type, computed once per run.
#[derive(Debug, Clone)]
pub struct ClassifiedArgument {
    pub name: String,
    pub ty: TypeDescriptor,
}

/// Classify every declared argument of `field`, in declaration order.
pub fn classify_arguments(field: &FieldDef) -> Vec<ClassifiedArgument> {
    field
        .arguments
        .iter()
        .map(|a| ClassifiedArgument {
            name: a.name.clone(),
            ty: TypeDescriptor::of(&a.ty),
        })
        .collect()
}

/// A list-typed value that never became a sequence and was emitted as-is.
#[derive(Debug, Clone, Serialize)]
pub struct ParseWarning {
    pub record: usize,
    pub argument: String,
    pub value: String,
}

/// A record excluded from the document, with the field names that failed
/// to supply its required arguments.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    pub record: usize,
    pub missing: Vec<String>,
}

/// One record's compiled operation.
///
/// The alias is a pure function of the record's input index, so surviving
/// aliases never shift when other records are discarded.
#[derive(Debug, Clone)]
pub struct CompiledOperation {
    pub alias: String,
    pub arguments: Vec<String>,
    pub satisfied: bool,
    pub missing: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

pub fn compile_record(
    record: &Record,
    index: usize,
    arguments: &[ClassifiedArgument],
    mapping: &FieldMapping,
    delimiter: &str,
) -> CompiledOperation {
    let mut op = CompiledOperation {
        alias: format!("_{}", index),
        arguments: Vec::new(),
        satisfied: true,
        missing: Vec::new(),
        warnings: Vec::new(),
    };

    for arg in arguments {
        let field = mapping.resolve(&arg.name);
        let raw = record.get(field);

        // Once a required argument is missing the record is discarded
        // regardless; keep collecting missing-field names but skip the
        // literal work.
        if !op.satisfied {
            if arg.ty.is_required && matches!(raw, None | Some(Value::Null)) {
                op.missing.push(field.to_string());
            }
            continue;
        }

        match coerce(raw, &arg.ty, delimiter) {
            Coerced::Literal(text) => {
                op.arguments.push(format!("{}: {}", arg.name, text));
            }
            Coerced::ScalarForList(text) => {
                op.warnings.push(ParseWarning {
                    record: index,
                    argument: arg.name.clone(),
                    value: text.clone(),
                });
                op.arguments.push(format!("{}: {}", arg.name, text));
            }
            Coerced::Omit => {}
            Coerced::RequiredViolation => {
                op.satisfied = false;
                op.missing.push(field.to_string());
            }
        }
    }

    op
}

/// The field selection appended to every operation, computed once per run.
///
/// Object-shaped return types select their first `ID`-typed field, falling
/// back to their first declared field; scalar returns select nothing.
pub fn return_selection(schema: &ParsedSchema, field: &FieldDef) -> String {
    let Some(object) = schema.object(field.ty.base_name()) else {
        return String::new();
    };
    let Some(first) = object.fields.first() else {
        return String::new();
    };
    let picked = object
        .fields
        .iter()
        .find(|f| f.ty.base_name() == "ID")
        .unwrap_or(first);
    format!("{{ {} }}", picked.name)
}

/// Join the satisfied operations, in input order, under `root_kind`.
///
/// Zero survivors still produce the wrapper with an empty body; whether an
/// empty batch is worth sending is the caller's decision.
pub fn emit_document(
    operations: &[CompiledOperation],
    field_name: &str,
    root_kind: &str,
    return_selection: &str,
) -> String {
    let body: Vec<String> = operations
        .iter()
        .filter(|op| op.satisfied)
        .map(|op| {
            format!(
                "{} : {} ( {} ) {}",
                op.alias,
                field_name,
                op.arguments.join(","),
                return_selection
            )
        })
        .collect();
    format!("{} {{ \n{}\n}}", root_kind, body.join("\n"))
}

/// Structured facts about one compilation run, for the caller to render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub records: usize,
    pub satisfied: usize,
    pub discarded: usize,
    pub skipped: Vec<SkippedRecord>,
    pub warnings: Vec<ParseWarning>,
}

/// Compile every record against one mutation field and emit the batch
/// document.
pub fn compile_document(
    schema: &ParsedSchema,
    field: &FieldDef,
    records: &[Record],
    mapping: &FieldMapping,
    delimiter: &str,
) -> (String, Diagnostics) {
    let arguments = classify_arguments(field);
    let selection = return_selection(schema, field);

    let operations: Vec<CompiledOperation> = records
        .iter()
        .enumerate()
        .map(|(index, record)| compile_record(record, index, &arguments, mapping, delimiter))
        .collect();

    let mut diagnostics = Diagnostics {
        records: records.len(),
        ..Diagnostics::default()
    };
    for (index, op) in operations.iter().enumerate() {
        if op.satisfied {
            diagnostics.satisfied += 1;
        } else {
            diagnostics.discarded += 1;
            diagnostics.skipped.push(SkippedRecord {
                record: index,
                missing: op.missing.clone(),
            });
        }
        diagnostics.warnings.extend(op.warnings.iter().cloned());
    }

    let document = emit_document(&operations, &field.name, MUTATION_ROOT, &selection);
    (document, diagnostics)
}
