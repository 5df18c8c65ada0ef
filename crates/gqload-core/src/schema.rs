//! GraphQL SDL parsing and argument type classification.
//!
//! Parses a schema file into the pieces the compiler needs: the mutation
//! root's fields (the operations that can be called), the object types
//! (for computing return selections), and structural type references.
//! A [`TypeDescriptor`] is derived once per argument and drives all
//! coercion decisions downstream.

use crate::error::LoadError;
use apollo_parser::cst;
use apollo_parser::Parser;
use std::fmt;

/// A GraphQL type reference (named type with list/non-null wrapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GqlType {
    Named(String),
    List(Box<GqlType>),
    NonNull(Box<GqlType>),
}

impl GqlType {
    /// The innermost named type, stripping all wrappers.
    pub fn base_name(&self) -> &str {
        match self {
            GqlType::Named(name) => name,
            GqlType::List(inner) => inner.base_name(),
            GqlType::NonNull(inner) => inner.base_name(),
        }
    }

    /// Whether a list wrapper occurs at any depth.
    pub fn is_list(&self) -> bool {
        match self {
            GqlType::Named(_) => false,
            GqlType::List(_) => true,
            GqlType::NonNull(inner) => inner.is_list(),
        }
    }
}

impl fmt::Display for GqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GqlType::Named(name) => write!(f, "{}", name),
            GqlType::List(inner) => write!(f, "[{}]", inner),
            GqlType::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// Classified shape of one argument type, computed once per argument.
///
/// `is_required` reflects only the outermost wrapper: `[String!]` is an
/// optional argument whose elements are non-null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub named_type: String,
    pub is_list: bool,
    pub is_required: bool,
}

impl TypeDescriptor {
    pub fn of(ty: &GqlType) -> Self {
        TypeDescriptor {
            named_type: ty.base_name().to_string(),
            is_list: ty.is_list(),
            is_required: matches!(ty, GqlType::NonNull(_)),
        }
    }
}

/// One declared argument of a mutation field.
#[derive(Debug, Clone)]
pub struct ArgumentDef {
    pub name: String,
    pub ty: GqlType,
}

/// A field on the mutation root or on an object type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    pub ty: GqlType,
    pub arguments: Vec<ArgumentDef>,
}

/// An object type definition.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// The parts of a parsed schema that batch loading needs.
#[derive(Debug)]
pub struct ParsedSchema {
    /// Fields of the mutation root type, in declaration order.
    pub mutation_fields: Vec<FieldDef>,
    /// Object type definitions other than the operation roots.
    pub objects: Vec<ObjectDef>,
}

impl ParsedSchema {
    /// Look up a mutation-root field by name.
    pub fn mutation_field(&self, name: &str) -> Result<&FieldDef, LoadError> {
        self.mutation_fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| LoadError::MutationNotFound {
                name: name.to_string(),
                available: self.mutation_names(),
            })
    }

    /// Names of all mutation-root fields, in declaration order.
    pub fn mutation_names(&self) -> Vec<String> {
        self.mutation_fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Look up an object type definition by name.
    pub fn object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.name == name)
    }
}

pub fn parse(schema_text: &str) -> Result<ParsedSchema, LoadError> {
    let parser = Parser::new(schema_text);
    let tree = parser.parse();

    let errors: Vec<String> = tree.errors().map(|e| e.message().to_string()).collect();
    if !errors.is_empty() {
        return Err(LoadError::Schema(errors.join("; ")));
    }

    let doc = tree.document();
    let definitions: Vec<cst::Definition> = doc.definitions().collect();

    // A `schema { mutation: ... }` definition may rename the operation
    // roots; default names apply otherwise.
    let mut query_root = "Query".to_string();
    let mut mutation_root = "Mutation".to_string();
    let mut subscription_root = "Subscription".to_string();
    for def in &definitions {
        if let cst::Definition::SchemaDefinition(s) = def {
            for root in s.root_operation_type_definitions() {
                let Some(name) = root
                    .named_type()
                    .and_then(|n| n.name())
                    .map(|n| n.text().to_string())
                else {
                    continue;
                };
                let Some(op) = root.operation_type() else {
                    continue;
                };
                if op.mutation_token().is_some() {
                    mutation_root = name;
                } else if op.subscription_token().is_some() {
                    subscription_root = name;
                } else {
                    query_root = name;
                }
            }
        }
    }

    let mut mutation_fields = Vec::new();
    let mut objects = Vec::new();
    for def in &definitions {
        if let cst::Definition::ObjectTypeDefinition(o) = def {
            let name = extract_name(&o.name());
            let fields = extract_fields(&o.fields_definition());
            if name == mutation_root {
                mutation_fields = fields;
            } else if name != query_root && name != subscription_root {
                objects.push(ObjectDef { name, fields });
            }
        }
    }

    Ok(ParsedSchema {
        mutation_fields,
        objects,
    })
}

fn extract_name(name: &Option<cst::Name>) -> String {
    name.as_ref()
        .map(|n| n.text().to_string())
        .unwrap_or_default()
}

fn extract_description(desc: &Option<cst::Description>) -> Option<String> {
    desc.as_ref()
        .and_then(|d| d.string_value())
        .map(String::from)
        .filter(|s| !s.is_empty())
}

fn extract_type(ty: &Option<cst::Type>) -> GqlType {
    match ty {
        None => GqlType::Named("String".to_string()),
        Some(t) => match t {
            cst::Type::NamedType(nt) => GqlType::Named(extract_name(&nt.name())),
            cst::Type::ListType(lt) => GqlType::List(Box::new(extract_type(&lt.ty()))),
            cst::Type::NonNullType(nnt) => {
                if let Some(named) = nnt.named_type() {
                    GqlType::NonNull(Box::new(GqlType::Named(extract_name(&named.name()))))
                } else if let Some(list) = nnt.list_type() {
                    GqlType::NonNull(Box::new(GqlType::List(Box::new(extract_type(
                        &list.ty(),
                    )))))
                } else {
                    GqlType::NonNull(Box::new(GqlType::Named("String".to_string())))
                }
            }
        },
    }
}

fn extract_fields(fields_def: &Option<cst::FieldsDefinition>) -> Vec<FieldDef> {
    let Some(fd) = fields_def else {
        return Vec::new();
    };
    fd.field_definitions()
        .map(|f| FieldDef {
            name: extract_name(&f.name()),
            description: extract_description(&f.description()),
            ty: extract_type(&f.ty()),
            arguments: extract_arguments(&f.arguments_definition()),
        })
        .collect()
}

fn extract_arguments(args_def: &Option<cst::ArgumentsDefinition>) -> Vec<ArgumentDef> {
    let Some(ad) = args_def else {
        return Vec::new();
    };
    ad.input_value_definitions()
        .map(|iv| ArgumentDef {
            name: extract_name(&iv.name()),
            ty: extract_type(&iv.ty()),
        })
        .collect()
}
