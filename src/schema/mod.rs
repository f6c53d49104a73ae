//! Declarative structural schema for `conf.yml`.
//!
//! The schema is a JSON Schema subset loaded from a data asset, not
//! hand-coded checks, so new config keys only need a schema edit.
//!
//! Supported keywords: `type` (single or union), `properties`, `required`,
//! `items`, `additionalProperties` (boolean), `pattern`, `minLength`,
//! `minimum`, `maximum`, `enum`, `description`, and `$ref` into
//! `definitions` / `$defs`. Any other keyword is ignored, which keeps older
//! binaries working with newer schema files.
//!
//! Objects are permissive unless a node sets `additionalProperties: false`.

mod validate;

pub use validate::{Validation, validate};

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Schema asset shipped with the binary.
pub const BUILTIN_SCHEMA: &str = include_str!("../embed/config-schema.json");

// ============================================================================
// SchemaError
// ============================================================================

/// Errors in the schema asset itself (never in the document).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("schema node at `{path}` must be an object")]
    NotAnObject { path: String },

    #[error("unknown type `{name}` at `{path}`")]
    UnknownType { path: String, name: String },

    #[error("keyword `{keyword}` at `{path}` must be {expected}")]
    InvalidKeyword {
        path: String,
        keyword: &'static str,
        expected: &'static str,
    },

    #[error("invalid pattern at `{path}`")]
    Pattern {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("unresolved reference `{reference}` at `{path}`")]
    UnresolvedRef { path: String, reference: String },

    #[error("reference cycle through definition `{0}`")]
    RefCycle(String),
}

// ============================================================================
// JsonType
// ============================================================================

/// Instance types a `type` keyword can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "null" => Self::Null,
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "string" => Self::String,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => return None,
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Most specific type of a document value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if is_integer(n) => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        match (self, Self::of(value)) {
            // every integer is also a number
            (Self::Number, Self::Integer) => true,
            (expected, actual) => *expected == actual,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_integer(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

// ============================================================================
// Node
// ============================================================================

/// One compiled schema node.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub types: Vec<JsonType>,
    pub properties: Vec<(String, Node)>,
    pub required: Vec<String>,
    pub items: Option<Box<Node>>,
    pub additional_properties: bool,
    pub pattern: Option<Regex>,
    pub min_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub enum_values: Vec<Value>,
    pub description: Option<String>,
    /// Definition name from `$ref`.
    pub reference: Option<String>,
}

impl Node {
    pub fn property(&self, name: &str) -> Option<&Node> {
        self.properties
            .iter()
            .find_map(|(key, node)| (key == name).then_some(node))
    }
}

// ============================================================================
// Schema
// ============================================================================

/// A parsed schema, ready for [`validate`].
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) root: Node,
    pub(crate) definitions: HashMap<String, Node>,
    source: Value,
}

impl Schema {
    /// Parse the schema asset shipped with the binary.
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_str(BUILTIN_SCHEMA)
    }

    /// Parse a schema from JSON text.
    pub fn from_str(content: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Compile a schema from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let mut parser = Parser::default();
        let root = parser.node(value, "#")?;

        let mut definitions = HashMap::new();
        let object = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: "#".to_string(),
        })?;
        for keyword in ["definitions", "$defs"] {
            let Some(defs) = object.get(keyword) else {
                continue;
            };
            let defs = defs.as_object().ok_or(SchemaError::InvalidKeyword {
                path: "#".to_string(),
                keyword,
                expected: "an object",
            })?;
            for (name, def) in defs {
                let node = parser.node(def, &format!("#/{keyword}/{name}"))?;
                definitions.insert(name.clone(), node);
            }
        }

        for (path, reference) in parser.references {
            if !definitions.contains_key(&reference) {
                return Err(SchemaError::UnresolvedRef { path, reference });
            }
        }
        check_ref_cycles(&definitions)?;

        Ok(Self {
            root,
            definitions,
            source: value.clone(),
        })
    }

    /// The schema as it was loaded.
    pub fn as_value(&self) -> &Value {
        &self.source
    }

    pub(crate) fn definition(&self, name: &str) -> Option<&Node> {
        self.definitions.get(name)
    }
}

/// A definition that is only a `$ref` chain back to itself would make
/// validation loop without consuming any of the document.
fn check_ref_cycles(definitions: &HashMap<String, Node>) -> Result<(), SchemaError> {
    for start in definitions.keys() {
        let mut seen = HashSet::new();
        let mut current = start.as_str();
        while let Some(next) = definitions
            .get(current)
            .and_then(|node| node.reference.as_deref())
        {
            if !seen.insert(current) {
                return Err(SchemaError::RefCycle(start.clone()));
            }
            current = next;
        }
    }
    Ok(())
}

// ============================================================================
// Parser
// ============================================================================

#[derive(Default)]
struct Parser {
    /// (schema path, definition name) pairs, resolved after all definitions
    /// are known.
    references: Vec<(String, String)>,
}

impl Parser {
    fn node(&mut self, value: &Value, path: &str) -> Result<Node, SchemaError> {
        let object = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: path.to_string(),
        })?;

        let mut node = Node {
            additional_properties: true,
            ..Node::default()
        };

        if let Some(types) = object.get("type") {
            node.types = Self::types(types, path)?;
        }

        if let Some(properties) = object.get("properties") {
            let properties = properties.as_object().ok_or(SchemaError::InvalidKeyword {
                path: path.to_string(),
                keyword: "properties",
                expected: "an object",
            })?;
            for (name, sub) in properties {
                let sub = self.node(sub, &format!("{path}/properties/{name}"))?;
                node.properties.push((name.clone(), sub));
            }
        }

        if let Some(required) = object.get("required") {
            node.required = Self::string_list(required, path, "required")?;
        }

        if let Some(items) = object.get("items") {
            node.items = Some(Box::new(self.node(items, &format!("{path}/items"))?));
        }

        match object.get("additionalProperties") {
            None | Some(Value::Object(_)) => {}
            Some(Value::Bool(allowed)) => node.additional_properties = *allowed,
            Some(_) => {
                return Err(SchemaError::InvalidKeyword {
                    path: path.to_string(),
                    keyword: "additionalProperties",
                    expected: "a boolean",
                });
            }
        }

        if let Some(pattern) = Self::string(object, "pattern", path)? {
            node.pattern = Some(Regex::new(pattern).map_err(|source| SchemaError::Pattern {
                path: path.to_string(),
                source,
            })?);
        }

        node.min_length = match Self::number(object, "minLength", path)? {
            None => None,
            Some(n) => Some(n.as_u64().ok_or(SchemaError::InvalidKeyword {
                path: path.to_string(),
                keyword: "minLength",
                expected: "a non-negative integer",
            })?),
        };
        node.minimum = Self::number(object, "minimum", path)?.and_then(|n| n.as_f64());
        node.maximum = Self::number(object, "maximum", path)?.and_then(|n| n.as_f64());

        if let Some(values) = object.get("enum") {
            node.enum_values = values
                .as_array()
                .ok_or(SchemaError::InvalidKeyword {
                    path: path.to_string(),
                    keyword: "enum",
                    expected: "an array",
                })?
                .clone();
        }

        node.description = Self::string(object, "description", path)?.map(str::to_string);

        if let Some(reference) = Self::string(object, "$ref", path)? {
            let name = reference
                .strip_prefix("#/definitions/")
                .or_else(|| reference.strip_prefix("#/$defs/"))
                .ok_or_else(|| SchemaError::UnresolvedRef {
                    path: path.to_string(),
                    reference: reference.to_string(),
                })?;
            self.references.push((path.to_string(), name.to_string()));
            node.reference = Some(name.to_string());
        }

        Ok(node)
    }

    fn types(value: &Value, path: &str) -> Result<Vec<JsonType>, SchemaError> {
        let names = match value {
            Value::String(name) => vec![name.clone()],
            Value::Array(_) => Self::string_list(value, path, "type")?,
            _ => {
                return Err(SchemaError::InvalidKeyword {
                    path: path.to_string(),
                    keyword: "type",
                    expected: "a string or an array of strings",
                });
            }
        };
        names
            .into_iter()
            .map(|name| {
                JsonType::parse(&name).ok_or_else(|| SchemaError::UnknownType {
                    path: path.to_string(),
                    name,
                })
            })
            .collect()
    }

    fn string_list(
        value: &Value,
        path: &str,
        keyword: &'static str,
    ) -> Result<Vec<String>, SchemaError> {
        let invalid = || SchemaError::InvalidKeyword {
            path: path.to_string(),
            keyword,
            expected: "an array of strings",
        };
        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
            .collect()
    }

    fn string<'v>(
        object: &'v Map<String, Value>,
        keyword: &'static str,
        path: &str,
    ) -> Result<Option<&'v str>, SchemaError> {
        match object.get(keyword) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(SchemaError::InvalidKeyword {
                path: path.to_string(),
                keyword,
                expected: "a string",
            }),
        }
    }

    fn number<'v>(
        object: &'v Map<String, Value>,
        keyword: &'static str,
        path: &str,
    ) -> Result<Option<&'v serde_json::Number>, SchemaError> {
        match object.get(keyword) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n)),
            Some(_) => Err(SchemaError::InvalidKeyword {
                path: path.to_string(),
                keyword,
                expected: "a number",
            }),
        }
    }
}
