//! Document validation against a compiled [`Schema`].
//!
//! Single pass, no short-circuit: every broken rule becomes one
//! [`Violation`], in document order, so the editor can show them all at once.

use super::{JsonType, Node, Schema};
use crate::config::{FieldPath, Violation, Violations};
use serde::Serialize;
use serde_json::Value;

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl Validation {
    /// Hand the violations over as a collected diagnostics list.
    pub fn into_violations(self) -> Violations {
        let mut collected = Violations::new();
        for violation in self.violations {
            collected.push(violation);
        }
        collected
    }
}

/// Validate `document` against `schema`.
///
/// Pure: the document is only read, and nothing is fetched.
pub fn validate(document: &Value, schema: &Schema) -> Validation {
    let mut validator = Validator {
        schema,
        violations: Vec::new(),
    };
    validator.check(&schema.root, document, &FieldPath::root());

    Validation {
        valid: validator.violations.is_empty(),
        violations: validator.violations,
    }
}

struct Validator<'s> {
    schema: &'s Schema,
    violations: Vec<Violation>,
}

impl Validator<'_> {
    fn report(&mut self, path: FieldPath, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    /// Returns `false` when `value` has the wrong type for `node`.
    fn check(&mut self, node: &Node, value: &Value, path: &FieldPath) -> bool {
        // references are resolved when the schema is parsed; a type error
        // from the definition is the only one reported at this path
        if let Some(name) = &node.reference
            && let Some(target) = self.schema.definition(name)
            && !self.check(target, value, path)
        {
            return false;
        }

        // Other keywords are meaningless on the wrong type
        if !node.types.is_empty() && !node.types.iter().any(|t| t.matches(value)) {
            self.report(
                path.clone(),
                format!(
                    "must be {}, found {}",
                    join_types(&node.types),
                    JsonType::of(value)
                ),
            );
            return false;
        }

        if !node.enum_values.is_empty() && !node.enum_values.contains(value) {
            let allowed: Vec<String> = node.enum_values.iter().map(Value::to_string).collect();
            self.report(
                path.clone(),
                format!("must be one of: {}", allowed.join(", ")),
            );
        }

        match value {
            Value::String(s) => self.check_string(node, s, path),
            Value::Number(n) => self.check_number(node, n, path),
            Value::Array(elements) => {
                if let Some(items) = &node.items {
                    for (i, element) in elements.iter().enumerate() {
                        self.check(items, element, &path.index(i));
                    }
                }
            }
            Value::Object(object) => self.check_object(node, object, path),
            Value::Null | Value::Bool(_) => {}
        }
        true
    }

    fn check_string(&mut self, node: &Node, s: &str, path: &FieldPath) {
        if let Some(min) = node.min_length
            && (s.chars().count() as u64) < min
        {
            let message = if min == 1 {
                "must not be empty".to_string()
            } else {
                format!("must be at least {min} characters long")
            };
            self.report(path.clone(), message);
        }
        if let Some(pattern) = &node.pattern
            && !pattern.is_match(s)
        {
            self.report(
                path.clone(),
                format!("must match pattern `{}`", pattern.as_str()),
            );
        }
    }

    fn check_number(&mut self, node: &Node, n: &serde_json::Number, path: &FieldPath) {
        let Some(n) = n.as_f64() else {
            return;
        };
        if let Some(min) = node.minimum
            && n < min
        {
            self.report(path.clone(), format!("must be >= {min}"));
        }
        if let Some(max) = node.maximum
            && n > max
        {
            self.report(path.clone(), format!("must be <= {max}"));
        }
    }

    fn check_object(
        &mut self,
        node: &Node,
        object: &serde_json::Map<String, Value>,
        path: &FieldPath,
    ) {
        for name in &node.required {
            if !object.contains_key(name) {
                let mut violation =
                    Violation::new(path.key(name), "required property is missing");
                if let Some(hint) = node.property(name).and_then(|p| p.description.as_ref()) {
                    violation = violation.with_hint(hint.clone());
                }
                self.violations.push(violation);
            }
        }

        for (key, child) in object {
            match node.property(key) {
                Some(sub) => {
                    self.check(sub, child, &path.key(key));
                }
                None if !node.additional_properties => {
                    self.report(path.key(key), "unknown property");
                }
                None => {}
            }
        }
    }
}

fn join_types(types: &[JsonType]) -> String {
    let names: Vec<&str> = types.iter().map(JsonType::name).collect();
    names.join(" or ")
}
