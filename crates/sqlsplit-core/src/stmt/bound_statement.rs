use super::{ParameterMapping, Value};

use indexmap::IndexMap;

/// A statement's text and parameter bindings, resolved for one execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    sql: String,
    parameter_mappings: Vec<ParameterMapping>,
    additional: IndexMap<String, Value>,
}

impl BoundStatement {
    pub fn new(sql: impl Into<String>, parameter_mappings: Vec<ParameterMapping>) -> Self {
        BoundStatement {
            sql: sql.into(),
            parameter_mappings,
            additional: IndexMap::new(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameter_mappings(&self) -> &[ParameterMapping] {
        &self.parameter_mappings
    }

    /// Named parameters bound outside the positional list.
    pub fn additional_parameter(&self, name: &str) -> Option<&Value> {
        self.additional.get(name)
    }

    pub fn has_additional_parameter(&self, name: &str) -> bool {
        self.additional.contains_key(name)
    }

    pub fn set_additional_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.additional.insert(name.into(), value.into());
    }

    /// Resolves the value one mapping binds, given the caller's parameter
    /// object.
    ///
    /// Resolution order: additional parameter by name, then record field by
    /// name, then the scalar parameter object itself. Unresolvable names bind
    /// null.
    pub fn parameter_value(&self, mapping: &ParameterMapping, params: &Value) -> Value {
        if let Some(value) = self.additional.get(mapping.property()) {
            return value.clone();
        }
        match params {
            Value::Record(record) => record
                .get(mapping.property())
                .cloned()
                .unwrap_or(Value::Null),
            other => other.clone(),
        }
    }
}
