use super::{BoundStatement, ParameterMapping, Value};

use indexmap::IndexMap;

/// Where a statement's SQL text and parameter mappings come from.
#[derive(Debug, Clone)]
pub enum SqlSource {
    /// Fixed text and mappings, configured up front.
    Static(StaticSource),

    /// Mutable text and mappings, overwritten in place between executions.
    ///
    /// Used by sub-statement descriptors so repeated splits of the same
    /// parent do not rebuild statement metadata. Not safe to switch while an
    /// execution is in flight; one executor instance is single-threaded.
    Switching(SwitchingSource),
}

impl SqlSource {
    pub fn bound(&self) -> BoundStatement {
        match self {
            SqlSource::Static(source) => source.bound(),
            SqlSource::Switching(source) => source.bound(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticSource {
    sql: String,
    parameter_mappings: Vec<ParameterMapping>,
    additional: IndexMap<String, Value>,
}

impl StaticSource {
    pub fn new(sql: impl Into<String>, parameter_mappings: Vec<ParameterMapping>) -> Self {
        StaticSource {
            sql: sql.into(),
            parameter_mappings,
            additional: IndexMap::new(),
        }
    }

    /// Adds a named parameter bound outside the positional list.
    pub fn additional_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional.insert(name.into(), value.into());
        self
    }

    fn bound(&self) -> BoundStatement {
        let mut bound = BoundStatement::new(self.sql.clone(), self.parameter_mappings.clone());
        for (name, value) in &self.additional {
            bound.set_additional_parameter(name.clone(), value.clone());
        }
        bound
    }
}

impl From<StaticSource> for SqlSource {
    fn from(source: StaticSource) -> Self {
        SqlSource::Static(source)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwitchingSource {
    sql: String,
    parameter_mappings: Vec<ParameterMapping>,
    parent_additional: IndexMap<String, Value>,
}

impl SwitchingSource {
    /// Overwrites the source for the next execution.
    ///
    /// Snapshots the parent's additional named parameters; `bound` copies
    /// through only the ones reachable from this source's own mappings.
    pub fn switch(
        &mut self,
        sql: impl Into<String>,
        parameter_mappings: Vec<ParameterMapping>,
        parent: &BoundStatement,
    ) {
        self.sql = sql.into();
        self.parent_additional = parameter_mappings
            .iter()
            .filter_map(|mapping| {
                let property = mapping.property();
                parent
                    .additional_parameter(property)
                    .map(|value| (property.to_string(), value.clone()))
            })
            .collect();
        self.parameter_mappings = parameter_mappings;
    }

    fn bound(&self) -> BoundStatement {
        let mut bound = BoundStatement::new(self.sql.clone(), self.parameter_mappings.clone());
        for (name, value) in &self.parent_additional {
            bound.set_additional_parameter(name.clone(), value.clone());
        }
        bound
    }
}

impl From<SwitchingSource> for SqlSource {
    fn from(source: SwitchingSource) -> Self {
        SqlSource::Switching(source)
    }
}
