/// Binding rule for one positional `?` placeholder.
///
/// Mappings are order-significant: the parent statement's mapping list is
/// generated in left-to-right document order and each mapping is consumed by
/// exactly one sub-statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMapping {
    property: String,
}

impl ParameterMapping {
    pub fn new(property: impl Into<String>) -> Self {
        ParameterMapping {
            property: property.into(),
        }
    }

    /// The property name used to pull the value out of the parameter object.
    pub fn property(&self) -> &str {
        &self.property
    }
}
