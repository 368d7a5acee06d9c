use sqlsplit_core::{
    driver::{BatchKeyGenerator, StatementHandle},
    stmt::{StatementId, Value},
    Result,
};

/// Writes engine-generated row keys back into record parameter objects.
///
/// Runs once per slot after its batch executes; the keys come back in row
/// order, so they pair up with the accumulated parameter objects.
#[derive(Debug)]
pub struct GeneratedKeys {
    property: String,
}

impl GeneratedKeys {
    pub fn new(property: impl Into<String>) -> Self {
        GeneratedKeys {
            property: property.into(),
        }
    }
}

impl BatchKeyGenerator for GeneratedKeys {
    fn process_batch(
        &self,
        _statement: &StatementId,
        handle: &mut dyn StatementHandle,
        parameters: &mut [Value],
    ) -> Result<()> {
        let keys = handle.generated_keys()?;

        // Non-record parameter objects have nowhere to put a key; skip them.
        for (parameter, key) in parameters.iter_mut().zip(keys) {
            if let Some(record) = parameter.as_record_mut() {
                record.insert(self.property.clone(), key);
            }
        }

        Ok(())
    }
}
