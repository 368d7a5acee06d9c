mod bound_statement;
pub use bound_statement::BoundStatement;

mod command_type;
pub use command_type::CommandType;

mod parameter_mapping;
pub use parameter_mapping::ParameterMapping;

mod sql_source;
pub use sql_source::{SqlSource, StaticSource, SwitchingSource};

mod statement;
pub use statement::Statement;

mod statement_id;
pub use statement_id::StatementId;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
