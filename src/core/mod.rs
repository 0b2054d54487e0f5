pub mod engine;
pub mod mapping;
pub mod pipeline;
pub mod script;
pub mod sql;

pub use crate::domain::model::{EmployeeRecord, RawEmployee, SeedScript};
pub use crate::domain::ports::{Pipeline, RecordSource, ScriptSink};
pub use crate::utils::error::Result;
