use crate::domain::model::{EmployeeRecord, RawEmployee, SeedScript};
use crate::utils::error::Result;

/// Where employee rows come from.
pub trait RecordSource {
    /// Heading printed above the generated INSERT statements.
    fn description(&self) -> String;
    fn read_records(&self) -> Result<Vec<RawEmployee>>;
}

/// Where the rendered script goes. Returns a human readable destination.
pub trait ScriptSink {
    fn write_script(&self, sql: &str) -> Result<String>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<RawEmployee>>;
    fn transform(&self, data: Vec<RawEmployee>) -> Result<Vec<EmployeeRecord>>;
    fn render(&self, records: &[EmployeeRecord]) -> Result<SeedScript>;
    fn load(&self, script: SeedScript) -> Result<String>;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn read_records(&self) -> Result<Vec<RawEmployee>> {
        (**self).read_records()
    }
}

impl<T: ScriptSink + ?Sized> ScriptSink for Box<T> {
    fn write_script(&self, sql: &str) -> Result<String> {
        (**self).write_script(sql)
    }
}
