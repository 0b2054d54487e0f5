use crate::core::mapping::Mappings;
use crate::core::script::InsertScriptGenerator;
use crate::domain::model::{EmployeeRecord, RawEmployee, RenderOptions, SeedScript};
use crate::domain::ports::{Pipeline, RecordSource, ScriptSink};
use crate::utils::error::Result;

/// Reads rows from a source, normalizes them through the mappings and
/// writes the rendered script to a sink.
pub struct SeedPipeline<R: RecordSource, S: ScriptSink> {
    source: R,
    sink: S,
    mappings: Mappings,
    generator: InsertScriptGenerator,
}

impl<R: RecordSource, S: ScriptSink> SeedPipeline<R, S> {
    pub fn new(source: R, sink: S, mappings: Mappings, options: RenderOptions) -> Self {
        Self {
            source,
            sink,
            mappings,
            generator: InsertScriptGenerator::new(options),
        }
    }
}

impl<R: RecordSource, S: ScriptSink> Pipeline for SeedPipeline<R, S> {
    fn extract(&self) -> Result<Vec<RawEmployee>> {
        self.source.read_records()
    }

    fn transform(&self, data: Vec<RawEmployee>) -> Result<Vec<EmployeeRecord>> {
        let records = self.mappings.normalize_all(&data)?;
        for record in &records {
            tracing::debug!(
                "{} ({}) -> {} / {}",
                record.name(),
                record.payroll_number(),
                record.department(),
                record.status()
            );
        }
        Ok(records)
    }

    fn render(&self, records: &[EmployeeRecord]) -> Result<SeedScript> {
        self.generator
            .render_script(&self.source.description(), records)
    }

    fn load(&self, script: SeedScript) -> Result<String> {
        self.sink.write_script(&script.sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BuiltinExamples;
    use crate::utils::error::SeedError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySink {
        written: RefCell<Vec<String>>,
    }

    impl ScriptSink for MemorySink {
        fn write_script(&self, sql: &str) -> Result<String> {
            self.written.borrow_mut().push(sql.to_string());
            Ok("memory".to_string())
        }
    }

    struct FixedSource(Vec<RawEmployee>);

    impl RecordSource for FixedSource {
        fn description(&self) -> String {
            "Fixed rows".to_string()
        }

        fn read_records(&self) -> Result<Vec<RawEmployee>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_pipeline_phases() {
        let pipeline = SeedPipeline::new(
            BuiltinExamples,
            MemorySink::default(),
            Mappings::builtin(),
            RenderOptions::default(),
        );

        let raw = pipeline.extract().unwrap();
        let records = pipeline.transform(raw).unwrap();
        let script = pipeline.render(&records).unwrap();
        assert_eq!(script.record_count, 3);
        assert!(script.sql.contains("-- Example for first few employees:\n"));

        assert_eq!(pipeline.load(script).unwrap(), "memory");
        assert_eq!(pipeline.sink.written.borrow().len(), 1);
    }

    #[test]
    fn test_transform_rejects_unknown_status() {
        let pipeline = SeedPipeline::new(
            FixedSource(vec![RawEmployee {
                name: "Tran, Bao".to_string(),
                payroll_number: "8001".to_string(),
                department: "Laundry".to_string(),
                status: "X".to_string(),
                locker: None,
                start_date: "2024-02-01".to_string(),
            }]),
            MemorySink::default(),
            Mappings::builtin(),
            RenderOptions::default(),
        );

        let raw = pipeline.extract().unwrap();
        let err = pipeline.transform(raw).unwrap_err();
        assert!(matches!(err, SeedError::InvalidRecord { row: 1, .. }));
    }
}
