// Application layer: wires settings to concrete sources and sinks.

use crate::adapters::{BuiltinExamples, CsvSource, FileSink, StdoutSink};
use crate::config::SeedSettings;
use crate::core::engine::{SeedEngine, SeedReport};
use crate::core::pipeline::SeedPipeline;
use crate::domain::model::EmployeeRecord;
use crate::domain::ports::{RecordSource, ScriptSink};
use crate::utils::error::Result;

pub type DynSeedPipeline = SeedPipeline<Box<dyn RecordSource>, Box<dyn ScriptSink>>;

pub fn build_pipeline(settings: &SeedSettings) -> DynSeedPipeline {
    let source: Box<dyn RecordSource> = match &settings.input {
        Some(path) => {
            Box::new(CsvSource::new(path).with_delimiter(settings.effective_delimiter()))
        }
        None => Box::new(BuiltinExamples),
    };
    let sink: Box<dyn ScriptSink> = match &settings.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    };

    SeedPipeline::new(
        source,
        sink,
        settings.mappings.clone(),
        settings.options.clone(),
    )
}

pub fn run(settings: &SeedSettings) -> Result<SeedReport> {
    SeedEngine::new(build_pipeline(settings)).run()
}

pub fn dry_run(settings: &SeedSettings) -> Result<Vec<EmployeeRecord>> {
    SeedEngine::new(build_pipeline(settings)).dry_run()
}
