// Adapters layer: concrete record sources and script sinks.

pub mod sink;
pub mod source;

pub use sink::{FileSink, StdoutSink};
pub use source::{BuiltinExamples, CsvSource};
