use crate::core::Pipeline;
use crate::domain::model::EmployeeRecord;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub destination: String,
    pub record_count: usize,
    pub statement_count: usize,
}

pub struct SeedEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SeedEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<SeedReport> {
        tracing::info!("Starting seed script generation");

        let records = self.prepare()?;

        tracing::debug!("Rendering insert script...");
        let script = self.pipeline.render(&records)?;
        let record_count = script.record_count;
        let statement_count = script.statement_count;

        tracing::debug!("Writing script...");
        let destination = self.pipeline.load(script)?;
        tracing::info!(
            "Wrote {} employees in {} statement(s) to {}",
            record_count,
            statement_count,
            destination
        );

        Ok(SeedReport {
            destination,
            record_count,
            statement_count,
        })
    }

    /// 只執行讀取與正規化，不輸出腳本
    pub fn dry_run(&self) -> Result<Vec<EmployeeRecord>> {
        tracing::info!("Dry run: validating employee rows only");
        let records = self.prepare()?;
        // rendering also rejects an empty record set
        self.pipeline.render(&records)?;
        Ok(records)
    }

    fn prepare(&self) -> Result<Vec<EmployeeRecord>> {
        tracing::debug!("Reading employee rows...");
        let raw = self.pipeline.extract()?;
        tracing::info!("Read {} employee rows", raw.len());

        tracing::debug!("Normalizing departments and statuses...");
        let records = self.pipeline.transform(raw)?;
        tracing::info!("Normalized {} records", records.len());
        Ok(records)
    }
}
