use crate::domain::model::RawEmployee;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

const BUILTIN_EXAMPLES: &[(&str, &str, &str, &str, Option<&str>, &str)] = &[
    ("Bui, Thi Hong Luu", "6731", "LAMB_BR", "CASUAL", Some("316"), "2020-01-01"),
    ("Chen, Li Hong", "6616", "LAMB_BR", "CASUAL", None, "2020-01-01"),
    ("He, Wujie (Jay)", "6548", "LAMB_BR", "FULL_TIME", Some("172"), "2020-01-01"),
];

/// The three example employees printed when no input file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinExamples;

impl RecordSource for BuiltinExamples {
    fn description(&self) -> String {
        "Example for first few employees".to_string()
    }

    fn read_records(&self) -> Result<Vec<RawEmployee>> {
        Ok(BUILTIN_EXAMPLES
            .iter()
            .map(|(name, number, dept, status, locker, date)| RawEmployee {
                name: name.to_string(),
                payroll_number: number.to_string(),
                department: dept.to_string(),
                status: status.to_string(),
                locker: locker.map(str::to_string),
                start_date: date.to_string(),
            })
            .collect())
    }
}

/// Employee rows from a delimited file with the headers
/// `name,payroll_number,department,status,locker,start_date`.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn read_from<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawEmployee>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in csv_reader.deserialize() {
            let row: RawEmployee = row?;
            rows.push(row);
        }
        Ok(rows)
    }
}

impl RecordSource for CsvSource {
    fn description(&self) -> String {
        format!("Employees loaded from {}", self.path.display())
    }

    fn read_records(&self) -> Result<Vec<RawEmployee>> {
        tracing::debug!("Reading employee rows from {}", self.path.display());
        let file = File::open(&self.path)?;
        let rows = Self::read_from(file, self.delimiter)?;
        tracing::debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}
