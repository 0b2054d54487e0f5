use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 尚未正規化的員工資料列，欄位與 CSV 標頭一一對應
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployee {
    pub name: String,
    pub payroll_number: String,
    /// Free-text department label or an already canonical code.
    pub department: String,
    /// Short status code (`C`, `F`, ...) or an already canonical status.
    pub status: String,
    #[serde(default)]
    pub locker: Option<String>,
    pub start_date: String,
}

/// A normalized employee whose department and status belong to the
/// canonical sets of the mappings that produced it.
///
/// Only `Mappings::normalize` constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    pub(crate) name: String,
    pub(crate) payroll_number: String,
    pub(crate) department: String,
    pub(crate) status: String,
    pub(crate) locker: Option<String>,
    pub(crate) start_date: NaiveDate,
}

impl EmployeeRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payroll_number(&self) -> &str {
        &self.payroll_number
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn locker(&self) -> Option<&str> {
        self.locker.as_deref()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// How locker labels are quoted in the generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockerQuoting {
    /// Same escaping as every other string literal.
    #[default]
    Escaped,
    /// Wrapped in quotes with no escaping, matching older generated scripts.
    Verbatim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub locker_quoting: LockerQuoting,
    /// Maximum rows per INSERT statement, `None` for a single statement.
    pub batch_size: Option<usize>,
    pub include_template: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locker_quoting: LockerQuoting::default(),
            batch_size: None,
            include_template: true,
        }
    }
}

/// 產生的 SQL 腳本與其筆數
#[derive(Debug, Clone)]
pub struct SeedScript {
    pub sql: String,
    pub record_count: usize,
    pub statement_count: usize,
}
