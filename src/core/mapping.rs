use crate::domain::model::{EmployeeRecord, RawEmployee};
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{validate_canonical_code, validate_non_empty_string, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const BUILTIN_DEPARTMENTS: &[(&str, &str)] = &[
    ("Lamb Boning", "LAMB_BR"),
    ("Beef Boning", "BEEF_BR"),
    ("Cold Store", "COLD_STORE"),
    // no Drover department in the schema
    ("Drover", "MAINTENANCE"),
    ("Kill Floor", "KILL_FLOOR"),
    ("Load Out", "LOADOUT"),
    ("Rendering", "RENDERING"),
    ("Skin Shed", "SKIN_SHED"),
    ("QA", "QA"),
    ("Whales", "KILL_FLOOR"),
    ("Security", "MAINTENANCE"),
    ("Laundry", "MAINTENANCE"),
    ("Admin/Procurement", "MAINTENANCE"),
    ("AAO", "MAINTENANCE"),
    ("Yard", "MAINTENANCE"),
    ("Sales", "MAINTENANCE"),
    ("Admin-Export", "MAINTENANCE"),
    ("HALAL", "HALAL"),
    // display labels used by the roster app
    ("Lamb BR", "LAMB_BR"),
    ("Beef BR", "BEEF_BR"),
    ("Loadout", "LOADOUT"),
    ("Hook Room", "HOOK_ROOM"),
    ("Maintenance", "MAINTENANCE"),
    ("Cleaning", "CLEANING"),
];

const BUILTIN_STATUSES: &[(&str, &str)] = &[
    ("C", "CASUAL"),
    ("F", "FULL_TIME"),
    ("LH", "FULL_TIME"),
    ("S", "FULL_TIME"),
];

const DATE_FORMAT: &str = "%Y-%m-%d";

fn required_field<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SeedError::ValidationError {
            message: format!("{} is empty", field),
        });
    }
    Ok(value)
}

/// Lookup tables from source labels to the canonical codes stored in the
/// database. The value sets of the two tables are the canonical sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mappings {
    pub departments: BTreeMap<String, String>,
    pub statuses: BTreeMap<String, String>,
}

fn to_table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for Mappings {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Mappings {
    pub fn builtin() -> Self {
        Self {
            departments: to_table(BUILTIN_DEPARTMENTS),
            statuses: to_table(BUILTIN_STATUSES),
        }
    }

    pub fn department_codes(&self) -> BTreeSet<&str> {
        self.departments.values().map(String::as_str).collect()
    }

    pub fn status_values(&self) -> BTreeSet<&str> {
        self.statuses.values().map(String::as_str).collect()
    }

    /// Maps a department label to its code. Canonical codes pass through.
    pub fn normalize_department(&self, label: &str) -> Result<String> {
        let label = label.trim();
        if let Some(code) = self.departments.get(label) {
            return Ok(code.clone());
        }
        if self.department_codes().contains(label) {
            return Ok(label.to_string());
        }
        Err(SeedError::UnknownDepartment {
            label: label.to_string(),
        })
    }

    /// Maps a short status code to its canonical status. Canonical values pass through.
    pub fn normalize_status(&self, code: &str) -> Result<String> {
        let code = code.trim();
        if let Some(status) = self.statuses.get(code) {
            return Ok(status.clone());
        }
        if self.status_values().contains(code) {
            return Ok(code.to_string());
        }
        Err(SeedError::UnknownStatus {
            code: code.to_string(),
        })
    }

    /// 將原始資料列轉成已驗證的員工記錄，任何欄位不合法即拒絕整列
    pub fn normalize(&self, raw: &RawEmployee) -> Result<EmployeeRecord> {
        let name = required_field("name", &raw.name)?;
        let payroll_number = required_field("payroll_number", &raw.payroll_number)?;

        let department = self.normalize_department(&raw.department)?;
        let status = self.normalize_status(&raw.status)?;

        let locker = raw
            .locker
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let date_text = raw.start_date.trim();
        let start_date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            SeedError::InvalidDate {
                value: date_text.to_string(),
            }
        })?;

        Ok(EmployeeRecord {
            name: name.to_string(),
            payroll_number: payroll_number.to_string(),
            department,
            status,
            locker,
            start_date,
        })
    }

    /// Normalizes every row, reporting the first failure with its 1-based row number.
    pub fn normalize_all(&self, rows: &[RawEmployee]) -> Result<Vec<EmployeeRecord>> {
        rows.iter()
            .enumerate()
            .map(|(i, raw)| self.normalize(raw).map_err(|e| e.at_row(i + 1)))
            .collect()
    }
}

impl Validate for Mappings {
    fn validate(&self) -> Result<()> {
        for (field, table) in [
            ("mapping.departments", &self.departments),
            ("mapping.statuses", &self.statuses),
        ] {
            if table.is_empty() {
                return Err(SeedError::ConfigError {
                    message: format!("{} must contain at least one entry", field),
                });
            }
            for (label, code) in table {
                validate_non_empty_string(field, label)?;
                validate_canonical_code(field, code)?;
            }
        }
        Ok(())
    }
}
