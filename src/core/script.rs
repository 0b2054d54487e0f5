use crate::core::sql::{escape_sql_literal, format_locker_value};
use crate::domain::model::{EmployeeRecord, LockerQuoting, RenderOptions, SeedScript};
use crate::utils::error::{Result, SeedError};
use std::fmt::Write;

const INSERT_HEADER: &str = "INSERT INTO employees (name, english_name, department_id, employment_status, locker_number, start_date) VALUES";

const SCRIPT_HEADER: &str = "\
-- Generated INSERT script for all employees
-- Run this in Supabase SQL Editor

";

// placeholder row is live SQL, matching scripts already in circulation
const TEMPLATE_BLOCK: &str = "
-- Template for inserting employees:
INSERT INTO employees (name, english_name, department_id, employment_status, locker_number, start_date) VALUES
('Employee Name', 'Payroll Number', (SELECT id FROM departments WHERE name = 'DEPT_NAME'), 'CASUAL'::employment_status, 'LOCKER', 'YYYY-MM-DD');

-- To use this script:
-- 1. Replace the placeholders with actual data
-- 2. Add ::employment_status after CASUAL or FULL_TIME
-- 3. Use NULL (no quotes) for empty locker numbers
-- 4. Use (SELECT id FROM departments WHERE name = 'DEPT_NAME') for department_id

";

/// Renders the employees seed script.
#[derive(Debug, Clone, Default)]
pub struct InsertScriptGenerator {
    options: RenderOptions,
}

impl InsertScriptGenerator {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render_header() -> &'static str {
        SCRIPT_HEADER
    }

    pub fn render_template_block() -> &'static str {
        TEMPLATE_BLOCK
    }

    fn render_row(record: &EmployeeRecord, quoting: LockerQuoting) -> String {
        // department and status are canonical codes, already checked by Mappings
        format!(
            "({}, {}, (SELECT id FROM departments WHERE name = '{}'), '{}'::employment_status, {}, '{}')",
            escape_sql_literal(Some(record.name())),
            escape_sql_literal(Some(record.payroll_number())),
            record.department(),
            record.status(),
            format_locker_value(record.locker(), quoting),
            record.start_date().format("%Y-%m-%d"),
        )
    }

    /// One multi-row INSERT statement, without a trailing newline.
    pub fn render_example_insert(
        records: &[EmployeeRecord],
        quoting: LockerQuoting,
    ) -> Result<String> {
        if records.is_empty() {
            return Err(SeedError::EmptyRecordSet);
        }

        let mut sql = String::from(INSERT_HEADER);
        let last = records.len() - 1;
        for (i, record) in records.iter().enumerate() {
            sql.push('\n');
            sql.push_str(&Self::render_row(record, quoting));
            sql.push(if i < last { ',' } else { ';' });
        }
        Ok(sql)
    }

    /// 組合完整腳本：標頭、範本區塊、分隔空行、段落註解與 INSERT 語句
    pub fn render_script(&self, description: &str, records: &[EmployeeRecord]) -> Result<SeedScript> {
        if records.is_empty() {
            return Err(SeedError::EmptyRecordSet);
        }

        let batch_size = self.options.batch_size.unwrap_or(records.len()).max(1);

        let mut sql = String::from(Self::render_header());
        if self.options.include_template {
            sql.push_str(Self::render_template_block());
        }
        sql.push('\n');
        // String writes never fail
        let _ = writeln!(sql, "-- {}:", description);

        let mut statement_count = 0;
        for chunk in records.chunks(batch_size) {
            if statement_count > 0 {
                sql.push('\n');
            }
            sql.push_str(&Self::render_example_insert(chunk, self.options.locker_quoting)?);
            sql.push('\n');
            statement_count += 1;
        }

        tracing::debug!(
            "Rendered {} records into {} statement(s)",
            records.len(),
            statement_count
        );

        Ok(SeedScript {
            sql,
            record_count: records.len(),
            statement_count,
        })
    }
}
