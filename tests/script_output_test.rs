use anyhow::Result;
use employee_seed::adapters::BuiltinExamples;
use employee_seed::domain::ports::RecordSource;
use employee_seed::{app, InsertScriptGenerator, LockerQuoting, Mappings, RenderOptions, SeedSettings};
use tempfile::TempDir;

const EXPECTED_INSERT: &str = "\
INSERT INTO employees (name, english_name, department_id, employment_status, locker_number, start_date) VALUES
('Bui, Thi Hong Luu', '6731', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'CASUAL'::employment_status, '316', '2020-01-01'),
('Chen, Li Hong', '6616', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'CASUAL'::employment_status, NULL, '2020-01-01'),
('He, Wujie (Jay)', '6548', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'FULL_TIME'::employment_status, '172', '2020-01-01');";

// Full output of the legacy generator, kept so existing runbooks diff cleanly.
const LEGACY_SCRIPT: &str = "\
-- Generated INSERT script for all employees
-- Run this in Supabase SQL Editor


-- Template for inserting employees:
INSERT INTO employees (name, english_name, department_id, employment_status, locker_number, start_date) VALUES
('Employee Name', 'Payroll Number', (SELECT id FROM departments WHERE name = 'DEPT_NAME'), 'CASUAL'::employment_status, 'LOCKER', 'YYYY-MM-DD');

-- To use this script:
-- 1. Replace the placeholders with actual data
-- 2. Add ::employment_status after CASUAL or FULL_TIME
-- 3. Use NULL (no quotes) for empty locker numbers
-- 4. Use (SELECT id FROM departments WHERE name = 'DEPT_NAME') for department_id


-- Example for first few employees:
INSERT INTO employees (name, english_name, department_id, employment_status, locker_number, start_date) VALUES
('Bui, Thi Hong Luu', '6731', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'CASUAL'::employment_status, '316', '2020-01-01'),
('Chen, Li Hong', '6616', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'CASUAL'::employment_status, NULL, '2020-01-01'),
('He, Wujie (Jay)', '6548', (SELECT id FROM departments WHERE name = 'LAMB_BR'), 'FULL_TIME'::employment_status, '172', '2020-01-01');
";

fn builtin_records() -> Result<Vec<employee_seed::EmployeeRecord>> {
    let raw = BuiltinExamples.read_records()?;
    Ok(Mappings::builtin().normalize_all(&raw)?)
}

#[test]
fn test_builtin_examples_render_verbatim() -> Result<()> {
    let records = builtin_records()?;
    let sql = InsertScriptGenerator::render_example_insert(&records, LockerQuoting::Escaped)?;
    assert_eq!(sql, EXPECTED_INSERT);

    // the legacy quoting produces the same bytes for these lockers
    let legacy = InsertScriptGenerator::render_example_insert(&records, LockerQuoting::Verbatim)?;
    assert_eq!(legacy, EXPECTED_INSERT);
    Ok(())
}

#[test]
fn test_default_script_layout() -> Result<()> {
    let records = builtin_records()?;
    let script = InsertScriptGenerator::new(RenderOptions::default())
        .render_script(&BuiltinExamples.description(), &records)?;

    let expected = format!(
        "{}{}\n-- Example for first few employees:\n{}\n",
        InsertScriptGenerator::render_header(),
        InsertScriptGenerator::render_template_block(),
        EXPECTED_INSERT
    );
    assert_eq!(script.sql, expected);
    assert!(script
        .sql
        .starts_with("-- Generated INSERT script for all employees\n-- Run this in Supabase SQL Editor\n\n"));
    assert!(script.sql.ends_with(&format!("{}\n", EXPECTED_INSERT)));
    assert_eq!(script.record_count, 3);
    assert_eq!(script.statement_count, 1);
    Ok(())
}

#[test]
fn test_default_run_matches_legacy_script() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("seed.sql");
    let settings = SeedSettings {
        output: Some(output.clone()),
        ..SeedSettings::default()
    };

    app::run(&settings)?;

    assert_eq!(std::fs::read_to_string(&output)?, LEGACY_SCRIPT);
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let generator = InsertScriptGenerator::default();
    let first = generator.render_script("Run", &builtin_records()?)?;
    let second = generator.render_script("Run", &builtin_records()?)?;
    assert_eq!(first.sql, second.sql);
    Ok(())
}

#[test]
fn test_rendered_departments_are_canonical() -> Result<()> {
    let mappings = Mappings::builtin();
    let codes = mappings.department_codes();
    let raw: Vec<_> = mappings
        .departments
        .keys()
        .enumerate()
        .map(|(i, label)| employee_seed::RawEmployee {
            name: format!("Worker {}", i),
            payroll_number: format!("{}", 9000 + i),
            department: label.clone(),
            status: "C".to_string(),
            locker: None,
            start_date: "2020-01-01".to_string(),
        })
        .collect();
    let records = mappings.normalize_all(&raw)?;
    let sql = InsertScriptGenerator::render_example_insert(&records, LockerQuoting::Escaped)?;

    let marker = "WHERE name = '";
    let mut seen = 0;
    for line in sql.lines().skip(1) {
        let start = line.find(marker).expect("row has a department subquery") + marker.len();
        let end = start + line[start..].find('\'').expect("closing quote");
        assert!(codes.contains(&line[start..end]), "{} is not canonical", &line[start..end]);
        seen += 1;
    }
    assert_eq!(seen, mappings.departments.len());
    Ok(())
}
