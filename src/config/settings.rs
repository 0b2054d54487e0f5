use crate::core::mapping::Mappings;
use crate::domain::model::RenderOptions;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
use std::path::PathBuf;

/// Parses a delimiter written as one ASCII character or as `\t`.
pub fn parse_delimiter(field_name: &str, text: &str) -> Result<u8> {
    match text.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if text == "\\t" => Ok(b'\t'),
        _ => Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        }),
    }
}

const INPUT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Everything a run needs, after the config file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSettings {
    pub mappings: Mappings,
    /// `None` renders the built-in examples.
    pub input: Option<PathBuf>,
    /// `None` picks a tab for `.tsv` input and a comma otherwise.
    pub delimiter: Option<u8>,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            mappings: Mappings::builtin(),
            input: None,
            delimiter: None,
            output: None,
            options: RenderOptions::default(),
        }
    }
}

impl SeedSettings {
    pub fn effective_delimiter(&self) -> u8 {
        if let Some(delimiter) = self.delimiter {
            return delimiter;
        }
        let is_tsv = self
            .input
            .as_ref()
            .and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        if is_tsv {
            b'\t'
        } else {
            b','
        }
    }
}

impl Validate for SeedSettings {
    fn validate(&self) -> Result<()> {
        self.mappings.validate()?;

        if let Some(input) = &self.input {
            let input = input.to_string_lossy();
            validate_path("source.path", &input)?;
            validate_file_extension("source.path", &input, INPUT_EXTENSIONS)?;
        }

        if let Some(output) = &self.output {
            validate_path("output.path", &output.to_string_lossy())?;
        }

        if let Some(batch_size) = self.options.batch_size {
            validate_positive_number("output.batch_size", batch_size, 1)?;
        }

        Ok(())
    }
}
