use crate::config::settings::{parse_delimiter, SeedSettings};
use crate::core::mapping::Mappings;
use crate::domain::model::LockerQuoting;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Optional seed configuration file. Every section may be omitted.
///
/// ```toml
/// [mapping.departments]
/// "Lamb Boning" = "LAMB_BR"
///
/// [mapping.statuses]
/// C = "CASUAL"
///
/// [source]
/// path = "${HR_EXPORT_DIR}/staff.csv"
/// delimiter = ";"
///
/// [output]
/// path = "seed.sql"
/// batch_size = 500
/// locker_quoting = "escaped"
/// include_template = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub mapping: Option<MappingConfig>,
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
}

/// A table given here replaces the built-in table of the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    pub departments: Option<BTreeMap<String, String>>,
    pub statuses: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub batch_size: Option<usize>,
    pub locker_quoting: Option<LockerQuoting>,
    pub include_template: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HR_EXPORT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn mappings(&self) -> Mappings {
        let mut mappings = Mappings::builtin();
        if let Some(mapping) = &self.mapping {
            if let Some(departments) = &mapping.departments {
                mappings.departments = departments.clone();
            }
            if let Some(statuses) = &mapping.statuses {
                mappings.statuses = statuses.clone();
            }
        }
        mappings
    }

    pub fn delimiter(&self) -> Result<Option<u8>> {
        self.source
            .as_ref()
            .and_then(|s| s.delimiter.as_deref())
            .map(|text| parse_delimiter("source.delimiter", text))
            .transpose()
    }

    /// Resolves the file into run settings on top of the built-in defaults.
    pub fn to_settings(&self) -> Result<SeedSettings> {
        let mut settings = SeedSettings {
            mappings: self.mappings(),
            delimiter: self.delimiter()?,
            ..SeedSettings::default()
        };

        if let Some(source) = &self.source {
            settings.input = source.path.as_ref().map(PathBuf::from);
        }
        if let Some(output) = &self.output {
            settings.output = output.path.as_ref().map(PathBuf::from);
            settings.options.batch_size = output.batch_size;
            if let Some(quoting) = output.locker_quoting {
                settings.options.locker_quoting = quoting;
            }
            if let Some(include_template) = output.include_template {
                settings.options.include_template = include_template;
            }
        }

        Ok(settings)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings()?.validate()
    }
}
