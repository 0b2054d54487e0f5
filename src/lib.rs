pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{SeedSettings, TomlConfig};
pub use crate::core::engine::{SeedEngine, SeedReport};
pub use crate::core::mapping::Mappings;
pub use crate::core::pipeline::SeedPipeline;
pub use crate::core::script::InsertScriptGenerator;
pub use crate::core::sql::{escape_sql_literal, format_locker_value};
pub use crate::domain::model::{EmployeeRecord, LockerQuoting, RawEmployee, RenderOptions};
pub use crate::utils::error::{Result, SeedError};
