use crate::domain::ports::ScriptSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ScriptSink for StdoutSink {
    fn write_script(&self, sql: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(sql.as_bytes())?;
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScriptSink for FileSink {
    fn write_script(&self, sql: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, sql)?;
        Ok(self.path.display().to_string())
    }
}
