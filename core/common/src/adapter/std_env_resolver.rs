//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_data_dir(&self) -> Result<PathBuf, Error> {
        if let Ok(home) = env::var("FITTRACK_HOME") {
            if !home.is_empty() {
                return Ok(PathBuf::from(home));
            }
        }

        if let Some(data_base) = env::var("XDG_DATA_HOME").ok().filter(|s| !s.is_empty()) {
            return Ok(PathBuf::from(data_base).join("fittrack"));
        }

        let home = env::var("HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("fittrack"))
    }
}
