//! Release record persistence
//!
//! The record is the app's JSON config file (default `./src/config.json`).
//! Only `version` and `build` belong to this tool; every other field in the
//! object is application data and must round-trip untouched, so unknown keys
//! are captured in a flattened side-channel map.
//!
//! Writes are atomic relative to this process: the new record lands in a
//! temp file next to the target and is renamed over it, so a reader either
//! sees the old record or the full new one.

use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the release record
pub const DEFAULT_RECORD_PATH: &str = "./src/config.json";

/// The persisted unit of truth: current version and build number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
  /// Version as stored; normalized to a three-integer tuple on use
  #[serde(default, deserialize_with = "version_as_string")]
  pub version: String,

  /// Build number, bumped by exactly 1 per release when opted in
  #[serde(default)]
  pub build: u64,

  /// Application fields this tool does not own; preserved verbatim
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Accept the version whether it was stored as a string or a bare number.
fn version_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(match value {
    Value::String(s) => s,
    Value::Number(n) => n.to_string(),
    Value::Null => String::new(),
    other => other.to_string(),
  })
}

/// Load/save boundary for the release record
pub struct RecordStore {
  path: PathBuf,
}

impl RecordStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Load the record from disk
  pub fn load(&self) -> ReleaseResult<ReleaseRecord> {
    if !self.path.exists() {
      return Err(ReleaseError::Config(ConfigError::NotFound {
        path: self.path.clone(),
      }));
    }

    let content = fs::read_to_string(&self.path)?;

    serde_json::from_str(&content).map_err(|e| {
      ReleaseError::Config(ConfigError::Parse {
        path: self.path.clone(),
        message: e.to_string(),
      })
    })
  }

  /// Write the full record, replacing the file atomically
  pub fn save(&self, record: &ReleaseRecord) -> ReleaseResult<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| {
      ReleaseError::Config(ConfigError::Write {
        path: self.path.clone(),
        message: e.to_string(),
      })
    })?;

    let tmp = self.path.with_extension("json.tmp");
    let write_err = |e: std::io::Error| {
      ReleaseError::Config(ConfigError::Write {
        path: self.path.clone(),
        message: e.to_string(),
      })
    };

    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, &self.path).map_err(write_err)?;

    Ok(())
  }
}
