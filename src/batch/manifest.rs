use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    foundation::error::{WalletQrError, WalletQrResult},
    style::config::StyleConfig,
};

/// File name of the run manifest written next to generated images.
pub const MANIFEST_FILE_NAME: &str = "generation_config.json";

/// Record of one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchManifest {
    /// Crate version that produced the run.
    pub version: String,
    /// `YYYYmmdd_HHMMSS`, local time.
    pub timestamp: String,
    /// Addresses requested.
    pub address_count: usize,
    /// Preset name the run started from.
    pub style: String,
    /// Primary (fill) color.
    pub color: String,
    pub output_directory: PathBuf,
    /// Effective style as a plain map.
    pub config: Map<String, Value>,
    /// Images actually written.
    pub generated_files: usize,
}

impl BatchManifest {
    pub fn new(
        style: &str,
        config: &StyleConfig,
        output_directory: &Path,
        address_count: usize,
        generated_files: usize,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            timestamp: timestamp_now(),
            address_count,
            style: style.to_owned(),
            color: config.fill_color.clone(),
            output_directory: output_directory.to_path_buf(),
            config: config.to_plain_map(),
            generated_files,
        }
    }

    /// Plain JSON object form.
    pub fn to_plain_map(&self) -> WalletQrResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(WalletQrError::serde("manifest did not serialize to an object")),
        }
    }

    /// Write as [`MANIFEST_FILE_NAME`] inside `dir`.
    pub fn save(&self, dir: &Path) -> WalletQrResult<PathBuf> {
        save_config(&self.to_plain_map()?, dir)
    }
}

fn timestamp_now() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Create and return `{base}/{prefix}_{YYYYmmdd_HHMMSS}`.
pub fn create_output_dir(base: &Path, prefix: &str) -> WalletQrResult<PathBuf> {
    let dir = base.join(format!("{prefix}_{}", timestamp_now()));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(dir)
}

/// Write `config` as pretty JSON to `{dir}/generation_config.json` and return that path.
pub fn save_config(config: &Map<String, Value>, dir: &Path) -> WalletQrResult<PathBuf> {
    let path = dir.join(MANIFEST_FILE_NAME);
    let file = File::create(&path).with_context(|| format!("create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer
        .flush()
        .with_context(|| format!("flush '{}'", path.display()))?;
    Ok(path)
}

/// Read a JSON object from `path`.
pub fn load_config(path: &Path) -> WalletQrResult<Map<String, Value>> {
    let file = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(WalletQrError::serde(format!(
            "'{}' does not contain a JSON object",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/manifest.rs"]
mod tests;
