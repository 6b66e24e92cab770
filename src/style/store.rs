use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use serde_json::{Map, Value};

use crate::{
    foundation::error::{WalletQrError, WalletQrResult},
    style::{config::StyleConfig, presets::StylePreset},
};

/// Named style collection, seeded with the built-in presets.
///
/// On disk a store is a JSON object mapping style name to the plain map of that style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleStore {
    styles: BTreeMap<String, StyleConfig>,
}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleStore {
    /// Store holding the six presets.
    pub fn new() -> Self {
        let styles = StylePreset::ALL
            .into_iter()
            .map(|p| (p.name().to_owned(), p.config()))
            .collect();
        Self { styles }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&StyleConfig> {
        self.styles.get(&name.to_ascii_lowercase())
    }

    /// Insert or replace a style. Names are stored lowercased.
    pub fn add(&mut self, name: &str, config: StyleConfig) {
        self.styles.insert(name.to_ascii_lowercase(), config);
    }

    /// Style names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }

    /// Write every style as pretty JSON.
    pub fn save_styles(&self, path: &Path) -> WalletQrResult<()> {
        let doc: Map<String, Value> = self
            .styles
            .iter()
            .map(|(name, cfg)| (name.clone(), Value::Object(cfg.to_plain_map())))
            .collect();

        let f = File::create(path)
            .with_context(|| format!("create styles file '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, &doc)?;
        w.flush()
            .with_context(|| format!("flush styles file '{}'", path.display()))?;
        Ok(())
    }

    /// Merge styles from a JSON file, replacing same-named entries.
    ///
    /// Nothing is merged if any entry fails to parse.
    pub fn load_styles(&mut self, path: &Path) -> WalletQrResult<usize> {
        let f =
            File::open(path).with_context(|| format!("open styles file '{}'", path.display()))?;
        let doc: Map<String, Value> = serde_json::from_reader(BufReader::new(f))?;

        let mut parsed = Vec::with_capacity(doc.len());
        for (name, value) in doc {
            let Value::Object(map) = value else {
                return Err(WalletQrError::invalid_config(format!(
                    "style \"{name}\" must be a JSON object"
                )));
            };
            let cfg = StyleConfig::from_plain_map(map).map_err(|e| match e {
                WalletQrError::InvalidConfig(msg) => {
                    WalletQrError::invalid_config(format!("style \"{name}\": {msg}"))
                }
                other => other,
            })?;
            parsed.push((name, cfg));
        }

        let n = parsed.len();
        for (name, cfg) in parsed {
            self.add(&name, cfg);
        }
        Ok(n)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/store.rs"]
mod tests;
