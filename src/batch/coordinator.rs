use std::path::Path;

use anyhow::Context;
use sha2::Digest as _;

use crate::{
    foundation::error::{WalletQrError, WalletQrResult},
    render::{
        encode::OutputFormat,
        pipeline::{GenerationResult, RenderPipeline},
    },
    style::config::StyleConfig,
};

/// Tag used in batch filenames when none is given.
pub const DEFAULT_BATCH_TAG: &str = "batch";

/// Naming and format settings for a batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Filename tag, sanitized to `[A-Za-z0-9_-]`.
    pub tag: String,
    pub format: OutputFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_BATCH_TAG.to_owned(),
            format: OutputFormat::Png,
        }
    }
}

/// What happened to one batch item.
#[derive(Debug)]
pub enum BatchOutcome<'a> {
    Generated(&'a GenerationResult),
    Failed(&'a WalletQrError),
}

/// Progress report, delivered once per attempted item.
#[derive(Debug)]
pub struct BatchProgress<'a> {
    /// 1-based position in the batch.
    pub index: usize,
    pub total: usize,
    pub data: &'a str,
    pub outcome: BatchOutcome<'a>,
}

/// Successful results, in input order, plus how many items were attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<GenerationResult>,
    pub attempted: usize,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.results.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.results.iter().map(|r| r.size_bytes).sum()
    }
}

/// `qr_{index:03}_{tag}_{hash8}.{ext}`, where `hash8` is the first 8 hex digits of SHA-256(data).
pub fn batch_filename(index: usize, tag: &str, data: &str, format: OutputFormat) -> String {
    let tag = sanitize_tag(tag);
    let hash = sha256_hex(data.as_bytes());
    format!("qr_{index:03}_{tag}_{}.{}", &hash[..8], format.extension())
}

fn sanitize_tag(tag: &str) -> String {
    let tag = if tag.is_empty() { DEFAULT_BATCH_TAG } else { tag };
    tag.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

impl RenderPipeline {
    /// Render every item into `output_dir`, continuing past per-item failures.
    ///
    /// Failed items are logged and left out of the report. `on_progress` is called exactly once per
    /// item, after it has been attempted. Only failing to create `output_dir` aborts the run.
    #[tracing::instrument(
        skip(self, items, output_dir, config, options, on_progress),
        fields(total = items.len(), dir = %output_dir.display())
    )]
    pub fn render_batch<S: AsRef<str>>(
        &mut self,
        items: &[S],
        output_dir: &Path,
        config: &StyleConfig,
        options: &BatchOptions,
        mut on_progress: Option<&mut dyn FnMut(BatchProgress<'_>)>,
    ) -> WalletQrResult<BatchReport> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("create batch output dir '{}'", output_dir.display()))?;

        let total = items.len();
        let mut report = BatchReport {
            results: Vec::with_capacity(total),
            attempted: 0,
        };

        for (i, item) in items.iter().enumerate() {
            let index = i + 1;
            let data = item.as_ref();
            let path = output_dir.join(batch_filename(index, &options.tag, data, options.format));
            report.attempted += 1;

            match self.render(data, &path, config) {
                Ok(result) => {
                    if let Some(cb) = on_progress.as_mut() {
                        cb(BatchProgress {
                            index,
                            total,
                            data,
                            outcome: BatchOutcome::Generated(&result),
                        });
                    }
                    report.results.push(result);
                }
                Err(err) => {
                    tracing::warn!(index, error = %err, "batch item failed");
                    if let Some(cb) = on_progress.as_mut() {
                        cb(BatchProgress {
                            index,
                            total,
                            data,
                            outcome: BatchOutcome::Failed(&err),
                        });
                    }
                }
            }
        }

        tracing::info!(
            generated = report.results.len(),
            failed = report.failed(),
            "batch finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/coordinator.rs"]
mod tests;
