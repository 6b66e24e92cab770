use super::*;
use crate::render::{fonts::FontCache, pipeline::RenderOptions};
use usvg::fontdb::Database;

const ETH: &str = "0x742d35Cc6634C0532925a3b844Bc9e90a3b9e0a1";
const BTC: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

fn pipeline() -> RenderPipeline {
    RenderPipeline::with_fonts(
        RenderOptions::default(),
        FontCache::with_database(Database::new()),
    )
}

#[test]
fn filename_is_indexed_tagged_and_hashed() {
    let name = batch_filename(7, "batch", ETH, OutputFormat::Png);
    let hash = sha256_hex(ETH.as_bytes());
    assert_eq!(name, format!("qr_007_batch_{}.png", &hash[..8]));
    assert_eq!(
        batch_filename(12, "my tag/x", ETH, OutputFormat::Jpeg),
        format!("qr_012_my_tag_x_{}.jpg", &hash[..8])
    );
    assert!(batch_filename(1, "", ETH, OutputFormat::WebP).starts_with("qr_001_batch_"));
}

#[test]
fn sha256_hex_matches_known_digest() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn one_failure_leaves_the_rest_and_reports_every_item() {
    let dir = tempfile::tempdir().unwrap();
    let items = vec![ETH.to_owned(), "a".repeat(3000), BTC.to_owned()];
    let config = StyleConfig::from_preset("minimalist");

    let mut seen = Vec::new();
    let mut on_progress = |p: BatchProgress<'_>| {
        seen.push((p.index, p.total, matches!(p.outcome, BatchOutcome::Generated(_))));
    };
    let report = pipeline()
        .render_batch(
            &items,
            dir.path(),
            &config,
            &BatchOptions::default(),
            Some(&mut on_progress),
        )
        .unwrap();

    assert_eq!(report.attempted, 3);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(seen, vec![(1, 3, true), (2, 3, false), (3, 3, true)]);

    assert_eq!(report.results[0].address, ETH);
    assert_eq!(report.results[1].address, BTC);
    for r in &report.results {
        assert!(r.filepath.exists());
        assert!(r.filepath.starts_with(dir.path()));
    }
    assert!(report.results[1]
        .filepath
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("qr_003_batch_")));
}

#[test]
fn batch_without_callback_creates_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("batch");
    let options = BatchOptions {
        tag: "shop".to_owned(),
        format: OutputFormat::Jpeg,
    };
    let config = StyleConfig::from_preset("minimalist");
    let report = pipeline()
        .render_batch(&[ETH], &out, &config, &options, None)
        .unwrap();
    assert_eq!(report.results.len(), 1);
    assert!(out.is_dir());
    assert_eq!(
        report.results[0].filepath.extension().and_then(|e| e.to_str()),
        Some("jpg")
    );
    assert_eq!(report.total_bytes(), report.results[0].size_bytes);
}

#[test]
fn empty_batch_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let items: [&str; 0] = [];
    let config = StyleConfig::default();
    let report = pipeline()
        .render_batch(&items, dir.path(), &config, &BatchOptions::default(), None)
        .unwrap();
    assert_eq!(report, BatchReport::default());
}
