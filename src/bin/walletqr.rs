use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wallet_qr::{
    BackgroundKind, BatchManifest, BatchOptions, BatchOutcome, BatchProgress, COLOR_SCHEMES,
    ColorScheme, DEFAULT_BATCH_TAG, ErrorCorrection, GradientPalette, OutputFormat,
    RenderOptions, RenderPipeline, StyleConfig, StyleExtensions, StylePreset, StyleStore,
    classify, create_output_dir, format_file_size, load_config, require_valid,
};

/// Style registered for the effective CLI configuration by `--save-styles`.
const CUSTOM_STYLE_NAME: &str = "custom";

/// Styled QR code images for cryptocurrency wallet addresses.
#[derive(Parser, Debug)]
#[command(name = "walletqr", version)]
struct Cli {
    /// Single wallet address to encode.
    #[arg(group = "input")]
    address: Option<String>,

    /// Text file with one address per line (`#` starts a comment line).
    #[arg(short = 'a', long, value_name = "FILE", group = "input")]
    address_file: Option<PathBuf>,

    /// JSON file of the form `{"addresses": [...]}`.
    #[arg(long, value_name = "JSON_FILE", group = "input")]
    batch: Option<PathBuf>,

    /// Base output directory; each run writes into a timestamped subdirectory.
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Filename prefix for single-address runs.
    #[arg(long, default_value = "wallet")]
    prefix: String,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// JPEG quality.
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Style preset, or a style loaded with `--styles-file`.
    #[arg(short, long, default_value = "professional")]
    style: String,

    /// Primary color: hex (`#27AE60`), CSS name, or color scheme name (`gold`, `dark`, ...).
    #[arg(short, long)]
    color: Option<String>,

    /// Background color, or one of `solid`, `gradient`, `noise` for the canvas fill.
    #[arg(long)]
    background: Option<String>,

    /// QR size level, 1 (small) to 10 (large).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    size: Option<u8>,

    /// Logo image (raster or SVG) placed at the QR center.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Logo size in pixels.
    #[arg(long)]
    logo_size: Option<u32>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    subtitle: Option<String>,

    /// Watermark text tiled across the image.
    #[arg(long)]
    watermark: Option<String>,

    /// Error correction level: L, M, Q or H.
    #[arg(long)]
    error_correction: Option<ErrorCorrection>,

    /// Quiet zone width in modules.
    #[arg(long)]
    border: Option<u32>,

    /// Hide the address block.
    #[arg(long)]
    no_address: bool,

    /// Hide the embossed QR border.
    #[arg(long)]
    no_border: bool,

    /// Color modules with a gradient palette (sunset, ocean, forest, royal, fire).
    #[arg(long, value_name = "PALETTE")]
    gradient: Option<GradientPalette>,

    /// Fail instead of warning when the logo is missing or unreadable.
    #[arg(long)]
    strict: bool,

    /// Extra directory of `.ttf`/`.otf`/`.ttc` fonts (repeatable).
    #[arg(long = "font-dir", value_name = "DIR")]
    font_dirs: Vec<PathBuf>,

    /// Merge named styles from a JSON file before resolving `--style`.
    #[arg(long, value_name = "JSON_FILE")]
    styles_file: Option<PathBuf>,

    /// Write all known styles, plus the effective one as `custom`, to a JSON file.
    #[arg(long, value_name = "JSON_FILE")]
    save_styles: Option<PathBuf>,

    /// List styles and color schemes, then exit.
    #[arg(long)]
    list_styles: bool,

    /// Debug-level logging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Png,
    Jpg,
    Webp,
    All,
}

impl FormatChoice {
    fn formats(self) -> Vec<OutputFormat> {
        match self {
            Self::Png => vec![OutputFormat::Png],
            Self::Jpg => vec![OutputFormat::Jpeg],
            Self::Webp => vec![OutputFormat::WebP],
            Self::All => vec![OutputFormat::Png, OutputFormat::Jpeg, OutputFormat::WebP],
        }
    }
}

/// `--size` level to `(version, box_size)`.
fn size_level(level: u8) -> (u32, u32) {
    match level {
        1 => (2, 8),
        2 => (3, 10),
        3 => (4, 12),
        4 => (5, 14),
        5 => (6, 16),
        6 => (7, 18),
        7 => (8, 20),
        8 => (9, 22),
        9 => (10, 24),
        _ => (12, 26),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut store = StyleStore::new();
    if let Some(path) = &cli.styles_file {
        let n = store.load_styles(path)?;
        tracing::info!(count = n, path = %path.display(), "styles loaded");
    }

    if cli.list_styles {
        print_styles(&store);
        return Ok(());
    }

    let config = build_config(&cli, &store)?;
    config.validate()?;

    if let Some(path) = &cli.save_styles {
        store.add(CUSTOM_STYLE_NAME, config.clone());
        store.save_styles(path)?;
        if !cli.quiet {
            println!("styles written to {}", path.display());
        }
    }

    let addresses = if let Some(path) = &cli.batch {
        read_batch_file(path)?
    } else if let Some(path) = &cli.address_file {
        read_address_file(path)?
    } else if let Some(address) = &cli.address {
        let family = require_valid(address)?;
        tracing::debug!(%family, "address format detected");
        vec![address.clone()]
    } else if cli.save_styles.is_some() {
        return Ok(());
    } else {
        anyhow::bail!("no input specified; pass an address, --address-file or --batch");
    };
    anyhow::ensure!(!addresses.is_empty(), "no valid addresses found");

    let output_dir = create_output_dir(&cli.output, "qr_codes")?;
    let mut pipeline = RenderPipeline::new(RenderOptions {
        strict_resources: cli.strict,
        jpeg_quality: cli.quality,
        font_dirs: cli.font_dirs.clone(),
        ..RenderOptions::default()
    });

    let generated = if addresses.len() == 1 {
        render_single(&cli, &mut pipeline, &addresses[0], &output_dir, &config)?
    } else {
        render_many(&cli, &mut pipeline, &addresses, &output_dir, &config)?
    };

    let manifest = BatchManifest::new(
        &cli.style,
        &config,
        &output_dir,
        addresses.len(),
        generated,
    );
    let manifest_path = manifest.save(&output_dir)?;

    if !cli.quiet {
        println!("output directory: {}", output_dir.display());
        println!("generated files:  {generated}");
        println!("config file:      {}", manifest_path.display());
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli, store: &StyleStore) -> anyhow::Result<StyleConfig> {
    let mut config = store.get(&cli.style).cloned().with_context(|| {
        format!(
            "unknown style '{}' (available: {})",
            cli.style,
            store.names().join(", ")
        )
    })?;

    if let Some(color) = &cli.color {
        match ColorScheme::by_name(color) {
            Some(scheme) => {
                config.fill_color = scheme.hex_color.to_owned();
                config.back_color = scheme.background.to_owned();
            }
            None => config.fill_color = color.clone(),
        }
    }
    if let Some(bg) = &cli.background {
        match bg.parse::<BackgroundKind>() {
            Ok(kind) => config.extensions.background = Some(kind),
            Err(_) => config.back_color = bg.clone(),
        }
    }
    if let Some(level) = cli.size {
        (config.version, config.box_size) = size_level(level);
    }
    if let Some(path) = &cli.logo {
        config.add_logo = true;
        config.logo_path = Some(path.clone());
    }
    if let Some(size) = cli.logo_size {
        config.logo_size = size;
    }
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(subtitle) = &cli.subtitle {
        config.subtitle = subtitle.clone();
    }
    if let Some(watermark) = &cli.watermark {
        config.watermark = watermark.clone();
    }
    if let Some(ec) = cli.error_correction {
        config.error_correction = ec;
    }
    if let Some(border) = cli.border {
        config.border = border;
    }
    if cli.no_address {
        config.show_address = false;
    }
    if cli.no_border {
        config.show_qr_border = false;
    }
    if let Some(palette) = cli.gradient {
        config.extensions = StyleExtensions {
            background: config.extensions.background,
            ..StyleExtensions::gradient(Some(palette))
        };
    }
    Ok(config)
}

fn read_batch_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let doc = load_config(path)?;
    let list = doc
        .get("addresses")
        .and_then(|v| v.as_array())
        .with_context(|| format!("'{}' has no \"addresses\" array", path.display()))?;
    list.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .with_context(|| format!("non-string entry in \"addresses\": {v}"))
        })
        .collect()
}

fn read_address_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("open address file '{}'", path.display()))?;
    let mut valid = Vec::new();
    let mut skipped = 0usize;
    for line in BufReader::new(f).lines() {
        let line = line.with_context(|| format!("read address file '{}'", path.display()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if classify(line).valid {
            valid.push(line.to_owned());
        } else {
            skipped += 1;
            tracing::debug!(address = line, "invalid address skipped");
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "skipped invalid addresses");
    }
    Ok(valid)
}

fn render_single(
    cli: &Cli,
    pipeline: &mut RenderPipeline,
    address: &str,
    output_dir: &Path,
    config: &StyleConfig,
) -> anyhow::Result<usize> {
    let stem = format!("{}_{}", cli.prefix, config.fill_color.trim_start_matches('#'));
    let mut generated = 0;
    for format in cli.format.formats() {
        let path = output_dir.join(format!("{stem}.{}", format.extension()));
        let result = pipeline.render(address, &path, config)?;
        generated += 1;
        if !cli.quiet {
            let (w, h) = result.dimensions;
            println!(
                "wrote {} ({}, {w}x{h}px)",
                result.filepath.display(),
                result.size_formatted
            );
        }
    }
    Ok(generated)
}

fn render_many(
    cli: &Cli,
    pipeline: &mut RenderPipeline,
    addresses: &[String],
    output_dir: &Path,
    config: &StyleConfig,
) -> anyhow::Result<usize> {
    let quiet = cli.quiet;
    let mut on_progress = |p: BatchProgress<'_>| {
        if quiet {
            return;
        }
        match p.outcome {
            BatchOutcome::Generated(r) => {
                eprintln!("[{}/{}] {}", p.index, p.total, r.filepath.display());
            }
            BatchOutcome::Failed(err) => eprintln!("[{}/{}] failed: {err}", p.index, p.total),
        }
    };

    let mut generated = 0;
    for format in cli.format.formats() {
        let options = BatchOptions {
            tag: DEFAULT_BATCH_TAG.to_owned(),
            format,
        };
        let report =
            pipeline.render_batch(addresses, output_dir, config, &options, Some(&mut on_progress))?;
        if !quiet {
            println!(
                "{format}: {} of {} generated ({})",
                report.results.len(),
                report.attempted,
                format_file_size(report.total_bytes())
            );
        }
        generated += report.results.len();
    }
    Ok(generated)
}

fn print_styles(store: &StyleStore) {
    println!("Styles:");
    for name in store.names() {
        let description =
            StylePreset::lookup(name).map_or("custom style", StylePreset::description);
        println!("  {name:<14} {description}");
    }
    println!();
    println!("Color schemes (-c/--color):");
    for scheme in &COLOR_SCHEMES {
        println!(
            "  {:<14} {} on {}  {}",
            scheme.name, scheme.hex_color, scheme.background, scheme.description
        );
    }
}
