// File: crates/lumi-demo/src/main.rs
// Summary: Demo renders an empty frame with experiment or caption labels to PNG.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use lumi_core::{theme, Caption, CaptionTable, Figure, LabelConfig, RenderOptions};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Render a labelled plot frame to PNG")]
struct Args {
    /// Run period key (e.g. 8TeV) or literal luminosity caption.
    #[arg(long, default_value = "13TeV")]
    period: String,

    /// Experiment name drawn in experiment-label mode.
    #[arg(long, default_value = "CMS")]
    name: String,

    /// Left caption; switches to caption-label mode together with --right.
    #[arg(long)]
    left: Option<String>,

    /// Right caption in caption-label mode.
    #[arg(long)]
    right: Option<String>,

    /// Two-digit position code (0 = out of frame, 11 left, 22 center, 33 right).
    #[arg(long, default_value_t = 11, allow_negative_numbers = true)]
    pos: i32,

    /// Extra annotation line, e.g. "Preliminary".
    #[arg(long, default_value = "")]
    extra: String,

    /// Draw the primary label above the frame.
    #[arg(long)]
    out_of_frame: bool,

    /// Reserve space for a 2D color-scale axis.
    #[arg(long)]
    colz: bool,

    /// Logo image drawn instead of the primary label.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// CSV of `key,caption[,scale]` rows merged over the built-in run periods.
    #[arg(long)]
    captions: Option<PathBuf>,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value = "target/out/labels.png")]
    out: PathBuf,

    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug { "debug" } else { "info" }))
        .format_timestamp_secs()
        .init();

    let mut table = CaptionTable::run_periods();
    if let Some(path) = &args.captions {
        let extra = load_captions_csv(path)
            .with_context(|| format!("failed to load captions '{}'", path.display()))?;
        info!("Loaded {} caption(s) from {}", extra.len(), path.display());
        table = table.merged(&extra);
    }

    let theme = theme::find(&args.theme);
    let labels = match (&args.left, &args.right) {
        (None, None) => LabelConfig::experiment(&args.period, &table, args.pos).with_primary(args.name.as_str()),
        (left, right) => LabelConfig::captions(
            left.clone().unwrap_or_default(),
            right.clone().unwrap_or_default(),
            args.pos,
        ),
    }
    .with_extra(args.extra.as_str())
    .out_of_frame(args.out_of_frame)
    .color_axis_2d(args.colz)
    .with_logo(args.logo.is_some())
    .with_color(theme.text);

    let style = labels.canvas_style();
    debug!("canvas style {:?}", style);
    if let Some(digits) = style.max_axis_digits {
        info!("2D color axis: keep axis labels to {} digits", digits);
    }

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme,
        logo_path: args.logo.clone(),
        ..RenderOptions::default()
    };
    Figure::new(labels)
        .render_to_png(&opts, &args.out)
        .with_context(|| format!("failed to render '{}'", args.out.display()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

/// Read `key,caption[,scale]` rows; no header, `#` starts a comment line.
fn load_captions_csv(path: &Path) -> Result<CaptionTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("bad CSV record {}", i + 1))?;
        let key = rec.get(0).unwrap_or("");
        let text = rec.get(1).with_context(|| format!("row {}: missing caption for {key:?}", i + 1))?;
        let mut caption = Caption::new(text);
        if let Some(s) = rec.get(2).filter(|s| !s.is_empty()) {
            let scale: f32 = s.parse().with_context(|| format!("row {}: bad scale {s:?}", i + 1))?;
            caption = caption.scaled(scale);
        }
        entries.push((key.to_string(), caption));
    }
    Ok(CaptionTable::from_captions(entries))
}
