// File: crates/lumi-examples/src/bin/positions.rs
// Summary: Minimal example that renders one labelled frame per position code to PNG.

use lumi_core::{CaptionTable, Figure, LabelConfig, RenderOptions};

fn main() {
    let table = CaptionTable::run_periods();
    let opts = RenderOptions::default();
    std::fs::create_dir_all("target/out").unwrap();

    for code in [0, 11, 22, 33] {
        let labels = LabelConfig::experiment("Comb_7_8", &table, code).with_extra("Preliminary");
        let out = std::path::PathBuf::from(format!("target/out/example_pos_{code}.png"));
        Figure::new(labels).render_to_png(&opts, &out).expect("render to png");
        println!("Wrote {}", out.display());
    }
}
