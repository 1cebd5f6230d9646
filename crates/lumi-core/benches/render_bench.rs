// File: crates/lumi-core/benches/render_bench.rs
// Summary: Cost of rendering an annotated frame to PNG bytes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lumi_core::{CaptionTable, Figure, LabelConfig, RenderError, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(w, h) in &[(400u32, 300u32), (1200, 900)] {
        group.bench_function(format!("frame_{w}x{h}"), |b| {
            let cfg = LabelConfig::experiment("Comb_7_8_13", &CaptionTable::run_periods(), 11).with_extra("Preliminary");
            let fig = Figure::new(cfg);
            let mut opts = RenderOptions::default();
            opts.width = w;
            opts.height = h;
            b.iter(|| -> Result<(), RenderError> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
