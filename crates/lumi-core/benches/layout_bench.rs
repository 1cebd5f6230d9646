// File: crates/lumi-core/benches/layout_bench.rs
// Summary: Throughput of the label placement calculator across position codes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lumi_core::{layout, CaptionTable, LabelConfig};

fn bench_layout(c: &mut Criterion) {
    let table = CaptionTable::run_periods();
    let mut group = c.benchmark_group("layout");
    for &code in &[0, 11, 22, 33] {
        let cfg = LabelConfig::experiment("13TeV", &table, code).with_extra("Preliminary");
        let frame = cfg.frame(800, 600);
        group.bench_function(format!("code_{code}"), |b| {
            b.iter(|| black_box(layout(black_box(&cfg), black_box(&frame))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
