use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strands_core::Board;

const GRID: &str = "
    EOLATI
    VGRSTU
    INEISD
    PPHTOE
    EAOENS
    IMXPLA
    TCNTES
    EMEERU
";

fn bench_trace(c: &mut Criterion) {
    let board: Board = GRID.parse().unwrap();

    c.bench_function("trace_spangram", |b| {
        b.iter(|| board.trace(black_box("EMOTIONS")))
    });
    c.bench_function("trace_answer", |b| {
        b.iter(|| board.trace(black_box("HAPPINESS")))
    });
    c.bench_function("trace_missing", |b| {
        b.iter(|| board.trace(black_box("EEEEEEEE")))
    });
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
