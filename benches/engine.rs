use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sparselife::{Generations, LiveSet, Pattern, Pos2, step, step_parallel};

// a field of blinkers spaced four cells apart, which stays the same size forever
fn blinker_field(per_side: i64) -> LiveSet {
    let mut alive = Vec::new();
    for row in 0..per_side {
        for col in 0..per_side {
            let origin = Pos2::new(col * 4, row * 4);
            alive.extend((0..3).map(|dx| origin + Pos2::new(dx, 0)));
        }
    }
    alive.into()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for per_side in [4, 8, 16] {
        let field = blinker_field(per_side);
        group.throughput(Throughput::Elements(field.len() as u64));

        group.bench_with_input(BenchmarkId::new("serial", per_side), &field, |b, field| {
            b.iter(|| step(field))
        });
        group.bench_with_input(BenchmarkId::new("parallel", per_side), &field, |b, field| {
            b.iter(|| step_parallel(field))
        });
    }
    group.finish();
}

fn bench_named_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("generations");
    for pattern in Pattern::ALL {
        group.bench_function(pattern.name(), |b| {
            b.iter(|| Generations::new(pattern.live_set()).nth(100))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_named_patterns);
criterion_main!(benches);
