use criterion::{criterion_group, criterion_main, Criterion};
use degrees_lib::{find_path, load_dataset, Dataset, FrontierKind};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/small")
}

static DATASET: Lazy<Dataset> = Lazy::new(|| load_dataset(&fixture_dir()).expect("fixture loads"));

fn benchmark_search(c: &mut Criterion) {
    let dataset = &*DATASET;

    c.bench_function("bfs_hoffman_elwes", |b| {
        b.iter(|| {
            let outcome =
                find_path(dataset, "163", "144", FrontierKind::Queue).expect("ids are known");
            black_box(outcome.explored)
        });
    });

    c.bench_function("dfs_hoffman_elwes", |b| {
        b.iter(|| {
            let outcome =
                find_path(dataset, "163", "144", FrontierKind::Stack).expect("ids are known");
            black_box(outcome.explored)
        });
    });

    c.bench_function("bfs_unconnected", |b| {
        b.iter(|| {
            let outcome =
                find_path(dataset, "102", "914612", FrontierKind::Queue).expect("ids are known");
            black_box(outcome.path.is_none())
        });
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
