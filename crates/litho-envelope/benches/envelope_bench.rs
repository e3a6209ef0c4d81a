// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Envelope Benchmarks
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use litho_envelope::{envelope, scenario};
use litho_thermal::geotherm;
use litho_types::config::ScenarioConfig;
use litho_types::mesh::DepthMesh;

fn bench_geotherm(c: &mut Criterion) {
    let cfg = ScenarioConfig::default();
    let mesh = DepthMesh::continental();
    c.bench_function("geotherm_4096", |b| {
        b.iter(|| {
            geotherm::steady_state(
                black_box(&mesh),
                black_box(cfg.surface_temperature_k),
                &cfg.thermal,
            )
            .unwrap()
        })
    });
}

fn bench_envelope_assembly(c: &mut Criterion) {
    let cfg = ScenarioConfig::default();
    let mesh = DepthMesh::continental();
    let geo = geotherm::steady_state(&mesh, cfg.surface_temperature_k, &cfg.thermal).unwrap();
    c.bench_function("envelope_assembly_4096", |b| {
        b.iter(|| envelope::assemble(black_box(&cfg), black_box(&geo)).unwrap())
    });
}

fn bench_full_scenario(c: &mut Criterion) {
    let cfg = ScenarioConfig::default();
    let mut group = c.benchmark_group("scenario");
    group.sample_size(30);
    group.bench_function("run_reference", |b| {
        b.iter(|| scenario::run(black_box(&cfg)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_geotherm,
    bench_envelope_assembly,
    bench_full_scenario
);
criterion_main!(benches);
