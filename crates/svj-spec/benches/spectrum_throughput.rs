use criterion::{criterion_group, criterion_main, Criterion};
use svj_core::ModelParams;
use svj_spec::{build, Scheme};

fn matt_model(nf: u32) -> ModelParams {
    ModelParams {
        channel: "s".into(),
        mmed: 1000.0,
        nc: nf,
        nf,
        ns: 2,
        scale: 10.0,
        mq: 10.119,
        mpi: 6.0,
        mrho: Some(25.0998),
        pvector: 0.5,
        rinv: None,
        spectrum: "matt".into(),
        rho_invisible_partner: 53,
    }
}

fn bench_spectrum(c: &mut Criterion) {
    let model = matt_model(8);
    c.bench_function("matt_nf8_build", |b| {
        b.iter(|| {
            let _ = build(Scheme::Matt, &model).unwrap();
        });
    });
    c.bench_function("matt_nf8_lines", |b| {
        let spectrum = build(Scheme::Matt, &model).unwrap();
        b.iter(|| {
            let _ = spectrum.lines();
        });
    });
}

criterion_group!(benches, bench_spectrum);
criterion_main!(benches);
