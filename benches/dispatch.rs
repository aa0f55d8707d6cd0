use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stocksol::{AssessmentData, ModelRegistry, ObjectiveFunction, ParameterSet};

fn bench_dispatch(c: &mut Criterion) {
    let mut registry = ModelRegistry::with_builtins();
    registry.register_fn("INDEX_SSQ", |data, params| {
        let cpue = data.vector("cpue")?;
        let q = params.value("q")?;
        Ok(cpue.iter().map(|y| (y - q).powi(2)).sum())
    });

    let cpue: Vec<f64> = (0..256).map(|i| 1.0 + (i as f64 * 0.1).sin()).collect();
    let data = AssessmentData::builder().series("cpue", cpue).build();
    let params = ParameterSet::from_slice(&["q"], &[1.0]).unwrap();

    let objective = ObjectiveFunction::new(&registry, "INDEX_SSQ", data);
    c.bench_function("evaluate_registered_model", |b| {
        b.iter(|| objective.evaluate(black_box(&params)).unwrap())
    });

    let builtin = ObjectiveFunction::new(&registry, "DD", AssessmentData::new());
    c.bench_function("evaluate_detached_builtin", |b| {
        b.iter(|| builtin.evaluate(black_box(&params)).unwrap())
    });

    let unknown = ObjectiveFunction::new(&registry, "XYZ", AssessmentData::new());
    c.bench_function("unrecognized_identifier", |b| {
        b.iter(|| unknown.evaluate(black_box(&params)).unwrap_err())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
