use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use covenant_contracts::catalog::{
    EVERY_PARAMETER_MUST_NOT_BE_NULL, NO_PARAMETER_MAY_BE_NULL,
    PARAMETER_1_MUST_BE_GREATER_THAN_ZERO,
};
use covenant_contracts::{Call, ContractsConfig, Obligation, ObligationRegistry, Rule, Value};

fn create_arguments(count: usize) -> Vec<Value> {
    (1..=count as i64).map(Value::Integer).collect()
}

fn benchmark_filter_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_parameters");

    for count in [1usize, 8, 32, 63] {
        let arguments = create_arguments(count);

        group.bench_with_input(
            BenchmarkId::new("parameter_1", count),
            &arguments,
            |b, arguments| {
                b.iter(|| PARAMETER_1_MUST_BE_GREATER_THAN_ZERO.filter_parameters(black_box(arguments)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("every_parameter", count),
            &arguments,
            |b, arguments| {
                b.iter(|| EVERY_PARAMETER_MUST_NOT_BE_NULL.filter_parameters(black_box(arguments)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("zero_bitmap", count),
            &arguments,
            |b, arguments| b.iter(|| NO_PARAMETER_MAY_BE_NULL.filter_parameters(black_box(arguments))),
        );
    }

    group.finish();
}

fn benchmark_violation(c: &mut Criterion) {
    let arguments = create_arguments(100);
    let obligation = Obligation::new(0x0001u64, Rule::greater_than(1000));

    c.bench_function("check_violation_100_arguments", |b| {
        b.iter(|| obligation.check(black_box(&"bench"), black_box(&arguments)))
    });
}

fn benchmark_verify_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_batch");

    for threshold in [usize::MAX, 64] {
        let config = ContractsConfig {
            parallel_threshold: threshold,
            log_violations: false,
            ..ContractsConfig::default()
        };
        let mut registry = ObligationRegistry::with_config(config);
        registry.register("f", Obligation::new(0x0003u64, Rule::greater_than(0)));
        let calls: Vec<Call> = (0..1024)
            .map(|i| Call::new("f", vec![Value::Integer(i), Value::Integer(i % 7)]))
            .collect();

        let label = if threshold == usize::MAX { "sequential" } else { "parallel" };
        group.bench_function(label, |b| b.iter(|| registry.verify_batch(black_box(&calls))));
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_parameters,
    benchmark_violation,
    benchmark_verify_batch
);
criterion_main!(benches);
