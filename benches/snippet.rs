use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sampling_task::number::is_valid_number;
use sampling_task::snippet::generate;
use sampling_task::{Distribution, DistributionKind, FormState, SnippetOptions, check_parameters};

/// One filled form per distribution kind, with typical parameters.
fn forms() -> Vec<(DistributionKind, FormState)> {
    let distributions = [
        Distribution::bernoulli(0.3),
        Distribution::binomial(10, 0.5),
        Distribution::geometric(0.2),
        Distribution::poisson(4.0),
        Distribution::uniform(0.0, 1.0),
        Distribution::exponential(4.0),
        Distribution::normal(0.0, 1.0),
    ];
    distributions
        .into_iter()
        .map(|d| {
            let d = d.expect("benchmark parameters are valid");
            let mut form = FormState::default();
            form.set_sample_size("1000");
            form.set_distribution(Some(d));
            form.set_seed("42");
            (d.kind(), form)
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let options = SnippetOptions::default();

    for (kind, form) in forms() {
        group.bench_with_input(BenchmarkId::new("kind", kind.name()), &form, |b, form| {
            b.iter(|| generate(form, &options));
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let (_, form) = forms().remove(0);

    group.bench_function("check_parameters", |b| b.iter(|| check_parameters(&form)));
    for text in ["42", "-3.5e-2", "0x1F", "not a number"] {
        group.bench_with_input(BenchmarkId::new("number", text), &text, |b, text| {
            b.iter(|| is_valid_number(text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
