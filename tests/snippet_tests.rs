use sampling_task::snippet::{generate, generate_with};
use sampling_task::{Distribution, FormState, Snippet, SnippetOptions};
use sampling_task::prelude::Numpy;

fn form(sample_size: &str, distribution: Distribution, seed: &str) -> FormState {
    let mut form = FormState::default();
    form.set_sample_size(sample_size);
    form.set_distribution(Some(distribution));
    form.set_seed(seed);
    form
}

fn snippet(sample_size: &str, distribution: Distribution, seed: &str) -> Snippet {
    generate(&form(sample_size, distribution, seed), &SnippetOptions::default())
        .expect("all fields are present")
}

#[test]
fn uniform_end_to_end() {
    let snippet = snippet("5", Distribution::uniform(0.0, 1.0).unwrap(), "42");
    let expected = concat!(
        "import numpy as np\n",
        "np.random.seed(42)\n",
        "sample = np.random.uniform(0, 1, 5)\n",
        "print(\",\".join([str(round(sample[i], 2)) for i in range(5)]))\n",
        "print(\",\".join([str(round(sample[5 - 5 + i], 2)) for i in range(5)]))\n",
        "print(sum(sample)/len(sample))\n",
    );
    assert_eq!(snippet.code(), expected);
}

#[test]
fn sampling_line_per_variant() {
    let cases = [
        (Distribution::bernoulli(0.3).unwrap(), "sample = np.random.binomial(1, 0.3, 20)"),
        (Distribution::binomial(10, 0.5).unwrap(), "sample = np.random.binomial(10, 0.5, 20)"),
        (Distribution::geometric(0.25).unwrap(), "sample = np.random.geometric(0.25, 20)"),
        (Distribution::poisson(3.5).unwrap(), "sample = np.random.poisson(3.5, 20)"),
        (Distribution::uniform(-1.0, 2.0).unwrap(), "sample = np.random.uniform(-1, 2, 20)"),
        (Distribution::exponential(2.0).unwrap(), "sample = np.random.exponential(1 / 2, 20)"),
        (Distribution::normal(10.0, 1.5).unwrap(), "sample = np.random.normal(10, 1.5, 20)"),
    ];

    for (distribution, line) in cases {
        let snippet = snippet("20", distribution, "7");
        let lines: Vec<&str> = snippet.lines().collect();
        assert_eq!(lines.len(), 6, "{distribution}");
        assert_eq!(lines[2], line, "{distribution}");
    }
}

#[test]
fn exponential_scale_is_left_unevaluated() {
    let snippet = snippet("100", Distribution::exponential(4.0).unwrap(), "1");
    assert!(snippet.code().contains("1 / 4"));
    assert!(!snippet.code().contains("0.25"));
}

#[test]
fn tail_index_is_left_unevaluated() {
    let snippet = snippet("10", Distribution::poisson(1.0).unwrap(), "1");
    assert!(snippet.code().contains("sample[10 - 5 + i]"));
}

#[test]
fn texts_are_substituted_verbatim() {
    let snippet = snippet(" 1e2 ", Distribution::poisson(1.0).unwrap(), "0x10");
    assert!(snippet.code().contains("np.random.seed(0x10)"));
    assert!(snippet.code().contains("np.random.poisson(1, 1e2)"));
    assert!(snippet.code().contains("sample[1e2 - 5 + i]"));
}

#[test]
fn generation_is_deterministic() {
    let form = form("50", Distribution::normal(0.0, 1.0).unwrap(), "123");
    let options = SnippetOptions::default();
    let first = generate(&form, &options).unwrap();
    let second = generate(&form.clone(), &options).unwrap();
    assert_eq!(first.code().as_bytes(), second.code().as_bytes());
}

#[test]
fn missing_fields_yield_nothing() {
    let options = SnippetOptions::default();
    let uniform = Distribution::uniform(0.0, 1.0).unwrap();

    let mut form = FormState::default();
    assert!(generate(&form, &options).is_none());

    form.set_sample_size("5");
    form.set_seed("42");
    assert!(generate(&form, &options).is_none());

    form.set_distribution(Some(uniform));
    form.set_seed("");
    assert!(generate(&form, &options).is_none());

    form.set_seed("42");
    form.set_sample_size("");
    assert!(generate(&form, &options).is_none());
}

#[test]
fn presence_is_enough_to_generate() {
    // Validation is the caller's job; the generator only needs the fields filled.
    let form = form("lots", Distribution::poisson(1.0).unwrap(), "seed");
    let snippet = generate(&form, &SnippetOptions::default()).unwrap();
    assert!(snippet.code().contains("np.random.seed(seed)"));
}

#[test]
fn options_change_preview() {
    let options = SnippetOptions::builder()
        .preview_len(3)
        .decimals(1)
        .build()
        .unwrap();
    let form = form("10", Distribution::uniform(0.0, 1.0).unwrap(), "1");
    let snippet = generate_with(&Numpy, &form, &options).unwrap();
    assert!(snippet.code().contains("range(3)"));
    assert!(snippet.code().contains("sample[10 - 3 + i], 1)"));
}
