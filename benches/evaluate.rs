use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gatecheck::{property, Reference, RuleSet, RuleSetBuilder, Satisfy, Value};

/// Build a rule set with `n` rules (each comparing a unique field), every
/// fourth one required, and a reference that satisfies all of them.
fn build_ruleset(n: usize) -> (RuleSet, Reference) {
    let mut builder = RuleSetBuilder::new().satisfy(Satisfy::All);
    let mut reference = Reference::new();

    for i in 0..n {
        let path = format!("f{i}");
        let rule = property(&path).gte(1_i64);
        builder = builder.rule(if i % 4 == 0 { rule.required() } else { rule });
        reference.insert(&path, Value::Int(10));
    }

    (builder.build(), reference)
}

/// A reference with `n` lunches, and rules that expand over them.
fn build_expanding(n: usize) -> (RuleSet, Reference) {
    let lunches: Vec<Value> = (0..n)
        .map(|i| {
            Reference::new()
                .set("type", if i % 2 == 0 { "veg" } else { "any" })
                .set("qty", i64::try_from(i).unwrap_or(i64::MAX))
                .as_value()
                .clone()
        })
        .collect();
    let reference = Reference::new().set("lunches", lunches);

    let ruleset = RuleSetBuilder::new()
        .rule(property("lunches[].type").some("veg"))
        .rule(property("lunches[].type").none("fish"))
        .rule(property("lunches[].serve").all(Value::Null))
        .build();

    (ruleset, reference)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");

    for &n in &[5, 20, 50] {
        let (ruleset, reference) = build_ruleset(n);
        group.bench_function(&format!("{n}_rules"), |b| {
            b.iter(|| ruleset.evaluate(black_box(&reference)));
        });

        let (ruleset, reference) = build_expanding(n);
        group.bench_function(&format!("{n}_element_expansion"), |b| {
            b.iter(|| ruleset.evaluate(black_box(&reference)));
        });
    }

    group.finish();
}

fn bench_reference_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_construction");

    for &n in &[5, 20, 50] {
        group.bench_function(&format!("{n}_fields_set"), |b| {
            b.iter(|| {
                let mut reference = Reference::new();
                for i in 0..n {
                    reference.insert(&format!("user.f{i}"), black_box(Value::Int(10)));
                }
                reference
            });
        });

        let json = format!(
            "{{{}}}",
            (0..n)
                .map(|i| format!("\"f{i}\": {{\"val\": {i}}}"))
                .collect::<Vec<_>>()
                .join(",")
        );
        group.bench_function(&format!("{n}_fields_json"), |b| {
            b.iter(|| Reference::from_json(black_box(&json)).unwrap());
        });
    }

    group.finish();
}

fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("loading");

    for &n in &[5, 20, 50] {
        let json = format!(
            "{{\"satisfy\": \"ALL\", \"rules\": [{}]}}",
            (0..n)
                .map(|i| format!("{{\"property\": \"f{i}\", \"op\": \"gte\", \"value\": 1}}"))
                .collect::<Vec<_>>()
                .join(",")
        );
        group.bench_function(&format!("{n}_rules"), |b| {
            b.iter(|| black_box(RuleSetBuilder::from_json(&json).unwrap().build()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_reference_construction,
    bench_loading
);
criterion_main!(benches);
