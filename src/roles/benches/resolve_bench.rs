//! Role resolution benchmarks
//!
//! Measures each strategy over growing subjects and role attributes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rolegate_core::{Assertion, Attribute, Principal, Subject};
use rolegate_roles::{DefaultRoleParser, RoleParser, DEFAULT_ROLE_ATTRIBUTE_NAME};

fn create_subject(size: usize) -> Subject {
    let mut subject = Subject::new().with_principal(Principal::user("alice"));
    for i in 0..size {
        let name = if i % 2 == 0 {
            format!("ROLE_{}", i)
        } else {
            format!("group-{}", i)
        };
        subject.insert(Principal::typed(name, "group"));
    }
    subject
}

fn create_assertion(size: usize) -> Assertion {
    let roles: Vec<String> = (0..size).map(|i| format!("role-{}", i)).collect();
    Assertion::new("_bench")
        .with_attribute(Attribute::new("urn:example:email", ["alice@example.com"]))
        .with_attribute(Attribute::new(DEFAULT_ROLE_ATTRIBUTE_NAME, roles))
}

fn bench_strategies(c: &mut Criterion) {
    let identity = Principal::user("alice");
    let subject_default = DefaultRoleParser::new();
    let subject_classifier = DefaultRoleParser::builder()
        .role_classifier("ROLE_")
        .build()
        .unwrap();
    let claims = DefaultRoleParser::builder()
        .use_subject_roles(false)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("resolve_roles");

    for size in [4usize, 32, 256].iter() {
        let subject = create_subject(*size);
        let assertion = create_assertion(*size);

        group.bench_with_input(BenchmarkId::new("subject_default", size), size, |b, _| {
            b.iter(|| {
                subject_default
                    .parse_roles(black_box(&identity), Some(&subject), &assertion)
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("subject_classifier", size), size, |b, _| {
            b.iter(|| {
                subject_classifier
                    .parse_roles(black_box(&identity), Some(&subject), &assertion)
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("claims", size), size, |b, _| {
            b.iter(|| {
                claims
                    .parse_roles(black_box(&identity), None, &assertion)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
