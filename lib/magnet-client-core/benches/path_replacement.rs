#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use magnet_client_core::{CallPath, ParamMap, ParamValue};
use std::hint::black_box;

fn benchmark_path_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_resolution");

    let test_cases: [(&str, &[(&str, ParamValue)]); 5] = [
        ("/bot/capability", &[]),
        ("/users/{user_id}", &[("user_id", ParamValue::Int(123))]),
        (
            "/bot/profile/{profile_id}/switch",
            &[("profile_id", ParamValue::Int(456))],
        ),
        ("/test/{id}/{id}/{id}", &[("id", ParamValue::Int(789))]),
        (
            "/scaffold/{id}",
            &[("id", ParamValue::Str("a b/c".to_string()))],
        ),
    ];

    for (idx, (template, args)) in test_cases.iter().enumerate() {
        group.bench_function(format!("resolve_{idx}"), |b| {
            b.iter(|| {
                let path = args
                    .iter()
                    .fold(CallPath::from(*template), |path, (name, value)| {
                        path.add_param(*name, value.clone())
                    });
                black_box(path.resolve().ok());
            });
        });
    }

    group.bench_function("resolve_encoded", |b| {
        b.iter(|| {
            let path = CallPath::from("/search/{query}")
                .add_param("query", black_box("hello world & special chars @#$%"));
            black_box(path.resolve().ok());
        });
    });

    group.finish();
}

fn benchmark_query_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_encoding");

    group.bench_function("requirement_definition", |b| {
        b.iter(|| {
            let query = ParamMap::new()
                .add_param("domain", black_box("stock"))
                .add_param("timezone", black_box("Asia/Tokyo"))
                .add_param("has_timezone", black_box(true))
                .add_param("most_old_year", black_box(None::<i64>))
                .add_param("scraping", black_box(Some(1.5)))
                .add_param("etl", black_box(None::<String>));
            black_box(query.to_query_string());
        });
    });

    group.bench_function("form_body", |b| {
        b.iter(|| {
            let form = ParamMap::new()
                .add_param("username", black_box("john doe"))
                .add_param("password", black_box("s3cr&t"))
                .add_param("grant_type", black_box("password"));
            black_box(form.to_form_string());
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_path_resolution, benchmark_query_encoding);
criterion_main!(benches);
