//! Benchmarks for schema deserialization from JSON.
//!
//! Tests envelope normalization over schemas of increasing width
//! (10/100/1000 fields).

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use crud6_client::endpoints::normalize_schema_payload;
use crud6_client::models::ModelSchema;

fn generate_schema_envelope(field_count: usize) -> String {
    let fields: serde_json::Map<String, serde_json::Value> = (0..field_count)
        .map(|i| {
            (
                format!("field_{}", i),
                serde_json::json!({
                    "type": "string",
                    "label": format!("Field {}", i),
                    "sortable": i % 2 == 0,
                    "filterable": i % 3 == 0,
                    "searchable": true,
                    "listable": i % 5 != 0,
                    "validation": {"length": {"min": 1, "max": 255}}
                }),
            )
        })
        .collect();

    serde_json::to_string(&serde_json::json!({
        "message": "Schema retrieved successfully",
        "model": "wide",
        "schema": {
            "model": "wide",
            "title": "Wide model",
            "primary_key": "field_0",
            "permissions": {
                "read": "uri_wide",
                "create": "create_wide",
                "update": "update_wide",
                "delete": "delete_wide"
            },
            "default_sort": {"field_0": "asc"},
            "fields": fields
        }
    }))
    .unwrap()
}

fn bench_normalize(c: &mut Criterion, name: &str, field_count: usize) {
    let payload = generate_schema_envelope(field_count);

    c.bench_function(name, |b| {
        b.iter(|| {
            let value: serde_json::Value = serde_json::from_str(black_box(&payload)).unwrap();
            let schema = normalize_schema_payload(value).unwrap();
            black_box(schema)
        })
    });
}

fn bench_normalize_10_fields(c: &mut Criterion) {
    bench_normalize(c, "normalize_schema_10_fields", 10);
}

fn bench_normalize_100_fields(c: &mut Criterion) {
    bench_normalize(c, "normalize_schema_100_fields", 100);
}

fn bench_normalize_1000_fields(c: &mut Criterion) {
    bench_normalize(c, "normalize_schema_1000_fields", 1000);
}

fn bench_blank_record_1000_fields(c: &mut Criterion) {
    let payload = generate_schema_envelope(1000);
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let schema: ModelSchema = normalize_schema_payload(value).unwrap();

    c.bench_function("blank_record_1000_fields", |b| {
        b.iter(|| black_box(schema.blank_record()))
    });
}

criterion_group!(
    benches,
    bench_normalize_10_fields,
    bench_normalize_100_fields,
    bench_normalize_1000_fields,
    bench_blank_record_1000_fields
);
criterion_main!(benches);
