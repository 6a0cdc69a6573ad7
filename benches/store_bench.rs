use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use fantasy_map_annotator::app::handlers::transfer::parse_import_document;
use fantasy_map_annotator::core::builtin;
use fantasy_map_annotator::{EntityStore, MapPoint, MarkerDraft, MarkerKind, MarkerRecord, MemoryStore};
use std::sync::Arc;

fn seeded_store(count: usize) -> EntityStore<MarkerRecord> {
    let store = EntityStore::new(builtin::default_markers(), Arc::new(MemoryStore::new()));
    for i in 0..count {
        store.add(MarkerDraft {
            name: format!("Ort {i}"),
            kind: MarkerKind::Town,
            location: MapPoint::new(i as f64, -(i as f64)),
            description: None,
            link: None,
            major: false,
        });
    }
    store
}

fn bench_get_all(c: &mut Criterion) {
    let store = seeded_store(1000);
    c.bench_function("store_get_all_1k_custom", |b| {
        b.iter(|| black_box(store.get_all()))
    });
}

fn bench_import_parse(c: &mut Criterion) {
    let elements: Vec<String> = (0..500)
        .map(|i| format!(r#"{{"name": "Ort {i}", "type": "town", "location": [{i}, 0]}}"#))
        .collect();
    let document = format!("[{}]", elements.join(","));

    c.bench_function("import_parse_500_markers", |b| {
        b.iter(|| {
            let batch = parse_import_document::<MarkerRecord>(black_box(&document))
                .expect("Dokument ist gültig");
            black_box(batch.drafts.len())
        })
    });
}

criterion_group!(benches, bench_get_all, bench_import_parse);
criterion_main!(benches);
