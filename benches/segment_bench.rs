use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use minidocs::processing::{dedup, Encoder, Segmenter};

// bench protocol:
//
// A single document whose paragraphs have varied lengths (0..300 words),
// segmented with default bounds, then encoded and deduplicated.
fn document(nb_paragraphs: usize) -> Vec<Vec<String>> {
    (0..nb_paragraphs)
        .map(|p| {
            let len = (p * 97 + 13) % 300;
            (0..len).map(|w| format!("w{}", w % 1000)).collect()
        })
        .collect()
}

fn segment(paragraphs: &[Vec<String>]) -> usize {
    let segmenter = Segmenter::default();
    let encoder = Encoder::default();
    let units: Vec<_> = segmenter
        .segment(paragraphs)
        .iter()
        .map(|m| encoder.encode(m))
        .collect();
    dedup(units).len()
}

pub fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    for nb_paragraphs in [100, 1_000, 10_000].iter() {
        let doc = document(*nb_paragraphs);
        group.bench_with_input(
            BenchmarkId::new("segment+encode+dedup", nb_paragraphs),
            &doc,
            |b, doc| b.iter(|| segment(black_box(doc))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
