use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use attercop::stats::{ContainmentReport, FrequencyReport};
use attercop::types::{DocumentIndex, Record, TagValue};

const TAG_POOL: usize = 50;
const VALUE_POOL: usize = 7;

fn synthetic_index(nb_records: usize) -> DocumentIndex {
    let mut index = DocumentIndex::default();
    for i in 0..nb_records {
        let pairs = (0..4)
            .map(|j| {
                TagValue::new(
                    format!("tag {}", (i * 4 + j) % TAG_POOL),
                    format!("value {}", (i + j) % VALUE_POOL),
                )
            })
            .collect();
        index.push(Record::with_section(
            format!("document {}", i % 100),
            "section".to_string(),
            pairs,
            format!(
                "some text mentioning value {} and tag {}",
                i % VALUE_POOL,
                i % TAG_POOL
            ),
        ));
    }
    index
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reports");
    for nb_records in [1_000, 10_000] {
        let index = synthetic_index(nb_records);
        group.bench_with_input(
            BenchmarkId::new("frequency", nb_records),
            &index,
            |b, index| b.iter(|| FrequencyReport::from_index(index)),
        );
        group.bench_with_input(
            BenchmarkId::new("frequency ranked", nb_records),
            &index,
            |b, index| {
                let report = FrequencyReport::from_index(index);
                b.iter(|| report.ranked_tags())
            },
        );
        group.bench_with_input(
            BenchmarkId::new("containment", nb_records),
            &index,
            |b, index| b.iter(|| ContainmentReport::from_index(index)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
