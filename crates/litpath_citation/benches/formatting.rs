use criterion::{black_box, criterion_group, criterion_main, Criterion};
use litpath_citation::Formatter;
use litpath_core::{CitationStyle, SourceRecord, StringOrNumber};

fn sample_record() -> SourceRecord {
    SourceRecord {
        author: Some("DE LEON JUAN CARLOS".to_string()),
        year: Some(StringOrNumber::from(2022)),
        title: Some("a study of RICE YIELD in the philippines".to_string()),
        school: Some("UNIVERSITY OF THE PHILIPPINES LOS BANOS".to_string()),
        degree: Some("Master of Science".to_string()),
    }
}

fn bench_styles(c: &mut Criterion) {
    let formatter = Formatter::new();
    let record = sample_record();

    let mut group = c.benchmark_group("cite");
    for style in CitationStyle::ALL {
        group.bench_function(style.as_str(), |b| {
            b.iter(|| formatter.cite(black_box(Some(&record)), style))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_styles);
criterion_main!(benches);
