use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_corpus::{
    count_tokens, oaxaca_locations, synthesize, tokenize, DailyObservation, Document,
    StopwordSet,
};

fn corpus() -> Vec<Document> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    oaxaca_locations()
        .iter()
        .flat_map(|location| {
            (0..214).map(move |day| {
                let obs = DailyObservation::complete(
                    start + Duration::days(day),
                    18.0 + (day % 20) as f64,
                    11.5,
                    (day % 9) as f64 * 6.5,
                    (day % 31) as f64,
                );
                synthesize(location, &obs).unwrap()
            })
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let docs = corpus();
    let stopwords = StopwordSet::spanish_with_domain();

    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&docs[0].text))));
    c.bench_function("count_tokens", |b| {
        b.iter(|| count_tokens(black_box(&docs), &stopwords, true))
    });
    c.bench_function("percentile_filter", |b| {
        let table = count_tokens(&docs, &stopwords, true);
        b.iter(|| table.percentile_filter(black_box(90.0)))
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
