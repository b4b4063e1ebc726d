use chrono::NaiveDate;
use std::path::Path;
use weather_corpus::{
    build_corpus, oaxaca_locations, write_corpus, CorpusSummary, OpenMeteoClient,
    WeatherCorpusError,
};

fn main() -> Result<(), WeatherCorpusError> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let out = Path::new("data/corpus_weather.jsonl");
    let locations = oaxaca_locations();

    let client = OpenMeteoClient::builder().build()?;
    let build = build_corpus()
        .source(&client)
        .locations(&locations)
        .start(start)
        .end(end)
        .call();

    for (city, produced) in &build.per_location {
        println!("{:35} {:4} documents", city, produced);
    }
    for failure in &build.failures {
        println!("excluded: {failure}");
    }

    let written = write_corpus(&build.documents, out)?;
    println!("{} documents written to {}", written, out.display());

    let summary = CorpusSummary::from_documents(&build.documents);
    println!("{:#?}", summary);
    if let Some(example) = build.documents.first() {
        println!("{}\n{}", example.id, example.text);
    }

    Ok(())
}
