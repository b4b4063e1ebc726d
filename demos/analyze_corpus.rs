use std::path::Path;
use weather_corpus::{
    read_corpus, ReportConfig, ReportGenerator, StopwordSet, WeatherCorpusError,
    WeightsFileRenderer,
};

fn main() -> Result<(), WeatherCorpusError> {
    let corpus = read_corpus(Path::new("data/corpus_weather.jsonl"))?;
    println!(
        "{} documents loaded, {} lines skipped",
        corpus.documents.len(),
        corpus.skipped.len()
    );

    let stopwords = StopwordSet::spanish_with_domain();
    let renderer = WeightsFileRenderer;
    let report = ReportGenerator::new(&renderer, &stopwords, ReportConfig::default())
        .generate(&corpus.documents)?;

    println!("{:#?}", report.stats);
    for (title, terms) in [
        ("Top terms", &report.top_terms),
        ("Top terms, over-common removed", &report.top_filtered_terms),
    ] {
        println!("\n{title}");
        for (rank, (token, count)) in terms.iter().enumerate() {
            println!("{:2}. {:20} -> {:5}", rank + 1, token, count);
        }
    }
    for artifact in &report.artifacts {
        println!("{:?}: {}", artifact.variant, artifact.path.display());
    }

    Ok(())
}
