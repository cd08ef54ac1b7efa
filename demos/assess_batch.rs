//! Example: Assess a batch of photographs in parallel
//!
//! Usage:
//!   cargo run --release --example assess_batch -- [--jobs N] [--json] [--scores a,b,c,d,e,f] <photo1> <photo2> ...
//!
//! Notes:
//! - Parallelism is across photos; each photo runs the full pipeline.
//! - Default workers: the number of available cores.
//! - The classifier is a stand-in returning fixed scores per photo;
//!   override with --scores to explore the decision table.

use facade_assess::{
    assess_batch, AnalysisConfig, CancelToken, ClassifierPool, ImageInput, UniformClassifier,
};

fn parse_scores(raw: &str) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(|part| part.trim().parse::<f32>().map_err(Into::into))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut scores = vec![0.0, 0.0, 0.72, 0.0, 0.61, 0.15];
    let mut paths: Vec<String> = Vec::new();

    while let Some(arg) = args.first().cloned() {
        args.remove(0);
        match arg.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let value = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(value.max(1));
            }
            "--scores" => {
                let raw = args.first().ok_or("--scores requires a value")?.clone();
                args.remove(0);
                scores = parse_scores(&raw)?;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: assess_batch [--jobs N] [--json] [--scores a,b,c,d,e,f] <photo1> <photo2> ...\n\
                     \n\
                     --jobs N     Parallel workers (default: available cores)\n\
                     --json       Emit the full summary as JSON\n\
                     --scores S   Comma-separated classifier scores for the stand-in model\n"
                );
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one photo path. Use --help for usage.");
        std::process::exit(2);
    }

    let mut inputs = Vec::with_capacity(paths.len());
    for path in &paths {
        match std::fs::read(path) {
            Ok(bytes) => inputs.push(ImageInput::new(path.clone(), bytes)),
            Err(e) => eprintln!("WARN: skipping {path}: {e}"),
        }
    }

    let workers = jobs.unwrap_or_else(facade_assess::default_workers);
    eprintln!("Batch: {} photo(s), jobs={workers}", inputs.len());

    let config = AnalysisConfig {
        workers: Some(workers),
        ..AnalysisConfig::default()
    };
    let pool = ClassifierPool::new(
        (0..workers)
            .map(|_| UniformClassifier::new(scores.clone()))
            .collect::<Vec<_>>(),
    );

    let summary = assess_batch(&inputs, &pool, &config, &CancelToken::new())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let total = summary.scope.image_count();
    for (idx, image) in summary.scope.images().enumerate() {
        println!(
            "[{}/{}] {}: risk={} issues={}",
            idx + 1,
            total,
            image.image_ref,
            image.risk,
            image.issues.len()
        );
    }
    for failure in &summary.failures {
        println!("FAILED {}: {}", failure.image_ref, failure.message);
    }

    println!();
    println!(
        "Overall: {} ({} issue occurrence(s) across {} photo(s), {:.0} ms)",
        summary.overall_risk,
        summary.total_issue_count,
        summary.metadata.analyzed,
        summary.metadata.processing_time_ms
    );
    for rec in &summary.recommendations {
        println!(
            "- {} [{} photo(s), avg confidence {:.2}]",
            rec.title, rec.image_count, rec.average_confidence
        );
        for action in &rec.actions {
            println!("    * {action}");
        }
    }

    Ok(())
}
