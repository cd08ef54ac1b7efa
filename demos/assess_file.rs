//! Example: Assess a single photograph
//!
//! Usage:
//!   cargo run --example assess_file -- <photo> [--scores a,b,c,d,e,f]
//!
//! The classifier model is out of scope for the engine, so this demo
//! drives the pipeline with a stand-in classifier returning fixed scores
//! (override them with --scores to explore the decision table).

use facade_assess::{assess_image, AnalysisConfig, UniformClassifier};

fn parse_scores(raw: &str) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(|part| part.trim().parse::<f32>().map_err(Into::into))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut scores = vec![0.0, 0.0, 0.72, 0.0, 0.61, 0.15];
    let mut path: Option<String> = None;

    while let Some(arg) = args.first().cloned() {
        args.remove(0);
        match arg.as_str() {
            "--scores" => {
                let raw = args.first().ok_or("--scores requires a value")?.clone();
                args.remove(0);
                scores = parse_scores(&raw)?;
            }
            "--help" | "-h" => {
                eprintln!("Usage: assess_file <photo> [--scores a,b,c,d,e,f]");
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let path = path.ok_or("provide a photo path; use --help for usage")?;
    let bytes = std::fs::read(&path)?;

    let mut classifier = UniformClassifier::new(scores);
    let config = AnalysisConfig::default();
    let assessment = assess_image(&path, &bytes, &mut classifier, &config)?;

    println!("Assessment for {path}:");
    println!("  Risk: {}", assessment.risk);
    println!("  Plain confidence: {:.2}", assessment.plain_confidence());
    if assessment.issues.is_empty() {
        println!("  No issues detected");
    } else {
        for issue in &assessment.issues {
            println!(
                "  {} ({}) confidence {:.2}",
                issue.damage_type, issue.level, issue.confidence
            );
        }
    }

    Ok(())
}
