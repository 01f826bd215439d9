//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::core::report::analyze;
use chatstat::core::sentiment::{LexiconScorer, SentimentScorer};
use chatstat::format::write_to_format;
use chatstat::logging;
use chatstat::parser::LogParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

#[cfg(feature = "vader")]
fn scorer(args: &Args) -> Box<dyn SentimentScorer> {
    if args.vader {
        Box::new(chatstat::core::sentiment::VaderScorer::new())
    } else {
        Box::new(LexiconScorer::new())
    }
}

#[cfg(not(feature = "vader"))]
fn scorer(_args: &Args) -> Box<dyn SentimentScorer> {
    Box::new(LexiconScorer::new())
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();

    let parse_start = Instant::now();
    let records = LogParser::new().parse(&args.input)?;
    info!(
        records = records.len(),
        elapsed_ms = parse_start.elapsed().as_millis(),
        "parsed {}",
        args.input.display()
    );

    let scorer = scorer(args);
    let report = analyze(&records, &args.analysis_config(), scorer.as_ref());

    // JSON mode keeps stdout machine-readable
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        println!();
        print!("{}", report.render_text());
    }

    if let Some((path, format)) = args.output_target() {
        let write_start = Instant::now();
        write_to_format(&records, &path, format, &args.output_config())?;
        info!(
            format = %format,
            elapsed_ms = write_start.elapsed().as_millis(),
            "wrote {}",
            path.display()
        );

        if !args.json {
            println!();
            println!(
                "✅ Saved {} records to {} ({})",
                records.len(),
                path.display(),
                format
            );
        }
    }

    info!(
        elapsed_ms = total_start.elapsed().as_millis(),
        "done"
    );
    Ok(())
}
