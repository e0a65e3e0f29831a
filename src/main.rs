use clap::Parser;
use colored::*;
use prenoms::pipeline::{self, GeoFilter, PipelineOptions, VariantSet};
use prenoms::RunSummary;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "prenoms")]
#[command(about = "Group spelling variants of French given names via accent and phonetic folding", long_about = None)]
struct Args {
    /// Input CSV file path
    #[arg(short, long, default_value = "./prenoms.csv")]
    input: PathBuf,

    /// Output CSV file path
    #[arg(short, long, default_value = "./prenoms_normalized.csv")]
    output: PathBuf,

    /// Column holding the given name
    #[arg(long, default_value = "prenom")]
    name_column: String,

    /// Which normalized columns to derive
    #[arg(long, value_enum, default_value_t = VariantSet::Both)]
    variants: VariantSet,

    /// Keep only rows whose geography level equals this value (e.g. FRANCE)
    #[arg(long)]
    filter_geo: Option<String>,

    /// Geography level column consulted by --filter-geo
    #[arg(long, default_value = "niveau_geographique")]
    geo_column: String,

    /// Columns dropped after geography filtering
    #[arg(long, default_value = "niveau_geographique,geographie", value_delimiter = ',')]
    drop_columns: Vec<String>,

    /// Maximum number of example pairs shown per derived column
    #[arg(long, default_value_t = 15)]
    examples: usize,

    /// Emit the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prenoms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = PipelineOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        name_column: args.name_column.clone(),
        variants: args.variants,
        geo_filter: args.filter_geo.as_ref().map(|level| GeoFilter {
            column: args.geo_column.clone(),
            level: level.clone(),
            drop: args.drop_columns.clone(),
        }),
        sample_size: args.examples,
    };

    let summary = pipeline::run(&options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    eprintln!(
        "{} Output written to {}",
        "✓".green().bold(),
        args.output.display()
    );
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("{}", "=== STATISTICS ===".bold());
    println!(
        "Rows read: {}  kept: {}",
        summary.rows_read.to_string().yellow(),
        summary.rows_kept.to_string().yellow()
    );
    for report in &summary.columns {
        println!(
            "{}: {} distinct of {} original, {} {}",
            report.column.cyan(),
            report.stats.distinct_normalized.to_string().yellow(),
            report.stats.distinct_original.to_string().yellow(),
            report.stats.reduction.to_string().green().bold(),
            "names can be grouped".green()
        );
    }

    for report in &summary.columns {
        if report.examples.is_empty() {
            continue;
        }
        println!();
        println!("{} {}", "=== EXAMPLES ===".bold(), report.column.cyan());
        for pair in &report.examples {
            println!("  {} -> {}", pair.original, pair.folded.green());
        }
    }
}
