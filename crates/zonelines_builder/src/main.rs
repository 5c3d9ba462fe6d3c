//! Zone Lines Builder CLI
//!
//! zone_points.json → trigger boxes → zone_lines.json

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::collections::BTreeSet;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "zonelines_builder")]
#[command(about = "Generate zone_lines.json from zone_points.json", long_about = None)]
struct Cli {
    /// Input zone_points.json file
    #[arg(long, short = 'i', default_value = "data/zone_points.json")]
    input: PathBuf,

    /// Output zone_lines.json file
    #[arg(long, short = 'o', default_value = "data/zone_lines.json")]
    output: PathBuf,

    /// Specific zones to process (default: all classic-era zones)
    #[arg(long, short = 'z', num_args = 0..)]
    zones: Vec<String>,

    /// Print output instead of writing to file
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Print per-zone statistics
    #[arg(long, short = 's')]
    stats: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🔨 Generating zone lines...");
    println!("   Input:  {}", cli.input.display());
    println!("   Output: {}", cli.output.display());

    let points = zonelines_builder::load_zone_points(&cli.input)?;
    println!("   Loaded {} zone points", points.len());

    let table = zonelines_builder::zones::zone_table();
    let filter: BTreeSet<String> = if cli.zones.is_empty() {
        zonelines_builder::zones::classic_zones()
    } else {
        cli.zones.iter().cloned().collect()
    };
    println!("   Processing {} zones...", filter.len());

    let (docs, stats) = zonelines_builder::generate(points, &table, Some(&filter));

    println!("\n✅ Generated {} zone lines across {} zones", stats.emitted, docs.len());
    println!("   Dropped (unknown destination): {}", stats.dropped_unknown_zone);
    println!("   Needing review:                {}", stats.needs_review);

    if cli.stats {
        println!("\nZones with zone lines:");
        for (zone_name, doc) in &docs {
            let review_count = doc.zone_lines.iter().filter(|l| l.needs_review).count();
            let review_str = if review_count > 0 {
                format!(" ({} need review)", review_count)
            } else {
                String::new()
            };
            println!("  {}: {}{}", zone_name, doc.zone_lines.len(), review_str);
        }
    }

    if cli.dry_run {
        println!("\n--- Generated JSON ---");
        println!("{}", serde_json::to_string_pretty(&docs)?);
    } else {
        zonelines_builder::write_zone_lines(&docs, &cli.output)?;
        println!("\n📄 Written to {}", cli.output.display());
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("zonelines_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
