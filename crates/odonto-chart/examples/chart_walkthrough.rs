//! Walks through a short charting session and prints what the renderer
//! would draw.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p odonto-chart --example chart_walkthrough [config.json]

use std::path::Path;

use odonto_chart::legend::legend;
use odonto_chart::{ChartConfig, PatientChart};
use odonto_core::models::condition::Condition;
use odonto_core::models::notes::OralFinding;
use odonto_core::models::tooth::ToothKey;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ChartConfig::load(Path::new(&path))?,
        None => ChartConfig::default(),
    };
    let locale = config.locale;

    let mut chart = PatientChart::open(uuid::Uuid::new_v4(), config);

    // Chip clicks, as the popover would send them.
    let clicks = [
        ("UR-3", "c"),
        ("UR-3", "III"),
        ("UR-6", "w"),
        ("UR-6", "k"),
        ("LL-8", "-"),
        ("UR-3", "c"),
    ];
    for (tooth, code) in clicks {
        let tooth: ToothKey = tooth.parse()?;
        let state = chart.set_condition(tooth, code.parse::<Condition>()?);
        println!("{tooth:<5} {code:<4} -> {state:?}");
    }
    chart.set_note(OralFinding::Hygiene, "dostateczna");

    println!();
    println!("Legend:");
    let legend = legend(locale);
    for entry in legend.basic.iter().chain(&legend.degree) {
        println!("  {:<4} {:<30} {}", entry.code, entry.label, entry.color);
    }

    println!();
    for cell in chart.store().cells() {
        if let Some(label) = &cell.label {
            println!("{}  [{}]", label.to_string().replace('\n', " | "), cell.css);
        }
    }

    println!();
    println!("{}", chart.snapshot().to_json()?);
    Ok(())
}
