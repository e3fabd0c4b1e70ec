use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::io;

use hwlynx::core::monitor::{CancelToken, SampleMode, Sampler};
use hwlynx::platform;

const LEGAL_COMPONENTS: [&str; 7] = [
    "cpu",
    "gpu",
    "memory",
    "motherboard",
    "storage",
    "network",
    "all",
];

fn main() -> Result<()> {
    hwlynx::init_logging();

    let matches = Command::new("hwlynx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reports hardware sensor telemetry as JSON, once or on a timed loop")
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .value_parser(["once", "timed"])
                .default_value("once")
                .help("Emit a single report or repeat on an interval"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MILLISECONDS")
                .value_parser(clap::value_parser!(u64))
                .default_value("1000")
                .help("Sampling interval in timed mode (minimum 50)"),
        )
        .arg(
            Arg::new("components")
                .long("components")
                .value_name("LIST")
                .default_value("all")
                .help("Comma or semicolon separated list of: cpu,gpu,memory,motherboard,storage,network,all"),
        )
        .get_matches();

    let mode = match matches.get_one::<String>("mode").map(String::as_str) {
        Some("timed") => SampleMode::Timed,
        _ => SampleMode::Once,
    };
    let interval_ms = matches.get_one::<u64>("interval").copied().unwrap_or(1000);
    let components = parse_components(
        matches
            .get_one::<String>("components")
            .map(String::as_str)
            .unwrap_or("all"),
    );

    for token in &components {
        if !LEGAL_COMPONENTS.contains(&token.as_str()) {
            eprintln!("Invalid component specified: {}", token);
            print_usage();
            std::process::exit(2);
        }
    }

    let cancel = CancelToken::new();
    if mode == SampleMode::Timed {
        let handler_token = cancel.clone();
        ctrlc::set_handler(move || {
            eprintln!();
            eprintln!("Exiting timed mode...");
            handler_token.cancel();
        })
        .context("failed to set Ctrl+C handler")?;

        eprintln!(
            "Starting timed monitoring. Interval: {}ms. Components: {}. Press Ctrl+C to exit.",
            interval_ms.max(hwlynx::core::monitor::MIN_INTERVAL_MS),
            components.join(", ")
        );
    }

    let mut provider = platform::default_provider();
    let sampler = Sampler::new(mode, interval_ms, components);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sampler.run(provider.as_mut(), &mut out, &cancel)?;

    if mode == SampleMode::Timed && cancel.is_cancelled() {
        eprintln!("Timed mode cancelled.");
    }

    provider.close();
    Ok(())
}

/// Split a component list on commas and semicolons, trimming and
/// lower-casing tokens. An empty result falls back to "all".
fn parse_components(raw: &str) -> Vec<String> {
    let tokens: Vec<String> = raw
        .split([',', ';'])
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if tokens.is_empty() {
        vec!["all".to_string()]
    } else {
        tokens
    }
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: hwlynx [--mode <once|timed>] [--interval <milliseconds>] [--components <list>]");
    eprintln!("  <list> is a comma or semicolon separated list of: cpu,gpu,memory,motherboard,storage,network,all");
    eprintln!("Defaults: --mode once --components all");
    eprintln!("If --mode is timed, --interval defaults to 1000 milliseconds. Minimum interval is 50ms.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hwlynx");
    eprintln!("  hwlynx --mode timed --interval 500");
    eprintln!("  hwlynx --components cpu,gpu,network");
    eprintln!("  hwlynx --mode timed --interval 2000 --components memory;storage");
}
