//! metar: Command-line METAR decoder.
//!
//! Supports:
//! - Decoding files of reports (one per line, `-` for stdin) to JSON or a
//!   summary table
//! - Decoding a single report or runway visual range group
//! - Showing and initialising the config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use serde::Serialize;

use metar_core::config::{self, Config, OutputFormat};
use metar_core::{decode_metar, parse_rvr, Observation, WindVariation};

mod input;

#[derive(Parser)]
#[command(name = "metar", version, about = "METAR weather report decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode reports from a file (one per line) and print them
    Decode {
        /// Path to file containing reports, or `-` for stdin
        file: PathBuf,

        /// Output format: json or summary
        #[arg(short, long, env = "METAR_FORMAT")]
        format: Option<OutputFormat>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Stop at the first report that fails to decode
        #[arg(long)]
        strict: bool,
    },

    /// Decode a single report given on the command line
    Report {
        /// Report text, e.g. EFJY 171750Z AUTO 29007KT CAVOK 15/12 Q1006
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Decode a runway visual range group, e.g. R34L/M0600V1000FT
    Rvr {
        group: String,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the config file location and effective settings
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = config::load_config();

    match cli.command {
        Commands::Decode {
            file,
            format,
            pretty,
            strict,
        } => {
            let format = format.unwrap_or(config.output.format);
            let pretty = pretty || config.output.pretty;
            let skip_invalid = !strict && config.decode.skip_invalid;
            cmd_decode(file, format, pretty, skip_invalid)
        }
        Commands::Report { text, pretty } => {
            cmd_report(&text.join(" "), pretty || config.output.pretty)
        }
        Commands::Rvr { group, pretty } => {
            print_json(&parse_rvr(group.as_str()), pretty || config.output.pretty)
        }
        Commands::Config { init } => cmd_config(&config, init),
    }
}

fn cmd_decode(file: PathBuf, format: OutputFormat, pretty: bool, skip_invalid: bool) {
    let reports = input::open_input(&file)
        .and_then(input::read_reports)
        .unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", file.display());
            std::process::exit(1);
        });

    let mut observations = Vec::with_capacity(reports.len());
    let mut failed = 0u64;

    for (line_no, report) in &reports {
        match decode_metar(report) {
            Ok(obs) => {
                if format == OutputFormat::Json {
                    print_json(&obs, pretty);
                }
                observations.push(obs);
            }
            Err(e) if skip_invalid => {
                failed += 1;
                log::warn!("line {line_no}: {e}: {report}");
            }
            Err(e) => {
                eprintln!("Error at line {line_no}: {e}");
                std::process::exit(1);
            }
        }
    }

    if format == OutputFormat::Summary {
        print_summary(&observations);
    }
    eprintln!(
        "{} reports, {} decoded, {failed} failed",
        reports.len(),
        observations.len()
    );
}

fn cmd_report(text: &str, pretty: bool) {
    match decode_metar(text) {
        Ok(obs) => print_json(&obs, pretty),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_config(config: &Config, init: bool) {
    if init {
        match config::save_config(&Config::default()) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Config file: {}", config::config_file().display());
    println!();
    print!("{}", config::serialize_config(config));
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match text {
        Ok(t) => println!("{t}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

fn print_summary(observations: &[Observation]) {
    if observations.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Station", "Time", "Wind", "Vis", "Weather", "Clouds", "Temp/Dew", "Pressure", "RVR",
    ]);

    for obs in observations {
        table.add_row(vec![
            Cell::new(format!("{}{}", obs.station, correction_mark(obs))),
            Cell::new(obs.time),
            Cell::new(wind_cell(obs)),
            Cell::new(visibility_cell(obs)),
            Cell::new(weather_cell(obs)),
            Cell::new(clouds_cell(obs)),
            Cell::new(format!(
                "{}/{}",
                opt(obs.temperature),
                opt(obs.dewpoint)
            )),
            Cell::new(pressure_cell(obs)),
            Cell::new(obs.runway_visual_ranges.len()),
        ]);
    }

    println!("{table}");
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or("-".into())
}

fn correction_mark(obs: &Observation) -> &'static str {
    if obs.is_correction() {
        " (COR)"
    } else {
        ""
    }
}

fn wind_cell(obs: &Observation) -> String {
    match obs.wind.variation {
        Some(WindVariation::Range { min, max }) => format!("{} {min:03}V{max:03}", obs.wind),
        _ => obs.wind.to_string(),
    }
}

fn visibility_cell(obs: &Observation) -> String {
    if obs.cavok {
        return "CAVOK".into();
    }
    match (obs.visibility, obs.visibility_unit) {
        (Some(v), Some(metar_core::VisibilityUnit::StatuteMiles)) => format!("{v} SM"),
        (Some(v), _) => format!("{v} m"),
        _ => "-".into(),
    }
}

fn weather_cell(obs: &Observation) -> String {
    match &obs.weather {
        Some(w) => w
            .iter()
            .map(|p| p.meaning)
            .collect::<Vec<_>>()
            .join(", "),
        None => "-".into(),
    }
}

fn clouds_cell(obs: &Observation) -> String {
    match &obs.clouds {
        Some(layers) => layers
            .iter()
            .map(|l| match l.altitude {
                Some(alt) => format!(
                    "{} {alt}ft{}",
                    l.abbreviation,
                    if l.cumulonimbus { " CB" } else { "" }
                ),
                None => l.abbreviation.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => "-".into(),
    }
}

fn pressure_cell(obs: &Observation) -> String {
    match (obs.altimeter_hpa, obs.altimeter_in_hg) {
        (Some(hpa), _) => format!("{hpa} hPa"),
        (None, Some(inhg)) => format!("{inhg:.2} inHg"),
        _ => "-".into(),
    }
}
