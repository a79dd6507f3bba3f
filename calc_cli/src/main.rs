//! # Projel CLI
//!
//! Terminal front end for the NBR 5410 calculators.
//!
//! ```text
//! calc_cli forecast --area 10 --perimeter 14 [--wet] [--json]
//! calc_cli analyze proposta.json [--json]
//! calc_cli clauses [SECTION]
//! calc_cli                      # interactive prompts
//! ```
//!
//! The `analyze` file uses the same JSON body as the HTTP endpoint
//! (`cargas_selecionadas`, optional `zonas_do_projeto`).

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use calc_core::calculations::minimum_load::calculate;
use calc_core::calculations::{MinimumLoadResult, ProposalAnalysis, ProposalDraft, RoomDimensions};
use calc_core::clauses::{NormClause, NBR_5410_EDITION};
use calc_core::loads::LoadKind;
use calc_core::zones::find_zone;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Projel - NBR 5410 calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Minimum lighting load and outlet count for one room
    Forecast {
        /// Floor area (m²)
        #[arg(long)]
        area: f64,

        /// Perimeter (m)
        #[arg(long)]
        perimeter: f64,

        /// Kitchen, pantry, laundry or service area
        #[arg(long)]
        wet: bool,

        /// Print JSON only
        #[arg(long)]
        json: bool,
    },
    /// Check a draft circuit grouping stored in a JSON file
    Analyze {
        file: PathBuf,

        /// Print JSON only
        #[arg(long)]
        json: bool,
    },
    /// List the NBR 5410 clauses the calculators apply, or show one in full
    Clauses {
        /// Section number, e.g. 9.5.2.1
        section: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Forecast {
            area,
            perimeter,
            wet,
            json,
        }) => run_forecast(RoomDimensions::new(area, perimeter, wet), json),
        Some(Command::Analyze { file, json }) => run_analyze(&file, json),
        Some(Command::Clauses { section: None }) => {
            print!("{}", clauses_report());
            Ok(())
        }
        Some(Command::Clauses { section: Some(section) }) => {
            print!("{}", clause_detail(&section)?);
            Ok(())
        }
        None => run_interactive(),
    }
}

/// Warnings go to stderr so `--json` output stays clean; RUST_LOG overrides.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run_forecast(dims: RoomDimensions, json: bool) -> Result<()> {
    warn_on_geometry(&dims);

    let result = calculate(&dims);
    debug!(?dims, ?result, "forecast computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", forecast_report(&dims, &result));
    }
    Ok(())
}

fn run_analyze(path: &Path, json: bool) -> Result<()> {
    let draft = load_draft(path)?;
    draft
        .validate()
        .with_context(|| format!("invalid load in {}", path.display()))?;

    let analysis = draft.analyze();

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis_report(&draft, &analysis));
    }
    Ok(())
}

fn run_interactive() -> Result<()> {
    println!("Projel CLI - NBR 5410 Minimum Load Calculator");
    println!("=============================================");
    println!();

    let area = prompt_f64("Enter room area (m²) [10.0]: ", 10.0);
    let perimeter = prompt_f64("Enter room perimeter (m) [14.0]: ", 14.0);
    let wet = prompt_bool("Kitchen/service area? (y/N): ", false);
    println!();

    let dims = RoomDimensions::new(area, perimeter, wet);
    warn_on_geometry(&dims);

    let result = calculate(&dims);
    print!("{}", forecast_report(&dims, &result));

    println!();
    println!("JSON Output (for API use):");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Impossible geometry is reported, never rejected.
fn warn_on_geometry(dims: &RoomDimensions) -> bool {
    match dims.validate() {
        Ok(()) => false,
        Err(e) => {
            warn!("{}", e);
            true
        }
    }
}

fn load_draft(path: &Path) -> Result<ProposalDraft> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ProposalDraft::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|line| line.trim().parse().ok())
        .unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    prompt_line(prompt)
        .map(|line| parse_yes_no(&line, default))
        .unwrap_or(default)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input)
}

/// Accepts English and Portuguese answers; anything else keeps the default.
fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "sim" | "1" | "true" => true,
        "n" | "no" | "nao" | "não" | "0" | "false" => false,
        _ => default,
    }
}

fn forecast_report(dims: &RoomDimensions, result: &MinimumLoadResult) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════\n");
    out.push_str("  MINIMUM LOAD FORECAST\n");
    out.push_str("═══════════════════════════════════════\n\n");
    out.push_str("Room:\n");
    out.push_str(&format!("  Area:      {:.2} m²\n", dims.area_m2));
    out.push_str(&format!("  Perimeter: {:.2} m\n", dims.perimeter_m));
    out.push_str(&format!(
        "  Type:      {}\n\n",
        if dims.is_wet_area { "kitchen/service" } else { "dry" }
    ));
    out.push_str("Minimums:\n");
    out.push_str(&format!(
        "  Lighting: {:.0} VA   ({})\n",
        result.lighting_power_va,
        NormClause::LightingMinimum.citation()
    ));
    out.push_str(&format!(
        "  Outlets:  {}        ({})\n",
        result.outlet_count,
        NormClause::GeneralOutletMinimum.citation()
    ));
    out
}

fn analysis_report(draft: &ProposalDraft, analysis: &ProposalAnalysis) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════\n");
    out.push_str("  PROPOSAL ANALYSIS\n");
    out.push_str("═══════════════════════════════════════\n\n");

    if !draft.loads.is_empty() {
        out.push_str("Loads:\n");
        for load in &draft.loads {
            out.push_str(&format!(
                "  {:<20} {:<24} {:>9.2} VA\n",
                load.name,
                load.kind.description(),
                load.power_va
            ));
        }
        out.push('\n');
    }

    let zones: Vec<String> = analysis
        .zone_ids
        .iter()
        .map(|id| match find_zone(&draft.zones, id) {
            Some(zone) => format!("{} ({}, {})", id, zone.name, zone.kind.display_name()),
            None => id.clone(),
        })
        .collect();

    out.push_str(&format!("  Total: {:.2} VA / {:.2} W\n", analysis.total_power_va, analysis.total_power_w));
    out.push_str(&format!("  Rooms: {}\n", join_or_dash(&analysis.room_ids)));
    out.push_str(&format!("  Zones: {}\n\n", join_or_dash(&zones)));

    if analysis.has_alerts() {
        out.push_str("Alerts:\n");
        for alert in &analysis.alerts {
            let clause = alert
                .clause()
                .map(|c| format!(" ({})", c.citation()))
                .unwrap_or_default();
            out.push_str(&format!("  [{}] {}{}\n", alert.code(), alert.message(), clause));
        }
        out.push('\n');
    }

    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!(
        "  RESULT: {} {}\n",
        status_icon(analysis.is_valid && !analysis.has_alerts()),
        if analysis.is_valid { "proposal accepted" } else { "nothing to group" }
    ));
    out.push_str("═══════════════════════════════════════\n");
    out
}

fn clauses_report() -> String {
    let mut out = format!("{} clauses applied by Projel\n\n", NBR_5410_EDITION);
    for clause in NormClause::ALL {
        out.push_str(&format!("  {:<10} {}\n", clause.section(), clause.title()));
    }

    out.push_str("\nLoad kinds:\n");
    for kind in LoadKind::ALL {
        let circuit = if kind.requires_exclusive_circuit() {
            format!("exclusive circuit ({})", NormClause::ExclusiveSpecificCircuit.citation())
        } else {
            "shared circuit".to_string()
        };
        out.push_str(&format!("  {:<10} {:<24} {}\n", kind.code(), kind.description(), circuit));
    }
    out
}

fn clause_detail(section: &str) -> Result<String> {
    let Some(clause) = NormClause::from_section(section) else {
        bail!("unknown NBR 5410 section {:?} (see `calc_cli clauses`)", section);
    };
    Ok(format!("{}\n\n{}\n", clause, clause.summary()))
}

fn join_or_dash(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[WARN]" }
}
