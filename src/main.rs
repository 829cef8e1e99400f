use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tokio::task;

use ccsa::report::{print_comparison, print_session_list, print_session_report};
use ccsa::types::{CostBreakdown, SessionSummary, TokenTotals};
use ccsa::utils::{find_latest_session, find_session_file, list_session_files};
use ccsa::{ModelNameHeuristic, Result, analyze_session, compare};

const USAGE: &str = "\
Claude Session Cost Analyzer

Usage:
    ccsa <session-id-or-path> [--json]
    ccsa --latest [project-path]
    ccsa --compare <baseline> <test>
    ccsa --list [project-path]";

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a SessionSummary,
    totals: TokenTotals,
    main_agent_cost: CostBreakdown,
    hook_cost: CostBreakdown,
    total_cost: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rayon thread pool for parallel line parsing
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .thread_name(|i| format!("ccsa-worker-{}", i))
        .build_global()
        .unwrap_or_else(|e| eprintln!("Failed to configure thread pool: {}", e));

    // Force colored output even when not in a TTY
    colored::control::set_override(true);

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("--latest") => {
            let path = find_latest_session(args.get(1).map(String::as_str))?;
            let summary = load_summary(path).await?;
            print_session_report(&summary);
            Ok(())
        }
        Some("--compare") => {
            let (Some(baseline_id), Some(test_id)) = (args.get(1), args.get(2)) else {
                eprintln!("Usage: ccsa --compare <baseline> <test>");
                std::process::exit(1);
            };
            let baseline_path = find_session_file(baseline_id, None)?;
            let test_path = find_session_file(test_id, None)?;

            let (baseline, test) =
                tokio::join!(load_summary(baseline_path), load_summary(test_path));
            let (baseline, test) = (baseline?, test?);

            let comparison = compare(&baseline, &test);
            print_comparison(&baseline, &test, &comparison);
            Ok(())
        }
        Some("--list") => {
            let sessions = list_session_files(args.get(1).map(String::as_str))?;
            print_session_list(&sessions);
            Ok(())
        }
        Some(identifier) => {
            let path = find_session_file(identifier, None)?;
            let summary = load_summary(path).await?;

            if args.iter().any(|a| a == "--json") {
                let report = JsonReport {
                    totals: summary.combined_tokens(),
                    main_agent_cost: summary.main_agent_cost(),
                    hook_cost: summary.hook_cost(),
                    total_cost: summary.main_agent_cost().total_cost
                        + summary.hook_cost().total_cost,
                    summary: &summary,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_session_report(&summary);
            }
            Ok(())
        }
    }
}

/// Parse and aggregate one session off the async runtime
async fn load_summary(path: PathBuf) -> Result<SessionSummary> {
    task::spawn_blocking(move || analyze_session(&path, &ModelNameHeuristic)).await?
}
