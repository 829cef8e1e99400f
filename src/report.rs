use crate::compare::{Direction, SummaryComparison};
use crate::types::{CostBreakdown, SessionSummary};
use crate::utils::SessionFile;
use colored::Colorize;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

// Format number with thousands separator
fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

fn print_cost(label: &str, cost: &CostBreakdown) {
    println!("\n{}", format!("{label}:").yellow());
    println!("  Input:        ${:.4}", cost.input_cost);
    println!("  Output:       ${:.4}", cost.output_cost);
    println!("  Cache read:   ${:.4}", cost.cache_read_cost);
    println!("  Cache create: ${:.4}", cost.cache_create_cost);
    println!(
        "  {}",
        format!("Total:        ${:.4}", cost.total_cost).green()
    );
}

pub fn print_session_report(summary: &SessionSummary) {
    println!("\n{}", RULE.cyan());
    println!("{}", "  Claude Session Analysis".cyan());
    println!("{}", RULE.cyan());

    println!("\n{} {}", "Session:".yellow(), summary.session_id);
    println!("{}", summary.file_path.dimmed());

    println!("\n{}", "Overview:".yellow());
    println!("  Entries:         {}", summary.entry_count);
    println!("  User prompts:    {}", summary.user_prompts.len());
    println!("  Tool uses:       {}", summary.tool_uses.len());
    println!("  Thinking blocks: {}", summary.thinking_blocks);

    let main = &summary.main_agent;
    println!("\n{}", "Main Agent:".yellow());
    println!("  API calls:       {}", main.api_calls);
    println!(
        "  Input tokens:    {:>12}",
        format_with_commas(main.tokens.input_tokens)
    );
    println!(
        "  Output tokens:   {:>12}",
        format_with_commas(main.tokens.output_tokens)
    );
    println!(
        "  Cache creation:  {:>12}",
        format_with_commas(main.tokens.cache_creation_tokens)
    );
    println!(
        "  Cache read:      {:>12}",
        format_with_commas(main.tokens.cache_read_tokens)
    );
    println!(
        "  {} {:>12}",
        "Input context:  ".green(),
        format_with_commas(main.tokens.total_input_context())
    );

    let hooks = &summary.hooks;
    println!("\n{}", "Hooks (lightweight):".yellow());
    println!("  API calls:       {}", hooks.api_calls);
    println!(
        "  Input tokens:    {:>12}",
        format_with_commas(hooks.tokens.input_tokens)
    );
    println!(
        "  Output tokens:   {:>12}",
        format_with_commas(hooks.tokens.output_tokens)
    );

    let combined = summary.combined_tokens();
    println!("\n{}", "Token Usage (all calls):".yellow());
    println!(
        "  {} {:>12}",
        "Input context:  ".green(),
        format_with_commas(combined.total_input_context())
    );
    println!(
        "  {} {:>12}",
        "Output:         ".green(),
        format_with_commas(combined.output_tokens)
    );

    if !summary.calls_by_model.is_empty() {
        println!("\n{}", "API Calls by Model:".yellow());
        for (model, count) in &summary.calls_by_model {
            println!("  {model}: {count}");
        }
    }

    let main_cost = summary.main_agent_cost();
    let hook_cost = summary.hook_cost();
    print_cost("Estimated Cost (main agent, primary tier)", &main_cost);
    print_cost("Estimated Cost (hooks, lightweight tier)", &hook_cost);

    if !summary.user_prompts.is_empty() {
        println!("\n{}", "User Prompts:".yellow());
        for (i, prompt) in summary.user_prompts.iter().take(5).enumerate() {
            let one_line: String = prompt.chars().take(60).map(|c| if c == '\n' { ' ' } else { c }).collect();
            println!("  {}. {}", i + 1, one_line.dimmed());
        }
        if summary.user_prompts.len() > 5 {
            println!(
                "  {}",
                format!("... and {} more", summary.user_prompts.len() - 5).dimmed()
            );
        }
    }

    if !summary.tool_uses.is_empty() {
        println!("\n{}", "Tools Used:".yellow());
        for (name, count) in summary.tool_use_counts().into_iter().take(10) {
            println!("  {name}: {count}");
        }
    }

    println!(
        "\n{}",
        format!(
            "Total Session Cost: ${:.4}",
            main_cost.total_cost + hook_cost.total_cost
        )
        .bold()
    );
    println!();
}

pub fn print_comparison(
    baseline: &SessionSummary,
    test: &SessionSummary,
    comparison: &SummaryComparison,
) {
    println!("\n{}", RULE.cyan());
    println!("{}", "  Session Comparison".cyan());
    println!("{}", RULE.cyan());

    println!("\n{} {}", "Baseline:".yellow(), baseline.session_id);
    println!("{} {}", "Test:    ".yellow(), test.session_id);

    println!(
        "\n{}",
        format!(
            "{:<25} {:>12} {:>12} {:>12}",
            "Metric", "Baseline", "Test", "Diff"
        )
        .yellow()
    );
    println!("{}", "-".repeat(64));

    for metric in &comparison.metrics {
        let diff_str = if metric.diff > 0 {
            format!("+{}", format_with_commas(metric.diff as u64))
        } else {
            metric.diff.to_string()
        };
        let diff_str = match metric.direction {
            Direction::Increase => diff_str.red(),
            Direction::Decrease => diff_str.green(),
            Direction::Unchanged => diff_str.dimmed(),
        };
        println!(
            "  {:<23} {:>12} {:>12} {:>12}",
            metric.label,
            format_with_commas(metric.baseline),
            format_with_commas(metric.test),
            diff_str
        );
    }

    println!("\n{}", "Cost Analysis:".yellow());
    println!("  Baseline cost:     ${:.4}", comparison.baseline_cost);
    println!("  Test cost (main):  ${:.4}", comparison.test_cost);
    println!("  Hook cost:         ${:.6}", comparison.hook_cost);
    println!(
        "  {}",
        format!("Overhead:          ${:.4}", comparison.overhead).bold()
    );
    println!();
}

pub fn print_session_list(sessions: &[SessionFile]) {
    println!("\n{}\n", "Available Sessions:".cyan());

    if sessions.is_empty() {
        println!("  {}", "No sessions found".dimmed());
        return;
    }

    // Group by project, newest first within each
    let mut sessions: Vec<&SessionFile> = sessions.iter().collect();
    sessions.sort_by(|a, b| {
        a.project
            .cmp(&b.project)
            .then(b.modified.cmp(&a.modified))
    });

    let mut current_project: Option<&str> = None;
    for session in sessions {
        if current_project != Some(session.project.as_str()) {
            current_project = Some(session.project.as_str());
            println!("{}", session.project.yellow());
        }
        println!(
            "  {}  {}",
            session.id,
            session.modified.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    println!();
}
