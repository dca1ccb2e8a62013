use clap::Parser;
use flowgate::prelude::*;
use std::fs;
use std::time::Instant;

/// A flow graph reachability and structural validation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file (editor wire format)
    flow_path: Option<String>,

    /// Emit the issue list as JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let flow_path = cli
        .flow_path
        .unwrap_or_else(|| exit_with_error("A flow file path is required."));

    let total_start = Instant::now();

    // --- 1. File loading ---
    let load_start = Instant::now();
    let flow_json = fs::read_to_string(&flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", &flow_path, e))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and conversion ---
    let convert_start = Instant::now();
    let ui_flow = UiFlow::from_json(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));
    let flow = ui_flow
        .into_flow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert flow: {}", e)));
    let convert_duration = convert_start.elapsed();

    // --- 3. Traversal and validation ---
    let validate_start = Instant::now();
    let mut engine = TraversalEngine::new();
    let result = engine.traverse(&flow);
    let mut validator = FlowValidator::new();
    let issues = validator.validate(&flow);
    let validate_duration = validate_start.elapsed();

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == ValidationSeverity::Error)
        .count();
    let warnings = issues.len() - errors;

    // --- 4. Results ---
    if cli.json {
        let rendered = serde_json::to_string_pretty(&issues)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize issues: {}", e)));
        println!("{rendered}");
    } else {
        println!(
            "Validated '{}': {} nodes, {} edges",
            flow_path,
            flow.nodes.len(),
            flow.edges.len()
        );
        println!(
            "Flow is {}: {} error(s), {} warning(s)",
            if result.has_valid_flow {
                "valid"
            } else {
                "invalid"
            },
            errors,
            warnings
        );

        if !cli.quiet {
            for issue in &issues {
                println!();
                println!("[{}] {} - {}", issue.severity, issue.code, issue.title);
                println!("    {}", issue.description);
                println!("    Suggestion: {}", issue.suggestion);
            }
            if !result.disconnected_process_nodes.is_empty() {
                println!();
                println!(
                    "Disconnected process nodes: {}",
                    result.disconnected_process_nodes.join(", ")
                );
            }

            println!();
            println!("--- Performance Summary ---");
            println!("File Loading:  {:?}", load_duration);
            println!("Conversion:    {:?}", convert_duration);
            println!("Validation:    {:?}", validate_duration);
            println!("---------------------------");
            println!("Total:         {:?}", total_start.elapsed());
        }
    }

    if errors > 0 {
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
