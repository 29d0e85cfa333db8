use clap::{Parser, Subcommand};
use haichi::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Wire and validate declarative layout templates
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate a layout template with values and print the result
    Wire {
        /// Path to the template JSON file (a single template or an array of them)
        template_path: String,
        /// Optional path to a JSON object of input values
        #[arg(short, long)]
        values: Option<String>,
        /// Which template of an array to wire
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Write the populated layout here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Abort when a required input variable has no value
        #[arg(long)]
        strict: bool,
        /// Validate the populated layout before writing it
        #[arg(long)]
        validate: bool,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate one or more rendered layout files
    Validate {
        /// Paths to layout JSON files
        #[arg(required = true)]
        layout_paths: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Wire {
            template_path,
            values,
            index,
            output,
            strict,
            validate,
            pretty,
        } => run_wire(
            &template_path,
            values.as_deref(),
            index,
            output.as_deref(),
            strict,
            validate,
            pretty,
        ),
        Command::Validate { layout_paths } => run_validate(&layout_paths),
    }
}

fn run_wire(
    template_path: &str,
    values_path: Option<&str>,
    index: usize,
    output_path: Option<&str>,
    strict: bool,
    validate: bool,
    pretty: bool,
) {
    let start = Instant::now();

    let templates = TemplateSet::from_file(template_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load template '{}': {}",
            template_path, e
        ))
    });
    let template = templates.get(index).unwrap_or_else(|| {
        exit_with_error(&format!(
            "Template index {} out of range ({} template(s) in '{}')",
            index,
            templates.len(),
            template_path
        ))
    });

    let values = match values_path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read values file '{}': {}", path, e))
            });
            values_from_str(&text).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse values '{}': {}", path, e))
            })
        }
        None => ValuesMap::new(),
    };

    let policy = if strict {
        RequiredPolicy::Fail
    } else {
        RequiredPolicy::Skip
    };
    let binder = Binder::builder(template)
        .with_required_policy(policy)
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load layout: {}", e)));
    let outcome = binder
        .wire(&values)
        .unwrap_or_else(|e| exit_with_error(&format!("Wiring failed: {}", e)));

    for diagnostic in &outcome.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    if validate {
        let report = Validator::default().validate(&outcome.layout);
        print_report(&report);
        if !report.success {
            exit_with_error("Populated layout failed validation");
        }
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&outcome.layout)
    } else {
        serde_json::to_string(&outcome.layout)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize layout: {}", e)));

    match output_path {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            eprintln!("Wrote populated layout to '{}' in {:?}", path, start.elapsed());
        }
        None => println!("{}", rendered),
    }
}

fn run_validate(layout_paths: &[String]) {
    let visualizations: Vec<Visualization> = layout_paths
        .iter()
        .map(|path| {
            Visualization::from_file(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load layout '{}': {}", path, e))
            })
        })
        .collect();

    for (i, visualization) in visualizations.iter().enumerate() {
        println!("Viz {}: {}", i, visualization.title);
    }

    let report = Validator::default().validate_visualizations(&visualizations);
    print_report(&report);
    if !report.success {
        std::process::exit(1);
    }
}

fn print_report(report: &ValidationResult) {
    println!(
        "\nValidation {}",
        if report.success { "passed" } else { "failed" }
    );
    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for error in &report.errors {
            println!("  - {}", error);
        }
    }
    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
