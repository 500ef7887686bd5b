//! appiumize CLI - Perfecto to Appium test script converter
//!
//! Commands:
//! - file: Convert one file (default output `converted_<name>`)
//! - folder: Convert a directory tree into the sibling `converted_<name>`
//! - rules: List the active rules in application order
//! - verify-rules: Run the inline tests of a YAML rule file

mod backup;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use appiumize_convert::{default_output_path, tree_output_path, Converter, ExcludeSet, WalkOptions};
use appiumize_rules::{load_rules_from_dir, load_rules_from_file, RuleRegistry};
use backup::{BackupManager, BACKUP_DIR};
use config::Config;
use output::{print_unified_diff, OutputFormat, Reporter};

#[derive(Parser)]
#[command(name = "appiumize")]
#[command(version)]
#[command(about = "Convert Perfecto mobile test scripts to Appium")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Extra YAML rule files or directories, applied after the built-in rules (repeatable)
    #[arg(long, global = true, value_name = "PATH")]
    rules: Vec<PathBuf>,

    /// Output format: text, json
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,

    /// Show verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Path to config file (default: auto-detect .appiumize.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single file
    File {
        /// File to convert
        input: PathBuf,
        /// Destination (default: converted_<name> next to the input)
        output: Option<PathBuf>,
        /// Print a unified diff of the conversion
        #[arg(long)]
        diff: bool,
    },
    /// Convert an entire folder into converted_<name>
    Folder {
        /// Folder to convert
        path: PathBuf,
        /// Convert files in parallel
        #[arg(long)]
        parallel: bool,
        /// Back up an existing output folder before clearing it
        #[arg(long)]
        backup: bool,
    },
    /// List active rules
    Rules,
    /// Run the inline tests of a YAML rule file
    VerifyRules {
        /// YAML rule file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config file
    let (config, config_path) = if cli.no_config {
        (Config::default(), None)
    } else if let Some(path) = &cli.config {
        (Config::load_path(path)?, Some(path.clone()))
    } else {
        match Config::load()? {
            Some((cfg, path)) => (cfg, Some(path)),
            None => (Config::default(), None),
        }
    };

    // Determine output format: CLI flags override the config file
    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        let requested = cli
            .format
            .as_deref()
            .or(config.output.format.as_deref())
            .unwrap_or("text");
        OutputFormat::from_str(requested).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: text, json",
                requested
            )
        })?
    };

    if cli.verbose && output_format == OutputFormat::Text {
        if let Some(path) = &config_path {
            println!("{}: {}", "Using config".bold(), path.display());
        }
    }

    match cli.command {
        Command::VerifyRules { file } => verify_rules(&file, output_format),
        Command::Rules => {
            let registry = build_registry(&cli.rules, &config, config_path.as_deref())?;
            list_rules(&registry, output_format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::File {
            input,
            output,
            diff,
        } => {
            let registry = build_registry(&cli.rules, &config, config_path.as_deref())?;
            let converter = Converter::new(Arc::new(registry));
            convert_file(&converter, &input, output, diff, output_format, cli.verbose)
        }
        Command::Folder {
            path,
            parallel,
            backup,
        } => {
            let registry = build_registry(&cli.rules, &config, config_path.as_deref())?;
            let options = WalkOptions {
                parallel: parallel || config.convert.parallel,
                exclude: ExcludeSet::new(config.paths.exclude.iter().cloned()),
            };
            let converter = Converter::new(Arc::new(registry)).with_options(options);
            convert_folder(
                &converter,
                &path,
                backup || config.convert.backup,
                output_format,
                cli.verbose,
            )
        }
    }
}

/// Built-in rules minus disabled ones, then config rule files, then `--rules`
///
/// A directory contributes every `.yaml`/`.yml` file under it, in name order.
fn build_registry(
    extra_files: &[PathBuf],
    config: &Config,
    config_path: Option<&Path>,
) -> Result<RuleRegistry> {
    let disabled = config.disabled_rules();
    let builtin = RuleRegistry::builtin();
    let known = builtin.names();
    for name in &disabled {
        if !known.contains(name) {
            eprintln!(
                "{}: Unknown rule '{}' in config. Use `appiumize rules` to see available rules.",
                "Warning".yellow(),
                name
            );
        }
    }
    let registry = builtin.without(&disabled);

    let mut files = config.rule_files(config_path.and_then(Path::parent));
    files.extend(extra_files.iter().cloned());

    for file in files {
        let loaded = if file.is_dir() {
            load_rules_from_dir(&file)
        } else {
            load_rules_from_file(&file)
        }
        .with_context(|| format!("Failed to load rules from {}", file.display()))?;
        tracing::info!(file = %file.display(), rules = loaded.len(), "loaded rule file");
        for rule in loaded {
            registry.add(rule.into_definition());
        }
    }

    Ok(registry)
}

fn list_rules(registry: &RuleRegistry, format: OutputFormat) -> Result<()> {
    let rules = registry.list_rules();

    match format {
        OutputFormat::Text => {
            println!("{}", "Active rules (in application order):".bold());
            for (name, description) in rules {
                println!("  {} - {}", name.green(), description);
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = rules
                .into_iter()
                .map(|(name, description)| serde_json::json!({ "name": name, "description": description }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<PathBuf>,
    diff: bool,
    format: OutputFormat,
    verbose: bool,
) -> Result<ExitCode> {
    let output = match output {
        Some(path) => path,
        None => default_output_path(input)?,
    };

    if format == OutputFormat::Text {
        println!("{}: {}", "Converting file".bold(), input.display());
        println!("{}: {}", "Output file".bold(), output.display());
    }

    let original = if diff {
        std::fs::read_to_string(input).ok()
    } else {
        None
    };

    let outcome = converter.convert_file(input, &output)?;
    let converted = outcome.is_converted();

    if diff && converted && format == OutputFormat::Text {
        if let Some(old) = &original {
            let new = std::fs::read_to_string(&output)
                .with_context(|| format!("Failed to read {}", output.display()))?;
            print_unified_diff(input, old, &new);
        }
    }

    let mut reporter = Reporter::new(format, verbose);
    reporter.set_output(&output);
    reporter.report_file(input, outcome);
    let failed = reporter.summary().errors > 0;
    reporter.finish();

    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn convert_folder(
    converter: &Converter,
    path: &Path,
    backup: bool,
    format: OutputFormat,
    verbose: bool,
) -> Result<ExitCode> {
    let output_root = tree_output_path(path)?;

    if output_root.exists() {
        if format == OutputFormat::Text {
            eprintln!(
                "{}: Output folder already exists and will be cleared: {}",
                "Warning".yellow(),
                output_root.display()
            );
        }

        if backup && path.is_dir() {
            let backup_dir = output_root
                .parent()
                .map(|p| p.join(BACKUP_DIR))
                .unwrap_or_else(|| PathBuf::from(BACKUP_DIR));
            let mut manager = BackupManager::new(backup_dir, true);
            manager.init_session()?;
            if verbose && format == OutputFormat::Text {
                if let Some(session) = manager.session_path() {
                    println!("{}: {}", "Backup session".bold(), session.display());
                }
            }
            if let Some((location, files)) = manager.backup_tree(&output_root)? {
                if format == OutputFormat::Text {
                    println!(
                        "{}: {} file(s) saved to {}",
                        "Backup".bold(),
                        files,
                        location.display()
                    );
                }
            }
        }
    }

    if format == OutputFormat::Text {
        println!(
            "{}: {} -> {}",
            "Converting folder".bold(),
            path.display(),
            output_root.display()
        );
    }

    let result = converter.convert_tree(path)?;

    let mut reporter = Reporter::new(format, verbose);
    reporter.set_output(&result.output_root);
    for record in result.report.files {
        reporter.report_file(&record.path, record.outcome);
    }
    for failure in result.report.folder_failures {
        reporter.report_folder_failure(failure);
    }
    let failed = reporter.summary().errors > 0;
    reporter.finish();

    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn verify_rules(file: &Path, format: OutputFormat) -> Result<ExitCode> {
    let rules = load_rules_from_file(file)
        .with_context(|| format!("Failed to load rules from {}", file.display()))?;

    let mut passed = 0;
    let mut failed = 0;
    let mut report = Vec::new();

    for rule in &rules {
        let results = rule.run_tests();
        for result in &results {
            if result.passed {
                passed += 1;
            } else {
                failed += 1;
            }
        }

        match format {
            OutputFormat::Text => {
                println!("{}", rule.rule().name.bold());
                if results.is_empty() {
                    println!("  {} no test cases", "-".dimmed());
                }
                for result in &results {
                    if result.passed {
                        println!("  {} {}", "OK".green(), result.input);
                    } else {
                        println!("  {} {}", "FAIL".red(), result.input);
                        if let Some(expected) = &result.expected {
                            println!("    expected: {}", expected);
                        }
                        println!("    actual:   {}", result.actual);
                        if let Some(error) = &result.error {
                            println!("    {}", error.yellow());
                        }
                    }
                }
            }
            OutputFormat::Json => {
                let cases: Vec<_> = results
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "input": r.input,
                            "expected": r.expected,
                            "actual": r.actual,
                            "passed": r.passed,
                            "error": r.error,
                        })
                    })
                    .collect();
                report.push(serde_json::json!({ "rule": rule.rule().name, "tests": cases }));
            }
        }
    }

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "Summary".bold().underline());
            println!("  Rules: {}", rules.len());
            println!("  Passed: {}", passed);
            if failed > 0 {
                println!("  Failed: {}", failed);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "rules": report,
                "summary": { "rules": rules.len(), "passed": passed, "failed": failed },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
