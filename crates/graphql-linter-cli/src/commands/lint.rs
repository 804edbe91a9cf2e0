use crate::exit_code::ExitCode;
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_linter::{lint_path, Diagnostic, LintError, RunReport};
use graphql_linter_config::{current_project_root, resolve_config, ConfigError, CONFIG_FILE_NAME};
use std::path::PathBuf;

/// Lint the target and report. Returns the exit code for the run.
pub async fn run(
    target_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> ExitCode {
    match lint(target_path, config_path).await {
        Ok(report) => {
            let printed = match format {
                OutputFormat::Human => {
                    print_human(&report);
                    Ok(())
                }
                OutputFormat::Json => print_json(&report),
            };
            if let Err(e) = printed {
                tracing::error!("Failed to write report: {e:#}");
                return ExitCode::IoError;
            }

            if report.is_success() {
                ExitCode::Success
            } else {
                ExitCode::LintErrors
            }
        }
        Err(e) => {
            let code = exit_code_for(&e);
            match format {
                OutputFormat::Human => eprintln!("{} {e:#}", "✗".red()),
                OutputFormat::Json => {
                    eprintln!("{}", serde_json::json!({ "error": format!("{e:#}") }));
                }
            }
            code
        }
    }
}

async fn lint(target_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<RunReport> {
    let project_root = current_project_root().context("Failed to determine project root")?;

    let explicit = config_path.is_some();
    let config_path = config_path.unwrap_or_else(|| project_root.join(CONFIG_FILE_NAME));
    let config = resolve_config(&config_path, explicit)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::debug!(
        config = %config_path.display(),
        suppressions = config.suppressions.len(),
        "Loaded configuration"
    );

    let target = target_path.unwrap_or(project_root);
    let report = lint_path(&target, &config)
        .await
        .with_context(|| format!("Failed to lint {}", target.display()))?;

    Ok(report)
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        return ExitCode::ConfigError;
    }

    match error.downcast_ref::<LintError>() {
        Some(LintError::Config(_)) => ExitCode::ConfigError,
        _ => ExitCode::IoError,
    }
}

fn print_human(report: &RunReport) {
    for diagnostic in report.diagnostics() {
        print!("{}", format_diagnostic(diagnostic));
    }

    println!();
    print!("{}", report.render_error_type_summary());

    let summary = report.summary();
    if summary.total_errors > 0 {
        println!(
            "\n{} {}/{} file(s) passed ({})",
            "✗".red(),
            summary.passed_files,
            summary.total_files,
            summary.percent_passed
        );
    } else {
        println!(
            "\n{}",
            format!(
                "✓ All {} schema file(s) passed linting successfully!",
                summary.total_files
            )
            .green()
        );
    }

    tracing::info!(
        passedFiles = summary.passed_files,
        totalFiles = summary.total_files,
        percentPassed = %summary.percent_passed,
        "Lint summary"
    );
    if report.total_suppressed() > 0 {
        tracing::debug!(suppressed = report.total_suppressed(), "Diagnostics suppressed by configuration");
    }

    if summary.total_errors > 0 {
        tracing::error!(
            filesWithAtLeastOneError = summary.files_with_at_least_one_error,
            percentageFilesWithErrors = %summary.percentage_files_with_errors,
            "Schema files with errors"
        );
        tracing::error!("totalErrors: {}", summary.total_errors);
    }
}

/// Location line followed by the source line, which may be blank
fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let (rule, text) = diagnostic
        .message
        .split_once(": ")
        .unwrap_or((diagnostic.rule_id(), diagnostic.message.as_str()));

    format!(
        "{}:{}: {}: {}\n  {}\n",
        diagnostic.file.cyan(),
        diagnostic.line.to_string().cyan(),
        rule.red().bold(),
        text,
        diagnostic.line_content.dimmed()
    )
}

fn print_json(report: &RunReport) -> Result<()> {
    let diagnostics: Vec<&Diagnostic> = report.diagnostics().collect();
    let output = serde_json::json!({
        "diagnostics": diagnostics,
        "summary": report.summary(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize report")?
    );
    Ok(())
}
