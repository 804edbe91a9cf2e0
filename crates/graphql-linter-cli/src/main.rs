mod commands;
mod exit_code;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-linter")]
#[command(about = "Lint GraphQL schema files", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory or schema file to lint (defaults to the project root)
    #[arg(long = "targetPath", alias = "target-path", value_name = "PATH")]
    target_path: Option<PathBuf>,

    /// Path to the YAML configuration (defaults to <project root>/.graphql-linter.yml)
    #[arg(long = "configPath", alias = "config-path", value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Enable debug logging, including every suppressed diagnostic
    #[arg(long)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = commands::lint::run(cli.target_path, cli.config_path, cli.format).await;
    tracing::debug!(exit_code = code.code(), "Finished: {code}");
    code.exit()
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_camel_case_and_kebab_case_flags() {
        let cli = Cli::try_parse_from([
            "graphql-linter",
            "--targetPath",
            "schemas",
            "--config-path",
            "lint.yml",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.target_path, Some(PathBuf::from("schemas")));
        assert_eq!(cli.config_path, Some(PathBuf::from("lint.yml")));
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Human));
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from(["graphql-linter", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.target_path, None);
    }
}
