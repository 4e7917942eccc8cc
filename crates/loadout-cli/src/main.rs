mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loadout",
    version,
    about = "Compile loadout tuner workbooks into randomizer profiles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a tuner workbook (.xlsx) into a profile module
    Compile {
        /// Path to the tuner workbook
        input_file: PathBuf,

        /// Where to write the profile module (e.g. my.profile.js)
        output_file: PathBuf,

        /// JSON options file (sheet names, indent)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Resolve a tuner workbook and print a summary without writing anything
    Inspect {
        /// Path to the tuner workbook
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// JSON options file (sheet names, indent)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Inspect the built-in rules blocks
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List the rules presets and when each is used
    List,
    /// Print the flags of a preset
    Show {
        /// Preset name (full or minimal)
        preset: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            input_file,
            output_file,
            config,
        } => commands::compile::run(input_file, output_file, config),
        Commands::Inspect {
            input_file,
            output,
            config,
        } => commands::inspect::run(input_file, &output, config),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Show { preset } => commands::rules::show(&preset),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn compile_takes_input_and_output() {
        let cli = Cli::try_parse_from(["loadout", "compile", "in.xlsx", "out.profile.js"]).unwrap();
        match cli.command {
            Commands::Compile {
                input_file,
                output_file,
                config,
            } => {
                assert_eq!(input_file, PathBuf::from("in.xlsx"));
                assert_eq!(output_file, PathBuf::from("out.profile.js"));
                assert!(config.is_none());
            }
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn compile_without_output_is_usage_error() {
        let err = match Cli::try_parse_from(["loadout", "compile", "in.xlsx"]) {
            Err(e) => e,
            Ok(_) => panic!("expected usage error"),
        };
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn inspect_defaults_to_table() {
        let cli = Cli::try_parse_from(["loadout", "inspect", "in.xlsx", "-c", "opts.json"]).unwrap();
        match cli.command {
            Commands::Inspect { output, config, .. } => {
                assert_eq!(output, "table");
                assert_eq!(config, Some(PathBuf::from("opts.json")));
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn rules_show_takes_preset() {
        let cli = Cli::try_parse_from(["loadout", "rules", "show", "minimal"]).unwrap();
        match cli.command {
            Commands::Rules {
                action: RulesAction::Show { preset },
            } => assert_eq!(preset, "minimal"),
            _ => panic!("expected rules show"),
        }
    }
}
