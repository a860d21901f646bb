//! Command-line interface implementation for reactor-gen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for reactor-gen.
#[derive(Parser, Debug)]
#[command(author, version, about = "reactor-gen: interactive generator for ExtReact + React applications", long_about = None)]
pub struct Args {
    /// Path to the ExtReact boilerplate directory
    #[arg(value_name = "BOILERPLATE")]
    pub boilerplate: PathBuf,

    /// Overwrite the project directory if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers as a JSON object from stdin.
    /// Keys present in the object pre-answer the corresponding questions
    /// and their prompts are skipped.
    #[arg(short, long)]
    pub stdin: bool,

    /// Skip the npm install step after generation
    #[arg(long)]
    pub skip_install: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
