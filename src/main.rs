//! Reactor-gen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the prompt-driven scaffolding flow,
//! and coordinates interactions between different modules.

use reactor_gen::{
    answers::{collect, get_preloaded_answers, Answers},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    install::run_install,
    processor::{resolve_output_root, scaffold},
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_welcome() {
    println!();
    println!("Welcome to the ExtReact app generator");
    println!();
    println!("We're going to create a new React app that uses Sencha ExtReact components.");
    println!();
}

fn print_completion(answers: &Answers) {
    let chdir = if answers.create_directory {
        format!("\"cd {}\" then ", answers.package_name)
    } else {
        String::new()
    };

    println!();
    println!("Your new ExtReact app is ready!");
    println!();
    println!(
        "Type {}\"npm start\" to run the development build and open your new app in a web browser.",
        chdir
    );
    println!();
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Prints the welcome banner
/// 2. Collects answers, honoring any preloaded via stdin
/// 3. Resolves the output root (new directory or current directory)
/// 4. Copies the boilerplate, rewrites placeholders, writes the manifest
/// 5. Installs dependencies unless skipped
/// 6. Prints the completion banner
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();

    print_welcome();

    let preloaded_answers = get_preloaded_answers(args.stdin)?;
    let answers = collect(&prompt, &preloaded_answers)?;
    log::debug!(
        "Collected answers: {}",
        serde_json::to_string(&answers).unwrap_or_default()
    );

    let output_root = resolve_output_root(&answers, args.force)?;
    scaffold(&args.boilerplate, &output_root, &answers)?;

    if args.skip_install {
        log::debug!("Skipping dependency installation");
    } else {
        run_install(&output_root)?;
    }

    print_completion(&answers);
    Ok(())
}
