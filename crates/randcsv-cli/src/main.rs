mod help;
mod logging;

use std::ffi::OsString;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randcsv_generate::{
    GenerateOptions, GenerationEngine, GenerationError, Invocation, interpret_args,
    seed_from_clock,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

fn main() -> ExitCode {
    let tokens = collect_tokens(std::env::args_os());

    match run(&tokens) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Generation(GenerationError::Usage)) => {
            tracing::error!(event = "usage_error", "no arguments given");
            eprintln!("{}", GenerationError::Usage);
            eprintln!("{}", help::help_text());
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Every argument after the program name, untouched. `--` and leading
/// dashes are column tokens here, not option syntax.
fn collect_tokens<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

fn run(tokens: &[String]) -> Result<(), CliError> {
    logging::init_logging()?;

    let seed = seed_from_clock();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::debug!(event = "rng_seeded", seed);

    let request = match interpret_args(tokens, &mut rng)? {
        Invocation::Help => {
            println!("{}", help::help_text());
            return Ok(());
        }
        Invocation::Generate(request) => request,
    };

    let engine = GenerationEngine::new(GenerateOptions::default());
    let result = engine.run(&request, &mut rng)?;

    println!(
        "generated {} rows x {} columns into {}",
        result.report.rows_written,
        result.report.columns,
        result.out_path.display()
    );
    Ok(())
}
