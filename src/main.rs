//! One-shot card generator binary.
//!
//! Renders the default card and writes it to the configured output path.

use std::process::ExitCode;

use ogcard_renderer::{CardComposer, CardConfig, ComposeError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ComposeError> {
    let config = CardConfig::default();
    let output = config.output_path.clone();

    let composer = CardComposer::new(config);
    let card = composer.compose()?;
    card.save_png(&output)?;

    println!("Saved: {}", output.display());
    Ok(())
}
