mod prompt;

use std::fs;
use std::io;

const OUTPUT_PATH: &str = "logo.svg";

fn main() -> miette::Result<()> {
    // Logs go to stderr so they never mix with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = io::stdin();
    let answers = prompt::interview(&mut stdin.lock(), &mut io::stdout())
        .map_err(|e| miette::miette!("Failed to read answers: {}", e))?;
    tracing::debug!(?answers, "interview finished");

    let svg = sigil::generate_logo(
        &answers.shape,
        &answers.text,
        &answers.text_color,
        &answers.shape_color,
    )?;

    match fs::write(OUTPUT_PATH, &svg) {
        Ok(()) => println!("Generated {OUTPUT_PATH}"),
        Err(e) => eprintln!("Failed to write {}: {}", OUTPUT_PATH, e),
    }
    Ok(())
}
