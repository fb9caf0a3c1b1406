/// idea-spark: print a seeded report of angles and next steps for a topic.
///
/// Usage: idea-spark <topic> [--tone punchy|professional|playful]
///                           [--audience <text>] [--copy] [--templates <file.ron>]

use anyhow::{Context, Result};
use idea_spark::cli::Cli;
use idea_spark::core::clipboard::copy_to_clipboard;
use idea_spark::core::generator::Generator;
use idea_spark::core::template::TemplateLibrary;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let mut builder = Generator::builder(&cli.topic).audience(cli.audience.as_deref());
    if let Some(path) = &cli.templates {
        let library = TemplateLibrary::load_from_ron(path)
            .with_context(|| format!("failed to load templates from '{}'", path.display()))?;
        builder = builder.templates(library);
    }

    let output = builder.build().generate(cli.tone).render();
    println!("{}", output);

    if cli.copy {
        match copy_to_clipboard(&output) {
            Ok(()) => println!("\nCopied to clipboard!"),
            Err(e) => println!("\nWarning: failed to copy to clipboard: {}", e),
        }
    }

    Ok(())
}
