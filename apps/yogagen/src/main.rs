mod report;

use anyhow::Context;
use catalog_config::{load_catalog_settings, CatalogSettings};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use yoga_catalog::{build_catalog_with_progress, write_catalog, AspectLimit, Vocabulary};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Output JSON path (default: generated-yogas.json, or catalog.output from the config).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Settings file; without it the built-in defaults apply.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Max aspect records: a count, or `all` for the full product.
    #[arg(long)]
    aspect_limit: Option<AspectLimit>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    if let Some(source) = &settings.source {
        log::info!("settings loaded from {}", source.display());
    }

    let stdout = io::stdout();
    run(&settings, &mut stdout.lock())
}

/// CLI flags override the config file, which overrides built-in defaults.
fn resolve_settings(args: &Args) -> anyhow::Result<CatalogSettings> {
    let mut settings = load_catalog_settings(args.config.as_deref())?;
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if let Some(limit) = args.aspect_limit {
        settings.aspect_limit = limit;
    }
    Ok(settings)
}

fn run(settings: &CatalogSettings, out: &mut impl Write) -> anyhow::Result<()> {
    let vocab = Vocabulary::standard();

    let mut progress_err = None;
    let catalog = build_catalog_with_progress(&vocab, settings.aspect_limit, |category| {
        if progress_err.is_none() {
            progress_err = report::write_progress(out, category).err();
        }
    })?;
    if let Some(e) = progress_err {
        return Err(e).context("Failed to write progress");
    }

    report::write_total(out, catalog.len())?;

    write_catalog(&settings.output, &catalog)
        .with_context(|| format!("Failed to save catalog to {}", settings.output.display()))?;
    report::write_saved(out, &settings.output)?;

    report::write_summary(out, &catalog.summary())?;
    out.flush()?;
    Ok(())
}
