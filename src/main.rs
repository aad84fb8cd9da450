use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tag_manifest::config::{self, FailurePolicy, ManifestConfig};
use tag_manifest::logging;
use tag_manifest::manifest::builder::ManifestBuilder;
use tag_manifest::manifest::writer;
use tag_manifest::tags::sources::GitLsRemote;

#[derive(Parser)]
#[command(name = "tag-manifest")]
#[command(version, about = "Pin remote repositories to their latest release tags")]
struct Cli {
    /// JSON config file overriding the built-in repository list
    #[arg(long)]
    config: Option<PathBuf>,

    /// Manifest output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Prefer tags of this major version (widens to all majors if none match)
    #[arg(long)]
    major: Option<u64>,

    /// What to do when a repository cannot be reached
    #[arg(long, value_enum)]
    on_error: Option<FailurePolicy>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init().map_err(|e| anyhow::anyhow!(e))?;

    let mut config = match &cli.config {
        Some(path) => ManifestConfig::load(path)?,
        None => ManifestConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(on_error) = cli.on_error {
        config.on_error = on_error;
    }

    // --major wins over the version hint from the environment.
    let major = cli.major.or_else(|| {
        config::major_from_hint(std::env::var(config::VERSION_ENV).ok().as_deref())
    });

    let builder = ManifestBuilder::new(GitLsRemote, config.on_error);
    let entries = builder.build(&config.repos, major).await?;
    writer::write(&config.output, &entries)?;

    info!("Wrote {} entries to {}", entries.len(), config.output.display());
    Ok(())
}
