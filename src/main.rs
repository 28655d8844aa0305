use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use modaudit::audit::checker::Auditor;
use modaudit::audit::formats::FormatRegistry;
use modaudit::config;
use modaudit::manifest::Manifest;
use modaudit::remote::forge::ForgeClient;
use modaudit::remote::git::GitLsRemote;

#[derive(Parser)]
#[command(name = "modaudit")]
#[command(version, about = "Print outdated module dependencies")]
struct Cli {
    /// Path to the dependency manifest
    #[arg(short, long, default_value = config::DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Path to the ignore file (one dependency name per line)
    #[arg(long, default_value = config::DEFAULT_IGNORE_FILE)]
    ignore_file: PathBuf,

    /// Forge base URL (overrides the manifest's `forge` entry)
    #[arg(long)]
    forge: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let manifest = Manifest::load(&cli.manifest)?;
    let ignore = config::load_ignore_list(&cli.ignore_file)
        .with_context(|| format!("failed to read {}", cli.ignore_file.display()))?;

    let forge_url = cli
        .forge
        .or_else(|| manifest.forge.clone())
        .unwrap_or_else(|| config::DEFAULT_FORGE_URL.to_string());

    let auditor = Auditor::new(
        ForgeClient::new(&forge_url),
        GitLsRemote::default(),
        FormatRegistry::default(),
        ignore,
    );

    let outcome = auditor.audit(&manifest.dependencies).await;

    for finding in &outcome.findings {
        println!(
            "{} is OUTDATED: {} vs {}",
            finding.name, finding.declared, finding.latest
        );
    }
    for error in &outcome.errors {
        eprintln!("error: {error}");
    }

    if outcome.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
