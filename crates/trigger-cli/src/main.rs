use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use trigger_core::impls::{HttpBackend, HttpProfileStore, HttpReloader, HttpTransport};
use trigger_core::{InvokerBuilder, TriggerArgument, TriggerConfig, TriggerDescriptor, TriggerKind};

#[derive(Debug, Parser)]
#[command(name = "trigger-run", about = "Run a backend trigger and wait for it to settle")]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `base_url` from the config file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send the trigger and print the backend response as JSON
    Run(TriggerArgs),
    /// Print the endpoint path that `run` would request (without `ts`)
    Path(TriggerArgs),
}

#[derive(Debug, clap::Args)]
struct TriggerArgs {
    /// Trigger key, e.g. TrigEndpointURL
    kind: String,
    /// Trigger display name
    name: String,
    /// Explicit argument instead of the resolved one
    #[arg(long)]
    content: Option<String>,
}

impl TriggerArgs {
    fn descriptor(&self) -> Result<(TriggerDescriptor, Option<TriggerArgument>)> {
        let descriptor = TriggerDescriptor::new(self.kind.as_str(), self.name.as_str());
        let content = self
            .content
            .as_deref()
            .map(|raw| TriggerArgument::for_kind(&descriptor.key, raw))
            .transpose()
            .context("invalid --content")?;
        Ok((descriptor, content))
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<TriggerConfig> {
    let mut config = match &cli.config {
        Some(path) => TriggerConfig::load(path)?,
        None => TriggerConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = Some(base_url.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let backend = HttpBackend::from_config(&config).context("failed to set up backend client")?;
    let store = match HttpProfileStore::connect(backend.clone()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "initial profile fetch failed, continuing with an empty profile");
            HttpProfileStore::new(backend.clone())
        }
    };

    let invoker = InvokerBuilder::new()
        .transport(Arc::new(HttpTransport::new(backend.clone())))
        .state_store(Arc::new(store))
        .reloader(Arc::new(HttpReloader::new(backend)))
        .config(&config)
        .build()?;

    match &cli.command {
        Command::Run(args) => {
            let (descriptor, content) = args.descriptor()?;
            tracing::info!(kind = %descriptor.key, name = %descriptor.name, "running trigger");
            let resp = invoker.invoke(&descriptor, content).await;
            println!("{}", serde_json::to_string_pretty(&resp)?);
            if !resp.ok {
                std::process::exit(1);
            }
        }
        Command::Path(args) => {
            let (descriptor, content) = args.descriptor()?;
            if descriptor.key == TriggerKind::Stop {
                println!("(stop trigger reloads the client; no request is sent)");
            } else {
                println!("{}", invoker.endpoint_for(&descriptor, content.as_ref()));
            }
        }
    }

    Ok(())
}
