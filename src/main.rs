use std::sync::Arc;

use clap::Parser;
use color_eyre::{
    Result,
    eyre::Context,
};
use malha::{
    adapters::{HttpClientAdapter, backends, gateway},
    config::{self, ServiceName},
    core::{ForwardingProxy, ServiceRegistry},
    ports::http_client::HttpClient,
    tracing_setup,
};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the gateway in front of the three backend services (default)
    Gateway {
        /// Configuration file (YAML/JSON/TOML); defaults + MALHA_* env vars apply without one
        #[clap(short, long)]
        config: Option<String>,

        /// Bind address, overriding the configured listen address
        #[clap(short, long)]
        listen: Option<String>,

        /// Human-readable console logs instead of JSON
        #[clap(long)]
        console_logs: bool,
    },
    /// Run one of the static backend responders
    Backend {
        /// Which backend to run
        #[clap(value_enum)]
        service: ServiceName,

        /// Bind address
        #[clap(short, long, default_value = "0.0.0.0:5000")]
        listen: String,

        /// Human-readable console logs instead of JSON
        #[clap(long)]
        console_logs: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Gateway {
        config: None,
        listen: None,
        console_logs: false,
    });

    match command {
        Commands::Gateway {
            config,
            listen,
            console_logs,
        } => run_gateway(config.as_deref(), listen, console_logs).await,
        Commands::Backend {
            service,
            listen,
            console_logs,
        } => run_backend(service, listen, console_logs).await,
    }
}

async fn run_gateway(
    config_path: Option<&str>,
    listen: Option<String>,
    console_logs: bool,
) -> Result<()> {
    init_logging(console_logs)?;

    let config =
        config::load_config(config_path).context("Failed to load gateway configuration")?;
    let listen_addr = listen.unwrap_or_else(|| config.listen_addr.clone());

    let client: Arc<dyn HttpClient> = Arc::new(HttpClientAdapter::new());
    let proxy = Arc::new(ForwardingProxy::new(
        ServiceRegistry::from_config(&config),
        client,
        config.forward_timeout(),
    ));

    for service in ServiceName::ALL {
        tracing::info!(
            service = "gateway",
            target_service = %service,
            upstream = config.upstreams.get(&service).map(String::as_str).unwrap_or("<unset>"),
            "registered upstream"
        );
    }

    serve(gateway::router(proxy), &listen_addr, "gateway").await
}

async fn run_backend(service: ServiceName, listen: String, console_logs: bool) -> Result<()> {
    init_logging(console_logs)?;
    serve(backends::router(service), &listen, service.as_str()).await
}

fn init_logging(console_logs: bool) -> Result<()> {
    if console_logs {
        tracing_setup::init_console_tracing()
    } else {
        tracing_setup::init_tracing()
    }
}

async fn serve(app: axum::Router, listen_addr: &str, service: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {listen_addr}"))?;

    tracing::info!(service, listen_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
    }
}
