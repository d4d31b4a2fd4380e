use anyhow::{anyhow, Context, Result};
use clap::Parser;
use route_compiler::config::AppConfig;
use route_compiler::emitter::RouteTableEmitter;
use route_compiler::errors::ChainId;
use route_compiler::router::RouteCompiler;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compile the declarative route spec into a validated route table.
#[derive(Parser, Debug)]
#[command(name = "route-compiler", version)]
struct Cli {
    /// Hub chain to compile routes for (defaults to ROUTEGEN_HUB_CHAIN_ID, then 1)
    hub_chain_id: Option<ChainId>,
}

fn main() -> Result<()> {
    init_tracing().context("initialize tracing subscriber")?;

    if let Err(err) = run(Cli::parse()) {
        tracing::error!(error = ?err, "route compilation failed");
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()
        .context("load configuration from environment")?
        .with_hub_chain_id(cli.hub_chain_id);

    info!(
        hub_chain = config.hub_chain_id,
        route_spec = %config.route_spec.display(),
        token_registry = %config.token_registry.display(),
        "compiling routes"
    );

    let spec = config.load_route_spec()?;
    let registry = config.load_token_registry()?;

    RouteTableEmitter::new(&config.output_dir)
        .compile_and_write(&RouteCompiler::new(&spec, &registry), config.hub_chain_id)?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("tracing subscriber init: {err}"))
}
