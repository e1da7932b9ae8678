use wallet_owner_server_lib::{LogFormat, ServerConfig};

/// REST server for the wallet owners registry.
#[derive(clap::Parser, Debug)]
struct Args {
    #[command(flatten)]
    server_config: ServerConfig,
    /// Specify the format of log output.  The RUST_LOG env var controls the log level.
    #[arg(
        env = "WALLET_OWNERS_LOG_FORMAT",
        long,
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Ignore errors, since there may not be a .env file (e.g. in docker image)
    let _ = dotenvy::dotenv();

    use clap::Parser;
    let args = Args::parse();

    wallet_owner_server_lib::init_logging(args.log_format);
    tracing::debug!("Parsed commandline options: {:?}", args);

    // Spawn the server, returning a JoinHandle to the task.
    let server_join_handle = wallet_owner_server_lib::spawn_server(args.server_config).await?;
    // Join the task by awaiting it.
    server_join_handle.await?;

    Ok(())
}
