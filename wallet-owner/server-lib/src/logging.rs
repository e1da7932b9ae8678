#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    JSON,
    Pretty,
}

/// Install the global tracing subscriber.  Log output goes to stderr, so that a binary's stdout
/// carries only its actual output.
pub fn init_logging(log_format: LogFormat) {
    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    let tracing_subscriber_fmt = tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());

    match log_format {
        LogFormat::Compact => tracing_subscriber_fmt.compact().init(),
        LogFormat::JSON => tracing_subscriber_fmt.json().init(),
        LogFormat::Pretty => tracing_subscriber_fmt.pretty().init(),
    }
}
