use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    // Logs go to stderr so stdout stays clean for JSON output.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    goldish::cli::run()
}
