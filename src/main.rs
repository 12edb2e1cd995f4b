use codehook::kernel::config::HookConfig;
use codehook::transport::{driver, HookHandler};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries directives, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = HookConfig::from_env();
    tracing::info!(bot = %config.bot_name, "Code hook booting...");

    let mut handler = HookHandler::new(config)?;
    let handled = driver::run(
        &mut handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    tracing::info!(handled, "Code hook stopped.");
    Ok(())
}
