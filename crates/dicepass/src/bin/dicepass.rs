use dicepass::{Result, TARGET};
use dicepass_cli_helpers::messages;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| {
                    "dicepass=info,dicepass_password=warn".into()
                }),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = dicepass::cli::dicepass::run() {
        tracing::debug!(target: TARGET, error = ?e, "dicepass");
        messages::fail(e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
