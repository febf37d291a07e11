//! Runs the reference simulation once and reports it on stdout.

use delayflow::caller::fetch_and_report;
use delayflow::observability::{init_tracing, LogFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty)?;

    let pending = delayflow::fetch_data();
    let outcome = fetch_and_report(pending, &mut std::io::stdout()).await?;

    tracing::debug!(status = %outcome.status, value = outcome.value, "Done");
    Ok(())
}
