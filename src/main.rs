use std::io::IsTerminal;

use jsonflow::{PipelineConfig, SAMPLE_DOCUMENT, spawn_pipeline};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = PipelineConfig::from_env();

    // Piped input stands in for the editor; otherwise show the bundled sample.
    let text = if std::io::stdin().is_terminal() {
        SAMPLE_DOCUMENT.to_owned()
    } else {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .expect("failed to read stdin");
        if buf.trim().is_empty() { SAMPLE_DOCUMENT.to_owned() } else { buf }
    };

    let (pipeline, task) = spawn_pipeline(&config);
    let mut snapshots = pipeline.subscribe();
    pipeline.edit(text).await.expect("pipeline stopped before first edit");

    snapshots.changed().await.expect("pipeline stopped before publishing");
    let snapshot = snapshots.borrow_and_update().clone();

    drop(pipeline);
    task.await.expect("pipeline task panicked");

    if let Some(error) = &snapshot.error {
        tracing::error!(%error, "no diagram produced");
        std::process::exit(1);
    }

    let json = serde_json::to_string_pretty(snapshot.as_ref()).expect("snapshot serializes");
    println!("{json}");
    tracing::info!(nodes = snapshot.nodes.len(), edges = snapshot.edges.len(), "diagram written");
}
