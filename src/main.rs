use std::env;
use std::path::PathBuf;

use tracing::{info, warn};
use tx_context::{config, fetch, store, Pipeline};

fn usage() -> eyre::Report {
    eyre::eyre!(
        "usage:\n  tx-context grab-transaction <hash> <prefix>\n  tx-context classify <fixture.json>"
    )
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("grab-transaction") => {
            let [_, hash, prefix] = args.as_slice() else {
                return Err(usage());
            };
            grab_transaction(hash, prefix).await
        }
        Some("classify") => {
            let [_, path] = args.as_slice() else {
                return Err(usage());
            };
            classify(PathBuf::from(path))
        }
        _ => Err(usage()),
    }
}

/// Fetch a decoded transaction from the API and store it as a test fixture.
async fn grab_transaction(hash: &str, prefix: &str) -> eyre::Result<()> {
    let cfg = config::load()?;
    info!("Fetching transaction from transaction api: {}", hash);

    let raw = fetch::get_transaction(&cfg.api_url, hash).await?;
    let path = store::save_fixture(&cfg.fixture_dir, prefix, hash, &raw)?;
    info!("Transaction saved to {}", path.display());
    Ok(())
}

/// Run the pipeline over a stored fixture and print the resulting context.
fn classify(path: PathBuf) -> eyre::Result<()> {
    let tx = store::load_fixture(&path)?;
    let pipeline = Pipeline::default();

    let matches = pipeline.matches(&tx);
    if matches.len() > 1 {
        warn!("Multiple archetypes matched {:?}; taking {}", matches, matches[0]);
    }

    let tx = pipeline.run(tx);
    match (&tx.context, matches.first()) {
        (Some(context), Some(name)) => {
            info!("Matched archetype: {}", name);
            println!("{}", serde_json::to_string_pretty(context)?);
        }
        (Some(context), None) => {
            // fixture arrived already contextualized; nothing re-matched
            println!("{}", serde_json::to_string_pretty(context)?);
        }
        _ => println!("No archetype matched {}", tx.hash),
    }
    Ok(())
}
