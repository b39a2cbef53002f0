mod cli;

use std::time::Duration;

use clap::Parser;
use cli::{Cli, Command};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use clipvault::{ClipboardError, ClipboardManager, CopyOptions, EVENT_EXPIRE};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Copy {
            text,
            key,
            expire_ms,
            json,
        } => {
            if let Err(e) = run_copy(text, key, expire_ms, json).await {
                tracing::error!(error = %e, "copy failed");
                eprintln!("clipvault copy: {e}");
                std::process::exit(1);
            }
        }
        Command::Paste => {
            let manager = ClipboardManager::new();
            match manager.paste().await {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    tracing::error!(error = %e, "paste failed");
                    eprintln!("clipvault paste: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Check => {
            let manager = ClipboardManager::new();
            if manager.is_supported() {
                println!("clipboard capability present");
            } else {
                println!("no clipboard capability");
                std::process::exit(1);
            }
        }
    }
}

/// Copy text, optionally holding the process open until the history
/// entry expires.
async fn run_copy(
    text: String,
    key: Option<String>,
    expire_ms: Option<u64>,
    json: bool,
) -> Result<(), ClipboardError> {
    let manager = ClipboardManager::new();

    let expiry = expire_ms.filter(|ms| *ms > 0).map(Duration::from_millis);
    // Expiring entries always get a key so the record stays addressable.
    let key = key.or_else(|| expiry.is_some().then(|| Uuid::new_v4().to_string()));

    let mut expire_rx = None;
    if expiry.is_some() {
        let (tx, rx) = mpsc::unbounded_channel();
        manager
            .on(EVENT_EXPIRE, move |_, data| {
                let _ = tx.send(data.to_string());
            })
            .await?;
        expire_rx = Some(rx);
    }

    manager
        .copy_with(
            text.as_str(),
            CopyOptions {
                key: key.clone(),
                expires_after: expiry,
            },
        )
        .await?;

    if json {
        let record = match &key {
            Some(k) => manager.lookup(k.as_str()).await?,
            None => manager.history().await?.pop(),
        };
        if let Some(record) = record {
            match serde_json::to_string_pretty(&record) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => tracing::warn!(error = %e, "failed to render record"),
            }
        }
    } else {
        match &key {
            Some(k) => println!("Copied {} bytes (key {k})", text.len()),
            None => println!("Copied {} bytes", text.len()),
        }
    }

    if let Some(mut rx) = expire_rx {
        if rx.recv().await.is_some() {
            println!("Entry expired");
        }
    }

    Ok(())
}
