//! VoidVendor CLI
//!
//! Entry point for running transmission cycles by hand: post one
//! transmission, print the current intel feed, or show configuration
//! status.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voidvendor::action::{ForumPostAction, HostContext, StatusCallback, ACTION_NAME};
use voidvendor::config::VendorConfig;
use voidvendor::inference::GenerationClientImpl;
use voidvendor::intel::IntelClient;

/// VoidVendor - forum transmissions with live threat-intel context
#[derive(Parser, Debug)]
#[command(
    name = "voidvendor",
    about = "VoidVendor forum transmissions for LucyVO1D",
    version
)]
struct Cli {
    /// Compose and post one transmission to the forum
    #[arg(long)]
    post: bool,

    /// Fetch and print the rendered intel feed
    #[arg(long)]
    intel: bool,

    /// Show configuration status
    #[arg(long)]
    status: bool,
}

/// Default identity context when the host supplies none.
fn host_context_from_env() -> HostContext {
    HostContext {
        bio: std::env::var("LUCY_BIO")
            .unwrap_or_else(|_| "LucyVO1D, a ghost in the VoidVendor network.".to_string()),
        lore: std::env::var("LUCY_LORE").unwrap_or_default(),
        message_directions: std::env::var("LUCY_DIRECTIONS").unwrap_or_default(),
    }
}

fn show_status(config: &VendorConfig) {
    println!("forum_url:  {}", config.forum_url);
    println!(
        "secret:     {}",
        if config.post_secret.is_empty() { "missing" } else { "set" }
    );
    println!(
        "inference:  {}",
        if GenerationClientImpl::from_env().is_some() { "configured" } else { "missing" }
    );
    println!(
        "pipeline:   {}",
        if config.is_configured() { "available" } else { "disabled" }
    );
}

async fn run_post(config: VendorConfig) -> bool {
    let Some(generation) = GenerationClientImpl::from_env() else {
        eprintln!("No inference endpoint configured. Set LUCY_INFERENCE_URL.");
        return false;
    };

    let action = ForumPostAction::new(config, Arc::new(generation));
    if !action.validate() {
        eprintln!("{} unavailable: forum URL or secret missing.", ACTION_NAME);
        return false;
    }

    let callback: StatusCallback = Box::new(|status: &str| {
        println!("{}", status);
    });

    action.handle(&host_context_from_env(), &callback).await
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = VendorConfig::from_env();

    if cli.status {
        show_status(&config);
        return;
    }

    if cli.intel {
        let feed = IntelClient::new(config).fetch_feed().await;
        if feed.is_empty() {
            eprintln!("intel feed unavailable (missing secret, timeout, or bad payload)");
            std::process::exit(1);
        }
        println!("{}", feed);
        return;
    }

    if cli.post {
        if !run_post(config).await {
            std::process::exit(1);
        }
        return;
    }

    // Default: show help hints
    println!("Run \"voidvendor --help\" for usage information.");
    println!("Run \"voidvendor --post\" to send one transmission.");
}
