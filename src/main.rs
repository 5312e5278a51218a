#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use faraon_core::{CatalogClient, SessionStore};

/// Default catalog/auth API base when none is given on the command line
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Collaborators resolved once at startup, before the UI launches
pub struct Bootstrap {
    pub catalog: CatalogClient,
    pub session: SessionStore,
}

static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();

/// Startup state (validated API client, loaded session)
pub fn bootstrap() -> &'static Bootstrap {
    BOOTSTRAP.get().expect("bootstrap set before launch")
}

/// Faraón - storefront desktop client
#[derive(Parser, Debug)]
#[command(name = "faraon-desktop")]
#[command(about = "Faraón storefront client")]
struct Args {
    /// Base URL of the storefront API
    #[arg(short, long)]
    api_url: Option<String>,

    /// Data directory holding the session file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("faraon")
    });
    let api_url = args.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let catalog = match CatalogClient::new(&api_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(%api_url, error = %e, "invalid API base URL");
            std::process::exit(1);
        }
    };

    let session = match SessionStore::load(&data_dir) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "could not read session, starting as guest");
            SessionStore::guest()
        }
    };

    let _ = BOOTSTRAP.set(Bootstrap { catalog, session });

    tracing::info!(%api_url, data_dir = %data_dir.display(), "starting Faraón storefront");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Faraón")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
