use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(about = "AppointEase appointment scheduler")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on.
    #[arg(long, default_value = "3000")]
    port: String,

    /// HTML entry point served under /frontend.
    #[arg(long, default_value = "frontend/index.html")]
    frontend_path: PathBuf,

    /// JSON file the appointment store is persisted to. Omit for an
    /// in-memory store.
    #[arg(long)]
    storage_path: Option<PathBuf>,

    #[arg(long, default_value = "AppointEase")]
    website_title: String,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn website_title(&self) -> String {
        self.website_title.clone()
    }

    fn port(&self) -> String {
        self.port.clone()
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone()
    }
}
