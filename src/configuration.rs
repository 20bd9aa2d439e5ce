use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn website_title(&self) -> String;
    fn port(&self) -> String;
    fn frontend_path(&self) -> PathBuf;
    /// When set, appointments are persisted to this JSON file; otherwise
    /// they only live in memory.
    fn storage_path(&self) -> Option<PathBuf>;
}
