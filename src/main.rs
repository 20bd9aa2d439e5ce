use std::sync::Arc;

use appointease::{
    configuration::Configuration, configuration_handler::ConfigurationHandler,
    file_store::FileAppointments, http::create_app, local_appointments::LocalAppointments,
    slots::RandomAvailability,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();
    info!("Starting {}", configuration.website_title());

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();
    info!("Accessible at: {address}");

    let availability = Arc::new(RandomAvailability::new());
    let app = match configuration.storage_path() {
        Some(path) => match FileAppointments::new(&path) {
            Ok(store) => {
                info!("Appointments persisted to {}", path.display());
                create_app(store, availability, configuration)
            }
            Err(err) => {
                error!(?err, "Failed to open appointment store at {}. Fix or remove the file, or restart without --storage-path for an in-memory store.", path.display());
                return;
            }
        },
        None => {
            info!("No storage path configured, appointments are in-memory only");
            create_app(LocalAppointments::default(), availability, configuration)
        }
    };

    axum::serve(listener, app).await.unwrap();
}
