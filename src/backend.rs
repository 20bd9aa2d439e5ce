use crate::error::StoreError;
use crate::types::{Appointment, NewAppointment};
use uuid::Uuid;

/// Seam between the HTTP layer and the appointment store. Implemented by
/// the in-memory store, the file-backed store and the test mock.
pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    /// All appointments, cancelled ones included, ordered by date and start.
    fn appointments(&self) -> Vec<Appointment>;

    /// Persists a new booking and returns it with its assigned id.
    fn book_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError>;

    /// Flips the appointment's status to cancelled. The record stays in
    /// the store.
    fn cancel_appointment(&self, id: Uuid) -> Result<(), StoreError>;
}
