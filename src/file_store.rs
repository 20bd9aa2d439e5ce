use crate::backend::AppointmentBackend;
use crate::error::StoreError;
use crate::types::{Appointment, AppointmentStatus, NewAppointment};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::error;
use uuid::Uuid;

/// On-disk layout: every record lives under a single namespace key, so the
/// file stays forward-compatible if other record kinds are added later.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    appointments: Vec<Appointment>,
}

/// File-backed appointment store: loads once on construction, saves after
/// every mutation while still holding the lock, so there is exactly one
/// writer to the file.
#[derive(Debug, Clone)]
pub struct FileAppointments {
    path: PathBuf,
    appointments: Arc<Mutex<HashMap<Uuid, Appointment>>>,
}

impl FileAppointments {
    /// Opens the store at `path`. A missing file means an empty store; a
    /// file with invalid contents is an error rather than silent data loss.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let appointments = match fs::read_to_string(path) {
            Ok(contents) => {
                let file: StoreFile = serde_json::from_str(&contents)?;
                file.appointments
                    .into_iter()
                    .map(|appointment| (appointment.id, appointment))
                    .collect()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            appointments: Arc::new(Mutex::new(appointments)),
        })
    }

    fn save(&self, appointments: &HashMap<Uuid, Appointment>) -> Result<(), StoreError> {
        let mut records: Vec<Appointment> = appointments.values().cloned().collect();
        records.sort_by_key(|appointment| (appointment.date, appointment.time_slot.start));

        let file = StoreFile {
            appointments: records,
        };
        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl AppointmentBackend for FileAppointments {
    fn appointments(&self) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        appointments.sort_by_key(|appointment| (appointment.date, appointment.time_slot.start));
        appointments
    }

    fn book_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        let appointment = Appointment::from_new(new);
        let mut appointments = self.appointments.lock().unwrap();
        appointments.insert(appointment.id, appointment.clone());

        if let Err(err) = self.save(&appointments) {
            error!(?err, "failed to persist booking, rolling back");
            appointments.remove(&appointment.id);
            return Err(err);
        }
        Ok(appointment)
    }

    fn cancel_appointment(&self, id: Uuid) -> Result<(), StoreError> {
        let mut appointments = self.appointments.lock().unwrap();
        let previous_status = match appointments.get_mut(&id) {
            Some(appointment) => {
                let previous = appointment.status;
                appointment.status = AppointmentStatus::Cancelled;
                previous
            }
            None => return Err(StoreError::NotFound(id)),
        };

        if let Err(err) = self.save(&appointments) {
            error!(?err, "failed to persist cancellation, rolling back");
            if let Some(appointment) = appointments.get_mut(&id) {
                appointment.status = previous_status;
            }
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutils::example_booking;

    #[test]
    fn missing_file_means_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let store = FileAppointments::new(&path).unwrap();
        assert!(store.appointments().is_empty());
        // Nothing was written yet either.
        assert!(!path.exists());
    }

    #[test]
    fn bookings_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let store = FileAppointments::new(&path).unwrap();
        let first = store
            .book_appointment(example_booking("1", 2024, 6, 10, 9, 0, 30))
            .unwrap();
        let second = store
            .book_appointment(example_booking("3", 2024, 6, 11, 10, 0, 60))
            .unwrap();
        drop(store);

        let reloaded = FileAppointments::new(&path).unwrap();
        let appointments = reloaded.appointments();
        assert_eq!(appointments.len(), 2);
        assert!(appointments.contains(&first));
        assert!(appointments.contains(&second));
    }

    #[test]
    fn cancellation_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let store = FileAppointments::new(&path).unwrap();
        let booked = store
            .book_appointment(example_booking("1", 2024, 6, 10, 9, 0, 30))
            .unwrap();
        store.cancel_appointment(booked.id).unwrap();
        drop(store);

        let reloaded = FileAppointments::new(&path).unwrap();
        let appointments = reloaded.appointments();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn cancel_unknown_appointment_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let store = FileAppointments::new(&path).unwrap();
        store.cancel_appointment(Uuid::new_v4()).unwrap_err();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_reported_not_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "not json").unwrap();

        match FileAppointments::new(&path).unwrap_err() {
            StoreError::Serde(_) => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_uses_the_appointments_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let store = FileAppointments::new(&path).unwrap();
        store
            .book_appointment(example_booking("1", 2024, 6, 10, 9, 0, 30))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(parsed.get("appointments").unwrap().is_array());
    }
}
