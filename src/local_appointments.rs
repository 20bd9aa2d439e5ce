use crate::backend::AppointmentBackend;
use crate::error::StoreError;
use crate::types::{Appointment, AppointmentStatus, NewAppointment};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

/// In-memory appointment store. Bookings live for the lifetime of the
/// process; use [`crate::file_store::FileAppointments`] when they should
/// survive a restart.
#[derive(Debug, Clone, Default)]
pub struct LocalAppointments {
    appointments: Arc<Mutex<HashMap<Uuid, Appointment>>>,
}

impl AppointmentBackend for LocalAppointments {
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
        Ok(appointment)
    }

    fn cancel_appointment(&self, id: Uuid) -> Result<(), StoreError> {
        let mut appointments = self.appointments.lock().unwrap();
        match appointments.get_mut(&id) {
            Some(appointment) => {
                appointment.status = AppointmentStatus::Cancelled;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
