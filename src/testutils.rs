use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::backend::AppointmentBackend;
use crate::configuration::Configuration;
use crate::error::StoreError;
use crate::slots::{slot_id, AvailabilitySource};
use crate::types::{Appointment, NewAppointment, TimeSlot};

pub struct MockAppointmentBackendInner {
    pub success: AtomicBool,
    pub calls_to_appointments: AtomicU64,
    pub calls_to_book_appointment: AtomicU64,
    pub calls_to_cancel_appointment: AtomicU64,
    pub appointments: Mutex<HashMap<Uuid, Appointment>>,
}

#[derive(Clone)]
pub struct MockAppointmentBackend(pub Arc<MockAppointmentBackendInner>);

impl MockAppointmentBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_appointments: AtomicU64::default(),
            calls_to_book_appointment: AtomicU64::default(),
            calls_to_cancel_appointment: AtomicU64::default(),
            appointments: Mutex::default(),
        }
    }
}

impl MockAppointmentBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockAppointmentBackendInner::new()))
    }

    fn succeeding(&self) -> bool {
        self.0.success.load(Ordering::SeqCst)
    }
}

impl AppointmentBackend for MockAppointmentBackend {
    fn appointments(&self) -> Vec<Appointment> {
        self.0
            .calls_to_appointments
            .fetch_add(1, Ordering::SeqCst);
        self.0
            .appointments
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect()
    }

    fn book_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        self.0
            .calls_to_book_appointment
            .fetch_add(1, Ordering::SeqCst);
        if !self.succeeding() {
            return Err(StoreError::Io(std::io::Error::other("supposed to fail")));
        }
        Ok(Appointment::from_new(new))
    }

    fn cancel_appointment(&self, id: Uuid) -> Result<(), StoreError> {
        self.0
            .calls_to_cancel_appointment
            .fetch_add(1, Ordering::SeqCst);
        match self.succeeding() {
            true => Ok(()),
            false => Err(StoreError::NotFound(id)),
        }
    }
}

/// Availability source with a fixed answer, for deterministic tests.
pub struct FixedAvailability(pub bool);

impl AvailabilitySource for FixedAvailability {
    fn is_available(&self, _start: chrono::NaiveDateTime) -> bool {
        self.0
    }
}

#[derive(Clone)]
pub struct TestConfiguration {
    pub frontend_path: PathBuf,
}

impl Configuration for TestConfiguration {
    fn website_title(&self) -> String {
        "AppointEase (test)".into()
    }

    fn port(&self) -> String {
        "0".into()
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn storage_path(&self) -> Option<PathBuf> {
        None
    }
}

/// A well-formed booking for the given service id and slot start.
pub fn example_booking(
    service_id: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    duration_minutes: i64,
) -> NewAppointment {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let start = date.and_hms_opt(hour, minute, 0).unwrap();
    let end = start + Duration::minutes(duration_minutes);

    NewAppointment {
        service_id: service_id.into(),
        date,
        time_slot: TimeSlot {
            id: slot_id(start),
            start,
            end,
            available: true,
        },
        customer_name: "Jamie Doe".into(),
        customer_email: "jamie@example.com".into(),
        customer_phone: "+1 555 0100".into(),
        notes: String::new(),
    }
}
