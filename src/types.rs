use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable offering with fixed duration and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: i64,
    pub price_cents: u32,
    pub category: String,
    pub image: String,
}

/// A concrete bookable window on a specific day. Generated fresh per
/// (date, service) query and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A confirmed booking. Cancellation only flips the status; appointments
/// are never physically deleted from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub service_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Materializes a booking with a fresh id and scheduled status.
    pub fn from_new(new: NewAppointment) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_id: new.service_id,
            date: new.date,
            time_slot: new.time_slot,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            notes: new.notes,
            status: AppointmentStatus::Scheduled,
        }
    }
}

/// Booking data as submitted by a customer, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub service_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: String,
}
