//! Appointment scheduling for AppointEase: service catalog, time slot
//! generation, the month calendar, the booking flow and the HTTP API.

pub mod backend;
pub mod calendar;
pub mod catalog;
pub mod configuration;
pub mod configuration_handler;
pub mod error;
pub mod file_store;
pub mod flow;
pub mod format;
pub mod http;
pub mod local_appointments;
pub mod slots;
#[cfg(test)]
pub mod testutils;
pub mod types;
