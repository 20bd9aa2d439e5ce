use crate::error::SchedulerError;
use crate::types::TimeSlot;
use chrono::{Duration, NaiveDate, NaiveDateTime};
#[cfg(test)]
use mockall::automock;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

/// Business hours, local time. Slots may start no earlier than the open
/// hour and must end no later than the close hour.
pub const OPEN_HOUR: u32 = 9;
pub const CLOSE_HOUR: u32 = 17;

const AVAILABLE_PROBABILITY: f64 = 0.7;

/// Capability interface answering "is this slot free?". The production
/// implementation simulates availability; a real deployment would back
/// this with actual booking state.
#[cfg_attr(test, automock)]
pub trait AvailabilitySource: Send + Sync {
    fn is_available(&self, start: NaiveDateTime) -> bool;
}

/// Simulated availability: each queried slot is free with probability 0.7.
#[derive(Debug)]
pub struct RandomAvailability {
    rng: Mutex<StdRng>,
}

impl RandomAvailability {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilitySource for RandomAvailability {
    fn is_available(&self, _start: NaiveDateTime) -> bool {
        self.rng.lock().unwrap().random_bool(AVAILABLE_PROBABILITY)
    }
}

/// Produces the ordered sequence of bookable windows on `day` for a service
/// of the given duration.
///
/// Walks continuously from the open hour in duration-sized steps and drops
/// any candidate whose end would pass the close hour, so durations that do
/// not divide the business-hour window evenly simply yield a shorter list.
pub fn generate_slots(
    day: NaiveDate,
    duration_minutes: i64,
    availability: &dyn AvailabilitySource,
) -> Result<Vec<TimeSlot>, SchedulerError> {
    if duration_minutes <= 0 {
        return Err(SchedulerError::InvalidDuration {
            minutes: duration_minutes,
        });
    }

    let open = day.and_hms_opt(OPEN_HOUR, 0, 0).unwrap();
    let close = day.and_hms_opt(CLOSE_HOUR, 0, 0).unwrap();
    let step = Duration::minutes(duration_minutes);

    let mut slots = Vec::new();
    let mut start = open;
    loop {
        let end = start + step;
        if end > close {
            break;
        }
        slots.push(TimeSlot {
            id: slot_id(start),
            start,
            end,
            available: availability.is_available(start),
        });
        start = end;
    }
    Ok(slots)
}

/// Canonical slot identifier, derived from the start timestamp.
pub fn slot_id(start: NaiveDateTime) -> String {
    start.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// True iff the slot spans exactly `duration_minutes` and lies strictly
/// within business hours of a single calendar day.
pub fn slot_within_business_hours(slot: &TimeSlot, duration_minutes: i64) -> bool {
    let open = slot.start.date().and_hms_opt(OPEN_HOUR, 0, 0).unwrap();
    let close = slot.start.date().and_hms_opt(CLOSE_HOUR, 0, 0).unwrap();

    slot.end - slot.start == Duration::minutes(duration_minutes)
        && slot.start >= open
        && slot.end <= close
}
