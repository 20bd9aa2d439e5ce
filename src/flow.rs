use crate::types::{Service, TimeSlot};
use chrono::NaiveDate;

/// Ordered stages of the booking wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStep {
    #[default]
    Service,
    DateTime,
    Details,
    Confirmation,
}

/// Client-side booking flow: tracks the current step and the selections
/// that gate forward transitions.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    step: BookingStep,
    service: Option<Service>,
    date: Option<NaiveDate>,
    time_slot: Option<TimeSlot>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&TimeSlot> {
        self.time_slot.as_ref()
    }

    pub fn select_service(&mut self, service: Service) {
        self.service = Some(service);
    }

    /// Changing the date invalidates any slot picked for the old date.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.date != Some(date) {
            self.time_slot = None;
        }
        self.date = Some(date);
    }

    pub fn select_time_slot(&mut self, time_slot: TimeSlot) {
        self.time_slot = Some(time_slot);
    }

    /// Guard for the forward transition out of the current step. The
    /// Details step always permits completion.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            BookingStep::Service => self.service.is_some(),
            BookingStep::DateTime => self.time_slot.is_some(),
            BookingStep::Details | BookingStep::Confirmation => true,
        }
    }

    /// Moves to the next step when its guard allows it. Returns whether a
    /// transition happened.
    pub fn advance(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        self.step = match self.step {
            BookingStep::Service => BookingStep::DateTime,
            BookingStep::DateTime => BookingStep::Details,
            BookingStep::Details => BookingStep::Confirmation,
            BookingStep::Confirmation => return false,
        };
        true
    }

    /// Steps backwards. `None` means the flow was exited from its first
    /// step; selections stay intact otherwise.
    pub fn back(&mut self) -> Option<BookingStep> {
        self.step = match self.step {
            BookingStep::Service => return None,
            BookingStep::DateTime => BookingStep::Service,
            BookingStep::Details => BookingStep::DateTime,
            BookingStep::Confirmation => BookingStep::Details,
        };
        Some(self.step)
    }

    /// Resets every selection once a booking completed or was abandoned.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
