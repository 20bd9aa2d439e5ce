use crate::backend::AppointmentBackend;
use crate::calendar;
use crate::catalog;
use crate::configuration::Configuration;
use crate::error::StoreError;
use crate::format::{self, format_currency, format_date_time};
use crate::slots::{self, AvailabilitySource};
use crate::types::{Appointment, NewAppointment, TimeSlot};
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::{http::StatusCode, response::IntoResponse, Json};
use axum::{
    routing::{get, post},
    Router,
};
use axum_valid::Valid;
use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;
use validator::{Validate, ValidationError};

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\+?[0-9][0-9 ().-]{5,19}$").unwrap();
}

#[derive(Clone)]
pub struct AppState<T: AppointmentBackend, C: Configuration> {
    pub store: T,
    pub availability: Arc<dyn AvailabilitySource>,
    pub configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotsQuery {
    date: NaiveDate,
    service_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalendarQuery {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridDay {
    date: NaiveDate,
    in_month: bool,
    selectable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonthRef {
    year: i32,
    month: u32,
}

/// One month view plus the wrap-around prev/next references the UI's
/// chevron navigation needs, and a suggested first bookable date.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalendarResponse {
    year: i32,
    month: u32,
    prev: MonthRef,
    next: MonthRef,
    suggested_date: NaiveDate,
    days: Vec<GridDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServicesQuery {
    category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct BookingRequest {
    service_id: String,
    date: NaiveDate,
    time_slot: TimeSlot,
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    customer_name: String,
    #[validate(email)]
    customer_email: String,
    #[validate(custom(function = validate_phone))]
    customer_phone: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CancelRequest {
    id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingResponse {
    appointment: Appointment,
    confirmation: String,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone"))
    }
}

impl From<BookingRequest> for NewAppointment {
    fn from(booking: BookingRequest) -> Self {
        Self {
            service_id: booking.service_id,
            date: booking.date,
            time_slot: booking.time_slot,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            notes: booking.notes,
        }
    }
}

pub fn create_app<T: AppointmentBackend, C: Configuration>(
    store: T,
    availability: Arc<dyn AvailabilitySource>,
    configuration: C,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        store,
        availability,
        configuration,
    };

    Router::new()
        .route("/frontend", get(get_frontend))
        .route("/services", get(get_services))
        .route("/services/:id", get(get_service))
        .route("/categories", get(get_categories))
        .route("/slots", get(get_slots))
        .route("/calendar", get(get_calendar))
        .route("/appointments", get(get_appointments))
        .route("/book", post(book_appointment))
        .route("/cancel", post(cancel_appointment))
        .with_state(state)
        .layer(cors)
}

async fn get_services(Query(query): Query<ServicesQuery>) -> impl IntoResponse {
    match query.category {
        Some(category) => Json(catalog::services_by_category(&category)).into_response(),
        None => Json(catalog::services()).into_response(),
    }
}

async fn get_categories() -> impl IntoResponse {
    Json(catalog::service_categories())
}

async fn get_service(Path(id): Path<String>) -> impl IntoResponse {
    match catalog::service_by_id(&id) {
        Some(service) => Json(service).into_response(),
        None => (StatusCode::NOT_FOUND, format!("unknown service: {id}")).into_response(),
    }
}

async fn get_slots<T: AppointmentBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<SlotsQuery>,
) -> impl IntoResponse {
    let Some(service) = catalog::service_by_id(&query.service_id) else {
        return (
            StatusCode::NOT_FOUND,
            format!("unknown service: {}", query.service_id),
        )
            .into_response();
    };

    match slots::generate_slots(
        query.date,
        service.duration_minutes,
        state.availability.as_ref(),
    ) {
        Ok(slots) => Json(slots).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

async fn get_calendar(Query(query): Query<CalendarQuery>) -> impl IntoResponse {
    let grid = match calendar::month_grid(query.year, query.month) {
        Ok(grid) => grid,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    // Nothing in the past is bookable.
    let today = Local::now().date_naive();
    let days = grid
        .into_iter()
        .map(|date| GridDay {
            date,
            in_month: date.year() == query.year && date.month() == query.month,
            selectable: calendar::is_selectable(date, query.year, query.month, today, None),
        })
        .collect();

    let (prev_year, prev_month) = calendar::prev_month(query.year, query.month);
    let (next_year, next_month) = calendar::next_month(query.year, query.month);
    Json(CalendarResponse {
        year: query.year,
        month: query.month,
        prev: MonthRef {
            year: prev_year,
            month: prev_month,
        },
        next: MonthRef {
            year: next_year,
            month: next_month,
        },
        suggested_date: format::next_available_day(today),
        days,
    })
    .into_response()
}

async fn get_appointments<T: AppointmentBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> impl IntoResponse {
    Json(state.store.appointments())
}

async fn book_appointment<T: AppointmentBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Valid(Json(booking)): Valid<Json<BookingRequest>>,
) -> impl IntoResponse {
    let Some(service) = catalog::service_by_id(&booking.service_id) else {
        return (
            StatusCode::NOT_FOUND,
            format!("unknown service: {}", booking.service_id),
        )
            .into_response();
    };

    if booking.time_slot.start.date() != booking.date
        || !slots::slot_within_business_hours(&booking.time_slot, service.duration_minutes)
    {
        return (
            StatusCode::BAD_REQUEST,
            "time slot does not match the service duration and business hours".to_string(),
        )
            .into_response();
    }

    match state.store.book_appointment(booking.into()) {
        Ok(appointment) => {
            let confirmation = format!(
                "{} booked for {} ({})",
                service.name,
                format_date_time(appointment.time_slot.start),
                format_currency(service.price_cents),
            );
            Json(BookingResponse {
                appointment,
                confirmation,
            })
            .into_response()
        }
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

async fn cancel_appointment<T: AppointmentBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<CancelRequest>,
) -> impl IntoResponse {
    match state.store.cancel_appointment(request.id) {
        Ok(()) => (
            StatusCode::OK,
            "Appointment cancelled successfully".to_string(),
        ),
        Err(err @ StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn get_frontend<T: AppointmentBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.configuration.frontend_path();
    match fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read frontend file: {err}"),
        )),
    }
}
