// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use curbside_api::{
    ApiError, PickupEventView, PickupStats, apply_status_update, authorize_checkin,
    create_pickup_event, decorate_event,
};
use curbside_domain::{
    GpsFix, Parent, PickupEvent, SchoolZone, Student, Teacher, format_timestamp, validate_location,
};
use curbside_persistence::{Persistence, PersistenceError};

/// Curbside Server - HTTP server for the Curbside pickup coordination system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Load demo directory data (zone, teachers, parents, students) at startup
    #[arg(long)]
    seed_demo: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the directory and pickup events.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for a parent check-in.
///
/// Numeric fields arrive as arbitrary JSON values because the mobile client
/// sends them as numbers or as numeric strings depending on platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckinApiRequest {
    /// The parent's full name.
    parent_name: String,
    /// The student's full name.
    child_name: String,
    /// Requested release mode ("car_line"; anything else means walk-up).
    pickup_type: String,
    /// Latitude of the device fix.
    gps_lat: serde_json::Value,
    /// Longitude of the device fix.
    gps_lng: serde_json::Value,
    /// Reported GPS accuracy, meters.
    accuracy: serde_json::Value,
}

/// API request for a status update.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct StatusUpdateRequest {
    /// The target status name.
    status: Option<String>,
}

/// API response for a status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusUpdateResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
}

/// API request for the standalone geofence check; numeric fields are
/// lenient like the check-in body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ValidateLocationApiRequest {
    /// Latitude of the device fix.
    lat: serde_json::Value,
    /// Longitude of the device fix.
    lng: serde_json::Value,
    /// Reported GPS accuracy, meters.
    accuracy: serde_json::Value,
}

/// API response for the standalone geofence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValidateLocationResponse {
    /// Whether the fix falls inside the configured zone.
    valid: bool,
    /// A human-readable verdict.
    message: String,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Liveness indicator.
    status: String,
    /// Service display name.
    service: String,
    /// Current server time (RFC 3339).
    timestamp: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } | ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Parses a lenient numeric field: a JSON number or a numeric string.
fn parse_f64(value: &serde_json::Value, field: &str) -> Result<f64, HttpError> {
    let parsed: Option<f64> = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        HttpError::bad_request(format!("Invalid request data: '{field}' must be a number"))
    })
}

/// Formats the date portion of a timestamp for same-day queries.
fn today_prefix(now: OffsetDateTime) -> String {
    let date = now.date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Decorates a persisted event with current directory data.
///
/// A dangling student or parent reference leaves the display fields unset.
fn decorate_from_directory(
    persistence: &mut Persistence,
    event: &PickupEvent,
) -> Result<PickupEventView, HttpError> {
    let student: Option<Student> = persistence.find_student_by_id(event.student_id)?;
    let parent: Option<Parent> = persistence.find_parent_by_id(event.parent_id)?;
    let teacher: Option<Teacher> = match &student {
        Some(student) => persistence.find_teacher_by_id(student.teacher_id)?,
        None => None,
    };

    Ok(decorate_event(
        event,
        student.as_ref(),
        parent.as_ref(),
        teacher.as_ref(),
    ))
}

/// Handler for GET `/api/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("healthy"),
        service: String::from("Curbside Pickup System"),
        timestamp: format_timestamp(OffsetDateTime::now_utc()),
    })
}

/// Handler for GET `/api/students` endpoint.
async fn handle_list_students(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Student>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let students: Vec<Student> = persistence.list_students()?;
    drop(persistence);

    Ok(Json(students))
}

/// Handler for GET `/api/teachers` endpoint.
async fn handle_list_teachers(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Teacher>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let teachers: Vec<Teacher> = persistence.list_teachers()?;
    drop(persistence);

    Ok(Json(teachers))
}

/// Handler for POST `/api/pickup/checkin` endpoint.
///
/// Validates the submitted fix against the school zone, resolves the
/// parent/student pair, and creates a queued pickup event.
async fn handle_checkin(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckinApiRequest>,
) -> Result<Json<PickupEventView>, HttpError> {
    info!(
        parent = %req.parent_name,
        child = %req.child_name,
        pickup_type = %req.pickup_type,
        "Handling checkin request"
    );

    let fix: GpsFix = GpsFix {
        lat: parse_f64(&req.gps_lat, "gpsLat")?,
        lng: parse_f64(&req.gps_lng, "gpsLng")?,
        accuracy: parse_f64(&req.accuracy, "accuracy")?,
    };

    let mut persistence = app_state.persistence.lock().await;

    let zone: Option<SchoolZone> = persistence.default_school_zone()?;
    if !validate_location(zone.as_ref(), &fix) {
        return Err(HttpError::bad_request(
            "Location not within school pickup area",
        ));
    }

    let parent: Option<Parent> = persistence.find_parent_by_name(&req.parent_name)?;
    let student: Option<Student> = match &parent {
        Some(parent) => {
            persistence.find_student_by_name_and_parent(&req.child_name, parent.parent_id)?
        }
        None => None,
    };
    let (parent, student): (Parent, Student) = authorize_checkin(parent, student)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut event: PickupEvent =
        create_pickup_event(&parent, &student, &req.pickup_type, fix, now);
    let event_id: i64 = persistence.insert_pickup_event(&event)?;
    event.event_id = Some(event_id);

    let view: PickupEventView = decorate_from_directory(&mut persistence, &event)?;
    drop(persistence);

    info!(
        event_id = event_id,
        ticket = %view.queue_ticket,
        "Checkin accepted"
    );

    Ok(Json(view))
}

/// Handler for GET `/api/admin/pickups` endpoint.
///
/// Returns every event not yet picked up, in check-in order.
async fn handle_active_pickups(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<PickupEventView>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let events: Vec<PickupEvent> = persistence.active_pickups()?;

    let mut views: Vec<PickupEventView> = Vec::with_capacity(events.len());
    for event in &events {
        views.push(decorate_from_directory(&mut persistence, event)?);
    }
    drop(persistence);

    Ok(Json(views))
}

/// Handler for GET `/api/teacher/{teacher_id}/pickups` endpoint.
async fn handle_teacher_pickups(
    AxumState(app_state): AxumState<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<PickupEventView>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let events: Vec<PickupEvent> = persistence.active_pickups_for_teacher(teacher_id)?;

    let mut views: Vec<PickupEventView> = Vec::with_capacity(events.len());
    for event in &events {
        views.push(decorate_from_directory(&mut persistence, event)?);
    }
    drop(persistence);

    Ok(Json(views))
}

/// Handler for GET `/api/teacher/{teacher_id}/pickups/completed` endpoint.
///
/// Returns today's completed pickups for the teacher's roster.
async fn handle_teacher_completed_pickups(
    AxumState(app_state): AxumState<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<PickupEventView>>, HttpError> {
    let prefix: String = today_prefix(OffsetDateTime::now_utc());

    let mut persistence = app_state.persistence.lock().await;
    let events: Vec<PickupEvent> = persistence.completed_pickups_for_teacher(teacher_id, &prefix)?;

    let mut views: Vec<PickupEventView> = Vec::with_capacity(events.len());
    for event in &events {
        views.push(decorate_from_directory(&mut persistence, event)?);
    }
    drop(persistence);

    Ok(Json(views))
}

/// Handler for GET `/api/teacher/{teacher_id}/students` endpoint.
async fn handle_teacher_students(
    AxumState(app_state): AxumState<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<Student>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let students: Vec<Student> = persistence.find_students_by_teacher(teacher_id)?;
    drop(persistence);

    Ok(Json(students))
}

/// Handler for PUT `/api/pickup/{event_id}/status` endpoint.
///
/// Overwrites the event's status unconditionally; reaching `picked_up`
/// stamps the completion time.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<i64>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, HttpError> {
    let status_name: String = match req.status {
        Some(status) if !status.trim().is_empty() => status,
        _ => return Err(HttpError::bad_request("Status is required")),
    };

    info!(
        event_id = event_id,
        status = %status_name,
        "Handling status update request"
    );

    let mut persistence = app_state.persistence.lock().await;

    let Some(mut event) = persistence.find_pickup_event(event_id)? else {
        return Err(HttpError::bad_request(
            "Could not update pickup status - invalid event ID or status",
        ));
    };

    apply_status_update(&mut event, &status_name, OffsetDateTime::now_utc()).map_err(|_| {
        HttpError::bad_request("Could not update pickup status - invalid event ID or status")
    })?;
    persistence.update_pickup_status(&event)?;
    drop(persistence);

    Ok(Json(StatusUpdateResponse {
        success: true,
        message: String::from("Status updated successfully"),
    }))
}

/// Handler for GET `/api/admin/stats` endpoint.
async fn handle_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<PickupStats>, HttpError> {
    let prefix: String = today_prefix(OffsetDateTime::now_utc());

    let mut persistence = app_state.persistence.lock().await;
    let total_students: i64 = persistence.count_students()?;
    let todays_events: Vec<PickupEvent> = persistence.todays_pickups(&prefix)?;
    drop(persistence);

    Ok(Json(curbside_api::compute_stats(
        total_students,
        &todays_events,
    )))
}

/// Handler for GET `/api/pickup/queue/{ticket}` endpoint.
///
/// Looks up a pickup event by its queue ticket. Tickets are not unique;
/// a collision resolves to the earliest matching event.
async fn handle_queue_lookup(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket): Path<String>,
) -> Result<Json<PickupEventView>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;

    let Some(event) = persistence.find_pickup_by_queue_ticket(&ticket)? else {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No pickup found for ticket '{ticket}'"),
        });
    };

    let view: PickupEventView = decorate_from_directory(&mut persistence, &event)?;
    drop(persistence);

    Ok(Json(view))
}

/// Handler for POST `/api/location/validate` endpoint.
async fn handle_validate_location(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ValidateLocationApiRequest>,
) -> Result<Json<ValidateLocationResponse>, HttpError> {
    let fix: GpsFix = GpsFix {
        lat: parse_f64(&req.lat, "lat")?,
        lng: parse_f64(&req.lng, "lng")?,
        accuracy: parse_f64(&req.accuracy, "accuracy")?,
    };

    let mut persistence = app_state.persistence.lock().await;
    let zone: Option<SchoolZone> = persistence.default_school_zone()?;
    drop(persistence);

    let valid: bool = validate_location(zone.as_ref(), &fix);

    Ok(Json(ValidateLocationResponse {
        valid,
        message: if valid {
            String::from("Location validated")
        } else {
            String::from("Not within school pickup area")
        },
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/students", get(handle_list_students))
        .route("/api/teachers", get(handle_list_teachers))
        .route("/api/pickup/checkin", post(handle_checkin))
        .route("/api/admin/pickups", get(handle_active_pickups))
        .route("/api/teacher/{teacher_id}/pickups", get(handle_teacher_pickups))
        .route(
            "/api/teacher/{teacher_id}/pickups/completed",
            get(handle_teacher_completed_pickups),
        )
        .route(
            "/api/teacher/{teacher_id}/students",
            get(handle_teacher_students),
        )
        .route("/api/pickup/{event_id}/status", put(handle_update_status))
        .route("/api/admin/stats", get(handle_stats))
        .route("/api/pickup/queue/{ticket}", get(handle_queue_lookup))
        .route("/api/location/validate", post(handle_validate_location))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Curbside Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.seed_demo {
        if persistence.seed_demo_data()? {
            info!("Demo directory data loaded");
        } else {
            info!("Directory already populated; skipping demo data");
        }
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
