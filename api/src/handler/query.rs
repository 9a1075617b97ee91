use crate::model::{
    parking_log::ParkingLogResponse,
    query::{QueryReply, QueryRequest, QueryResponse, UnmatchedResponse},
    slot::SlotResponse,
    user::UserResponse,
    vehicle::VehicleResponse,
};
use axum::{extract::State, Json};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::SlotId,
    parking_log::ParkingLog,
    slot::{Slot, SlotStatus},
    user::User,
    vehicle::Vehicle,
};
use nlp::{confirmation, render_sql, suggestions, Intent, ResolveError};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Resolves a natural-language query to an intent, runs it against the
/// backing store and returns the result together with a spoken confirmation.
///
/// A query that matches no pattern, or names no slot where one is required,
/// is not an error: it comes back as `success: false` with a hint.
pub async fn process_query(
    State(registry): State<AppRegistry>,
    Json(req): Json<QueryRequest>,
) -> AppResult<Json<QueryReply>> {
    req.validate(&())?;

    let intent = match registry.intent_resolver().resolve(&req.text) {
        Ok(intent) => intent,
        Err(err) => {
            tracing::info!(query = %req.text, %err, "unresolved query");
            return Ok(Json(QueryReply::Unmatched(unmatched(err))));
        }
    };
    tracing::info!(query = %req.text, intent = intent.key(), "resolved query");

    let outcome = execute(&registry, &intent).await?;
    let (database_result, count, booked_slot_id) = shape(&intent, outcome)?;

    Ok(Json(QueryReply::Matched(QueryResponse {
        success: true,
        voice_text: req.text,
        query_type: intent.key(),
        description: intent.description(),
        sql_query: render_sql(&intent),
        database_result,
        tts_text: confirmation(&intent, count, booked_slot_id),
        timestamp: Utc::now(),
    })))
}

fn unmatched(err: ResolveError) -> UnmatchedResponse {
    // Example phrasings only help when nothing matched at all; a missing
    // slot number already carries its own hint in the message.
    let suggestions = matches!(err, ResolveError::NoMatch).then(suggestions);
    UnmatchedResponse {
        success: false,
        error: err.to_string(),
        suggestions,
        timestamp: Utc::now(),
    }
}

enum QueryOutcome {
    Slots(Vec<Slot>),
    Count(i64),
    Vehicles(Vec<Vehicle>),
    Users(Vec<User>),
    Logs(Vec<ParkingLog>),
}

async fn execute(registry: &AppRegistry, intent: &Intent) -> AppResult<QueryOutcome> {
    use SlotStatus::{Available, Booked, Maintenance};

    let slots = registry.slot_repository();
    let outcome = match *intent {
        Intent::AvailableSlots => QueryOutcome::Slots(slots.find_by_status(Available).await?),
        Intent::BookedSlots => QueryOutcome::Slots(slots.find_by_status(Booked).await?),
        Intent::MaintenanceSlots => QueryOutcome::Slots(slots.find_by_status(Maintenance).await?),
        Intent::AllSlots => QueryOutcome::Slots(slots.find_all().await?),
        Intent::AvailableCount => QueryOutcome::Count(slots.count_by_status(Available).await?),
        Intent::BookedCount => QueryOutcome::Count(slots.count_by_status(Booked).await?),
        Intent::BookSlot(id) => QueryOutcome::Slots(vec![slots.book(SlotId::new(id)).await?]),
        Intent::BookAnySlot => QueryOutcome::Slots(vec![slots.book_next_available().await?]),
        Intent::BookAllSlots => QueryOutcome::Slots(slots.set_status_all(Available, Booked).await?),
        Intent::ReleaseSlot(id) => QueryOutcome::Slots(vec![slots.release(SlotId::new(id)).await?]),
        Intent::ReleaseAllSlots => {
            QueryOutcome::Slots(slots.set_status_all(Booked, Available).await?)
        }
        Intent::SetMaintenance(id) => {
            QueryOutcome::Slots(vec![slots.set_maintenance(SlotId::new(id)).await?])
        }
        Intent::CheckSlot(id) => match slots.find_by_id(SlotId::new(id)).await? {
            Some(slot) => QueryOutcome::Slots(vec![slot]),
            None => {
                return Err(AppError::EntityNotFound(format!(
                    "Slot {id} was not found."
                )))
            }
        },
        Intent::Vehicles => QueryOutcome::Vehicles(registry.vehicle_repository().find_all().await?),
        Intent::Users => QueryOutcome::Users(registry.user_repository().find_all().await?),
        Intent::ParkingLogs => {
            QueryOutcome::Logs(registry.parking_log_repository().find_all().await?)
        }
    };

    Ok(outcome)
}

type ShapedResult = (serde_json::Value, usize, Option<i32>);

fn shape(intent: &Intent, outcome: QueryOutcome) -> AppResult<ShapedResult> {
    let shaped = match outcome {
        QueryOutcome::Slots(slots) => {
            let booked_slot_id = matches!(*intent, Intent::BookAnySlot)
                .then(|| slots.first().map(|s| s.slot_id.raw()))
                .flatten();
            let count = slots.len();
            let rows = slots.into_iter().map(SlotResponse::from).collect::<Vec<_>>();
            (to_value(rows)?, count, booked_slot_id)
        }
        QueryOutcome::Count(n) => (to_value(n)?, n.max(0) as usize, None),
        QueryOutcome::Vehicles(vehicles) => {
            let count = vehicles.len();
            let rows = vehicles
                .into_iter()
                .map(VehicleResponse::from)
                .collect::<Vec<_>>();
            (to_value(rows)?, count, None)
        }
        QueryOutcome::Users(users) => {
            let count = users.len();
            let rows = users.into_iter().map(UserResponse::from).collect::<Vec<_>>();
            (to_value(rows)?, count, None)
        }
        QueryOutcome::Logs(logs) => {
            let count = logs.len();
            let rows = logs
                .into_iter()
                .map(ParkingLogResponse::from)
                .collect::<Vec<_>>();
            (to_value(rows)?, count, None)
        }
    };

    Ok(shaped)
}

fn to_value<T: serde::Serialize>(value: T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| AppError::ConversionEntityError(e.to_string()))
}
