use crate::model::id::{LogId, SlotId, VehicleId};
use chrono::{DateTime, Utc};

/// One entry/exit cycle of a vehicle through a slot.
/// `exit_time` is None while the vehicle is still parked.
#[derive(Debug, Clone)]
pub struct ParkingLog {
    pub log_id: LogId,
    pub vehicle_id: VehicleId,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub total_amount: f64,
    pub payment_status: String,
}
