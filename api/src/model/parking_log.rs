use chrono::{DateTime, Utc};
use kernel::model::{
    id::{LogId, SlotId, VehicleId},
    parking_log::ParkingLog,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParkingLogResponse {
    pub log_id: LogId,
    pub vehicle_id: VehicleId,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub total_amount: f64,
    pub payment_status: String,
}

impl From<ParkingLog> for ParkingLogResponse {
    fn from(value: ParkingLog) -> Self {
        let ParkingLog {
            log_id,
            vehicle_id,
            slot_id,
            entry_time,
            exit_time,
            total_amount,
            payment_status,
        } = value;
        Self {
            log_id,
            vehicle_id,
            slot_id,
            entry_time,
            exit_time,
            total_amount,
            payment_status,
        }
    }
}
