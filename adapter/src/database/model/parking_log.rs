use chrono::{DateTime, Utc};
use kernel::model::{
    id::{LogId, SlotId, VehicleId},
    parking_log::ParkingLog,
};

#[derive(sqlx::FromRow)]
pub struct ParkingLogRow {
    pub log_id: i32,
    pub vehicle_id: i32,
    pub slot_id: i32,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub total_amount: f64,
    pub payment_status: String,
}

impl From<ParkingLogRow> for ParkingLog {
    fn from(value: ParkingLogRow) -> Self {
        let ParkingLogRow {
            log_id,
            vehicle_id,
            slot_id,
            entry_time,
            exit_time,
            total_amount,
            payment_status,
        } = value;
        ParkingLog {
            log_id: LogId::new(log_id),
            vehicle_id: VehicleId::new(vehicle_id),
            slot_id: SlotId::new(slot_id),
            entry_time,
            exit_time,
            total_amount,
            payment_status,
        }
    }
}
