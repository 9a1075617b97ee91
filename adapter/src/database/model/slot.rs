use kernel::model::{
    id::SlotId,
    slot::{Slot, SlotStatus},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct SlotRow {
    pub slot_id: i32,
    pub location: String,
    pub status: String,
    pub floor_no: i32,
    pub slot_type: String,
}

// The status column is free text at the database level; an unknown value
// means the row was written by something outside this system.
impl TryFrom<SlotRow> for Slot {
    type Error = AppError;

    fn try_from(value: SlotRow) -> Result<Self, Self::Error> {
        let SlotRow {
            slot_id,
            location,
            status,
            floor_no,
            slot_type,
        } = value;
        let status = SlotStatus::from_str(&status).map_err(AppError::ConversionEntityError)?;
        Ok(Slot {
            slot_id: SlotId::new(slot_id),
            location,
            status,
            floor_no,
            slot_type,
        })
    }
}
