use kernel::model::{
    id::SlotId,
    slot::{Slot, SlotStatus},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub slot_id: SlotId,
    pub location: String,
    pub status: SlotStatus,
    pub floor_no: i32,
    pub slot_type: String,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        let Slot {
            slot_id,
            location,
            status,
            floor_no,
            slot_type,
        } = value;
        Self {
            slot_id,
            location,
            status,
            floor_no,
            slot_type,
        }
    }
}
