use crate::model::{
    id::SlotId,
    slot::{Slot, SlotStatus},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Slot>>;
    async fn find_by_status(&self, status: SlotStatus) -> AppResult<Vec<Slot>>;
    async fn find_by_id(&self, slot_id: SlotId) -> AppResult<Option<Slot>>;
    async fn count_by_status(&self, status: SlotStatus) -> AppResult<i64>;
    // Books the slot only if it is currently available.
    async fn book(&self, slot_id: SlotId) -> AppResult<Slot>;
    // Books the available slot with the lowest id.
    async fn book_next_available(&self) -> AppResult<Slot>;
    async fn release(&self, slot_id: SlotId) -> AppResult<Slot>;
    async fn set_maintenance(&self, slot_id: SlotId) -> AppResult<Slot>;
    // Bulk status transition; returns the slots that changed.
    async fn set_status_all(&self, from: SlotStatus, to: SlotStatus) -> AppResult<Vec<Slot>>;
}
