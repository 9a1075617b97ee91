//! In-memory demo backend.
//!
//! Serves the seeded demo dataset through the same repository traits as the
//! Postgres adapter, so the whole pipeline runs without a database. Used by
//! the demo storage mode and by the API tests.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use derive_new::new;
use kernel::model::{
    id::{LogId, SlotId, UserId, VehicleId},
    parking_log::ParkingLog,
    slot::{Slot, SlotStatus},
    user::User,
    vehicle::Vehicle,
};
use kernel::repository::{
    health::HealthCheckRepository, parking_log::ParkingLogRepository, slot::SlotRepository,
    user::UserRepository, vehicle::VehicleRepository,
};
use shared::error::{AppError, AppResult};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct DemoStore {
    slots: Vec<Slot>,
    vehicles: Vec<Vehicle>,
    users: Vec<User>,
    logs: Vec<ParkingLog>,
}

#[derive(Clone)]
pub struct SharedDemoStore(Arc<Mutex<DemoStore>>);

impl SharedDemoStore {
    pub fn seeded() -> Self {
        Self(Arc::new(Mutex::new(DemoStore::seeded())))
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, DemoStore>> {
        self.0
            .lock()
            .map_err(|_| AppError::InternalError(anyhow!("demo store mutex poisoned")))
    }
}

fn slot(slot_id: i32, location: &str, status: SlotStatus, floor_no: i32, slot_type: &str) -> Slot {
    Slot {
        slot_id: SlotId::new(slot_id),
        location: location.into(),
        status,
        floor_no,
        slot_type: slot_type.into(),
    }
}

impl DemoStore {
    // Same dataset the original demo mode ships with: ten slots over two
    // floors, two of them booked, plus a handful of vehicles, users and logs.
    fn seeded() -> Self {
        use SlotStatus::{Available, Booked};

        let slots = vec![
            slot(1, "A1", Available, 1, "standard"),
            slot(2, "A2", Available, 1, "standard"),
            slot(3, "A3", Booked, 1, "premium"),
            slot(4, "A4", Available, 1, "standard"),
            slot(5, "A5", Available, 1, "electric"),
            slot(6, "B1", Available, 2, "standard"),
            slot(7, "B2", Available, 2, "premium"),
            slot(8, "B3", Available, 2, "disabled"),
            slot(9, "B4", Booked, 2, "standard"),
            slot(10, "B5", Available, 2, "electric"),
        ];

        let vehicles = [
            (1, "ABC-123", "car", 1),
            (2, "XYZ-789", "motorcycle", 2),
            (3, "DEF-456", "car", 3),
            (4, "GHI-321", "truck", 4),
            (5, "JKL-654", "van", 5),
        ]
        .into_iter()
        .map(|(vehicle_id, vehicle_no, vehicle_type, user_id)| Vehicle {
            vehicle_id: VehicleId::new(vehicle_id),
            vehicle_no: vehicle_no.into(),
            vehicle_type: vehicle_type.into(),
            user_id: UserId::new(user_id),
        })
        .collect();

        let users = [
            (1, "John Doe", "+1234567890", "john.doe@email.com"),
            (2, "Jane Smith", "+1234567891", "jane.smith@email.com"),
            (3, "Bob Johnson", "+1234567892", "bob.johnson@email.com"),
            (4, "Alice Brown", "+1234567893", "alice.brown@email.com"),
            (5, "Charlie Wilson", "+1234567894", "charlie.wilson@email.com"),
        ]
        .into_iter()
        .map(|(user_id, name, phone, email)| User {
            user_id: UserId::new(user_id),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        })
        .collect();

        let now = Utc::now();
        let logs = vec![
            ParkingLog {
                log_id: LogId::new(1),
                vehicle_id: VehicleId::new(1),
                slot_id: SlotId::new(3),
                entry_time: now - Duration::hours(4),
                exit_time: Some(now - Duration::hours(2)),
                total_amount: 7.50,
                payment_status: "paid".into(),
            },
            ParkingLog {
                log_id: LogId::new(2),
                vehicle_id: VehicleId::new(2),
                slot_id: SlotId::new(4),
                entry_time: now - Duration::hours(3),
                exit_time: None,
                total_amount: 0.00,
                payment_status: "pending".into(),
            },
            ParkingLog {
                log_id: LogId::new(3),
                vehicle_id: VehicleId::new(3),
                slot_id: SlotId::new(9),
                entry_time: now - Duration::hours(5),
                exit_time: Some(now - Duration::hours(3)),
                total_amount: 10.00,
                payment_status: "paid".into(),
            },
        ];

        Self {
            slots,
            vehicles,
            users,
            logs,
        }
    }

    fn slot_mut(&mut self, slot_id: SlotId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.slot_id == slot_id)
    }
}

#[derive(new)]
pub struct DemoSlotRepositoryImpl {
    store: SharedDemoStore,
}

#[async_trait]
impl SlotRepository for DemoSlotRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        Ok(self.store.lock()?.slots.clone())
    }

    async fn find_by_status(&self, status: SlotStatus) -> AppResult<Vec<Slot>> {
        Ok(self
            .store
            .lock()?
            .slots
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, slot_id: SlotId) -> AppResult<Option<Slot>> {
        Ok(self
            .store
            .lock()?
            .slots
            .iter()
            .find(|s| s.slot_id == slot_id)
            .cloned())
    }

    async fn count_by_status(&self, status: SlotStatus) -> AppResult<i64> {
        Ok(self
            .store
            .lock()?
            .slots
            .iter()
            .filter(|s| s.status == status)
            .count() as i64)
    }

    async fn book(&self, slot_id: SlotId) -> AppResult<Slot> {
        let mut store = self.store.lock()?;
        let Some(slot) = store.slot_mut(slot_id) else {
            return Err(AppError::EntityNotFound(format!(
                "Slot {slot_id} was not found."
            )));
        };
        if slot.status != SlotStatus::Available {
            return Err(AppError::UnprocessableEntity(format!(
                "Slot {slot_id} is not available."
            )));
        }
        slot.status = SlotStatus::Booked;
        Ok(slot.clone())
    }

    async fn book_next_available(&self) -> AppResult<Slot> {
        let mut store = self.store.lock()?;
        // Seed data is ordered by slot_id, so the first hit is the lowest id.
        let Some(slot) = store
            .slots
            .iter_mut()
            .find(|s| s.status == SlotStatus::Available)
        else {
            return Err(AppError::UnprocessableEntity(
                "No available slots to book.".into(),
            ));
        };
        slot.status = SlotStatus::Booked;
        Ok(slot.clone())
    }

    async fn release(&self, slot_id: SlotId) -> AppResult<Slot> {
        self.set_status(slot_id, SlotStatus::Available)
    }

    async fn set_maintenance(&self, slot_id: SlotId) -> AppResult<Slot> {
        self.set_status(slot_id, SlotStatus::Maintenance)
    }

    async fn set_status_all(&self, from: SlotStatus, to: SlotStatus) -> AppResult<Vec<Slot>> {
        let mut store = self.store.lock()?;
        let mut changed = Vec::new();
        for slot in store.slots.iter_mut().filter(|s| s.status == from) {
            slot.status = to;
            changed.push(slot.clone());
        }
        Ok(changed)
    }
}

impl DemoSlotRepositoryImpl {
    fn set_status(&self, slot_id: SlotId, to: SlotStatus) -> AppResult<Slot> {
        let mut store = self.store.lock()?;
        let Some(slot) = store.slot_mut(slot_id) else {
            return Err(AppError::EntityNotFound(format!(
                "Slot {slot_id} was not found."
            )));
        };
        slot.status = to;
        Ok(slot.clone())
    }
}

#[derive(new)]
pub struct DemoVehicleRepositoryImpl {
    store: SharedDemoStore,
}

#[async_trait]
impl VehicleRepository for DemoVehicleRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.store.lock()?.vehicles.clone())
    }
}

#[derive(new)]
pub struct DemoUserRepositoryImpl {
    store: SharedDemoStore,
}

#[async_trait]
impl UserRepository for DemoUserRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.lock()?.users.clone())
    }
}

#[derive(new)]
pub struct DemoParkingLogRepositoryImpl {
    store: SharedDemoStore,
}

#[async_trait]
impl ParkingLogRepository for DemoParkingLogRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<ParkingLog>> {
        Ok(self.store.lock()?.logs.clone())
    }
}

pub struct DemoHealthCheckRepositoryImpl;

#[async_trait]
impl HealthCheckRepository for DemoHealthCheckRepositoryImpl {
    async fn check_db(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_repo() -> DemoSlotRepositoryImpl {
        DemoSlotRepositoryImpl::new(SharedDemoStore::seeded())
    }

    #[tokio::test]
    async fn booking_an_available_slot_marks_it_booked() -> anyhow::Result<()> {
        let repo = slot_repo();

        let booked = repo.book(SlotId::new(1)).await?;
        assert_eq!(booked.status, SlotStatus::Booked);

        let slot = repo.find_by_id(SlotId::new(1)).await?;
        assert_eq!(slot.map(|s| s.status), Some(SlotStatus::Booked));
        Ok(())
    }

    #[tokio::test]
    async fn booking_an_occupied_slot_fails_without_changing_it() -> anyhow::Result<()> {
        let repo = slot_repo();

        // Slot 3 is booked in the seed data.
        let err = repo.book(SlotId::new(3)).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        Ok(())
    }

    #[tokio::test]
    async fn booking_a_missing_slot_is_not_found() {
        let repo = slot_repo();
        let err = repo.book(SlotId::new(99)).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn releasing_a_booked_slot_returns_it_to_available() -> anyhow::Result<()> {
        let repo = slot_repo();

        repo.book(SlotId::new(5)).await?;
        let released = repo.release(SlotId::new(5)).await?;
        assert_eq!(released.status, SlotStatus::Available);
        Ok(())
    }

    #[tokio::test]
    async fn book_next_available_picks_the_lowest_free_id() -> anyhow::Result<()> {
        let repo = slot_repo();

        let first = repo.book_next_available().await?;
        assert_eq!(first.slot_id, SlotId::new(1));

        let second = repo.book_next_available().await?;
        assert_eq!(second.slot_id, SlotId::new(2));
        Ok(())
    }

    #[tokio::test]
    async fn release_all_frees_every_booked_slot() -> anyhow::Result<()> {
        let repo = slot_repo();

        let changed = repo
            .set_status_all(SlotStatus::Booked, SlotStatus::Available)
            .await?;
        assert_eq!(changed.len(), 2);
        assert_eq!(repo.count_by_status(SlotStatus::Booked).await?, 0);
        assert_eq!(repo.count_by_status(SlotStatus::Available).await?, 10);
        Ok(())
    }

    #[tokio::test]
    async fn listing_available_slots_is_idempotent() -> anyhow::Result<()> {
        let repo = slot_repo();

        let first = repo.find_by_status(SlotStatus::Available).await?;
        let second = repo.find_by_status(SlotStatus::Available).await?;
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn seeded_records_are_served() -> anyhow::Result<()> {
        let store = SharedDemoStore::seeded();
        assert_eq!(
            DemoVehicleRepositoryImpl::new(store.clone())
                .find_all()
                .await?
                .len(),
            5
        );
        assert_eq!(
            DemoUserRepositoryImpl::new(store.clone())
                .find_all()
                .await?
                .len(),
            5
        );
        assert_eq!(
            DemoParkingLogRepositoryImpl::new(store).find_all().await?.len(),
            3
        );
        Ok(())
    }
}
