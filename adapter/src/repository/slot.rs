use crate::database::{model::slot::SlotRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::SlotId,
    slot::{Slot, SlotStatus},
};
use kernel::repository::slot::SlotRepository;
use shared::error::{AppError, AppResult};

const SELECT_SLOT: &str = "SELECT slot_id, location, status, floor_no, slot_type FROM parking_slots";

#[derive(new)]
pub struct SlotRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SlotRepository for SlotRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        let rows: Vec<SlotRow> = sqlx::query_as(&format!("{SELECT_SLOT} ORDER BY slot_id"))
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Slot::try_from).collect()
    }

    async fn find_by_status(&self, status: SlotStatus) -> AppResult<Vec<Slot>> {
        let rows: Vec<SlotRow> =
            sqlx::query_as(&format!("{SELECT_SLOT} WHERE status = $1 ORDER BY slot_id"))
                .bind(status.as_str())
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Slot::try_from).collect()
    }

    async fn find_by_id(&self, slot_id: SlotId) -> AppResult<Option<Slot>> {
        let row: Option<SlotRow> = sqlx::query_as(&format!("{SELECT_SLOT} WHERE slot_id = $1"))
            .bind(slot_id.raw())
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        row.map(Slot::try_from).transpose()
    }

    async fn count_by_status(&self, status: SlotStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM parking_slots WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    // Booking is the one read-then-write sequence here, so it runs inside a
    // SERIALIZABLE transaction: the conditional UPDATE only wins when the
    // slot is still available at commit time.
    async fn book(&self, slot_id: SlotId) -> AppResult<Slot> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let updated: Option<SlotRow> = sqlx::query_as(
            "UPDATE parking_slots SET status = 'booked' \
             WHERE slot_id = $1 AND status = 'available' \
             RETURNING slot_id, location, status, floor_no, slot_type",
        )
        .bind(slot_id.raw())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = updated else {
            // Distinguish "no such slot" from "slot exists but is not free".
            let existing: Option<SlotRow> =
                sqlx::query_as(&format!("{SELECT_SLOT} WHERE slot_id = $1"))
                    .bind(slot_id.raw())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;

            return match existing {
                None => Err(AppError::EntityNotFound(format!(
                    "Slot {slot_id} was not found."
                ))),
                Some(_) => Err(AppError::UnprocessableEntity(format!(
                    "Slot {slot_id} is not available."
                ))),
            };
        };

        tx.commit().await.map_err(AppError::TransactionError)?;

        Slot::try_from(row)
    }

    async fn book_next_available(&self) -> AppResult<Slot> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let candidate: Option<SlotRow> = sqlx::query_as(&format!(
            "{SELECT_SLOT} WHERE status = 'available' ORDER BY slot_id LIMIT 1"
        ))
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(candidate) = candidate else {
            return Err(AppError::UnprocessableEntity(
                "No available slots to book.".into(),
            ));
        };

        let row: SlotRow = sqlx::query_as(
            "UPDATE parking_slots SET status = 'booked' WHERE slot_id = $1 \
             RETURNING slot_id, location, status, floor_no, slot_type",
        )
        .bind(candidate.slot_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Slot::try_from(row)
    }

    async fn release(&self, slot_id: SlotId) -> AppResult<Slot> {
        self.set_status(slot_id, SlotStatus::Available).await
    }

    async fn set_maintenance(&self, slot_id: SlotId) -> AppResult<Slot> {
        self.set_status(slot_id, SlotStatus::Maintenance).await
    }

    async fn set_status_all(&self, from: SlotStatus, to: SlotStatus) -> AppResult<Vec<Slot>> {
        let rows: Vec<SlotRow> = sqlx::query_as(
            "UPDATE parking_slots SET status = $1 WHERE status = $2 \
             RETURNING slot_id, location, status, floor_no, slot_type",
        )
        .bind(to.as_str())
        .bind(from.as_str())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Slot::try_from).collect()
    }
}

impl SlotRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn set_status(&self, slot_id: SlotId, to: SlotStatus) -> AppResult<Slot> {
        let row: Option<SlotRow> = sqlx::query_as(
            "UPDATE parking_slots SET status = $1 WHERE slot_id = $2 \
             RETURNING slot_id, location, status, floor_no, slot_type",
        )
        .bind(to.as_str())
        .bind(slot_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Slot::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "Slot {slot_id} was not found."
            ))),
        }
    }
}
