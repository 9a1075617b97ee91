use crate::database::{model::parking_log::ParkingLogRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::parking_log::ParkingLog;
use kernel::repository::parking_log::ParkingLogRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ParkingLogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ParkingLogRepository for ParkingLogRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<ParkingLog>> {
        let rows: Vec<ParkingLogRow> = sqlx::query_as(
            "SELECT log_id, vehicle_id, slot_id, entry_time, exit_time, total_amount, payment_status \
             FROM parking_logs ORDER BY log_id",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ParkingLog::from).collect())
    }
}
