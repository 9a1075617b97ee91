use crate::database::{model::vehicle::VehicleRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::vehicle::Vehicle;
use kernel::repository::vehicle::VehicleRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct VehicleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl VehicleRepository for VehicleRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let rows: Vec<VehicleRow> = sqlx::query_as(
            "SELECT vehicle_id, vehicle_no, vehicle_type, user_id FROM vehicles ORDER BY vehicle_id",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}
