use crate::model::vehicle::Vehicle;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;
}
