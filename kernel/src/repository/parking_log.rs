use crate::model::parking_log::ParkingLog;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ParkingLogRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<ParkingLog>>;
}
