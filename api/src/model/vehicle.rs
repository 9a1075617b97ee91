use kernel::model::{
    id::{UserId, VehicleId},
    vehicle::Vehicle,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle_id: VehicleId,
    pub vehicle_no: String,
    pub vehicle_type: String,
    pub user_id: UserId,
}

impl From<Vehicle> for VehicleResponse {
    fn from(value: Vehicle) -> Self {
        let Vehicle {
            vehicle_id,
            vehicle_no,
            vehicle_type,
            user_id,
        } = value;
        Self {
            vehicle_id,
            vehicle_no,
            vehicle_type,
            user_id,
        }
    }
}
