use crate::model::id::{UserId, VehicleId};

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub vehicle_id: VehicleId,
    pub vehicle_no: String,
    pub vehicle_type: String,
    pub user_id: UserId,
}
