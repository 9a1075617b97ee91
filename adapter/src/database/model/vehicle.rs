use kernel::model::{
    id::{UserId, VehicleId},
    vehicle::Vehicle,
};

#[derive(sqlx::FromRow)]
pub struct VehicleRow {
    pub vehicle_id: i32,
    pub vehicle_no: String,
    pub vehicle_type: String,
    pub user_id: i32,
}

impl From<VehicleRow> for Vehicle {
    fn from(value: VehicleRow) -> Self {
        let VehicleRow {
            vehicle_id,
            vehicle_no,
            vehicle_type,
            user_id,
        } = value;
        Vehicle {
            vehicle_id: VehicleId::new(vehicle_id),
            vehicle_no,
            vehicle_type,
            user_id: UserId::new(user_id),
        }
    }
}
