use adapter::database::ConnectionPool;
use adapter::memory::{
    DemoHealthCheckRepositoryImpl, DemoParkingLogRepositoryImpl, DemoSlotRepositoryImpl,
    DemoUserRepositoryImpl, DemoVehicleRepositoryImpl, SharedDemoStore,
};
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::parking_log::ParkingLogRepositoryImpl;
use adapter::repository::slot::SlotRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::repository::vehicle::VehicleRepositoryImpl;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::parking_log::ParkingLogRepository;
use kernel::repository::slot::SlotRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::vehicle::VehicleRepository;
use nlp::IntentResolver;
use std::sync::Arc;

/// Wires concrete repositories to the handlers.
#[derive(Clone)]
pub struct AppRegistry {
    slot_repository: Arc<dyn SlotRepository>,
    vehicle_repository: Arc<dyn VehicleRepository>,
    user_repository: Arc<dyn UserRepository>,
    parking_log_repository: Arc<dyn ParkingLogRepository>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
    intent_resolver: Arc<IntentResolver>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, intent_resolver: IntentResolver) -> Self {
        Self {
            slot_repository: Arc::new(SlotRepositoryImpl::new(pool.clone())),
            vehicle_repository: Arc::new(VehicleRepositoryImpl::new(pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(pool.clone())),
            parking_log_repository: Arc::new(ParkingLogRepositoryImpl::new(pool.clone())),
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool)),
            intent_resolver: Arc::new(intent_resolver),
        }
    }

    /// Registry backed by the seeded demo store instead of Postgres.
    pub fn in_memory(intent_resolver: IntentResolver) -> Self {
        let store = SharedDemoStore::seeded();
        Self {
            slot_repository: Arc::new(DemoSlotRepositoryImpl::new(store.clone())),
            vehicle_repository: Arc::new(DemoVehicleRepositoryImpl::new(store.clone())),
            user_repository: Arc::new(DemoUserRepositoryImpl::new(store.clone())),
            parking_log_repository: Arc::new(DemoParkingLogRepositoryImpl::new(store)),
            health_check_repository: Arc::new(DemoHealthCheckRepositoryImpl),
            intent_resolver: Arc::new(intent_resolver),
        }
    }

    pub fn slot_repository(&self) -> Arc<dyn SlotRepository> {
        self.slot_repository.clone()
    }

    pub fn vehicle_repository(&self) -> Arc<dyn VehicleRepository> {
        self.vehicle_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn parking_log_repository(&self) -> Arc<dyn ParkingLogRepository> {
        self.parking_log_repository.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn intent_resolver(&self) -> Arc<IntentResolver> {
        self.intent_resolver.clone()
    }
}
