use strum::{EnumIter, IntoEnumIterator};

/// A fully resolved user request, parameter included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AvailableSlots,
    BookedSlots,
    MaintenanceSlots,
    AllSlots,
    AvailableCount,
    BookedCount,
    BookSlot(i32),
    BookAnySlot,
    BookAllSlots,
    ReleaseSlot(i32),
    ReleaseAllSlots,
    SetMaintenance(i32),
    CheckSlot(i32),
    Vehicles,
    Users,
    ParkingLogs,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::AvailableSlots => IntentKind::AvailableSlots,
            Intent::BookedSlots => IntentKind::BookedSlots,
            Intent::MaintenanceSlots => IntentKind::MaintenanceSlots,
            Intent::AllSlots => IntentKind::AllSlots,
            Intent::AvailableCount => IntentKind::AvailableCount,
            Intent::BookedCount => IntentKind::BookedCount,
            Intent::BookSlot(_) => IntentKind::BookSlot,
            Intent::BookAnySlot => IntentKind::BookAnySlot,
            Intent::BookAllSlots => IntentKind::BookAllSlots,
            Intent::ReleaseSlot(_) => IntentKind::ReleaseSlot,
            Intent::ReleaseAllSlots => IntentKind::ReleaseAllSlots,
            Intent::SetMaintenance(_) => IntentKind::SetMaintenance,
            Intent::CheckSlot(_) => IntentKind::CheckSlot,
            Intent::Vehicles => IntentKind::Vehicles,
            Intent::Users => IntentKind::Users,
            Intent::ParkingLogs => IntentKind::ParkingLogs,
        }
    }

    pub fn key(&self) -> &'static str {
        self.kind().key()
    }

    pub fn description(&self) -> &'static str {
        self.kind().description()
    }
}

/// Parameter-free identity of an intent. Drives pattern matching and the
/// `/supported_commands` catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum IntentKind {
    AvailableSlots,
    BookedSlots,
    MaintenanceSlots,
    AllSlots,
    AvailableCount,
    BookedCount,
    BookSlot,
    BookAnySlot,
    BookAllSlots,
    ReleaseSlot,
    ReleaseAllSlots,
    SetMaintenance,
    CheckSlot,
    Vehicles,
    Users,
    ParkingLogs,
}

impl IntentKind {
    pub fn key(&self) -> &'static str {
        match self {
            IntentKind::AvailableSlots => "available_slots",
            IntentKind::BookedSlots => "booked_slots",
            IntentKind::MaintenanceSlots => "maintenance_slots",
            IntentKind::AllSlots => "all_slots",
            IntentKind::AvailableCount => "available_count",
            IntentKind::BookedCount => "booked_count",
            IntentKind::BookSlot => "book_slot",
            IntentKind::BookAnySlot => "book_any_slot",
            IntentKind::BookAllSlots => "book_all_slots",
            IntentKind::ReleaseSlot => "release_slot",
            IntentKind::ReleaseAllSlots => "release_all_slots",
            IntentKind::SetMaintenance => "set_maintenance",
            IntentKind::CheckSlot => "slot_status",
            IntentKind::Vehicles => "vehicles",
            IntentKind::Users => "users",
            IntentKind::ParkingLogs => "parking_logs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IntentKind::AvailableSlots => "Show all available parking slots",
            IntentKind::BookedSlots => "Show all booked parking slots",
            IntentKind::MaintenanceSlots => "Show all slots in maintenance mode",
            IntentKind::AllSlots => "Show a list of all parking slots",
            IntentKind::AvailableCount => "Count the number of available slots",
            IntentKind::BookedCount => "Count the number of booked slots",
            IntentKind::BookSlot => "Book a specific parking slot by its ID",
            IntentKind::BookAnySlot => "Book the next available parking slot",
            IntentKind::BookAllSlots => "Book all available parking slots",
            IntentKind::ReleaseSlot => "Release a specific parking slot by its ID",
            IntentKind::ReleaseAllSlots => "Release all booked parking slots",
            IntentKind::SetMaintenance => "Set a specific slot to maintenance mode",
            IntentKind::CheckSlot => "Check status of a specific slot by its ID",
            IntentKind::Vehicles => "Show all registered vehicles",
            IntentKind::Users => "Show all registered users",
            IntentKind::ParkingLogs => "Show parking transaction logs",
        }
    }

    pub fn needs_slot_id(&self) -> bool {
        matches!(
            self,
            IntentKind::BookSlot
                | IntentKind::ReleaseSlot
                | IntentKind::SetMaintenance
                | IntentKind::CheckSlot
        )
    }

    /// Example phrasings, used as suggestions when nothing matches.
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            IntentKind::AvailableSlots => &[
                "show available slots",
                "free slots",
                "what slots are available",
            ],
            IntentKind::BookedSlots => &["show booked slots", "occupied slots"],
            IntentKind::MaintenanceSlots => {
                &["show maintenance slots", "slots under maintenance"]
            }
            IntentKind::AllSlots => &["show all slots", "list all slots"],
            IntentKind::AvailableCount => {
                &["how many slots are available", "count available slots"]
            }
            IntentKind::BookedCount => &["how many slots are booked", "count booked slots"],
            IntentKind::BookSlot => &["book slot 3", "reserve slot 3"],
            IntentKind::BookAnySlot => &["book any slot", "book the next available slot"],
            IntentKind::BookAllSlots => &["book all slots"],
            IntentKind::ReleaseSlot => &["release slot 3", "free slot 3"],
            IntentKind::ReleaseAllSlots => &["release all slots"],
            IntentKind::SetMaintenance => {
                &["set slot 4 to maintenance", "mark slot 4 for maintenance"]
            }
            IntentKind::CheckSlot => &["status of slot 3", "is slot 3 available"],
            IntentKind::Vehicles => &["show vehicles", "registered vehicles"],
            IntentKind::Users => &["show users", "registered users"],
            IntentKind::ParkingLogs => &["show parking logs", "parking history"],
        }
    }
}

/// One example phrase per intent, offered when no pattern matches.
pub fn suggestions() -> Vec<String> {
    IntentKind::iter()
        .filter_map(|kind| kind.examples().first().map(|s| s.to_string()))
        .collect()
}
