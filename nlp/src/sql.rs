use crate::intent::Intent;

/// Renders the SQL equivalent of an intent for the `/query` response.
///
/// Display only: execution goes through typed repository calls, never
/// through this string.
pub fn render_sql(intent: &Intent) -> String {
    match *intent {
        Intent::AvailableSlots => {
            "SELECT * FROM parking_slots WHERE status='available'".to_string()
        }
        Intent::BookedSlots => "SELECT * FROM parking_slots WHERE status='booked'".to_string(),
        Intent::MaintenanceSlots => {
            "SELECT * FROM parking_slots WHERE status='maintenance'".to_string()
        }
        Intent::AllSlots => "SELECT * FROM parking_slots".to_string(),
        Intent::AvailableCount => {
            "SELECT COUNT(*) FROM parking_slots WHERE status='available'".to_string()
        }
        Intent::BookedCount => {
            "SELECT COUNT(*) FROM parking_slots WHERE status='booked'".to_string()
        }
        Intent::BookSlot(slot_id) => format!(
            "UPDATE parking_slots SET status='booked' WHERE slot_id={slot_id} AND status='available'"
        ),
        Intent::BookAnySlot => "UPDATE parking_slots SET status='booked' WHERE slot_id = (SELECT slot_id FROM parking_slots WHERE status='available' LIMIT 1)".to_string(),
        Intent::BookAllSlots => {
            "UPDATE parking_slots SET status='booked' WHERE status='available'".to_string()
        }
        Intent::ReleaseSlot(slot_id) => {
            format!("UPDATE parking_slots SET status='available' WHERE slot_id={slot_id}")
        }
        Intent::ReleaseAllSlots => {
            "UPDATE parking_slots SET status='available' WHERE status='booked'".to_string()
        }
        Intent::SetMaintenance(slot_id) => {
            format!("UPDATE parking_slots SET status='maintenance' WHERE slot_id={slot_id}")
        }
        Intent::CheckSlot(slot_id) => {
            format!("SELECT * FROM parking_slots WHERE slot_id={slot_id}")
        }
        Intent::Vehicles => "SELECT * FROM vehicles".to_string(),
        Intent::Users => "SELECT * FROM users".to_string(),
        Intent::ParkingLogs => "SELECT * FROM parking_logs".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_templates_substitute_the_slot_id() {
        assert_eq!(
            render_sql(&Intent::BookSlot(3)),
            "UPDATE parking_slots SET status='booked' WHERE slot_id=3 AND status='available'"
        );
        assert_eq!(
            render_sql(&Intent::CheckSlot(7)),
            "SELECT * FROM parking_slots WHERE slot_id=7"
        );
    }

    #[test]
    fn listing_templates_are_fixed_strings() {
        assert_eq!(
            render_sql(&Intent::AvailableSlots),
            "SELECT * FROM parking_slots WHERE status='available'"
        );
        assert_eq!(render_sql(&Intent::Vehicles), "SELECT * FROM vehicles");
    }
}
