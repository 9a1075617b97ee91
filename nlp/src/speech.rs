use crate::intent::Intent;

/// Builds the spoken confirmation for a successfully executed intent.
///
/// `count` is the number of rows returned or changed; `booked_slot_id` is
/// the slot picked by the backend when the user did not name one.
pub fn confirmation(intent: &Intent, count: usize, booked_slot_id: Option<i32>) -> String {
    match *intent {
        Intent::AvailableSlots => format!("Found {count} available parking slots."),
        Intent::BookedSlots => format!("Found {count} booked parking slots."),
        Intent::MaintenanceSlots => format!("Found {count} slots in maintenance mode."),
        Intent::AllSlots => format!("Retrieved {count} parking slots."),
        Intent::AvailableCount => format!("There are {count} available parking slots."),
        Intent::BookedCount => format!("There are {count} booked parking slots."),
        Intent::BookSlot(slot_id) => format!("Slot {slot_id} has been booked successfully."),
        Intent::BookAnySlot => match booked_slot_id {
            Some(slot_id) => format!("Slot {slot_id} has been booked successfully."),
            None => "A parking slot has been booked successfully.".to_string(),
        },
        Intent::BookAllSlots => {
            format!("Successfully booked {count} available parking slots.")
        }
        Intent::ReleaseSlot(slot_id) => {
            format!("Slot {slot_id} has been released successfully.")
        }
        Intent::ReleaseAllSlots => {
            format!("Successfully released {count} booked parking slots.")
        }
        Intent::SetMaintenance(slot_id) => {
            format!("Slot {slot_id} has been set to maintenance mode.")
        }
        Intent::CheckSlot(slot_id) => format!("Retrieved status for slot {slot_id}."),
        Intent::Vehicles => format!("Retrieved {count} vehicles."),
        Intent::Users => format!("Retrieved {count} users."),
        Intent::ParkingLogs => format!("Retrieved {count} parking logs."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_confirmation_names_the_slot() {
        let phrase = confirmation(&Intent::BookSlot(3), 1, None);
        assert!(phrase.contains('3'));
        assert!(phrase.contains("booked"));
    }

    #[test]
    fn book_any_slot_reports_the_picked_slot() {
        assert_eq!(
            confirmation(&Intent::BookAnySlot, 1, Some(5)),
            "Slot 5 has been booked successfully."
        );
        assert_eq!(
            confirmation(&Intent::BookAnySlot, 1, None),
            "A parking slot has been booked successfully."
        );
    }

    #[test]
    fn listings_report_the_row_count() {
        assert_eq!(
            confirmation(&Intent::AvailableSlots, 4, None),
            "Found 4 available parking slots."
        );
        assert_eq!(
            confirmation(&Intent::ParkingLogs, 3, None),
            "Retrieved 3 parking logs."
        );
    }
}
