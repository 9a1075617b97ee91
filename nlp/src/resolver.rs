use crate::intent::{Intent, IntentKind};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No matching pattern found")]
    NoMatch,
    #[error("Missing or invalid slot number. Try like: \"book slot 3\".")]
    MissingSlotId,
}

// Resolution order is first-match-wins, so bulk operations must be listed
// before their parameterized cousins ("book all slots" before "book slot")
// and count queries before the plain listings they contain as substrings.
const MATCH_ORDER: &[IntentKind] = &[
    IntentKind::BookAllSlots,
    IntentKind::BookAnySlot,
    IntentKind::ReleaseAllSlots,
    IntentKind::SetMaintenance,
    IntentKind::AvailableCount,
    IntentKind::BookedCount,
    IntentKind::BookSlot,
    IntentKind::ReleaseSlot,
    IntentKind::MaintenanceSlots,
    IntentKind::CheckSlot,
    IntentKind::AvailableSlots,
    IntentKind::BookedSlots,
    IntentKind::AllSlots,
    IntentKind::Vehicles,
    IntentKind::Users,
    IntentKind::ParkingLogs,
];

fn patterns_for(kind: IntentKind) -> &'static [&'static str] {
    match kind {
        IntentKind::AvailableSlots => &[
            r"\bavailable slots\b",
            r"\bfree slots\b",
            r"\bempty slots\b",
            r"\bshow free parking\b",
            r"\bwhat slots are available\b",
            r"\blist available parking\b",
        ],
        IntentKind::BookedSlots => &[
            r"\bbooked slots\b",
            r"\boccupied slots\b",
            r"\breserved slots\b",
            r"\bfilled slots\b",
            r"\bwhat slots are booked\b",
        ],
        IntentKind::MaintenanceSlots => {
            &[r"\bmaintenance slots\b", r"\bslots (?:in|under) maintenance\b"]
        }
        IntentKind::AllSlots => &[
            r"\bshow all slots\b",
            r"\blist all slots\b",
            r"\ball parking slots\b",
            r"\bdisplay slots\b",
            r"\bshow parking slots\b",
        ],
        IntentKind::AvailableCount => &[
            r"\bhow many slots are available\b",
            r"\bcount available slots\b",
            r"\bnumber of available slots\b",
            r"\bhow many available slots\b",
        ],
        IntentKind::BookedCount => &[
            r"\bhow many slots are booked\b",
            r"\bcount booked slots\b",
            r"\bnumber of booked slots\b",
            r"\bhow many booked slots\b",
        ],
        IntentKind::BookSlot => &[
            r"\bbook slot\b",
            r"\breserve slot\b",
            r"\boccupy slot\b",
            r"\bpark in slot\b",
            r"\buse slot\b",
            r"\btake slot\b",
        ],
        IntentKind::BookAnySlot => &[
            r"\bbook any slot\b",
            r"\bbook a slot\b",
            r"\bbook the next available slot\b",
            r"\bpark anywhere\b",
        ],
        IntentKind::BookAllSlots => &[r"\bbook all slots\b", r"\breserve all slots\b"],
        IntentKind::ReleaseSlot => &[
            r"\brelease slot\b",
            r"\bfree slot\b",
            r"\bvacate slot\b",
            r"\bleave slot\b",
            r"\bempty slot\b",
        ],
        IntentKind::ReleaseAllSlots => &[
            r"\brelease all slots\b",
            r"\bfree all slots\b",
            r"\bclear all slots\b",
        ],
        IntentKind::SetMaintenance => &[
            r"\bset slot \d+ (?:to|in|under) maintenance\b",
            r"\bput slot \d+ (?:in|into|under) maintenance\b",
            r"\bmark slot \d+ for maintenance\b",
        ],
        IntentKind::CheckSlot => &[
            r"\bstatus of slot\b",
            r"\bslot \d+ status\b",
            r"\bis slot \d+ available\b",
            r"\bcheck slot\b",
        ],
        IntentKind::Vehicles => &[
            r"\bshow vehicles\b",
            r"\blist vehicles\b",
            r"\bregistered vehicles\b",
            r"\bshow all vehicles\b",
        ],
        IntentKind::Users => &[
            r"\bshow users\b",
            r"\blist users\b",
            r"\bregistered users\b",
            r"\bshow all users\b",
        ],
        IntentKind::ParkingLogs => &[
            r"\bparking logs\b",
            r"\bparking history\b",
            r"\bshow logs\b",
            r"\bparking records\b",
            r"\btransaction history\b",
        ],
    }
}

pub struct IntentResolver {
    patterns: Vec<(IntentKind, Regex)>,
    slot_id: Regex,
    bare_number: Regex,
}

impl IntentResolver {
    pub fn new() -> Result<Self, regex::Error> {
        let mut patterns = Vec::with_capacity(MATCH_ORDER.len());
        for &kind in MATCH_ORDER {
            let alternation = patterns_for(kind).join("|");
            patterns.push((kind, Regex::new(&alternation)?));
        }
        Ok(Self {
            patterns,
            slot_id: Regex::new(r"slot\s*(?:number\s*)?(\d+)")?,
            bare_number: Regex::new(r"\b(\d+)\b")?,
        })
    }

    /// First-match-wins over the ordered pattern list. A matched kind that
    /// requires a slot id but has none fails here, before any backend call.
    pub fn resolve(&self, text: &str) -> Result<Intent, ResolveError> {
        let text = text.trim().to_lowercase();
        tracing::debug!(%text, "resolving intent");

        for (kind, regex) in &self.patterns {
            if regex.is_match(&text) {
                tracing::debug!(key = kind.key(), "matched intent");
                return self.build_intent(*kind, &text);
            }
        }

        Err(ResolveError::NoMatch)
    }

    fn build_intent(&self, kind: IntentKind, text: &str) -> Result<Intent, ResolveError> {
        let slot_id = if kind.needs_slot_id() {
            Some(self.extract_slot_id(text).ok_or(ResolveError::MissingSlotId)?)
        } else {
            None
        };

        let intent = match kind {
            IntentKind::AvailableSlots => Intent::AvailableSlots,
            IntentKind::BookedSlots => Intent::BookedSlots,
            IntentKind::MaintenanceSlots => Intent::MaintenanceSlots,
            IntentKind::AllSlots => Intent::AllSlots,
            IntentKind::AvailableCount => Intent::AvailableCount,
            IntentKind::BookedCount => Intent::BookedCount,
            IntentKind::BookSlot => Intent::BookSlot(slot_id.ok_or(ResolveError::MissingSlotId)?),
            IntentKind::BookAnySlot => Intent::BookAnySlot,
            IntentKind::BookAllSlots => Intent::BookAllSlots,
            IntentKind::ReleaseSlot => {
                Intent::ReleaseSlot(slot_id.ok_or(ResolveError::MissingSlotId)?)
            }
            IntentKind::SetMaintenance => {
                Intent::SetMaintenance(slot_id.ok_or(ResolveError::MissingSlotId)?)
            }
            IntentKind::CheckSlot => Intent::CheckSlot(slot_id.ok_or(ResolveError::MissingSlotId)?),
            IntentKind::ReleaseAllSlots => Intent::ReleaseAllSlots,
            IntentKind::Vehicles => Intent::Vehicles,
            IntentKind::Users => Intent::Users,
            IntentKind::ParkingLogs => Intent::ParkingLogs,
        };

        Ok(intent)
    }

    // "slot 12" / "slot number 12" first, then any standalone integer.
    // Zero and negative ids are treated as missing.
    fn extract_slot_id(&self, text: &str) -> Option<i32> {
        let captured = self
            .slot_id
            .captures(text)
            .or_else(|| self.bare_number.captures(text))?;
        let slot_id: i32 = captured.get(1)?.as_str().parse().ok()?;
        (slot_id > 0).then_some(slot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn resolver() -> IntentResolver {
        IntentResolver::new().unwrap()
    }

    #[test]
    fn every_example_phrase_resolves_to_its_own_intent() {
        let resolver = resolver();
        for kind in IntentKind::iter() {
            for example in kind.examples() {
                let intent = resolver
                    .resolve(example)
                    .unwrap_or_else(|e| panic!("'{example}' failed to resolve: {e}"));
                assert_eq!(
                    intent.kind(),
                    kind,
                    "'{example}' resolved to {:?}",
                    intent.kind()
                );
            }
        }
    }

    #[test]
    fn book_slot_extracts_the_slot_id() {
        assert_eq!(resolver().resolve("book slot 3"), Ok(Intent::BookSlot(3)));
        assert_eq!(
            resolver().resolve("please reserve slot number 12"),
            Ok(Intent::BookSlot(12))
        );
    }

    #[test]
    fn book_slot_without_a_number_is_a_missing_parameter() {
        assert_eq!(
            resolver().resolve("book slot"),
            Err(ResolveError::MissingSlotId)
        );
    }

    #[test]
    fn non_positive_slot_ids_are_rejected() {
        assert_eq!(
            resolver().resolve("book slot 0"),
            Err(ResolveError::MissingSlotId)
        );
    }

    #[test]
    fn unknown_text_yields_no_match() {
        assert_eq!(
            resolver().resolve("order me a pizza"),
            Err(ResolveError::NoMatch)
        );
    }

    #[test]
    fn bulk_booking_wins_over_single_slot_booking() {
        assert_eq!(resolver().resolve("book all slots"), Ok(Intent::BookAllSlots));
        assert_eq!(resolver().resolve("book any slot"), Ok(Intent::BookAnySlot));
    }

    #[test]
    fn plural_free_slots_is_a_listing_not_a_release() {
        assert_eq!(
            resolver().resolve("show free slots"),
            Ok(Intent::AvailableSlots)
        );
        assert_eq!(resolver().resolve("free slot 2"), Ok(Intent::ReleaseSlot(2)));
    }

    #[test]
    fn mixed_case_and_padding_are_tolerated() {
        assert_eq!(
            resolver().resolve("  Show Available SLOTS  "),
            Ok(Intent::AvailableSlots)
        );
    }
}
