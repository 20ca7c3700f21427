//! Delivery time slots.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the six delivery slots.
#[derive(Debug, Clone, thiserror::Error)]
#[error("not a delivery time slot: {0}")]
pub struct DeliverySlotError(String);

/// One of the six fixed delivery windows offered at checkout.
///
/// Stored in the database as the display string (e.g. `06:00 - 08:00`),
/// matching what the checkout form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverySlot {
    #[serde(rename = "06:00 - 08:00")]
    Morning6To8,
    #[serde(rename = "08:00 - 10:00")]
    Morning8To10,
    #[serde(rename = "10:00 - 12:00")]
    Morning10To12,
    #[serde(rename = "14:00 - 16:00")]
    Afternoon2To4,
    #[serde(rename = "16:00 - 18:00")]
    Afternoon4To6,
    #[serde(rename = "18:00 - 20:00")]
    Evening6To8,
}

impl DeliverySlot {
    /// All slots, in the order shown on the checkout page.
    pub const ALL: [Self; 6] = [
        Self::Morning6To8,
        Self::Morning8To10,
        Self::Morning10To12,
        Self::Afternoon2To4,
        Self::Afternoon4To6,
        Self::Evening6To8,
    ];

    /// The display/wire string for this slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning6To8 => "06:00 - 08:00",
            Self::Morning8To10 => "08:00 - 10:00",
            Self::Morning10To12 => "10:00 - 12:00",
            Self::Afternoon2To4 => "14:00 - 16:00",
            Self::Afternoon4To6 => "16:00 - 18:00",
            Self::Evening6To8 => "18:00 - 20:00",
        }
    }
}

impl FromStr for DeliverySlot {
    type Err = DeliverySlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| DeliverySlotError(s.to_owned()))
    }
}

impl fmt::Display for DeliverySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_slots() {
        for slot in DeliverySlot::ALL {
            assert_eq!(slot.as_str().parse::<DeliverySlot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_rejects_unknown_slot() {
        assert!("12:00 - 14:00".parse::<DeliverySlot>().is_err());
        assert!("".parse::<DeliverySlot>().is_err());
    }

    #[test]
    fn test_serde_uses_display_string() {
        let json = serde_json::to_string(&DeliverySlot::Morning6To8).unwrap();
        assert_eq!(json, "\"06:00 - 08:00\"");
    }
}
