//! Ad columns beside the canvas.
//!
//! The ad network is an opaque side effect: the app tells an [`AdHost`]
//! which slots are on screen and ignores whatever happens next.

use crate::error::AdError;
use crate::settings::AdSettings;

/// One ad placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSlot {
    pub client_id: String,
    pub slot_id: String,
}

impl AdSlot {
    /// Left and right column slots, in that order.
    pub fn from_settings(settings: &AdSettings) -> [AdSlot; 2] {
        [
            AdSlot {
                client_id: settings.client_id.clone(),
                slot_id: settings.left_slot.clone(),
            },
            AdSlot {
                client_id: settings.client_id.clone(),
                slot_id: settings.right_slot.clone(),
            },
        ]
    }
}

/// Fills ad slots. Called again every time the canvas layout changes.
pub trait AdHost {
    fn activate(&mut self, slot: &AdSlot) -> Result<(), AdError>;
}

/// Host used when no ad network is wired in: records the request in the log.
#[derive(Debug, Default)]
pub struct LoggingAdHost;

impl AdHost for LoggingAdHost {
    fn activate(&mut self, slot: &AdSlot) -> Result<(), AdError> {
        log::debug!("Ad slot {} ({}) requested", slot.slot_id, slot.client_id);
        Ok(())
    }
}

/// Activate every slot, logging failures instead of returning them.
///
/// Returns how many slots accepted the request.
pub fn refresh_slots(host: &mut dyn AdHost, slots: &[AdSlot]) -> usize {
    let mut filled = 0;
    for slot in slots {
        match host.activate(slot) {
            Ok(()) => filled += 1,
            Err(err) => log::warn!("Ad slot {} not filled: {}", slot.slot_id, err),
        }
    }
    filled
}
