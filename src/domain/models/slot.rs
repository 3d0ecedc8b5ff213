use serde::{Deserialize, Serialize};

/// A derived candidate interval on a trainer's day. Never persisted;
/// regenerated on every query from the current trainer and session state.
/// Unavailable slots keep their price so callers can render them disabled
/// but priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: String,
    pub available: bool,
    pub price_cents: i32,
}
