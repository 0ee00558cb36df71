use crate::Coordinate;

/// The map screen's view of location acquisition.
///
/// Starts at `Loading` when an activation begins and transitions exactly once
/// per activation, to `Ready` with the obtained fix or to `Unavailable`. It
/// never reverts within an activation; re-activating the gate resets it.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    Loading,
    Ready(Coordinate),
    Unavailable,
}

impl LocationState {
    /// Whether the acquisition sequence has resolved one way or the other.
    pub fn is_settled(&self) -> bool {
        !matches!(self, LocationState::Loading)
    }
}
