//! Occupancy policy types for the availability engine.

use chrono::NaiveDate;
use std::str::FromStr;

/// Policy deciding which active reservations keep a room `OCCUPIED` after a
/// reservation on it is cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomReleasePolicy {
    /// The room stays occupied only if another active reservation overlaps the period
    /// from today up to the cancelled reservation's departure.
    ///
    /// A later, non-contiguous booking does not keep the room occupied, so the cached
    /// status can read `AVAILABLE` while future reservations exist.
    #[default]
    UntilDeparture,
    /// The room stays occupied while it holds any active reservation, including stays
    /// that already departed but have not been finished yet.
    AnyFuture,
}

impl RoomReleasePolicy {
    /// Whether `AVAILABLE` under this policy guarantees the room has no active
    /// reservation, making the overlap scan on booking skippable.
    pub fn trusts_available_status(self) -> bool {
        matches!(self, Self::AnyFuture)
    }

    /// Window to re-derive a room's status with after cancelling a reservation that
    /// departs on `departure_date`.
    pub fn cancellation_window(self, today: NaiveDate, departure_date: NaiveDate) -> OccupancyWindow {
        match self {
            Self::UntilDeparture => OccupancyWindow {
                from: Some(today),
                until: Some(departure_date),
            },
            Self::AnyFuture => OccupancyWindow::unbounded(),
        }
    }
}

impl FromStr for RoomReleasePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "until_departure" => Ok(Self::UntilDeparture),
            "any_future" => Ok(Self::AnyFuture),
            other => Err(other.to_string()),
        }
    }
}

/// Date window a room's occupancy is evaluated against.
///
/// An active reservation occupies the window when it departs after `from` and enters
/// before `until`. A missing bound matches every reservation on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyWindow {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl OccupancyWindow {
    /// Open-ended window starting at `from`.
    pub fn from(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            until: None,
        }
    }

    /// Window matched by every active reservation.
    pub fn unbounded() -> Self {
        Self {
            from: None,
            until: None,
        }
    }
}
