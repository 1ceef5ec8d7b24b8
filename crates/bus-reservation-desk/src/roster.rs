//! Confirmed bookings in display order

/// Names of passengers with accepted bookings
///
/// One entry per accepted booking call, so a group booking shows up once
/// no matter how many seats it filled. The roster is re-sorted after
/// every accepted booking; snapshots are always in ascending
/// lexicographic order. Cancelling a seat does not remove the name, the
/// roster records accepted bookings rather than current occupancy.
#[derive(Clone, Default)]
pub struct PassengerRoster {
    names: Vec<String>,
}

impl PassengerRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Append `passenger` and restore the sorted order.
    ///
    /// The sort is stable, so bookings under equal names keep their
    /// acceptance order.
    pub fn add_sorted(&mut self, passenger: &str) {
        self.names.push(passenger.to_string());
        self.names.sort();
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Check whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the number of accepted bookings.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Get a copy of the roster for display.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.clone()
    }
}
