//! History of cancelled seats awaiting reassignment

use bus_reservation_core::ReservationError;

/// LIFO history of cancelled seat indices
///
/// A seat index is pushed when its booking is cancelled and popped when
/// the seat is reassigned. Cancelling requires the seat to be occupied,
/// so an index is present at most once at a time.
#[derive(Clone, Default)]
pub struct CancellationStack {
    seats: Vec<u32>,
}

impl CancellationStack {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { seats: Vec::new() }
    }

    /// Push the cancelled seat `seat` on top of the history.
    pub fn push(&mut self, seat: u32) {
        self.seats.push(seat);
    }

    /// Remove and return the most recently cancelled seat.
    pub fn pop(&mut self) -> Result<u32, ReservationError> {
        self.seats
            .pop()
            .ok_or(ReservationError::EmptyContainerAccess {
                container: "cancellation history",
            })
    }

    /// Check whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Get the number of seats awaiting reassignment.
    pub fn len(&self) -> usize {
        self.seats.len()
    }
}
