//! Log of accepted bookings in acceptance order

use std::collections::VecDeque;

use bus_reservation_core::ReservationError;
use uuid::Uuid;

/// One accepted booking call
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BookingRecord {
    /// Reference handed back to the caller
    pub id: Uuid,
    /// Name the booking was made under
    pub passenger: String,
}

/// FIFO log of accepted bookings, oldest first
///
/// No desk operation removes entries; the log grows with every accepted
/// booking and serves as an audit trail of acceptance order. A group
/// booking contributes a single record regardless of how many seats it
/// filled.
#[derive(Clone, Default)]
pub struct BookingLog {
    records: VecDeque<BookingRecord>,
}

impl BookingLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Append a booking for `passenger` and return its reference.
    pub fn record(&mut self, passenger: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.records.push_back(BookingRecord {
            id,
            passenger: passenger.to_string(),
        });
        id
    }

    /// Remove and return the oldest booking.
    pub fn take_next_in_line(&mut self) -> Result<BookingRecord, ReservationError> {
        self.records
            .pop_front()
            .ok_or(ReservationError::EmptyContainerAccess {
                container: "booking log",
            })
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the number of logged bookings.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
