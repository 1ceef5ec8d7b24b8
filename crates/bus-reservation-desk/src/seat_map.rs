//! Implementation of the fixed-capacity seat table

use bus_reservation_core::{ReservationError, SeatState};

/// The seat table of the vehicle
///
/// One slot per seat, indexed from 0. The length is fixed at
/// construction time and never changes.
#[derive(Clone)]
pub struct SeatMap {
    slots: Vec<SeatState>,
}

impl SeatMap {
    /// Create a new [`SeatMap`] with `num_seats` empty slots.
    pub fn new(num_seats: u32) -> Self {
        Self {
            slots: vec![SeatState::Empty; num_seats as usize],
        }
    }

    /// Get the number of seats in the table.
    pub fn len(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Check whether the table has no seats at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the number of currently empty slots.
    pub fn num_free(&self) -> u32 {
        self.slots
            .iter()
            .filter(|slot| **slot == SeatState::Empty)
            .count() as u32
    }

    /// Check whether `seat` is in range and currently empty.
    pub fn is_free(&self, seat: u32) -> bool {
        matches!(self.slots.get(seat as usize), Some(SeatState::Empty))
    }

    /// Occupy up to `group_size` empty slots for `passenger`, scanning
    /// from the lowest index upward.
    ///
    /// Returns the indices that were filled, possibly fewer than
    /// requested when the table runs out of empty slots.
    pub fn occupy_group(&mut self, passenger: &str, group_size: u32) -> Vec<u32> {
        let mut filled = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if filled.len() as u32 == group_size {
                break;
            }
            if *slot == SeatState::Empty {
                *slot = SeatState::Occupied(passenger.to_string());
                filled.push(idx as u32);
            }
        }
        filled
    }

    /// Occupy the slot `seat` for `passenger`.
    ///
    /// Fails without mutation if the seat is out of range or not empty.
    pub fn occupy(&mut self, passenger: &str, seat: u32) -> Result<(), ReservationError> {
        if !self.is_free(seat) {
            return Err(ReservationError::SeatUnavailable { seat });
        }
        self.slots[seat as usize] = SeatState::Occupied(passenger.to_string());
        Ok(())
    }

    /// Clear the slot `seat` back to empty.
    ///
    /// Fails without mutation if the seat is out of range or already
    /// empty.
    pub fn clear(&mut self, seat: u32) -> Result<(), ReservationError> {
        match self.slots.get_mut(seat as usize) {
            Some(slot) if *slot != SeatState::Empty => {
                *slot = SeatState::Empty;
                Ok(())
            }
            _ => Err(ReservationError::SeatUnavailable { seat }),
        }
    }

    /// Mark the slot `seat` as reassigned.
    ///
    /// Only called with indices popped from the cancellation history,
    /// which are in range by construction.
    pub fn mark_reassigned(&mut self, seat: u32) {
        self.slots[seat as usize] = SeatState::Reassigned;
    }

    /// Get a copy of the full seat table for display.
    pub fn snapshot(&self) -> Vec<SeatState> {
        self.slots.clone()
    }
}
