//! Test harness for the bus seat reservation system

use bus_reservation_core::{Command, CommandHandler, Config, Reply, ReservationError, SeatState};
use bus_reservation_desk::Desk;
use uuid::Uuid;

/// Builder for a test context
pub struct TestCtxBuilder {
    /// Number of seats on the vehicle
    pub seats: u32,
}

impl TestCtxBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        TestCtxBuilder { seats: 10 }
    }

    /// Set the number of seats
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    /// Build the test context
    pub fn build(self) -> TestCtx {
        let desk = bus_reservation_desk::launch(&Config { seats: self.seats });
        TestCtx {
            desk,
            seats: self.seats,
        }
    }
}

impl Default for TestCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Test context around a freshly launched reservation desk
pub struct TestCtx {
    desk: Desk,
    /// Number of seats the desk was launched with
    pub seats: u32,
}

impl TestCtx {
    /// Book a group and return the booking reference.
    pub fn book_group(&self, passenger: &str, group_size: u32) -> Result<Uuid, ReservationError> {
        match self.desk.handle(Command::BookGroup {
            passenger: passenger.to_string(),
            group_size,
        })? {
            Reply::Booked { booking } => Ok(booking),
            reply => panic!("unexpected reply to a group booking: {reply:?}"),
        }
    }

    /// Book a specific seat and return the booking reference.
    pub fn book_seat(&self, passenger: &str, seat: u32) -> Result<Uuid, ReservationError> {
        match self.desk.handle(Command::BookSeat {
            passenger: passenger.to_string(),
            seat,
        })? {
            Reply::Booked { booking } => Ok(booking),
            reply => panic!("unexpected reply to a seat booking: {reply:?}"),
        }
    }

    /// Cancel the booking holding `seat`.
    pub fn cancel_seat(&self, seat: u32) -> Result<(), ReservationError> {
        match self.desk.handle(Command::CancelSeat { seat })? {
            Reply::Canceled { .. } => Ok(()),
            reply => panic!("unexpected reply to a cancellation: {reply:?}"),
        }
    }

    /// Reassign all cancelled seats; returns the number converted.
    pub fn reassign(&self) -> u32 {
        match self.desk.handle(Command::ReassignCanceledSeats) {
            Ok(Reply::Reassigned { count }) => count,
            reply => panic!("unexpected reply to a reassignment: {reply:?}"),
        }
    }

    /// Get the current seat table.
    pub fn seat_status(&self) -> Vec<SeatState> {
        match self.desk.handle(Command::SeatStatus) {
            Ok(Reply::SeatStatus(seats)) => seats,
            reply => panic!("unexpected reply to a status query: {reply:?}"),
        }
    }

    /// Get the confirmed bookings.
    pub fn bookings(&self) -> Vec<String> {
        match self.desk.handle(Command::Bookings) {
            Ok(Reply::Bookings(names)) => names,
            reply => panic!("unexpected reply to a bookings query: {reply:?}"),
        }
    }

    /// Shut the reservation system down and finish the test
    pub fn finish(self) {
        self.desk.shutdown();
    }
}
