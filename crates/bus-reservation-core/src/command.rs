use std::fmt;

use uuid::Uuid;

use crate::ReservationError;

/// State of a single seat slot
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SeatState {
    /// Nobody holds the seat
    Empty,
    /// The seat is held by the named passenger
    Occupied(String),
    /// The seat was cancelled and has been handed back out
    Reassigned,
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatState::Empty => f.write_str("empty"),
            SeatState::Occupied(passenger) => f.write_str(passenger),
            SeatState::Reassigned => f.write_str("Reassigned"),
        }
    }
}

/// A parsed command sent from the console menu
///
/// Each variant corresponds to one menu option; the frontend parses user
/// input into a `Command` and hands it to a [`CommandHandler`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Book up to `group_size` seats under one passenger name
    BookGroup {
        /// Name the booking is made under
        passenger: String,
        /// Number of seats the group asks for
        group_size: u32,
    },
    /// Book one specific seat
    BookSeat {
        /// Name the booking is made under
        passenger: String,
        /// 0-based index of the requested seat
        seat: u32,
    },
    /// Cancel the booking holding a seat
    CancelSeat {
        /// 0-based index of the seat to cancel
        seat: u32,
    },
    /// Convert every cancelled seat into the reassigned state
    ReassignCanceledSeats,
    /// Retrieve the full seat table for display
    SeatStatus,
    /// Retrieve the confirmed bookings for display
    Bookings,
}

/// Successful outcome of a [`Command`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reply {
    /// A booking was accepted
    Booked {
        /// Reference of the accepted booking
        booking: Uuid,
    },
    /// A seat was cancelled
    Canceled {
        /// 0-based index of the cancelled seat
        seat: u32,
    },
    /// All cancelled seats were reassigned
    Reassigned {
        /// Number of seats that were converted
        count: u32,
    },
    /// Snapshot of the seat table, one entry per seat
    SeatStatus(Vec<SeatState>),
    /// Confirmed bookings in ascending lexicographic order
    Bookings(Vec<String>),
}

/// Interface between the console frontend and the reservation desk
pub trait CommandHandler {
    /// Handle a parsed command
    ///
    /// A failed command performs no mutation; the handler remains usable
    /// after any error.
    fn handle(&self, command: Command) -> Result<Reply, ReservationError>;

    /// Shut the reservation system down
    fn shutdown(self);
}
