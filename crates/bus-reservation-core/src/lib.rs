//! Shared surface of the bus seat reservation system.
#![warn(missing_docs)]

mod command;
mod error;

pub use command::{Command, CommandHandler, Reply, SeatState};
pub use error::ReservationError;

/// Configuration of the reservation system
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Total number of seats on the vehicle
    pub seats: u32,
}
