//! Implementation of the bus seat reservation system.
//!
//! The [`Desk`] owns the seat table and the three bookkeeping containers
//! (booking log, passenger roster, cancellation history) and processes
//! the commands handed over by the console frontend.

mod booking_log;
mod cancellations;
mod desk;
mod roster;
mod seat_map;

pub use booking_log::{BookingLog, BookingRecord};
pub use cancellations::CancellationStack;
pub use desk::Desk;
pub use roster::PassengerRoster;
pub use seat_map::SeatMap;

use bus_reservation_core::Config;

/// Entrypoint of the reservation system
///
/// Constructs a [`Desk`] which is served commands by the surrounding
/// console frontend.
pub fn launch(config: &Config) -> Desk {
    Desk::new(config)
}
