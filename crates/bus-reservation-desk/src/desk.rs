//! Implementation of the reservation desk

use bus_reservation_core::{Command, CommandHandler, Config, Reply, ReservationError, SeatState};
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::booking_log::BookingLog;
use crate::cancellations::CancellationStack;
use crate::roster::PassengerRoster;
use crate::seat_map::SeatMap;

struct DeskInner {
    /// The seat table
    seats: SeatMap,
    /// Accepted bookings in acceptance order
    booking_log: BookingLog,
    /// Accepted bookings in display order
    roster: PassengerRoster,
    /// Cancelled seats awaiting reassignment
    cancellations: CancellationStack,
}

impl DeskInner {
    fn new(config: &Config) -> Self {
        Self {
            seats: SeatMap::new(config.seats),
            booking_log: BookingLog::new(),
            roster: PassengerRoster::new(),
            cancellations: CancellationStack::new(),
        }
    }

    /// Record an accepted booking in the log and the roster.
    fn confirm_booking(&mut self, passenger: &str) -> Uuid {
        let booking = self.booking_log.record(passenger);
        self.roster.add_sorted(passenger);
        booking
    }

    fn book_group(&mut self, passenger: &str, group_size: u32) -> Result<Uuid, ReservationError> {
        let filled = self.seats.occupy_group(passenger, group_size);
        if filled.is_empty() {
            debug!(passenger, group_size, "group booking found no empty seat");
            return Err(ReservationError::InsufficientSeats);
        }

        // A partial fill still counts as an accepted booking; callers
        // are not told about the shortfall.
        let booking = self.confirm_booking(passenger);
        info!(
            passenger,
            requested = group_size,
            filled = filled.len(),
            %booking,
            "group booking accepted"
        );
        Ok(booking)
    }

    fn book_seat(&mut self, passenger: &str, seat: u32) -> Result<Uuid, ReservationError> {
        self.seats.occupy(passenger, seat)?;
        let booking = self.confirm_booking(passenger);
        info!(passenger, seat, %booking, "seat booking accepted");
        Ok(booking)
    }

    fn cancel_seat(&mut self, seat: u32) -> Result<(), ReservationError> {
        // Clearing fails on an invalid or already-empty seat, in which
        // case nothing is pushed onto the history.
        self.seats.clear(seat)?;
        self.cancellations.push(seat);
        info!(seat, "booking cancelled");
        Ok(())
    }

    fn reassign_canceled_seats(&mut self) -> u32 {
        let mut count = 0;
        while let Ok(seat) = self.cancellations.pop() {
            self.seats.mark_reassigned(seat);
            count += 1;
        }
        debug!(count, "cancelled seats reassigned");
        count
    }

    fn seat_status(&self) -> Vec<SeatState> {
        self.seats.snapshot()
    }

    fn bookings(&self) -> Vec<String> {
        self.roster.snapshot()
    }
}

/// The reservation desk, processing commands sequentially
pub struct Desk(Mutex<DeskInner>);

impl Desk {
    /// Create a new [`Desk`] with the configured number of seats.
    pub fn new(config: &Config) -> Self {
        Self(Mutex::new(DeskInner::new(config)))
    }
}

impl CommandHandler for Desk {
    fn handle(&self, command: Command) -> Result<Reply, ReservationError> {
        let mut inner = self.0.lock();
        match command {
            Command::BookGroup {
                passenger,
                group_size,
            } => inner
                .book_group(&passenger, group_size)
                .map(|booking| Reply::Booked { booking }),
            Command::BookSeat { passenger, seat } => inner
                .book_seat(&passenger, seat)
                .map(|booking| Reply::Booked { booking }),
            Command::CancelSeat { seat } => {
                inner.cancel_seat(seat).map(|()| Reply::Canceled { seat })
            }
            Command::ReassignCanceledSeats => Ok(Reply::Reassigned {
                count: inner.reassign_canceled_seats(),
            }),
            Command::SeatStatus => Ok(Reply::SeatStatus(inner.seat_status())),
            Command::Bookings => Ok(Reply::Bookings(inner.bookings())),
        }
    }

    fn shutdown(self) {
        // nothing to do
    }
}
