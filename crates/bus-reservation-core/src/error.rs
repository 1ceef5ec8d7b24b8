use thiserror::Error;

/// Errors reported by the reservation desk and its containers
///
/// None of these are fatal: a failed operation leaves the system
/// unchanged and the desk keeps accepting commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ReservationError {
    /// A group booking found no empty seat at all
    #[error("not enough available seats for the group booking")]
    InsufficientSeats,

    /// A booking or cancellation targeted a seat that is out of range or
    /// in the wrong state
    #[error("seat {seat} is not available or invalid")]
    SeatUnavailable {
        /// The offending 0-based seat index
        seat: u32,
    },

    /// Removal from an empty container
    ///
    /// Not reachable through desk commands; only direct container use
    /// can trigger it.
    #[error("the {container} is empty")]
    EmptyContainerAccess {
        /// Name of the container that was accessed
        container: &'static str,
    },
}
