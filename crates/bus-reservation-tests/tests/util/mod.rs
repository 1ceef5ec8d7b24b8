use bus_reservation_core::SeatState;
use bus_reservation_tests::TestCtx;

/// Assert that the confirmed bookings are in ascending lexicographic order.
#[allow(unused)]
pub fn assert_bookings_sorted(ctx: &TestCtx) {
    let names = ctx.bookings();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(
        names, sorted,
        "The confirmed bookings must be sorted lexicographically after every booking."
    );
}

/// Count the currently empty seats in a snapshot.
#[allow(unused)]
pub fn count_empty(seats: &[SeatState]) -> usize {
    seats
        .iter()
        .filter(|seat| **seat == SeatState::Empty)
        .count()
}
