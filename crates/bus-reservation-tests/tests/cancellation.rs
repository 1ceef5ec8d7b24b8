use bus_reservation_core::{ReservationError, SeatState};
use bus_reservation_tests::TestCtxBuilder;
use eyre::Result;

mod util;

#[test]
#[ntest::timeout(10_000)]
fn test_cancel_empties_seat_but_keeps_booking() -> Result<()> {
    let ctx = TestCtxBuilder::new().with_seats(2).build();
    ctx.book_seat("Alice", 0)?;

    ctx.cancel_seat(0)?;

    assert_eq!(
        ctx.seat_status(),
        vec![SeatState::Empty, SeatState::Empty],
        "A cancelled seat must be empty again."
    );
    assert_eq!(
        ctx.bookings(),
        vec!["Alice".to_string()],
        "Cancelling a seat must not remove the passenger from the confirmed bookings."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(10_000)]
fn test_cancel_rejections() -> Result<()> {
    let ctx = TestCtxBuilder::new().with_seats(2).build();
    ctx.book_seat("Alice", 0)?;

    assert_eq!(
        ctx.cancel_seat(1),
        Err(ReservationError::SeatUnavailable { seat: 1 }),
        "Cancelling an empty seat must be rejected."
    );
    assert_eq!(
        ctx.cancel_seat(7),
        Err(ReservationError::SeatUnavailable { seat: 7 }),
        "Cancelling an out-of-range seat must be rejected."
    );
    assert_eq!(
        ctx.reassign(),
        0,
        "Rejected cancellations must not enter the cancellation history."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(10_000)]
fn test_reassign_drains_whole_history() -> Result<()> {
    let ctx = TestCtxBuilder::new().with_seats(4).build();
    ctx.book_group("Alice", 4)?;
    ctx.cancel_seat(0)?;
    ctx.cancel_seat(2)?;
    ctx.cancel_seat(3)?;

    assert_eq!(
        ctx.reassign(),
        3,
        "Reassignment must convert every cancelled seat."
    );
    assert_eq!(
        ctx.seat_status(),
        vec![
            SeatState::Reassigned,
            SeatState::Occupied("Alice".to_string()),
            SeatState::Reassigned,
            SeatState::Reassigned,
        ],
        "Every previously cancelled seat must show the reassignment marker."
    );

    // The history is empty now, so a second run is a no-op.
    assert_eq!(
        ctx.reassign(),
        0,
        "Reassigning with an empty history must do nothing."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(10_000)]
fn test_reassigned_seat_is_not_bookable_but_cancellable() -> Result<()> {
    let ctx = TestCtxBuilder::new().with_seats(2).build();
    ctx.book_seat("Alice", 0)?;
    ctx.cancel_seat(0)?;
    ctx.reassign();

    // A reassigned seat is not empty, so it cannot be booked again.
    assert_eq!(
        ctx.book_seat("Bob", 0),
        Err(ReservationError::SeatUnavailable { seat: 0 }),
        "A reassigned seat must not be bookable."
    );
    // A group booking skips it and lands on the remaining empty seat.
    ctx.book_group("Bob", 2)?;
    assert_eq!(
        ctx.seat_status(),
        vec![SeatState::Reassigned, SeatState::Occupied("Bob".to_string())],
        "A group booking must skip reassigned seats."
    );

    // The reassigned seat is occupied as far as cancellation is
    // concerned, so it can be cancelled back to empty and handed out.
    ctx.cancel_seat(0)?;
    assert_eq!(ctx.seat_status()[0], SeatState::Empty);
    ctx.book_seat("Carol", 0)?;
    assert_eq!(ctx.seat_status()[0], SeatState::Occupied("Carol".to_string()));

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(10_000)]
fn test_snapshots_are_idempotent() -> Result<()> {
    let ctx = TestCtxBuilder::new().with_seats(3).build();
    ctx.book_seat("Alice", 1)?;
    ctx.cancel_seat(1)?;

    let status = ctx.seat_status();
    let bookings = ctx.bookings();
    assert_eq!(
        ctx.seat_status(),
        status,
        "Repeated status queries must return identical results."
    );
    assert_eq!(
        ctx.bookings(),
        bookings,
        "Repeated bookings queries must return identical results."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(10_000)]
fn test_end_to_end_scenario() -> Result<()> {
    // The full walk: book, group-book, cancel, reassign, rebook.
    let ctx = TestCtxBuilder::new().with_seats(3).build();

    ctx.book_seat("Alice", 0)?;
    assert_eq!(ctx.bookings(), vec!["Alice".to_string()]);

    // Group of 2 lands on the two remaining seats.
    ctx.book_group("Bob", 2)?;
    assert_eq!(
        ctx.seat_status(),
        vec![
            SeatState::Occupied("Alice".to_string()),
            SeatState::Occupied("Bob".to_string()),
            SeatState::Occupied("Bob".to_string()),
        ],
    );
    assert_eq!(
        ctx.bookings(),
        vec!["Alice".to_string(), "Bob".to_string()],
        "The confirmed bookings must stay sorted."
    );

    ctx.cancel_seat(0)?;
    assert_eq!(ctx.seat_status()[0], SeatState::Empty);

    assert_eq!(ctx.reassign(), 1);
    assert_eq!(ctx.seat_status()[0], SeatState::Reassigned);

    assert_eq!(
        ctx.book_seat("Carl", 0),
        Err(ReservationError::SeatUnavailable { seat: 0 }),
        "Seat 0 is reassigned and must not be bookable."
    );

    ctx.finish();
    Ok(())
}
