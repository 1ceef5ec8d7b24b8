//! Console menu implementation
//!
//! Parses menu input into [`Command`]s and renders the replies. No
//! booking logic lives here; every decision is made by the handler.

use std::io::{BufRead, Write};

use bus_reservation_core::{Command, CommandHandler, Reply, SeatState};

const MENU: &str = "\nMenu:
1. Book group
2. Book specific seat
3. Cancel seat
4. Reassign canceled seats
5. Display seat status
6. Display bookings
7. Exit";

/// One step of the menu loop
enum Step {
    /// Dispatch the parsed command
    Dispatch(Command),
    /// Show the menu again
    Retry,
    /// Leave the menu loop
    Exit,
}

/// Run the interactive menu until the user exits.
pub fn run<H: CommandHandler>(handler: &H, input: &mut impl BufRead) {
    loop {
        println!("{MENU}");
        match read_step(input) {
            Step::Dispatch(command) => match handler.handle(command) {
                Ok(reply) => print_reply(&reply),
                Err(e) => println!("{e}"),
            },
            Step::Retry => {}
            Step::Exit => break,
        }
    }

    println!("Exiting... Goodbye!");
}

/// Ask for the seat count until a number is entered.
pub fn ask_seats(input: &mut impl BufRead) -> u32 {
    loop {
        let Some(line) = prompt_line(input, "Enter the total number of seats: ") else {
            // Nothing more to read, nothing to serve.
            std::process::exit(0);
        };
        match line.trim().parse() {
            Ok(seats) => return seats,
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Read the next menu choice and its arguments.
fn read_step(input: &mut impl BufRead) -> Step {
    let Some(choice) = prompt_line(input, "Enter your choice: ") else {
        // End of input counts as an exit request.
        return Step::Exit;
    };

    match choice.trim() {
        "1" => {
            let Some(passenger) = prompt_line(input, "Enter passenger name: ") else {
                return Step::Exit;
            };
            let Some(group_size) = prompt_u32(input, "Enter group size: ") else {
                return Step::Retry;
            };
            Step::Dispatch(Command::BookGroup {
                passenger,
                group_size,
            })
        }
        "2" => {
            let Some(passenger) = prompt_line(input, "Enter passenger name: ") else {
                return Step::Exit;
            };
            let Some(seat) = prompt_u32(input, "Enter seat number (0-based index): ") else {
                return Step::Retry;
            };
            Step::Dispatch(Command::BookSeat { passenger, seat })
        }
        "3" => {
            let Some(seat) = prompt_u32(input, "Enter seat number to cancel (0-based index): ")
            else {
                return Step::Retry;
            };
            Step::Dispatch(Command::CancelSeat { seat })
        }
        "4" => Step::Dispatch(Command::ReassignCanceledSeats),
        "5" => Step::Dispatch(Command::SeatStatus),
        "6" => Step::Dispatch(Command::Bookings),
        "7" => Step::Exit,
        _ => {
            println!("Invalid choice. Please try again.");
            Step::Retry
        }
    }
}

/// Print `prompt` and read one line.
///
/// Returns [`None`] at end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    std::io::stdout().flush().expect("stdout flush failed");

    let mut line = String::new();
    let read = input.read_line(&mut line).expect("stdin read failed");
    if read == 0 {
        return None;
    }
    Some(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print `prompt` and read one number.
///
/// Reports unparsable input and returns [`None`], which also covers end
/// of input.
fn prompt_u32(input: &mut impl BufRead, prompt: &str) -> Option<u32> {
    let line = prompt_line(input, prompt)?;
    match line.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("Please enter a number.");
            None
        }
    }
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Booked { booking } => println!("Booking confirmed: {booking}"),
        Reply::Canceled { seat } => println!("Seat {seat} cancelled."),
        Reply::Reassigned { count } => println!("Reassigned {count} canceled seat(s)."),
        Reply::SeatStatus(seats) => println!("Seat status: {}", render_seats(seats)),
        Reply::Bookings(names) => println!("Confirmed bookings: [{}]", names.join(", ")),
    }
}

fn render_seats(seats: &[SeatState]) -> String {
    let rendered: Vec<String> = seats.iter().map(|seat| seat.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
