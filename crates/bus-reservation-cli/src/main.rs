//! Console frontend for the bus seat reservation system

#![warn(missing_docs)]

mod console;
mod settings;

use std::io;

use bus_reservation_core::{CommandHandler, Config};

use crate::settings::Settings;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Number of seats, when given on the command line
    seats: Option<u32>,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts { seats: None };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-seats" => opts.seats = Some(arg.parse().expect("-seats takes a decimal u32")),
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }

        opts
    }
}

fn main() {
    // Menu output owns stdout, so logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Opts::from_args();
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Error: could not read settings: {e}");
        std::process::exit(1);
    });

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to the bus seat reservation system");

    // Seat count precedence: command line, settings file, then prompt.
    let seats = match opts.seats.or(settings.seats) {
        Some(seats) => seats,
        None => console::ask_seats(&mut input),
    };

    let desk = bus_reservation_desk::launch(&Config { seats });
    console::run(&desk, &mut input);
    desk.shutdown();
}
