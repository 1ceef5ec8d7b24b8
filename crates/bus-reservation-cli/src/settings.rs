//! Optional settings file for the console frontend

use std::io::ErrorKind;

use serde::Deserialize;

/// Settings loaded from a `reservation.toml` file
///
/// The file is searched for in the current directory and all of its
/// parents; the first hit wins. Every field is optional and a missing
/// file yields the defaults.
#[derive(Clone, Copy, Default, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Default number of seats when `-seats` is not given
    #[serde(default)]
    pub seats: Option<u32>,
}

impl Settings {
    /// Load the settings, falling back to defaults when no file exists.
    pub fn load() -> std::io::Result<Self> {
        let mut path = std::env::current_dir()?;
        let contents = loop {
            path.push("reservation.toml");

            match std::fs::read_to_string(&path) {
                Ok(s) => break s,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }

            path.pop();
            if !path.pop() {
                return Ok(Self::default());
            }
        };

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                eprintln!("Error: ignoring malformed {}: {e}", path.display());
                Ok(Self::default())
            }
        }
    }
}
