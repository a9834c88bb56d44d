use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use thiserror::Error;

/// Duration and terminal volume of one crossfade.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FadeSpec {
    pub duration: f64,
    pub volume: f32,
}

/// The fade table: how the soundscape opens and how each narrative
/// transition sounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub start: FadeSpec,
    pub docks: FadeSpec,
    pub sea: FadeSpec,
    pub palace_return: FadeSpec,
}

#[derive(Error, Debug)]
pub struct ParseError {
    pub filename: String,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {}: {}", self.filename, self.message)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ParseError(ParseError),

    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    IOError(#[from] io::Error),

    #[error(transparent)]
    AtomicIOError(#[from] atomicwrites::Error<io::Error>),
}

/// Conventional fade-table filename, used by [`Config::load_default`].
pub static FILENAME: &str = "scroll_ambience.toml";

impl Config {
    pub fn new() -> Config {
        Config {
            start: FadeSpec {
                duration: 2.0,
                volume: 0.6,
            },
            docks: FadeSpec {
                duration: 3.0,
                volume: 0.6,
            },
            sea: FadeSpec {
                duration: 5.0,
                volume: 0.6,
            },
            // the return to the palace is deliberately quieter
            palace_return: FadeSpec {
                duration: 5.0,
                volume: 0.3,
            },
        }
    }

    // If no file is found, returns the default fade table instead of an error
    pub fn load(filename: &str) -> Result<Config, Error> {
        let contents = match fs::read_to_string(filename) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Config::new()),
            Err(error) => return Err(Error::IOError(error)),
        };
        let config = match toml::from_str(&contents) {
            Ok(contents) => contents,
            Err(error) if error.line_col().is_some() => {
                return Err(Error::ParseError(ParseError {
                    filename: String::from(filename),
                    message: format!("{}", error),
                }));
            }
            Err(error) => return Err(Error::TomlDeError(error)),
        };
        log::info!("Loaded fade table from {}", filename);
        Ok(config)
    }

    /// Load the fade table from [`FILENAME`] in the working directory.
    pub fn load_default() -> Result<Config, Error> {
        Config::load(FILENAME)
    }

    pub fn save(self, filename: &str) -> Result<(), Error> {
        let contents = toml::to_string(&self)?;
        let writer = atomicwrites::AtomicFile::new(filename, atomicwrites::AllowOverwrite);
        writer.write(|f| f.write_all(contents.as_bytes()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
