//! Frameworks Layer: cborint
//!
//! Command-line front end over the integer codecs. `cborint encode <INTEGER>`
//! prints the encoded item as lowercase hex; `cborint decode <HEX>` prints the
//! decimal value together with the header fields.

pub mod args;

use std::fmt;

use entities_integer::{IntegerValue, ParseIntegerError};
use infrastructure_integer_encoding::{decode_slice, encode, DecodeError, EncodeError};
use log::{debug, LevelFilter};

pub use args::{CliArgs, Command};

/// Errors surfaced to the user
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    /// Argument is not a decimal integer
    InvalidInteger(ParseIntegerError),
    /// Argument is not valid hex
    InvalidHex(hex::FromHexError),
    /// Encoding failed
    Encode(EncodeError),
    /// Decoding failed
    Decode(DecodeError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInteger(err) => write!(f, "{}", err),
            CliError::InvalidHex(err) => write!(f, "invalid hex input: {}", err),
            CliError::Encode(err) => write!(f, "{}", err),
            CliError::Decode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseIntegerError> for CliError {
    fn from(err: ParseIntegerError) -> Self {
        CliError::InvalidInteger(err)
    }
}

impl From<hex::FromHexError> for CliError {
    fn from(err: hex::FromHexError) -> Self {
        CliError::InvalidHex(err)
    }
}

impl From<EncodeError> for CliError {
    fn from(err: EncodeError) -> Self {
        CliError::Encode(err)
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        CliError::Decode(err)
    }
}

/// Run one command, returning the text to print
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Encode { value, .. } => {
            let value: IntegerValue = value.trim().parse()?;
            let item = encode(&value, &command.encode_options())?;
            debug!(
                "{} -> major type {}, additional information {}",
                value,
                item.major_type().bits(),
                item.additional_information()
            );
            Ok(hex::encode(item.to_bytes()))
        }
        Command::Decode { hex: text, .. } => {
            let bytes = hex::decode(text.trim())?;
            let item = decode_slice(&bytes, &command.decode_options())?;
            Ok(format!(
                "{} (major type {}, additional information {})",
                item.to_decimal_string(),
                item.major_type().bits(),
                item.additional_information()
            ))
        }
    }
}

/// Log level for the `--verbose` flag, `None` to defer to `RUST_LOG`
pub fn log_level(verbose: bool) -> Option<LevelFilter> {
    verbose.then_some(LevelFilter::Debug)
}

/// Install the process logger
///
/// Filters come from `RUST_LOG`; `--verbose` raises everything to debug.
/// Later calls keep the logger installed by the first one.
pub fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if let Some(level) = log_level(verbose) {
        builder.filter_level(level);
    }
    if let Err(err) = builder.try_init() {
        debug!("keeping the installed logger: {}", err);
    }
}
