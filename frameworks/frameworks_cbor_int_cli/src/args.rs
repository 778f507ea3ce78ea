//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::{Parser, Subcommand};
use infrastructure_integer_encoding::{DecodeOptions, EncodeOptions};

/// cborint command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cborint")]
#[command(about = "Encode and decode CBOR integer items")]
pub struct CliArgs {
    /// Log at debug level (RUST_LOG is honoured otherwise)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode a decimal integer and print the item as hex
    Encode {
        /// Decimal integer; negative values and values past 64 bits are accepted
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Allow the 8-byte direct form instead of failing above 0xFFFFFFFF
        #[arg(long)]
        allow_eight_byte: bool,
    },
    /// Decode a hex-encoded integer item and print its value
    Decode {
        /// Hex text of exactly one item, e.g. 3863
        hex: String,

        /// Reject items that are not in their shortest form
        #[arg(long)]
        strict: bool,
    },
}

impl Command {
    /// Encoder options selected by the flags
    pub fn encode_options(&self) -> EncodeOptions {
        match self {
            Command::Encode {
                allow_eight_byte: true,
                ..
            } => EncodeOptions::with_eight_byte_form(),
            _ => EncodeOptions::default(),
        }
    }

    /// Decoder options selected by the flags
    pub fn decode_options(&self) -> DecodeOptions {
        match self {
            Command::Decode { strict: true, .. } => DecodeOptions::strict(),
            _ => DecodeOptions::default(),
        }
    }
}
