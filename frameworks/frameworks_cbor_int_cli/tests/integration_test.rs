//! Integration tests for frameworks_cbor_int_cli
//!
//! Drives parsed command lines through `run` and checks the printed text.

use clap::Parser;
use frameworks_cbor_int_cli::{init_logging, run, CliArgs, CliError};
use infrastructure_integer_encoding::{DecodeError, EncodeError};

fn run_line(line: &[&str]) -> Result<String, CliError> {
    let args = CliArgs::try_parse_from(line.iter().copied()).unwrap();
    run(&args.command)
}

#[test]
fn test_encode_prints_hex() {
    assert_eq!(run_line(&["cborint", "encode", "0"]).unwrap(), "00");
    assert_eq!(run_line(&["cborint", "encode", "24"]).unwrap(), "1818");
    assert_eq!(run_line(&["cborint", "encode", "-100"]).unwrap(), "3863");
    assert_eq!(run_line(&["cborint", "encode", "-1000"]).unwrap(), "3903e7");
}

#[test]
fn test_encode_range_error_and_opt_in() {
    let err = run_line(&["cborint", "encode", "4294967296"]).unwrap_err();
    assert!(matches!(err, CliError::Encode(EncodeError::Range(_))));

    assert_eq!(
        run_line(&["cborint", "encode", "-18446744073709551616", "--allow-eight-byte"]).unwrap(),
        "3bffffffffffffffff"
    );
}

#[test]
fn test_encode_rejects_bad_integer() {
    let err = run_line(&["cborint", "encode", "12x"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidInteger(_)));
}

#[test]
fn test_decode_prints_value_and_header() {
    assert_eq!(
        run_line(&["cborint", "decode", "3bffffffffffffffff"]).unwrap(),
        "-18446744073709551616 (major type 1, additional information 27)"
    );
    assert_eq!(
        run_line(&["cborint", "decode", "190100"]).unwrap(),
        "256 (major type 0, additional information 25)"
    );
}

#[test]
fn test_decode_strict_flag() {
    assert_eq!(
        run_line(&["cborint", "decode", "1805"]).unwrap(),
        "5 (major type 0, additional information 24)"
    );
    let err = run_line(&["cborint", "decode", "1805", "--strict"]).unwrap_err();
    assert!(matches!(
        err,
        CliError::Decode(DecodeError::NonCanonical { .. })
    ));
}

#[test]
fn test_decode_rejects_bad_hex() {
    let err = run_line(&["cborint", "decode", "zz"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidHex(_)));
    assert!(err.to_string().starts_with("invalid hex input"));
}

#[test]
fn test_init_logging_is_idempotent() {
    init_logging(true);
    init_logging(false);
}
