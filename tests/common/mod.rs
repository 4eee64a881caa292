#![allow(dead_code)]

use clap::error::ErrorKind;

use clue_options::error::OptionsError;
use clue_options::mode::Mode;
use clue_options::{ParsedOptions, register};

pub fn parse(mode: Mode, argv: &[&str]) -> (ParsedOptions, Vec<String>) {
    register(mode, argv.iter().copied())
        .unwrap_or_else(|e| panic!("{mode} {argv:?} should parse: {e}"))
}

pub fn usage_error_kind(mode: Mode, argv: &[&str]) -> ErrorKind {
    match register(mode, argv.iter().copied()) {
        Err(OptionsError::Usage(e)) => e.kind(),
        Err(other) => panic!("expected a usage error, got {other}"),
        Ok((options, _)) => panic!("{mode} {argv:?} unexpectedly parsed: {options:?}"),
    }
}

pub fn assert_flags(options: &ParsedOptions, expected: &[(&str, bool)]) {
    for (name, value) in expected {
        assert_eq!(
            options.flag(name),
            Some(*value),
            "flag '{name}' in {}",
            options.mode()
        );
    }
}

pub fn assert_all_off(options: &ParsedOptions) {
    for (name, value) in options.flags() {
        assert!(!value, "flag '{name}' should default to false");
    }
}
