pub mod args;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::OptionsError;
use crate::mode::Mode;
use crate::options::{OptionValue, ParsedOptions};

/// Serializable view of one registrar run.
#[derive(Debug, Serialize)]
pub struct OptionsReport<'a> {
    pub mode: Mode,
    pub options: IndexMap<String, OptionValue>,
    pub leftovers: &'a [String],
}

impl<'a> OptionsReport<'a> {
    pub fn new(options: &ParsedOptions, leftovers: &'a [String]) -> Self {
        Self {
            mode: options.mode(),
            options: options.to_value_map(),
            leftovers,
        }
    }
}

pub fn to_json(options: &ParsedOptions, leftovers: &[String]) -> Result<String, OptionsError> {
    let report = OptionsReport::new(options, leftovers);
    serde_json::to_string_pretty(&report)
        .map_err(|e| OptionsError::Report(format!("failed to serialize options: {}", e)))
}
