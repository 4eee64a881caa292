pub mod args;
pub mod known;

use std::ffi::OsString;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::OptionsError;
use crate::mode::{DATATYPE, Mode, SELECT_ALL};
use args::{ClusterArgs, Datatype, LayerArgs, ModeArgs, RespResArgs};
use known::split_known_args;

/// A single entry of the flattened option map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Choice(String),
}

/// Final option set for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    mode: Mode,
    datatype: Datatype,
    flags: IndexMap<&'static str, bool>,
}

impl ParsedOptions {
    fn from_mode_args<T: ModeArgs>(parsed: &T) -> Self {
        let mut options = Self {
            mode: T::MODE,
            datatype: parsed.datatype(),
            flags: parsed.flag_values().into_iter().collect(),
        };
        if options.select_all_requested() {
            options.apply_select_all();
        }
        options
    }

    fn apply_select_all(&mut self) {
        for name in self.mode.select_all_targets() {
            if let Some(value) = self.flags.get_mut(name) {
                *value = true;
            }
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    /// `None` when the mode does not declare `name`.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flag(name).unwrap_or(false)
    }

    pub fn select_all_requested(&self) -> bool {
        self.mode.supports_select_all() && self.is_set(SELECT_ALL)
    }

    pub fn flags(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.flags.iter().map(|(name, value)| (*name, *value))
    }

    pub fn enabled_flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags()
            .filter(|(name, value)| *value && *name != SELECT_ALL)
            .map(|(name, _)| name)
    }

    /// Flags followed by `datatype`, the shape downstream consumers read.
    pub fn to_value_map(&self) -> IndexMap<String, OptionValue> {
        let mut map: IndexMap<String, OptionValue> = self
            .flags()
            .map(|(name, value)| (name.to_string(), OptionValue::Flag(value)))
            .collect();
        map.insert(
            DATATYPE.to_string(),
            OptionValue::Choice(self.datatype.as_str().to_string()),
        );
        map
    }
}

/// Declares the options of `mode` and parses `argv` against them.
///
/// `argv` excludes the program name. Tokens the mode does not declare are returned
/// untouched in the second element instead of failing the parse. Long options may be
/// abbreviated to any unambiguous prefix.
pub fn add_args<I, S>(mode: &str, argv: I) -> Result<(ParsedOptions, Vec<String>), OptionsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mode: Mode = mode.parse()?;
    register(mode, argv)
}

/// Typed variant of [`add_args`].
pub fn register<I, S>(mode: Mode, argv: I) -> Result<(ParsedOptions, Vec<String>), OptionsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match mode {
        Mode::RespRes => parse_mode::<RespResArgs, _, _>(argv),
        Mode::Clusters => parse_mode::<ClusterArgs, _, _>(argv),
        Mode::Layers => parse_mode::<LayerArgs, _, _>(argv),
    }
}

fn parse_mode<T, I, S>(argv: I) -> Result<(ParsedOptions, Vec<String>), OptionsError>
where
    T: ModeArgs,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (known, leftovers) = split_known_args(&T::command(), argv)?;
    let program = OsString::from(T::MODE.name());
    let parsed =
        T::try_parse_from(std::iter::once(program).chain(known.into_iter().map(OsString::from)))?;
    Ok((ParsedOptions::from_mode_args(&parsed), leftovers))
}
