pub mod errors;

use std::fmt;
use std::str::FromStr;

use errors::ModeError;
use serde::Serialize;

pub const DATATYPE: &str = "datatype";
pub const SELECT_ALL: &str = "all";

const RESP_RES_FLAGS: &[&str] = &["analyze", "plot"];

const CLUSTER_FLAGS: &[&str] = &["hits", "energies", "numbers", "posx", "posy", "posx_posy"];

const LAYER_FLAGS: &[&str] = &[
    "densities",
    "distances",
    "densities_distances",
    "densities_2D",
    "distances_2D",
    "hits_fraction",
    "energy_fraction",
    "posx_posy",
];

const CLUSTER_EXCLUSIONS: &[&str] = &[DATATYPE];

// Combined-view flags stay opt-in.
const LAYER_EXCLUSIONS: &[&str] = &[DATATYPE, "distances_2D", "densities_2D", "posx_posy"];

/// Which analysis flag set gets declared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    RespRes,
    Clusters,
    Layers,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::RespRes, Mode::Clusters, Mode::Layers];

    pub fn name(self) -> &'static str {
        match self {
            Mode::RespRes => "resp_res",
            Mode::Clusters => "clusters",
            Mode::Layers => "layers",
        }
    }

    /// Boolean flags declared for this mode, in declaration order. Does not
    /// include `all`.
    pub fn flag_names(self) -> &'static [&'static str] {
        match self {
            Mode::RespRes => RESP_RES_FLAGS,
            Mode::Clusters => CLUSTER_FLAGS,
            Mode::Layers => LAYER_FLAGS,
        }
    }

    pub fn supports_select_all(self) -> bool {
        !matches!(self, Mode::RespRes)
    }

    /// Names `--all` must leave untouched. Empty when the mode has no `--all`.
    pub fn select_all_exclusions(self) -> &'static [&'static str] {
        match self {
            Mode::RespRes => &[],
            Mode::Clusters => CLUSTER_EXCLUSIONS,
            Mode::Layers => LAYER_EXCLUSIONS,
        }
    }

    /// Flags switched on by `--all`, in declaration order.
    pub fn select_all_targets(self) -> Vec<&'static str> {
        if !self.supports_select_all() {
            return Vec::new();
        }
        let exclusions = self.select_all_exclusions();
        self.flag_names()
            .iter()
            .copied()
            .filter(|name| !exclusions.contains(name))
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ModeError::Unsupported(s.to_string()))
    }
}
