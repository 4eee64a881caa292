use std::fmt;

use clap::{Args, Parser, ValueEnum};
use serde::Serialize;

use crate::mode::{Mode, SELECT_ALL};

/// Which sample the analysis runs on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Datatype {
    #[value(name = "data")]
    Data,
    #[value(name = "sim_proton")]
    SimProton,
    #[value(name = "sim_noproton")]
    SimNoproton,
}

impl Datatype {
    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::Data => "data",
            Datatype::SimProton => "sim_proton",
            Datatype::SimNoproton => "sim_noproton",
        }
    }

    pub fn is_simulation(self) -> bool {
        !matches!(self, Datatype::Data)
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Args, Debug, Clone)]
pub struct DatatypeArgs {
    #[arg(
        long,
        value_enum,
        help_heading = "Required named arguments",
        help = "Choose the datatype to run the analysis on: \"data\" OR \"sim_proton\" OR \"sim_noproton\""
    )]
    pub datatype: Datatype,
}

/// Implemented by the per-mode parser structs so the registrar can treat them uniformly.
pub trait ModeArgs: Parser {
    const MODE: Mode;

    fn datatype(&self) -> Datatype;

    /// Every declared boolean, `all` included, in declaration order.
    fn flag_values(&self) -> Vec<(&'static str, bool)>;
}

#[derive(Parser, Debug, Clone)]
#[command(name = "resp_res", about = "Response and resolution analysis", args_override_self = true)]
pub struct RespResArgs {
    #[arg(long, help = "Analyze the data")]
    pub analyze: bool,

    #[arg(long, help = "Plot the data")]
    pub plot: bool,

    #[command(flatten)]
    pub required: DatatypeArgs,
}

impl ModeArgs for RespResArgs {
    const MODE: Mode = Mode::RespRes;

    fn datatype(&self) -> Datatype {
        self.required.datatype
    }

    fn flag_values(&self) -> Vec<(&'static str, bool)> {
        vec![("analyze", self.analyze), ("plot", self.plot)]
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "clusters", about = "Cluster analysis", args_override_self = true)]
pub struct ClusterArgs {
    #[arg(long, help = "Run the cluster analysis on the number of hits per cluster")]
    pub hits: bool,

    #[arg(long, help = "Run the cluster analysis on the energy per cluster")]
    pub energies: bool,

    #[arg(long, help = "Run the cluster analysis on the number of clusters")]
    pub numbers: bool,

    #[arg(long, help = "Run the cluster analysis on the X position of clusters")]
    pub posx: bool,

    #[arg(long, help = "Run the cluster analysis on the Y position of clusters")]
    pub posy: bool,

    #[arg(
        long = "posx_posy",
        help = "Run the cluster analysis on the X and Y positions of clusters"
    )]
    pub posx_posy: bool,

    #[arg(long, help = "Run the full cluster analysis")]
    pub all: bool,

    #[command(flatten)]
    pub required: DatatypeArgs,
}

impl ModeArgs for ClusterArgs {
    const MODE: Mode = Mode::Clusters;

    fn datatype(&self) -> Datatype {
        self.required.datatype
    }

    fn flag_values(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("hits", self.hits),
            ("energies", self.energies),
            ("numbers", self.numbers),
            ("posx", self.posx),
            ("posy", self.posy),
            ("posx_posy", self.posx_posy),
            (SELECT_ALL, self.all),
        ]
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "layers", about = "Layer analysis", args_override_self = true)]
pub struct LayerArgs {
    #[arg(long, help = "Run the layer analysis on the CLUE densities")]
    pub densities: bool,

    #[arg(long, help = "Run the layer analysis on the CLUE distances")]
    pub distances: bool,

    #[arg(
        long = "densities_distances",
        help = "Run the layer analysis on the CLUE densities and distances together in the same plot"
    )]
    pub densities_distances: bool,

    #[arg(
        long = "densities_2D",
        help = "Run the layer analysis on the CLUE densities, having all the layer information on the same plot"
    )]
    pub densities_2d: bool,

    #[arg(
        long = "distances_2D",
        help = "Run the layer analysis on the CLUE distances, having all the layer information on the same plot"
    )]
    pub distances_2d: bool,

    #[arg(
        long = "hits_fraction",
        help = "Run the layer analysis on the fraction of clusterized hits"
    )]
    pub hits_fraction: bool,

    #[arg(
        long = "energy_fraction",
        help = "Run the layer analysis on the fraction of clusterized energy"
    )]
    pub energy_fraction: bool,

    #[arg(
        long = "posx_posy",
        help = "Run the layer analysis on the hits' X and Y positions in the same plot"
    )]
    pub posx_posy: bool,

    #[arg(long, help = "Run the full layer analysis")]
    pub all: bool,

    #[command(flatten)]
    pub required: DatatypeArgs,
}

impl ModeArgs for LayerArgs {
    const MODE: Mode = Mode::Layers;

    fn datatype(&self) -> Datatype {
        self.required.datatype
    }

    fn flag_values(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("densities", self.densities),
            ("distances", self.distances),
            ("densities_distances", self.densities_distances),
            ("densities_2D", self.densities_2d),
            ("distances_2D", self.distances_2d),
            ("hits_fraction", self.hits_fraction),
            ("energy_fraction", self.energy_fraction),
            ("posx_posy", self.posx_posy),
            (SELECT_ALL, self.all),
        ]
    }
}
