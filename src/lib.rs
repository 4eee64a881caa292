pub mod args;
pub mod error;
pub mod mode;
pub mod options;
pub mod output;
pub mod visuals;

pub use error::OptionsError;
pub use mode::Mode;
pub use options::args::Datatype;
pub use options::{ParsedOptions, add_args, register};
