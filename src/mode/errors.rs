use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModeError {
    #[error("The mode provided is not supported: '{0}'. Expected one of: resp_res, clusters, layers.")]
    Unsupported(String),
}
