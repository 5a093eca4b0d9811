use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected a non-empty camera name")]
    EmptyName,
    #[error("expected a finite resolution greater than zero but got: {resolution}")]
    NonPositiveResolution { resolution: f64 },
    #[error("expected at least one camera but got an empty collection")]
    NoCameras,
}
