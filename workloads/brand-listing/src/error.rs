//! Brand view errors.

use thiserror::Error;

/// Errors raised while mounting a brand view.
#[derive(Error, Debug)]
pub enum ViewError {
    /// No data service was provided.
    #[error("Brand view requires a products service")]
    MissingService,

    /// No SEO sink was provided.
    #[error("Brand view requires an SEO sink")]
    MissingSeoSink,

    /// Mounted outside a tokio runtime.
    #[error("Brand view must be mounted inside a tokio runtime")]
    NoRuntime,
}
