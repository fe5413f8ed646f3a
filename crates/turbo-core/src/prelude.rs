//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use turbo_core::prelude::*;
//! ```

pub use crate::{
    parse_query, CoreError, Navigator, QueryParams, RouteParams, RoutePattern, RouteStreams,
    StorefrontConfig, Subscriptions, ViewId, ViewPhase,
};
