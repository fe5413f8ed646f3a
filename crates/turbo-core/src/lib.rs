//! Routing context, view lifecycle and configuration for TurboCommerce views.
//!
//! This crate provides:
//! - `RouteParams` / `QueryParams` - Navigation parameters
//! - `RoutePattern` - `/brands/:brandSlug` style path matching
//! - `RouteStreams` / `Navigator` - Live parameter streams for a view
//! - `Subscriptions` - Disposer list released at view teardown
//! - `ViewId` / `ViewPhase` - Lifecycle tracking
//! - `StorefrontConfig` - TOML/JSON configuration

pub mod prelude;

mod config;
mod error;
mod lifecycle;
mod params;
mod route;
mod subscriptions;

pub use config::*;
pub use error::*;
pub use lifecycle::*;
pub use params::*;
pub use route::*;
pub use subscriptions::*;
