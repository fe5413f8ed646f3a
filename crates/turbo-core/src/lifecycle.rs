//! View lifecycle tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier of a mounted view, used to correlate its logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(pub String);

impl ViewId {
    /// Generate a new view ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:04x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle phases of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    /// Page metadata set, subscriptions established.
    Init,
    /// A product listing arrived for the current route.
    ProductsLoaded { brand_slug: String, count: usize },
    /// The filtered list was recomputed from a query change.
    Filtered { count: usize },
    /// Subscriptions released.
    Teardown,
    /// A collaborator reported an error.
    Error(String),
}

impl ViewPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ProductsLoaded { .. } => "products_loaded",
            Self::Filtered { .. } => "filtered",
            Self::Teardown => "teardown",
            Self::Error(_) => "error",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
