//! Live route context delivered to a view.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::stream::{BoxStream, Stream, StreamExt};

use crate::error::CoreError;
use crate::params::{split_url, QueryParams, RouteParams, RoutePattern};

/// The two navigation streams a view subscribes to.
pub struct RouteStreams {
    /// Path parameter changes (e.g. `{ brandSlug }`).
    pub params: BoxStream<'static, RouteParams>,
    /// Query parameter changes.
    pub query: BoxStream<'static, QueryParams>,
}

impl RouteStreams {
    /// Wrap arbitrary streams.
    pub fn new<P, Q>(params: P, query: Q) -> Self
    where
        P: Stream<Item = RouteParams> + Send + 'static,
        Q: Stream<Item = QueryParams> + Send + 'static,
    {
        Self {
            params: params.boxed(),
            query: query.boxed(),
        }
    }

    /// Streams fed by a `Navigator`.
    pub fn channel() -> (Navigator, RouteStreams) {
        let (params_tx, params_rx) = mpsc::unbounded();
        let (query_tx, query_rx) = mpsc::unbounded();
        let navigator = Navigator {
            params_tx,
            query_tx,
            pattern: None,
            last_params: None,
            last_query: None,
        };
        (navigator, RouteStreams::new(params_rx, query_rx))
    }
}

impl std::fmt::Debug for RouteStreams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteStreams").finish_non_exhaustive()
    }
}

/// Producer side of `RouteStreams`.
///
/// Emits path and query parameters only when they differ from the last
/// emitted value, so repeated navigation to the same URL is quiet.
#[derive(Debug)]
pub struct Navigator {
    params_tx: UnboundedSender<RouteParams>,
    query_tx: UnboundedSender<QueryParams>,
    pattern: Option<RoutePattern>,
    last_params: Option<RouteParams>,
    last_query: Option<QueryParams>,
}

impl Navigator {
    /// Set the pattern used by `navigate`.
    pub fn with_pattern(mut self, pattern: RoutePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Emit new path parameters. Returns whether anything was delivered.
    pub fn set_params(&mut self, params: RouteParams) -> bool {
        if self.last_params.as_ref() == Some(&params) {
            return false;
        }
        self.last_params = Some(params.clone());
        self.params_tx.unbounded_send(params).is_ok()
    }

    /// Emit new query parameters. Returns whether anything was delivered.
    pub fn set_query(&mut self, query: QueryParams) -> bool {
        if self.last_query.as_ref() == Some(&query) {
            return false;
        }
        self.last_query = Some(query.clone());
        self.query_tx.unbounded_send(query).is_ok()
    }

    /// Navigate to a URL, emitting whatever changed.
    pub fn navigate(&mut self, url: &str) -> Result<(), CoreError> {
        let pattern = self.pattern.as_ref().ok_or(CoreError::NoPattern)?;
        let (path, query) = split_url(url);
        let params = pattern.extract(path)?;

        self.set_params(params);
        self.set_query(query);
        Ok(())
    }

    /// Whether the receiving side is still subscribed.
    pub fn is_connected(&self) -> bool {
        !self.params_tx.is_closed() || !self.query_tx.is_closed()
    }
}
