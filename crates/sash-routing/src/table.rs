//! Per-scope route registry and dispatch pipeline.
//!
//! Registration is a configuration-phase activity: tables are mutated
//! before the first dispatch and treated as read-only afterwards. The
//! `&mut self` registration methods make concurrent registration and
//! dispatch unrepresentable within a single owner; embedders that share a
//! table across tasks must provide their own synchronization.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

use sash_common::{RoutingError, SashError};

use crate::pattern::RoutePattern;
use crate::query::{parse_query, split_query};
use crate::request::{Method, Request};

/// Terminal route callable. Receives the request by value; may suspend.
pub type Handler =
    Arc<dyn Fn(Request) -> BoxFuture<'static, Result<Value, SashError>> + Send + Sync>;

/// One step of the middleware chain. Receives its own copy of the request;
/// the request is immutable through the chain.
pub type Middleware =
    Arc<dyn Fn(Request) -> BoxFuture<'static, Result<Flow, SashError>> + Send + Sync>;

/// Wrap a plain async closure into a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, SashError>> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// Wrap a plain async closure into a [`Middleware`].
pub fn middleware<F, Fut>(f: F) -> Middleware
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Flow, SashError>> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// What a middleware step decides: pass control onward, or answer the
/// dispatch itself. `Respond` short-circuits: no later middleware and not
/// the handler runs, and the value becomes the dispatch result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    Respond(Value),
}

/// Dispatch result. A handler or middleware error is converted to `Fault`
/// at the pipeline boundary and never propagates further, so one failing
/// route cannot destabilize the engine or any other in-flight dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done(Value),
    Fault { message: String },
}

struct Route {
    pattern: RoutePattern,
    handler: Handler,
}

/// A resolved `(path, method)` lookup: the matched handler plus the
/// parameters extracted on the way.
pub struct MatchedRoute<'a> {
    pub handler: &'a Handler,
    pub pattern: &'a str,
    pub path: String,
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

/// Registry of GET/POST routes and ordered middleware for one scope.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<Method, Vec<Route>>,
    middleware: Vec<Middleware>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a middleware to the chain. Order of registration is order of
    /// execution.
    pub fn register_middleware(&mut self, mw: Middleware) {
        self.middleware.push(mw);
    }

    /// Register a route. Fails with `DuplicateRoute` when the new
    /// pattern's literal rendering would match an existing pattern of the
    /// same method, catching exact re-registration and literal paths
    /// colliding with an earlier wildcard. The check is one-directional:
    /// two parameterized patterns that could both match some path are not
    /// detected. O(routes-for-method), paid once at startup.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: Handler,
    ) -> Result<(), RoutingError> {
        let compiled = RoutePattern::compile(pattern)?;

        if let Some(existing) = self.routes.get(&method) {
            let conflict = existing
                .iter()
                .any(|route| route.pattern.capture(compiled.raw()).is_some());
            if conflict {
                return Err(RoutingError::DuplicateRoute {
                    method: method.to_string(),
                    pattern: pattern.to_string(),
                });
            }
        }

        self.routes.entry(method).or_default().push(Route {
            pattern: compiled,
            handler,
        });
        Ok(())
    }

    /// Register a GET route.
    pub fn get(&mut self, pattern: &str, handler: Handler) -> Result<(), RoutingError> {
        self.register(Method::Get, pattern, handler)
    }

    /// Register a POST route.
    pub fn post(&mut self, pattern: &str, handler: Handler) -> Result<(), RoutingError> {
        self.register(Method::Post, pattern, handler)
    }

    pub fn route_count(&self, method: Method) -> usize {
        self.routes.get(&method).map_or(0, Vec::len)
    }

    /// Resolve a `(path, method)` pair to the first matching route in
    /// registration order. `None` is the normal not-found case.
    pub fn resolve(&self, raw_path: &str, method: Method) -> Option<MatchedRoute<'_>> {
        let (path, query) = split_query(raw_path);
        let routes = self.routes.get(&method)?;

        routes.iter().find_map(|route| {
            route.pattern.capture(path).map(|params| MatchedRoute {
                handler: &route.handler,
                pattern: route.pattern.raw(),
                path: path.to_string(),
                params,
                query: parse_query(query),
            })
        })
    }

    /// Resolve and run the full pipeline for one request.
    ///
    /// Middleware run strictly sequentially in registration order, each
    /// step awaited before the next, with the matched handler as the
    /// terminal element of the chain. The body is attached for POST only.
    pub async fn dispatch(
        &self,
        raw_path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Option<Outcome> {
        let matched = match self.resolve(raw_path, method) {
            Some(m) => m,
            None => {
                tracing::debug!(path = raw_path, %method, "no route matched");
                return None;
            }
        };
        tracing::debug!(path = raw_path, %method, pattern = matched.pattern, "dispatching");

        let request = Request {
            raw_path: raw_path.to_string(),
            path: matched.path,
            method,
            params: matched.params,
            query: matched.query,
            body: match method {
                Method::Post => body,
                Method::Get => None,
            },
        };

        for (index, mw) in self.middleware.iter().enumerate() {
            match mw(request.clone()).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Respond(value)) => {
                    tracing::debug!(path = %request.path, index, "middleware answered dispatch");
                    return Some(Outcome::Done(value));
                }
                Err(e) => {
                    tracing::warn!(path = %request.path, index, error = %e, "middleware fault");
                    return Some(Outcome::Fault {
                        message: e.to_string(),
                    });
                }
            }
        }

        match (matched.handler)(request).await {
            Ok(value) => Some(Outcome::Done(value)),
            Err(e) => {
                tracing::warn!(path = raw_path, error = %e, "handler fault");
                Some(Outcome::Fault {
                    message: e.to_string(),
                })
            }
        }
    }
}
