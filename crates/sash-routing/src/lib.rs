//! Request routing over an inter-process call bridge.
//!
//! The bridge delivers `(path, method, payload)` tuples; this crate
//! compiles route patterns, extracts path/query parameters, and runs the
//! matched handler behind an ordered middleware chain. A handler fault is
//! converted to data at the dispatch boundary and never tears down the
//! control channel that carried the request.

pub mod dispatcher;
pub mod pattern;
pub mod query;
pub mod request;
pub mod table;

pub use dispatcher::{Dispatcher, Scope};
pub use pattern::RoutePattern;
pub use query::{parse_query, split_query};
pub use request::{BridgeMessage, Method, Request};
pub use table::{handler, middleware, Flow, Handler, MatchedRoute, Middleware, Outcome, RouteTable};
