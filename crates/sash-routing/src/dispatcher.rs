//! Scoped dispatch: one global route table plus one table per window.
//!
//! A dispatch addressed to a window consults the window's own table first
//! and falls back to the global table only when no window-local route
//! matches. Middleware registered on the global table does **not** apply
//! to window-scoped routes; the scopes are fully independent, and callers
//! rely on that asymmetry.

use std::collections::HashMap;

use serde_json::Value;

use sash_common::WindowId;

use crate::request::Method;
use crate::table::{Outcome, RouteTable};

/// Which route table a dispatch is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Window(WindowId),
}

/// Owns every route table in the process. Explicitly constructed and
/// explicitly passed to whatever needs it; there is no process-wide
/// singleton.
#[derive(Default)]
pub struct Dispatcher {
    global: RouteTable,
    windows: HashMap<WindowId, RouteTable>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The global route table, for configuration.
    pub fn global(&mut self) -> &mut RouteTable {
        &mut self.global
    }

    /// The route table scoped to one window, created on first use.
    pub fn window_table(&mut self, id: WindowId) -> &mut RouteTable {
        self.windows.entry(id).or_default()
    }

    /// Drop a window's table along with the window. Returns `false` when
    /// the window never registered any routes.
    pub fn remove_window(&mut self, id: WindowId) -> bool {
        self.windows.remove(&id).is_some()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Dispatch one bridge call into the addressed scope.
    pub async fn dispatch(
        &self,
        scope: Scope,
        raw_path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Option<Outcome> {
        match scope {
            Scope::Global => self.global.dispatch(raw_path, method, body).await,
            Scope::Window(id) => {
                if let Some(table) = self.windows.get(&id) {
                    if let Some(outcome) = table.dispatch(raw_path, method, body.clone()).await {
                        return Some(outcome);
                    }
                }
                tracing::debug!(window = %id, path = raw_path, "falling back to global table");
                self.global.dispatch(raw_path, method, body).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{handler, middleware, Flow};
    use serde_json::json;

    fn answer(value: Value) -> crate::table::Handler {
        handler(move |_req| {
            let value = value.clone();
            async move { Ok(value) }
        })
    }

    #[tokio::test]
    async fn window_table_wins_over_global() {
        let mut dispatcher = Dispatcher::new();
        let id = WindowId(1);
        dispatcher.global().get("/title", answer(json!("global"))).unwrap();
        dispatcher
            .window_table(id)
            .get("/title", answer(json!("local")))
            .unwrap();

        let outcome = dispatcher
            .dispatch(Scope::Window(id), "/title", Method::Get, None)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done(json!("local")));
    }

    #[tokio::test]
    async fn window_dispatch_falls_back_to_global() {
        let mut dispatcher = Dispatcher::new();
        let id = WindowId(1);
        dispatcher.global().get("/title", answer(json!("global"))).unwrap();
        dispatcher
            .window_table(id)
            .get("/other", answer(json!("local")))
            .unwrap();

        let outcome = dispatcher
            .dispatch(Scope::Window(id), "/title", Method::Get, None)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done(json!("global")));
    }

    #[tokio::test]
    async fn unknown_window_uses_global_table() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.global().get("/ping", answer(json!("pong"))).unwrap();

        let outcome = dispatcher
            .dispatch(Scope::Window(WindowId(99)), "/ping", Method::Get, None)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done(json!("pong")));
    }

    #[tokio::test]
    async fn no_match_anywhere_is_none() {
        let dispatcher = Dispatcher::new();
        let outcome = dispatcher
            .dispatch(Scope::Window(WindowId(1)), "/nope", Method::Get, None)
            .await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn global_middleware_does_not_reach_window_routes() {
        let mut dispatcher = Dispatcher::new();
        let id = WindowId(1);
        dispatcher
            .global()
            .register_middleware(middleware(|_req| async {
                Ok(Flow::Respond(json!("blocked")))
            }));
        dispatcher
            .window_table(id)
            .get("/ping", answer(json!("pong")))
            .unwrap();

        // The window-local match never sees the global chain.
        let outcome = dispatcher
            .dispatch(Scope::Window(id), "/ping", Method::Get, None)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done(json!("pong")));

        // A global dispatch does.
        dispatcher.global().get("/ping", answer(json!("pong"))).unwrap();
        let outcome = dispatcher
            .dispatch(Scope::Global, "/ping", Method::Get, None)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done(json!("blocked")));
    }

    #[tokio::test]
    async fn faulting_window_route_does_not_fall_back() {
        let mut dispatcher = Dispatcher::new();
        let id = WindowId(1);
        dispatcher.global().get("/title", answer(json!("global"))).unwrap();
        dispatcher
            .window_table(id)
            .get(
                "/title",
                handler(|_req| async { Err(sash_common::SashError::Other("broken".into())) }),
            )
            .unwrap();

        // A fault is still a match; fallback applies only to no-match.
        let outcome = dispatcher
            .dispatch(Scope::Window(id), "/title", Method::Get, None)
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Fault { .. }));
    }

    #[test]
    fn remove_window_drops_table() {
        let mut dispatcher = Dispatcher::new();
        let id = WindowId(1);
        dispatcher.window_table(id);
        assert_eq!(dispatcher.window_count(), 1);
        assert!(dispatcher.remove_window(id));
        assert!(!dispatcher.remove_window(id));
        assert_eq!(dispatcher.window_count(), 0);
    }
}
