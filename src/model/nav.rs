//! Navigation stack
//!
//! A stack of routes with `Home` at the root. The only forward transition
//! is `Home -> ViewDetails`. Going back pops the top route and never removes
//! the root.

use crate::model::route::{NavError, Route, RouteName};

#[derive(Debug, Clone)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    /// The active route
    pub fn current(&self) -> &Route {
        // The root is never popped, so the stack is never empty
        self.stack.last().unwrap_or(&Route::Home)
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether a transition between two route kinds is defined
    pub fn is_defined(from: RouteName, to: RouteName) -> bool {
        matches!((from, to), (RouteName::Home, RouteName::ViewDetails))
    }

    /// Push a route if the transition from the current route is defined
    pub fn navigate(&mut self, route: Route) -> Result<(), NavError> {
        let from = self.current().name();
        let to = route.name();
        if !Self::is_defined(from, to) {
            return Err(NavError::UndefinedTransition { from, to });
        }

        tracing::debug!(%from, %to, "navigate");
        self.stack.push(route);
        Ok(())
    }

    /// Pop the active route. The root stays.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        if let Some(ref route) = popped {
            tracing::debug!(from = %route.name(), to = %self.current().name(), "back");
        }
        popped
    }
}
