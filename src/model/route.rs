//! Navigation targets
//!
//! Every screen the app can show is a `Route` variant, and a variant carries
//! the parameters its screen needs. A `ViewDetails` route cannot exist
//! without its `NavigationParams`.

use crate::model::form::NavigationParams;
use std::fmt;
use thiserror::Error;

/// A screen on the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ViewDetails(NavigationParams),
}

/// Route identity without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RouteName {
    Home,
    ViewDetails,
}

/// Rejected navigation requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("route '{0}' requires name and surname parameters")]
    MissingParams(RouteName),
    #[error("no transition defined from '{from}' to '{to}'")]
    UndefinedTransition { from: RouteName, to: RouteName },
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Route::Home => RouteName::Home,
            Route::ViewDetails(_) => RouteName::ViewDetails,
        }
    }

    /// Build a route from a name and optional parameters, as an entry point
    /// outside the running app would supply them.
    pub fn resolve(name: RouteName, params: Option<NavigationParams>) -> Result<Route, NavError> {
        match name {
            RouteName::Home => Ok(Route::Home),
            RouteName::ViewDetails => params
                .map(Route::ViewDetails)
                .ok_or(NavError::MissingParams(RouteName::ViewDetails)),
        }
    }
}

impl RouteName {
    /// Title shown in the screen header
    pub fn title(&self) -> &str {
        match self {
            RouteName::Home => "Home",
            RouteName::ViewDetails => "ViewDetails",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Home.name(), RouteName::Home);
        let route = Route::ViewDetails(NavigationParams::new("Ada", "Lovelace"));
        assert_eq!(route.name(), RouteName::ViewDetails);
        assert_eq!(route.name().to_string(), "ViewDetails");
    }

    #[test]
    fn test_resolve_view_details_requires_params() {
        let err = Route::resolve(RouteName::ViewDetails, None).unwrap_err();
        assert_eq!(err, NavError::MissingParams(RouteName::ViewDetails));
        assert_eq!(
            err.to_string(),
            "route 'ViewDetails' requires name and surname parameters"
        );
    }

    #[test]
    fn test_resolve_view_details_with_params() {
        let params = NavigationParams::new("", "");
        let route = Route::resolve(RouteName::ViewDetails, Some(params.clone())).unwrap();
        assert_eq!(route, Route::ViewDetails(params));
    }

    #[test]
    fn test_resolve_home_ignores_params() {
        let route = Route::resolve(RouteName::Home, Some(NavigationParams::new("a", "b")));
        assert_eq!(route, Ok(Route::Home));
    }
}
