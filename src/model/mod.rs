//! Model layer - application state
//!
//! - `FormState` / `NavigationParams` - what the user typed and what gets sent on
//! - `Route` / `NavStack` - the navigation state machine
//! - `ModalStack` - overlays
//! - `Focus` - which home screen control is active

pub mod form;
pub mod modal;
pub mod nav;
pub mod route;
pub mod ui;

pub use form::{FormState, NavigationParams};
pub use nav::NavStack;
pub use route::{NavError, Route, RouteName};
