//! user-details-tui - a two-screen form in the terminal
//!
//! The home screen collects a first name and surname; "Add user" opens a
//! details screen that echoes them back. Uses the Component Architecture
//! pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::{FormState, NavigationParams, Route, RouteName};
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "user-details-tui", version, about = "Enter a name, see it on the next screen")]
struct Cli {
    /// Screen to open at startup
    #[arg(long, value_enum, default_value = "home")]
    route: RouteName,

    /// First name (pre-fills the form, or is shown directly with --route view-details)
    #[arg(long)]
    name: Option<String>,

    /// Surname (pre-fills the form, or is shown directly with --route view-details)
    #[arg(long)]
    surname: Option<String>,

    /// Path to config.json (default: ~/.user-details-tui/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the starting form and route, rejecting a details screen
    /// without both parameters
    fn entry(&self) -> Result<(FormState, Route)> {
        let form = FormState {
            first_name: self.name.clone().unwrap_or_default(),
            surname: self.surname.clone().unwrap_or_default(),
        };
        let params = match (&self.name, &self.surname) {
            (Some(name), Some(surname)) => Some(NavigationParams::new(name, surname)),
            _ => None,
        };
        let route = Route::resolve(self.route, params)?;
        Ok((form, route))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let (form, entry) = cli.entry()?;

    let log_path = logging::init_tracing(&config);

    let mut app = App::with_entry(form, entry)?;
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?
        .with_tick_rate(config.tick_rate())
        .with_mouse(config.mouse);
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "application error");
        eprintln!("{}", error_report(&err, log_path.as_deref()));
        std::process::exit(1);
    }

    Ok(())
}

/// Message printed after the terminal is restored
fn error_report(err: &anyhow::Error, log_path: Option<&Path>) -> String {
    match log_path {
        Some(path) => format!("Error: {:?}\nLog: {}", err, path.display()),
        None => format!("Error: {:?}", err),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            tracing::trace!(action = %a, "update");
            current_action = app.update(a)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NavError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("user-details-tui").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_default_entry_is_empty_home() {
        let (form, route) = parse(&[]).entry().unwrap();
        assert_eq!(form, FormState::default());
        assert_eq!(route, Route::Home);
    }

    #[test]
    fn test_view_details_entry() {
        let cli = parse(&["--route", "view-details", "--name", "Ada", "--surname", ""]);
        let (_, route) = cli.entry().unwrap();
        assert_eq!(route, Route::ViewDetails(NavigationParams::new("Ada", "")));
    }

    #[test]
    fn test_view_details_without_params_rejected() {
        let cli = parse(&["--route", "view-details", "--name", "Ada"]);
        let err = cli.entry().unwrap_err();
        assert_eq!(
            err.downcast_ref::<NavError>(),
            Some(&NavError::MissingParams(RouteName::ViewDetails))
        );
    }

    #[test]
    fn test_home_entry_prefills_form() {
        let (form, route) = parse(&["--name", "Grace"]).entry().unwrap();
        assert_eq!(route, Route::Home);
        assert_eq!(form.first_name, "Grace");
        assert_eq!(form.surname, "");
    }

    #[test]
    fn test_error_report_points_at_log() {
        let err = anyhow::anyhow!("terminal went away");
        let report = error_report(&err, Some(Path::new("/tmp/app.log")));
        assert!(report.starts_with("Error: terminal went away"));
        assert!(report.ends_with("Log: /tmp/app.log"));

        let report = error_report(&err, None);
        assert!(report.starts_with("Error: terminal went away"));
        assert!(!report.contains("Log:"));
    }
}
