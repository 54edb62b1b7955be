//! CLI tool for inspecting dashboard navigation.
//!
//! Prints the route table and evaluates the navigation guard offline,
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List routes
//! cargo run --bin navctl -- routes
//!
//! # Evaluate the guard for an anonymous visitor
//! cargo run --bin navctl -- check /
//!
//! # Evaluate with a session flag value
//! cargo run --bin navctl -- check / --session alice --from /login
//! ```

use dashboard_nav::application::services::{NavigationController, NavigationOutcome};
use dashboard_nav::domain::entities::Decision;
use dashboard_nav::infrastructure::session::StaticSession;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting dashboard navigation.
#[derive(Parser)]
#[command(name = "navctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,

    /// Evaluate the navigation guard for a path
    Check {
        /// Target path, e.g. "/"
        path: String,

        /// Path of the route being left
        #[arg(short, long)]
        from: Option<String>,

        /// Value of the `user` session flag (absent if omitted)
        #[arg(short, long)]
        session: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let controller = NavigationController::default();

    match cli.command {
        Commands::Routes => list_routes(&controller),
        Commands::Check {
            path,
            from,
            session,
        } => check(&controller, &path, from.as_deref(), session)?,
    }

    Ok(())
}

/// Prints the route table in order.
fn list_routes(controller: &NavigationController) {
    println!("{}", "Routes".bright_blue().bold());
    println!();
    println!(
        "{:<12} {:<12} {:<12} {}",
        "PATH".bold(),
        "NAME".bold(),
        "VIEW".bold(),
        "AUTH".bold()
    );

    for route in controller.table().iter() {
        let auth = if route.requires_auth() {
            "required".yellow()
        } else {
            "public".green()
        };
        println!(
            "{:<12} {:<12} {:<12} {}",
            route.path,
            route.name,
            format!("{:?}", route.component),
            auth
        );
    }
}

/// Evaluates the guard and prints the decision.
fn check(
    controller: &NavigationController,
    path: &str,
    from: Option<&str>,
    session: Option<String>,
) -> Result<()> {
    println!("{} {}", "Target:".bold(), path);
    if let Some(from) = from {
        println!("{} {}", "From:".bold(), from);
    }
    println!("{} {}", "Session:".bold(), session_label(session.as_deref()));
    println!();

    let session = StaticSession::new(session);
    let outcome = controller.navigate(path, from, &session);
    println!("{}", describe_outcome(path, outcome)?);

    Ok(())
}

/// Describes the session flag as the guard will see it.
fn session_label(session: Option<&str>) -> String {
    match session {
        Some(value) if !value.is_empty() => format!("present ({value})"),
        Some(_) => "empty".to_string(),
        None => "absent".to_string(),
    }
}

/// Formats a navigation outcome; a routing miss is an error.
fn describe_outcome(path: &str, outcome: NavigationOutcome) -> Result<String> {
    match outcome {
        NavigationOutcome::Resolved(Decision::Proceed) => {
            Ok("✓ Proceed".green().bold().to_string())
        }
        NavigationOutcome::Resolved(Decision::Redirect(target)) => {
            Ok(format!("{} {}", "→ Redirect to".yellow().bold(), target))
        }
        NavigationOutcome::NotFound => anyhow::bail!("No route matches '{}'", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_session_label() {
        assert_eq!(session_label(None), "absent");
        assert_eq!(session_label(Some("")), "empty");
        assert_eq!(session_label(Some("alice")), "present (alice)");
    }

    #[test]
    fn test_check_anonymous_dashboard() {
        plain();
        let controller = NavigationController::default();
        let outcome = controller.navigate("/", None, &StaticSession::anonymous());

        assert_eq!(
            describe_outcome("/", outcome).unwrap(),
            "→ Redirect to /login"
        );
    }

    #[test]
    fn test_check_empty_session_is_anonymous() {
        plain();
        let controller = NavigationController::default();
        let outcome = controller.navigate("/", None, &StaticSession::with_value(""));

        assert_eq!(
            describe_outcome("/", outcome).unwrap(),
            "→ Redirect to /login"
        );
    }

    #[test]
    fn test_check_logged_in_dashboard() {
        plain();
        let controller = NavigationController::default();
        let outcome = controller.navigate("/", Some("/login"), &StaticSession::with_value("alice"));

        assert_eq!(describe_outcome("/", outcome).unwrap(), "✓ Proceed");
    }

    #[test]
    fn test_check_unknown_path_fails() {
        let controller = NavigationController::default();
        let outcome = controller.navigate("/settings", None, &StaticSession::anonymous());

        let err = describe_outcome("/settings", outcome).unwrap_err();
        assert_eq!(err.to_string(), "No route matches '/settings'");
    }
}
