//! Terminal stand-ins for the screen: navigation and toasts are printed.

use application::{NavigatorPort, NotifierPort};
use domain::AppRoute;

/// Prints navigations and notifications
#[derive(Debug, Default)]
pub struct Console;

impl NavigatorPort for Console {
    fn push(&self, route: &AppRoute) {
        println!("➡️  {route}");
    }

    fn replace(&self, route: &AppRoute) {
        println!("➡️  {route}");
    }
}

impl NotifierPort for Console {
    fn success(&self, message: &str) {
        println!("✅ {message}");
    }

    fn error(&self, message: &str) {
        println!("❌ {message}");
    }
}
