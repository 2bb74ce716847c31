//! Navigation port

use domain::AppRoute;
#[cfg(test)]
use mockall::automock;

/// Port through which services move the user between screens
#[cfg_attr(test, automock)]
pub trait NavigatorPort: Send + Sync {
    /// Navigate forward, keeping the current screen in history
    fn push(&self, route: &AppRoute);

    /// Navigate by replacing the current history entry
    fn replace(&self, route: &AppRoute);
}
