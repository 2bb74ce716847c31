//! User notification port (toasts)

#[cfg(test)]
use mockall::automock;

/// Port for transient user-facing notifications
#[cfg_attr(test, automock)]
pub trait NotifierPort: Send + Sync {
    /// Show a success notification
    fn success(&self, message: &str);

    /// Show a failure notification
    fn error(&self, message: &str);
}
