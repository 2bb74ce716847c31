//! Screens the client can navigate to

use std::fmt;

use super::RideId;

/// Path prefix of the driver-only area
pub const DRIVER_AREA_PREFIX: &str = "/driver";

/// Whether `path` lies inside the driver-only area
///
/// A plain prefix test: `/drivers` and `/driverSettings` count as well.
#[must_use]
pub fn is_driver_area(path: &str) -> bool {
    path.starts_with(DRIVER_AREA_PREFIX)
}

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Login screen
    Login,
    /// Ride booking screen for riders
    BookRide,
    /// Dispatcher (company) screen
    Company,
    /// Driver dashboard
    DriverDashboard,
    /// Rider's ride history
    MyRides,
    /// Detail view of a single ride
    RideDetail(RideId),
}

impl AppRoute {
    /// URL path of the screen
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::BookRide => "/bookRide".to_string(),
            Self::Company => "/company".to_string(),
            Self::DriverDashboard => "/driver/dashboard".to_string(),
            Self::MyRides => "/myRides".to_string(),
            Self::RideDetail(id) => format!("/rideDetail/{id}"),
        }
    }

    /// Parse a known screen from a path; unknown paths yield `None`
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Some(Self::Login),
            "/bookRide" => Some(Self::BookRide),
            "/company" => Some(Self::Company),
            "/driver/dashboard" => Some(Self::DriverDashboard),
            "/myRides" => Some(Self::MyRides),
            _ => path
                .strip_prefix("/rideDetail/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::RideDetail(RideId::new(id))),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
