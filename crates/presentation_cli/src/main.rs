//! RideFast CLI
//!
//! Terminal front end for the ride-hailing client: sign in, look up
//! addresses, book rides and check which screen a path leads to.

#![allow(clippy::print_stdout)]

mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::{
    ApplicationError, AuthService, BookingWorkflow, LoginForm, LookupOutcome, RouteDecision,
    RouteGuard, SessionStore, SuggestionClient,
};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{AddressField, AppRoute, Role};
use infrastructure::{
    AppConfig, BackendAdapter, FileSessionStore, GeocodingAdapter, LoggingConfig, init_logging,
};
use tracing::debug;

use crate::console::Console;

/// RideFast CLI
#[derive(Parser)]
#[command(name = "ridefast")]
#[command(author, version, about = "RideFast ride-hailing client", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and land on the role's home screen
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "RIDEFAST_PASSWORD", hide_env_values = true)]
        password: String,

        /// Sign in as a driver instead of a rider
        #[arg(long)]
        driver: bool,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in account and its home screen
    Whoami,

    /// Look up address suggestions
    ///
    /// Example: ridefast suggest "10 Downing"
    Suggest {
        /// Partial address
        text: String,

        /// Which booking field the text is typed into
        #[arg(short, long, value_enum, default_value = "pickup")]
        field: FieldArg,
    },

    /// Book a ride between two addresses
    ///
    /// Each address is looked up and the chosen suggestion resolves its
    /// coordinates before the request is sent.
    /// Example: ridefast book --pickup "Gare de Lyon" --destination "Orly"
    Book {
        /// Pickup address text
        #[arg(long)]
        pickup: String,

        /// Destination address text
        #[arg(long)]
        destination: String,

        /// Which pickup suggestion to use (0 = first)
        #[arg(long, default_value = "0")]
        pickup_choice: usize,

        /// Which destination suggestion to use (0 = first)
        #[arg(long, default_value = "0")]
        destination_choice: usize,
    },

    /// Check whether the current session may open a path
    Route {
        /// Path to check, e.g. /driver/dashboard
        path: String,
    },
}

/// Address field selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldArg {
    Pickup,
    Destination,
}

impl From<FieldArg> for AddressField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Pickup => Self::Pickup,
            FieldArg::Destination => Self::Destination,
        }
    }
}

/// Determine log filter level from verbosity count
///
/// `None` keeps the configured filter.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

const fn role_for(driver: bool) -> Role {
    if driver { Role::Driver } else { Role::NormalUser }
}

/// Services wired to the configured backend and geocoder
struct App {
    config: AppConfig,
    console: Arc<Console>,
    session: Arc<SessionStore>,
    backend: Arc<BackendAdapter>,
}

impl App {
    fn new(config: AppConfig) -> anyhow::Result<Self> {
        let persistence = Arc::new(FileSessionStore::new(config.session.resolved_path()));
        let backend = BackendAdapter::http(&config.backend).context("backend client")?;

        Ok(Self {
            console: Arc::new(Console),
            session: Arc::new(SessionStore::new(persistence)),
            backend: Arc::new(backend),
            config,
        })
    }

    fn auth(&self) -> AuthService {
        AuthService::new(
            Arc::clone(&self.session),
            self.backend.clone(),
            self.console.clone(),
            self.console.clone(),
        )
    }

    fn guard(&self) -> RouteGuard {
        RouteGuard::new(Arc::clone(&self.session), self.console.clone())
    }

    fn suggestions(&self) -> anyhow::Result<SuggestionClient> {
        let geocoder =
            GeocodingAdapter::location_iq(&self.config.geocoding).context("geocoding client")?;
        Ok(SuggestionClient::new(
            Arc::new(geocoder),
            self.config.booking.suggestion_config(),
        ))
    }

    fn booking(&self) -> anyhow::Result<BookingWorkflow> {
        Ok(BookingWorkflow::new(
            self.suggestions()?,
            self.backend.clone(),
            Arc::clone(&self.session),
            self.console.clone(),
            self.console.clone(),
        ))
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate()?;
    Ok(config)
}

fn logging_config(config: &AppConfig, verbose: u8) -> LoggingConfig {
    match log_filter_from_verbosity(verbose) {
        Some(filter) => config.logging.clone().with_filter(filter),
        None => config.logging.clone(),
    }
}

fn print_field_errors(err: &ApplicationError) {
    if let ApplicationError::Validation(errors) = err {
        for error in errors {
            println!("   • {error}");
        }
    }
}

/// Type `text` into `field`, wait for the debounced lookup and pick one
async fn resolve_address(
    booking: &BookingWorkflow,
    field: AddressField,
    text: &str,
    choice: usize,
) -> anyhow::Result<()> {
    booking.on_focus(field);
    booking.on_field_change(field, text);
    booking.settle().await;

    let state = booking.state();
    if state.suggestions.is_empty() {
        bail!("no suggestions for {field} '{text}'");
    }
    for (index, suggestion) in state.suggestions.iter().enumerate() {
        let marker = if index == choice { "▶" } else { " " };
        println!("  {marker} [{index}] {}", suggestion.display_name);
    }

    booking
        .select_suggestion(choice)
        .with_context(|| format!("{field} choice {choice} is not available"))?;
    booking.on_blur(field);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_logging(&logging_config(&config, cli.verbose))?;
    debug!(environment = %config.environment, "Starting");

    let app = App::new(config)?;

    match cli.command {
        Commands::Login {
            email,
            password,
            driver,
        } => {
            let form = LoginForm::new(email, password).with_role(role_for(driver));
            match app.auth().login(&form).await {
                Ok(route) => println!("👋 Signed in; home screen is {route}"),
                Err(e) => {
                    print_field_errors(&e);
                    std::process::exit(1);
                },
            }
        },

        Commands::Logout => {
            app.session.restore();
            app.auth().logout();
            println!("👋 Signed out");
        },

        Commands::Whoami => match app.auth().restore().await {
            Ok(Some(route)) => {
                let session = app.session.snapshot();
                println!("👤 {}", session.user_email().unwrap_or("(unknown)"));
                if let Some(role) = session.role() {
                    println!("   Role: {role}");
                }
                println!("   Home: {route}");
            },
            Ok(None) => {
                println!("Not signed in");
                std::process::exit(1);
            },
            Err(e) => {
                println!("❌ {e}");
                std::process::exit(1);
            },
        },

        Commands::Suggest { text, field } => {
            let client = app.suggestions()?;
            match client.lookup(field.into(), &text).await {
                LookupOutcome::Ready { suggestions, .. } if suggestions.is_empty() => {
                    println!("No suggestions");
                },
                LookupOutcome::Ready { suggestions, .. } => {
                    println!("📍 Suggestions:");
                    for (index, suggestion) in suggestions.iter().enumerate() {
                        println!("  [{index}] {}", suggestion.display_name);
                        println!("      {}, {}", suggestion.latitude, suggestion.longitude);
                    }
                },
                LookupOutcome::Failed { error, .. } => {
                    println!("❌ {error}");
                    std::process::exit(1);
                },
                LookupOutcome::Superseded => {},
            }
        },

        Commands::Book {
            pickup,
            destination,
            pickup_choice,
            destination_choice,
        } => {
            app.session.restore();
            let guard = app.guard();
            if let RouteDecision::Redirect(route) = guard.check(&AppRoute::BookRide.path()) {
                println!("🚫 Booking is not available here; go to {route}");
                std::process::exit(1);
            }

            let booking = app.booking()?;
            println!("Pickup:");
            resolve_address(&booking, AddressField::Pickup, &pickup, pickup_choice).await?;
            println!("Destination:");
            resolve_address(
                &booking,
                AddressField::Destination,
                &destination,
                destination_choice,
            )
            .await?;

            match booking.submit().await {
                Ok(ride) => println!("🚕 Ride {ride} booked"),
                Err(e) => {
                    print_field_errors(&e);
                    std::process::exit(1);
                },
            }
        },

        Commands::Route { path } => {
            app.session.restore();
            match app.guard().check(&path) {
                RouteDecision::Admit => {
                    println!("✅ {path} is allowed ({})", screen_name(&path));
                },
                RouteDecision::Redirect(route) => {
                    println!("↪️  {path} redirects to {route}");
                },
            }
        },
    }

    Ok(())
}

/// Human-readable name of the screen a path shows
fn screen_name(path: &str) -> &'static str {
    match AppRoute::from_path(path) {
        Some(AppRoute::Login) => "login",
        Some(AppRoute::BookRide) => "ride booking",
        Some(AppRoute::Company) => "dispatcher",
        Some(AppRoute::DriverDashboard) => "driver dashboard",
        Some(AppRoute::MyRides) => "my rides",
        Some(AppRoute::RideDetail(_)) => "ride detail",
        None => "unknown screen",
    }
}
