//! Desktop entry point. Wires the HTTP backend and the preferences file
//! into the UI and launches the window.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DisplayPrefsService, SessionLogService};
use storage::http::{ApiConfig, HttpSessionsApi};
use storage::json_prefs::JsonFilePrefs;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::platform::DesktopLinkOpener;
use ui::{App, UiApp, build_app_context};

const DEFAULT_PREFS_PATH: &str = "cardio-prefs.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyApiUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { flag } => write!(f, "missing value for {flag}"),
            Self::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            Self::EmptyApiUrl => write!(f, "--api requires a non-empty url"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// Launch options. Environment variables provide the defaults, flags
/// override them.
struct Args {
    api: ApiConfig,
    prefs_path: PathBuf,
    seed_description: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = ApiConfig::from_env();
        let mut prefs_path = std::env::var("CARDIO_PREFS_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH), PathBuf::from);
        let mut seed_description = std::env::var("CARDIO_SEED_DESCRIPTION").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyApiUrl);
                    }
                    api = ApiConfig::new(value);
                }
                "--prefs" => {
                    prefs_path = PathBuf::from(require_value(args, "--prefs")?);
                }
                "--seed-description" => {
                    seed_description = Some(require_value(args, "--seed-description")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api,
            prefs_path,
            seed_description,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [--api <url>] [--prefs <path>] [--seed-description <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!("  --prefs {DEFAULT_PREFS_PATH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CARDIO_API_URL           backend base url (overridden by --api)");
    eprintln!("  CARDIO_PREFS_PATH        preferences file (overridden by --prefs)");
    eprintln!("  CARDIO_SEED_DESCRIPTION  prefill for the description field");
    eprintln!("  RUST_LOG                 tracing filter, defaults to `info`");
}

struct DesktopApp {
    session_log: Arc<SessionLogService>,
    display_prefs: Arc<DisplayPrefsService>,
    seed_description: Option<String>,
}

impl UiApp for DesktopApp {
    fn session_log(&self) -> Arc<SessionLogService> {
        Arc::clone(&self.session_log)
    }

    fn display_prefs(&self) -> Arc<DisplayPrefsService> {
        Arc::clone(&self.display_prefs)
    }

    fn link_opener(&self) -> ui::platform::LinkOpenerRef {
        Arc::new(DesktopLinkOpener)
    }

    fn seed_description(&self) -> Option<String> {
        self.seed_description.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).inspect_err(|err| {
        eprintln!("{err}");
        eprintln!();
        print_usage();
    })?;

    let sessions_api = Arc::new(HttpSessionsApi::new(args.api));
    let prefs_store = Arc::new(JsonFilePrefs::new(args.prefs_path));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_log: Arc::new(SessionLogService::new(sessions_api)),
        display_prefs: Arc::new(DisplayPrefsService::new(prefs_store)),
        seed_description: args.seed_description,
    });
    let context = build_app_context(&app);

    // tao windows can come up always-on-top in some setups; pin it off.
    let window = WindowBuilder::new()
        .with_title("Cardio")
        .with_always_on_top(false);
    let desktop_cfg = DesktopConfig::new().with_window(window);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
