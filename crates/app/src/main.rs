use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use bookworm_core::Clock;
use bookworm_core::model::AccountId;
use services::RosterService;
use storage::demo;
use storage::repository::{InMemoryRepository, Storage};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAccountId { raw: String },
    MissingApiUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAccountId { raw } => {
                write!(f, "invalid --account-id value: {raw}")
            }
            ArgsError::MissingApiUrl => {
                write!(f, "ui requires --api-url (or BOOKWORM_API_URL)")
            }
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

struct DesktopApp {
    roster: Arc<RosterService>,
}

impl UiApp for DesktopApp {
    fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--api-url <url>] [--api-key <key>] [--account-id <uuid>]");
    eprintln!("  cargo run -p app -- demo                 # offline, seeded sample roster");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BOOKWORM_API_URL, BOOKWORM_API_KEY, BOOKWORM_ACCOUNT_ID");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Demo,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

struct Args {
    api_url: Option<String>,
    api_key: Option<String>,
    account: AccountId,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("BOOKWORM_API_URL").ok();
        let mut api_key = std::env::var("BOOKWORM_API_KEY").ok();
        let mut account = std::env::var("BOOKWORM_ACCOUNT_ID")
            .ok()
            .and_then(|value| value.parse::<AccountId>().ok())
            .unwrap_or_else(demo::demo_account);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    api_url = Some(require_value(args, "--api-url")?);
                }
                "--api-key" => {
                    api_key = Some(require_value(args, "--api-key")?);
                }
                "--account-id" => {
                    let value = require_value(args, "--account-id")?;
                    account = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidAccountId { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            api_key,
            account,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launch against the remote service when no subcommand
    // is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let (storage, account) = match cmd {
        Command::Ui => {
            let api_url = parsed.api_url.ok_or(ArgsError::MissingApiUrl).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;
            (Storage::rest(&api_url, parsed.api_key)?, parsed.account)
        }
        Command::Demo => {
            let repo = InMemoryRepository::new();
            demo::seed_sample_roster(&repo);
            (Storage::in_memory(repo), demo::demo_account())
        }
    };

    let roster = Arc::new(RosterService::new(Clock::default(), account, storage));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { roster });
    let context = build_app_context(&app);

    // Keep the window ordinary; some dev setups default to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Bookworm")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
