mod seed;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quest_core::model::{Identity, Role};
use services::{AdventureService, AppServices, Clock, ContentServices};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRole { raw: String },
    InvalidUser { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRole { raw } => {
                write!(f, "invalid --role value: {raw} (expected admin, editor or viewer)")
            }
            ArgsError::InvalidUser { raw } => write!(f, "invalid --user value: {raw:?}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    clock: Clock,
    identity: Identity,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn identity(&self) -> Identity {
        self.identity.clone()
    }

    fn adventure(&self) -> Arc<AdventureService> {
        self.services.adventure()
    }

    fn content(&self) -> ContentServices {
        self.services.content().clone()
    }
}

struct Args {
    db_url: String,
    identity: Identity,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--db <sqlite_url>] [--user <name>] [--role <role>]");
    eprintln!("  cargo run -p app -- seed  [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dev.sqlite3");
    eprintln!("  --user guest");
    eprintln!("  --role viewer   (admin | editor | viewer)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CODEQUEST_DB_URL, CODEQUEST_USER, CODEQUEST_ROLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("CODEQUEST_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://dev.sqlite3".into(), normalize_sqlite_url);
        let mut user = std::env::var("CODEQUEST_USER").unwrap_or_else(|_| "guest".into());
        let mut role = match std::env::var("CODEQUEST_ROLE") {
            Ok(raw) => parse_role(&raw)?,
            Err(_) => Role::Viewer,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--user" => {
                    let value = require_value(args, "--user")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidUser { raw: value });
                    }
                    user = value.trim().to_string();
                }
                "--role" => {
                    let value = require_value(args, "--role")?;
                    role = parse_role(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            identity: Identity::new(user, role),
        })
    }
}

/// Stricter than `Role::from_provider`: unknown names are rejected.
fn parse_role(raw: &str) -> Result<Role, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "editor" => Ok(Role::Editor),
        "viewer" => Ok(Role::Viewer),
        _ => Err(ArgsError::InvalidRole {
            raw: raw.to_string(),
        }),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
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

    prepare_sqlite_file(&parsed.db_url)?;
    let clock = Clock::default_clock();
    let services = AppServices::new_sqlite(&parsed.db_url, clock).await?;
    info!(db = %parsed.db_url, command = ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            info!(
                user = parsed.identity.user(),
                role = parsed.identity.role().as_str(),
                "launching desktop ui"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                clock,
                identity: parsed.identity,
                services,
            });
            let context = build_app_context(&app);

            // Some dev setups default tao windows to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("CodeQuest")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            seed::seed_content(services.content(), clock).await?;
            Ok(())
        }
        Command::Reset => {
            services.adventure().reset_progress().await;
            eprintln!("adventure progress cleared ({})", parsed.db_url);
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn role_flag_is_case_insensitive() {
        assert_eq!(parse_role(" Editor ").unwrap(), Role::Editor);
        assert!(matches!(
            parse_role("owner"),
            Err(ArgsError::InvalidRole { .. })
        ));
    }

    #[test]
    fn flags_override_identity_and_db() {
        let args = parse(&["--db", "sqlite://tmp/quest.db", "--user", "ana", "--role", "admin"])
            .unwrap();
        assert_eq!(args.db_url, "sqlite://tmp/quest.db");
        assert_eq!(args.identity.user(), "ana");
        assert_eq!(args.identity.role(), Role::Admin);
    }

    #[test]
    fn missing_flag_value_is_reported() {
        assert!(matches!(
            parse(&["--role"]),
            Err(ArgsError::MissingValue { flag: "--role" })
        ));
        assert!(matches!(parse(&["--user", "  "]), Err(ArgsError::InvalidUser { .. })));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:dev.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("dev.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
