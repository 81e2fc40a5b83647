use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AuthService, ChatService, Clock, NewsService, QuestionBankService, QuizService,
    SettingsService, UserAdminService,
};
use storage::local::FilePreferencesStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, PortalTimings, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    ZeroInterval { flag: &'static str },
    EmptyPath,
    NoConfigDir,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::ZeroInterval { flag } => write!(f, "{flag} must be greater than zero"),
            ArgsError::EmptyPath => write!(f, "--prefs requires a non-empty path"),
            ArgsError::NoConfigDir => {
                write!(f, "could not determine a config directory; pass --prefs")
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

fn parse_number(flag: &'static str, raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

fn parse_refresh_secs(flag: &'static str, raw: &str) -> Result<Duration, ArgsError> {
    match parse_number(flag, raw)? {
        0 => Err(ArgsError::ZeroInterval { flag }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

struct DesktopApp {
    timings: PortalTimings,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn timings(&self) -> PortalTimings {
        self.timings
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn question_bank(&self) -> Arc<QuestionBankService> {
        self.services.question_bank()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn user_admin(&self) -> Arc<UserAdminService> {
        self.services.user_admin()
    }

    fn news(&self) -> Arc<NewsService> {
        self.services.news()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }

    fn settings(&self) -> Arc<SettingsService> {
        self.services.settings()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    prefs_path: Option<PathBuf>,
    news_refresh: Duration,
    typing_delay: Duration,
    shuffle: bool,
    log_filter: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--prefs <path>] [--news-refresh-secs <n>] [--typing-delay-ms <n>] [--shuffle] [--log <filter>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --prefs <config dir>/preferences.json");
    eprintln!("  --news-refresh-secs 60");
    eprintln!("  --typing-delay-ms 1500");
    eprintln!("  --log info (RUST_LOG takes precedence)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  PORTAL_PREFS_PATH, PORTAL_NEWS_REFRESH_SECS, PORTAL_TYPING_DELAY_MS, PORTAL_SHUFFLE, PORTAL_LOG"
    );
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let defaults = PortalTimings::default();
        let mut prefs_path = env("PORTAL_PREFS_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut news_refresh = match env("PORTAL_NEWS_REFRESH_SECS") {
            Some(raw) => parse_refresh_secs("PORTAL_NEWS_REFRESH_SECS", &raw)?,
            None => defaults.news_refresh,
        };
        let mut typing_delay = match env("PORTAL_TYPING_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_number("PORTAL_TYPING_DELAY_MS", &raw)?),
            None => defaults.typing_delay,
        };
        let mut shuffle = env("PORTAL_SHUFFLE").is_some_and(|raw| is_truthy(&raw));
        let mut log_filter = env("PORTAL_LOG").unwrap_or_else(|| "info".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--prefs" => {
                    let value = require_value(args, "--prefs")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath);
                    }
                    prefs_path = Some(PathBuf::from(value));
                }
                "--news-refresh-secs" => {
                    let value = require_value(args, "--news-refresh-secs")?;
                    news_refresh = parse_refresh_secs("--news-refresh-secs", &value)?;
                }
                "--typing-delay-ms" => {
                    let value = require_value(args, "--typing-delay-ms")?;
                    typing_delay = Duration::from_millis(parse_number("--typing-delay-ms", &value)?);
                }
                "--shuffle" => shuffle = true,
                "--log" => log_filter = require_value(args, "--log")?,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            prefs_path,
            news_refresh,
            typing_delay,
            shuffle,
            log_filter,
        })
    }

    fn timings(&self) -> PortalTimings {
        PortalTimings {
            news_refresh: self.news_refresh,
            typing_delay: self.typing_delay,
            ..PortalTimings::default()
        }
    }

    fn resolve_prefs_path(&self) -> Result<PathBuf, ArgsError> {
        if let Some(path) = &self.prefs_path {
            return Ok(path.clone());
        }
        let dirs = ProjectDirs::from("com", "portal", "portal").ok_or(ArgsError::NoConfigDir)?;
        Ok(dirs.config_dir().join("preferences.json"))
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    log_fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1).peekable();
    if matches!(argv.peek().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing(&parsed.log_filter);

    let prefs_path = parsed.resolve_prefs_path()?;
    info!(prefs = %prefs_path.display(), shuffle = parsed.shuffle, "starting portal");
    let preferences = Arc::new(FilePreferencesStore::new(prefs_path));
    let services = AppServices::new_seeded(Clock::system(), preferences, parsed.shuffle)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        timings: parsed.timings(),
        services,
    });
    let context = build_app_context(&app);

    // On macOS, tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Portal")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.prefs_path, None);
        assert_eq!(args.news_refresh, Duration::from_secs(60));
        assert_eq!(args.typing_delay, Duration::from_millis(1500));
        assert!(!args.shuffle);
        assert_eq!(args.log_filter, "info");
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--news-refresh-secs", "5", "--prefs", "/tmp/p.json", "--shuffle"],
            &[("PORTAL_NEWS_REFRESH_SECS", "30"), ("PORTAL_LOG", "debug")],
        )
        .unwrap();
        assert_eq!(args.news_refresh, Duration::from_secs(5));
        assert_eq!(args.prefs_path, Some(PathBuf::from("/tmp/p.json")));
        assert!(args.shuffle);
        assert_eq!(args.log_filter, "debug");
        assert_eq!(args.timings().news_refresh, Duration::from_secs(5));
        assert_eq!(args.resolve_prefs_path().unwrap(), PathBuf::from("/tmp/p.json"));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--typing-delay-ms", "soon"], &[]),
            Err(ArgsError::InvalidNumber {
                flag: "--typing-delay-ms",
                raw: "soon".into()
            })
        );
        assert_eq!(
            parse(&["--log"], &[]),
            Err(ArgsError::MissingValue { flag: "--log" })
        );
        assert_eq!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
        assert_eq!(parse(&["--prefs", " "], &[]), Err(ArgsError::EmptyPath));
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        assert_eq!(
            parse(&["--news-refresh-secs", "0"], &[]),
            Err(ArgsError::ZeroInterval {
                flag: "--news-refresh-secs"
            })
        );
        assert_eq!(
            parse(&[], &[("PORTAL_NEWS_REFRESH_SECS", " 0 ")]),
            Err(ArgsError::ZeroInterval {
                flag: "PORTAL_NEWS_REFRESH_SECS"
            })
        );
        let args = parse(&["--news-refresh-secs", "1"], &[]).unwrap();
        assert_eq!(args.timings().news_refresh, Duration::from_secs(1));
    }
}
