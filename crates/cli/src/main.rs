use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use starling_rating::{Direction, RatingControl, RatingProps, TabBehavior};
use starling_tui::RunOptions;
use starling_util::{RatingConfig, load_config, resolve_config_path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Star rating control for the terminal.
#[derive(Parser, Debug)]
#[command(name = "starling", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    rating: RatingArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the interactive control (default)
    Run,
    /// Draw a single frame and print it as plain text
    Render {
        #[arg(long, default_value_t = 60)]
        width: u16,
        #[arg(long, default_value_t = 12)]
        height: u16,
    },
    /// Print the accessibility tree as JSON
    Describe,
}

/// Overrides applied on top of the config file.
#[derive(Args, Debug, Default)]
struct RatingArgs {
    /// Path to a YAML or JSON config file (defaults to $STARLING_CONFIG)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Number of items
    #[arg(long, global = true)]
    count: Option<usize>,

    /// Current rating, 0 for unset
    #[arg(long, global = true)]
    value: Option<usize>,

    #[arg(long, global = true)]
    readonly: bool,

    #[arg(long, global = true)]
    disabled: bool,

    /// Stack items vertically
    #[arg(long, global = true)]
    vertical: bool,

    /// Show tooltip labels on hover
    #[arg(long, global = true)]
    tooltips: bool,

    /// Comma separated tooltip labels, e.g. Bad,OK,Good
    #[arg(long, global = true, value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Theme id (dracula, nord, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Let Tab leave the control instead of cycling through its items
    #[arg(long, global = true)]
    tab_release: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

impl RatingArgs {
    /// Applies the command line on top of `config`.
    fn apply(&self, mut config: RatingConfig) -> RatingConfig {
        let props = &mut config.props;
        if let Some(count) = self.count {
            props.count = count;
        }
        if let Some(value) = self.value {
            props.value = value;
        }
        props.readonly |= self.readonly;
        props.disabled |= self.disabled;
        if self.vertical {
            props.direction = Direction::Vertical;
        }
        props.show_tooltip |= self.tooltips;
        if let Some(labels) = &self.labels {
            props.tooltip_labels = labels.iter().map(|label| label.trim().to_string()).collect();
        }
        if self.tab_release {
            props.tab_behavior = TabBehavior::Release;
        }
        if self.theme.is_some() {
            config.theme = self.theme.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run);
    init_tracing(cli.rating.log_file.as_ref(), command)?;

    let config = load_rating_config(&cli.rating)?;
    let RatingConfig { props, theme } = config;
    debug!(?props, ?theme, ?command, "starting");

    match command {
        Command::Run => {
            starling_tui::run(RunOptions { props, theme }).await?;
            info!("session ended");
        }
        Command::Render { width, height } => {
            for line in starling_tui::render_snapshot(props, theme.as_deref(), width, height)? {
                println!("{line}");
            }
        }
        Command::Describe => {
            let semantics = RatingControl::new(props).semantics();
            println!("{}", serde_json::to_string_pretty(&semantics)?);
        }
    }
    Ok(())
}

fn load_rating_config(args: &RatingArgs) -> Result<RatingConfig> {
    let config = match resolve_config_path(args.config.as_deref()) {
        Some(path) => load_config(&path).with_context(|| format!("loading {}", path.display()))?,
        None => RatingConfig {
            props: RatingProps::default(),
            theme: None,
        },
    };
    let config = args.apply(config);
    config.props.validate().context("invalid rating options")?;
    Ok(config)
}

/// Logs go to `--log-file` when given. Without one, the interactive session
/// stays silent so the alternate screen is not overwritten; other commands
/// log to stderr.
fn init_tracing(log_file: Option<&PathBuf>, command: Command) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match (log_file, command) {
        (Some(path), _) => {
            let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        (None, Command::Run) => {}
        (None, _) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["starling"]).expect("parses");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from([
            "starling",
            "render",
            "--count",
            "3",
            "--value",
            "2",
            "--vertical",
            "--tooltips",
            "--labels",
            "Bad, OK,Good",
            "--tab-release",
            "--theme",
            "nord",
        ])
        .expect("parses");
        assert_eq!(cli.command, Some(Command::Render { width: 60, height: 12 }));

        let config = cli.rating.apply(RatingConfig::default());
        assert_eq!(config.props.count, 3);
        assert_eq!(config.props.value, 2);
        assert_eq!(config.props.direction, Direction::Vertical);
        assert!(config.props.show_tooltip);
        assert_eq!(config.props.tooltip_labels, ["Bad", "OK", "Good"]);
        assert_eq!(config.props.tab_behavior, TabBehavior::Release);
        assert_eq!(config.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let cli = Cli::try_parse_from(["starling", "describe", "--count", "2", "--value", "4"]).expect("parses");
        assert!(load_rating_config(&cli.rating).is_err());
    }
}
