use std::net::SocketAddr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use coverflow::{cli, config, error, info};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Log request details at debug level
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the Spotify authorization server
    Auth(AuthOptions),

    /// Serve the coverflow page, the album list and playback
    Player(PlayerOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Address to listen on (overrides AUTH_SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<SocketAddr>,

    /// Open the login page in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayerOptions {
    /// Address to listen on (overrides PLAYER_SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<SocketAddr>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("coverflow=debug")
        } else {
            EnvFilter::new("coverflow=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    init_logger(cli.verbose);

    if let Some(path) = config::load_env() {
        info!("Loaded environment from {}", path.display());
    }

    let mut settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    tracing::debug!(?settings, "configuration loaded");

    apply_overrides(&cli.command, &mut settings);

    match cli.command {
        Command::Auth(opt) => cli::auth(settings, opt.open).await,
        Command::Player(_) => cli::player(settings).await,
        Command::Completions(_) => {}
    }
}

/// `--addr` replaces the bind address of the server being started.
fn apply_overrides(command: &Command, settings: &mut config::Settings) {
    match command {
        Command::Auth(opt) => {
            if let Some(addr) = opt.addr {
                settings.auth_addr = addr;
            }
        }
        Command::Player(opt) => {
            if let Some(addr) = opt.addr {
                settings.player_addr = addr;
            }
        }
        Command::Completions(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> config::Settings {
        config::Settings::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn auth_addr_flag_overrides_auth_address_only() {
        let cli = Cli::try_parse_from(["coverflow", "auth", "--addr", "0.0.0.0:9999", "--open"])
            .unwrap();
        let mut settings = defaults();
        apply_overrides(&cli.command, &mut settings);

        assert_eq!(settings.auth_addr, "0.0.0.0:9999".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.player_addr, defaults().player_addr);
        assert!(matches!(cli.command, Command::Auth(AuthOptions { open: true, .. })));
    }

    #[test]
    fn player_addr_flag_overrides_player_address_only() {
        let cli = Cli::try_parse_from(["coverflow", "-v", "player", "--addr", "127.0.0.1:5001"])
            .unwrap();
        let mut settings = defaults();
        apply_overrides(&cli.command, &mut settings);

        assert!(cli.verbose);
        assert_eq!(settings.player_addr, "127.0.0.1:5001".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.auth_addr, defaults().auth_addr);
    }

    #[test]
    fn without_addr_flag_settings_are_unchanged() {
        let cli = Cli::try_parse_from(["coverflow", "auth"]).unwrap();
        let mut settings = defaults();
        apply_overrides(&cli.command, &mut settings);

        assert_eq!(settings.auth_addr, defaults().auth_addr);
    }

    #[test]
    fn invalid_addr_is_rejected() {
        assert!(Cli::try_parse_from(["coverflow", "player", "--addr", "nowhere"]).is_err());
    }
}
