mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::MAX_SNAPSHOT_SIZE;
use crate::consts::cli_consts::fade::MAX_FADE_MS;
use crate::consts::cli_consts::frame::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::session::{SnapshotOptions, StartOverrides, run_snapshot, run_tui_mode, setup_session};
use crate::ui::auth_card::{FadeTimings, Mode, Role};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Phone-framed login and sign-up mockup for the terminal
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive mockup
    Start {
        /// Disable the gradient behind the phone viewport
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background: bool,

        /// Duration of each fade phase in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(0..=MAX_FADE_MS))]
        fade_ms: Option<u64>,

        /// Skip the splash screen
        #[arg(long, action = clap::ArgAction::SetTrue)]
        skip_splash: bool,
    },
    /// Render one frame of the card as plain text
    Snapshot {
        /// Form variant to show
        #[arg(long, value_enum, default_value_t = Mode::SignUp)]
        mode: Mode,

        /// Role to select
        #[arg(long, value_enum)]
        role: Option<Role>,

        /// Digits typed into the PIN slots
        #[arg(long, value_name = "DIGITS")]
        pin: Option<String>,

        /// Leave the role menu open
        #[arg(long, action = clap::ArgAction::SetTrue)]
        open_menu: bool,

        /// Terminal width
        #[arg(
            long,
            default_value_t = FRAME_WIDTH,
            value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_SNAPSHOT_SIZE))
        )]
        width: u16,

        /// Terminal height
        #[arg(
            long,
            default_value_t = FRAME_HEIGHT,
            value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_SNAPSHOT_SIZE))
        )]
        height: u16,
    },
    /// Delete the configuration file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            no_background,
            fade_ms,
            skip_splash,
        } => {
            let config = Config::load_or_create(&config_path);
            let overrides = StartOverrides {
                no_background,
                fade_ms,
                skip_splash,
            };
            let ui_config = setup_session(&config, overrides);
            if let Err(e) = run_tui_mode(ui_config).await {
                print_cmd_error!("Interactive session failed", &e.to_string());
                return Err(e);
            }
            Ok(())
        }
        Command::Snapshot {
            mode,
            role,
            pin,
            open_menu,
            width,
            height,
        } => {
            let config = Config::load_or_default(&config_path);
            let (fade_out_ms, fade_in_ms) = config.fade_millis();
            let options = SnapshotOptions {
                mode,
                role,
                pin: pin.unwrap_or_default(),
                open_menu,
                width,
                height,
                with_background_color: false,
                timings: FadeTimings::from_millis(fade_out_ms, fade_in_ms),
            };
            run_snapshot(options).await
        }
        Command::ResetConfig => {
            if !config_path.exists() {
                print_cmd_info!("Nothing to reset", "{}", config_path.display());
                return Ok(());
            }
            if let Err(e) = Config::clear(&config_path) {
                print_cmd_warn!("Could not delete config", "{}", e);
                return Err(e.into());
            }
            print_cmd_success!("Configuration reset", "{}", config_path.display());
            Ok(())
        }
    }
}
