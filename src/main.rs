use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use permflow::config::Config;
use permflow::logging::init_tracing;
use permflow::permission::{Permission, PermissionUiState, PermissionViewModel};
use permflow::platform::SimulatedPlatform;
use permflow::shell::{Action, PermissionShell};
use permflow::ui::app::App;

#[derive(Debug, Parser)]
#[command(name = "permflow", version, about = "Camera permission flow on a simulated device")]
struct Cli {
    /// Config file (default: <config dir>/permflow/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Permission name, overrides `permission.name`.
    #[arg(long)]
    permission: Option<String>,

    /// Append logs to this file, overrides `logging.file`.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive terminal UI (default).
    Run,
    /// Start the screen, apply actions in order and print the state after each.
    Replay {
        #[arg(value_enum, required = true)]
        actions: Vec<Action>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(name) = cli.permission {
        config.permission.name = name;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    config.validate()?;

    init_tracing(&config.logging).context("initialising logging")?;
    tracing::debug!(?config, "configuration loaded");

    let view_model = PermissionViewModel::new(
        Permission::new(config.permission.name.clone()),
        config.events.capacity,
    );
    let platform = SimulatedPlatform::new(config.simulation.denials_before_permanent);
    let mut shell = PermissionShell::new(view_model, platform);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let mut app = App::new(shell);
            permflow::ui::runtime::run(&mut app).context("terminal UI failed")?;
        }
        Command::Replay { actions } => {
            shell.on_started();
            shell.pump();
            print_state("start", &shell.state());
            for action in actions {
                let applied = shell.apply(action);
                let label = format!("{:?}{}", action, if applied { "" } else { " (ignored)" });
                print_state(&label, &shell.state());
            }
        }
    }

    Ok(())
}

fn print_state(label: &str, state: &PermissionUiState) {
    println!(
        "{:<22} text={:?} rationale={} permanently_denied={}",
        label,
        state.permission_text,
        state.is_rationale_visible,
        state.permission_permanently_denied
    );
}
