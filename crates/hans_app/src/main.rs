mod platform;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use engine_logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "hans", about = "HANS control panel and control relay")]
struct Cli {
    /// Where to send log output.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    log: LogTarget,
    /// Log file used by `--log file` and `--log both`.
    #[arg(long, default_value = "./hans.log")]
    log_file: PathBuf,
    /// off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogTarget {
    Terminal,
    File,
    Both,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a panel from stdin and post each interaction to the server.
    Panel {
        /// Built-in layout (`hans`, `drum`) or path to a RON layout file.
        #[arg(long, default_value = "hans")]
        layout: String,
        #[arg(long, default_value = "http://127.0.0.1:80/")]
        endpoint: String,
    },
    /// Accept panel submissions over HTTP and relay them to the drum server.
    Relay {
        /// RON relay config; defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides the listen address from the config.
        #[arg(long)]
        listen: Option<SocketAddr>,
        /// Overrides the drum server address from the config.
        #[arg(long)]
        drum: Option<SocketAddr>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level: log::LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown log level {:?}", cli.log_level))?;

    let destination = match cli.log {
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::File(cli.log_file),
        LogTarget::Both => LogDestination::Both(cli.log_file),
    };
    engine_logging::initialize(&destination, level);

    match cli.command {
        Command::Panel { layout, endpoint } => platform::run_panel(&layout, endpoint),
        Command::Relay {
            config,
            listen,
            drum,
        } => {
            let mut config = platform::load_relay_config(config.as_deref())?;
            if let Some(listen) = listen {
                config.listen = listen;
            }
            if let Some(drum) = drum {
                config.drum_addr = drum;
            }
            platform::run_relay(config)
        }
    }
}
