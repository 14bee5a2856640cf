// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use truthcheck::{config, logging, server};

const HELP: &str = "\
truthcheck - TruthCheck verification backend

USAGE:
  truthcheck [OPTIONS]

OPTIONS:
  --config <PATH>   Path to settings.toml
  --bind <ADDR>     Address to listen on (overrides config and TRUTHCHECK_BIND_ADDR)
  -h, --help        Print this help
";

struct Flags {
    config_path: Option<PathBuf>,
    bind_addr: Option<String>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        bind_addr: args.opt_value_from_str("--bind")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }
    Ok(Some(flags))
}

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let dotenv = config::load_dotenv();
    logging::init();

    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "loaded environment file"),
        Ok(None) => {}
        Err(err) => {
            tracing::error!(error = %err, "failed to load environment file");
            return ExitCode::FAILURE;
        }
    }

    let mut config = match config::load(flags.config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    if let Some(bind_addr) = flags.bind_addr {
        config.server.bind_addr = bind_addr;
    }

    match server::serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server exited with an error");
            ExitCode::FAILURE
        }
    }
}
