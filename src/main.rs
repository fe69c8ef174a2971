use clap::Parser;
use p360::api::ApiError;
use p360::cli::{Cli, Command};
use p360::config::{load_config, resolve, CliOverrides, ConfigError};
use p360::errors::{map_compare_error, map_config_error, map_load_error, map_write_error};
use p360::handlers::{handle_check, handle_compare, handle_fetch, handle_list, handle_options, load_catalog};
use p360::operations::WriteError;
use p360::state::SessionState;
use p360::ui::show_error;
use p360_core::CatalogError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

fn init_logging(verbose: bool) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if verbose {
        let _ = TermLogger::init(LevelFilter::Debug, log_config, TerminalMode::Stderr, ColorChoice::Auto);
    } else if let Ok(log_file) = File::create("p360.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

async fn run(cli: Cli, state: &mut SessionState) -> anyhow::Result<()> {
    let payload = cli.payload.as_deref();

    match &cli.command {
        Command::Options => {
            handle_options(state);
            Ok(())
        }
        Command::Fetch(args) => handle_fetch(state, payload, args).await,
        Command::List(args) => {
            load_catalog(state, payload).await?;
            handle_list(state, args).await
        }
        Command::Compare(args) => {
            load_catalog(state, payload).await?;
            handle_compare(state, args)
        }
        Command::Check => {
            load_catalog(state, payload).await?;
            handle_check(state)
        }
    }
}

fn report(error: &anyhow::Error) {
    let (title, message, details) = if let Some(e) = error.downcast_ref::<WriteError>() {
        map_write_error(e)
    } else if let Some(e) = error.downcast_ref::<ApiError>() {
        map_load_error(e)
    } else if let Some(e) = error.downcast_ref::<CatalogError>() {
        map_compare_error(e)
    } else if let Some(e) = error.downcast_ref::<ConfigError>() {
        map_config_error(e, None)
    } else {
        ("Error".to_string(), error.to_string(), String::new())
    };
    show_error(title, message, details);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    init_logging(cli.verbose);

    log::info!("p360 starting: {:?}", cli.command);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let (title, message, details) = map_config_error(&e, cli.config.as_deref());
            show_error(title, message, details);
            std::process::exit(1);
        }
    };

    let overrides = CliOverrides {
        username: cli.user.clone(),
        password: cli.password.clone(),
        items_per_page: None,
    };
    let mut state = SessionState::new(resolve(&config, &overrides));

    if let Err(e) = run(cli, &mut state).await {
        log::error!("{:#}", e);
        report(&e);
        std::process::exit(1);
    }
}
