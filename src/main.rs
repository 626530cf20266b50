mod api;
mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod theme;
mod utils;

use std::time::Duration;

use clap::Parser;

use api::{FetchClient, UreqTransport};
use app::{CommandContext, dispatch};
use cli::{Cli, Commands};
use config::Config;
use consts::PATH_PREFIX_ENV;
use crate::core::PathPrefix;
use error::AppError;
use output::{NumberFormat, TableStyle};
use theme::{Theme, ThemeStore};
use utils::{Timezone, set_debug};

fn main() {
    let cli = Cli::parse();
    let quiet = cli.wants_json() || matches!(cli.command, Some(Commands::Theme { .. }));
    let config = Config::load(quiet);
    let cli = cli.with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e}");
        if let AppError::Fetch { source, .. } = &e
            && source.status() == Some(404)
        {
            eprintln!("Hint: check --server and --path-prefix ({PATH_PREFIX_ENV}) for this deployment.");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    set_debug(cli.debug);

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    // Resolved once; flag beats runtime environment beats config file.
    let prefix = PathPrefix::resolve([
        cli.path_prefix.clone(),
        std::env::var(PATH_PREFIX_ENV).ok(),
        config.path_prefix.clone(),
    ]);

    let configured_theme = config.theme.as_deref().and_then(|raw| {
        Theme::parse(raw)
            .map_err(|e| eprintln!("Warning: {e} in config, ignoring"))
            .ok()
    });
    let theme_store = ThemeStore::default_location();
    let theme = Theme::resolve(
        theme_store.as_ref().and_then(ThemeStore::load),
        configured_theme,
        std::env::var("COLORFGBG").ok().as_deref(),
    );

    let transport = UreqTransport::new(config.timeout_secs.map(Duration::from_secs));
    let client = FetchClient::new(cli.server_url(), prefix, Box::new(transport));

    if cli.debug {
        eprintln!(
            "[debug] server={} prefix={:?} theme={} tz={}",
            cli.server_url(),
            client.prefix().as_str(),
            theme,
            timezone
        );
    }

    let ctx = CommandContext {
        cli,
        client: &client,
        style: TableStyle {
            use_color: cli.use_color(),
            compact: cli.compact,
            number_format,
            timezone,
            palette: theme.palette(),
            footer: config.footer_text.as_deref(),
        },
        theme,
        theme_store: theme_store.as_ref(),
    };
    dispatch(&ctx)
}
