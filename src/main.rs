use anyhow::{Context, Result};
use clap::{App as ClapApp, Arg};
use taskdeck::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .value_name("URL")
                .help("Overrides the task service base URL for this run")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config
        .load(matches.value_of("config"))
        .context("Failed to load configuration")?;
    if let Some(url) = matches.value_of("url") {
        config
            .override_base_url(url)
            .context("Invalid --url value")?;
    }

    App::start(config).await
}
