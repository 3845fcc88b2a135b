use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use user_console::api::HttpUsersApi;
use user_console::config::Config;
use user_console::logging::init_tracing;
use user_console::ui::route::Route;

#[derive(Debug, Parser)]
#[command(name = "user-console", version, about = "Terminal console for a users REST API")]
struct Cli {
    /// Config file (defaults to the per-user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Page to open first, e.g. `/addUser` or `/userInfo/3`
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    open: String,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn start_route(&self) -> anyhow::Result<Route> {
        Route::parse(&self.open).ok_or_else(|| anyhow!("unknown route: {}", self.open))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.load_config().context("loading config")?;
    let start = cli.start_route()?;
    let api = HttpUsersApi::new(&config.api).context("building http client")?;

    user_console::ui::runtime::run(config, Arc::new(api), start).await
}
