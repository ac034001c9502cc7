//! Command-line interface.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{ApiClient, Credentials};
use crate::config::{Config, ConfigError};
use crate::router::{LoadStrategy, NavigationTarget, Resolution, Router};
use crate::store::{AppState, Store};
use crate::views::{ApiViewLoader, Interaction, LoadRequest, Page, RenderContext, ViewLoader};

#[derive(Debug, Parser)]
#[command(name = "voogle")]
#[command(about = "Terminal client for the Voogle video platform", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/voogle/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Username for the API
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the API
    #[arg(short, long)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the route table
    Routes,
    /// Resolve a location and print the matched route
    Resolve { location: String },
    /// Resolve a location, load its view and print the rendered page
    Open { location: String },
    /// Interactive terminal client (default)
    Tui,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(username) = &self.username {
            config.session.username = Some(username.clone());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        }
    }
}

/// Route table as aligned columns.
pub fn format_routes(router: &Router) -> String {
    let routes = router.routes();
    let name_width = routes.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);
    let path_width = routes
        .iter()
        .map(|r| r.pattern.as_str().len())
        .max()
        .unwrap_or(0)
        .max(7);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<path_width$}  STRATEGY",
        "NAME", "PATTERN"
    );
    for route in routes {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<path_width$}  {}",
            route.name,
            route.pattern.as_str(),
            route.strategy.as_str()
        );
    }
    out
}

pub fn format_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "path:     {}", resolution.path);
    let _ = writeln!(out, "href:     {}", resolution.href());
    let _ = writeln!(out, "route:    {}", resolution.route_name);
    let _ = writeln!(out, "view:     {}", resolution.view);
    let _ = writeln!(out, "strategy: {}", resolution.strategy.as_str());
    for (name, value) in &resolution.params {
        let _ = writeln!(out, "param:    {} = {}", name, value);
    }
    out
}

/// Resolve `location`, load the page if lazy, and render it as markup.
pub async fn open(
    router: &Router,
    store: &Store,
    loader: &dyn ViewLoader,
    location: &str,
) -> anyhow::Result<String> {
    let resolution = router.resolve_target(&NavigationTarget::location(location))?;
    let page = match resolution.strategy {
        LoadStrategy::Eager => Page::eager(&resolution)
            .ok_or_else(|| anyhow::anyhow!("{} has no eager page", resolution.view))?,
        LoadStrategy::Lazy => {
            let request = LoadRequest::from_resolution(1, &resolution);
            loader
                .load(&request)
                .await
                .map_err(|err| anyhow::anyhow!("Could not load {}: {}", resolution.view, err))?
        }
    };

    let context = RenderContext::new(store.state(), Some(router.clone()));
    Ok(page.render(&context, &Interaction::default()).to_string())
}

/// Loader and store for one-shot commands. With credentials the store starts
/// logged in.
pub fn one_shot(
    config: &Config,
    credentials: Option<Credentials>,
) -> anyhow::Result<(Store, ApiViewLoader)> {
    let store = Store::new(AppState::with_click_counter(
        config.session.initial_click_counter,
    ));
    let mut api = ApiClient::new(&config.api)?;
    if let Some(credentials) = credentials {
        store.set_log_state(true);
        store.set_user(Some(credentials.username.clone()));
        api = api.with_credentials(credentials);
    }
    let loader = ApiViewLoader::new(api, store.clone(), config.api.page_size);
    Ok((store, loader))
}
