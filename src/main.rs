use clap::Parser;

use voogle::api::ApiClient;
use voogle::cli::{self, Cli, Command};
use voogle::logging;
use voogle::router::Router;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let command = cli.command.clone().unwrap_or(Command::Tui);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if command == Command::Tui {
        logging::init_file_tracing(&config.logging.level, &config.log_file_path())?;
        let api = ApiClient::new(&config.api)?;
        tracing::info!(api = %api.base_url(), "Starting terminal client");
        return voogle::ui::run(&config, api, cli.credentials(), runtime.handle().clone());
    }

    logging::init_tracing(&config.logging.level);
    let router = Router::with_default_routes()?;

    match command {
        Command::Routes => print!("{}", cli::format_routes(&router)),
        Command::Resolve { location } => {
            let resolution = router.resolve_target(&location.as_str().into())?;
            print!("{}", cli::format_resolution(&resolution));
        }
        Command::Open { location } => {
            let (store, loader) = cli::one_shot(&config, cli.credentials())?;
            let page = runtime.block_on(cli::open(&router, &store, &loader, &location))?;
            print!("{}", page);
        }
        Command::Tui => {}
    }

    Ok(())
}
