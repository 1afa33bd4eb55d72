//! occi-model - OCCI category registry CLI

use clap::Parser;

use occi_model::cli::App;
use occi_model::config::Config;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    let config = Config::load()?;

    // Initialize logging
    let filter = if app.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run(config)
}
