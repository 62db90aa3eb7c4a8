use clap::Parser;
use std::error::Error;
use subnet_calc::config::Config;
use subnet_calc::logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    logging::init(logging::LOG_CONFIG_FILE, config.log_level)?;
    log::info!("#Start main()");

    subnet_calc::run(&config)
}
