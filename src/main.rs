use std::env;
use std::error::Error;
use std::process;

use log::{error, info};

use polysgd::experiment::{self, ExperimentConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = try_main() {
        error!("{}", e);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    // An optional JSON file overrides the default experiment.
    let config = match env::args().nth(1) {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };

    let results = experiment::run(&config)?;
    info!(
        "trained {} model(s), results in {}",
        results.len(),
        config.output_dir.display()
    );
    Ok(())
}
