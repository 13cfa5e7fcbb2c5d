use std::path::Path;

use app::context::SnapContext;
use app::launch::launch;
use app::options::DaemonOptions;
use app::prepare::prepare;
use utils::app_config::AppConfig;
use utils::error::Result;

/// Prepare the runtime layout and replace this process with the daemon.
///
/// Returns only on failure; once the exec succeeds the daemon owns the
/// process.
pub fn run_cmd() -> Result<()> {
    let config = AppConfig::fetch()?;
    let context = SnapContext::from_env()?;
    log::debug!("Effective daemon configuration: {:?}", config.daemon);

    let config_file = prepare(&context, &config.layout)?;
    let options = DaemonOptions::new(&config.daemon.user, &config_file)
        .with_marker(Path::new(&config.daemon.container_marker));

    launch(&config.daemon.binary, &options)
}

pub fn prepare_cmd() -> Result<()> {
    let config = AppConfig::fetch()?;
    let context = SnapContext::from_env()?;

    let config_file = prepare(&context, &config.layout)?;
    println!("Prepared configuration at {}", config_file.display());

    Ok(())
}

/// Print the command line `run` would exec, without touching the layout.
pub fn options_cmd() -> Result<()> {
    let config = AppConfig::fetch()?;
    let context = SnapContext::from_env()?;

    let config_file = context.data_path(&config.layout.config_file);
    let options = DaemonOptions::new(&config.daemon.user, &config_file)
        .with_marker(Path::new(&config.daemon.container_marker));

    println!("{} {}", config.daemon.binary, options);

    Ok(())
}

pub fn config_cmd() -> Result<()> {
    let config = AppConfig::fetch()?;
    println!("{:#?}", config);

    Ok(())
}
