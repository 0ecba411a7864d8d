#![windows_subsystem = "windows"]

use enlist_desktop::DesktopApp;
use enlist_kernel::config::{load_app_config, resolve_config_path};
use enlist_logger::Logger;

fn main() -> anyhow::Result<()> {
    let config_path = resolve_config_path();
    let config = load_app_config(config_path.as_deref())?;

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?.init()?;

    let registration = enlist_registration::init(&config.registration)?;

    DesktopApp::from_config(&config.window).launch(registration);

    Ok(())
}
