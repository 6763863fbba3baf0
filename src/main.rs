// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use diagramscene::{init_logging, load_config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Optional first argument: path to a .toml or .json config file
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, load_failure) = load_config(explicit.as_deref());

    init_logging(&config.logging.level)?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "Starting DiagramScene");
    if let Some(failure) = load_failure {
        failure.report();
    }

    run(config)
}

#[cfg(feature = "gtk")]
fn run(config: diagramscene::Config) -> anyhow::Result<()> {
    let code = diagramscene_ui::gtk_app::run(config);
    if code.value() != 0 {
        anyhow::bail!("GTK application exited with status {}", code.value());
    }
    Ok(())
}

#[cfg(not(feature = "gtk"))]
fn run(_config: diagramscene::Config) -> anyhow::Result<()> {
    anyhow::bail!("this build has no user interface; rebuild with the `gtk` feature")
}
