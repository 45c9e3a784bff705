//! ragnarek-overlay: the menu in a borderless window of its own.
//!
//! `RUST_LOG` sets log verbosity. `RAGNAREK_WIDTH` / `RAGNAREK_HEIGHT`
//! override the default 1920x1080 window size.
//!
//! Exits with 0 when the window is closed and 1 when the window or the
//! graphics device cannot be created.

use std::process::ExitCode;

use anyhow::Context as _;

fn parse_dimension(var: &str, value: Option<&str>) -> anyhow::Result<Option<u32>> {
    let Some(raw) = value else { return Ok(None) };
    let n: u32 = raw.trim().parse().with_context(|| format!("{var}={raw:?} is not a pixel size"))?;
    anyhow::ensure!(n > 0, "{var} must be non-zero");
    Ok(Some(n))
}

fn env_dimension(var: &str) -> anyhow::Result<Option<u32>> {
    match std::env::var(var) {
        Ok(v) => parse_dimension(var, Some(&v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {var}")),
    }
}

#[cfg(windows)]
fn window_config() -> anyhow::Result<ragnarek::dx11::WindowConfig> {
    use obfstr::obfstr;

    let mut cfg = ragnarek::dx11::WindowConfig {
        title:      obfstr!("RAGNAREK").to_owned(),
        class_name: obfstr!("RagnarekOverlay").to_owned(),
        ..Default::default()
    };
    if let Some(w) = env_dimension("RAGNAREK_WIDTH")? { cfg.width = w; }
    if let Some(h) = env_dimension("RAGNAREK_HEIGHT")? { cfg.height = h; }
    Ok(cfg)
}

#[cfg(windows)]
fn main() -> ExitCode {
    use ragnarek::menu::{Assets, Menu};

    env_logger::init();

    let config = match window_config() {
        Ok(c)  => c,
        Err(e) => {
            log::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("starting {}x{}", config.width, config.height);

    let mut menu = Menu::new(Assets::default());
    ragnarek::dx11::run(config, move |ui| menu.draw(ui))
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    env_logger::init();
    if let Err(e) = env_dimension("RAGNAREK_WIDTH").and(env_dimension("RAGNAREK_HEIGHT")) {
        log::error!("{e:#}");
    }
    eprintln!("ragnarek-overlay needs Windows (Win32 + Direct3D 11).");
    ExitCode::FAILURE
}
