//! # ragnarek-dx11
//!
//! Standalone Win32 + Direct3D 11 host for the Ragnarek menu.
//! Opens a borderless window, creates the device (hardware, then WARP),
//! and runs the frame loop until the window is closed.
//!
//! The window, device and renderer only exist on Windows. The frame loop,
//! event translation and resource lifecycle are platform-neutral and are
//! tested everywhere through mock hosts and factories.

pub mod app;
pub mod batch;
pub mod config;
pub mod device;
pub mod events;
pub mod font;

#[cfg(windows)]
pub mod d3d11;
#[cfg(windows)]
pub mod win32;

pub use app::{launch, launch_status, run_loop, Host, Pump};
pub use config::WindowConfig;
pub use device::{DeviceError, DeviceFactory, DriverKind, GraphicsResources};
pub use events::{Applied, WindowEvent};
pub use font::MetricFont;

#[cfg(windows)]
pub use d3d11::{D3d11Factory, D3d11Host, D3d11Renderer};
#[cfg(windows)]
pub use win32::Window;

#[derive(Debug, thiserror::Error)]
pub enum Dx11Error {
    #[error("window creation failed: {0}")]
    Window(String),
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error("shader compilation failed: {0}")]
    Shader(String),
    #[error("resource creation failed: {0}")]
    Resource(String),
    #[error("present failed: {0}")]
    Present(String),
}

/// Open the default window and run `app` every frame. Returns the process
/// exit status: `0` after the window closes, `1` on startup or frame failure.
#[cfg(windows)]
pub fn run<A>(config: WindowConfig, app: A) -> std::process::ExitCode
where
    A: FnMut(&mut ragnarek_core::Ui<'_>),
{
    launch(move || D3d11Host::new(config), app)
}
