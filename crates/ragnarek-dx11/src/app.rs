//! Frame loop and process exit policy.
//!
//! ```text
//! loop {
//!     pump OS messages ── quit? → exit 0
//!     apply deferred resize
//!     build the UI frame
//!     render + present
//! }
//! ```

use std::{fmt::Display, process::ExitCode, time::Instant};

use ragnarek_core::{Context, FontAtlas, RenderFrame, Ui, Vec2};

use crate::Dx11Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    Continue,
    Quit,
}

/// A window plus whatever draws into it.
pub trait Host {
    /// Drain pending OS messages into `ctx`.
    fn pump(&mut self, ctx: &mut Context) -> Pump;
    /// Work deferred from message handling, run before each frame.
    fn prepare(&mut self) -> Result<(), Dx11Error>;
    fn font(&self) -> &dyn FontAtlas;
    fn display_size(&self) -> Vec2;
    /// Clear, draw `frame` and present.
    fn present(&mut self, frame: RenderFrame<'_>) -> Result<(), Dx11Error>;
}

/// Run frames until the host reports a quit.
pub fn run_loop<H, A>(host: &mut H, ctx: &mut Context, mut app: A) -> Result<(), Dx11Error>
where
    H: Host,
    A: FnMut(&mut Ui<'_>),
{
    let mut last = Instant::now();
    loop {
        if host.pump(ctx) == Pump::Quit {
            log::info!("quit requested");
            return Ok(());
        }
        host.prepare()?;

        let now = Instant::now();
        ctx.set_delta_time((now - last).as_secs_f32());
        last = now;

        let frame = ctx.frame(host.font(), 1.0, |ui| app(ui));
        host.present(frame)?;
    }
}

/// Create the host, run the loop and map the outcome to a process status:
/// `0` after a normal quit, `1` when the host cannot be created or a frame
/// fails.
pub fn launch_status<H, E, C, A>(create: C, app: A) -> u8
where
    H: Host,
    E: Display,
    C: FnOnce() -> Result<H, E>,
    A: FnMut(&mut Ui<'_>),
{
    let mut host = match create() {
        Ok(h)  => h,
        Err(e) => {
            log::error!("startup failed: {e}");
            return 1;
        }
    };
    let mut ctx = Context::new();
    ctx.set_display_size(host.display_size());

    match run_loop(&mut host, &mut ctx, app) {
        Ok(())  => 0,
        Err(e)  => {
            log::error!("frame loop aborted: {e}");
            1
        }
    }
}

pub fn launch<H, E, C, A>(create: C, app: A) -> ExitCode
where
    H: Host,
    E: Display,
    C: FnOnce() -> Result<H, E>,
    A: FnMut(&mut Ui<'_>),
{
    ExitCode::from(launch_status(create, app))
}
