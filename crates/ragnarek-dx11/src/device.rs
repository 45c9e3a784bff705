//! Graphics device lifecycle.
//!
//! [`GraphicsResources`] owns the swap chain, device, immediate context and
//! back-buffer render target. Each slot is an `Option` that is `take`n on
//! release, so a slot is released at most once no matter how creation ended.
//! The actual API calls sit behind [`DeviceFactory`]; the Direct3D 11
//! implementation lives in `d3d11.rs`.

use std::fmt;

// ─── Factory ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Hardware,
    /// Software rasteriser, used when the hardware driver is unsupported.
    Warp,
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Self::Hardware => "hardware", Self::Warp => "WARP" })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("{0} driver is not supported on this machine")]
    Unsupported(DriverKind),
    #[error("device creation failed: {0}")]
    Create(String),
    #[error("render target creation failed: {0}")]
    RenderTarget(String),
    #[error("swap chain resize failed: {0}")]
    Resize(String),
}

/// One device-and-swap-chain creation call plus the render-target calls.
pub trait DeviceFactory {
    type SwapChain;
    type Device;
    type Context;
    type RenderTarget;

    fn create_device(
        &mut self,
        driver: DriverKind,
    ) -> Result<(Self::SwapChain, Self::Device, Self::Context), DeviceError>;

    fn create_render_target(
        &mut self,
        swap_chain: &Self::SwapChain,
        device:     &Self::Device,
    ) -> Result<Self::RenderTarget, DeviceError>;

    /// Resize the swap chain buffers. No render target may be alive.
    fn resize_buffers(&mut self, swap_chain: &Self::SwapChain, width: u32, height: u32) -> Result<(), DeviceError>;
}

// ─── Resources ───────────────────────────────────────────────────────────────

pub struct GraphicsResources<F: DeviceFactory> {
    render_target:  Option<F::RenderTarget>,
    context:        Option<F::Context>,
    swap_chain:     Option<F::SwapChain>,
    device:         Option<F::Device>,
    driver:         DriverKind,
    pending_resize: Option<(u32, u32)>,
}

impl<F: DeviceFactory> GraphicsResources<F> {
    /// Create every resource, retrying once with WARP when the hardware
    /// driver is unsupported. On error nothing is left alive.
    pub fn create(factory: &mut F) -> Result<Self, DeviceError> {
        let (driver, (swap_chain, device, context)) = match factory.create_device(DriverKind::Hardware) {
            Ok(parts) => (DriverKind::Hardware, parts),
            Err(DeviceError::Unsupported(_)) => {
                log::warn!("hardware driver unsupported, falling back to WARP");
                (DriverKind::Warp, factory.create_device(DriverKind::Warp)?)
            }
            Err(e) => return Err(e),
        };
        log::info!("graphics device created ({driver})");

        let mut res = Self {
            render_target:  None,
            context:        Some(context),
            swap_chain:     Some(swap_chain),
            device:         Some(device),
            driver,
            pending_resize: None,
        };
        // `res` drops on the error path and releases what exists.
        res.render_target = Some(res.create_render_target(factory)?);
        Ok(res)
    }

    fn create_render_target(&self, factory: &mut F) -> Result<F::RenderTarget, DeviceError> {
        match (&self.swap_chain, &self.device) {
            (Some(sc), Some(dev)) => factory.create_render_target(sc, dev),
            _ => Err(DeviceError::RenderTarget("device already released".to_owned())),
        }
    }

    #[inline] pub fn driver(&self) -> DriverKind { self.driver }
    #[inline] pub fn swap_chain(&self)    -> Option<&F::SwapChain>    { self.swap_chain.as_ref() }
    #[inline] pub fn device(&self)        -> Option<&F::Device>       { self.device.as_ref() }
    #[inline] pub fn context(&self)       -> Option<&F::Context>      { self.context.as_ref() }
    #[inline] pub fn render_target(&self) -> Option<&F::RenderTarget> { self.render_target.as_ref() }
    #[inline] pub fn pending_resize(&self) -> Option<(u32, u32)> { self.pending_resize }

    /// Record a new client size. Zero-sized (minimised) requests are ignored.
    pub fn request_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 { return; }
        self.pending_resize = Some((width, height));
    }

    /// Apply a recorded resize: drop the render target, resize the buffers,
    /// recreate the target. Returns whether anything happened.
    pub fn apply_pending_resize(&mut self, factory: &mut F) -> Result<bool, DeviceError> {
        let Some((w, h)) = self.pending_resize.take() else { return Ok(false) };
        log::debug!("resizing swap chain to {w}x{h}");
        drop(self.render_target.take());
        if let Some(sc) = &self.swap_chain {
            factory.resize_buffers(sc, w, h)?;
        }
        self.render_target = Some(self.create_render_target(factory)?);
        Ok(true)
    }

    /// Release render target, swap chain, context and device in that order.
    /// Idempotent.
    pub fn release(&mut self) {
        let any = self.device.is_some();
        drop(self.render_target.take());
        drop(self.swap_chain.take());
        drop(self.context.take());
        drop(self.device.take());
        if any { log::info!("graphics device released"); }
    }
}

impl<F: DeviceFactory> Drop for GraphicsResources<F> {
    fn drop(&mut self) { self.release(); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Appends its name to the shared log when dropped.
    struct Tracked(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Drop for Tracked {
        fn drop(&mut self) { self.1.borrow_mut().push(self.0); }
    }

    #[derive(Default)]
    struct MockFactory {
        released:     Rc<RefCell<Vec<&'static str>>>,
        hw_error:     Option<fn() -> DeviceError>,
        warp_error:   Option<fn() -> DeviceError>,
        rtv_fails:    bool,
        attempts:     Vec<DriverKind>,
        resized:      Vec<(u32, u32)>,
        rtv_created:  usize,
    }

    impl MockFactory {
        fn tracked(&self, name: &'static str) -> Tracked { Tracked(name, self.released.clone()) }
        fn released(&self) -> Vec<&'static str> { self.released.borrow().clone() }
    }

    impl DeviceFactory for MockFactory {
        type SwapChain    = Tracked;
        type Device       = Tracked;
        type Context      = Tracked;
        type RenderTarget = Tracked;

        fn create_device(&mut self, driver: DriverKind) -> Result<(Tracked, Tracked, Tracked), DeviceError> {
            self.attempts.push(driver);
            let err = match driver {
                DriverKind::Hardware => self.hw_error,
                DriverKind::Warp     => self.warp_error,
            };
            if let Some(e) = err { return Err(e()); }
            Ok((self.tracked("swap_chain"), self.tracked("device"), self.tracked("context")))
        }

        fn create_render_target(&mut self, _: &Tracked, _: &Tracked) -> Result<Tracked, DeviceError> {
            if self.rtv_fails { return Err(DeviceError::RenderTarget("no back buffer".into())); }
            self.rtv_created += 1;
            Ok(self.tracked("render_target"))
        }

        fn resize_buffers(&mut self, _: &Tracked, w: u32, h: u32) -> Result<(), DeviceError> {
            self.resized.push((w, h));
            Ok(())
        }
    }

    #[test]
    fn hardware_path_creates_everything() {
        let mut f = MockFactory::default();
        let res = GraphicsResources::create(&mut f).unwrap();
        assert_eq!(res.driver(), DriverKind::Hardware);
        assert!(res.render_target().is_some() && res.context().is_some());
        assert_eq!(f.attempts, [DriverKind::Hardware]);
    }

    #[test]
    fn unsupported_hardware_falls_back_to_warp() {
        let mut f = MockFactory { hw_error: Some(|| DeviceError::Unsupported(DriverKind::Hardware)), ..Default::default() };
        let res = GraphicsResources::create(&mut f).unwrap();
        assert_eq!(res.driver(), DriverKind::Warp);
        assert_eq!(f.attempts, [DriverKind::Hardware, DriverKind::Warp]);
    }

    #[test]
    fn other_failures_do_not_retry() {
        let mut f = MockFactory { hw_error: Some(|| DeviceError::Create("E_FAIL".into())), ..Default::default() };
        assert!(matches!(GraphicsResources::create(&mut f), Err(DeviceError::Create(_))));
        assert_eq!(f.attempts, [DriverKind::Hardware]);
        assert!(f.released().is_empty());
    }

    #[test]
    fn warp_failure_is_reported() {
        let mut f = MockFactory {
            hw_error:   Some(|| DeviceError::Unsupported(DriverKind::Hardware)),
            warp_error: Some(|| DeviceError::Unsupported(DriverKind::Warp)),
            ..Default::default()
        };
        assert!(matches!(GraphicsResources::create(&mut f), Err(DeviceError::Unsupported(DriverKind::Warp))));
    }

    #[test]
    fn partial_creation_releases_each_slot_once() {
        let mut f = MockFactory { rtv_fails: true, ..Default::default() };
        assert!(GraphicsResources::create(&mut f).is_err());
        assert_eq!(f.released(), ["swap_chain", "context", "device"]);
    }

    #[test]
    fn release_is_idempotent_and_ordered() {
        let mut f = MockFactory::default();
        let mut res = GraphicsResources::create(&mut f).unwrap();
        res.release();
        res.release();
        drop(res);
        assert_eq!(f.released(), ["render_target", "swap_chain", "context", "device"]);
    }

    #[test]
    fn resize_is_deferred_and_recreates_the_target() {
        let mut f = MockFactory::default();
        let mut res = GraphicsResources::create(&mut f).unwrap();

        res.request_resize(0, 600);
        assert_eq!(res.pending_resize(), None, "minimised sizes are ignored");

        res.request_resize(800, 600);
        res.request_resize(1024, 768);
        assert!(f.resized.is_empty());

        assert!(res.apply_pending_resize(&mut f).unwrap());
        assert_eq!(f.resized, [(1024, 768)]);
        assert_eq!(f.rtv_created, 2);
        assert_eq!(f.released(), ["render_target"]);

        assert!(!res.apply_pending_resize(&mut f).unwrap());
    }
}
