//! # Ragnarek
//!
//! In-game configuration menu skin: a custom widget set on an immediate-mode
//! engine, the tabbed menu that uses it, a Direct3D 11 host and a flat C
//! surface. This crate re-exports the engine and the optional parts.
//!
//! ## Feature flags
//!
//! | Flag   | Adds                                   |
//! |--------|----------------------------------------|
//! | `menu` | the tabbed menu and its settings model (default) |
//! | `dx11` | Win32 window + Direct3D 11 host        |
//! | `ffi`  | `extern "C"` widget surface            |
//! | `full` | all of the above                       |
//!
//! ## Minimal example
//!
//! ```rust
//! use ragnarek::prelude::*;
//!
//! let mut ctx = Context::new();
//! ctx.set_display_size(Vec2::new(1920.0, 1080.0));
//! // … hand a font atlas to ctx.frame(…) each tick and draw the result …
//! ```

pub use ragnarek_core::*;
pub use ragnarek_core as core;

/// Compile-time string obfuscation, used for window titles.
pub use obfstr;

#[cfg(feature = "menu")]
pub mod menu {
    //! Tabbed menu, settings model and theme.
    pub use ragnarek_menu::*;
}

#[cfg(feature = "dx11")]
pub mod dx11 {
    //! Window, device and frame loop. The Direct3D types exist on Windows only.
    pub use ragnarek_dx11::*;
}

#[cfg(feature = "ffi")]
pub mod ffi {
    //! C-linkage widget surface.
    pub use ragnarek_ffi::*;
}

pub mod prelude {
    pub use crate::{
        Color,
        Context,
        Rect,
        Vec2,
        WindowFlags,
        draw_list::TextureId,
        flags::{ChildFlags, ColorEditFlags, ComboFlags, SelectableFlags, SliderFlags},
        input::{Key, MouseButton},
        renderer::{FontAtlas, Renderer},
        style::{Style, StyleColor, StyleVar},
        ui::Ui,
    };

    #[cfg(feature = "menu")]
    pub use crate::menu::{Menu, Settings, Theme};
}
