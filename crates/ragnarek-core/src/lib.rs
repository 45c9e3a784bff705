//! # ragnarek-core
//!
//! Immediate-mode widget engine behind the Ragnarek overlay. Each frame the
//! caller feeds input into a [`Context`], builds widgets through [`Ui`] and
//! hands the finished [`DrawList`] to a backend:
//! - `ragnarek-dx11`: Win32 window and Direct3D 11 renderer
//! - `ragnarek-ffi`: flat C surface over the same widgets

pub mod context;
pub mod draw_list;
pub mod flags;
pub mod format;
pub mod id;
pub mod input;
pub mod layout;
pub mod math;
pub mod renderer;
pub mod style;
pub mod ui;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

// ─── re-exports ──────────────────────────────────────────────────────────────
pub use context::Context;
pub use draw_list::{Corners, DrawCmd, DrawList, DrawVert, TextureId};
pub use flags::{ChildFlags, ColorEditFlags, ComboFlags, SelectableFlags, SliderFlags, WindowFlags};
pub use id::Id;
pub use input::{InputState, Key, Modifiers, MouseButton};
pub use math::{Color, Rect, Vec2};
pub use renderer::{FontAtlas, GlyphInfo, RenderFrame, Renderer};
pub use style::{Style, StyleColor, StyleVar};
pub use ui::Ui;
pub use widgets::esp_preview::EspPreview;
pub use widgets::keybind::key_name;

pub mod prelude {
    pub use super::{
        ChildFlags, Color, ColorEditFlags, ComboFlags, Context, FontAtlas, Key, MouseButton, Rect, Renderer,
        SelectableFlags, SliderFlags, StyleColor, StyleVar, TextureId, Ui, Vec2, WindowFlags,
    };
}
