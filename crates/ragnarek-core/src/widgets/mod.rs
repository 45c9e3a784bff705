//! Widget implementations. Each is a free function over [`Ui`](crate::Ui);
//! the thin wrappers on `Ui` are the public entry points.

pub mod button;
pub mod checkbox;
pub mod child;
pub mod color_picker;
pub mod combo;
pub mod esp_preview;
pub mod input_text;
pub mod keybind;
pub mod slider;
pub mod text;
pub mod window;
