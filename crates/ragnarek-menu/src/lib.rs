//! Ragnarek menu: the per-frame layout driver.
//!
//! [`Menu::draw`] lays out the sidebar, the fading page area and the info
//! bar on top of `ragnarek-core`. Page contents are data in [`PAGES`];
//! every edited value lives in [`Settings`].

pub mod fade;
pub mod info_bar;
pub mod menu;
pub mod pages;
pub mod settings;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use fade::TabFader;
pub use info_bar::InfoBar;
pub use menu::{Menu, MENU_SIZE};
pub use pages::{picker_flags, Assets, Page, Panel, PAGES};
pub use settings::Settings;
pub use theme::Theme;
