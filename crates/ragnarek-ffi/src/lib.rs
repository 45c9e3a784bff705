//! # ragnarek-ffi
//!
//! Flat C-linkage surface over the Ragnarek widgets, for callers built with
//! another toolchain. See `include/ragnarek.h` for the C declarations.
//!
//! Two symbol sets are compiled from one definition:
//! - [`live`]: forwards to the `Ui` bound with [`bind`]
//! - [`stub`]: does nothing, for linking when no toolkit is present
//!
//! The `stub` feature picks which set is exported under the unmangled
//! `ragnarek_*` names. Entry points never unwind into C; a null out-pointer
//! makes the call a no-op that returns `false`.

#[macro_use]
mod surface;

mod api;
pub mod live;
mod raw;
pub mod stub;

#[cfg(test)]
pub(crate) mod testing;

pub use api::WidgetApi;
pub use live::{bind, is_bound, LiveWidgets};
pub use stub::StubWidgets;
pub use surface::Signature;

/// Signatures of the set exported under the unmangled names.
pub fn exported_signatures() -> Vec<Signature> {
    if cfg!(feature = "stub") { stub::signatures() } else { live::signatures() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragnarek_core::{ChildFlags, WindowFlags};
    use crate::testing::{context, TestFont};

    const HEADER: &str = include_str!("../include/ragnarek.h");

    #[test]
    fn live_and_stub_export_identical_signatures() {
        let live = live::signatures();
        let stub = stub::signatures();
        assert_eq!(live.len(), 24);
        for (l, s) in live.iter().zip(&stub) {
            assert_eq!(l, s, "{} differs between live and stub", l.name);
        }
        assert_eq!(live.len(), stub.len());
    }

    #[test]
    fn header_declares_every_entry_point() {
        for sig in exported_signatures() {
            assert!(HEADER.contains(&format!(" {}(", sig.name)), "{} missing from ragnarek.h", sig.name);
        }
        assert_eq!(HEADER.matches(" ragnarek_").count(), 24);
    }

    #[test]
    fn stub_entry_points_return_placeholders() {
        let mut on = true;
        unsafe {
            assert!(stub::ragnarek_begin_child(c"panel".as_ptr(), 10.0, 10.0, 0, 0));
            assert!(stub::ragnarek_tab(true, 3, c"a".as_ptr(), 47.0, 47.0));
            assert!(!stub::ragnarek_checkbox(c"x".as_ptr(), &mut on));
            assert!(!stub::ragnarek_begin_combo(c"c".as_ptr(), c"".as_ptr(), 0, false, 0));
            stub::ragnarek_end_child();
        }
        assert!(on);
    }

    #[test]
    fn null_out_pointers_are_no_ops() {
        let mut ctx = context();
        let _ = ctx.frame(&TestFont, 1.0, |ui| {
            ui.begin("host", WindowFlags::empty());
            bind(ui, || unsafe {
                assert!(!live::ragnarek_checkbox(c"x".as_ptr(), std::ptr::null_mut()));
                assert!(!live::ragnarek_slider_int(c"s".as_ptr(), std::ptr::null_mut(), 0, 10, c"%d".as_ptr(), 0));
                live::ragnarek_multi_combo(c"m".as_ptr(), std::ptr::null_mut(), std::ptr::null(), 3);
                live::ragnarek_esp_preview(
                    std::ptr::null_mut(),
                    std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(),
                    std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(),
                    std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(),
                    std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(),
                    std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(),
                );
            });
            ui.end();
        });
    }

    #[test]
    fn live_entry_points_reach_the_bound_ui() {
        let mut ctx = context();
        let frame = ctx.frame(&TestFont, 1.0, |ui| {
            ui.begin("host", WindowFlags::empty());
            bind(ui, || unsafe {
                let open = live::ragnarek_begin_child(
                    c"General".as_ptr(), 300.0, 200.0, ChildFlags::BORDER.bits(), 0,
                );
                assert!(open);
                let mut value = 5;
                assert!(!live::ragnarek_slider_int(c"Field Of View".as_ptr(), &mut value, -180, 180, c"%d".as_ptr(), 0));
                assert_eq!(value, 5);
                live::ragnarek_end_child();
            });
            ui.end();
        });
        assert!(!frame.draw_list.cmd_buf.is_empty());
    }
}
