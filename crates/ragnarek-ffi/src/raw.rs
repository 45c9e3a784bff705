//! Raw C argument conversion.
//!
//! Strings: null reads as `""`, invalid UTF-8 is replaced lossily.
//! Out-pointers: null yields `None` and the entry point returns its default.

use std::borrow::Cow;
use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};

pub(crate) unsafe fn text<'a>(p: *const c_char) -> Cow<'a, str> {
    if p.is_null() { return Cow::Borrowed(""); }
    CStr::from_ptr(p).to_string_lossy()
}

pub(crate) unsafe fn out<'a, T>(p: *mut T) -> Option<&'a mut T> {
    p.as_mut()
}

pub(crate) unsafe fn array<'a, const N: usize>(p: *mut f32) -> Option<&'a mut [f32; N]> {
    (p as *mut [f32; N]).as_mut()
}

pub(crate) unsafe fn read_array<const N: usize>(p: *const f32) -> Option<[f32; N]> {
    (p as *const [f32; N]).as_ref().copied()
}

pub(crate) unsafe fn slice<'a, T>(p: *mut T, count: c_int) -> Option<&'a mut [T]> {
    let len = usize::try_from(count).ok()?;
    if p.is_null() { return None; }
    Some(std::slice::from_raw_parts_mut(p, len))
}

/// `count` strings from a C array; a null array or negative count is `None`.
pub(crate) unsafe fn text_list<'a>(p: *const *const c_char, count: c_int) -> Option<Vec<Cow<'a, str>>> {
    let len = usize::try_from(count).ok()?;
    if p.is_null() { return None; }
    Some(std::slice::from_raw_parts(p, len).iter().map(|&s| text(s)).collect())
}

/// Run an entry point body, turning a panic into `default`.
pub(crate) fn guard<R>(name: &str, default: R, f: impl FnOnce() -> R) -> R {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        log::error!("{name} panicked");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_is_empty() {
        assert_eq!(unsafe { text(std::ptr::null()) }, "");
        assert_eq!(unsafe { text(c"Aimbot".as_ptr()) }, "Aimbot");
    }

    #[test]
    fn lists_reject_null_and_negative_counts() {
        let items = [c"a".as_ptr(), std::ptr::null(), c"c".as_ptr()];
        let list = unsafe { text_list(items.as_ptr(), 3) }.unwrap();
        assert_eq!(list, ["a", "", "c"]);
        assert!(unsafe { text_list(items.as_ptr(), -1) }.is_none());
        assert!(unsafe { text_list(std::ptr::null(), 2) }.is_none());
    }

    #[test]
    fn panics_become_the_default() {
        assert!(!guard("boom", false, || panic!("inside widget")));
        assert_eq!(guard("fine", 0, || 7), 7);
    }
}
