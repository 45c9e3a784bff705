//! Borderless Win32 host window and its message pump.

use std::cell::RefCell;

use ragnarek_core::{MouseButton, Vec2};
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::UpdateWindow;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, PeekMessageW, PostQuitMessage,
    RegisterClassExW, ShowWindow, TranslateMessage, UnregisterClassW, CS_CLASSDC, MSG, PM_REMOVE,
    SC_KEYMENU, SIZE_MINIMIZED, SW_SHOWDEFAULT, WHEEL_DELTA, WINDOW_EX_STYLE, WM_CHAR, WM_DESTROY,
    WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDBLCLK, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN,
    WM_MBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL, WM_QUIT, WM_RBUTTONDOWN, WM_RBUTTONUP, WM_SIZE,
    WM_SYSCOMMAND, WM_SYSKEYDOWN, WM_SYSKEYUP, WNDCLASSEXW, WS_POPUP,
};

use crate::{config::WindowConfig, events::WindowEvent, Dx11Error};

thread_local! {
    /// Events produced by `wnd_proc` on this thread, drained by `pump`.
    static EVENTS: RefCell<Vec<WindowEvent>> = const { RefCell::new(Vec::new()) };
}

fn widestring(value: &str) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    std::ffi::OsStr::new(value).encode_wide().chain(std::iter::once(0)).collect()
}

#[inline]
fn lo_word(v: isize) -> i32 { (v & 0xffff) as i16 as i32 }
#[inline]
fn hi_word(v: isize) -> i32 { ((v >> 16) & 0xffff) as i16 as i32 }

pub struct Window {
    hwnd:      HWND,
    hinstance: HINSTANCE,
    class:     Vec<u16>,
}

impl Window {
    /// Register the class and create a `WS_POPUP` window at the origin.
    pub fn create(cfg: &WindowConfig) -> Result<Self, Dx11Error> {
        let class = widestring(&cfg.class_name);
        let title = widestring(&cfg.title);
        unsafe {
            let hinstance: HINSTANCE = GetModuleHandleW(PCWSTR::null())
                .map_err(|e| Dx11Error::Window(e.to_string()))?
                .into();

            let wc = WNDCLASSEXW {
                cbSize:        std::mem::size_of::<WNDCLASSEXW>() as u32,
                style:         CS_CLASSDC,
                lpfnWndProc:   Some(wnd_proc),
                hInstance:     hinstance,
                lpszClassName: PCWSTR(class.as_ptr()),
                ..Default::default()
            };
            if RegisterClassExW(&wc) == 0 {
                return Err(Dx11Error::Window("RegisterClassExW failed".to_owned()));
            }

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE(0),
                PCWSTR(class.as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_POPUP,
                0,
                0,
                cfg.width as i32,
                cfg.height as i32,
                None,
                None,
                hinstance,
                None,
            );
            let hwnd = match hwnd {
                Ok(h) => h,
                Err(e) => {
                    let _ = UnregisterClassW(PCWSTR(class.as_ptr()), hinstance);
                    return Err(Dx11Error::Window(e.to_string()));
                }
            };
            log::info!("window created ({}x{})", cfg.width, cfg.height);
            Ok(Self { hwnd, hinstance, class })
        }
    }

    #[inline] pub fn hwnd(&self) -> HWND { self.hwnd }

    pub fn show(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWDEFAULT);
            let _ = UpdateWindow(self.hwnd);
        }
    }

    /// Dispatch every queued message and return the resulting events.
    pub fn pump(&self) -> Vec<WindowEvent> {
        let mut quit = false;
        unsafe {
            let mut msg = MSG::default();
            while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
                if msg.message == WM_QUIT { quit = true; }
            }
        }
        let mut events = EVENTS.with(|q| std::mem::take(&mut *q.borrow_mut()));
        if quit { events.push(WindowEvent::Quit); }
        events
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
            let _ = UnregisterClassW(PCWSTR(self.class.as_ptr()), self.hinstance);
        }
        log::debug!("window destroyed");
    }
}

/// Translate one message; `None` for messages the UI does not care about.
fn translate(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<WindowEvent> {
    let button = |button, down| {
        unsafe {
            if down { SetCapture(hwnd); } else { let _ = ReleaseCapture(); }
        }
        Some(WindowEvent::Mouse { button, down })
    };
    match msg {
        WM_MOUSEMOVE => Some(WindowEvent::MouseMove(Vec2::new(lo_word(lparam.0) as f32, hi_word(lparam.0) as f32))),
        WM_LBUTTONDOWN | WM_LBUTTONDBLCLK => button(MouseButton::Left, true),
        WM_LBUTTONUP   => button(MouseButton::Left, false),
        WM_RBUTTONDOWN => button(MouseButton::Right, true),
        WM_RBUTTONUP   => button(MouseButton::Right, false),
        WM_MBUTTONDOWN => button(MouseButton::Middle, true),
        WM_MBUTTONUP   => button(MouseButton::Middle, false),
        WM_MOUSEWHEEL  => Some(WindowEvent::Wheel(hi_word(wparam.0 as isize) as f32 / WHEEL_DELTA as f32)),
        WM_KEYDOWN | WM_SYSKEYDOWN => Some(WindowEvent::Key { vk: wparam.0 as i32, down: true }),
        WM_KEYUP | WM_SYSKEYUP     => Some(WindowEvent::Key { vk: wparam.0 as i32, down: false }),
        WM_CHAR => char::from_u32(wparam.0 as u32).map(WindowEvent::Char),
        WM_SIZE if wparam.0 as u32 != SIZE_MINIMIZED => Some(WindowEvent::Resized {
            width:  (lparam.0 & 0xffff) as u32,
            height: ((lparam.0 >> 16) & 0xffff) as u32,
        }),
        _ => None,
    }
}

unsafe extern "system" fn wnd_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if let Some(ev) = translate(hwnd, msg, wparam, lparam) {
        EVENTS.with(|q| q.borrow_mut().push(ev));
    }
    match msg {
        WM_SIZE => LRESULT(0),
        // Swallow the ALT application menu.
        WM_SYSCOMMAND if (wparam.0 & 0xfff0) as u32 == SC_KEYMENU => LRESULT(0),
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
