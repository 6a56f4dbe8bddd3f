// Copyright 2024 The ime-relay Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Window procedure subclassing.
//!
//! The hooked window's procedure is replaced by `subclass_proc`, which
//! looks the window up in a per-thread table to find its interceptor and the
//! procedure it replaced.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::ptr;
use std::rc::Rc;

use winapi::shared::basetsd::LONG_PTR;
use winapi::shared::minwindef::{FALSE, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::HWND;
use winapi::um::processthreadsapi::GetCurrentThreadId;
use winapi::um::winuser::{
    CallWindowProcW, DefWindowProcW, GetWindowLongPtrW, GetWindowThreadProcessId, IsWindow,
    SetWindowLongPtrW, GWLP_WNDPROC, WNDPROC,
};

use crate::msgs::WM_NCDESTROY;
use crate::{Error, Message, MessageInterceptor, PreviousHandler, RawSurface};

struct Hook {
    /// The window procedure we replaced, as stored in `GWLP_WNDPROC`.
    previous: LONG_PTR,
    interceptor: Rc<dyn MessageInterceptor>,
    /// Uninstalled, but another procedure was chained on top of ours so the
    /// original could not be put back. Messages still pass through.
    retired: bool,
}

thread_local! {
    static HOOKS: RefCell<HashMap<isize, Hook>> = RefCell::new(HashMap::new());
}

type SubclassProc = unsafe extern "system" fn(HWND, UINT, WPARAM, LPARAM) -> LRESULT;

fn subclass_proc_ptr() -> LONG_PTR {
    subclass_proc as SubclassProc as LONG_PTR
}

pub(super) fn install(
    surface: RawSurface,
    interceptor: Rc<dyn MessageInterceptor>,
) -> Result<(), Error> {
    let raw = surface.as_raw();
    let hwnd = raw as HWND;
    unsafe {
        if IsWindow(hwnd) == FALSE {
            return Err(Error::InvalidSurface(surface));
        }
        if GetWindowThreadProcessId(hwnd, ptr::null_mut()) != GetCurrentThreadId() {
            return Err(Error::WrongThread(surface));
        }
    }

    let revived = HOOKS.with(|hooks| match hooks.borrow_mut().get_mut(&raw) {
        Some(hook) if hook.retired => {
            hook.interceptor = interceptor.clone();
            hook.retired = false;
            Ok(true)
        }
        Some(_) => Err(Error::AlreadyHooked(surface)),
        None => Ok(false),
    })?;
    if revived {
        tracing::debug!(?surface, "reusing a retired window procedure hook");
        return Ok(());
    }

    // The table entry must exist before the swap, since the new procedure
    // may run as soon as it is installed.
    HOOKS.with(|hooks| {
        hooks.borrow_mut().insert(
            raw,
            Hook {
                previous: 0,
                interceptor,
                retired: false,
            },
        )
    });
    let entry = scopeguard::guard(raw, |raw| {
        HOOKS.with(|hooks| hooks.borrow_mut().remove(&raw));
    });

    let previous = unsafe { SetWindowLongPtrW(hwnd, GWLP_WNDPROC, subclass_proc_ptr()) };
    if previous == 0 {
        return Err(Error::Install {
            surface,
            source: io::Error::last_os_error(),
        });
    }
    HOOKS.with(|hooks| {
        if let Some(hook) = hooks.borrow_mut().get_mut(&raw) {
            hook.previous = previous;
        }
    });
    scopeguard::ScopeGuard::into_inner(entry);
    tracing::debug!(?surface, "window procedure hooked");
    Ok(())
}

pub(super) fn uninstall(surface: RawSurface) {
    let raw = surface.as_raw();
    let hwnd = raw as HWND;
    let Some(previous) = HOOKS.with(|hooks| hooks.borrow().get(&raw).map(|hook| hook.previous))
    else {
        return;
    };

    if unsafe { IsWindow(hwnd) } == FALSE {
        // Destroyed behind our back; there is nothing left to restore.
        HOOKS.with(|hooks| hooks.borrow_mut().remove(&raw));
        return;
    }

    let current = unsafe { GetWindowLongPtrW(hwnd, GWLP_WNDPROC) };
    if current != subclass_proc_ptr() {
        tracing::warn!(
            ?surface,
            "window procedure was subclassed again after the IME hook, leaving it in place"
        );
        HOOKS.with(|hooks| {
            if let Some(hook) = hooks.borrow_mut().get_mut(&raw) {
                hook.retired = true;
            }
        });
        return;
    }

    unsafe { SetWindowLongPtrW(hwnd, GWLP_WNDPROC, previous) };
    HOOKS.with(|hooks| hooks.borrow_mut().remove(&raw));
    tracing::debug!(?surface, "window procedure restored");
}

unsafe extern "system" fn subclass_proc(
    hwnd: HWND,
    msg: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let raw = hwnd as isize;
    let hook = HOOKS.with(|hooks| {
        hooks
            .borrow()
            .get(&raw)
            .map(|hook| (hook.previous, hook.interceptor.clone()))
    });
    let Some((previous, interceptor)) = hook else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    // SAFETY: `previous` was read from GWLP_WNDPROC, which always holds a
    // valid window procedure pointer.
    let previous_proc: WNDPROC = unsafe { std::mem::transmute::<LONG_PTR, WNDPROC>(previous) };
    let mut forward = |message: &Message| unsafe {
        CallWindowProcW(
            previous_proc,
            hwnd,
            message.msg,
            message.wparam,
            message.lparam,
        )
    };
    let surface = RawSurface::from_raw(raw);
    let message = Message {
        surface,
        msg,
        wparam,
        lparam,
    };
    let result = interceptor.intercept(message, PreviousHandler::new(&mut forward));

    // Last message the window receives: drop the hook even if nobody detaches.
    if msg == WM_NCDESTROY {
        let removed = HOOKS.with(|hooks| hooks.borrow_mut().remove(&raw));
        if removed.is_some() {
            unsafe { SetWindowLongPtrW(hwnd, GWLP_WNDPROC, previous) };
            interceptor.surface_destroyed(surface);
        }
    }
    result
}
