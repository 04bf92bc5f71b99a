use std::io::Result;
use std::ptr::from_mut;

use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    self, CONSOLE_MODE as ConsoleMode, STD_ERROR_HANDLE, STD_OUTPUT_HANDLE,
};

use super::into_result::IntoResult;

fn std_handle(id: u32) -> Option<HANDLE> {
    // SAFETY: GetStdHandle has no preconditions.
    let handle = unsafe { Console::GetStdHandle(id) };
    if handle.is_null() || handle == INVALID_HANDLE_VALUE {
        None
    } else {
        Some(handle)
    }
}

fn console_mode(handle: HANDLE) -> Result<ConsoleMode> {
    let mut mode = 0;
    // SAFETY: the handle is valid and `mode` outlives the call.
    unsafe { Console::GetConsoleMode(handle, from_mut(&mut mode)) }.into_result()?;
    Ok(mode)
}

// A stream is interactive when its handle denotes a console, i.e., when
// GetConsoleMode succeeds. Redirected streams fail that call.
fn is_interactive(id: u32) -> bool {
    std_handle(id).is_some_and(|handle| console_mode(handle).is_ok())
}

pub(crate) fn is_stdout_interactive() -> bool {
    is_interactive(STD_OUTPUT_HANDLE)
}

pub(crate) fn is_stderr_interactive() -> bool {
    is_interactive(STD_ERROR_HANDLE)
}

/// Enable the processing of ANSI escape sequences.
///
/// This function adds `ENABLE_VIRTUAL_TERMINAL_PROCESSING` to the console
/// mode of standard output and standard error. Streams not connected to a
/// console are left alone.
pub(crate) fn enable_virtual_terminal() -> Result<()> {
    for id in [STD_OUTPUT_HANDLE, STD_ERROR_HANDLE] {
        let Some(handle) = std_handle(id) else {
            continue;
        };
        let Ok(mode) = console_mode(handle) else {
            continue;
        };

        if mode & Console::ENABLE_VIRTUAL_TERMINAL_PROCESSING == 0 {
            let mode = mode | Console::ENABLE_VIRTUAL_TERMINAL_PROCESSING;
            // SAFETY: the handle is valid for the duration of the call.
            unsafe { Console::SetConsoleMode(handle, mode) }.into_result()?;
        }
    }

    Ok(())
}
