//! Platform access.
//!
//! This module answers two questions the rest of the crate cannot answer on
//! its own: whether a standard stream is connected to a terminal, and how to
//! switch the Windows console into processing ANSI escape sequences. Both
//! answers degrade gracefully, i.e., an unsupported platform simply counts
//! as non-interactive.

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "unix")]
pub(crate) use unix::{enable_virtual_terminal, is_stderr_interactive, is_stdout_interactive};

#[cfg(target_family = "windows")]
mod into_result;
#[cfg(target_family = "windows")]
mod windows;
#[cfg(target_family = "windows")]
pub(crate) use windows::{enable_virtual_terminal, is_stderr_interactive, is_stdout_interactive};

#[cfg(not(any(target_family = "unix", target_family = "windows")))]
mod fallback {
    pub(crate) fn is_stdout_interactive() -> bool {
        false
    }

    pub(crate) fn is_stderr_interactive() -> bool {
        false
    }

    pub(crate) fn enable_virtual_terminal() -> std::io::Result<()> {
        Ok(())
    }
}
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
pub(crate) use fallback::{enable_virtual_terminal, is_stderr_interactive, is_stdout_interactive};
