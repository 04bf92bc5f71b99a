use std::io::Result;

pub(crate) fn is_stdout_interactive() -> bool {
    // SAFETY: isatty only inspects the given file descriptor.
    1 == unsafe { libc::isatty(libc::STDOUT_FILENO) }
}

pub(crate) fn is_stderr_interactive() -> bool {
    // SAFETY: isatty only inspects the given file descriptor.
    1 == unsafe { libc::isatty(libc::STDERR_FILENO) }
}

/// Unix terminals process ANSI escape sequences without further ado.
pub(crate) fn enable_virtual_terminal() -> Result<()> {
    Ok(())
}
