//! # Tintty
//!
//! This crate puts color into terminal output, but only when somebody is
//! watching. It has three parts:
//!
//!  1. [`cmd`] provides a library of styling *commands*, from individual SGR
//!     instructions such as [`SetForeground8`](crate::cmd::SetForeground8)
//!     all the way to [window titles](crate::cmd::DynSetWindowTitle). The
//!     [`color`] and [`style`] modules build on it with composite
//!     [`Colorant`](crate::color::Colorant)s and reusable
//!     [`Style`](crate::style::Style)s.
//!  2. [`gate`] decides whether those commands reach the output at all. A
//!     [`Gate`](crate::gate::Gate) combines the caller's per-stream
//!     [`Choice`](crate::gate::Choice) of always, never, or auto with the
//!     cached interactivity of the standard streams.
//!  3. [`enable_virtual_terminal`] flips the Windows console into processing
//!     ANSI escape sequences. On Unix, it does nothing.
//!
//! Commands are plain values that write their ANSI escape sequences when
//! displayed. Writing styled output hence is just string formatting:
//!
//! ```
//! # use tintty::cmd::ResetStyle;
//! # use tintty::color::Rgb;
//! # use tintty::gate::{Choice, Gate, StreamKind};
//! # use tintty::style::Style;
//! const CORAL: Rgb = Rgb::from_hex("#ff7f50");
//! let style = Style::default().bold().with_foreground(CORAL);
//!
//! let gate = Gate::with_choice(Choice::Always);
//! let text = format!("{}", gate.apply(StreamKind::Stdout, &style, "warning!"));
//! assert_eq!(text, "\x1b[1;38;2;255;127;80mwarning!\x1b[22;39m");
//! ```
//!
//! Since the gate is a plain value, too, there is no global state: every
//! command line tool owns its gate, typically configured from a
//! `--color=always|never|auto` flag, and libraries simply accept one.

mod api;
pub mod cmd;
pub mod color;
pub mod err;
pub mod gate;
pub mod style;
mod sys;

pub use api::{Command, Sgr};

/// Enable the processing of ANSI escape sequences.
///
/// On Windows, this function adds `ENABLE_VIRTUAL_TERMINAL_PROCESSING` to
/// the console modes of standard output and standard error, skipping
/// redirected streams. On all other platforms, it does nothing. Call it once
/// at startup, before writing any commands.
pub fn enable_virtual_terminal() -> std::io::Result<()> {
    sys::enable_virtual_terminal()
}
