//! A library of styling commands.
//!
//! This module provides straight-forward struct and enum types that implement
//! the [`Command`] trait and, where applicable, also the [`Sgr`] trait.
//! Organized by topic, it covers the following commands:
//!
//!   * Styling content:
//!       * [`ResetStyle`]
//!       * [`SetDefaultForeground`], [`SetForeground8`], [`SetForeground24`],
//!         [`DynSetForeground8`], and [`DynSetForeground24`]
//!       * [`SetDefaultBackground`], [`SetBackground8`], [`SetBackground24`],
//!         [`DynSetBackground8`], and [`DynSetBackground24`]
//!       * [`SetForeground`] and [`SetBackground`]
//!       * [`Format::Bold`], [`Format::Thin`], [`Format::Regular`], and so on
//!         for the other text attributes
//!   * Window title management:
//!       * [`SaveWindowTitle`] and [`RestoreWindowTitle`]
//!       * [`DynSetWindowTitle`]
//!   * Screen management:
//!       * [`EraseScreen`]
//!
//! Most commands are implemented by zero-sized unit structs and enum variants.
//! Commands that require arguments come in one or both of two flavors, a
//! static flavor relying on const generics and a dynamic flavor storing the
//! arguments. The command name for the latter flavor starts with `Dyn`; it
//! obviously is *not* zero-sized.
//!
//! You can easily combine several commands into a compound command with the
//! [`fuse!`](crate::fuse) and [`fuse_sgr!`](crate::fuse_sgr) macros.
//!
//!
//! # Example
//!
//! Executing a command is as simple as writing its display:
//! ```
//! # use tintty::{fuse_sgr, Sgr, cmd::{Format, ResetStyle, SetForeground8}};
//! let text = format!(
//!     "{}Wow!{}",
//!     fuse_sgr!(Format::Bold, Format::Underlined, SetForeground8::<124>),
//!     ResetStyle
//! );
//! assert_eq!(text, "\x1b[1;4;38;5;124mWow!\x1b[0m");
//! ```

use crate::color::{AnsiColor, Rgb};
use crate::style::Layer;
use crate::{Command, Sgr};

macro_rules! declare_unit_struct {
    ($name:ident) => {
        #[doc = concat!("The unit `",stringify!($name),"` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;
    };
}

macro_rules! declare_n_struct {
    ($name:ident( $( $arg:ident : $typ:ty ),+ $(,)? )) => {
        #[doc = concat!("The dynamic `",stringify!($name),"(",stringify!($($arg),+),")` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name( $( pub $typ ),+ );
    };
    ($name:ident< $( $arg:ident : $typ:ty ),+ >) => {
        #[doc = concat!("The static `",stringify!($name),"<",stringify!($($arg),+),">` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name< $(const $arg: $typ),+ >;
    }
}

macro_rules! implement_command {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)? : $selfish:ident ; $output:ident $body:block) => {
        impl $(< $(const $arg: $typ),+ >)? $crate::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> core::fmt::Result {
                $body
            }
        }
    }
}

macro_rules! define_unit_command {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_command!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! implement_sgr {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)? : $selfish:ident ; $output:ident $body:block) => {
        impl $(< $(const $arg: $typ),+ >)? $crate::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? $crate::Sgr for $name $(< $($arg),+ >)? {
            #[inline]
            fn write_param(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> core::fmt::Result {
                $body
            }
        }

        impl $(< $(const $arg: $typ),+ >)?  ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("\x1b[")?;
                $crate::Sgr::write_param(self, f)?;
                f.write_str("m")
            }
        }
    };
}

macro_rules! define_unit_sgr {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_sgr!($name: self; f { f.write_str($ansi) });
    };
}

// Always emits the three-parameter `38;5;IDX` form, including for the sixteen
// ANSI colors, so that the wire format is a pure function of the index.
macro_rules! define_8bit_color {
    ($name:ident, $dyn_name:ident, $prefix:literal) => {
        declare_n_struct!($name<COLOR: u8>);
        implement_sgr!($name<COLOR: u8>: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&COLOR, f)
        });

        declare_n_struct!($dyn_name(COLOR: u8));
        implement_sgr!($dyn_name: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)
        });
    }
}

macro_rules! define_24bit_color {
    ($name:ident, $dyn_name:ident, $prefix:literal) => {
        declare_n_struct!($name<R: u8, G: u8, B: u8>);
        implement_sgr!($name<R: u8, G: u8, B: u8>: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&R, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&G, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&B, f)
        });

        declare_n_struct!($dyn_name(R: u8, G: u8, B: u8));
        implement_sgr!($dyn_name: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.1, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.2, f)
        });

        impl From<Rgb> for $dyn_name {
            fn from(value: Rgb) -> Self {
                Self(value[0], value[1], value[2])
            }
        }
    }
}

// ====================================== Library ======================================

// --------------------------------- Style Management ----------------------------------

define_unit_sgr!(ResetStyle, "0");

define_unit_sgr!(SetDefaultForeground, "39");
define_unit_sgr!(SetDefaultBackground, "49");

define_8bit_color!(SetForeground8, DynSetForeground8, "38;5;");
define_8bit_color!(SetBackground8, DynSetBackground8, "48;5;");

define_24bit_color!(SetForeground24, DynSetForeground24, "38;2;");
define_24bit_color!(SetBackground24, DynSetBackground24, "48;2;");

/// The dynamic `SetForeground(AnsiColor)` command.
///
/// This command uses the classic two-digit SGR parameters 30–37 and 90–97.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetForeground(pub AnsiColor);
implement_sgr!(SetForeground: self; f {
    <_ as ::core::fmt::Display>::fmt(&self.0.sgr_param(Layer::Foreground), f)
});

/// The dynamic `SetBackground(AnsiColor)` command.
///
/// This command uses the classic two-digit SGR parameters 40–47 and 100–107.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetBackground(pub AnsiColor);
implement_sgr!(SetBackground: self; f {
    <_ as ::core::fmt::Display>::fmt(&self.0.sgr_param(Layer::Background), f)
});

impl From<AnsiColor> for SetForeground {
    fn from(value: AnsiColor) -> Self {
        Self(value)
    }
}

impl From<AnsiColor> for SetBackground {
    fn from(value: AnsiColor) -> Self {
        Self(value)
    }
}

/// The enumeration of unit `Format` commands.
///
/// Each variant is a complete SGR command toggling one text attribute. For
/// composed styles tracking several attributes at once, see
/// [`Style`](crate::style::Style).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Format {
    Bold = 1,
    Thin = 2,
    Regular = 22,
    Italic = 3,
    Upright = 23,
    Underlined = 4,
    NotUnderlined = 24,
    Blinking = 5,
    NotBlinking = 25,
    Reversed = 7,
    NotReversed = 27,
    Hidden = 8,
    NotHidden = 28,
    Stricken = 9,
    NotStricken = 29,
}

impl Format {
    /// Get the format that restores default appearance.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn undo(&self) -> Self {
        use self::Format::*;

        match *self {
            Bold | Thin => Regular,
            Italic => Upright,
            Underlined => NotUnderlined,
            Blinking => NotBlinking,
            Reversed => NotReversed,
            Hidden => NotHidden,
            Stricken => NotStricken,
            _ => *self,
        }
    }
}

impl Sgr for Format {
    #[inline]
    fn write_param(&self, f: &mut core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        <_ as core::fmt::Display>::fmt(&(*self as u8), f)
    }
}

impl Command for Format {}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\x1b[")?;
        self.write_param(f)?;
        f.write_str("m")
    }
}

// --------------------------------- Window Management ---------------------------------

define_unit_command!(SaveWindowTitle, "\x1b[22;2t");
define_unit_command!(RestoreWindowTitle, "\x1b[23;2t");

/// The maximum byte length for window titles.
///
/// Some terminals silently drop overlong title sequences, so
/// [`DynSetWindowTitle`] truncates its title to this many bytes.
pub const MAX_TITLE_LEN: usize = 255;

/// The dynamic `DynSetWindowTitle(String)` command.
///
/// This command cannot be copied, only cloned. Upon display, it emits an OSC 2
/// sequence terminated by BEL. Titles longer than [`MAX_TITLE_LEN`] bytes are
/// truncated at the closest character boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynSetWindowTitle(pub String);
implement_command!(DynSetWindowTitle: self; f {
    let mut title = self.0.as_str();
    if MAX_TITLE_LEN < title.len() {
        let mut end = MAX_TITLE_LEN;
        while !title.is_char_boundary(end) {
            end -= 1;
        }
        title = &title[..end];
    }

    f.write_str("\x1b]2;")?;
    f.write_str(title)?;
    f.write_str("\x07")
});

// --------------------------------- Screen Management ---------------------------------

define_unit_command!(EraseScreen, "\x1b[2J");

// =====================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_size() {
        assert_eq!(std::mem::size_of::<ResetStyle>(), 0);
        assert_eq!(std::mem::size_of::<SetForeground8<219>>(), 0);
        assert_eq!(std::mem::size_of::<SetBackground24<0, 0, 0>>(), 0);
        assert_eq!(std::mem::size_of::<SaveWindowTitle>(), 0);
    }

    #[test]
    fn test_unit_commands() {
        assert_eq!(format!("{}", ResetStyle), "\x1b[0m");
        assert_eq!(format!("{}", SetDefaultForeground), "\x1b[39m");
        assert_eq!(format!("{}", SetDefaultBackground), "\x1b[49m");
        assert_eq!(format!("{}", EraseScreen), "\x1b[2J");
        assert_eq!(format!("{}", SaveWindowTitle), "\x1b[22;2t");
        assert_eq!(format!("{}", RestoreWindowTitle), "\x1b[23;2t");
    }

    #[test]
    fn test_ansi_colors() {
        assert_eq!(format!("{}", SetForeground(AnsiColor::Red)), "\x1b[31m");
        assert_eq!(
            format!("{}", SetForeground(AnsiColor::BrightRed)),
            "\x1b[91m"
        );
        assert_eq!(format!("{}", SetBackground(AnsiColor::Red)), "\x1b[41m");
        assert_eq!(
            format!("{}", SetBackground(AnsiColor::BrightRed)),
            "\x1b[101m"
        );
    }

    #[test]
    fn test_8bit_colors() {
        // The wire format is the same for all 256 indices, including the
        // sixteen ANSI colors.
        for index in 0..=255_u8 {
            assert_eq!(
                format!("{}", DynSetForeground8(index)),
                format!("\x1b[38;5;{}m", index)
            );
            assert_eq!(
                format!("{}", DynSetBackground8(index)),
                format!("\x1b[48;5;{}m", index)
            );
        }

        assert_eq!(format!("{}", SetForeground8::<0>), "\x1b[38;5;0m");
        assert_eq!(format!("{}", SetForeground8::<15>), "\x1b[38;5;15m");
        assert_eq!(format!("{}", SetBackground8::<196>), "\x1b[48;5;196m");
        assert_eq!(
            format!("{}", SetForeground8::<88>),
            format!("{}", DynSetForeground8(88))
        );
    }

    #[test]
    fn test_24bit_colors() {
        assert_eq!(
            format!("{}", SetForeground24::<255, 0, 0>),
            "\x1b[38;2;255;0;0m"
        );
        assert_eq!(
            format!("{}", SetBackground24::<1, 2, 3>),
            "\x1b[48;2;1;2;3m"
        );

        // Exercise each channel's full range separately.
        for value in 0..=255_u8 {
            assert_eq!(
                format!("{}", DynSetForeground24(value, 128, 7)),
                format!("\x1b[38;2;{};128;7m", value)
            );
            assert_eq!(
                format!("{}", DynSetBackground24(0, value, 255)),
                format!("\x1b[48;2;0;{};255m", value)
            );
        }

        let color = crate::color::Rgb::from_hex("#ff8000");
        assert_eq!(
            format!("{}", DynSetForeground24::from(color)),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format!("{}", Format::Bold), "\x1b[1m");
        assert_eq!(format!("{}", Format::Underlined), "\x1b[4m");
        assert_eq!(Format::Bold.undo(), Format::Regular);
        assert_eq!(Format::Thin.undo(), Format::Regular);
        assert_eq!(Format::Regular.undo(), Format::Regular);
        assert_eq!(format!("{}", Format::Stricken.undo()), "\x1b[29m");
    }

    #[test]
    fn test_window_title() {
        let cmd = DynSetWindowTitle("done: 3 of 3".to_owned());
        assert_eq!(format!("{}", cmd), "\x1b]2;done: 3 of 3\x07");

        // Displaying the same command twice yields identical bytes.
        assert_eq!(format!("{}", cmd), format!("{}", cmd.clone()));

        let overlong = DynSetWindowTitle("x".repeat(300));
        let displayed = format!("{}", overlong);
        assert_eq!(displayed, format!("\x1b]2;{}\x07", "x".repeat(255)));

        // Truncation never splits a multi-byte character.
        let emoji = DynSetWindowTitle("🦀".repeat(100));
        let displayed = format!("{}", emoji);
        let title = displayed
            .strip_prefix("\x1b]2;")
            .and_then(|s| s.strip_suffix("\x07"))
            .unwrap();
        assert_eq!(title.len(), 252);
        assert_eq!(title, "🦀".repeat(63));
    }
}
