/// An instruction for the terminal.
///
/// Commands are communicated in-band by writing ANSI escape sequences. Doing
/// so is the responsibility of the [`std::fmt::Display`] implementation,
/// whereas the [`std::fmt::Debug`] implementation should simply identify the
/// command.
///
/// This trait is object-safe.
pub trait Command: std::fmt::Debug + std::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

/// Combine several commands into a single new command.
///
/// The new command preserves the order of its component commands. Upon
/// display, it emits as many ANSI escape sequences as it has component
/// commands. Upon debug, it reveals the macro's source arguments.
///
/// When fusing only SGR commands, prefer [`fuse_sgr!`](crate::fuse_sgr),
/// which generates commands that emit a single ANSI escape sequence only.
///
/// # Example
///
/// ```
/// # use tintty::{cmd::{EraseScreen, ResetStyle}, fuse};
/// let wipe = fuse!(EraseScreen, ResetStyle);
/// assert_eq!(format!("{}", wipe), "\x1b[2J\x1b[0m");
/// ```
#[macro_export]
macro_rules! fuse {
    ($($command:expr),+ $(,)?) => {{
        /// One or more combined commands.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct Fused;

        impl $crate::Command for Fused {}

        impl ::std::fmt::Debug for Fused {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(concat!(stringify!(fuse!), "(", stringify!($($command),+), ")"))
            }
        }

        impl ::std::fmt::Display for Fused {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                $(::std::fmt::Display::fmt(&$command, f)?;)*
                Ok(())
            }
        }

        Fused
    }}
}

// ------------------------------------------------------------------------------------------------

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// To facilitate composition, SGR commands implement [`Sgr::write_param`],
/// which writes the parameter(s) without the leading `CSI` and the trailing
/// `m`. Declaring `out` to be a formatter instead of an `impl std::fmt::Write`
/// keeps the trait object-safe, and `write_param()` is most likely invoked
/// inside an implementation of `Display::fmt` anyways.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (**self).write_param(out)
    }
}

/// Combine several SGR commands into a single new SGR command.
///
/// The new SGR command preserves the order of its component commands. Upon
/// display, it emits only one ANSI escape sequence. Upon debug, it reveals
/// the macro's source arguments.
///
/// To fuse commands other than SGR commands, use [`fuse!`].
///
/// # Example
///
/// ```
/// # use tintty::{cmd::{Format, SetForeground8}, fuse_sgr};
/// let alert = fuse_sgr!(Format::Bold, SetForeground8::<196>);
/// assert_eq!(format!("{}", alert), "\x1b[1;38;5;196m");
/// ```
#[macro_export]
macro_rules! fuse_sgr {
    ( $sgr:expr, $( $sgr2:expr ),* $(,)? ) => {{
        /// One or more SGR commands fused into one.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct FusedSgr;

        impl ::std::fmt::Debug for FusedSgr {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(concat!(stringify!(fuse_sgr!), "(", stringify!($sgr, $($sgr2),*), ")"))
            }
        }

        impl ::std::fmt::Display for FusedSgr {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("\x1b[")?;
                $crate::Sgr::write_param(self, f)?;
                f.write_str("m")
            }
        }

        impl $crate::Command for FusedSgr {}
        impl $crate::Sgr for FusedSgr {
            fn write_param(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::Sgr::write_param(&$sgr, f)?;
                $(
                    f.write_str(";")?;
                    $crate::Sgr::write_param(&$sgr2, f)?;
                )*
                Ok(())
            }
        }

        FusedSgr
    }};
}

fn _assert_traits_are_object_safe() {
    fn is_object_safe<T: ?Sized>() {}

    is_object_safe::<dyn Command>();
    is_object_safe::<dyn Sgr>();
}

#[cfg(test)]
mod test {
    use crate::cmd::{Format, SetBackground8, SetForeground24, SetForeground8};

    #[test]
    fn test_fuse() {
        let cmd = fuse!(Format::Bold, SetForeground8::<0>, SetBackground8::<15>);
        assert_eq!(format!("{}", cmd), "\x1b[1m\x1b[38;5;0m\x1b[48;5;15m");
        assert_eq!(
            format!("{:?}", cmd),
            "fuse!(Format::Bold, SetForeground8::<0>, SetBackground8::<15>)"
        );

        let copy = cmd;
        assert_eq!(format!("{}", copy), format!("{}", cmd));
        assert_eq!(cmd, copy);
    }

    #[test]
    fn test_fuse_sgr() {
        let cmd = fuse_sgr!(Format::Bold, SetForeground24::<215, 40, 39>);
        assert_eq!(format!("{}", cmd), "\x1b[1;38;2;215;40;39m");
        assert_eq!(
            format!("{:?}", cmd),
            "fuse_sgr!(Format::Bold, SetForeground24::<215, 40, 39>)"
        );

        // Displaying the same fused command twice yields identical bytes.
        assert_eq!(format!("{}", cmd), format!("{}", cmd));
    }
}
