//! Conditional emission of commands.
//!
//! Styled output is only an improvement when somebody is looking at it. The
//! [`Gate`] decides, per output stream, whether ANSI escape sequences should
//! be written at all. It combines a caller-provided [`Choice`] per stream
//! with the cached interactivity of the standard output streams. Since the
//! gate is a plain value owned by the caller, applications can maintain
//! several gates without any coordination.

use crate::style::Style;
use crate::Command;

/// The caller's choice of when to emit ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Choice {
    /// Emit escape sequences only when the stream is interactive.
    #[default]
    Auto,
    /// Always emit escape sequences, interactive or not.
    Always,
    /// Never emit escape sequences.
    Never,
}

/// The output stream a command is gated for.
///
/// The gate caches interactivity for standard output and standard error. All
/// other streams, such as pipes and files opened by the application, are
/// covered by [`StreamKind::Other`] and never count as interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
    Other,
}

impl StreamKind {
    const fn index(self) -> usize {
        match self {
            Self::Stdout => 0,
            Self::Stderr => 1,
            Self::Other => 2,
        }
    }
}

/// A source of stream interactivity.
///
/// The only implementation outside of tests asks the operating system whether
/// the stream is connected to a terminal.
pub(crate) trait Probe {
    fn is_interactive(&self, stream: StreamKind) -> bool;
}

pub(crate) struct SysProbe;

impl Probe for SysProbe {
    fn is_interactive(&self, stream: StreamKind) -> bool {
        match stream {
            StreamKind::Stdout => crate::sys::is_stdout_interactive(),
            StreamKind::Stderr => crate::sys::is_stderr_interactive(),
            StreamKind::Other => false,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A per-stream gate for ANSI escape sequences.
///
/// The gate maintains one [`Choice`] per [`StreamKind`], so the same gate
/// can, say, force emission on standard output while suppressing it on
/// standard error. It probes the interactivity of standard output and
/// standard error once, upon construction, and caches the result.
/// [`Gate::refresh`] renews the cache, which matters only if the process
/// rewires its standard streams while running.
///
/// # Example
///
/// ```
/// # use tintty::cmd::{ResetStyle, SetForeground24};
/// # use tintty::gate::{Choice, Gate, StreamKind};
/// let mut gate = Gate::new();
/// gate.set_choice(StreamKind::Stdout, Choice::Always);
/// let text = format!(
///     "{}hi{}",
///     gate.display(StreamKind::Stdout, SetForeground24::<255, 0, 0>),
///     gate.display(StreamKind::Stdout, ResetStyle),
/// );
/// assert_eq!(text, "\x1b[38;2;255;0;0mhi\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    choices: [Choice; 3],
    stdout_interactive: bool,
    stderr_interactive: bool,
}

impl Gate {
    /// Create a new gate with the [`Choice::Auto`] policy for every stream.
    ///
    /// This constructor probes the interactivity of standard output and
    /// standard error.
    pub fn new() -> Self {
        Self::with_probe([Choice::Auto; 3], &SysProbe)
    }

    /// Create a new gate with the given policy for every stream.
    pub fn with_choice(choice: Choice) -> Self {
        Self::with_probe([choice; 3], &SysProbe)
    }

    /// Create a new gate that treats every stream as non-interactive.
    ///
    /// Under [`Choice::Auto`], such a gate never emits escape sequences.
    /// [`Choice::Always`] still forces emission.
    pub fn non_interactive() -> Self {
        Self {
            choices: [Choice::Auto; 3],
            stdout_interactive: false,
            stderr_interactive: false,
        }
    }

    fn with_probe(choices: [Choice; 3], probe: &impl Probe) -> Self {
        Self {
            choices,
            stdout_interactive: probe.is_interactive(StreamKind::Stdout),
            stderr_interactive: probe.is_interactive(StreamKind::Stderr),
        }
    }

    /// Get this gate's policy for the given stream.
    pub const fn choice(&self, stream: StreamKind) -> Choice {
        self.choices[stream.index()]
    }

    /// Update this gate's policy for the given stream.
    pub fn set_choice(&mut self, stream: StreamKind, choice: Choice) {
        self.choices[stream.index()] = choice;
    }

    /// Probe the interactivity of the standard streams again.
    pub fn refresh(&mut self) {
        self.refresh_from(&SysProbe);
    }

    fn refresh_from(&mut self, probe: &impl Probe) {
        self.stdout_interactive = probe.is_interactive(StreamKind::Stdout);
        self.stderr_interactive = probe.is_interactive(StreamKind::Stderr);
    }

    /// Determine whether the given stream counts as interactive.
    ///
    /// The result reflects the cached probe, not the policy.
    pub const fn is_interactive(&self, stream: StreamKind) -> bool {
        match stream {
            StreamKind::Stdout => self.stdout_interactive,
            StreamKind::Stderr => self.stderr_interactive,
            StreamKind::Other => false,
        }
    }

    /// Determine whether this gate emits escape sequences for the stream.
    pub const fn emits(&self, stream: StreamKind) -> bool {
        match self.choice(stream) {
            Choice::Always => true,
            Choice::Never => false,
            Choice::Auto => self.is_interactive(stream),
        }
    }

    /// Gate the command for the given stream.
    ///
    /// The returned value displays as the command if this gate emits for the
    /// stream and as the empty string otherwise. The command is moved, not
    /// borrowed, so `gate.display(stream, &cmd)` gates a long-lived command.
    pub fn display<C: Command>(&self, stream: StreamKind, command: C) -> Gated<C> {
        Gated {
            command,
            enabled: self.emits(stream),
        }
    }

    /// Gate the command under an explicit per-call policy.
    ///
    /// The given choice overrides this gate's policy for one command.
    /// Since the method cannot know which stream the command is headed for,
    /// [`Choice::Auto`] defers to this gate's decision for
    /// [`StreamKind::Other`], which is never interactive.
    pub fn display_with<C: Command>(&self, choice: Choice, command: C) -> Gated<C> {
        let enabled = match choice {
            Choice::Always => true,
            Choice::Never => false,
            Choice::Auto => self.emits(StreamKind::Other),
        };
        Gated { command, enabled }
    }

    /// Style the text for the given stream.
    ///
    /// The returned value displays as the style, the text, and the style's
    /// undo command if this gate emits for the stream, and as the bare text
    /// otherwise.
    pub fn apply<'t>(&self, stream: StreamKind, style: &Style, text: &'t str) -> Painted<'t> {
        Painted {
            style: *style,
            text,
            enabled: self.emits(stream),
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A command gated by stream interactivity.
///
/// Instances are created with [`Gate::display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gated<C: Command> {
    command: C,
    enabled: bool,
}

impl<C: Command> Command for Gated<C> {}

impl<C: Command> std::fmt::Display for Gated<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.enabled {
            std::fmt::Display::fmt(&self.command, f)?;
        }
        Ok(())
    }
}

/// Text with a gated style.
///
/// Instances are created with [`Gate::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painted<'t> {
    style: Style,
    text: &'t str,
    enabled: bool,
}

impl std::fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.enabled {
            write!(f, "{}{}{}", self.style, self.text, self.style.undo())
        } else {
            f.write_str(self.text)
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::{DynSetWindowTitle, ResetStyle, SetForeground24};
    use crate::color::AnsiColor;

    struct FakeProbe {
        stdout: bool,
        stderr: bool,
    }

    impl Probe for FakeProbe {
        fn is_interactive(&self, stream: StreamKind) -> bool {
            match stream {
                StreamKind::Stdout => self.stdout,
                StreamKind::Stderr => self.stderr,
                StreamKind::Other => false,
            }
        }
    }

    fn gate(choice: Choice, stdout: bool, stderr: bool) -> Gate {
        Gate::with_probe([choice; 3], &FakeProbe { stdout, stderr })
    }

    #[test]
    fn test_decision_table() {
        use self::StreamKind::*;

        // Always emits and Never suppresses regardless of interactivity.
        for (stdout, stderr) in [(false, false), (false, true), (true, false), (true, true)] {
            let always = gate(Choice::Always, stdout, stderr);
            let never = gate(Choice::Never, stdout, stderr);
            for stream in [Stdout, Stderr, Other] {
                assert!(always.emits(stream), "always should emit");
                assert!(!never.emits(stream), "never should not emit");
            }
        }

        // Auto follows the stream's interactivity.
        let auto = gate(Choice::Auto, true, false);
        assert!(auto.emits(Stdout));
        assert!(!auto.emits(Stderr));
        assert!(!auto.emits(Other));

        let auto = gate(Choice::Auto, false, true);
        assert!(!auto.emits(Stdout));
        assert!(auto.emits(Stderr));
    }

    #[test]
    fn test_decisions_are_stable() {
        let gate = gate(Choice::Auto, true, false);
        for _ in 0..3 {
            assert!(gate.emits(StreamKind::Stdout));
            assert!(!gate.emits(StreamKind::Stderr));
        }
    }

    #[test]
    fn test_gated_display() {
        let open = gate(Choice::Always, false, false);
        let text = format!(
            "{}{}{}",
            open.display(StreamKind::Stdout, SetForeground24::<255, 0, 0>),
            "hi",
            open.display(StreamKind::Stdout, ResetStyle),
        );
        assert_eq!(text, "\x1b[38;2;255;0;0mhi\x1b[0m");

        let shut = gate(Choice::Never, true, true);
        let text = format!(
            "{}{}{}",
            shut.display(StreamKind::Stdout, SetForeground24::<255, 0, 0>),
            "hi",
            shut.display(StreamKind::Stdout, ResetStyle),
        );
        assert_eq!(text, "hi");

        let title = DynSetWindowTitle("build ok".to_owned());
        let auto = gate(Choice::Auto, true, false);
        assert_eq!(
            format!("{}", auto.display(StreamKind::Stdout, &title)),
            "\x1b]2;build ok\x07"
        );
        assert_eq!(format!("{}", auto.display(StreamKind::Stderr, &title)), "");
    }

    #[test]
    fn test_display_with() {
        let gate = gate(Choice::Never, true, true);
        assert_eq!(
            format!("{}", gate.display_with(Choice::Always, ResetStyle)),
            "\x1b[0m"
        );
        assert_eq!(format!("{}", gate.display_with(Choice::Never, ResetStyle)), "");
        // Auto falls back to the non-interactive Other stream.
        assert_eq!(format!("{}", gate.display_with(Choice::Auto, ResetStyle)), "");
    }

    #[test]
    fn test_apply() {
        let style = Style::default().bold().with_foreground(AnsiColor::Red);

        let open = gate(Choice::Auto, true, true);
        assert_eq!(
            format!("{}", open.apply(StreamKind::Stdout, &style, "oops")),
            "\x1b[1;31moops\x1b[22;39m"
        );

        let shut = Gate::non_interactive();
        assert_eq!(
            format!("{}", shut.apply(StreamKind::Stdout, &style, "oops")),
            "oops"
        );

        // The default style paints as the bare text even when emitting.
        assert_eq!(
            format!(
                "{}",
                open.apply(StreamKind::Stdout, &Style::default(), "plain")
            ),
            "plain"
        );
    }

    #[test]
    fn test_refresh_and_choice() {
        let mut gate = gate(Choice::Auto, false, false);
        assert!(!gate.emits(StreamKind::Stdout));

        gate.refresh_from(&FakeProbe {
            stdout: true,
            stderr: false,
        });
        assert!(gate.emits(StreamKind::Stdout));

        gate.set_choice(StreamKind::Stdout, Choice::Never);
        assert_eq!(gate.choice(StreamKind::Stdout), Choice::Never);
        assert!(!gate.emits(StreamKind::Stdout));
    }

    #[test]
    fn test_per_stream_policy() {
        // One gate can force one stream while suppressing another.
        let mut gate = gate(Choice::Auto, false, true);
        gate.set_choice(StreamKind::Stdout, Choice::Always);
        gate.set_choice(StreamKind::Stderr, Choice::Never);

        assert!(gate.emits(StreamKind::Stdout));
        assert!(!gate.emits(StreamKind::Stderr));
        assert!(!gate.emits(StreamKind::Other));
        assert_eq!(gate.choice(StreamKind::Other), Choice::Auto);

        assert_eq!(
            format!("{}", gate.display(StreamKind::Stdout, ResetStyle)),
            "\x1b[0m"
        );
        assert_eq!(format!("{}", gate.display(StreamKind::Stderr, ResetStyle)), "");

        // The Other entry backs display_with's Auto fallback.
        gate.set_choice(StreamKind::Other, Choice::Always);
        assert_eq!(
            format!("{}", gate.display_with(Choice::Auto, ResetStyle)),
            "\x1b[0m"
        );
    }
}
