//! Composed terminal styles.
//!
//! While the [`cmd`](crate::cmd) module covers individual styling
//! instructions, this module composes them: a [`Style`] combines a text
//! [`Format`] with optional foreground and background
//! [`Colorant`](crate::color::Colorant)s and displays as a single fused SGR
//! sequence. [`Style::undo`] produces the matching sequence for restoring
//! the default appearance.

use crate::color::Colorant;
use crate::Command;

/// The targeted display layer: text or fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background or fill layer.
    Background,
}

impl Layer {
    /// Determine the parameter offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text attribute other than regular.
///
/// This enumeration models attributes that differ from the default
/// appearance. Discriminants are powers of two and hence can be combined
/// into a bit vector, which is just what [`Format`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 0x1,
    Faint = 0x2,
    Italic = 0x4,
    Underlined = 0x8,
    Blinking = 0x10,
    Reversed = 0x20,
    Hidden = 0x40,
    Stricken = 0x80,
}

impl Attribute {
    #[inline]
    const fn bits(&self) -> u8 {
        *self as u8
    }

    const fn successor(&self) -> Option<Self> {
        use self::Attribute::*;

        Some(match self {
            Bold => Faint,
            Faint => Italic,
            Italic => Underlined,
            Underlined => Blinking,
            Blinking => Reversed,
            Reversed => Hidden,
            Hidden => Stricken,
            Stricken => return None,
        })
    }

    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => 1,
            Faint => 2,
            Italic => 3,
            Underlined => 4,
            Blinking => 5,
            Reversed => 7,
            Hidden => 8,
            Stricken => 9,
        }
    }

    /// Get the SGR parameter for disabling this attribute.
    ///
    /// Since SGR 22 restores regular intensity, it disables both
    /// [`Attribute::Bold`] and [`Attribute::Faint`].
    pub const fn disable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold | Faint => 22,
            Italic => 23,
            Underlined => 24,
            Blinking => 25,
            Reversed => 27,
            Hidden => 28,
            Stricken => 29,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text format combining zero or more text attributes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Format(u8);

impl Format {
    #[inline]
    const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    const fn bits(&self) -> u8 {
        self.0
    }

    /// Determine whether this format is the default format.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of attributes that diverge from the default formatting.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Get an iterator over the non-default text attributes.
    #[inline]
    pub const fn attributes(&self) -> AttributeIter {
        AttributeIter {
            format: *self,
            cursor: None,
            remaining: self.len(),
        }
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.attributes()).finish()
    }
}

impl From<Attribute> for Format {
    fn from(value: Attribute) -> Self {
        Self(value.bits())
    }
}

impl std::ops::Add for Attribute {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Attribute> for Format {
    type Output = Format;

    fn add(self, other: Attribute) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add for Format {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An iterator over the text attributes of a format.
#[derive(Debug)]
pub struct AttributeIter {
    format: Format,
    cursor: Option<Attribute>,
    remaining: usize,
}

impl Iterator for AttributeIter {
    type Item = Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let attribute = match self.cursor {
                None => Attribute::Bold,
                Some(Attribute::Stricken) => return None,
                Some(attribute) => attribute.successor()?,
            };
            self.cursor = Some(attribute);

            if self.format.bits() & attribute.bits() != 0 {
                self.remaining -= 1;
                return Some(attribute);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttributeIter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for AttributeIter {}

// ----------------------------------------------------------------------------------------------------------

/// A terminal style.
///
/// A terminal style comprises text formatting, a foreground color, and a
/// background color. All three are optional. If none are provided, the style
/// denotes the default appearance and displays as the empty string. Since
/// instances are immutable, terminal styles can be arbitrarily reused.
///
/// # Example
///
/// ```
/// # use tintty::color::Rgb;
/// # use tintty::style::Style;
/// let chic = Style::default()
///     .bold()
///     .underlined()
///     .with_foreground(Rgb::new(215, 40, 39));
/// assert_eq!(format!("{}", chic), "\x1b[1;4;38;2;215;40;39m");
/// assert_eq!(format!("{}", chic.undo()), "\x1b[22;24;39m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    format: Format,
    foreground: Option<Colorant>,
    background: Option<Colorant>,
}

impl Style {
    /// Create a new style with added bold formatting.
    pub fn bold(&self) -> Self {
        self.with_attribute(Attribute::Bold)
    }

    /// Create a new style with added faint formatting.
    pub fn faint(&self) -> Self {
        self.with_attribute(Attribute::Faint)
    }

    /// Create a new style with added italic formatting.
    pub fn italic(&self) -> Self {
        self.with_attribute(Attribute::Italic)
    }

    /// Create a new style with added underlined formatting.
    pub fn underlined(&self) -> Self {
        self.with_attribute(Attribute::Underlined)
    }

    /// Create a new style with added blinking formatting.
    pub fn blinking(&self) -> Self {
        self.with_attribute(Attribute::Blinking)
    }

    /// Create a new style with added reversed formatting.
    pub fn reversed(&self) -> Self {
        self.with_attribute(Attribute::Reversed)
    }

    /// Create a new style with added hidden formatting.
    pub fn hidden(&self) -> Self {
        self.with_attribute(Attribute::Hidden)
    }

    /// Create a new style with added stricken formatting.
    pub fn stricken(&self) -> Self {
        self.with_attribute(Attribute::Stricken)
    }

    /// Create a new style with the added text attribute.
    pub fn with_attribute(&self, attribute: Attribute) -> Self {
        Self {
            format: self.format + attribute,
            ..*self
        }
    }

    /// Create a new style with the given foreground color.
    pub fn with_foreground(&self, color: impl Into<Colorant>) -> Self {
        Self {
            foreground: Some(color.into()),
            ..*self
        }
    }

    /// Create a new style with the given background color.
    pub fn with_background(&self, color: impl Into<Colorant>) -> Self {
        Self {
            background: Some(color.into()),
            ..*self
        }
    }

    /// Determine whether this style is the default style.
    pub const fn is_default(&self) -> bool {
        self.format.is_empty() && self.foreground.is_none() && self.background.is_none()
    }

    /// Get this style's formatting.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get this style's foreground colorant.
    pub const fn foreground(&self) -> Option<&Colorant> {
        self.foreground.as_ref()
    }

    /// Get this style's background colorant.
    pub const fn background(&self) -> Option<&Colorant> {
        self.background.as_ref()
    }

    /// Get the command restoring the default appearance.
    ///
    /// The returned command disables exactly the attributes this style
    /// enables and resets only the layers it colors. For a default style, it
    /// displays as the empty string, just like the style itself.
    pub const fn undo(&self) -> UndoStyle {
        UndoStyle {
            format: self.format,
            foreground: self.foreground.is_some(),
            background: self.background.is_some(),
        }
    }
}

impl Command for Style {}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_default() {
            return Ok(());
        }

        let mut first = true;
        macro_rules! maybe_emit_semicolon {
            () => {
                if first {
                    #[allow(unused_assignments)]
                    {
                        first = false;
                    }
                } else {
                    f.write_str(";")?;
                }
            };
        }

        f.write_str("\x1b[")?;
        for attribute in self.format.attributes() {
            maybe_emit_semicolon!();
            write!(f, "{}", attribute.enable_sgr())?;
        }
        if let Some(ref colorant) = self.foreground {
            maybe_emit_semicolon!();
            colorant.write_sgr_params(Layer::Foreground, f)?;
        }
        if let Some(ref colorant) = self.background {
            maybe_emit_semicolon!();
            colorant.write_sgr_params(Layer::Background, f)?;
        }
        f.write_str("m")
    }
}

impl std::ops::Neg for &Style {
    type Output = UndoStyle;

    fn neg(self) -> Self::Output {
        self.undo()
    }
}

impl std::ops::Neg for Style {
    type Output = UndoStyle;

    fn neg(self) -> Self::Output {
        self.undo()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The command restoring the terminal appearance a [`Style`] changed.
///
/// Instances are created with [`Style::undo`]. Upon display, the command
/// emits one SGR sequence with the disabling parameter for every enabled
/// attribute, SGR 39 if the style has a foreground color, and SGR 49 if it
/// has a background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UndoStyle {
    format: Format,
    foreground: bool,
    background: bool,
}

impl Command for UndoStyle {}

impl std::fmt::Display for UndoStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.format.is_empty() && !self.foreground && !self.background {
            return Ok(());
        }

        let mut first = true;
        macro_rules! maybe_emit_semicolon {
            () => {
                if first {
                    #[allow(unused_assignments)]
                    {
                        first = false;
                    }
                } else {
                    f.write_str(";")?;
                }
            };
        }

        f.write_str("\x1b[")?;
        let mut disabled = Format::empty();
        for attribute in self.format.attributes() {
            // Bold and faint share SGR 22; emit it once.
            if disabled.bits() & attribute.bits() != 0 {
                continue;
            }
            disabled = disabled + attribute;
            if attribute.disable_sgr() == 22 {
                disabled = disabled + Attribute::Bold + Attribute::Faint;
            }

            maybe_emit_semicolon!();
            write!(f, "{}", attribute.disable_sgr())?;
        }
        if self.foreground {
            maybe_emit_semicolon!();
            f.write_str("39")?;
        }
        if self.background {
            maybe_emit_semicolon!();
            f.write_str("49")?;
        }
        f.write_str("m")
    }
}

// ----------------------------------------------------------------------------------------------------------
