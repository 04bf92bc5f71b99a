//! Terminal color representations.
//!
//! This module provides the three color formats expressible as SGR ANSI
//! escape sequences: the sixteen named [`AnsiColor`]s, 8-bit palette indices,
//! and "true" 24-bit [`Rgb`] colors. The [`Colorant`] wrapper combines them
//! with the default color and knows how to write the corresponding SGR
//! parameters for either [`Layer`](crate::style::Layer).

use crate::err::{ColorFormatError, OutOfBoundsError};
use crate::style::Layer;

/// The sixteen named ANSI colors.
///
/// The eight base colors have hard-coded SGR parameter values 30–37 for text
/// and 40–47 for the fill; the eight bright colors use 90–97 and 100–107.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl AnsiColor {
    /// Determine whether this color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this color, i.e., strip the brightness.
    pub const fn to_base(self) -> Self {
        use self::AnsiColor::*;

        match self {
            Black | BrightBlack => Black,
            Red | BrightRed => Red,
            Green | BrightGreen => Green,
            Yellow | BrightYellow => Yellow,
            Blue | BrightBlue => Blue,
            Magenta | BrightMagenta => Magenta,
            Cyan | BrightCyan => Cyan,
            White | BrightWhite => White,
        }
    }

    /// Get this color's name.
    pub const fn name(&self) -> &'static str {
        use self::AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }

    /// Get the SGR parameter value for this color on the given layer.
    pub const fn sgr_param(&self, layer: Layer) -> u8 {
        let base = if self.is_bright() { 90 } else { 30 };
        base + layer.offset() + self.to_base() as u8
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    /// Try converting an 8-bit index to an ANSI color. Only values 0–15
    /// denote ANSI colors.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use self::AnsiColor::*;

        Ok(match value {
            0 => Black,
            1 => Red,
            2 => Green,
            3 => Yellow,
            4 => Blue,
            5 => Magenta,
            6 => Cyan,
            7 => White,
            8 => BrightBlack,
            9 => BrightRed,
            10 => BrightGreen,
            11 => BrightYellow,
            12 => BrightBlue,
            13 => BrightMagenta,
            14 => BrightCyan,
            15 => BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        })
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> Self {
        value as u8
    }
}

// ====================================================================================================================
// Rgb ("True Color")
// ====================================================================================================================

/// Parse a 24-bit color in hashed hexadecimal format.
///
/// This function transparently handles single-digit coordinates, i.e., `#RGB`
/// next to `#RRGGBB`. It is const so that literal colors can be validated at
/// compile time.
const fn parse_hashed(bytes: &[u8]) -> Result<Rgb, ColorFormatError> {
    const fn hex_digit(byte: u8) -> Result<u8, ColorFormatError> {
        match byte {
            b'0'..=b'9' => Ok(byte - b'0'),
            b'a'..=b'f' => Ok(10 + byte - b'a'),
            b'A'..=b'F' => Ok(10 + byte - b'A'),
            _ => Err(ColorFormatError::MalformedHex),
        }
    }

    // `?` is not const, hence the local macro.
    macro_rules! digit {
        ($byte:expr) => {
            match hex_digit($byte) {
                Ok(digit) => digit,
                Err(error) => return Err(error),
            }
        };
    }

    if bytes.is_empty() || bytes[0] != b'#' {
        return Err(ColorFormatError::UnknownFormat);
    }

    match bytes.len() {
        4 => Ok(Rgb::new(
            17 * digit!(bytes[1]),
            17 * digit!(bytes[2]),
            17 * digit!(bytes[3]),
        )),
        7 => Ok(Rgb::new(
            16 * digit!(bytes[1]) + digit!(bytes[2]),
            16 * digit!(bytes[3]) + digit!(bytes[4]),
            16 * digit!(bytes[5]) + digit!(bytes[6]),
        )),
        _ => Err(ColorFormatError::UnexpectedCharacters),
    }
}

/// A "true," 24-bit RGB color.
///
/// # Examples
///
/// Rust code can create a new true color from its coordinates with
/// [`Rgb::new`], from a hexadecimal literal with [`Rgb::from_hex`], or from a
/// dynamic string with [`Rgb as
/// TryFrom<&str>`](struct.Rgb.html#impl-TryFrom%3C%26str%3E-for-Rgb). All
/// three construction paths produce identical colors:
///
/// ```
/// # use tintty::color::Rgb;
/// const BLUE: Rgb = Rgb::from_hex("#aee8fb");
/// assert_eq!(BLUE, Rgb::new(0xae, 0xe8, 0xfb));
/// assert_eq!(BLUE, Rgb::try_from("#aee8fb").unwrap());
/// ```
///
/// It can access the coordinates with [`Rgb as AsRef<[u8;
/// 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) or with [`Rgb
/// as Index<usize>`](struct.Rgb.html#impl-Index%3Cusize%3E-for-Rgb), and
/// format itself in hashed hexadecimal notation with [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb).
///
/// ```
/// # use tintty::color::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// assert_eq!(format!("{}", sea_foam), "#b6ebd4");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new true color from a hashed hexadecimal literal, either
    /// `#RGB` or `#RRGGBB`. In the short form, each digit is doubled, i.e.,
    /// `#fab` is `#ffaabb`.
    ///
    /// # Panics
    ///
    /// This function panics if the literal is malformed. Since it is const,
    /// using it in a const context turns that panic into a compile-time
    /// error. For parsing dynamic strings, use the fallible [`Rgb as
    /// TryFrom<&str>`](struct.Rgb.html#impl-TryFrom%3C%26str%3E-for-Rgb)
    /// instead.
    pub const fn from_hex(s: &str) -> Self {
        match parse_hashed(s.as_bytes()) {
            Ok(color) => color,
            Err(_) => panic!("hex color must be `#RGB` or `#RRGGBB`"),
        }
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    /// Parse a color in hashed hexadecimal format, `#RGB` or `#RRGGBB`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hashed(value.as_bytes())
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A colorant combines all color representations expressible in SGR.
///
/// The colorant is layer-agnostic; the text or fill role is supplied when
/// writing the SGR parameters, which is how
/// [`Style`](crate::style::Style) uses the same colorant for foreground and
/// background colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// The terminal's default color for the layer, SGR 39 or 49.
    Default,
    /// A named 4-bit color.
    Ansi(AnsiColor),
    /// An 8-bit palette index, SGR `38;5;IDX` or `48;5;IDX`.
    EightBit(u8),
    /// A 24-bit color, SGR `38;2;R;G;B` or `48;2;R;G;B`.
    Rgb(Rgb),
}

impl Colorant {
    /// Write the SGR parameters for this colorant on the given layer.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "{}", 39 + layer.offset()),
            Self::Ansi(color) => write!(f, "{}", color.sgr_param(layer)),
            Self::EightBit(index) => write!(f, "{};5;{}", 38 + layer.offset(), index),
            Self::Rgb(color) => write!(
                f,
                "{};2;{};{};{}",
                38 + layer.offset(),
                color[0],
                color[1],
                color[2]
            ),
        }
    }
}

impl From<AnsiColor> for Colorant {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<u8> for Colorant {
    fn from(value: u8) -> Self {
        Self::EightBit(value)
    }
}

impl From<Rgb> for Colorant {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<[u8; 3]> for Colorant {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(value.into())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ansi_color() {
        assert!(!AnsiColor::Red.is_bright());
        assert!(AnsiColor::BrightRed.is_bright());
        assert_eq!(AnsiColor::BrightCyan.to_base(), AnsiColor::Cyan);
        assert_eq!(AnsiColor::try_from(9), Ok(AnsiColor::BrightRed));
        assert!(AnsiColor::try_from(16).is_err());
        assert_eq!(u8::from(AnsiColor::BrightWhite), 15);
        assert_eq!(AnsiColor::BrightYellow.name(), "bright yellow");

        assert_eq!(AnsiColor::Red.sgr_param(Layer::Foreground), 31);
        assert_eq!(AnsiColor::BrightRed.sgr_param(Layer::Foreground), 91);
        assert_eq!(AnsiColor::Red.sgr_param(Layer::Background), 41);
        assert_eq!(AnsiColor::BrightRed.sgr_param(Layer::Background), 101);
        assert_eq!(AnsiColor::Black.sgr_param(Layer::Foreground), 30);
        assert_eq!(AnsiColor::BrightWhite.sgr_param(Layer::Background), 107);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::try_from("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::try_from("#FFFF00"), Ok(Rgb::new(255, 255, 0)));

        // Each nibble `d` of the short form expands to `d * 17`.
        assert_eq!(Rgb::try_from("#f80"), Ok(Rgb::new(255, 136, 0)));
        for (short, long) in [("#000", "#000000"), ("#fff", "#ffffff"), ("#1a9", "#11aa99")] {
            assert_eq!(Rgb::try_from(short), Rgb::try_from(long));
        }

        // The const and dynamic paths agree.
        const RED: Rgb = Rgb::from_hex("#FF0000");
        assert_eq!(Rgb::try_from("#FF0000"), Ok(RED));
        assert_eq!(RED, Rgb::new(255, 0, 0));

        // Parsing the formatted color restores the coordinates.
        let color = Rgb::new(0xee, 0xdc, 0xad);
        assert_eq!(Rgb::try_from(format!("{}", color).as_str()), Ok(color));
    }

    #[test]
    fn test_malformed_hex() {
        assert_eq!(
            Rgb::try_from("123"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            Rgb::try_from("nothex"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            Rgb::try_from("#12"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            Rgb::try_from("#12345"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(Rgb::try_from(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(Rgb::try_from("#efg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(
            Rgb::try_from("#0000zz"),
            Err(ColorFormatError::MalformedHex)
        );
    }
}
