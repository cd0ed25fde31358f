//! Avatar Gradients
//!
//! Characters without an avatar image get a background generated from their
//! name. The same name always produces the same pair of colors, on every run
//! and every platform, so a character keeps its look across sessions.

use std::fmt;

/// Angle of every generated gradient, in degrees.
pub const GRADIENT_ANGLE: u16 = 135;

/// Saturation shared by both gradient stops.
pub const GRADIENT_SATURATION: u8 = 70;

/// Lightness of the first (lighter) stop.
pub const FROM_LIGHTNESS: u8 = 80;

/// Lightness of the second (darker) stop.
pub const TO_LIGHTNESS: u8 = 70;

/// A hue-saturation-lightness color.
///
/// `hue` is in degrees and always lies in `[0, 360)`; saturation and
/// lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Two-stop linear gradient used as an avatar background.
///
/// Renders as a CSS `linear-gradient(...)` value through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientSpec {
    pub from: Hsl,
    pub to: Hsl,
    /// Direction in degrees
    pub angle: u16,
}

impl GradientSpec {
    /// CSS `background` declaration for this gradient
    pub fn css_background(&self) -> String {
        format!("background: {};", self)
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle, self.from, self.to
        )
    }
}

/// Polynomial hash of a name, folded over its UTF-16 code units.
///
/// Each step computes `unit + ((acc << 5) - acc)`. The shift operates on
/// `acc` truncated to a signed 32-bit integer and wraps to 32 bits, while the
/// subtraction and addition are exact. For short names this is the familiar
/// `acc * 31 + unit` with 32-bit wrap-around; for long names the accumulator
/// leaves the 32-bit range and the exact fold keeps existing avatar colors
/// stable.
///
/// The empty string hashes to 0.
pub fn name_hash(name: &str) -> i64 {
    name.encode_utf16().fold(0i64, |acc, unit| {
        let shifted = i64::from((acc as i32) << 5);
        i64::from(unit).wrapping_add(shifted.wrapping_sub(acc))
    })
}

/// Hue in `[0, 360)` for any hash value.
fn hue_of(value: i64) -> u16 {
    // rem_euclid with a positive modulus is never negative
    value.rem_euclid(360) as u16
}

/// Generate the avatar gradient for a name.
///
/// Total and pure: every string, including the empty one, maps to exactly
/// one gradient.
///
/// # Example
///
/// ```
/// use castboard_core::generate_gradient;
///
/// let gradient = generate_gradient("Ada");
/// assert_eq!(
///     gradient.to_string(),
///     "linear-gradient(135deg, hsl(142, 70%, 80%), hsl(284, 70%, 70%))"
/// );
/// ```
pub fn generate_gradient(name: &str) -> GradientSpec {
    let hash = name_hash(name);

    GradientSpec {
        from: Hsl::new(hue_of(hash), GRADIENT_SATURATION, FROM_LIGHTNESS),
        to: Hsl::new(
            hue_of(hash.wrapping_mul(2)),
            GRADIENT_SATURATION,
            TO_LIGHTNESS,
        ),
        angle: GRADIENT_ANGLE,
    }
}
