//! sRGB, linear sRGB, OKLab and OKLCH conversions.
//!
//! Colors are carried in palette's value types, but the OKLab transform is
//! computed here with Björn Ottosson's published matrices. Ramp hues and
//! chromas are sensitive to these constants, so they are reproduced exactly
//! rather than derived through XYZ.

use palette::{LinSrgb, Oklab, Oklch, Srgb};

use crate::error::RampError;
use crate::round::{clamp01, round_half_up};

/// Encoded channel value below which the sRGB transfer function is linear.
const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear channel value below which the inverse transfer function is linear.
const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Decode one sRGB channel (gamma-applied) into linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_DECODE_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel with the sRGB transfer function.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= SRGB_ENCODE_THRESHOLD {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Linear sRGB to OKLab.
pub fn linear_srgb_to_oklab(rgb: LinSrgb<f64>) -> Oklab<f64> {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);

    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab::new(
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    )
}

/// OKLab to linear sRGB. Channels may fall outside [0, 1].
pub fn oklab_to_linear_srgb(lab: Oklab<f64>) -> LinSrgb<f64> {
    let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
    let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
    let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinSrgb::new(
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    )
}

/// Cartesian OKLab to cylindrical OKLCH, hue normalized into [0, 360).
pub fn oklab_to_oklch(lab: Oklab<f64>) -> Oklch<f64> {
    let chroma = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let mut hue = lab.b.atan2(lab.a).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }
    // -0.0000001 + 360 rounds to exactly 360
    if hue >= 360.0 {
        hue -= 360.0;
    }
    Oklch::new(lab.l, chroma, hue)
}

/// Cylindrical OKLCH back to Cartesian OKLab.
pub fn oklch_to_oklab(lch: Oklch<f64>) -> Oklab<f64> {
    let hr = hue_degrees(&lch).to_radians();
    Oklab::new(lch.l, lch.chroma * hr.cos(), lch.chroma * hr.sin())
}

/// Hue angle of an OKLCH color in degrees, in [0, 360).
#[inline]
pub fn hue_degrees(lch: &Oklch<f64>) -> f64 {
    lch.hue.into_positive_degrees()
}

/// Encoded sRGB (0-1 channels) to OKLCH.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use okramp::oklab::{hue_degrees, srgb_to_oklch};
///
/// let red = srgb_to_oklch(Srgb::new(1.0, 0.0, 0.0));
/// assert!((red.l - 0.628).abs() < 0.001);
/// assert!((hue_degrees(&red) - 29.23).abs() < 0.01);
/// ```
pub fn srgb_to_oklch(rgb: Srgb<f64>) -> Oklch<f64> {
    let linear = LinSrgb::new(
        srgb_to_linear(rgb.red),
        srgb_to_linear(rgb.green),
        srgb_to_linear(rgb.blue),
    );
    oklab_to_oklch(linear_srgb_to_oklab(linear))
}

/// OKLCH to encoded sRGB without clamping.
///
/// Channels outside [0, 1] mean the color is outside the sRGB gamut; the
/// gamut mapper uses that as its signal to reduce chroma.
pub fn oklch_to_srgb_unclamped(lch: Oklch<f64>) -> Srgb<f64> {
    let linear = oklab_to_linear_srgb(oklch_to_oklab(lch));
    Srgb::new(
        linear_to_srgb(linear.red),
        linear_to_srgb(linear.green),
        linear_to_srgb(linear.blue),
    )
}

/// Whether every channel lies inside [0, 1].
#[inline]
pub fn is_in_gamut(rgb: Srgb<f64>) -> bool {
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (0.0..=1.0).contains(c))
}

/// Clamp each channel into [0, 1].
pub fn clamp_srgb(rgb: Srgb<f64>) -> Srgb<f64> {
    Srgb::new(clamp01(rgb.red), clamp01(rgb.green), clamp01(rgb.blue))
}

/// Quantize to 8-bit channels, clamping out-of-gamut values first.
pub fn srgb_to_u8(rgb: Srgb<f64>) -> Srgb<u8> {
    let to_byte = |c: f64| round_half_up(clamp01(c) * 255.0) as u8;
    Srgb::new(to_byte(rgb.red), to_byte(rgb.green), to_byte(rgb.blue))
}

/// Format as uppercase `#RRGGBB`.
pub fn srgb_to_hex(rgb: Srgb<f64>) -> String {
    let c = srgb_to_u8(rgb);
    format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
}

/// Parse a `#RRGGBB` or `RRGGBB` string into encoded sRGB.
///
/// Surrounding whitespace is ignored. Anything other than exactly six hex
/// digits after an optional single `#` is rejected with an error naming the
/// input.
pub fn parse_hex(input: &str) -> Result<Srgb<f64>, RampError> {
    let invalid = || RampError::InvalidHex(input.to_string());

    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| invalid())
    };

    Ok(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}
