use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
  pub red: u8,
  pub green: u8,
  pub blue: u8,
  pub alpha: u8,
}

/// The color filter matrix.
///
/// The effect of ColorFilterMatrix {matrix, base_color}, when apply to Color
/// of (R, G, B, A) will be: matrix * [R, G, B, A] + base_color,
/// and when base_color is None, the effect will be matrix * [R, G, B, A].
/// with matrix is:  | r1 r2 r3 r4 |
///                  | g1 g2 g3 g4 |
///                  | b1 b2 b3 b4 |
///                  | a1 a2 a3 a4 |
/// you can get color of (R', G', B', A') by:
///     R' = r1*R + r2*G + r3*B + r4*A + base.R
///     G' = g1*R + g2*G + g3*B + g4*A + base.G
///     B' = b1*R + b2*G + b3*B + b4*A + base.B
///     A' = a1*R + a2*G + a3*B + a4*A + base.A
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorFilterMatrix {
  /// Row-major 4 * 4 matrix applied to the color (R, G, B, A).
  pub matrix: [f32; 16],

  /// Added to the result color after the matrix applied.
  pub base_color: Option<Color>,
}

#[inline]
fn dot(row: usize, m: &[f32; 16], c: &[f32; 4]) -> f32 {
  let r = row * 4;
  m[r] * c[0] + m[r + 1] * c[1] + m[r + 2] * c[2] + m[r + 3] * c[3]
}

impl ColorFilterMatrix {
  #[inline]
  pub fn new(matrix: [f32; 16]) -> Self { Self { matrix, base_color: None } }

  pub fn with_base(self, color: Color) -> Self { Self { base_color: Some(color), ..self } }

  /// A source-in tint: every painted pixel takes the rgb of `tint`, and keeps
  /// its own coverage scaled by the alpha of `tint`.
  #[rustfmt::skip]
  pub fn src_in(tint: Color) -> Self {
    let alpha = u8_component_to_f32(tint.alpha);
    Self::new([
      0., 0., 0., 0., // red
      0., 0., 0., 0., // green
      0., 0., 0., 0., // blue
      0., 0., 0., alpha, // alpha
    ])
    .with_base(Color { alpha: 0, ..tint })
  }

  pub fn apply_to(&self, color: &Color) -> Color {
    let c = color.into_f32_components();
    let base = self
      .base_color
      .as_ref()
      .map(|c| c.into_f32_components())
      .unwrap_or([0.; 4]);

    Color::from_f32_rgba(
      (base[0] + dot(0, &self.matrix, &c)).clamp(0., 1.),
      (base[1] + dot(1, &self.matrix, &c)).clamp(0., 1.),
      (base[2] + dot(2, &self.matrix, &c)).clamp(0., 1.),
      (base[3] + dot(3, &self.matrix, &c)).clamp(0., 1.),
    )
  }
}

impl Color {
  #[inline]
  pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
    Self { red, green, blue, alpha }
  }

  #[inline]
  pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self::new(r, g, b, 255) }

  #[inline]
  pub const fn from_f32_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
    Self {
      red: f32_component_to_u8(red),
      green: f32_component_to_u8(green),
      blue: f32_component_to_u8(blue),
      alpha: f32_component_to_u8(alpha),
    }
  }

  /// Create a color from a packed `0xAARRGGBB` value, the layout color
  /// resources are usually written in.
  #[inline]
  pub const fn from_argb(argb: u32) -> Self {
    let [alpha, red, green, blue] = argb.to_be_bytes();
    Self { red, green, blue, alpha }
  }

  #[inline]
  pub const fn into_argb(self) -> u32 {
    let Self { red, green, blue, alpha } = self;
    u32::from_be_bytes([alpha, red, green, blue])
  }

  /// return an new color after the color applied alpha.
  #[inline]
  pub fn apply_alpha(mut self, alpha: f32) -> Self {
    let base: f32 = u8_component_to_f32(self.alpha);
    self.alpha = f32_component_to_u8(base * alpha);
    self
  }

  #[inline]
  pub fn apply_matrix(&self, matrix: &ColorFilterMatrix) -> Self { matrix.apply_to(self) }

  #[inline]
  pub fn into_f32_components(self) -> [f32; 4] {
    let Self { red, green, blue, alpha } = self;
    [
      u8_component_to_f32(red),
      u8_component_to_f32(green),
      u8_component_to_f32(blue),
      u8_component_to_f32(alpha),
    ]
  }
}

const C23: u32 = 0x4b00_0000;
// Algorithm from https://github.com/Ogeon/palette/pull/184/files.
const fn u8_component_to_f32(v: u8) -> f32 {
  let comp_u = v as u32 + C23;
  let comp_f = f32::from_bits(comp_u) - f32::from_bits(C23);
  let max_u = u8::MAX as u32 + C23;
  let max_f = (f32::from_bits(max_u) - f32::from_bits(C23)).recip();
  comp_f * max_f
}

// Algorithm from https://github.com/Ogeon/palette/pull/184/files.
const fn f32_component_to_u8(v: f32) -> u8 {
  let max = u8::MAX as f32;
  let scaled = (v * max).min(max);
  let f = scaled + f32::from_bits(C23);
  (f.to_bits().saturating_sub(C23)) as u8
}

impl Color {
  pub const BLACK: Color = Self::from_rgb(0, 0, 0);
  pub const WHITE: Color = Self::from_rgb(255, 255, 255);
  pub const RED: Color = Self::from_rgb(255, 0, 0);
  pub const GREEN: Color = Self::from_rgb(0, 128, 0);
  pub const BLUE: Color = Self::from_rgb(0, 0, 255);
  pub const GRAY: Color = Self::from_rgb(128, 128, 128);
  pub const YELLOW: Color = Self::from_rgb(255, 255, 0);
  pub const TRANSPARENT: Color = Self::new(0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn argb_layout() {
    let c = Color::from_argb(0x80FF_2010);
    assert_eq!(c, Color::new(0xFF, 0x20, 0x10, 0x80));
    assert_eq!(c.into_argb(), 0x80FF_2010);
    assert_eq!(Color::from_argb(0xFF00_0000), Color::BLACK);
  }

  #[test]
  fn src_in_replaces_rgb_keeps_alpha() {
    let tint = ColorFilterMatrix::src_in(Color::WHITE);
    assert_eq!(tint.apply_to(&Color::RED), Color::WHITE);
    assert_eq!(tint.apply_to(&Color::new(10, 200, 30, 128)), Color::new(255, 255, 255, 128));
    assert_eq!(tint.apply_to(&Color::TRANSPARENT).alpha, 0);
  }

  #[test]
  fn src_in_multiplies_tint_alpha() {
    let tint = ColorFilterMatrix::src_in(Color::BLUE.apply_alpha(0.5));
    let painted = tint.apply_to(&Color::BLACK);
    assert_eq!((painted.red, painted.green, painted.blue), (0, 0, 255));
    assert_eq!(painted.alpha, Color::BLUE.apply_alpha(0.5).alpha);
  }

  #[test]
  fn color_serde() {
    let json = serde_json::to_string(&Color::GRAY).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::GRAY);
  }
}
