//! The attribute bundle a [`CircularBadge`](crate::circular_badge::CircularBadge)
//! is created with.
//!
//! Every attribute is optional, the badge falls back to its default for the
//! absent ones. A bundle is usually built in code with the `with_*` methods,
//! or loaded from a JSON object:
//!
//! ```
//! use cbadge_widgets::prelude::*;
//!
//! let attrs = BadgeAttrs::from_json(
//!   r##"{
//!     "bg_radius": "24dp",
//!     "bg_color": "#FF2196F3",
//!     "stroke_width": 2,
//!     "stroke_color": "@color/white",
//!     "icon_drawable": "@drawable/smile"
//!   }"##,
//! )
//! .unwrap();
//! assert_eq!(attrs.bg_radius, Some(Dimension::Dp(24.)));
//! ```
use std::str::FromStr;

use cbadge_core::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttrError {
  #[error("attribute bundle is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("attribute bundle must be a JSON object, found {0}")]
  NotAnObject(&'static str),
  #[error("`{0}` is not a dimension, expect a number or a string like `12dp` or `24px`")]
  InvalidDimension(String),
  #[error("`{0}` is not a color, expect `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` or `@color/<name>`")]
  InvalidColor(String),
  #[error("`{0}` is not an icon, expect `@drawable/<name>` or a name")]
  InvalidIcon(String),
}

/// A length given either in density-independent pixels or in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
  Dp(f32),
  Px(f32),
}

impl Dimension {
  /// The length in whole device pixels.
  pub fn to_px(self, density: Density) -> f32 {
    match self {
      Dimension::Dp(dp) => density.dp_to_px(dp),
      Dimension::Px(px) => px.round(),
    }
  }
}

impl FromStr for Dimension {
  type Err = AttrError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let text = s.trim();
    let (num, unit): (_, fn(f32) -> Dimension) = if let Some(n) = text.strip_suffix("dip") {
      (n, Dimension::Dp)
    } else if let Some(n) = text.strip_suffix("dp") {
      (n, Dimension::Dp)
    } else if let Some(n) = text.strip_suffix("px") {
      (n, Dimension::Px)
    } else {
      (text, Dimension::Dp)
    };

    num
      .trim_end()
      .parse::<f32>()
      .ok()
      .filter(|v| v.is_finite())
      .map(unit)
      .ok_or_else(|| AttrError::InvalidDimension(s.to_owned()))
  }
}

impl TryFrom<&Value> for Dimension {
  type Error = AttrError;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    match value {
      Value::Number(n) => n
        .as_f64()
        .map(|v| v as f32)
        .filter(|v| v.is_finite())
        .map(Dimension::Dp)
        .ok_or_else(|| AttrError::InvalidDimension(n.to_string())),
      Value::String(s) => s.parse(),
      other => Err(AttrError::InvalidDimension(other.to_string())),
    }
  }
}

/// A color given literally or as a resource of the theme.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
  Value(Color),
  Res(ColorId),
}

impl ColorRef {
  pub fn resolve(&self, resources: &dyn ResourceResolver) -> Option<Color> {
    match self {
      ColorRef::Value(color) => Some(*color),
      ColorRef::Res(id) => resources.color(id),
    }
  }
}

impl From<Color> for ColorRef {
  #[inline]
  fn from(c: Color) -> Self { ColorRef::Value(c) }
}

impl From<ColorId> for ColorRef {
  #[inline]
  fn from(id: ColorId) -> Self { ColorRef::Res(id) }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
  if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
    return None;
  }
  let v = u32::from_str_radix(hex, 16).ok()?;
  // `#RGB` and `#ARGB` repeat every digit.
  let nibble = |shift: u32| {
    let n = (v >> shift) & 0xF;
    (n << 4) | n
  };
  let argb = match hex.len() {
    3 => 0xFF00_0000 | (nibble(8) << 16) | (nibble(4) << 8) | nibble(0),
    4 => (nibble(12) << 24) | (nibble(8) << 16) | (nibble(4) << 8) | nibble(0),
    6 => 0xFF00_0000 | v,
    8 => v,
    _ => return None,
  };
  Some(Color::from_argb(argb))
}

impl FromStr for ColorRef {
  type Err = AttrError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let text = s.trim();
    let color = if let Some(hex) = text.strip_prefix('#') {
      parse_hex_color(hex).map(ColorRef::Value)
    } else {
      text
        .strip_prefix("@color/")
        .filter(|name| is_res_name(name))
        .map(|name| ColorRef::Res(ColorId::new(name.to_owned())))
    };
    color.ok_or_else(|| AttrError::InvalidColor(s.to_owned()))
  }
}

impl TryFrom<&Value> for ColorRef {
  type Error = AttrError;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    match value {
      Value::Number(n) => n
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .map(|argb| ColorRef::Value(Color::from_argb(argb)))
        .ok_or_else(|| AttrError::InvalidColor(n.to_string())),
      Value::String(s) => s.parse(),
      other => Err(AttrError::InvalidColor(other.to_string())),
    }
  }
}

fn is_res_name(name: &str) -> bool {
  !name.is_empty()
    && name
      .chars()
      .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
}

fn parse_icon(value: &Value) -> Result<IconId, AttrError> {
  let invalid = || AttrError::InvalidIcon(value.to_string());
  let text = value.as_str().ok_or_else(invalid)?.trim();
  let name = text.strip_prefix("@drawable/").unwrap_or(text);
  if is_res_name(name) { Ok(IconId::new(name.to_owned())) } else { Err(invalid()) }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Style overrides of a circular badge, `None` means use the default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct BadgeAttrs {
  pub bg_radius: Option<Dimension>,
  pub bg_color: Option<ColorRef>,
  pub stroke_width: Option<Dimension>,
  pub stroke_color: Option<ColorRef>,
  pub stroke_padding: Option<Dimension>,
  pub icon_drawable: Option<IconId>,
  pub icon_color: Option<ColorRef>,
  pub icon_top_padding: Option<Dimension>,
  pub icon_bottom_padding: Option<Dimension>,
  pub icon_left_padding: Option<Dimension>,
  pub icon_right_padding: Option<Dimension>,
}

/// Keep the value of a well-formed attribute, log and drop a malformed one.
fn lenient<T>(key: &str, value: Result<T, AttrError>) -> Option<T> {
  value
    .map_err(|err| log::warn!("Badge attribute `{key}` ignored: {err}"))
    .ok()
}

impl BadgeAttrs {
  /// Load a bundle from a JSON object.
  ///
  /// Only a document that is not a JSON object is an error, a malformed
  /// attribute is dropped as if it was absent.
  pub fn from_json(json: &str) -> Result<Self, AttrError> {
    let value: Value = serde_json::from_str(json)?;
    Self::from_value(&value)
  }

  pub fn from_value(value: &Value) -> Result<Self, AttrError> {
    let Value::Object(map) = value else {
      return Err(AttrError::NotAnObject(json_kind(value)));
    };

    let mut attrs = BadgeAttrs::default();
    for (key, v) in map {
      let dimension = || lenient(key, Dimension::try_from(v));
      let color = || lenient(key, ColorRef::try_from(v));
      match key.as_str() {
        "bg_radius" => attrs.bg_radius = dimension(),
        "bg_color" => attrs.bg_color = color(),
        "stroke_width" => attrs.stroke_width = dimension(),
        "stroke_color" => attrs.stroke_color = color(),
        "stroke_padding" => attrs.stroke_padding = dimension(),
        "icon_drawable" => attrs.icon_drawable = lenient(key, parse_icon(v)),
        "icon_color" => attrs.icon_color = color(),
        "icon_top_padding" => attrs.icon_top_padding = dimension(),
        "icon_bottom_padding" => attrs.icon_bottom_padding = dimension(),
        "icon_left_padding" => attrs.icon_left_padding = dimension(),
        "icon_right_padding" => attrs.icon_right_padding = dimension(),
        unknown => log::debug!("Unknown badge attribute `{unknown}` ignored."),
      }
    }
    Ok(attrs)
  }

  pub fn with_bg_radius(mut self, radius: Dimension) -> Self {
    self.bg_radius = Some(radius);
    self
  }

  pub fn with_bg_color(mut self, color: impl Into<ColorRef>) -> Self {
    self.bg_color = Some(color.into());
    self
  }

  pub fn with_stroke_width(mut self, width: Dimension) -> Self {
    self.stroke_width = Some(width);
    self
  }

  pub fn with_stroke_color(mut self, color: impl Into<ColorRef>) -> Self {
    self.stroke_color = Some(color.into());
    self
  }

  pub fn with_stroke_padding(mut self, padding: Dimension) -> Self {
    self.stroke_padding = Some(padding);
    self
  }

  pub fn with_icon(mut self, icon: IconId) -> Self {
    self.icon_drawable = Some(icon);
    self
  }

  pub fn with_icon_color(mut self, color: impl Into<ColorRef>) -> Self {
    self.icon_color = Some(color.into());
    self
  }

  /// Set the same padding on the four edges of the icon.
  pub fn with_icon_padding(mut self, padding: Dimension) -> Self {
    self.icon_top_padding = Some(padding);
    self.icon_bottom_padding = Some(padding);
    self.icon_left_padding = Some(padding);
    self.icon_right_padding = Some(padding);
    self
  }

  pub fn with_icon_top_padding(mut self, padding: Dimension) -> Self {
    self.icon_top_padding = Some(padding);
    self
  }

  pub fn with_icon_bottom_padding(mut self, padding: Dimension) -> Self {
    self.icon_bottom_padding = Some(padding);
    self
  }

  pub fn with_icon_left_padding(mut self, padding: Dimension) -> Self {
    self.icon_left_padding = Some(padding);
    self
  }

  pub fn with_icon_right_padding(mut self, padding: Dimension) -> Self {
    self.icon_right_padding = Some(padding);
    self
  }
}

impl TryFrom<Value> for BadgeAttrs {
  type Error = AttrError;

  #[inline]
  fn try_from(value: Value) -> Result<Self, Self::Error> { Self::from_value(&value) }
}
