use std::{borrow::Cow, collections::HashMap, fmt, rc::Rc};

use cbadge_painter::{Color, Drawable};

/// Identify a color resource of the theme by name.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ColorId(Cow<'static, str>);

/// Identify an icon resource of the theme by name.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct IconId(Cow<'static, str>);

impl ColorId {
  pub const BLACK: ColorId = ColorId(Cow::Borrowed("black"));
  pub const WHITE: ColorId = ColorId(Cow::Borrowed("white"));

  #[inline]
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self { Self(name.into()) }

  #[inline]
  pub fn name(&self) -> &str { &self.0 }
}

impl IconId {
  /// The built-in smiling face glyph.
  pub const SMILE: IconId = IconId(Cow::Borrowed("smile"));

  #[inline]
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self { Self(name.into()) }

  #[inline]
  pub fn name(&self) -> &str { &self.0 }
}

impl fmt::Display for ColorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "@color/{}", self.0) }
}

impl fmt::Display for IconId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "@drawable/{}", self.0) }
}

/// Resolve abstract resource identifiers to concrete values.
///
/// Resolution is a pure function of the identifier and the current theme.
pub trait ResourceResolver {
  fn color(&self, id: &ColorId) -> Option<Color>;

  fn drawable(&self, id: &IconId) -> Option<Rc<Drawable>>;
}

/// The resources a host provides to its views: named colors and icons.
#[derive(Debug, Clone)]
pub struct Theme {
  colors: HashMap<ColorId, Color, ahash::RandomState>,
  icons: HashMap<IconId, Rc<Drawable>, ahash::RandomState>,
}

impl Theme {
  /// A theme without any resource.
  pub fn empty() -> Self { Self { colors: <_>::default(), icons: <_>::default() } }

  #[inline]
  pub fn set_color(&mut self, id: ColorId, color: Color) -> Option<Color> {
    self.colors.insert(id, color)
  }

  #[inline]
  pub fn set_icon(&mut self, id: IconId, icon: Drawable) -> Option<Rc<Drawable>> {
    self.icons.insert(id, Rc::new(icon))
  }

  #[inline]
  pub fn remove_icon(&mut self, id: &IconId) -> Option<Rc<Drawable>> { self.icons.remove(id) }
}

impl Default for Theme {
  fn default() -> Self {
    let mut theme = Self::empty();
    theme.set_color(ColorId::BLACK, Color::BLACK);
    theme.set_color(ColorId::WHITE, Color::WHITE);
    theme.set_icon(IconId::SMILE, Drawable::smile());
    theme
  }
}

impl ResourceResolver for Theme {
  fn color(&self, id: &ColorId) -> Option<Color> {
    let color = self.colors.get(id).copied();
    if color.is_none() {
      log::debug!("Color({id}) not init in theme.");
    }
    color
  }

  fn drawable(&self, id: &IconId) -> Option<Rc<Drawable>> {
    let icon = self.icons.get(id).cloned();
    if icon.is_none() {
      log::debug!("Icon({id}) not init in theme.");
    }
    icon
  }
}
