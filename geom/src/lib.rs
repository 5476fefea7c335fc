/// The tag for logic unit system to prevent mixing values from different
/// system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicUnit;

pub type Rect<T = f32> = euclid::Rect<T, LogicUnit>;
pub type Point<T = f32> = euclid::Point2D<T, LogicUnit>;
pub type Size<T = f32> = euclid::Size2D<T, LogicUnit>;
pub type Box2D<T = f32> = euclid::Box2D<T, LogicUnit>;

pub use euclid::rect;

/// The number of device pixels in one density-independent pixel (dp).
///
/// Every length the host hands out in dp passes through one `Density` before
/// it reaches a painter, which works in device pixels only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
  pub const ONE: Density = Density(1.);

  #[inline]
  pub const fn new(scale: f32) -> Self { Self(scale) }

  /// Convert a dp length to whole device pixels.
  #[inline]
  pub fn dp_to_px(self, dp: f32) -> f32 { (dp * self.0).round() }

  /// Convert device pixels back to dp.
  #[inline]
  pub fn px_to_dp(self, px: f32) -> f32 { px / self.0 }
}

impl Default for Density {
  #[inline]
  fn default() -> Self { Self::ONE }
}

/// Insets for the four edges of a box.
///
/// Values are not validated: a negative inset grows the box on that edge, and
/// insets larger than the box produce an inverted box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
  pub left: f32,
  pub right: f32,
  pub bottom: f32,
  pub top: f32,
}

impl EdgeInsets {
  #[inline]
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self { top, right, bottom, left }
  }

  #[inline]
  pub const fn all(value: f32) -> Self { Self { top: value, left: value, bottom: value, right: value } }

  /// Shrink `rect` by the insets, each edge moved independently.
  pub fn deflate(&self, rect: &Box2D) -> Box2D {
    Box2D::new(
      Point::new(rect.min.x + self.left, rect.min.y + self.top),
      Point::new(rect.max.x - self.right, rect.max.y - self.bottom),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dp_round_trip() {
    for scale in [1., 1.5, 2., 2.625, 3., 4.] {
      let density = Density::new(scale);
      for dp in 0..200 {
        let dp = dp as f32;
        let back = density.px_to_dp(density.dp_to_px(dp));
        assert!((back.round() - dp).abs() < f32::EPSILON, "{dp}dp at {scale}x came back as {back}");
      }
    }
  }

  #[test]
  fn dp_to_whole_pixels() {
    let density = Density::new(1.5);
    assert_eq!(density.dp_to_px(3.), 5.);
    assert_eq!(density.dp_to_px(10.), 15.);
    assert_eq!(Density::new(2.).dp_to_px(50.), 100.);
  }

  #[test]
  fn deflate_edges_independently() {
    let rect = Box2D::new(Point::new(0., 0.), Point::new(100., 80.));
    let insets = EdgeInsets::new(1., 2., 3., 4.);
    let inner = insets.deflate(&rect);
    assert_eq!(inner.min, Point::new(4., 1.));
    assert_eq!(inner.max, Point::new(98., 77.));
  }

  #[test]
  fn oversized_insets_invert() {
    let rect = Box2D::new(Point::new(0., 0.), Point::new(10., 10.));
    let inner = EdgeInsets::all(8.).deflate(&rect);
    assert!(inner.is_negative());
    assert_eq!(inner.min, Point::new(8., 8.));
    assert_eq!(inner.max, Point::new(2., 2.));

    let grown = EdgeInsets::all(-5.).deflate(&rect);
    assert_eq!(grown.min, Point::new(-5., -5.));
    assert_eq!(grown.max, Point::new(15., 15.));
  }
}
