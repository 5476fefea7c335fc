/// How the parent constrains one axis of a child during size negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
  /// The child must be exactly the hint size.
  Exactly,
  /// The child can be as large as it wants up to the hint size.
  AtMost,
  /// The parent imposes no constraint, the hint is meaningless.
  Unspecified,
}

/// The constraint of one axis proposed by the parent: a mode and a size hint
/// in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
  pub mode: MeasureMode,
  pub size: f32,
}

impl MeasureSpec {
  #[inline]
  pub const fn new(mode: MeasureMode, size: f32) -> Self { Self { mode, size } }

  #[inline]
  pub const fn exactly(size: f32) -> Self { Self::new(MeasureMode::Exactly, size) }

  #[inline]
  pub const fn at_most(size: f32) -> Self { Self::new(MeasureMode::AtMost, size) }

  #[inline]
  pub const fn unspecified() -> Self { Self::new(MeasureMode::Unspecified, 0.) }

  /// Reconcile the size a view wants on this axis with the constraint.
  pub fn resolve(self, desired: f32) -> f32 {
    match self.mode {
      MeasureMode::Exactly => self.size,
      MeasureMode::AtMost => desired.min(self.size),
      MeasureMode::Unspecified => desired,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exactly_ignores_desired() {
    for desired in [0., 10., 200., 5000.] {
      assert_eq!(MeasureSpec::exactly(150.).resolve(desired), 150.);
    }
  }

  #[test]
  fn at_most_caps_desired() {
    assert_eq!(MeasureSpec::at_most(150.).resolve(200.), 150.);
    assert_eq!(MeasureSpec::at_most(150.).resolve(100.), 100.);
    assert_eq!(MeasureSpec::at_most(150.).resolve(150.), 150.);
  }

  #[test]
  fn unspecified_takes_desired() {
    assert_eq!(MeasureSpec::unspecified().resolve(200.), 200.);
    assert_eq!(MeasureSpec::new(MeasureMode::Unspecified, 3.).resolve(200.), 200.);
  }
}
