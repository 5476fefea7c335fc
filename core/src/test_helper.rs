use std::{cell::Cell, rc::Rc};

use cbadge_geom::Density;
use cbadge_painter::{PaintCommand, Size};

use crate::{
  host::ViewHost,
  measure::MeasureSpec,
  render::{Render, record_paint},
  theme::{ResourceResolver, Theme},
};

/// A host for tests, it counts the layout and paint requests it receives
/// instead of scheduling them.
pub struct TestHost {
  density: Density,
  theme: Theme,
  layout_requests: Cell<usize>,
  invalidations: Cell<usize>,
}

impl TestHost {
  pub fn new(density: f32) -> Rc<Self> { Self::with_theme(density, Theme::default()) }

  pub fn with_theme(density: f32, theme: Theme) -> Rc<Self> {
    Rc::new(Self {
      density: Density::new(density),
      theme,
      layout_requests: Cell::new(0),
      invalidations: Cell::new(0),
    })
  }

  #[inline]
  pub fn layout_requests(&self) -> usize { self.layout_requests.get() }

  #[inline]
  pub fn invalidations(&self) -> usize { self.invalidations.get() }

  pub fn reset_requests(&self) {
    self.layout_requests.set(0);
    self.invalidations.set(0);
  }
}

impl ViewHost for TestHost {
  fn density(&self) -> Density { self.density }

  fn resources(&self) -> &dyn ResourceResolver { &self.theme }

  fn request_layout(&self) { self.layout_requests.set(self.layout_requests.get() + 1); }

  fn invalidate(&self) { self.invalidations.set(self.invalidations.get() + 1); }
}

/// Run a whole frame for `view`: measure it with the constraints, then paint it
/// into a box of the measured size.
pub fn layout_and_paint(
  view: &mut impl Render, width: MeasureSpec, height: MeasureSpec,
) -> (Size, Vec<PaintCommand>) {
  let size = view.measure(width, height);
  let commands = record_paint(view, size);
  (size, commands)
}

#[cfg(test)]
mod tests {
  use cbadge_painter::{Color, PaintStyle, Point};

  use super::*;
  use crate::render::PaintingCtx;

  struct Dot(f32);

  impl Render for Dot {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
      Size::new(width.resolve(self.0 * 2.), height.resolve(self.0 * 2.))
    }

    fn paint(&self, ctx: &mut PaintingCtx) {
      let size = ctx.box_size();
      ctx
        .painter()
        .set_style(PaintStyle::Fill)
        .set_brush(Color::RED)
        .draw_circle(Point::new(size.width / 2., size.height / 2.), self.0);
    }
  }

  #[test]
  fn count_requests() {
    let host = TestHost::new(1.);
    host.request_layout();
    host.invalidate();
    host.invalidate();
    assert_eq!(host.layout_requests(), 1);
    assert_eq!(host.invalidations(), 2);
    host.reset_requests();
    assert_eq!((host.layout_requests(), host.invalidations()), (0, 0));
  }

  #[test]
  fn frame_paints_in_measured_box() {
    let mut dot = Dot(10.);
    let (size, cmds) =
      layout_and_paint(&mut dot, MeasureSpec::exactly(40.), MeasureSpec::unspecified());
    assert_eq!(size, Size::new(40., 20.));
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
      PaintCommand::Circle { center, .. } => assert_eq!(*center, Point::new(20., 10.)),
      other => panic!("unexpected command {other:?}"),
    }
  }
}
