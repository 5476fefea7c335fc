use cbadge_painter::{PaintCommand, Painter, Rect, Size};

use crate::measure::MeasureSpec;

/// A view that takes part in the two-phase layout protocol of the host: it is
/// measured first, then painted into the box the host assigned to it.
pub trait Render {
  /// Negotiate the size with the constraints proposed by the parent, and
  /// return the size the view takes.
  fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

  /// Paint the view into `ctx` by its own coordinate system, the origin is the
  /// left-top of the view box.
  fn paint(&self, ctx: &mut PaintingCtx);
}

pub struct PaintingCtx<'a> {
  box_size: Size,
  painter: &'a mut Painter,
}

impl<'a> PaintingCtx<'a> {
  #[inline]
  pub fn new(box_size: Size, painter: &'a mut Painter) -> Self { Self { box_size, painter } }

  /// The size of the box the host laid the view out in.
  #[inline]
  pub fn box_size(&self) -> Size { self.box_size }

  /// Return the 2d painter to draw 2d things.
  #[inline]
  pub fn painter(&mut self) -> &mut Painter { self.painter }
}

/// Paint `view` into a fresh painter clipped to a box of `size`, and return
/// what it recorded.
pub fn record_paint(view: &impl Render, size: Size) -> Vec<PaintCommand> {
  let mut painter = Painter::new(Rect::from_size(size));
  view.paint(&mut PaintingCtx::new(size, &mut painter));
  painter.finish()
}
