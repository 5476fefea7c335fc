use std::{
  ops::{Deref, DerefMut},
  rc::Rc,
};

use cbadge_geom::{Box2D, Point, Rect};

use crate::{Color, ColorFilterMatrix, Drawable, PaintStyle, PathStyle};

/// The painter is a two-dimensional grid. The coordinate (0, 0) is at the
/// upper-left corner of the canvas. Along the X-axis, values increase towards
/// the right edge of the canvas. Along the Y-axis, values increase towards the
/// bottom edge of the canvas.
///
/// The painter does not rasterize anything: every draw call is recorded as a
/// [`PaintCommand`] with the state that was current at the time of the call,
/// and the host submits the commands to its own backend.
pub struct Painter {
  state_stack: Vec<PainterState>,
  commands: Vec<PaintCommand>,
  viewport: Rect,
}

#[derive(Debug, Clone)]
pub enum PaintCommand {
  Circle {
    center: Point,
    radius: f32,
    brush: Color,
    path_style: PathStyle,
  },
  Drawable {
    drawable: Rc<Drawable>,
    bounds: Box2D,
    filter: Option<ColorFilterMatrix>,
  },
}

#[derive(Clone, Copy)]
struct PainterState {
  brush: Color,
  style: PaintStyle,
  /// The line width use to stroke path.
  line_width: f32,
  clip: Box2D,
}

impl Painter {
  pub fn new(viewport: Rect) -> Self {
    Self {
      state_stack: vec![PainterState::new(viewport.to_box2d())],
      commands: vec![],
      viewport,
    }
  }

  #[inline]
  pub fn viewport(&self) -> &Rect { &self.viewport }

  /// Take the recorded commands and reset the painter state.
  #[inline]
  pub fn finish(&mut self) -> Vec<PaintCommand> {
    self.reset();
    std::mem::take(&mut self.commands)
  }

  #[inline]
  pub fn commands(&self) -> &[PaintCommand] { &self.commands }

  /// Saves the entire state and return a guard to auto restore the state when
  /// if drop.
  #[must_use]
  pub fn save_guard(&mut self) -> PainterGuard<'_> {
    self.save();
    PainterGuard(self)
  }

  /// Saves the entire state of the canvas by pushing the current drawing state
  /// onto a stack.
  pub fn save(&mut self) {
    let new_state = *self.current_state();
    self.state_stack.push(new_state);
  }

  /// Restores the most recently saved canvas state by popping the top entry in
  /// the drawing state stack. The root state is never popped.
  #[inline]
  pub fn restore(&mut self) {
    if self.state_stack.len() > 1 {
      self.state_stack.pop();
    }
  }

  pub fn reset(&mut self) {
    self.state_stack.clear();
    self
      .state_stack
      .push(PainterState::new(self.viewport.to_box2d()));
  }

  #[inline]
  pub fn get_brush(&self) -> Color { self.current_state().brush }

  /// Change the color that used to draw path.
  #[inline]
  pub fn set_brush(&mut self, brush: impl Into<Color>) -> &mut Self {
    self.current_state_mut().brush = brush.into();
    self
  }

  #[inline]
  pub fn get_style(&self) -> PaintStyle { self.current_state().style }

  #[inline]
  pub fn set_style(&mut self, style: PaintStyle) -> &mut Self {
    self.current_state_mut().style = style;
    self
  }

  /// Return the line width of the stroke pen.
  #[inline]
  pub fn get_line_width(&self) -> f32 { self.current_state().line_width }

  /// Set the line width of the stroke pen with `line_width`
  #[inline]
  pub fn set_line_width(&mut self, line_width: f32) -> &mut Self {
    self.current_state_mut().line_width = line_width;
    self
  }

  /// The bounds of the current clip region.
  #[inline]
  pub fn clip_bounds(&self) -> Box2D { self.current_state().clip }

  /// Intersect the current clip region with `rect`.
  pub fn clip(&mut self, rect: &Box2D) -> &mut Self {
    let state = self.current_state_mut();
    state.clip = state.clip.intersection_unchecked(rect);
    self
  }

  /// Draw a circle with the current brush, style and line width.
  pub fn draw_circle(&mut self, center: Point, radius: f32) -> &mut Self {
    let PainterState { brush, style, line_width, .. } = *self.current_state();
    let path_style = match style {
      PaintStyle::Fill => PathStyle::Fill,
      PaintStyle::Stroke => PathStyle::Stroke(line_width),
    };
    self
      .commands
      .push(PaintCommand::Circle { center, radius, brush, path_style });
    self
  }

  /// Draw `drawable` stretched over `bounds`, its colors passed through
  /// `filter`.
  pub fn draw_drawable(
    &mut self, drawable: Rc<Drawable>, bounds: Box2D, filter: Option<ColorFilterMatrix>,
  ) -> &mut Self {
    self
      .commands
      .push(PaintCommand::Drawable { drawable, bounds, filter });
    self
  }
}

impl Painter {
  fn current_state(&self) -> &PainterState {
    // the root state is pushed on creation and `restore` never pops it.
    &self.state_stack[self.state_stack.len() - 1]
  }

  fn current_state_mut(&mut self) -> &mut PainterState {
    let last = self.state_stack.len() - 1;
    &mut self.state_stack[last]
  }
}

impl PainterState {
  fn new(clip: Box2D) -> Self {
    Self { brush: Color::BLACK, style: PaintStyle::Fill, line_width: 1., clip }
  }
}

impl PartialEq for PaintCommand {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (
        PaintCommand::Circle { center: c1, radius: r1, brush: b1, path_style: s1 },
        PaintCommand::Circle { center: c2, radius: r2, brush: b2, path_style: s2 },
      ) => c1 == c2 && r1 == r2 && b1 == b2 && s1 == s2,
      (
        PaintCommand::Drawable { drawable: d1, bounds: r1, filter: f1 },
        PaintCommand::Drawable { drawable: d2, bounds: r2, filter: f2 },
      ) => Rc::ptr_eq(d1, d2) && r1 == r2 && f1 == f2,
      _ => false,
    }
  }
}

/// An RAII implementation of a "scoped state" of the painter. When this
/// structure is dropped (falls out of scope), changed state will auto restore.
/// The data can be accessed through this guard via its Deref and DerefMut
/// implementations.
pub struct PainterGuard<'a>(&'a mut Painter);

impl Drop for PainterGuard<'_> {
  #[inline]
  fn drop(&mut self) {
    debug_assert!(!self.0.state_stack.is_empty());
    self.0.restore();
  }
}

impl Deref for PainterGuard<'_> {
  type Target = Painter;
  #[inline]
  fn deref(&self) -> &Self::Target { self.0 }
}

impl DerefMut for PainterGuard<'_> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target { self.0 }
}

#[cfg(test)]
mod tests {
  use cbadge_geom::{Size, rect};

  use super::*;

  fn painter() -> Painter { Painter::new(Rect::from_size(Size::new(100., 100.))) }

  #[test]
  fn save_guard() {
    let mut layer = painter();
    {
      let mut paint = layer.save_guard();
      paint.set_brush(Color::RED).set_line_width(3.);
      assert_eq!(paint.get_brush(), Color::RED);
      {
        let mut p2 = paint.save_guard();
        p2.set_style(PaintStyle::Stroke);
        assert_eq!(p2.get_style(), PaintStyle::Stroke);
      }
      assert_eq!(paint.get_style(), PaintStyle::Fill);
      assert_eq!(paint.get_line_width(), 3.);
    }
    assert_eq!(layer.get_brush(), Color::BLACK);
    assert_eq!(layer.get_line_width(), 1.);
  }

  #[test]
  fn record_with_current_state() {
    let mut p = painter();
    let center = Point::new(50., 50.);
    p.set_style(PaintStyle::Stroke)
      .set_brush(Color::BLUE)
      .set_line_width(4.)
      .draw_circle(center, 54.);
    p.set_style(PaintStyle::Fill)
      .set_brush(Color::RED)
      .draw_circle(center, 50.);

    let cmds = p.finish();
    assert_eq!(cmds, vec![
      PaintCommand::Circle {
        center,
        radius: 54.,
        brush: Color::BLUE,
        path_style: PathStyle::Stroke(4.)
      },
      PaintCommand::Circle { center, radius: 50., brush: Color::RED, path_style: PathStyle::Fill },
    ]);
    assert!(p.commands().is_empty());
    assert_eq!(p.get_brush(), Color::BLACK);
  }

  #[test]
  fn clip_bounds() {
    let mut p = painter();
    assert_eq!(p.clip_bounds(), rect(0., 0., 100., 100.).to_box2d());
    {
      let mut guard = p.save_guard();
      guard.clip(&rect(10., 20., 200., 30.).to_box2d());
      assert_eq!(guard.clip_bounds(), rect(10., 20., 90., 30.).to_box2d());
    }
    assert_eq!(p.clip_bounds(), rect(0., 0., 100., 100.).to_box2d());
  }

  #[test]
  fn restore_keeps_root_state() {
    let mut p = painter();
    p.restore();
    p.restore();
    p.set_brush(Color::GREEN);
    assert_eq!(p.get_brush(), Color::GREEN);
  }

  #[test]
  fn drawable_command_equality() {
    let icon = Rc::new(Drawable::smile());
    let bounds = rect(10., 10., 80., 80.).to_box2d();
    let filter = Some(ColorFilterMatrix::src_in(Color::WHITE));
    let mut p = painter();
    p.draw_drawable(icon.clone(), bounds, filter);
    p.draw_drawable(icon.clone(), bounds, filter);
    p.draw_drawable(Rc::new(Drawable::smile()), bounds, filter);
    let cmds = p.finish();
    assert_eq!(cmds[0], cmds[1]);
    assert_ne!(cmds[0], cmds[2]);
  }
}
