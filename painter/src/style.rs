/// How a shape is painted with the painter's current brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
  #[default]
  Fill,
  Stroke,
}

/// The resolved style of a recorded shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStyle {
  /// Fill the shape.
  Fill,
  /// Outline the shape with the given line width, centered on its edge.
  Stroke(f32),
}
