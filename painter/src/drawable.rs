use cbadge_geom::{Box2D, Size};
use lyon_path::{
  Path, Winding,
  math::{Transform, point, vector},
};

use crate::{Color, ColorFilterMatrix};

/// A vector graphic described in its own viewport of `size`, painted by
/// stretching the viewport over the bounds it is drawn into.
#[derive(Debug, Clone)]
pub struct Drawable {
  pub size: Size,
  pub paths: Vec<DrawablePath>,
}

#[derive(Debug, Clone)]
pub struct DrawablePath {
  pub path: Path,
  pub color: Color,
}

impl Drawable {
  #[inline]
  pub fn new(size: Size, paths: Vec<DrawablePath>) -> Self { Self { size, paths } }

  /// The built-in smiling face glyph on a 24 * 24 viewport.
  pub fn smile() -> Self {
    let mut face = Path::builder();
    face.add_circle(point(12., 12.), 10., Winding::Positive);
    face.add_circle(point(12., 12.), 8.5, Winding::Negative);

    let mut eyes = Path::builder();
    eyes.add_circle(point(8.5, 9.5), 1.5, Winding::Positive);
    eyes.add_circle(point(15.5, 9.5), 1.5, Winding::Positive);

    let mut mouth = Path::builder();
    mouth.begin(point(7., 14.));
    mouth.quadratic_bezier_to(point(12., 19.5), point(17., 14.));
    mouth.quadratic_bezier_to(point(12., 17.5), point(7., 14.));
    mouth.close();

    let paths = [face.build(), eyes.build(), mouth.build()]
      .into_iter()
      .map(|path| DrawablePath { path, color: Color::BLACK })
      .collect();
    Self::new(Size::new(24., 24.), paths)
  }

  /// The paths of the drawable mapped into `bounds`, with `filter` applied to
  /// every path color.
  ///
  /// An inverted `bounds` mirrors the graphic on that axis.
  pub fn paths_in<'a>(
    &'a self, bounds: Box2D, filter: Option<&'a ColorFilterMatrix>,
  ) -> impl Iterator<Item = DrawablePath> + 'a {
    if self.size.is_empty() {
      log::warn!("Drawable with an empty viewport {:?} paints nothing.", self.size);
    }
    let sx = if self.size.width != 0. { bounds.width() / self.size.width } else { 0. };
    let sy = if self.size.height != 0. { bounds.height() / self.size.height } else { 0. };
    let matrix = Transform::scale(sx, sy).then_translate(vector(bounds.min.x, bounds.min.y));

    self.paths.iter().map(move |p| DrawablePath {
      path: p.path.clone().transformed(&matrix),
      color: filter.map_or(p.color, |f| f.apply_to(&p.color)),
    })
  }
}

#[cfg(test)]
mod tests {
  use cbadge_geom::Point;
  use lyon_path::Event;

  use super::*;

  fn square() -> Drawable {
    let mut b = Path::builder();
    b.begin(point(0., 0.));
    b.line_to(point(24., 0.));
    b.line_to(point(24., 24.));
    b.line_to(point(0., 24.));
    b.close();
    Drawable::new(Size::new(24., 24.), vec![DrawablePath {
      path: b.build(),
      color: Color::new(0, 0, 0, 200),
    }])
  }

  fn corners(path: &Path) -> Vec<(f32, f32)> {
    path
      .iter()
      .filter_map(|e| match e {
        Event::Begin { at } => Some((at.x, at.y)),
        Event::Line { to, .. } => Some((to.x, to.y)),
        _ => None,
      })
      .collect()
  }

  #[test]
  fn stretch_into_bounds() {
    let icon = square();
    let bounds = Box2D::new(Point::new(10., 10.), Point::new(34., 58.));
    let paths: Vec<_> = icon.paths_in(bounds, None).collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(corners(&paths[0].path), vec![(10., 10.), (34., 10.), (34., 58.), (10., 58.)]);
    assert_eq!(paths[0].color, Color::new(0, 0, 0, 200));
  }

  #[test]
  fn filter_applies_to_path_colors() {
    let icon = square();
    let bounds = Box2D::new(Point::new(0., 0.), Point::new(24., 24.));
    let tint = ColorFilterMatrix::src_in(Color::WHITE);
    let path = icon.paths_in(bounds, Some(&tint)).next().unwrap();
    assert_eq!(path.color, Color::new(255, 255, 255, 200));
  }

  #[test]
  fn smile_glyph() {
    let smile = Drawable::smile();
    assert_eq!(smile.size, Size::new(24., 24.));
    assert_eq!(smile.paths.len(), 3);
  }
}
