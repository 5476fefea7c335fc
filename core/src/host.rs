use cbadge_geom::Density;

use crate::theme::ResourceResolver;

/// The capabilities a view needs from the host it lives in.
///
/// The host calls [`Render::measure`](crate::render::Render::measure) and
/// [`Render::paint`](crate::render::Render::paint) serially on its UI thread;
/// a view calls back into the host to ask for another pass.
pub trait ViewHost {
  /// The display density used to convert dp to device pixels.
  fn density(&self) -> Density;

  /// The resources of the current theme.
  fn resources(&self) -> &dyn ResourceResolver;

  /// Ask the host to measure and lay out the view again.
  fn request_layout(&self);

  /// Ask the host to paint the view again.
  fn invalidate(&self);
}
