//! The view protocol of cbadge: size negotiation, painting, the host
//! collaborator and theme resources.
pub mod host;
pub mod measure;
pub mod render;
pub mod theme;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_helper;

pub use cbadge_painter;

pub mod prelude {
  pub use cbadge_painter::*;

  pub use crate::{
    host::ViewHost,
    measure::{MeasureMode, MeasureSpec},
    render::{PaintingCtx, Render, record_paint},
    theme::{ColorId, IconId, ResourceResolver, Theme},
  };
}
