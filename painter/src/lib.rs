//! A 2d logic painter, record the paint commands of widgets.
pub mod color;
mod drawable;
mod painter;
mod style;

pub use cbadge_geom::*;
pub use color::{Color, ColorFilterMatrix};
pub use drawable::*;
pub use lyon_path;
pub use painter::*;
pub use style::*;
