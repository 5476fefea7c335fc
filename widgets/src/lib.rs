pub mod attrs;
pub mod circular_badge;

pub mod prelude {
  pub use cbadge_core::prelude::*;

  pub use crate::{attrs::*, circular_badge::*};
}
