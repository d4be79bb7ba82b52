//! Scene builders, one per visual layer.
//!
//! Each builder is a pure function from geometry (plus sample data for the
//! wave layer) to primitives pushed into a `LayeredFrame`; none talks to a
//! backend. The drawer decides which builders run; flattening the frame
//! enforces the canonical paint order.

mod background;
mod cursor;
mod grid;
mod ruler;
mod wave;

pub use background::build_background_layer;
pub use cursor::build_cursor_layer;
pub use grid::build_grid_layer;
pub use ruler::build_ruler_layer;
pub use wave::build_wave_layer;
