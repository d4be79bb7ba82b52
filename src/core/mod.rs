pub mod clock;
pub mod envelope;
pub mod types;
pub mod window;

pub use clock::clock_label;
pub use envelope::{EnvelopeColumn, EnvelopeColumns, envelope_columns};
pub use types::{PlaybackState, SampleBuffer, Viewport};
pub use window::WindowGeometry;
