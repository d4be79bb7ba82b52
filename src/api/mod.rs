mod drawer;
mod events;
mod options;

pub use drawer::Drawer;
pub use events::{DrawerEvent, EventHub};
pub use options::DrawerOptions;
