use serde::{Deserialize, Serialize};

/// Visual layers of the waveform scene, in canonical paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Grid,
    Ruler,
    Wave,
    Cursor,
}

/// Ordered set of layers one repaint walks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<LayerKind>,
}

impl LayerStack {
    /// Background first, cursor last; the order the original drawer paints in.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                LayerKind::Background,
                LayerKind::Grid,
                LayerKind::Ruler,
                LayerKind::Wave,
                LayerKind::Cursor,
            ],
        }
    }
}
