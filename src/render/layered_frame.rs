use crate::core::Viewport;

use super::{LayerKind, LayerStack, RectPrimitive, RenderFrame, TextPrimitive};

/// Primitives accumulated for one layer of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: LayerKind,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Per-layer primitive buckets that flatten into a `RenderFrame` in stack
/// order, so layer builders can run in any order without breaking paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: LayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                rects: Vec::new(),
                texts: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push_rect(&mut self, kind: LayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: LayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    /// Primitive count for one layer; handy for tests and trace logs.
    #[must_use]
    pub fn layer_len(&self, kind: LayerKind) -> usize {
        self.layers
            .iter()
            .find(|layer| layer.kind == kind)
            .map_or(0, |layer| layer.rects.len() + layer.texts.len())
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.rects.extend(layer.rects.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
