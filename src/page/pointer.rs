//! Pointer coordinates relative to the page container.

use serde::Serialize;

/// Last observed pointer position, in px from the container's top-left
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Container bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

/// One pointer-move event as seen by the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    /// `None` while the container is not laid out
    pub bounds: Option<Bounds>,
}

impl PointerSample {
    /// Position relative to the container. Events outside the container
    /// still map, to coordinates outside `[0, w] x [0, h]`.
    pub fn relative_position(&self) -> Option<PointerPosition> {
        let bounds = self.bounds?;
        Some(PointerPosition {
            x: self.client_x - bounds.left,
            y: self.client_y - bounds.top,
        })
    }
}

/// Parallax offset in px for an element that drifts with the pointer.
/// Zero at the container center, `±strength` at the edges.
pub fn parallax_offset(pointer: PointerPosition, bounds: Bounds, strength: f64) -> (f64, f64) {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (pointer.x / bounds.width).clamp(0.0, 1.0) * 2.0 - 1.0;
    let ny = (pointer.y / bounds.height).clamp(0.0, 1.0) * 2.0 - 1.0;
    (nx * strength, ny * strength)
}
