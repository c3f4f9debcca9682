//! Pointer conversion from client pixels to dial view-box units.
//!
//! The dial is an SVG with a square `viewBox` scaled to fill its wrapper
//! `div`. Hit-testing in the survey crate works in view-box units, so every
//! pointer event is mapped through the wrapper's bounding rect first.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use survey::Point;
use survey::consts::VIEWBOX_SIZE;

/// Screen-space rectangle of the dial wrapper, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client-space pointer position into view-box coordinates.
///
/// Returns `None` when the wrapper has no area (not laid out yet).
pub fn client_to_viewbox(client_x: f64, client_y: f64, rect: ClientRect) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some(Point::new(
        (client_x - rect.left) / rect.width * VIEWBOX_SIZE,
        (client_y - rect.top) / rect.height * VIEWBOX_SIZE,
    ))
}

/// View-box point for a mouse or pointer event over `element`.
#[cfg(feature = "csr")]
pub fn viewbox_point(ev: &web_sys::MouseEvent, element: &web_sys::HtmlDivElement) -> Option<Point> {
    let rect = element.get_bounding_client_rect();
    client_to_viewbox(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        ClientRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() },
    )
}
