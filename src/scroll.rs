//! Scroll-driven signals: reading progress and navbar visibility.
//!
//! The runtime script shipped with every page computes the same two values
//! in the browser; these functions define them.

/// Offset from the top within which the navbar never hides, in px.
pub const NAV_HIDE_BUFFER: f64 = 10.0;

/// Percentage of the scrollable height already scrolled, in `[0, 100]`.
///
/// Pages that do not scroll report 0.
pub fn progress_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Tracks scroll direction to show the navbar on the way up and hide it on
/// the way down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavVisibility {
    buffer: f64,
    last_offset: f64,
    visible: bool,
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::new(NAV_HIDE_BUFFER)
    }
}

impl NavVisibility {
    pub const fn new(buffer: f64) -> Self {
        Self {
            buffer,
            last_offset: 0.0,
            visible: true,
        }
    }

    /// Feed the new scroll offset; returns whether the navbar is visible.
    pub fn update(&mut self, offset: f64) -> bool {
        self.visible = !(offset > self.last_offset && offset > self.buffer);
        self.last_offset = offset;
        self.visible
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}
