use crate::frame::FrameInfo;

/// Source of per-frame timing for the camera update loop.
///
/// Yields one `FrameInfo` per redraw; its `delta` weights movement speed.
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Drop the time spent away (unfocused, hidden) from the next delta
    fn resync(&mut self);
}
