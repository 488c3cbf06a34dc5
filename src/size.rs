//! Cell-based sizes.

/// A width and height measured in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Shrinks the size by a frame, never going below zero.
    pub fn shrink(self, horizontal: usize, vertical: usize) -> Self {
        Self {
            width: self.width.saturating_sub(horizontal),
            height: self.height.saturating_sub(vertical),
        }
    }
}
