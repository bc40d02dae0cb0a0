use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Ordering is the contract: commands are replayed in the order they were
/// pushed, so whatever records later paints on top. `push()` is O(1) and
/// `clear()` keeps the allocation, so one surface can be reused every frame.
#[derive(Debug, Default)]
pub struct DrawSurface {
    items: Vec<DrawCmd>,
}

impl DrawSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands, keeping capacity for the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recorded commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a command at the top of the paint order.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}
