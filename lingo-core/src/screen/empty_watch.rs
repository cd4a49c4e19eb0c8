/// Tracks whether a text field is empty and reports only the
/// empty<->non-empty transitions, not every change.
///
/// Control enablement hangs off these edges: the translate button
/// follows the input field, the play button follows the translation
/// display.
#[derive(Debug, Clone)]
pub struct EmptyWatch {
    is_empty: bool,
}

impl EmptyWatch {
    /// Assumes the watched text starts out empty.
    pub fn new() -> Self {
        Self { is_empty: true }
    }

    /// Observe the current text. Returns `Some(enabled)` when the
    /// emptiness flipped (enabled = text is now non-empty), `None` when
    /// nothing changed edge-wise.
    pub fn observe(&mut self, text: &str) -> Option<bool> {
        let now_empty = text.is_empty();
        if now_empty == self.is_empty {
            return None;
        }
        self.is_empty = now_empty;
        Some(!now_empty)
    }
}

impl Default for EmptyWatch {
    fn default() -> Self {
        Self::new()
    }
}
