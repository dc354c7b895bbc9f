#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

/// Vertical scroll over a list of rendered rows. `position` is the index of
/// the first visible row.
#[derive(Default, Debug, Clone, Copy)]
pub struct Scroll {
    position: usize,
    content_length: usize,
    viewport_length: usize,
}

impl Scroll {
    pub fn set_state(&mut self, content_length: usize, viewport_length: usize) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max());
    }

    pub fn position(&self) -> usize {
        return self.position;
    }

    pub fn max(&self) -> usize {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max());
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.page());
    }

    pub fn down_page(&mut self) {
        self.position = (self.position + self.page()).min(self.max());
    }

    pub fn last(&mut self) {
        self.position = self.max();
    }

    pub fn is_position_at_last(&self) -> bool {
        return self.position >= self.max();
    }

    fn page(&self) -> usize {
        return self.viewport_length.max(1);
    }
}
