#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

/// Submitted commands, oldest first, with a recall cursor.
///
/// The cursor counts back from the newest entry: `Some(0)` is the most recent
/// command, `None` means the user is not navigating.
#[derive(Default, Debug)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        if command.is_empty() {
            return;
        }

        self.entries.push(command.to_string());
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn entries(&self) -> &[String] {
        return &self.entries;
    }

    pub fn is_navigating(&self) -> bool {
        return self.cursor.is_some();
    }

    /// Steps toward older entries. Returns the text the input buffer should
    /// show, or `None` when the buffer should be left alone.
    pub fn previous(&mut self) -> Option<String> {
        let next = match self.cursor {
            None => 0,
            Some(idx) => idx + 1,
        };

        if next >= self.entries.len() {
            return None;
        }

        self.cursor = Some(next);
        return Some(self.entry_at(next));
    }

    /// Steps toward newer entries. Stepping past the newest entry leaves
    /// recall mode and returns an empty buffer.
    pub fn next(&mut self) -> Option<String> {
        match self.cursor {
            None => return None,
            Some(0) => {
                self.cursor = None;
                return Some("".to_string());
            }
            Some(idx) => {
                self.cursor = Some(idx - 1);
                return Some(self.entry_at(idx - 1));
            }
        }
    }

    fn entry_at(&self, cursor: usize) -> String {
        return self.entries[self.entries.len() - 1 - cursor].to_string();
    }
}
