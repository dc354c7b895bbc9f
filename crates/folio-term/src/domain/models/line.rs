#[cfg(test)]
#[path = "line_test.rs"]
mod tests;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum LineKind {
    Input,
    #[default]
    Output,
    Error,
}

/// One entry of the display log. Never mutated after it is pushed.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct TerminalLine {
    pub seq: usize,
    pub kind: LineKind,
    pub content: String,
}

impl TerminalLine {
    pub fn new(seq: usize, kind: LineKind, content: &str) -> TerminalLine {
        return TerminalLine {
            seq,
            kind,
            content: content.replace('\t', "  "),
        };
    }

    pub fn is_error(&self) -> bool {
        return self.kind == LineKind::Error;
    }
}
