use unicode_width::UnicodeWidthStr;

/// Role of a styled sub-span. The theme decides what each role looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentStyle {
    Prompt,
    Command,
    Heading,
    Label,
    Description,
    BarLabel,
    Bar,
    BarValue,
    Link,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: FragmentStyle,
}

impl Fragment {
    pub fn new(style: FragmentStyle, text: &str) -> Fragment {
        return Fragment {
            text: text.to_string(),
            style,
        };
    }
}

/// A single row of styled fragments.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct VisualLine {
    pub fragments: Vec<Fragment>,
}

impl VisualLine {
    pub fn new(fragments: Vec<Fragment>) -> VisualLine {
        return VisualLine { fragments };
    }

    pub fn plain(text: &str) -> VisualLine {
        return VisualLine::new(vec![Fragment::new(FragmentStyle::Text, text)]);
    }

    pub fn text(&self) -> String {
        return self
            .fragments
            .iter()
            .map(|fragment| fragment.text.as_str())
            .collect();
    }

    pub fn width(&self) -> usize {
        return self
            .fragments
            .iter()
            .map(|fragment| fragment.text.width())
            .sum();
    }
}
