use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardPaste(String),
    KeyboardUp,
    KeyboardDown,
    UIFocusInput,
    UIResize,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
