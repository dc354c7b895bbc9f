use super::*;

#[test]
fn it_clamps_to_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    assert_eq!(scroll.max(), 20);

    scroll.up();
    assert_eq!(scroll.position(), 0);

    scroll.last();
    assert_eq!(scroll.position(), 20);
    scroll.down();
    assert_eq!(scroll.position(), 20);
    assert!(scroll.is_position_at_last());
}

#[test]
fn it_pages() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);

    scroll.down_page();
    assert_eq!(scroll.position(), 10);
    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position(), 20);
    scroll.up_page();
    assert_eq!(scroll.position(), 10);
}

#[test]
fn it_does_not_scroll_short_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 10);
    scroll.down();
    scroll.down_page();
    assert_eq!(scroll.position(), 0);
    assert!(scroll.is_position_at_last());
}

#[test]
fn it_reclamps_when_content_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 10);
    scroll.last();
    scroll.set_state(12, 10);
    assert_eq!(scroll.position(), 2);
}
