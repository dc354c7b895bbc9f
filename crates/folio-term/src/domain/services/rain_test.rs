use super::*;

fn drawn_cells(buf: &Buffer) -> usize {
    return buf.content().iter().filter(|cell| cell.symbol() != " ").count();
}

fn rain_with_trails(enabled: bool) -> Rain {
    let mut rain = Rain::with_seed(enabled, 7);
    rain.resize(Rect::new(0, 0, 40, 12));
    for _ in 0..60 {
        rain.tick();
    }
    return rain;
}

#[test]
fn it_draws_nothing_when_disabled() {
    let rain = rain_with_trails(false);
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
    (&rain).render(buf.area, &mut buf);
    assert_eq!(drawn_cells(&buf), 0);
}

#[test]
fn it_draws_when_enabled() {
    let rain = rain_with_trails(true);
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
    (&rain).render(buf.area, &mut buf);
    assert!(drawn_cells(&buf) > 0);
}

#[test]
fn it_only_uses_even_columns() {
    let rain = rain_with_trails(true);
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
    (&rain).render(buf.area, &mut buf);

    for y in 0..12 {
        for x in (1..40).step_by(2) {
            assert_eq!(buf[(x, y)].symbol(), " ", "cell {x},{y}");
        }
    }
}

#[test]
fn it_stays_inside_a_smaller_area() {
    let rain = rain_with_trails(true);
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
    let inner = Rect::new(4, 2, 10, 4);
    (&rain).render(inner, &mut buf);

    for (idx, cell) in buf.content().iter().enumerate() {
        let (x, y) = buf.pos_of(idx);
        if cell.symbol() != " " {
            assert!(inner.contains((x, y).into()), "cell {x},{y}");
        }
    }
}

#[test]
fn it_does_not_move_when_disabled() {
    let mut rain = Rain::with_seed(false, 1);
    rain.resize(Rect::new(0, 0, 10, 10));
    let before = rain.streams.iter().map(|s| s.head).collect::<Vec<i32>>();
    rain.tick();
    let after = rain.streams.iter().map(|s| s.head).collect::<Vec<i32>>();
    assert_eq!(before, after);
}

#[test]
fn it_builds_one_stream_per_stride() {
    let mut rain = Rain::with_seed(true, 1);
    rain.resize(Rect::new(0, 0, 9, 5));
    assert_eq!(rain.streams.len(), 5);
    assert_eq!(rain.area, Rect::new(0, 0, 9, 5));

    rain.set_enabled(false);
    assert!(!rain.is_enabled());
}

#[test]
fn it_dims_odd_rows_as_scanlines() {
    assert!(Rain::cell_style(5, 10, 1).add_modifier.contains(Modifier::DIM));
    assert!(!Rain::cell_style(5, 10, 2).add_modifier.contains(Modifier::DIM));
}
