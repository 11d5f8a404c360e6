use super::Scroll;

#[test]
fn it_stays_at_the_top_when_content_fits() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 20);
    scroll.last();

    assert_eq!(scroll.position, 0);

    scroll.down();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_snaps_to_the_newest_lines() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 20);
    scroll.last();

    assert_eq!(scroll.position, 30);
}

#[test]
fn it_clamps_scrolling_down() {
    let mut scroll = Scroll::default();
    scroll.set_state(25, 20);
    scroll.down_page();

    assert_eq!(scroll.position, 5);
}

#[test]
fn it_scrolls_up_to_zero() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 20);
    scroll.last();
    scroll.up();
    assert_eq!(scroll.position, 29);

    scroll.up_page();
    scroll.up_page();
    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_when_content_shrinks_below_position() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 20);
    scroll.last();
    scroll.set_state(50, 45);

    assert_eq!(scroll.position, 5);
}
