use std::cell::Cell;
use std::rc::Rc;

use starling_rating::{Effect, Key, RatingControl, RatingProps};

fn counting(props: RatingProps) -> (RatingControl, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let control = RatingControl::new(props.on_change(move |_| counter.set(counter.get() + 1)));
    (control, calls)
}

#[test]
fn readonly_ignores_every_input_sequence() {
    let (mut control, calls) = counting(RatingProps::new(5).with_value(3).with_readonly(true));
    let before = control.view();

    for index in 0..5 {
        control.pointer_enter(index);
        control.click(index);
        control.pointer_leave();
    }
    control.focus(0);
    for key in [Key::Enter, Key::Space, Key::ArrowRight, Key::ArrowLeft, Key::Tab { shift: false }, Key::Other] {
        control.key_down(key);
    }
    control.blur();

    assert_eq!(calls.get(), 0);
    assert_eq!(control.view(), before);
}

#[test]
fn tooltip_shows_on_hover_and_hides_on_leave() {
    let mut control = RatingControl::new(RatingProps::new(5).with_tooltips(["Bad", "OK", "Good"], true));

    control.pointer_enter(1);
    let view = control.view();
    let (item, tooltip) = view.visible_tooltip().expect("tooltip for hovered item");
    assert_eq!((item.index, tooltip.text.as_str()), (1, "OK"));

    control.pointer_leave();
    assert!(control.view().visible_tooltip().is_none());

    control.pointer_enter(4);
    assert!(control.view().visible_tooltip().is_none());
    assert!(control.view().items[4].tooltip.is_none());
}

#[test]
fn status_region_tracks_controlled_value() {
    let mut control = RatingControl::new(RatingProps::new(5));
    assert_eq!(control.view().status, "");

    let effects = control.click(0);
    assert_eq!(effects, vec![Effect::RatingChanged(1)]);
    assert_eq!(control.view().status, "", "value is owned by the caller");

    control.set_value(1);
    assert_eq!(control.view().status, "Selected 1 star");
    control.set_value(3);
    assert_eq!(control.view().status, "Selected 3 stars");
}

#[test]
fn keyboard_round_trip_through_five_items() {
    let mut control = RatingControl::new(RatingProps::new(5));
    control.focus(2);
    control.key_down(Key::ArrowRight);
    assert_eq!(control.state().focused_index, Some(3));
    control.key_down(Key::ArrowRight);
    control.key_down(Key::ArrowRight);
    assert_eq!(control.state().focused_index, Some(0));
    control.key_down(Key::ArrowLeft);
    assert_eq!(control.state().focused_index, Some(4));
}

#[test]
fn unchanged_inputs_render_identical_views() {
    let mut control = RatingControl::new(RatingProps::new(4).with_value(2).with_tooltips(["a", "b", "c", "d"], true));
    control.pointer_enter(3);
    control.focus(1);
    let first = control.view();
    let second = control.view();
    assert_eq!(first, second);
    assert_eq!(control.semantics(), control.semantics());
}
