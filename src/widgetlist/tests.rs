use super::*;
use crate::config::{Config, KeysConfig, ListConfig};
use crate::context::{Context, Theme};
use crate::filter::FilterPolicy;
use crate::focus::{FocusCoordinator, FocusState};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use std::cell::RefCell;
use std::rc::Rc;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

fn list(data: Vec<String>, height: usize) -> Model<String> {
    let mut list = Model::new(&Context::new(), SimpleItem::constructor());
    list.set_size(Size::new(30, height));
    list.set_items(data);
    list
}

type Events = Rc<RefCell<Vec<(&'static str, usize)>>>;

fn record(list: &mut Model<String>) -> Events {
    let events: Events = Rc::new(RefCell::new(Vec::new()));

    let moving = events.clone();
    list.set_on_cursor_moving(move |i| moving.borrow_mut().push(("moving", i)));
    let moved = events.clone();
    list.set_on_cursor_moved(move |i| moved.borrow_mut().push(("moved", i)));

    events
}

/// Page and cursor agree with the selection, and the focused item is the
/// selected one.
fn assert_consistent(list: &Model<String>) {
    match list.global_index() {
        Some(g) => {
            assert!(g < list.len(), "selection {g} out of {}", list.len());
            let position = list.position_of(g).expect("selection must be visible");
            assert_eq!(list.page() * list.per_page() + list.cursor(), position);
            assert_eq!(list.items.active_index(), Some(g));
            assert!(list.item_widget(g).unwrap().is_focused());
        }
        None => {
            assert_eq!(list.visible_len(), 0);
            assert_eq!(list.items.state(), FocusState::Idle);
        }
    }
}

/// An item that can enter input mode on `i` and that records the keys it
/// receives into its value.
struct EditItem {
    value: String,
    state: RenderState,
    flags: FocusFlags,
    focus_key: Binding,
    enter: Binding,
}

impl EditItem {
    fn constructor() -> ItemConstructor<String> {
        Box::new(|value: String, _theme: &Theme| {
            let first = value.chars().next().unwrap_or(' ').to_ascii_uppercase();
            Box::new(EditItem {
                value,
                state: RenderState::new(),
                flags: FocusFlags::default(),
                focus_key: Binding::new(vec![KeyCode::Char(first)]),
                enter: Binding::new(vec![KeyCode::Char('i')]),
            }) as Box<dyn ListItem<String>>
        })
    }
}

impl Activable for EditItem {
    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }
}

impl Renderable for EditItem {
    fn render_state(&self) -> &RenderState {
        &self.state
    }

    fn render_state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn render(&self) -> String {
        self.value.clone()
    }

    fn resize(&mut self, size: Size) {
        self.state.resize(Size::new(size.width, 1));
    }
}

impl Focusable for EditItem {
    fn focus_flags(&self) -> &FocusFlags {
        &self.flags
    }

    fn focus_flags_mut(&mut self) -> &mut FocusFlags {
        &mut self.flags
    }

    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char(c) => self.value.push(c),
                _ => self.value.push('?'),
            }
        }
        None
    }

    fn focus_binding(&self) -> Option<&Binding> {
        Some(&self.focus_key)
    }

    fn enter_input_binding(&self) -> Option<&Binding> {
        Some(&self.enter)
    }
}

impl ListItem<String> for EditItem {
    fn filter_value(&self) -> String {
        self.value.clone()
    }

    fn data(&self) -> &String {
        &self.value
    }

    fn update_data(&mut self, data: String) {
        self.value = data;
    }
}

#[test]
fn test_per_page_from_height() {
    let list = list(numbered(9), 6);
    // 6 rows, minus the filter line and the paginator line.
    assert_eq!(list.per_page(), 4);
    assert_eq!(list.total_pages(), 3);

    let short = super::tests::list(numbered(3), 6);
    assert_eq!(short.per_page(), 5);
    assert_eq!(short.total_pages(), 1);
}

#[test]
fn test_next_stops_at_last_item() {
    let mut list = list(numbered(9), 6);
    assert_eq!(list.global_index(), Some(0));

    for _ in 0..10 {
        list.next_item();
        assert_consistent(&list);
    }

    assert_eq!(list.global_index(), Some(8));
    assert_eq!(list.page(), 2);
    assert_eq!(list.cursor(), 0);
}

#[test]
fn test_previous_stops_at_first_item() {
    let mut list = list(numbered(9), 6);
    list.previous_item();
    assert_eq!(list.global_index(), Some(0));
}

#[test]
fn test_infinite_scroll_wraps() {
    let mut list = list(numbered(9), 6);
    list.infinite_scroll = true;

    list.previous_item();
    assert_eq!(list.global_index(), Some(8));
    assert_eq!(list.page(), 2);

    list.next_item();
    assert_eq!(list.global_index(), Some(0));
    assert_eq!(list.page(), 0);
    assert_consistent(&list);
}

#[test]
fn test_navigation_keys() {
    let mut list = list(numbered(9), 6);

    list.update(&key(KeyCode::Down));
    list.update(&key(KeyCode::Char('j')));
    assert_eq!(list.global_index(), Some(2));

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.global_index(), Some(6));
    assert_eq!(list.page(), 1);

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.global_index(), Some(8));

    list.update(&key(KeyCode::Up));
    assert_eq!(list.global_index(), Some(7));

    list.update(&key(KeyCode::PageUp));
    assert_eq!(list.global_index(), Some(3));

    list.update(&key(KeyCode::End));
    assert_eq!(list.global_index(), Some(8));

    list.update(&key(KeyCode::Home));
    assert_eq!(list.global_index(), Some(0));
    assert_consistent(&list);
}

#[test]
fn test_pages_wrap_with_infinite_scroll() {
    let mut list = list(numbered(9), 6);
    list.infinite_scroll = true;
    list.move_cursor(1);

    list.prev_page();
    // Last page only holds item 8.
    assert_eq!(list.global_index(), Some(8));

    list.next_page();
    assert_eq!(list.global_index(), Some(0));
}

#[test]
fn test_move_cursor_reconciles_pages() {
    let mut list = list(numbered(9), 6);

    for i in 0..9 {
        assert!(list.move_cursor(i));
        assert_eq!(list.page() * list.per_page() + list.cursor(), i);
        assert_consistent(&list);
    }

    assert!(!list.move_cursor(9));
    assert_eq!(list.global_index(), Some(8));
}

#[test]
fn test_move_cursor_in_filtered_space() {
    let mut list = list(strings(&["a1", "b", "a2", "c", "a3"]), 6);
    list.set_filter_policy(FilterPolicy::Substring);
    list.set_filter_query("a");
    list.apply_filter();

    assert_eq!(list.visible_len(), 3);
    assert!(list.move_cursor(4));
    assert_eq!(list.page() * list.per_page() + list.cursor(), 2);

    // Hidden items cannot be selected.
    assert!(!list.move_cursor(1));
    assert_eq!(list.global_index(), Some(4));
    assert_consistent(&list);
}

#[test]
fn test_substring_filter_wood() {
    let mut list = list(strings(&["Cut down some wood", "Fishing in the river"]), 10);
    list.set_filter_policy(FilterPolicy::Substring);

    list.update(&key(KeyCode::Char('/')));
    assert_eq!(list.filter_state(), FilterState::Filtering);
    for c in "wood".chars() {
        list.update(&key(KeyCode::Char(c)));
    }
    assert_eq!(list.filter_query(), "wood");
    list.update(&key(KeyCode::Enter));

    assert_eq!(list.filter_state(), FilterState::FilterApplied);
    assert_eq!(list.filtered, Some(vec![0]));
    assert_eq!(list.global_index(), Some(0));
    assert!(!list.item_widget(1).unwrap().is_active());
    assert_consistent(&list);
}

#[test]
fn test_clearing_filter_selects_first_item() {
    let mut list = list(strings(&["Cut down some wood", "Fishing in the river"]), 10);
    list.set_filter_policy(FilterPolicy::Substring);
    list.enter_filter();
    list.set_filter_query("river");
    list.apply_filter();
    assert_eq!(list.global_index(), Some(1));

    list.update(&key(KeyCode::Esc));

    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert!(list.items.widgets().all(|w| w.is_active()));
    assert_eq!(list.global_index(), Some(0));
    assert_eq!(list.filter_query(), "");
    assert_consistent(&list);
}

#[test]
fn test_escape_while_editing_clears() {
    let mut list = list(numbered(3), 10);
    list.update(&key(KeyCode::Char('/')));
    list.update(&key(KeyCode::Char('2')));
    list.update(&key(KeyCode::Esc));

    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.filter_query(), "");
    assert_eq!(list.global_index(), Some(0));
    assert_consistent(&list);
}

#[test]
fn test_empty_query_applies_as_clear() {
    let mut list = list(numbered(3), 10);
    list.move_cursor(2);
    list.enter_filter();
    list.apply_filter();

    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.global_index(), Some(0));
}

#[test]
fn test_filter_with_no_survivors() {
    let mut list = list(numbered(3), 10);
    list.enter_filter();
    list.set_filter_query("zzz");
    list.apply_filter();

    assert_eq!(list.visible_len(), 0);
    assert_eq!(list.global_index(), None);
    assert!(lipgloss::strip_ansi(&list.view()).contains("No items."));
    assert_consistent(&list);

    list.next_item();
    list.go_to_end();
    assert_eq!(list.global_index(), None);
}

#[test]
fn test_navigation_keys_are_typed_while_filtering() {
    let mut list = list(numbered(9), 6);
    list.update(&key(KeyCode::Char('/')));
    list.update(&key(KeyCode::Char('j')));

    assert_eq!(list.filter_query(), "j");
    assert_eq!(list.global_index(), Some(0));
    assert!(list.is_inputting());
}

#[test]
fn test_fuzzy_filter_orders_by_score() {
    let mut list = list(
        strings(&["wild onions on dinner plates", "Cut down some wood"]),
        10,
    );
    list.enter_filter();
    list.set_filter_query("wood");
    list.apply_filter();

    assert_eq!(list.filtered, Some(vec![1, 0]));
    assert_eq!(list.global_index(), Some(1));
    assert_eq!(list.page() * list.per_page() + list.cursor(), 0);
}

#[test]
fn test_append_then_remove_round_trip() {
    let mut list = list(numbered(4), 10);
    list.move_cursor(2);

    list.append_item("new".to_string());
    assert_eq!(list.len(), 5);
    assert_eq!(list.global_index(), Some(2));

    list.remove_item(4);
    assert_eq!(list.len(), 4);
    assert_eq!(list.global_index(), Some(2));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 2"));
    assert_consistent(&list);
}

#[test]
fn test_append_to_empty_list_selects_it() {
    let mut list = list(Vec::new(), 10);
    assert_eq!(list.global_index(), None);

    list.append_item("first".to_string());
    assert_eq!(list.global_index(), Some(0));
    assert_consistent(&list);
}

#[test]
fn test_append_clears_filter() {
    let mut list = list(numbered(3), 10);
    list.enter_filter();
    list.set_filter_query("item 1");
    list.apply_filter();
    assert_eq!(list.global_index(), Some(1));

    list.append_item("item 3".to_string());
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.visible_len(), 4);
    assert_eq!(list.global_index(), Some(1));
}

#[test]
fn test_auto_focus_new_item() {
    let mut list = list(numbered(3), 10);
    list.auto_focus_new_item = true;

    list.append_item("tail".to_string());
    assert_eq!(list.global_index(), Some(3));

    list.insert_item(1, "middle".to_string());
    assert_eq!(list.global_index(), Some(1));
    assert_eq!(list.selected_item().map(String::as_str), Some("middle"));
    assert_consistent(&list);
}

#[test]
fn test_insert_before_selection_keeps_item_selected() {
    let mut list = list(numbered(3), 10);
    list.move_cursor(1);

    list.insert_item(0, "head".to_string());
    assert_eq!(list.global_index(), Some(2));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 1"));

    list.insert_item(3, "after".to_string());
    assert_eq!(list.global_index(), Some(2));

    list.insert_item(99, "end".to_string());
    assert_eq!(list.item(5).map(String::as_str), Some("end"));
    assert_consistent(&list);
}

#[test]
fn test_remove_selected_selects_previous() {
    let mut list = list(numbered(4), 10);
    list.move_cursor(2);

    list.remove_item(2);
    assert_eq!(list.global_index(), Some(1));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 1"));

    list.remove_item(0);
    assert_eq!(list.global_index(), Some(0));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 1"));

    // Removing the first item stays at the top without infinite scroll.
    list.remove_item(0);
    assert_eq!(list.global_index(), Some(0));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 3"));
    assert_consistent(&list);

    list.remove_item(0);
    assert_eq!(list.global_index(), None);
    assert!(list.is_empty());
    assert_consistent(&list);
}

#[test]
fn test_remove_first_wraps_with_infinite_scroll() {
    let mut list = list(numbered(4), 10);
    list.infinite_scroll = true;

    list.remove_item(0);
    assert_eq!(list.global_index(), Some(2));
    assert_eq!(list.selected_item().map(String::as_str), Some("item 3"));
}

#[test]
fn test_remove_reruns_applied_filter() {
    let mut list = list(strings(&["apple", "banana", "apricot", "avocado"]), 10);
    list.set_filter_policy(FilterPolicy::Substring);
    list.enter_filter();
    list.set_filter_query("a");
    list.apply_filter();
    list.set_filter_query("ap");
    list.apply_filter();
    assert_eq!(list.filtered, Some(vec![0, 2]));
    list.move_cursor(2);

    list.remove_item(1);
    assert_eq!(list.filter_state(), FilterState::FilterApplied);
    assert_eq!(list.filtered, Some(vec![0, 1]));
    assert_eq!(list.selected_item().map(String::as_str), Some("apricot"));

    list.remove_item(1);
    assert_eq!(list.filtered, Some(vec![0]));
    assert_eq!(list.selected_item().map(String::as_str), Some("apple"));
    assert_consistent(&list);
}

#[test]
fn test_out_of_range_indices_are_ignored() {
    let mut list = list(numbered(2), 10);
    list.remove_item(5);
    list.move_item(0, 5);
    list.move_item(7, 0);
    list.set_item(9, "x".to_string());

    assert_eq!(list.items(), vec!["item 0", "item 1"]);
    assert_eq!(list.global_index(), Some(0));

    let mut empty = super::tests::list(Vec::new(), 10);
    empty.next_item();
    empty.prev_page();
    empty.remove_item(0);
    empty.move_item(0, 0);
    assert_eq!(empty.global_index(), None);
}

#[test]
fn test_move_item_keeps_widget_and_selects_it() {
    let mut list = list(numbered(4), 10);
    list.item_widget_mut(0)
        .unwrap()
        .render_state_mut()
        .set_min_size(Size::new(7, 7));
    let events = record(&mut list);

    list.move_item(0, 2);

    assert_eq!(list.items(), vec!["item 1", "item 2", "item 0", "item 3"]);
    assert_eq!(list.global_index(), Some(2));
    assert_eq!(list.item_widget(2).unwrap().min_size(), Size::new(7, 7));
    assert_eq!(*events.borrow(), vec![("moving", 0), ("moved", 2)]);
    assert_consistent(&list);
}

#[test]
fn test_move_item_to_end() {
    let mut list = list(numbered(3), 10);
    list.move_item(0, 3);
    assert_eq!(list.items(), vec!["item 1", "item 2", "item 0"]);
    assert_eq!(list.global_index(), Some(2));
}

#[test]
fn test_cursor_callbacks_on_navigation() {
    let mut list = list(numbered(3), 10);
    let events = record(&mut list);

    list.next_item();
    list.go_to_end();
    // Already at the end: no selection change, no notification.
    list.next_item();

    assert_eq!(
        *events.borrow(),
        vec![("moving", 0), ("moved", 1), ("moving", 1), ("moved", 2)]
    );
}

#[test]
fn test_clear_filter_on_first_item_is_silent() {
    let mut list = list(strings(&["Cut down some wood", "Fishing in the river"]), 10);
    list.enter_filter();
    list.set_filter_query("wood");
    list.apply_filter();
    assert_eq!(list.global_index(), Some(0));

    let events = record(&mut list);
    list.clear_filter();

    assert_eq!(list.global_index(), Some(0));
    assert!(events.borrow().is_empty());
    assert_consistent(&list);

    list.next_item();
    list.focus_first();
    assert_eq!(
        *events.borrow(),
        vec![("moving", 0), ("moved", 1), ("moving", 1), ("moved", 0)]
    );
}

#[test]
fn test_remove_suppresses_moving_notification() {
    let mut list = list(numbered(3), 10);
    list.move_cursor(2);
    let events = record(&mut list);

    list.remove_item(2);
    assert_eq!(*events.borrow(), vec![("moved", 1)]);

    events.borrow_mut().clear();
    list.remove_item(0);
    // Same item stays selected.
    assert!(events.borrow().is_empty());
}

#[test]
fn test_invariants_hold_under_mutations() {
    let mut list = list(numbered(3), 5);
    let mut seed: u64 = 0x5eed;
    let mut roll = |m: usize| {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((seed >> 33) as usize) % m.max(1)
    };

    for step in 0..300 {
        let len = list.len();
        match roll(6) {
            0 => list.append_item(format!("a{step}")),
            1 => list.insert_item(roll(len + 2), format!("i{step}")),
            2 | 3 => list.remove_item(roll(len + 1)),
            4 => list.move_item(roll(len + 1), roll(len + 1)),
            _ => list.next_item(),
        }
        list.auto_focus_new_item = roll(2) == 0;
        list.infinite_scroll = roll(2) == 0;

        assert_eq!(list.items.len(), list.len());
        assert_consistent(&list);
    }
}

#[test]
fn test_set_items_clamps_selection() {
    let mut list = list(numbered(5), 10);
    list.move_cursor(4);

    list.set_items(numbered(2));
    assert_eq!(list.global_index(), Some(1));

    list.set_items(Vec::new());
    assert_eq!(list.global_index(), None);
    assert_consistent(&list);
}

#[test]
fn test_set_items_reruns_filter() {
    let mut list = list(numbered(3), 10);
    list.set_filter_policy(FilterPolicy::Substring);
    list.enter_filter();
    list.set_filter_query("2");
    list.apply_filter();

    list.set_items(strings(&["x", "y2", "z2"]));
    assert_eq!(list.filtered, Some(vec![1, 2]));
    assert_eq!(list.global_index(), Some(1));
    assert_consistent(&list);
}

#[test]
fn test_set_item_refilters() {
    let mut list = list(strings(&["Cut down some wood", "wooden spoon"]), 10);
    list.set_filter_policy(FilterPolicy::Substring);
    list.enter_filter();
    list.set_filter_query("wood");
    list.apply_filter();
    list.move_cursor(1);

    list.set_item(0, "stone".to_string());
    assert_eq!(list.visible_len(), 1);
    assert_eq!(list.global_index(), Some(1));

    list.set_item(1, "plastic spoon".to_string());
    assert_eq!(list.visible_len(), 0);
    assert_eq!(list.global_index(), None);
    assert_consistent(&list);
}

#[test]
fn test_view() {
    let list = list(numbered(9), 6);
    let view = lipgloss::strip_ansi(&list.view());
    let lines: Vec<&str> = view.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Press '/' to filter",
            "> item 0",
            "  item 1",
            "  item 2",
            "  item 3",
            "• • •",
        ]
    );
}

#[test]
fn test_view_fits_height() {
    for n in 1..12 {
        let list = list(numbered(n), 6);
        let view = lipgloss::strip_ansi(&list.view());
        assert!(
            view.lines().count() <= 6,
            "{n} items drew {} lines",
            view.lines().count()
        );
    }

    // Five items fill the rows under the filter line exactly.
    let exact = list(numbered(5), 6);
    assert_eq!(exact.per_page(), 5);
    assert_eq!(exact.total_pages(), 1);

    // One more needs the paginator line.
    let over = list(numbered(6), 6);
    assert_eq!(over.per_page(), 4);
    assert_eq!(over.total_pages(), 2);
    assert_eq!(lipgloss::strip_ansi(&over.view()).lines().count(), 6);
}

#[test]
fn test_filtered_view_fits_height() {
    let mut list = list(numbered(12), 6);
    list.set_filter_policy(FilterPolicy::Substring);
    list.enter_filter();
    list.set_filter_query("item 1");
    list.apply_filter();

    // "item 1", "item 10" and "item 11" fit without a paginator line.
    assert_eq!(list.visible_len(), 3);
    assert_eq!(list.total_pages(), 1);
    assert!(lipgloss::strip_ansi(&list.view()).lines().count() <= 6);
}

#[test]
fn test_view_without_filter_or_pages() {
    let mut list = list(numbered(2), 6);
    list.set_filterable(false);
    list.update(&key(KeyCode::Char('/')));

    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(lipgloss::strip_ansi(&list.render()), "> item 0\n  item 1");
}

#[test]
fn test_window_size_message() {
    let mut list = list(numbered(9), 6);
    list.move_cursor(8);

    list.update(&(Box::new(WindowSizeMsg {
        width: 30,
        height: 12,
    }) as Msg));

    assert_eq!(list.size(), Size::new(30, 12));
    assert_eq!(list.per_page(), 11);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.page(), 0);
    assert_eq!(list.cursor(), 8);
}

#[test]
fn test_inputting_item_owns_keys() {
    let mut list = Model::new(&Context::new(), EditItem::constructor());
    list.set_size(Size::new(30, 10));
    list.set_items(strings(&["a", "b", "c"]));

    list.update(&key(KeyCode::Char('i')));
    assert!(list.item_widget(0).unwrap().is_inputting());
    assert!(list.is_inputting());

    list.update(&key(KeyCode::Down));
    list.update(&key(KeyCode::Char('x')));
    assert_eq!(list.global_index(), Some(0));
    assert_eq!(list.item(0).map(String::as_str), Some("a?x"));

    list.update(&key(KeyCode::Esc));
    assert!(!list.is_inputting());

    list.update(&key(KeyCode::Down));
    assert_eq!(list.global_index(), Some(1));
}

#[test]
fn test_direct_focus_binding_selects_item() {
    let mut list = Model::new(&Context::new(), EditItem::constructor());
    list.set_size(Size::new(30, 10));
    list.set_items(strings(&["a", "b", "c"]));
    let events = Rc::new(RefCell::new(Vec::new()));
    let moved = events.clone();
    list.set_on_cursor_moved(move |i| moved.borrow_mut().push(i));

    list.update(&key(KeyCode::Char('C')));

    assert_eq!(list.global_index(), Some(2));
    assert_eq!(*events.borrow(), vec![2]);
    assert_eq!(list.item(2).map(String::as_str), Some("c"));
}

#[test]
fn test_list_inside_outer_coordinator() {
    let mut outer: FocusCoordinator = FocusCoordinator::new();
    outer.add(Box::new(list(numbered(3), 10)));
    outer.add(Box::new(list(numbered(3), 10)));
    outer.focus_first();

    outer.dispatch(&key(KeyCode::Down));
    outer.dispatch(&key(KeyCode::Char('/')));
    assert!(outer.widget(0).unwrap().is_inputting());

    // The query input keeps the keyboard.
    outer.dispatch(&key(KeyCode::Tab));
    assert_eq!(outer.active_index(), Some(0));
    outer.dispatch(&key(KeyCode::Char('1')));
    assert_eq!(outer.widget(0).map(|w| w.is_inputting()), Some(true));

    // Esc cannot release the list from outside; it clears the query instead.
    outer.dispatch(&key(KeyCode::Esc));
    assert!(!outer.widget(0).unwrap().is_inputting());

    outer.dispatch(&key(KeyCode::Tab));
    assert_eq!(outer.active_index(), Some(1));
}

#[test]
fn test_apply_config() {
    let config = Config::from_toml_str(
        r#"
        [list]
        infinite_scroll = true
        filter = "substring"
        placeholder = "search..."

        [list.keys]
        cursor_down = ["n"]
        "#,
    )
    .unwrap();

    let mut list = list(numbered(3), 10);
    list.apply_config(&config.list).unwrap();

    assert!(list.infinite_scroll);
    assert!(matches!(list.filter_policy, FilterPolicy::Substring));

    list.update(&key(KeyCode::Char('n')));
    assert_eq!(list.global_index(), Some(1));
    list.update(&key(KeyCode::Down));
    assert_eq!(list.global_index(), Some(1));

    assert_eq!(
        lipgloss::strip_ansi(&list.view()).lines().next(),
        Some("search...")
    );
}

#[test]
fn test_apply_config_rejects_bad_keys() {
    let config = ListConfig {
        infinite_scroll: true,
        keys: KeysConfig {
            cursor_up: Some(vec!["ctrl+".to_string()]),
            ..KeysConfig::default()
        },
        ..ListConfig::default()
    };

    let mut list = list(numbered(3), 10);
    assert!(list.apply_config(&config).is_err());
    assert!(!list.infinite_scroll);
}

#[test]
fn test_init_clears_filter_and_selects_first() {
    let mut list = list(numbered(3), 10);
    list.enter_filter();
    list.set_filter_query("item 2");
    list.apply_filter();
    assert_eq!(list.global_index(), Some(2));

    list.init();
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.global_index(), Some(0));
}

#[test]
fn test_short_help_follows_filter_state() {
    use crate::key::KeyMap;

    let mut list = list(numbered(3), 10);
    assert_eq!(list.short_help().len(), 3);

    list.enter_filter();
    let short = list.short_help();
    let help: Vec<&str> = short.iter().map(|b| b.help().key.as_str()).collect();
    assert_eq!(help, vec!["enter", "esc"]);
}
