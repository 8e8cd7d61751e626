//! Integration tests for the widget engine
//!
//! Drives the facade and the dispatch entry point the way a host page
//! would: facade calls for programmatic control, raw inputs for user
//! interaction, and change inputs for external value writes.

use csel_dom::{Document, DomInput, Key, NodeId, OptGroupData, OptionData};
use csel_widget::{
    Config, HAS_FOCUS_CLASS, IS_ACTIVE_CLASS, IS_DISABLED_CLASS, IS_OPEN_CLASS, IS_SELECTED_CLASS,
    Page, WidgetError, WidgetId,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// body > select(apple, banana, cherry), attached with default config
fn fruit_page() -> (Page, WidgetId, NodeId) {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let select = doc.create_select();
    doc.append_child(body, select).unwrap();
    for (value, text) in [("apple", "Apple"), ("banana", "Banana"), ("cherry", "Cherry")] {
        let option = doc.create_option(OptionData::new(value, text));
        doc.append_child(select, option).unwrap();
    }
    let mut page = Page::new(doc);
    let id = page.attach(select, Config::default()).unwrap();
    (page, id, body)
}

fn two_widget_page() -> (Page, WidgetId, WidgetId) {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let mut selects = Vec::new();
    for prefix in ["a", "b"] {
        let select = doc.create_select();
        doc.append_child(body, select).unwrap();
        for i in 0..2 {
            let option = doc.create_option(OptionData::new(
                format!("{prefix}{i}"),
                format!("{prefix}{i}"),
            ));
            doc.append_child(select, option).unwrap();
        }
        selects.push(select);
    }
    let mut page = Page::new(doc);
    let a = page.attach(selects[0], Config::default()).unwrap();
    let b = page.attach(selects[1], Config::default()).unwrap();
    (page, a, b)
}

fn descendants(doc: &Document, node: NodeId) -> Vec<NodeId> {
    fn walk(doc: &Document, node: NodeId, out: &mut Vec<NodeId>) {
        for child in doc.children(node) {
            out.push(child);
            walk(doc, child, out);
        }
    }
    let mut out = Vec::new();
    walk(doc, node, &mut out);
    out
}

fn has_class(page: &Page, node: NodeId, class: &str) -> bool {
    page.document()
        .get(node)
        .and_then(|n| n.as_element())
        .is_some_and(|el| el.classes.contains(class))
}

/// data-value of every rendered option under the panel, in document order
fn rendered_values(page: &Page, id: WidgetId) -> Vec<String> {
    let panel = page.parts(id).unwrap().panel;
    descendants(page.document(), panel)
        .into_iter()
        .filter_map(|n| {
            page.document()
                .get(n)
                .and_then(|node| node.as_element())
                .and_then(|el| el.dataset.get("value"))
                .map(str::to_string)
        })
        .collect()
}

fn native_values(page: &Page, id: WidgetId) -> Vec<String> {
    let select = page.parts(id).unwrap().select;
    page.document()
        .select_options(select)
        .into_iter()
        .filter_map(|o| page.document().option_value(o).map(str::to_string))
        .collect()
}

/// The rendered option carrying a given data-value
fn rendered_option(page: &Page, id: WidgetId, value: &str) -> NodeId {
    let panel = page.parts(id).unwrap().panel;
    descendants(page.document(), panel)
        .into_iter()
        .find(|&n| {
            page.document()
                .get(n)
                .and_then(|node| node.as_element())
                .and_then(|el| el.dataset.get("value"))
                == Some(value)
        })
        .expect("rendered option present")
}

/// Rendered options under the panel carrying a state class
fn marked(page: &Page, id: WidgetId, class: &str) -> Vec<NodeId> {
    let panel = page.parts(id).unwrap().panel;
    descendants(page.document(), panel)
        .into_iter()
        .filter(|&n| has_class(page, n, class))
        .collect()
}

fn opener_label(page: &Page, id: WidgetId) -> String {
    page.document().text_content(page.parts(id).unwrap().opener)
}

fn keydown(page: &mut Page, id: WidgetId, key: Key, at_ms: u64) {
    let opener = page.parts(id).unwrap().opener;
    page.dispatch(DomInput::KeyDown { target: opener, key, at_ms });
}

//
// Property 1: link bijection under mutation
//

#[test]
fn test_mirror_stays_isomorphic_across_mutations() {
    init_tracing();
    let (mut page, id, _) = fruit_page();
    assert_eq!(rendered_values(&page, id), native_values(&page, id));

    // Append a group with a nested option, then an option at the root
    let group = page.document_mut().create_optgroup(OptGroupData::new("Extra"));
    let damson = page.document_mut().create_option(OptionData::new("damson", "Damson"));
    page.append(id, &[group], None).unwrap();
    page.append(id, &[damson], Some(group)).unwrap();
    assert_eq!(rendered_values(&page, id), native_values(&page, id));
    assert_eq!(
        rendered_values(&page, id),
        vec!["apple", "banana", "cherry", "damson"]
    );

    // Insert before an existing option
    let select = page.parts(id).unwrap().select;
    let banana_native = page.document().select_options(select)[1];
    let early = page.document_mut().create_option(OptionData::new("early", "Early"));
    page.insert_before(id, early, banana_native).unwrap();
    assert_eq!(
        native_values(&page, id),
        vec!["apple", "early", "banana", "cherry", "damson"]
    );
    assert_eq!(rendered_values(&page, id), native_values(&page, id));

    // Remove the group (takes its nested option with it)
    page.remove(id, group).unwrap();
    assert_eq!(
        rendered_values(&page, id),
        vec!["apple", "early", "banana", "cherry"]
    );
    assert_eq!(rendered_values(&page, id), native_values(&page, id));

    // Batch clear
    let removed = page.empty(id).unwrap();
    assert_eq!(removed.len(), 4);
    assert!(rendered_values(&page, id).is_empty());
    assert!(native_values(&page, id).is_empty());
}

//
// Property 2: exactly one selected marker, matching the control
//

#[test]
fn test_exactly_one_selected_marker() {
    let (mut page, id, _) = fruit_page();

    let check = |page: &Page| {
        let selected = marked(page, id, IS_SELECTED_CLASS);
        assert_eq!(selected.len(), 1);
        let value = page
            .document()
            .get(selected[0])
            .unwrap()
            .as_element()
            .unwrap()
            .dataset
            .get("value")
            .unwrap()
            .to_string();
        assert_eq!(value, page.value(id).unwrap());
    };

    check(&page);
    page.set_value(id, "banana").unwrap();
    check(&page);

    page.open(id).unwrap();
    let cherry = rendered_option(&page, id, "cherry");
    page.dispatch(DomInput::Click { target: cherry });
    check(&page);
    assert_eq!(page.value(id).unwrap(), "cherry");
}

//
// Property 3: cross-instance exclusivity
//

#[test]
fn test_only_one_instance_open() {
    let (mut page, a, b) = two_widget_page();

    page.open(a).unwrap();
    assert!(page.is_open(a).unwrap());

    page.open(b).unwrap();
    assert!(!page.is_open(a).unwrap());
    assert!(page.is_open(b).unwrap());
    assert_eq!(page.active_open(), Some(b));

    page.open(a).unwrap();
    assert!(page.is_open(a).unwrap());
    assert!(!page.is_open(b).unwrap());
}

#[test]
fn test_opening_via_pointer_closes_other_instance() {
    let (mut page, a, b) = two_widget_page();
    page.open(a).unwrap();

    let opener_b = page.parts(b).unwrap().opener;
    page.dispatch(DomInput::Click { target: opener_b });

    assert!(!page.is_open(a).unwrap());
    assert!(page.is_open(b).unwrap());
}

//
// Property 4: value round-trip and fallback
//

#[test]
fn test_value_roundtrip_and_fallback() {
    let (mut page, id, _) = fruit_page();

    page.set_value(id, "banana").unwrap();
    assert_eq!(page.value(id).unwrap(), "banana");
    assert_eq!(opener_label(&page, id), "Banana");

    page.set_value(id, "no-such-value").unwrap();
    assert_eq!(page.value(id).unwrap(), "apple");
    assert_eq!(opener_label(&page, id), "Apple");
}

//
// Property 5: type-ahead
//

#[test]
fn test_typeahead_scenario() {
    init_tracing();
    let (mut page, id, _) = fruit_page();
    page.open(id).unwrap();

    keydown(&mut page, id, Key::Char('b'), 0);
    let banana = rendered_option(&page, id, "banana");
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![banana]);

    // Within the window the buffer grows to "ba", still Banana
    keydown(&mut page, id, Key::Char('a'), 200);
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![banana]);

    // After the window expires the buffer restarts with "c"
    keydown(&mut page, id, Key::Char('c'), 200 + csel_widget::SEARCH_RESET_MS);
    let cherry = rendered_option(&page, id, "cherry");
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![cherry]);

    // Focus moved, selection did not
    assert_eq!(page.value(id).unwrap(), "apple");
}

//
// Property 6: append then remove restores structure
//

#[test]
fn test_append_then_remove_restores_structure() {
    let (mut page, id, _) = fruit_page();

    // An empty group to append into
    let group = page.document_mut().create_optgroup(OptGroupData::new("New"));
    page.append(id, &[group], None).unwrap();
    let snapshot = rendered_values(&page, id);

    let x = page.document_mut().create_option(OptionData::new("x", "X"));
    let appended = page.append(id, &[x], Some(group)).unwrap();
    assert_eq!(appended, vec![x]);
    assert_eq!(
        rendered_values(&page, id),
        vec!["apple", "banana", "cherry", "x"]
    );

    let removed = page.remove(id, x).unwrap();
    assert_eq!(removed, x);
    assert_eq!(rendered_values(&page, id), snapshot);
    assert_eq!(page.document().parent(x), None);
}

//
// Property 7: disabled exclusion
//

#[test]
fn test_disabling_open_widget_closes_it() {
    let (mut page, id, _) = fruit_page();
    let parts = page.parts(id).unwrap();

    page.open(id).unwrap();
    page.set_disabled(id, true).unwrap();

    assert!(!page.is_open(id).unwrap());
    assert!(page.disabled(id).unwrap());
    assert!(has_class(&page, parts.container, IS_DISABLED_CLASS));
    assert!(!has_class(&page, parts.panel, IS_OPEN_CLASS));
    let opener_el = page.document().get(parts.opener).unwrap().as_element().unwrap();
    assert_eq!(opener_el.attr("tabindex"), None);

    // User input is ignored while disabled
    page.dispatch(DomInput::Click { target: parts.opener });
    assert!(!page.is_open(id).unwrap());
    page.open(id).unwrap();
    assert!(!page.is_open(id).unwrap());

    page.set_disabled(id, false).unwrap();
    assert!(!page.disabled(id).unwrap());
    assert!(!has_class(&page, parts.container, IS_DISABLED_CLASS));
    let opener_el = page.document().get(parts.opener).unwrap().as_element().unwrap();
    assert_eq!(opener_el.attr("tabindex"), Some("0"));
    // Re-enabling leaves the widget closed
    assert!(!page.is_open(id).unwrap());
}

//
// Property 8: destroy restores the native control
//

#[test]
fn test_destroy_restores_select_position() {
    let (mut page, id, body) = fruit_page();
    let parts = page.parts(id).unwrap();

    // The container replaced the select under body
    assert_eq!(
        page.document().children(body).collect::<Vec<_>>(),
        vec![parts.container]
    );

    page.destroy(id).unwrap();

    assert_eq!(
        page.document().children(body).collect::<Vec<_>>(),
        vec![parts.select]
    );
    assert_eq!(page.document().select_options(parts.select).len(), 3);
    assert_eq!(page.document().parent(parts.container), None);
    assert_eq!(page.widget_count(), 0);

    // A destroyed id is rejected, not undefined behavior
    assert_eq!(page.open(id), Err(WidgetError::InvalidArgument(
        "unknown or destroyed widget instance",
    )));
    assert!(page.value(id).is_err());

    // The restored control can be attached again
    let id2 = page.attach(parts.select, Config::default()).unwrap();
    assert_eq!(page.value(id2).unwrap(), "apple");
}

#[test]
fn test_destroying_open_widget_heals_active_slot() {
    let (mut page, a, b) = two_widget_page();
    page.open(a).unwrap();
    assert_eq!(page.active_open(), Some(a));

    page.destroy(a).unwrap();
    assert_eq!(page.active_open(), None);

    page.open(b).unwrap();
    assert!(page.is_open(b).unwrap());
}

//
// Interaction flows
//

#[test]
fn test_pointer_flow() {
    let (mut page, id, _) = fruit_page();
    let parts = page.parts(id).unwrap();

    page.dispatch(DomInput::Click { target: parts.opener });
    assert!(page.is_open(id).unwrap());
    assert!(has_class(&page, parts.panel, IS_OPEN_CLASS));
    assert!(has_class(&page, parts.opener, IS_ACTIVE_CLASS));

    let banana = rendered_option(&page, id, "banana");
    page.dispatch(DomInput::MouseOver { target: banana });
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![banana]);
    // Hover focuses without selecting
    assert_eq!(page.value(id).unwrap(), "apple");

    page.dispatch(DomInput::Click { target: banana });
    assert!(!page.is_open(id).unwrap());
    assert_eq!(page.value(id).unwrap(), "banana");
    assert_eq!(opener_label(&page, id), "Banana");
    assert!(!has_class(&page, parts.panel, IS_OPEN_CLASS));
    assert!(!has_class(&page, parts.opener, IS_ACTIVE_CLASS));
}

#[test]
fn test_opener_click_toggles() {
    let (mut page, id, _) = fruit_page();
    let opener = page.parts(id).unwrap().opener;

    page.dispatch(DomInput::Click { target: opener });
    assert!(page.is_open(id).unwrap());
    page.dispatch(DomInput::Click { target: opener });
    assert!(!page.is_open(id).unwrap());
}

#[test]
fn test_outside_click_closes() {
    let (mut page, id, _) = fruit_page();
    page.open(id).unwrap();

    let outside = page.document().root();
    page.dispatch(DomInput::Click { target: outside });
    assert!(!page.is_open(id).unwrap());
}

#[test]
fn test_container_dead_zone_click_keeps_open() {
    let (mut page, id, _) = fruit_page();
    let parts = page.parts(id).unwrap();
    page.open(id).unwrap();

    // The panel itself is neither the opener nor an option
    page.dispatch(DomInput::Click { target: parts.panel });
    assert!(page.is_open(id).unwrap());
}

#[test]
fn test_keyboard_flow() {
    let (mut page, id, _) = fruit_page();

    keydown(&mut page, id, Key::Space, 0);
    assert!(page.is_open(id).unwrap());

    keydown(&mut page, id, Key::ArrowDown, 10);
    let banana = rendered_option(&page, id, "banana");
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![banana]);

    keydown(&mut page, id, Key::Enter, 20);
    assert!(!page.is_open(id).unwrap());
    assert_eq!(page.value(id).unwrap(), "banana");
    assert_eq!(opener_label(&page, id), "Banana");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![banana]);
}

#[test]
fn test_escape_discards_focus_change() {
    let (mut page, id, _) = fruit_page();
    keydown(&mut page, id, Key::ArrowDown, 0);
    assert!(page.is_open(id).unwrap());

    keydown(&mut page, id, Key::ArrowDown, 10);
    keydown(&mut page, id, Key::Escape, 20);

    assert!(!page.is_open(id).unwrap());
    assert_eq!(page.value(id).unwrap(), "apple");
    // Focus reconciled back to the selection on close
    let apple = rendered_option(&page, id, "apple");
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![apple]);
}

#[test]
fn test_external_change_notification_reconciles() {
    let (mut page, id, _) = fruit_page();
    let select = page.parts(id).unwrap().select;

    // A form reset or external script writes the value, then announces it
    page.document_mut().set_select_value(select, "cherry");
    page.dispatch(DomInput::Change { select });

    let cherry = rendered_option(&page, id, "cherry");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![cherry]);
    assert_eq!(opener_label(&page, id), "Cherry");
}

#[test]
fn test_disabled_widget_still_reconciles_change() {
    let (mut page, id, _) = fruit_page();
    let select = page.parts(id).unwrap().select;
    page.set_disabled(id, true).unwrap();

    page.document_mut().set_select_value(select, "banana");
    page.dispatch(DomInput::Change { select });

    let banana = rendered_option(&page, id, "banana");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![banana]);
    assert_eq!(opener_label(&page, id), "Banana");
}

//
// Mutation edge cases
//

#[test]
fn test_removing_selected_option_reassigns_selection() {
    let (mut page, id, _) = fruit_page();
    page.set_value(id, "banana").unwrap();

    let select = page.parts(id).unwrap().select;
    let banana_native = page.document().select_options(select)[1];
    page.remove(id, banana_native).unwrap();

    assert_eq!(page.value(id).unwrap(), "apple");
    let apple = rendered_option(&page, id, "apple");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![apple]);
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![apple]);
    assert_eq!(opener_label(&page, id), "Apple");
}

#[test]
fn test_empty_clears_state_and_append_reestablishes() {
    let (mut page, id, _) = fruit_page();

    let removed = page.empty(id).unwrap();
    assert_eq!(removed.len(), 3);
    assert_eq!(page.value(id).unwrap(), "");
    assert_eq!(opener_label(&page, id), "");
    assert!(marked(&page, id, IS_SELECTED_CLASS).is_empty());

    let fresh = page.document_mut().create_option(OptionData::new("new", "New"));
    page.append(id, &[fresh], None).unwrap();
    assert_eq!(page.value(id).unwrap(), "new");
    assert_eq!(opener_label(&page, id), "New");
    let rendered = rendered_option(&page, id, "new");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![rendered]);
}

#[test]
fn test_invalid_append_leaves_trees_untouched() {
    let (mut page, id, _) = fruit_page();
    let before = rendered_values(&page, id);

    // A generic element is not an option or group
    let div = page.document_mut().create_element("div");
    assert!(page.append(id, &[div], None).is_err());

    // An already-attached option cannot be appended again
    let select = page.parts(id).unwrap().select;
    let attached = page.document().select_options(select)[0];
    assert!(page.append(id, &[attached], None).is_err());

    assert_eq!(rendered_values(&page, id), before);
    assert_eq!(native_values(&page, id), before);
}

#[test]
fn test_insert_before_rejects_detached_reference() {
    let (mut page, id, _) = fruit_page();
    let stray_ref = page.document_mut().create_option(OptionData::new("r", "R"));
    let node = page.document_mut().create_option(OptionData::new("n", "N"));

    assert!(page.insert_before(id, node, stray_ref).is_err());
    assert_eq!(rendered_values(&page, id), vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_attach_rejects_second_widget_on_same_control() {
    let (mut page, id, _) = fruit_page();
    let select = page.parts(id).unwrap().select;
    assert!(page.attach(select, Config::default()).is_err());
}

//
// Configuration
//

#[test]
fn test_open_reveals_selected_option_when_configured() {
    let (mut page, id, _) = fruit_page();
    page.set_value(id, "cherry").unwrap();
    assert_eq!(page.document().last_revealed(), None);

    page.open(id).unwrap();
    let cherry = rendered_option(&page, id, "cherry");
    assert_eq!(page.document().last_revealed(), Some(cherry));
}

#[test]
fn test_open_scroll_disabled_by_config() {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let select = doc.create_select();
    doc.append_child(body, select).unwrap();
    let option = doc.create_option(OptionData::new("a", "A"));
    doc.append_child(select, option).unwrap();

    let mut page = Page::new(doc);
    let config = Config {
        scroll_to_selected: false,
        ..Config::default()
    };
    let id = page.attach(select, config).unwrap();

    page.open(id).unwrap();
    assert_eq!(page.document().last_revealed(), None);
    assert_eq!(page.config(id).unwrap().scroll_to_selected, false);
}

#[test]
fn test_configured_class_names_applied() {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let select = doc.create_select();
    doc.append_child(body, select).unwrap();
    let option = doc.create_option(OptionData::new("a", "A"));
    doc.append_child(select, option).unwrap();

    let mut page = Page::new(doc);
    let config = Config {
        container_class: "picker".to_string(),
        opener_class: "picker-opener".to_string(),
        panel_class: "picker-menu".to_string(),
        option_class: "picker-item".to_string(),
        ..Config::default()
    };
    let id = page.attach(select, config).unwrap();
    let parts = page.parts(id).unwrap();

    assert!(has_class(&page, parts.container, "picker"));
    assert!(has_class(&page, parts.container, "customSelect"));
    assert!(has_class(&page, parts.opener, "picker-opener"));
    assert!(has_class(&page, parts.panel, "picker-menu"));
    let rendered = rendered_option(&page, id, "a");
    assert!(has_class(&page, rendered, "picker-item"));
}

//
// Attach-time state
//

#[test]
fn test_attach_respects_preselected_option() {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let select = doc.create_select();
    doc.append_child(body, select).unwrap();
    let a = doc.create_option(OptionData::new("a", "A"));
    let b = doc.create_option(OptionData::new("b", "B").selected());
    doc.append_child(select, a).unwrap();
    doc.append_child(select, b).unwrap();

    let mut page = Page::new(doc);
    let id = page.attach(select, Config::default()).unwrap();

    assert_eq!(page.value(id).unwrap(), "b");
    assert_eq!(opener_label(&page, id), "B");
    let rendered = rendered_option(&page, id, "b");
    assert_eq!(marked(&page, id, IS_SELECTED_CLASS), vec![rendered]);
    assert_eq!(marked(&page, id, HAS_FOCUS_CLASS), vec![rendered]);
}

#[test]
fn test_attach_disabled_control() {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let select = doc.create_select();
    doc.append_child(body, select).unwrap();
    let option = doc.create_option(OptionData::new("a", "A"));
    doc.append_child(select, option).unwrap();
    doc.set_select_disabled(select, true).unwrap();

    let mut page = Page::new(doc);
    let id = page.attach(select, Config::default()).unwrap();
    let parts = page.parts(id).unwrap();

    assert!(page.disabled(id).unwrap());
    assert!(has_class(&page, parts.container, IS_DISABLED_CLASS));
    let opener_el = page.document().get(parts.opener).unwrap().as_element().unwrap();
    assert_eq!(opener_el.attr("tabindex"), None);

    // No reaction to user input
    page.dispatch(DomInput::Click { target: parts.opener });
    assert!(!page.is_open(id).unwrap());
}

#[test]
fn test_attach_rejects_detached_or_malformed_control() {
    let mut doc = Document::new();
    let detached = doc.create_select();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body).unwrap();
    let not_a_select = doc.create_element("div");
    doc.append_child(body, not_a_select).unwrap();
    let bad_child = doc.create_select();
    doc.append_child(body, bad_child).unwrap();
    let text = doc.create_text("stray");
    doc.append_child(bad_child, text).unwrap();

    let mut page = Page::new(doc);
    assert!(page.attach(detached, Config::default()).is_err());
    assert!(page.attach(not_a_select, Config::default()).is_err());
    assert!(page.attach(bad_child, Config::default()).is_err());
    assert_eq!(page.widget_count(), 0);
}
