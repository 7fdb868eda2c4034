//! End-to-end accordion behaviour against the in-memory document.

use std::collections::HashSet;
use std::sync::Arc;

use horizon_disclosure::prelude::*;
use horizon_disclosure::widget::accessibility::{aria, markers};
use horizon_disclosure::{DocumentTreeDebug, INVALID_MODE_MESSAGE, TreeFormatOptions};
use parking_lot::Mutex;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_disclosure=trace")
        .with_test_writer()
        .try_init();
}

/// Three items "one", "two", "three", mounted as a document root.
fn mount(config: AccordionConfig) -> (Document, Accordion) {
    mount_with(config, IdProvider::shared())
}

fn mount_with(config: AccordionConfig, ids: Arc<IdProvider>) -> (Document, Accordion) {
    setup();
    let mut doc = Document::new();
    let mut accordion = Accordion::new(config, ids);
    for (id, n) in [("one", 1), ("two", 2), ("three", 3)] {
        accordion
            .add_item(id, format!("Header {n}"), format!("Content {n}"))
            .unwrap();
    }
    accordion.mount(&mut doc, None).unwrap();
    (doc, accordion)
}

fn click(doc: &mut Document, accordion: &mut Accordion, id: &str) {
    let target = accordion.header_node(id).unwrap();
    let mut event = ClickEvent::new().into();
    accordion.dispatch(doc, target, &mut event).unwrap();
}

fn press(doc: &mut Document, accordion: &mut Accordion, id: &str, key: Key) -> WidgetEvent {
    let target = accordion.header_node(id).unwrap();
    let mut event = KeyPressEvent::key(key).into();
    accordion.dispatch(doc, target, &mut event).unwrap();
    event
}

fn expanded(doc: &Document, accordion: &Accordion, id: &str) -> bool {
    let button = accordion.header_node(id).unwrap();
    let content = accordion.content_node(id).unwrap();
    let by_header = doc.attribute(button, aria::EXPANDED) == Some("true");
    let by_content = !doc.is_hidden(content);
    assert_eq!(by_header, by_content, "header and panel disagree for {id}");
    by_header
}

fn expanded_set(doc: &Document, accordion: &Accordion) -> Vec<&'static str> {
    ["one", "two", "three"]
        .into_iter()
        .filter(|id| expanded(doc, accordion, id))
        .collect()
}

// =========================================================================
// Mounting
// =========================================================================

#[test]
fn test_default_mount_is_collapsed() {
    let (doc, accordion) = mount(AccordionConfig::single());

    assert!(expanded_set(&doc, &accordion).is_empty());
    for (id, label) in [("one", "Header 1"), ("two", "Header 2"), ("three", "Header 3")] {
        let button = accordion.header_node(id).unwrap();
        assert!(!doc.is_hidden(button));
        assert_eq!(doc.text(button), Some(label));

        let content = accordion.content_node(id).unwrap();
        assert_eq!(doc.attribute(content, markers::STATE), Some("closed"));
    }
}

#[test]
fn test_single_pre_expand() {
    let (doc, accordion) = mount(AccordionConfig::single().with_pre_expand("two"));
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
}

#[test]
fn test_multiple_pre_expand() {
    let (doc, accordion) = mount(AccordionConfig::multiple().with_pre_expand(["two", "three"]));
    assert_eq!(expanded_set(&doc, &accordion), vec!["two", "three"]);
}

#[test]
fn test_pre_expand_unknown_id_opens_nothing() {
    let (doc, accordion) = mount(AccordionConfig::single().with_pre_expand("missing"));
    assert!(expanded_set(&doc, &accordion).is_empty());
    assert_eq!(accordion.value(), SelectionState::single(Some("missing")));
}

#[test]
fn test_aria_linkage() {
    let (doc, accordion) = mount(AccordionConfig::single());
    for id in ["one", "two", "three"] {
        let button = accordion.header_node(id).unwrap();
        let content = accordion.content_node(id).unwrap();

        let header_id = doc.attribute(button, aria::ID).unwrap();
        let content_id = doc.attribute(content, aria::ID).unwrap();
        assert!(header_id.starts_with("header-"));
        assert!(content_id.starts_with("content-"));
        assert_eq!(doc.attribute(button, aria::CONTROLS), Some(content_id));
        assert_eq!(doc.attribute(content, aria::LABELLEDBY), Some(header_id));
        assert_eq!(doc.attribute(content, aria::ROLE), Some("region"));
        assert_eq!(doc.element_by_id(content_id), Some(content));

        let heading = doc.parent(button).unwrap();
        assert_eq!(doc.tag(heading), Some("h3"));
    }
}

#[test]
fn test_ids_unique_across_accordions() {
    let ids = IdProvider::shared();
    let (mut doc, _first) = mount_with(AccordionConfig::single(), ids.clone());
    let mut second = Accordion::new(AccordionConfig::multiple(), ids.clone())
        .with_item("one", "Header 1", "Content 1")
        .unwrap();
    second.mount(&mut doc, None).unwrap();

    let all: Vec<&str> = doc
        .all_nodes()
        .into_iter()
        .filter_map(|node| doc.attribute(node, aria::ID))
        .collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), 8);
    assert_eq!(unique.len(), all.len());
    assert_eq!(ids.issued(), 4);
}

#[test]
fn test_ids_stable_across_renders() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    let button = accordion.header_node("two").unwrap();
    let before = doc.attribute(button, aria::ID).unwrap().to_string();

    click(&mut doc, &mut accordion, "two");
    click(&mut doc, &mut accordion, "one");
    assert_eq!(doc.attribute(button, aria::ID), Some(before.as_str()));
}

#[test]
fn test_tree_debug_output() {
    let (doc, _accordion) = mount(AccordionConfig::single().with_pre_expand("one"));
    let tree = DocumentTreeDebug::with_options(TreeFormatOptions::detailed()).format_document(&doc);
    assert!(tree.contains("<div"));
    assert!(tree.contains("<h3"));
    assert!(tree.contains("aria-expanded=\"true\""));
}

// =========================================================================
// Selection
// =========================================================================

#[test]
fn test_single_click_toggles() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    click(&mut doc, &mut accordion, "one");
    assert_eq!(expanded_set(&doc, &accordion), vec!["one"]);
    click(&mut doc, &mut accordion, "one");
    assert!(expanded_set(&doc, &accordion).is_empty());
}

#[test]
fn test_single_zero_collapse_round_trip() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single().with_pre_expand("two"));
    click(&mut doc, &mut accordion, "two");
    assert_eq!(accordion.value(), SelectionState::Single(None));
    click(&mut doc, &mut accordion, "two");
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
}

#[test]
fn test_single_opening_closes_previous() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single().with_pre_expand("one"));
    click(&mut doc, &mut accordion, "three");
    assert_eq!(expanded_set(&doc, &accordion), vec!["three"]);
}

#[test]
fn test_single_without_zero_collapse_keeps_open_item() {
    let (mut doc, mut accordion) = mount(
        AccordionConfig::single()
            .with_allow_zero_collapse(false)
            .with_pre_expand("one"),
    );
    let button = accordion.header_node("one").unwrap();
    assert_eq!(doc.attribute(button, aria::DISABLED), Some("true"));

    click(&mut doc, &mut accordion, "one");
    assert_eq!(expanded_set(&doc, &accordion), vec!["one"]);

    click(&mut doc, &mut accordion, "two");
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
    assert_eq!(doc.attribute(button, aria::DISABLED), Some("false"));
}

#[test]
fn test_expanded_headers_are_aria_disabled() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    let one = accordion.header_node("one").unwrap();
    assert_eq!(doc.attribute(one, aria::DISABLED), Some("false"));

    click(&mut doc, &mut accordion, "one");
    assert_eq!(doc.attribute(one, aria::EXPANDED), Some("true"));
    assert_eq!(doc.attribute(one, aria::DISABLED), Some("true"));

    // Zero-collapse still applies to a flagged header.
    click(&mut doc, &mut accordion, "one");
    assert_eq!(doc.attribute(one, aria::DISABLED), Some("false"));
    assert!(expanded_set(&doc, &accordion).is_empty());

    let (doc, accordion) = mount(AccordionConfig::multiple().with_pre_expand(["one", "three"]));
    for (id, disabled) in [("one", "true"), ("two", "false"), ("three", "true")] {
        let button = accordion.header_node(id).unwrap();
        assert_eq!(doc.attribute(button, aria::DISABLED), Some(disabled));
    }
}

#[test]
fn test_multiple_last_open_item_stays_open() {
    let (mut doc, mut accordion) = mount(
        AccordionConfig::multiple()
            .with_allow_zero_collapse(false)
            .with_pre_expand(["one", "two"]),
    );
    click(&mut doc, &mut accordion, "one");
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
    click(&mut doc, &mut accordion, "two");
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
}

#[test]
fn test_signals() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    let toggled = Arc::new(Mutex::new(Vec::new()));
    let changes = Arc::new(Mutex::new(Vec::new()));

    let toggled_clone = toggled.clone();
    accordion
        .toggled()
        .connect(move |id| toggled_clone.lock().push(id.clone()));
    let changes_clone = changes.clone();
    accordion
        .selection_changed()
        .connect(move |state| changes_clone.lock().push(state.clone()));

    click(&mut doc, &mut accordion, "one");
    click(&mut doc, &mut accordion, "two");

    assert_eq!(*toggled.lock(), vec![ItemId::new("one"), ItemId::new("two")]);
    assert_eq!(
        *changes.lock(),
        vec![SelectionState::single(Some("one")), SelectionState::single(Some("two"))]
    );
}

#[test]
fn test_removing_open_item_prunes_selection() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single().with_pre_expand("two"));
    accordion.remove_item("two").unwrap();
    accordion.render(&mut doc).unwrap();

    assert_eq!(accordion.value(), SelectionState::Single(None));
    assert_eq!(accordion.item_ids(), vec![ItemId::new("one"), ItemId::new("three")]);
    assert!(doc.find_by_text("Header 2").is_none());
}

// =========================================================================
// Controlled Ownership
// =========================================================================

#[test]
fn test_controlled_toggle_only_forwards() {
    setup();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_clone = requests.clone();
    let mut doc = Document::new();
    let mut accordion = Accordion::controlled(
        AccordionConfig::single(),
        SelectionState::single(Some("one")),
        move |request| requests_clone.lock().push(request.clone()),
        IdProvider::shared(),
    )
    .with_item("one", "Header 1", "Content 1")
    .unwrap()
    .with_item("two", "Header 2", "Content 2")
    .unwrap();
    accordion.mount(&mut doc, None).unwrap();

    click(&mut doc, &mut accordion, "two");
    click(&mut doc, &mut accordion, "two");
    assert!(accordion.is_expanded("one"));
    assert!(!accordion.is_expanded("two"));

    let requests = requests.lock().clone();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].item_id, ItemId::new("two"));
    assert_eq!(requests[0].next, SelectionState::single(Some("two")));

    // The owner applies the value.
    assert!(accordion.set_value(requests[0].next.clone()));
    accordion.render(&mut doc).unwrap();
    let button = accordion.header_node("two").unwrap();
    assert_eq!(doc.attribute(button, aria::EXPANDED), Some("true"));
}

#[test]
fn test_controlled_remove_leaves_value_to_owner() {
    setup();
    let mut accordion = Accordion::controlled(
        AccordionConfig::multiple(),
        SelectionState::multiple(["one"]),
        |_| {},
        IdProvider::shared(),
    )
    .with_item("one", "Header 1", "Content 1")
    .unwrap();
    accordion.remove_item("one").unwrap();
    assert_eq!(accordion.value(), SelectionState::multiple(["one"]));
}

// =========================================================================
// Keyboard
// =========================================================================

#[test]
fn test_move_next_wraps_from_last() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    let three = accordion.header_node("three").unwrap();
    assert!(doc.focus(three));

    let event = press(&mut doc, &mut accordion, "three", Key::ArrowDown);
    assert!(event.is_default_prevented());
    assert_eq!(doc.focused(), accordion.header_node("one"));
}

#[test]
fn test_roving_focus_edges() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    let one = accordion.header_node("one").unwrap();
    let two = accordion.header_node("two").unwrap();
    let three = accordion.header_node("three").unwrap();

    doc.focus(one);
    press(&mut doc, &mut accordion, "one", Key::ArrowUp);
    assert_eq!(doc.focused(), Some(three));

    press(&mut doc, &mut accordion, "three", Key::ArrowUp);
    assert_eq!(doc.focused(), Some(two));

    let event = press(&mut doc, &mut accordion, "two", Key::Home);
    assert!(event.is_default_prevented());
    assert_eq!(doc.focused(), Some(one));

    let event = press(&mut doc, &mut accordion, "one", Key::End);
    assert!(event.is_accepted());
    assert!(!event.is_default_prevented());
    assert_eq!(doc.focused(), Some(three));
}

#[test]
fn test_activation_keeps_focus() {
    let (mut doc, mut accordion) = mount(AccordionConfig::multiple());
    let two = accordion.header_node("two").unwrap();
    doc.focus(two);

    for key in [Key::Space, Key::Enter] {
        let event = press(&mut doc, &mut accordion, "two", key);
        assert!(event.is_default_prevented());
        assert_eq!(doc.focused(), Some(two));
    }
    // Opened by Space, closed by Enter.
    assert!(expanded_set(&doc, &accordion).is_empty());
}

#[test]
fn test_navigation_keeps_selection() {
    let (mut doc, mut accordion) = mount(AccordionConfig::multiple().with_pre_expand("two"));
    doc.focus(accordion.header_node("one").unwrap());

    for (from, key) in [
        ("one", Key::ArrowDown),
        ("two", Key::ArrowDown),
        ("three", Key::Home),
        ("one", Key::End),
        ("three", Key::ArrowUp),
    ] {
        press(&mut doc, &mut accordion, from, key);
        assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);
    }
    assert_eq!(doc.focused(), accordion.header_node("two"));
}

#[test]
fn test_unhandled_key_passes_through() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    doc.focus(accordion.header_node("one").unwrap());
    let event = press(&mut doc, &mut accordion, "one", Key::Tab);
    assert!(!event.is_accepted());
    assert!(!event.is_default_prevented());
    assert_eq!(doc.focused(), accordion.header_node("one"));
}

#[test]
fn test_dom_key_names_drive_navigation() {
    let (mut doc, mut accordion) = mount(AccordionConfig::single());
    doc.focus(accordion.header_node("one").unwrap());
    let key = Key::from_dom_key("ArrowDown");
    press(&mut doc, &mut accordion, "one", key);
    assert_eq!(doc.focused(), accordion.header_node("two"));
}

#[test]
fn test_nested_accordions_keep_separate_rings() {
    let ids = IdProvider::shared();
    let (mut doc, mut outer) = mount_with(AccordionConfig::single().with_pre_expand("one"), ids.clone());

    let mut inner = Accordion::new(AccordionConfig::single(), ids)
        .with_item("a", "Inner A", "Inner content A")
        .unwrap()
        .with_item("b", "Inner B", "Inner content B")
        .unwrap();
    inner
        .mount(&mut doc, outer.content_node("one"))
        .unwrap();

    // Outer ring skips the nested headers.
    doc.focus(outer.header_node("one").unwrap());
    press(&mut doc, &mut outer, "one", Key::ArrowDown);
    assert_eq!(doc.focused(), outer.header_node("two"));

    // Inner ring wraps within itself.
    doc.focus(inner.header_node("b").unwrap());
    press(&mut doc, &mut inner, "b", Key::ArrowDown);
    assert_eq!(doc.focused(), inner.header_node("a"));

    // Inner headers are not outer targets.
    let a = inner.header_node("a").unwrap();
    assert!(!outer.dispatch(&mut doc, a, &mut ClickEvent::new().into()).unwrap());
}

// =========================================================================
// Configuration and Errors
// =========================================================================

#[test]
fn test_invalid_mode_is_fatal() {
    let err = Accordion::from_mode("invalidType", IdProvider::shared()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid Accordion `type` props. It's should be either `single` or `multiple`"
    );
    assert!(matches!(err, AccordionError::InvalidMode { ref value } if value == "invalidType"));

    assert!(Accordion::from_mode("multiple", IdProvider::shared()).is_ok());
}

#[test]
fn test_config_from_json() {
    let config: AccordionConfig =
        serde_json::from_str(r#"{ "type": "single", "preExpand": "two" }"#).unwrap();
    assert_eq!(config.mode, Mode::Single);
    assert!(config.allow_zero_collapse);
    assert_eq!(config.heading_level, 3);

    let (doc, accordion) = mount(config);
    assert_eq!(expanded_set(&doc, &accordion), vec!["two"]);

    let err = serde_json::from_str::<AccordionConfig>(r#"{ "mode": "both" }"#).unwrap_err();
    assert!(err.to_string().contains(INVALID_MODE_MESSAGE));

    assert!(serde_json::from_str::<AccordionConfig>(r#"{ "allowZeroCollapse": true }"#).is_err());
}

#[test]
fn test_parts_require_providers() {
    let err = ItemContext::derive(&Environment::new(), ItemId::new("one"), &IdProvider::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "Must be used inside Accordion Provider.");

    let accordion_env = Environment::new()
        .provide(AccordionContext::uncontrolled(AccordionConfig::single()))
        .into_shared();
    let err = AccordionHeader::from_env(&accordion_env, "Header").unwrap_err();
    assert_eq!(err.to_string(), "Must be used inside AccordionItemContext Provider.");
    let err = AccordionContent::from_env(&accordion_env, "Content").unwrap_err();
    assert_eq!(err.to_string(), "Must be used inside AccordionItemContext Provider.");
}

#[test]
fn test_dispatch_before_mount() {
    setup();
    let mut doc = Document::new();
    let mut accordion = Accordion::new(AccordionConfig::single(), IdProvider::shared())
        .with_item("one", "Header 1", "Content 1")
        .unwrap();
    let stray = doc.create_node("button", None).unwrap();
    let result = accordion.dispatch(&mut doc, stray, &mut ClickEvent::new().into());
    assert_eq!(result, Err(AccordionError::NotMounted));
}
