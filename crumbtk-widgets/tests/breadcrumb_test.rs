use crumbtk_core::config::BreadcrumbConfig;
use crumbtk_core::container::{ElementList, ListContainer};
use crumbtk_core::path::Segment;
use crumbtk_core::signal::{ChangeEvent, ChangeKind};
use crumbtk_widgets::render::{ItemFlags, CONTEXT_ATTRIBUTE, LEVEL_ATTRIBUTE};
use crumbtk_widgets::Breadcrumb;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

type Events = Rc<RefCell<Vec<ChangeEvent>>>;

fn breadcrumb_with(config: BreadcrumbConfig) -> (Breadcrumb, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let breadcrumb = Breadcrumb::attach(ElementList::new(), config)
        .with_on_change(move |event| sink.borrow_mut().push(event.clone()));
    (breadcrumb, events)
}

fn last_event(events: &Events) -> ChangeEvent {
    events.borrow().last().cloned().expect("no change event emitted")
}

#[test]
fn test_home_docs_scenario() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());

    breadcrumb.push("Home");
    let event = last_event(&events);
    assert_eq!(event.kind, ChangeKind::Push);
    assert_eq!(event.path, vec!["Home"]);
    assert_eq!(event.context, None);

    breadcrumb.push(Segment::new("Docs").with_context(json!({"id": 1})));
    let event = last_event(&events);
    assert_eq!(event.path, vec!["Home", "Docs"]);
    assert_eq!(event.context, Some(json!({"id": 1})));

    breadcrumb.pop_one();
    let event = last_event(&events);
    assert_eq!(event.kind, ChangeKind::Pop);
    assert_eq!(event.path, vec!["Home"]);
    assert_eq!(event.context, None);

    let items = breadcrumb.container().children();
    assert_eq!(items.len(), 1);
    assert!(ItemFlags::of(&items[0]).contains(ItemFlags::ACTIVE));
    assert_eq!(items[0].text_content(), "Home");
}

#[test]
fn test_push_then_pop_restores_previous_top() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
    breadcrumb.push(Segment::new("Home").with_context(json!({"page": "home"})));
    breadcrumb.push(Segment::new("Guides").with_context(json!({"page": "guides"})));
    let before = breadcrumb.labels();

    breadcrumb.push(Segment::new("Install").with_context(json!({"page": "install"})));
    let removed = breadcrumb.pop(1);

    assert_eq!(breadcrumb.labels(), before);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].label, "Install");
    let event = last_event(&events);
    assert_eq!(event.context, Some(json!({"page": "guides"})));
    assert_eq!(breadcrumb.active_context(), Some(&json!({"page": "guides"})));
}

#[test]
fn test_reset_after_any_depth() {
    for depth in 0..6 {
        let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
        for i in 0..depth {
            breadcrumb.push(format!("level {}", i));
        }
        breadcrumb.reset();

        assert_eq!(breadcrumb.depth(), 0);
        assert!(breadcrumb.container().is_empty());
        assert_eq!(last_event(&events), ChangeEvent::reset());
        assert_eq!(events.borrow().len(), depth + 1);
    }
}

#[test]
fn test_pop_more_than_depth_empties() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
    breadcrumb.push("a");
    breadcrumb.push("b");

    let removed = breadcrumb.pop(5);
    assert_eq!(removed.len(), 2);
    assert_eq!(breadcrumb.depth(), 0);
    assert!(breadcrumb.container().is_empty());

    let event = last_event(&events);
    assert!(event.path.is_empty());
    assert_eq!(event.context, None);
}

#[test]
fn test_pop_single_segment() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
    breadcrumb.push(Segment::new("Only").with_context(json!(42)));

    let popped = breadcrumb.pop_one();
    assert_eq!(popped.map(|s| s.label), Some("Only".to_string()));
    assert!(breadcrumb.container().is_empty());
    assert_eq!(last_event(&events).context, None);

    assert!(breadcrumb.pop_one().is_none());
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn test_click_first_link_of_three() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
    breadcrumb.push(Segment::new("Home").with_context(json!({"id": 0})));
    breadcrumb.push("Docs");
    breadcrumb.push("API");

    assert!(breadcrumb.click(0));

    assert_eq!(breadcrumb.labels(), vec!["Home"]);
    let items = breadcrumb.container().children();
    assert_eq!(items.len(), 1);
    assert!(ItemFlags::of(&items[0]).contains(ItemFlags::ACTIVE));

    let event = last_event(&events);
    assert_eq!(event.kind, ChangeKind::Navigate);
    assert_eq!(event.path, vec!["Home"]);
    assert_eq!(event.context, Some(json!({"id": 0})));
}

#[test]
fn test_click_uses_rendered_level_in_collapsed_view() {
    let config = BreadcrumbConfig::default().with_max_items(3);
    let (mut breadcrumb, _) = breadcrumb_with(config);
    for label in ["r", "a", "b", "c", "d"] {
        breadcrumb.push(label);
    }

    // [r] [...] [d]: only the root link and the active item are visible.
    assert_eq!(breadcrumb.container().len(), 3);
    assert!(!breadcrumb.click(1));
    assert!(breadcrumb.click(0));
    assert_eq!(breadcrumb.labels(), vec!["r"]);
}

#[test]
fn test_navigate_to_middle() {
    let (mut breadcrumb, _) = breadcrumb_with(BreadcrumbConfig::default());
    for label in ["a", "b", "c", "d"] {
        breadcrumb.push(label);
    }
    assert!(breadcrumb.navigate_to(2));
    assert_eq!(breadcrumb.labels(), vec!["a", "b"]);
    assert!(!breadcrumb.navigate_to(2));
    assert!(!breadcrumb.navigate_to(0));
}

#[test]
fn test_context_round_trips_through_container() {
    let contexts = vec![
        json!({"id": 1, "nested": {"list": [1, 2, {"deep": true}]}}),
        json!("text with \"quotes\" and <tags>"),
        json!(3.25),
        json!([]),
        json!(false),
    ];
    let (mut breadcrumb, _) = breadcrumb_with(BreadcrumbConfig::default());
    for (i, context) in contexts.iter().enumerate() {
        breadcrumb.push(Segment::new(format!("s{}", i)).with_context(context.clone()));
    }

    let container = breadcrumb.into_container();
    let restored = Breadcrumb::attach(container, BreadcrumbConfig::default());
    let read_back: Vec<_> = restored
        .path()
        .segments()
        .iter()
        .map(|s| s.context.clone().expect("context lost"))
        .collect();
    assert_eq!(read_back, contexts);
}

#[test]
fn test_edge_values_round_trip_through_container() {
    let contexts = vec![
        json!(1.0715660391465826e-75),
        json!(-1.81996730402717e-179),
        json!(-1.603964615428183e143),
        json!(0.1 + 0.2),
        json!(f64::MAX),
        json!(5e-324),
        json!(u64::MAX),
        json!(i64::MIN),
        json!("Grüße, 世界 🍞"),
        json!("quote \" backslash \\ newline \n tab \t nul \u{0}"),
        json!({"ключ": ["\u{2028}", "</li>", "&amp;"]}),
    ];
    for context in contexts {
        let (mut breadcrumb, _) = breadcrumb_with(BreadcrumbConfig::default());
        breadcrumb.push("Home");
        breadcrumb.push(Segment::new("Leaf").with_context(context.clone()));

        let restored = Breadcrumb::attach(breadcrumb.into_container(), BreadcrumbConfig::default());
        assert_eq!(restored.active_context(), Some(&context), "context {} changed", context);
    }
}

#[test]
fn test_attach_to_collapsed_rendering_reads_visible_segments() {
    let (mut first, _) = breadcrumb_with(BreadcrumbConfig::default().with_max_items(3));
    for label in ["r", "a", "b", "c", "d"] {
        first.push(label);
    }
    let labels: Vec<_> = first
        .container()
        .children()
        .iter()
        .map(|item| item.text_content())
        .collect();
    assert_eq!(labels, vec!["r /", "… /", "d"]);

    let second = Breadcrumb::attach(first.into_container(), BreadcrumbConfig::default());
    assert_eq!(second.labels(), vec!["r", "d"]);
    let levels: Vec<_> = second
        .container()
        .children()
        .iter()
        .map(|item| item.attribute(LEVEL_ATTRIBUTE).unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["1", "2"]);
    assert!(second
        .container()
        .children()
        .iter()
        .all(|item| !ItemFlags::of(item).contains(ItemFlags::COLLAPSED)));
}

#[test]
fn test_attach_hydrates_existing_items() {
    let (mut first, _) = breadcrumb_with(BreadcrumbConfig::default());
    first.push("Home");
    first.push(Segment::new("Docs").with_context(json!({"id": 1})));
    first.push("API");
    let container = first.into_container();
    let before = container.clone();

    let mut second = Breadcrumb::attach(container, BreadcrumbConfig::default());
    assert_eq!(second.labels(), vec!["Home", "Docs", "API"]);
    assert_eq!(second.container(), &before);

    second.pop_one();
    assert_eq!(second.active_context(), Some(&json!({"id": 1})));
}

#[test]
fn test_empty_label_is_accepted() {
    let (mut breadcrumb, events) = breadcrumb_with(BreadcrumbConfig::default());
    breadcrumb.push("");
    breadcrumb.push("next");
    assert_eq!(breadcrumb.labels(), vec!["", "next"]);
    assert!(breadcrumb.click(0));
    assert_eq!(last_event(&events).path, vec![""]);
}

#[test]
fn test_rendered_levels_follow_position() {
    let (mut breadcrumb, _) = breadcrumb_with(BreadcrumbConfig::default());
    for label in ["a", "b", "c"] {
        breadcrumb.push(label);
    }
    let levels: Vec<_> = breadcrumb
        .container()
        .children()
        .iter()
        .map(|item| item.attribute(LEVEL_ATTRIBUTE).unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["1", "2", "3"]);
    assert!(breadcrumb.container().children()[2]
        .attribute(CONTEXT_ATTRIBUTE)
        .is_none());
}
