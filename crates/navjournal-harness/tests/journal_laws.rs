//! Journal stack laws.
//!
//! Verifies:
//! 1. A `New` navigation always leaves the forward stack empty
//! 2. GoBack/GoForward are symmetric
//! 3. Journal moves on empty stacks fail with `InvalidOperationState`
//! 4. RemoveBackEntry drains most-recent-first, then yields `None`
//! 5. A 20-page walk back and forth restores both stacks exactly
//! 6. Unnamed custom entries resolve to the localized placeholder
//! 7. Navigating to `null` completes and still journals the page left
//! 8. Random operation sequences agree with a two-stack model

use std::rc::Rc;

use navjournal_core::{NavigationMode, NavigationTarget, Page};
use navjournal_harness::{
    EventKind, EventLog, ListSelection, init_test_logging, navigate_pages, page_names,
};
use navjournal_runtime::{
    JournalConfig, NavigableHost, NavigationService, NavigationWindow,
};
use proptest::prelude::*;

fn window_with_pages(count: usize) -> NavigationWindow {
    init_test_logging();
    let mut window = NavigationWindow::new("laws");
    navigate_pages(&mut window, count).expect("navigate pages");
    window
}

fn current_name(host: &dyn NavigableHost) -> Option<String> {
    host.content().map(|page| page.name().to_string())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Deterministic laws
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn new_navigation_clears_forward_stack() {
    let mut window = window_with_pages(5);
    window.go_back().expect("back");
    window.go_back().expect("back");
    assert_eq!(page_names(&window.forward_stack()), vec!["Page3", "Page4"]);

    window
        .navigate(NavigationTarget::Page(Page::new("Branch")))
        .expect("navigate");

    assert!(window.forward_stack().is_empty());
    assert!(!window.can_go_forward());
    assert_eq!(
        page_names(&window.back_stack()),
        vec!["Page2", "Page1", "Page0"]
    );
}

#[test]
fn back_forward_symmetry() {
    let mut window = NavigationWindow::new("symmetry");
    window.navigate(Page::new("A").into()).expect("navigate");
    window.navigate(Page::new("B").into()).expect("navigate");
    let back_before = page_names(&window.back_stack());

    window.go_back().expect("back");
    assert_eq!(current_name(&window).as_deref(), Some("A"));
    assert_eq!(page_names(&window.forward_stack()), vec!["B"]);

    window.go_forward().expect("forward");
    assert_eq!(current_name(&window).as_deref(), Some("B"));
    assert!(window.forward_stack().is_empty());
    assert_eq!(page_names(&window.back_stack()), back_before);
}

#[test]
fn empty_stack_moves_fail() {
    let mut window = NavigationWindow::new("empty");
    assert!(!window.can_go_back());
    assert!(window.go_back().unwrap_err().is_invalid_state());
    assert!(window.go_forward().unwrap_err().is_invalid_state());

    window.navigate(Page::new("Only").into()).expect("navigate");
    let err = window.go_back().unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(err.to_string(), "invalid operation: no entries to go back to");
    let err = window.go_forward().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid operation: no entries to go forward to"
    );
}

#[test]
fn remove_back_entry_drains_then_returns_none() {
    let mut window = window_with_pages(4);
    let forward_before = window.forward_stack().len();

    let mut removed = Vec::new();
    while let Some(entry) = window.remove_back_entry() {
        removed.push(entry.display_name("Untitled"));
    }

    assert_eq!(removed, vec!["Page2", "Page1", "Page0"]);
    assert!(window.remove_back_entry().is_none());
    assert!(window.remove_back_entry().is_none());
    assert_eq!(window.forward_stack().len(), forward_before);
    assert_eq!(current_name(&window).as_deref(), Some("Page3"));
}

// ═════════════════════════════════════════════════════════════════════════
// 5. N-page round trip
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn twenty_page_round_trip_restores_stacks() {
    const N: usize = 20;
    let mut window = window_with_pages(N);
    let back_after_walk = page_names(&window.back_stack());
    let forward_after_walk = page_names(&window.forward_stack());
    assert_eq!(back_after_walk.len(), N - 1);

    for _ in 0..N - 1 {
        window.go_back().expect("back");
    }
    assert_eq!(current_name(&window).as_deref(), Some("Page0"));
    assert!(!window.can_go_back());
    assert_eq!(window.forward_stack().len(), N - 1);

    for _ in 0..N - 1 {
        window.go_forward().expect("forward");
    }
    assert_eq!(current_name(&window).as_deref(), Some("Page19"));
    assert_eq!(page_names(&window.back_stack()), back_after_walk);
    assert_eq!(page_names(&window.forward_stack()), forward_after_walk);
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Placeholder names and null navigation
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn unnamed_custom_entry_is_untitled() {
    let mut window = window_with_pages(1);
    let list = ListSelection::new();
    window
        .add_back_entry(Rc::new(list.snapshot()))
        .expect("add back entry");

    let service = window.navigation_service();
    let back = service.back_stack();
    let entry = &back[0];
    assert_eq!(service.entry_display_name(entry), "Untitled");
}

#[test]
fn unnamed_entry_placeholder_is_localized() {
    let mut service = NavigationService::with_config(JournalConfig::new().with_locale("fr"));
    service.navigate(Page::new("Liste")).expect("navigate");
    service
        .add_back_entry(Rc::new(ListSelection::new().snapshot()))
        .expect("add back entry");
    let back = service.back_stack();
    let entry = &back[0];
    assert_eq!(service.entry_display_name(entry), "Sans titre");
}

#[test]
fn null_navigation_is_not_an_error() {
    let log = EventLog::new();
    let mut window = window_with_pages(2);
    window.navigation_service_mut().add_observer(log.recorder());

    let outcome = window.navigate(NavigationTarget::Null).expect("navigate null");

    assert!(outcome.is_completed());
    assert!(window.content().is_none());
    assert_eq!(page_names(&window.back_stack()), vec!["Page1", "Page0"]);
    assert_eq!(
        log.kinds(),
        vec![
            EventKind::Navigating,
            EventKind::Navigated,
            EventKind::LoadCompleted
        ]
    );
    let completed = log.of_kind(EventKind::LoadCompleted);
    let completed = &completed[0];
    assert_eq!(completed.content, None);
    assert_eq!(completed.mode, NavigationMode::New);
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Model-based properties
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum Op {
    Navigate(u8),
    Back,
    Forward,
    Remove,
    Refresh,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8).prop_map(Op::Navigate),
        3 => Just(Op::Back),
        3 => Just(Op::Forward),
        1 => Just(Op::Remove),
        1 => Just(Op::Refresh),
    ]
}

/// Two stacks of page names, most recent last.
#[derive(Debug, Default)]
struct Model {
    back: Vec<String>,
    forward: Vec<String>,
    current: Option<String>,
}

impl Model {
    fn back_names(&self) -> Vec<String> {
        self.back.iter().rev().cloned().collect()
    }

    fn forward_names(&self) -> Vec<String> {
        self.forward.iter().rev().cloned().collect()
    }
}

proptest! {
    #[test]
    fn new_navigation_always_empties_forward(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut service = NavigationService::new();
        for op in ops {
            match op {
                Op::Navigate(n) => {
                    service.navigate(Page::new(format!("P{n}"))).expect("navigate");
                    prop_assert!(service.forward_stack().is_empty());
                    prop_assert!(!service.can_go_forward());
                }
                Op::Back => { let _ = service.go_back(); }
                Op::Forward => { let _ = service.go_forward(); }
                Op::Remove => { let _ = service.remove_back_entry(); }
                Op::Refresh => { let _ = service.refresh(); }
            }
            prop_assert_eq!(service.can_go_back(), !service.back_stack().is_empty());
            prop_assert_eq!(service.can_go_forward(), !service.forward_stack().is_empty());
        }
    }

    #[test]
    fn service_agrees_with_two_stack_model(ops in proptest::collection::vec(op_strategy(), 0..80)) {
        let mut service = NavigationService::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Navigate(n) => {
                    let name = format!("P{n}");
                    service.navigate(Page::new(name.clone())).expect("navigate");
                    if let Some(current) = model.current.take() {
                        model.back.push(current);
                    }
                    model.forward.clear();
                    model.current = Some(name);
                }
                Op::Back => {
                    let result = service.go_back();
                    match model.back.pop() {
                        Some(target) => {
                            prop_assert!(result.is_ok());
                            if let Some(current) = model.current.replace(target) {
                                model.forward.push(current);
                            }
                        }
                        None => prop_assert!(result.unwrap_err().is_invalid_state()),
                    }
                }
                Op::Forward => {
                    let result = service.go_forward();
                    match model.forward.pop() {
                        Some(target) => {
                            prop_assert!(result.is_ok());
                            if let Some(current) = model.current.replace(target) {
                                model.back.push(current);
                            }
                        }
                        None => prop_assert!(result.unwrap_err().is_invalid_state()),
                    }
                }
                Op::Remove => {
                    let removed = service.remove_back_entry().map(|e| e.display_name("Untitled"));
                    prop_assert_eq!(removed, model.back.pop());
                }
                Op::Refresh => {
                    let result = service.refresh();
                    prop_assert_eq!(result.is_ok(), model.current.is_some());
                }
            }

            prop_assert_eq!(page_names(&service.back_stack()), model.back_names());
            prop_assert_eq!(page_names(&service.forward_stack()), model.forward_names());
            prop_assert_eq!(
                service.content().map(|p| p.name().to_string()),
                model.current.clone()
            );
        }
    }

    #[test]
    fn round_trip_restores_stacks(count in 2usize..30) {
        let mut window = NavigationWindow::new("walk");
        navigate_pages(&mut window, count).expect("navigate");
        let back = page_names(&window.back_stack());

        for _ in 0..count - 1 {
            window.go_back().expect("back");
        }
        for _ in 0..count - 1 {
            window.go_forward().expect("forward");
        }

        prop_assert_eq!(page_names(&window.back_stack()), back);
        prop_assert!(window.forward_stack().is_empty());
    }
}
