//! Property-based tests for the widget and primitive invariants.

use proptest::prelude::*;
use megilance_core::primitives::{GaugeGeometry, Initials, Percent, Sentiment};
use megilance_core::toast::{ToastQueue, ToastRequest, MAX_TOASTS};
use megilance_core::widgets::{Pager, TabKey, TabsState, TagKey, TagList, TagOutcome};
use megilance_core::{ClassSet, Component, Theme};

// ============================================================================
// Strategy Generators
// ============================================================================

fn tag_key_strategy() -> impl Strategy<Value = TagKey> {
    prop_oneof![Just(TagKey::Enter), Just(TagKey::Comma), Just(TagKey::Other)]
}

fn tab_key_strategy() -> impl Strategy<Value = TabKey> {
    prop_oneof![
        Just(TabKey::ArrowLeft),
        Just(TabKey::ArrowRight),
        Just(TabKey::Home),
        Just(TabKey::End),
    ]
}

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn percent_is_always_in_range(value in proptest::num::f64::ANY) {
        let p = Percent::clamped(value);
        prop_assert!((0.0..=100.0).contains(&p.value()));
        prop_assert!((0.0..=1.0).contains(&p.fraction()));
    }

    #[test]
    fn gauge_rotation_within_half_turn(score in -1000.0f64..1000.0) {
        let gauge = GaugeGeometry::new(score);
        prop_assert!((0.0..=180.0).contains(&gauge.rotation_deg()));
        let (_, y) = gauge.arc_end();
        prop_assert!(y <= GaugeGeometry::CENTER_Y + 1e-9);
    }

    #[test]
    fn sentiment_band_matches_threshold(score in -1.0f64..=1.0) {
        let expected = if score > 0.2 {
            Sentiment::Positive
        } else if score < -0.2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        prop_assert_eq!(Sentiment::from_score(score), expected);
    }

    #[test]
    fn initials_are_short_and_uppercase(name in "[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,3}") {
        let initials = Initials::from_name(&name).unwrap();
        let count = initials.as_str().chars().count();
        prop_assert!((1..=2).contains(&count));
        prop_assert_eq!(initials.as_str().to_uppercase(), initials.as_str());
    }

    #[test]
    fn blank_names_have_no_initials(name in "[ \t\n]{0,8}") {
        prop_assert!(Initials::from_name(&name).is_err());
    }

    #[test]
    fn tag_list_never_holds_duplicates(
        steps in prop::collection::vec(("[a-c ]{0,3}", tag_key_strategy()), 0..40)
    ) {
        let mut list = TagList::default();
        for (text, key) in steps {
            list.set_buffer(text);
            let before = list.tags().len();
            match list.handle_key(key) {
                TagOutcome::Added(tag) => {
                    prop_assert_eq!(list.tags().len(), before + 1);
                    prop_assert_eq!(list.tags().last(), Some(&tag));
                }
                _ => prop_assert_eq!(list.tags().len(), before),
            }
        }
        let mut seen = std::collections::HashSet::new();
        for tag in list.tags() {
            prop_assert!(!tag.trim().is_empty());
            prop_assert!(seen.insert(tag.clone()), "duplicate tag {}", tag);
        }
    }

    #[test]
    fn commas_never_end_up_inside_tags(
        steps in prop::collection::vec(("[a-c, ]{0,6}", tag_key_strategy()), 0..30)
    ) {
        let mut list = TagList::default();
        for (text, key) in steps {
            list.set_buffer(text);
            prop_assert!(!list.buffer().contains(','));
            list.handle_key(key);
        }
        for tag in list.tags() {
            prop_assert!(!tag.contains(','), "comma inside tag {:?}", tag);
        }
    }

    #[test]
    fn tabs_selection_stays_in_range(
        count in 1usize..8,
        default in 0usize..20,
        keys in prop::collection::vec(tab_key_strategy(), 0..30)
    ) {
        let mut tabs = TabsState::new(count, default);
        prop_assert!(tabs.selected() < count);
        for key in keys {
            tabs.handle_key(key);
            prop_assert!(tabs.selected() < count);
        }
    }

    #[test]
    fn pager_controls_match_bounds(total in 0u32..50, current in 1u32..50) {
        let pager = Pager::new(current.min(total.max(1)), total);
        prop_assert_eq!(pager.previous().is_some(), pager.current > 1);
        if let Some(next) = pager.next() {
            prop_assert!(next <= total);
        }
        prop_assert_eq!(pager.is_visible(), total > 1);
    }

    #[test]
    fn toast_queue_is_capped(count in 0usize..20) {
        let mut queue = ToastQueue::new();
        let mut last = None;
        for i in 0..count {
            last = Some(queue.notify(ToastRequest::new(format!("toast {i}"))));
        }
        prop_assert_eq!(queue.len(), count.min(MAX_TOASTS));
        prop_assert_eq!(queue.items().first().map(|t| t.id), last);
    }

    #[test]
    fn class_set_has_exactly_one_overlay(theme in theme_strategy(), extra in "[a-z-]{0,10}") {
        let set = ClassSet::themed(Component::Toast, theme).with_override(Some(&extra));
        let entry = Component::Toast.style();
        let overlays = set
            .iter()
            .filter(|c| *c == entry.light || *c == entry.dark)
            .count();
        prop_assert_eq!(overlays, 1);
        prop_assert_eq!(set.iter().next(), Some(entry.common));
    }
}
