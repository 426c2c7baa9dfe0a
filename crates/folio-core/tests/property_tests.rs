//! Property-based tests for the typing schedule and skill merging
//!
//! Uses proptest to verify the timing and ordering invariants.

use std::collections::HashSet;
use std::time::Duration;

use folio_core::skills::{merge, MergedSkill, Skill, SkillOrigin};
use folio_core::{TypingConfig, TypingSchedule};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn target_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,40}").expect("valid regex")
}

fn config_strategy() -> impl Strategy<Value = TypingConfig> {
    (1u64..200, 0u64..2000, 1u64..1000)
        .prop_map(|(typing, delay, blink)| TypingConfig::from_millis(typing, delay, blink).unwrap())
}

/// Skill names from a small alphabet so collisions actually happen
fn skill_list_strategy() -> impl Strategy<Value = Vec<Skill>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["React", "Go", "Rust", "C", "Python", "rust", "Cisco"]),
            "#[0-9a-f]{6}",
        )
            .prop_map(|(name, color)| Skill::new(name, color)),
        0..10,
    )
}

fn tagged(skills: &[Skill], origin: SkillOrigin) -> Vec<MergedSkill> {
    skills
        .iter()
        .map(|s| MergedSkill {
            name: s.name.clone(),
            color: s.color.clone(),
            origin,
        })
        .collect()
}

fn tick(config: TypingConfig, n: u32) -> Duration {
    config.start_delay() + config.typing_speed() * n
}

// ============================================================================
// Typing Schedule Properties
// ============================================================================

proptest! {
    /// After at least len(T) ticks past the delay the whole target is shown
    #[test]
    fn full_target_after_enough_ticks(
        target in target_strategy(),
        config in config_strategy(),
        extra in 0u32..5,
    ) {
        let schedule = TypingSchedule::new(target.clone(), config);
        let n = schedule.char_count() as u32 + extra;
        let frame = schedule.frame_at(tick(config, n), 1);
        prop_assert_eq!(frame.displayed, target);
    }

    /// Before completion the prefix is strict and grows by exactly one per tick
    #[test]
    fn prefix_grows_by_one_per_tick(target in target_strategy(), config in config_strategy()) {
        let schedule = TypingSchedule::new(target.clone(), config);

        for k in 0..schedule.char_count() {
            let frame = schedule.frame_at(tick(config, k as u32), 1);
            prop_assert!(target.starts_with(&frame.displayed));
            prop_assert!(frame.displayed.len() < target.len());
            prop_assert_eq!(frame.displayed.chars().count(), k);

            // Just before the next tick nothing more is shown
            let before_next = tick(config, k as u32 + 1) - Duration::from_nanos(1);
            prop_assert_eq!(schedule.revealed_at(before_next), k);
        }
    }

    /// Revealed length never decreases as time passes
    #[test]
    fn reveal_is_monotone(
        target in target_strategy(),
        config in config_strategy(),
        mut times in prop::collection::vec(0u64..10_000, 1..20),
    ) {
        let schedule = TypingSchedule::new(target, config);
        times.sort_unstable();
        let revealed: Vec<usize> = times
            .iter()
            .map(|ms| schedule.revealed_at(Duration::from_millis(*ms)))
            .collect();
        prop_assert!(revealed.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Cursor toggles every blink interval, period twice the interval
    #[test]
    fn cursor_period_is_twice_blink(
        target in target_strategy(),
        config in config_strategy(),
        at in 0u64..100_000,
    ) {
        let schedule = TypingSchedule::new(target, config);
        let t = Duration::from_millis(at);
        let blink = config.cursor_blink();

        prop_assert_ne!(schedule.cursor_visible_at(t), schedule.cursor_visible_at(t + blink));
        prop_assert_eq!(schedule.cursor_visible_at(t), schedule.cursor_visible_at(t + blink * 2));
    }

    /// The driver always sleeps forward
    #[test]
    fn next_change_is_strictly_later(
        target in target_strategy(),
        config in config_strategy(),
        at in 0u64..100_000,
    ) {
        let schedule = TypingSchedule::new(target, config);
        let t = Duration::from_millis(at);
        prop_assert!(schedule.next_change_after(t) > t);
    }
}

// ============================================================================
// Merge Properties
// ============================================================================

proptest! {
    #[test]
    fn merge_without_dynamic_is_static(fixed in skill_list_strategy()) {
        prop_assert_eq!(merge(&[], &fixed), tagged(&fixed, SkillOrigin::Static));
    }

    #[test]
    fn merge_without_static_is_dynamic(dynamic in skill_list_strategy()) {
        prop_assert_eq!(merge(&dynamic, &[]), tagged(&dynamic, SkillOrigin::Dynamic));
    }

    /// Dynamic entries come first and unchanged; surviving static entries
    /// keep their order and never share a name with a dynamic entry
    #[test]
    fn merge_orders_and_dedups(dynamic in skill_list_strategy(), fixed in skill_list_strategy()) {
        let merged = merge(&dynamic, &fixed);
        let (head, tail) = merged.split_at(dynamic.len());

        prop_assert_eq!(head.to_vec(), tagged(&dynamic, SkillOrigin::Dynamic));

        let dynamic_names: HashSet<&str> = dynamic.iter().map(|s| s.name.as_str()).collect();
        let expected_tail: Vec<Skill> = fixed
            .iter()
            .filter(|s| !dynamic_names.contains(s.name.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(tail.to_vec(), tagged(&expected_tail, SkillOrigin::Static));
    }

    #[test]
    fn merge_is_idempotent(dynamic in skill_list_strategy(), fixed in skill_list_strategy()) {
        prop_assert_eq!(merge(&dynamic, &fixed), merge(&dynamic, &fixed));
    }
}
