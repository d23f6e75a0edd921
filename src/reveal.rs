use dioxus::prelude::*;

use crate::visibility::{use_visibility, VisibilityOptions};

pub const STAGGER_MULTIPLIER: f64 = 1.0;
pub const WORD_STAGGER_MS: f64 = 80.0;
pub const CHARACTER_STAGGER_MS: f64 = 30.0;

const NBSP: &str = "\u{00A0}";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealGranularity {
    #[default]
    Word,
    Character,
    Line,
}

impl RevealGranularity {
    pub fn default_increment_ms(self) -> f64 {
        match self {
            RevealGranularity::Word | RevealGranularity::Line => {
                WORD_STAGGER_MS * STAGGER_MULTIPLIER
            }
            RevealGranularity::Character => CHARACTER_STAGGER_MS * STAGGER_MULTIPLIER,
        }
    }
}

pub fn split_units(text: &str, granularity: RevealGranularity) -> Vec<String> {
    match granularity {
        RevealGranularity::Word => text
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect(),
        RevealGranularity::Character => text
            .chars()
            .map(|ch| {
                if ch == ' ' {
                    NBSP.to_string()
                } else {
                    ch.to_string()
                }
            })
            .collect(),
        RevealGranularity::Line => text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Transition delay for the unit at `index`.
pub fn stagger_delay_ms(base_ms: f64, index: usize, increment_ms: f64) -> f64 {
    base_ms + index as f64 * increment_ms
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealUnit {
    pub text: String,
    pub delay_ms: f64,
}

pub fn plan_reveal(
    text: &str,
    granularity: RevealGranularity,
    base_ms: f64,
    increment_ms: Option<f64>,
) -> Vec<RevealUnit> {
    let increment = increment_ms.unwrap_or_else(|| granularity.default_increment_ms());
    split_units(text, granularity)
        .into_iter()
        .enumerate()
        .map(|(index, text)| RevealUnit {
            text,
            delay_ms: stagger_delay_ms(base_ms, index, increment),
        })
        .collect()
}

/// Units run a keyframe animation only while visible. Dropping the class on
/// exit and adding it back on re-entry restarts the stagger from the first
/// unit.
pub fn unit_class(visible: bool) -> &'static str {
    if visible {
        "reveal-unit is-visible"
    } else {
        "reveal-unit"
    }
}

#[component]
pub fn AnimatedText(
    text: String,
    #[props(default)] granularity: RevealGranularity,
    #[props(default)] delay_ms: f64,
    stagger_ms: Option<f64>,
    #[props(default)] once: bool,
    #[props(default)] class: String,
) -> Element {
    let options = if once {
        VisibilityOptions::once()
    } else {
        VisibilityOptions::default()
    };
    let visibility = use_visibility(options);
    let visible = visibility.visible();
    let units = plan_reveal(&text, granularity, delay_ms, stagger_ms);
    let container_class = match granularity {
        RevealGranularity::Line => "animated-text lines",
        _ => "animated-text",
    };
    let unit_class = unit_class(visible);

    rsx! {
        div {
            class: "{container_class} {class}",
            onmounted: move |event| visibility.attach(event),
            aria_label: "{text}",
            div { class: "animated-text-row",
                for (index , unit) in units.into_iter().enumerate() {
                    span { key: "{index}", class: "reveal-slot", aria_hidden: "true",
                        span {
                            class: "{unit_class}",
                            style: "animation-delay: {unit.delay_ms}ms",
                            "{unit.text}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::VisibilityTracker;
    use pretty_assertions::assert_eq;

    #[test]
    fn repeating_text_restarts_its_animation_on_reentry() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::default());
        let mut classes = vec![unit_class(tracker.is_visible())];
        for intersecting in [true, false, true] {
            tracker.record(intersecting);
            classes.push(unit_class(tracker.is_visible()));
        }
        assert_eq!(
            classes,
            vec![
                "reveal-unit",
                "reveal-unit is-visible",
                "reveal-unit",
                "reveal-unit is-visible"
            ]
        );
    }

    #[test]
    fn once_text_keeps_its_final_state() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::once());
        tracker.record(true);
        tracker.record(false);
        assert_eq!(unit_class(tracker.is_visible()), "reveal-unit is-visible");
    }

    #[test]
    fn words_split_on_spaces() {
        assert_eq!(
            split_units("Hi, I'm  Mr. RockeY", RevealGranularity::Word),
            vec!["Hi,", "I'm", "Mr.", "RockeY"]
        );
    }

    #[test]
    fn characters_keep_spaces_as_non_breaking() {
        assert_eq!(
            split_units("a b", RevealGranularity::Character),
            vec!["a", "\u{00A0}", "b"]
        );
    }

    #[test]
    fn lines_split_on_newlines() {
        assert_eq!(
            split_units("first\r\nsecond\n\nthird", RevealGranularity::Line),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn empty_text_has_no_units() {
        for granularity in [
            RevealGranularity::Word,
            RevealGranularity::Character,
            RevealGranularity::Line,
        ] {
            assert!(plan_reveal("", granularity, 100.0, None).is_empty());
        }
        assert!(split_units("   ", RevealGranularity::Word).is_empty());
    }

    #[test]
    fn stagger_grows_linearly_from_base() {
        let delays: Vec<f64> = plan_reveal("one two three", RevealGranularity::Word, 200.0, None)
            .into_iter()
            .map(|unit| unit.delay_ms)
            .collect();
        assert_eq!(delays, vec![200.0, 280.0, 360.0]);
    }

    #[test]
    fn character_stagger_is_tighter_than_word_stagger() {
        let chars = RevealGranularity::Character.default_increment_ms();
        let words = RevealGranularity::Word.default_increment_ms();
        assert!(chars < words);
        assert!(chars >= words * 0.3 && chars <= words * 0.4);
    }

    #[test]
    fn explicit_increment_overrides_default() {
        let units = plan_reveal("ab", RevealGranularity::Character, 0.0, Some(10.0));
        assert_eq!(units[1].delay_ms, 10.0);
    }
}
