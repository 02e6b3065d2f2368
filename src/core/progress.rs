use serde::{Deserialize, Serialize};

use crate::core::amount::{format_amount, Amount};

pub const DEFAULT_BAR_WIDTH: usize = 20;

const FILLED_SEGMENT: &str = "▰";
const EMPTY_SEGMENT: &str = "▱";

/// The savings goal being worked toward. Deserialized straight from
/// the `[goal]` section of the configuration file; the configuration
/// layer guarantees `target` is positive and `bar_width` is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Goal {
    /// What the money is for; becomes the card title.
    #[serde(default = "default_name")]
    pub name: String,
    /// Amount to save up.
    pub target: Amount,
    /// Currency symbol shown after formatted amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Number of segments in the rendered progress bar.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_name() -> String {
    "Savings goal".to_string()
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

impl Goal {
    /// Derives the progress numbers for a saved total.
    pub fn progress(&self, saved: Amount) -> ProgressView {
        return ProgressView::new(saved, self.target, self.bar_width);
    }

    /// Renders the full display card for a saved total.
    pub fn card(&self, saved: Amount) -> ProgressCard {
        let view = self.progress(saved);

        let footer = if view.reached {
            "🎉 Goal reached!".to_string()
        } else {
            format!("Remaining: {}", self.amount_label(view.needed))
        };

        return ProgressCard {
            title: self.name.clone(),
            description: format!("Goal: {}", self.amount_label(self.target)),
            fields: vec![
                CardField::new("Saved so far", self.amount_label(view.saved)),
                CardField::new(
                    "Progress",
                    format!("{}\n{} complete", view.bar(), view.percent_label()),
                ),
            ],
            footer,
            accent: if view.reached {
                Accent::Reached
            } else {
                Accent::InProgress
            },
        };
    }

    /// Short acknowledgement sent alongside the card after a
    /// contribution is recorded.
    pub fn confirmation(&self, amount: Amount) -> String {
        format!("✅ +{} added!", self.amount_label(amount))
    }

    /// An amount formatted for display with the currency symbol.
    pub fn amount_label(&self, amount: Amount) -> String {
        format!("{} {}", format_amount(amount), self.currency)
    }
}

/// Derived progress numbers, computed fresh from a saved total and a
/// goal; nothing here is ever stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressView {
    pub saved: Amount,
    pub target: Amount,
    /// Fraction of the goal reached, clamped to `0.0..=1.0`.
    pub percentage: f64,
    /// Filled segments of the bar: `floor(bar_width * percentage)`.
    pub filled: usize,
    /// The rest of the bar; `filled + empty` is always the bar width.
    pub empty: usize,
    /// Amount still missing, zero once the goal is reached.
    pub needed: Amount,
    pub reached: bool,
}

impl ProgressView {
    pub fn new(saved: Amount, target: Amount, bar_width: usize) -> ProgressView {
        let percentage = (saved / target).min(1.0);
        let filled = (bar_width as f64 * percentage).floor() as usize;

        return ProgressView {
            saved,
            target,
            percentage,
            filled,
            empty: bar_width - filled,
            needed: (target - saved).max(0.0),
            reached: saved >= target,
        };
    }

    /// The textual bar: filled segments first, then empty ones.
    pub fn bar(&self) -> String {
        return FILLED_SEGMENT.repeat(self.filled) + &EMPTY_SEGMENT.repeat(self.empty);
    }

    /// Percentage with one decimal, e.g. `41.7%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percentage * 100.0)
    }
}

/// Accent the displaying collaborator should pick for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    InProgress,
    Reached,
}

/// One labeled block of text on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
}

impl CardField {
    fn new(name: &str, value: String) -> CardField {
        CardField {
            name: name.to_string(),
            value,
        }
    }
}

/// Platform-agnostic display payload. Whatever is connected to the
/// channel decides how to present it, be that a chat embed or plain
/// colored terminal output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressCard {
    pub title: String,
    pub description: String,
    pub fields: Vec<CardField>,
    pub footer: String,
    pub accent: Accent,
}

#[cfg(test)]
mod tests {
    use super::{Accent, Goal, ProgressView};

    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn goal() -> Goal {
        Goal {
            name: "Porsche 911".to_string(),
            target: 30_000_000.0,
            currency: "₽".to_string(),
            bar_width: 20,
        }
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(15_000_000.0, 0.5)]
    #[case(30_000_000.0, 1.0)]
    #[case(45_000_000.0, 1.0)]
    fn percentage_is_clamped(goal: Goal, #[case] saved: f64, #[case] expected: f64) {
        let view = goal.progress(saved);
        assert_eq!(view.percentage, expected);
        assert!((0.0..=1.0).contains(&view.percentage));
    }

    #[rstest]
    fn bar_segments_partition_the_width(goal: Goal) {
        for saved in [0.0, 1.0, 12_500_000.0, 29_999_999.0, 30_000_000.0, 1e9] {
            let view = goal.progress(saved);
            assert_eq!(view.filled + view.empty, goal.bar_width);
            assert_eq!(
                view.filled,
                (goal.bar_width as f64 * view.percentage).floor() as usize
            );
        }
    }

    #[rstest]
    fn empty_bar_before_first_contribution(goal: Goal) {
        let view = goal.progress(0.0);
        assert_eq!(view.bar(), "▱".repeat(20));
        assert_eq!(view.percent_label(), "0.0%");
        assert_eq!(view.needed, 30_000_000.0);
        assert!(!view.reached);
    }

    #[rstest]
    fn full_bar_once_target_is_met(goal: Goal) {
        let view = goal.progress(30_000_000.0);
        assert_eq!(view.bar(), "▰".repeat(20));
        assert_eq!(view.percent_label(), "100.0%");
        assert_eq!(view.needed, 0.0);
        assert!(view.reached);
    }

    #[test]
    fn partial_progress_floors_the_filled_count() {
        let view = ProgressView::new(12_500_000.0, 30_000_000.0, 20);
        // 41.66% of 20 segments floors to 8
        assert_eq!(view.filled, 8);
        assert_eq!(view.empty, 12);
        assert_eq!(view.percent_label(), "41.7%");
    }

    #[rstest]
    fn card_midway_through(goal: Goal) {
        let card = goal.card(15_000_000.0);

        assert_eq!(card.title, "Porsche 911");
        assert_eq!(card.description, "Goal: 30 000 000 ₽");
        assert_eq!(card.fields.len(), 2);
        assert_eq!(card.fields[0].name, "Saved so far");
        assert_eq!(card.fields[0].value, "15 000 000 ₽");
        assert_eq!(card.fields[1].name, "Progress");
        assert_eq!(
            card.fields[1].value,
            format!("{}{}\n50.0% complete", "▰".repeat(10), "▱".repeat(10))
        );
        assert_eq!(card.footer, "Remaining: 15 000 000 ₽");
        assert_eq!(card.accent, Accent::InProgress);
    }

    #[rstest]
    fn card_when_goal_reached(goal: Goal) {
        let card = goal.card(31_000_000.0);

        assert_eq!(card.fields[0].value, "31 000 000 ₽");
        assert_eq!(
            card.fields[1].value,
            format!("{}\n100.0% complete", "▰".repeat(20))
        );
        assert_eq!(card.footer, "🎉 Goal reached!");
        assert_eq!(card.accent, Accent::Reached);
    }

    #[rstest]
    fn card_serializes_for_the_wire(goal: Goal) {
        let value = serde_json::to_value(goal.card(0.0)).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Porsche 911",
                "description": "Goal: 30 000 000 ₽",
                "fields": [
                    {"name": "Saved so far", "value": "0 ₽"},
                    {"name": "Progress", "value": format!("{}\n0.0% complete", "▱".repeat(20))},
                ],
                "footer": "Remaining: 30 000 000 ₽",
                "accent": "in-progress",
            })
        );
    }

    #[rstest]
    fn confirmation_mentions_the_contribution(goal: Goal) {
        assert_eq!(goal.confirmation(1000.5), "✅ +1 001 ₽ added!");
    }
}
