//! Day-master strength classification.

use bazi_pillars::{Element, FourPillars};

use crate::tally::element_tally;
use crate::weights::ElementWeights;

/// The day master's classified strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Neutral,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Neutral => "Neutral",
        }
    }
}

/// The fraction-of-total thresholds used to classify strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthThresholds {
    pub strong: f64,
    pub weak: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self { strong: 0.5, weak: 0.35 }
    }
}

/// The result of classifying a day master's strength: its status, the
/// raw support fraction the classification was built from, and a brief
/// analysis string (parameterized, ready for localized rendering).
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthAnalysis {
    pub status: Strength,
    pub score: f64,
    pub analysis: String,
}

fn generator_of(element: Element) -> Element {
    Element::ALL
        .iter()
        .copied()
        .find(|e| e.generates() == element)
        .expect("the five-element cycle gives every element exactly one generator")
}

fn classify_base(fraction: f64, thresholds: StrengthThresholds) -> Strength {
    if fraction > thresholds.strong {
        Strength::Strong
    } else if fraction < thresholds.weak {
        Strength::Weak
    } else {
        Strength::Neutral
    }
}

/// +1 if the month branch's ruling element supports the day master
/// (same element, or generates it); -1 if it overcomes the day master;
/// 0 otherwise.
fn month_shift(month_element: Element, day_element: Element) -> i32 {
    if month_element == day_element || month_element.generates() == day_element {
        1
    } else if month_element.controls() == day_element {
        -1
    } else {
        0
    }
}

fn shift(status: Strength, delta: i32) -> Strength {
    let rank = match status {
        Strength::Weak => 0,
        Strength::Neutral => 1,
        Strength::Strong => 2,
    };
    match (rank + delta).clamp(0, 2) {
        0 => Strength::Weak,
        1 => Strength::Neutral,
        _ => Strength::Strong,
    }
}

/// Classify the day master's strength: its own element plus its
/// generator's combined share of the chart's weighted element score
/// against `thresholds`, shifted by one step if the month branch's
/// primary hidden stem supports or overcomes it.
pub fn day_master_strength(
    chart: FourPillars,
    weights: ElementWeights,
    thresholds: StrengthThresholds,
) -> StrengthAnalysis {
    let tally = element_tally(chart, weights);
    let day_element = chart.day.stem.element();
    let generator = generator_of(day_element);

    let total = tally.total_score();
    let fraction = if total > 0.0 {
        (tally.score(day_element) + tally.score(generator)) / total
    } else {
        0.0
    };

    let base = classify_base(fraction, thresholds);
    let month_element = chart.month.branch.hidden_stems()[0].stem.element();
    let delta = month_shift(month_element, day_element);
    let status = shift(base, delta);

    let analysis = format!(
        "day master element {} draws {:.1}% support (self + generator) from the chart; \
         month branch contributes a {:+} step shift",
        day_element.name(),
        fraction * 100.0,
        delta
    );

    StrengthAnalysis { status, score: fraction, analysis }
}
