//! Weighted five-element count/score over a chart.

use bazi_pillars::{Element, FourPillars};

use crate::weights::ElementWeights;

const fn element_slot(element: Element) -> usize {
    match element {
        Element::Wood => 0,
        Element::Fire => 1,
        Element::Earth => 2,
        Element::Metal => 3,
        Element::Water => 4,
    }
}

/// The weighted score and unweighted count for each of the five
/// elements, accumulated across a chart's four stems and their
/// branches' hidden stems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTally {
    scores: [f64; 5],
    counts: [u32; 5],
}

impl ElementTally {
    pub fn score(&self, element: Element) -> f64 {
        self.scores[element_slot(element)]
    }

    pub fn count(&self, element: Element) -> u32 {
        self.counts[element_slot(element)]
    }

    pub fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Tally the five elements across `chart`: each of the four stems
/// contributes `weights.stem`, and each branch's hidden stems
/// contribute the primary/middle/residual weight matching their rank.
pub fn element_tally(chart: FourPillars, weights: ElementWeights) -> ElementTally {
    let mut scores = [0.0; 5];
    let mut counts = [0u32; 5];

    for pillar in chart.as_array() {
        let slot = element_slot(pillar.stem.element());
        scores[slot] += weights.stem;
        counts[slot] += 1;

        for hidden in pillar.branch.hidden_stems() {
            let hslot = element_slot(hidden.stem.element());
            scores[hslot] += weights.hidden_weight(hidden.role);
            counts[hslot] += 1;
        }
    }

    ElementTally { scores, counts }
}
