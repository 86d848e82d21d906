use serde::{Deserialize, Serialize};

use super::state::SelectedOption;

/// Divisor calibrating the raw weight product so a typical strong rubric
/// lands near the Scale Up boundary.
pub const SCORE_NORMALIZER: f64 = 625_000.0;

/// Product of every chosen weight divided by [`SCORE_NORMALIZER`]. An unset
/// category multiplies as identity, so an untouched form scores
/// `1.0 / SCORE_NORMALIZER`, not zero; an exact zero can only come from the
/// rubric's single zero-weight option.
pub fn compute_score(chosen: &[Option<SelectedOption>]) -> f64 {
    let product: f64 = chosen
        .iter()
        .flatten()
        .map(|selection| selection.weight)
        .product();
    product / SCORE_NORMALIZER
}

/// Actionable classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    ScaleUp,
    SelfFund,
    NotViable,
    Undetermined,
}

impl Verdict {
    /// Bands are closed on their lower bound; the zero case is an exact
    /// equality check, not a band.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            Verdict::ScaleUp
        } else if score >= 2.0 {
            Verdict::SelfFund
        } else if score == 0.0 {
            Verdict::Undetermined
        } else {
            Verdict::NotViable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Verdict::ScaleUp => "Scale Up",
            Verdict::SelfFund => "Self-Fund",
            Verdict::NotViable => "Not viable",
            Verdict::Undetermined => "TBD",
        }
    }
}

/// Finer-grained display bucket for the same score. Presentation only; the
/// verdict never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Standout,
    Strong,
    Fundable,
    Borderline,
    Weak,
    Pending,
    Floor,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= 10.0 {
            Tier::Standout
        } else if score >= 4.0 {
            Tier::Strong
        } else if score >= 2.0 {
            Tier::Fundable
        } else if score >= 1.0 {
            Tier::Borderline
        } else if score >= 0.1 {
            Tier::Weak
        } else if score == 0.0 {
            Tier::Pending
        } else {
            Tier::Floor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tier::Standout => "Standout",
            Tier::Strong => "Strong",
            Tier::Fundable => "Fundable",
            Tier::Borderline => "Borderline",
            Tier::Weak => "Weak",
            Tier::Pending => "Pending",
            Tier::Floor => "Floor",
        }
    }

    /// Background class the rendering layer applies to the card.
    pub const fn css_class(self) -> &'static str {
        match self {
            Tier::Standout => "bg-green-500",
            Tier::Strong => "bg-green-400",
            Tier::Fundable => "bg-green-200",
            Tier::Borderline => "bg-red-400",
            Tier::Weak => "bg-red-500",
            Tier::Pending => "bg-stone-200",
            Tier::Floor => "bg-red-600",
        }
    }
}

/// Live score/verdict/color payload for the readout strip.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReadout {
    pub score: f64,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    pub tier: Tier,
    pub tier_class: &'static str,
}

impl ScoreReadout {
    pub fn from_chosen(chosen: &[Option<SelectedOption>]) -> Self {
        let score = compute_score(chosen);
        let verdict = Verdict::from_score(score);
        let tier = Tier::from_score(score);
        Self {
            score,
            verdict,
            verdict_label: verdict.label(),
            tier,
            tier_class: tier.css_class(),
        }
    }
}
