use serde::Serialize;
use std::f64::consts::PI;

pub const GOOD_THRESHOLD: f64 = 70.0;
pub const WARNING_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Bad,
    Warning,
    Good,
}

impl ScoreTier {
    pub fn token(self) -> &'static str {
        match self {
            ScoreTier::Good => "good",
            ScoreTier::Warning => "warning",
            ScoreTier::Bad => "bad",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Good => "#22c55e",
            ScoreTier::Warning => "#f59e0b",
            ScoreTier::Bad => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedScore {
    pub value: f64,
    pub tier: ScoreTier,
    pub fraction: f64,
    pub rounded: u8,
}

impl ClassifiedScore {
    /// Stroke dash pair (filled, circumference) for a ring of `radius`.
    pub fn ring_dash(&self, radius: f64) -> (f64, f64) {
        let circumference = 2.0 * PI * radius;
        (self.fraction * circumference, circumference)
    }
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

pub fn tier_for(score: f64) -> ScoreTier {
    let score = clamp_score(score);
    if score >= GOOD_THRESHOLD {
        ScoreTier::Good
    } else if score >= WARNING_THRESHOLD {
        ScoreTier::Warning
    } else {
        ScoreTier::Bad
    }
}

pub fn classify(score: f64) -> ClassifiedScore {
    let value = clamp_score(score);
    ClassifiedScore {
        value,
        tier: tier_for(value),
        fraction: value / 100.0,
        // half rounds up; value is already within 0..=100
        rounded: value.round() as u8,
    }
}
