//! Category Selection - Industry and Name Heuristic

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wordmark,
    Lettermark,
    Pictorial,
    Abstract,
    Combination,
    Emblem,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Wordmark,
        Category::Lettermark,
        Category::Pictorial,
        Category::Abstract,
        Category::Combination,
        Category::Emblem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wordmark => "wordmark",
            Category::Lettermark => "lettermark",
            Category::Pictorial => "pictorial",
            Category::Abstract => "abstract",
            Category::Combination => "combination",
            Category::Emblem => "emblem",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown logo category: {}", s))
    }
}

const TECH_INDUSTRIES: [&str; 3] = ["technology", "software", "ai"];
const PROFESSIONAL_INDUSTRIES: [&str; 3] = ["consulting", "finance", "legal"];
const CREATIVE_INDUSTRIES: [&str; 3] = ["creative", "design", "art"];

const TECH_CHOICES: [Category; 3] = [Category::Abstract, Category::Lettermark, Category::Combination];
const PROFESSIONAL_CHOICES: [Category; 3] = [Category::Wordmark, Category::Lettermark, Category::Emblem];
const CREATIVE_CHOICES: [Category; 3] = [Category::Pictorial, Category::Abstract, Category::Combination];
const SINGLE_WORD_CHOICES: [Category; 3] = [Category::Lettermark, Category::Pictorial, Category::Abstract];
const TWO_WORD_CHOICES: [Category; 2] = [Category::Combination, Category::Wordmark];

/// Pick a layout category for a company.
///
/// Industry keywords take priority over the name's word count. Every branch
/// except the 3+ word fallback draws once from `rng`.
pub fn select_category<R: Rng + ?Sized>(company_name: &str, industry: &str, rng: &mut R) -> Category {
    if TECH_INDUSTRIES.contains(&industry) {
        return pick(&TECH_CHOICES, rng);
    }
    if PROFESSIONAL_INDUSTRIES.contains(&industry) {
        return pick(&PROFESSIONAL_CHOICES, rng);
    }
    if CREATIVE_INDUSTRIES.contains(&industry) {
        return pick(&CREATIVE_CHOICES, rng);
    }

    match company_name.split_whitespace().count() {
        1 => pick(&SINGLE_WORD_CHOICES, rng),
        2 => pick(&TWO_WORD_CHOICES, rng),
        _ => Category::Wordmark,
    }
}

/// Categories `select_category` can return for this input.
pub fn candidate_categories(company_name: &str, industry: &str) -> &'static [Category] {
    if TECH_INDUSTRIES.contains(&industry) {
        &TECH_CHOICES
    } else if PROFESSIONAL_INDUSTRIES.contains(&industry) {
        &PROFESSIONAL_CHOICES
    } else if CREATIVE_INDUSTRIES.contains(&industry) {
        &CREATIVE_CHOICES
    } else {
        match company_name.split_whitespace().count() {
            1 => &SINGLE_WORD_CHOICES,
            2 => &TWO_WORD_CHOICES,
            _ => &[Category::Wordmark],
        }
    }
}

fn pick<R: Rng + ?Sized>(choices: &[Category], rng: &mut R) -> Category {
    choices[rng.gen_range(0..choices.len())]
}
