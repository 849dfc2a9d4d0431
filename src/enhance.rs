//! Follow-up transforms applied to an already generated recipe.
//!
//! Each transform returns a new recipe; the input is not touched. Ingredient
//! names are rewritten with a case-insensitive, whole-word swap, and
//! amounts are only rescaled when they parse as a number or fraction.

use crate::model::{GeneratedRecipe, Ingredient};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Share of sugar kept by [`Enhancement::MakeHealthier`]
pub const SUGAR_FACTOR: f64 = 0.75;

const HEALTHIER_SUFFIX: &str = " (Healthier version with reduced calories)";
const VEGAN_TAG: &str = "Vegan";

const HEALTHIER_NOTE: &str = "A lighter take: olive oil stands in for butter and the sugar is cut by a quarter, so the dish keeps its character with fewer calories.";
const VEGAN_NOTE: &str = "Adapted to be fully plant-based. Dairy is swapped for almond milk and nutritional yeast, and the flavors stay where they were.";
const SUBSTITUTE_NOTE: &str = "Handy swaps: Greek yogurt for sour cream, honey for sugar, or cauliflower rice for regular rice when you want fewer carbs.";
const TIPS_NOTE: &str = "Two extra steps borrowed from restaurant kitchens have been added to the method.";

const TIPS: [&str; 2] = [
    "Pro tip: Let ingredients come to room temperature before cooking for even heat distribution.",
    "Chef's secret: Add a pinch of salt to enhance all flavors, even in sweet dishes.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Enhancement {
    /// Butter becomes olive oil, sugar is scaled by [`SUGAR_FACTOR`]
    MakeHealthier,
    /// Milk becomes almond milk, cheese becomes nutritional yeast, tagged Vegan
    DietaryAdapt,
    /// Suggests common substitutions in the note; ingredients unchanged
    IngredientSubstitute,
    /// Appends two technique tips to the instructions
    CookingTips,
}

impl Enhancement {
    pub const ALL: [Enhancement; 4] = [
        Enhancement::MakeHealthier,
        Enhancement::DietaryAdapt,
        Enhancement::IngredientSubstitute,
        Enhancement::CookingTips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Enhancement::MakeHealthier => "make-healthier",
            Enhancement::DietaryAdapt => "dietary-adapt",
            Enhancement::IngredientSubstitute => "ingredient-substitute",
            Enhancement::CookingTips => "cooking-tips",
        }
    }
}

impl fmt::Display for Enhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Enhancement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Enhancement::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown enhancement '{}', expected one of: {}",
                    s,
                    Enhancement::ALL.map(|e| e.as_str()).join(", ")
                )
            })
    }
}

/// Apply one enhancement. The note is replaced with one describing the
/// change.
pub fn enhance(recipe: &GeneratedRecipe, enhancement: Enhancement) -> GeneratedRecipe {
    debug!("Applying {} to '{}'", enhancement, recipe.template_id);
    let mut out = recipe.clone();

    match enhancement {
        Enhancement::MakeHealthier => {
            out.description.push_str(HEALTHIER_SUFFIX);
            out.ingredients = recipe.ingredients.iter().map(make_healthier).collect();
            out.narrative_note = HEALTHIER_NOTE.to_string();
        }
        Enhancement::DietaryAdapt => {
            if !out.dietary_restrictions.iter().any(|tag| tag == VEGAN_TAG) {
                out.dietary_restrictions.push(VEGAN_TAG.to_string());
            }
            out.ingredients = recipe.ingredients.iter().map(make_vegan).collect();
            out.narrative_note = VEGAN_NOTE.to_string();
        }
        Enhancement::IngredientSubstitute => {
            out.narrative_note = SUBSTITUTE_NOTE.to_string();
        }
        Enhancement::CookingTips => {
            out.instructions.extend(TIPS.iter().map(|tip| tip.to_string()));
            out.narrative_note = TIPS_NOTE.to_string();
        }
    }

    out
}

fn make_healthier(ingredient: &Ingredient) -> Ingredient {
    let mut out = ingredient.clone();
    if let Some(name) = replace_word(&ingredient.name, "butter", "olive oil") {
        out.name = name;
    }
    if contains_word(&ingredient.name, "sugar") {
        if let Some(amount) = scale_amount(&ingredient.amount, SUGAR_FACTOR) {
            out.amount = amount;
        }
    }
    out
}

fn make_vegan(ingredient: &Ingredient) -> Ingredient {
    let name = replace_word(&ingredient.name, "milk", "almond milk")
        .or_else(|| replace_word(&ingredient.name, "cheese", "nutritional yeast"));
    match name {
        Some(name) => Ingredient {
            name,
            ..ingredient.clone()
        },
        None => ingredient.clone(),
    }
}

fn contains_word(name: &str, needle: &str) -> bool {
    find_word(name, needle).is_some()
}

/// Byte offset of the first whole-word, case-insensitive match. "butter"
/// does not match inside "Buttermilk".
fn find_word(name: &str, needle: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets aligned with `name`
    let lower = name.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    lower.match_indices(needle).map(|(start, _)| start).find(|&start| {
        let end = start + needle.len();
        let before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        before && after
    })
}

/// Swap the first whole-word occurrence of `needle`. A capitalized match
/// gets a capitalized replacement.
fn replace_word(name: &str, needle: &str, replacement: &str) -> Option<String> {
    let start = find_word(name, needle)?;
    let end = start + needle.len();

    let capital = name[start..end]
        .chars()
        .next()
        .map_or(false, char::is_uppercase);
    let replacement = if capital {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    };

    Some(format!("{}{}{}", &name[..start], replacement, &name[end..]))
}

/// Parse "2", "0.5", "3/4" or "1 1/2". Anything else is display text.
fn parse_amount(amount: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut parts = 0;
    for part in amount.split_whitespace() {
        let value = match part.split_once('/') {
            Some((num, den)) => {
                let den: f64 = den.parse().ok()?;
                if den == 0.0 {
                    return None;
                }
                num.parse::<f64>().ok()? / den
            }
            None => part.parse().ok()?,
        };
        total += value;
        parts += 1;
    }
    (parts > 0 && total.is_finite()).then_some(total)
}

/// Multiply a numeric amount, rendering at most two decimals. Returns
/// `None` for amounts like "to" or "pinch".
fn scale_amount(amount: &str, factor: f64) -> Option<String> {
    let value = parse_amount(amount)? * factor;
    let rendered = format!("{:.2}", value);
    Some(rendered.trim_end_matches('0').trim_end_matches('.').to_string())
}
