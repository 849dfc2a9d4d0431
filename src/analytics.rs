use crate::model::{Difficulty, GeneratedRecipe};
use serde::Serialize;
use std::collections::HashMap;

const TOP_CUISINES: usize = 5;

/// Summary numbers for a recipe collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total_recipes: usize,
    /// Mean of prep plus cook time, rounded; 0 for an empty collection
    pub average_total_minutes: u32,
    /// Most common cuisines, highest count first, ties by name
    pub top_cuisines: Vec<(String, usize)>,
    /// Only difficulties that occur, easiest first
    pub difficulty_counts: Vec<(Difficulty, usize)>,
}

impl CollectionStats {
    pub fn from_recipes(recipes: &[GeneratedRecipe]) -> Self {
        let total_recipes = recipes.len();

        let average_total_minutes = if recipes.is_empty() {
            0
        } else {
            let sum: u64 = recipes
                .iter()
                .map(|r| u64::from(r.total_time_minutes()))
                .sum();
            let count = recipes.len() as u64;
            ((2 * sum + count) / (2 * count)) as u32
        };

        let mut cuisines: HashMap<&str, usize> = HashMap::new();
        for cuisine in recipes.iter().filter_map(|r| r.cuisine_type.as_deref()) {
            *cuisines.entry(cuisine).or_default() += 1;
        }
        let mut top_cuisines: Vec<(String, usize)> = cuisines
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        top_cuisines.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_cuisines.truncate(TOP_CUISINES);

        let difficulty_counts = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .into_iter()
            .map(|level| {
                let count = recipes.iter().filter(|r| r.difficulty == level).count();
                (level, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            total_recipes,
            average_total_minutes,
            top_cuisines,
            difficulty_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use pretty_assertions::assert_eq;

    fn recipe(cuisine: Option<&str>, difficulty: Difficulty, prep: u32, cook: u32) -> GeneratedRecipe {
        GeneratedRecipe {
            template_id: "t".to_string(),
            title: "T".to_string(),
            description: String::new(),
            ingredients: vec![Ingredient::new("Salt", "to", "taste")],
            instructions: vec!["Cook.".to_string()],
            prep_time_minutes: prep,
            cook_time_minutes: cook,
            servings: 4,
            difficulty,
            cuisine_type: cuisine.map(str::to_string),
            dietary_restrictions: Vec::new(),
            narrative_note: String::new(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = CollectionStats::from_recipes(&[]);
        assert_eq!(stats.total_recipes, 0);
        assert_eq!(stats.average_total_minutes, 0);
        assert!(stats.top_cuisines.is_empty());
        assert!(stats.difficulty_counts.is_empty());
    }

    #[test]
    fn test_average_is_rounded() {
        // 30 and 45 average to 37.5, rounded up
        let recipes = vec![
            recipe(None, Difficulty::Easy, 10, 20),
            recipe(None, Difficulty::Easy, 15, 30),
        ];
        assert_eq!(CollectionStats::from_recipes(&recipes).average_total_minutes, 38);
    }

    #[test]
    fn test_cuisine_and_difficulty_counts() {
        let recipes = vec![
            recipe(Some("Italian"), Difficulty::Medium, 10, 20),
            recipe(Some("Mexican"), Difficulty::Hard, 10, 20),
            recipe(Some("Italian"), Difficulty::Medium, 10, 20),
            recipe(None, Difficulty::Medium, 10, 20),
            recipe(Some("Indian"), Difficulty::Hard, 10, 20),
        ];
        let stats = CollectionStats::from_recipes(&recipes);
        assert_eq!(
            stats.top_cuisines,
            vec![
                ("Italian".to_string(), 2),
                ("Indian".to_string(), 1),
                ("Mexican".to_string(), 1),
            ]
        );
        assert_eq!(
            stats.difficulty_counts,
            vec![(Difficulty::Medium, 3), (Difficulty::Hard, 2)]
        );
    }

    #[test]
    fn test_top_cuisines_capped_at_five() {
        let recipes: Vec<GeneratedRecipe> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|c| recipe(Some(*c), Difficulty::Easy, 5, 5))
            .collect();
        assert_eq!(CollectionStats::from_recipes(&recipes).top_cuisines.len(), 5);
    }
}
