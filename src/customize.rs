use crate::model::{GeneratedRecipe, GenerationRequest, RecipeTemplate};

pub const DEFAULT_SERVINGS: u32 = 4;
/// Neither prep nor cook time is ever rescaled below this
pub const MIN_STAGE_MINUTES: u32 = 5;

/// Derive a recipe from `template` for this request. The template itself
/// is left untouched.
pub fn customize(template: &RecipeTemplate, request: &GenerationRequest) -> GeneratedRecipe {
    let (prep_time_minutes, cook_time_minutes) = match request.max_total_minutes {
        Some(max_total) if max_total < template.total_time_minutes() => rescale_times(
            template.prep_time_minutes,
            template.cook_time_minutes,
            max_total,
        ),
        _ => (template.prep_time_minutes, template.cook_time_minutes),
    };

    let mut narrative_note = template.narrative_note.clone();
    if !request.dietary_tags.is_empty() {
        narrative_note.push_str(&format!(
            " This recipe has been customized for {} dietary preferences.",
            request.dietary_tags.join(", ")
        ));
    }

    GeneratedRecipe {
        template_id: template.id.clone(),
        title: template.title.clone(),
        description: template.description.clone(),
        ingredients: template.ingredients.clone(),
        instructions: template.instructions.clone(),
        prep_time_minutes,
        cook_time_minutes,
        servings: request.servings.unwrap_or(DEFAULT_SERVINGS),
        difficulty: request.difficulty.unwrap_or_default(),
        cuisine_type: request.cuisine.clone(),
        dietary_restrictions: request.dietary_tags.clone(),
        narrative_note,
    }
}

/// Split `max_total` between prep and cook keeping the original ratio.
/// Prep is rounded half up; cook takes what is left. Both are floored at
/// [`MIN_STAGE_MINUTES`], so the sum can exceed `max_total` for small
/// budgets.
pub fn rescale_times(prep: u32, cook: u32, max_total: u32) -> (u32, u32) {
    let natural_total = u64::from(prep) + u64::from(cook);
    if natural_total == 0 {
        return (MIN_STAGE_MINUTES, MIN_STAGE_MINUTES);
    }

    let budget = u64::from(max_total);
    let scaled_prep = (2 * budget * u64::from(prep) + natural_total) / (2 * natural_total);
    // scaled_prep never exceeds budget, which came from a u32
    let new_prep = (scaled_prep as u32).max(MIN_STAGE_MINUTES);
    let new_cook = max_total.saturating_sub(new_prep).max(MIN_STAGE_MINUTES);

    (new_prep, new_cook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Ingredient};
    use pretty_assertions::assert_eq;

    fn pasta() -> RecipeTemplate {
        RecipeTemplate {
            id: "creamy_mushroom_pasta".to_string(),
            title: "Creamy Mushroom Garlic Pasta".to_string(),
            description: "Rich and creamy".to_string(),
            ingredients: vec![
                Ingredient::new("Pasta", "12", "oz"),
                Ingredient::new("Salt and pepper", "to", "taste"),
            ],
            instructions: vec!["Boil.".to_string(), "Toss.".to_string()],
            prep_time_minutes: 10,
            cook_time_minutes: 20,
            narrative_note: "Earthy and rich.".to_string(),
            keywords: vec!["pasta".to_string()],
        }
    }

    #[test]
    fn test_defaults_applied() {
        let recipe = customize(&pasta(), &GenerationRequest::new("a creamy pasta"));
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.cuisine_type, None);
        assert!(recipe.dietary_restrictions.is_empty());
        assert_eq!(recipe.narrative_note, "Earthy and rich.");
        assert_eq!((recipe.prep_time_minutes, recipe.cook_time_minutes), (10, 20));
    }

    #[test]
    fn test_request_values_copied() {
        let request = GenerationRequest {
            prompt_text: "a creamy pasta".to_string(),
            cuisine: Some("Italian".to_string()),
            difficulty: Some(Difficulty::Hard),
            servings: Some(6),
            dietary_tags: vec!["Vegetarian".to_string()],
            max_total_minutes: None,
        };
        let recipe = customize(&pasta(), &request);
        assert_eq!(recipe.template_id, "creamy_mushroom_pasta");
        assert_eq!(recipe.servings, 6);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.cuisine_type.as_deref(), Some("Italian"));
        assert_eq!(recipe.dietary_restrictions, vec!["Vegetarian".to_string()]);
    }

    #[test]
    fn test_dietary_tags_appended_to_note() {
        let mut request = GenerationRequest::new("a creamy pasta");
        request.dietary_tags = vec!["Vegan".to_string(), "Gluten-Free".to_string()];
        let recipe = customize(&pasta(), &request);
        assert_eq!(
            recipe.narrative_note,
            "Earthy and rich. This recipe has been customized for Vegan, Gluten-Free dietary preferences."
        );
        // Label only: ingredients untouched
        assert_eq!(recipe.ingredients, pasta().ingredients);
    }

    #[test]
    fn test_budget_at_or_above_natural_total_keeps_times() {
        let mut request = GenerationRequest::new("a creamy pasta");
        request.max_total_minutes = Some(30);
        let recipe = customize(&pasta(), &request);
        assert_eq!((recipe.prep_time_minutes, recipe.cook_time_minutes), (10, 20));
    }

    #[test]
    fn test_rescale_keeps_ratio() {
        // 10/20 into 15 minutes: prep 5, cook 10
        assert_eq!(rescale_times(10, 20, 15), (5, 10));
        // 15/30 into 30 minutes: prep 10, cook 20
        assert_eq!(rescale_times(15, 30, 30), (10, 20));
    }

    #[test]
    fn test_rescale_rounds_half_up() {
        // 10/10 into 25: prep 12.5 rounds to 13
        assert_eq!(rescale_times(10, 10, 25), (13, 12));
    }

    #[test]
    fn test_rescale_floors_at_five() {
        assert_eq!(rescale_times(10, 50, 12), (5, 7));
        // Below ten minutes both floors apply and the total overshoots
        assert_eq!(rescale_times(10, 20, 6), (5, 5));
    }

    #[test]
    fn test_rescale_with_no_cook_time() {
        // A salad: all prep. Cook still floors at five.
        assert_eq!(rescale_times(15, 0, 10), (10, 5));
    }

    #[test]
    fn test_rescale_invariant_over_range() {
        for (prep, cook) in [(10, 20), (15, 0), (20, 35), (15, 11), (10, 50), (15, 60)] {
            for max_total in 10..(prep + cook) {
                let (new_prep, new_cook) = rescale_times(prep, cook, max_total);
                assert!(new_prep >= MIN_STAGE_MINUTES);
                assert!(new_cook >= MIN_STAGE_MINUTES);
                assert!(new_prep + new_cook <= max_total + MIN_STAGE_MINUTES);
            }
        }
    }

    #[test]
    fn test_customize_twice_is_structurally_equal() {
        let template = pasta();
        let mut request = GenerationRequest::new("a creamy pasta");
        request.dietary_tags = vec!["Keto".to_string()];
        let first = customize(&template, &request);
        let second = customize(&template, &request);
        assert_eq!(first, second);
        assert_eq!(template, pasta());
    }
}
