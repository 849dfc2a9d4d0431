use crate::model::{GeneratedRecipe, Ingredient};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// One ingredient line on the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    /// `{recipe_id}-{ingredient index}`
    pub id: String,
    pub recipe_title: String,
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub checked: bool,
}

/// Ingredients of several recipes, flattened and individually checkable.
/// Amounts are kept as written; nothing is summed across recipes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    recipe_titles: Vec<String>,
}

impl ShoppingList {
    /// Build from `(recipe id, recipe)` pairs. Item ids are
    /// `{recipe_id}-{ingredient index}`; a recipe id that was already used
    /// gets a `.{n}` suffix (`r1`, `r1.2`, `r1.3`) so every item id stays
    /// unique.
    pub fn from_recipes<'a, I>(recipes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a GeneratedRecipe)>,
    {
        let mut list = Self::default();
        let mut used_ids = HashSet::new();

        for (recipe_id, recipe) in recipes {
            let mut unique_id = recipe_id.to_string();
            let mut n = 1;
            while !used_ids.insert(unique_id.clone()) {
                n += 1;
                unique_id = format!("{}.{}", recipe_id, n);
            }
            if unique_id != recipe_id {
                debug!("Recipe id '{}' already used, listing as '{}'", recipe_id, unique_id);
            }

            // Recipes sharing a title share a group
            if !list.recipe_titles.contains(&recipe.title) {
                list.recipe_titles.push(recipe.title.clone());
            }
            for (index, ingredient) in recipe.ingredients.iter().enumerate() {
                list.items.push(ShoppingItem {
                    id: format!("{}-{}", unique_id, index),
                    recipe_title: recipe.title.clone(),
                    ingredient: ingredient.clone(),
                    checked: false,
                });
            }
        }
        list
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Flip the checked state. Returns false when no item has this id.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Returns false when no item has this id
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear_checked(&mut self) {
        self.items.retain(|item| !item.checked);
    }

    /// Percentage of items checked off; 0 for an empty list
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.checked_count() as f64 / self.items.len() as f64 * 100.0
    }

    /// Items grouped under their recipe title, in the order titles first
    /// appeared. Each item is in exactly one group. Recipes whose items
    /// were all removed keep an empty group.
    pub fn grouped_by_recipe(&self) -> Vec<(&str, Vec<&ShoppingItem>)> {
        self.recipe_titles
            .iter()
            .map(|title| {
                let items = self
                    .items
                    .iter()
                    .filter(|item| &item.recipe_title == title)
                    .collect();
                (title.as_str(), items)
            })
            .collect()
    }

    /// Unchecked items, one per line
    pub fn to_text(&self) -> String {
        self.items
            .iter()
            .filter(|item| !item.checked)
            .map(|item| {
                format!(
                    "{} {} {} ({})",
                    item.ingredient.amount, item.ingredient.unit, item.ingredient.name, item.recipe_title
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
