//! Recipe card rendering.
//!
//! The HTML card is the markup an external PDF renderer consumes; nothing
//! here rasterizes it.

use crate::model::{Difficulty, GeneratedRecipe};
use html_escape::encode_text;
use std::fmt;

fn capitalized(difficulty: Difficulty) -> String {
    let label = difficulty.as_str();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text card, suitable for a terminal or a `.txt` export
pub struct TextCard<'a>(pub &'a GeneratedRecipe);

impl fmt::Display for TextCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(f, "{} [{}]", recipe.title, capitalized(recipe.difficulty))?;
        writeln!(f, "{}", recipe.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "Prep: {}m | Cook: {}m | Servings: {}",
            recipe.prep_time_minutes, recipe.cook_time_minutes, recipe.servings
        )?;
        if let Some(cuisine) = &recipe.cuisine_type {
            writeln!(f, "Cuisine: {}", cuisine)?;
        }
        if !recipe.dietary_restrictions.is_empty() {
            writeln!(f, "Dietary: {}", recipe.dietary_restrictions.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Ingredients")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }

        writeln!(f)?;
        writeln!(f, "Instructions")?;
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", step + 1, instruction)?;
        }

        if !recipe.narrative_note.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", recipe.narrative_note)?;
        }
        Ok(())
    }
}

/// HTML card. Every recipe string is escaped.
pub struct HtmlCard<'a>(pub &'a GeneratedRecipe);

impl fmt::Display for HtmlCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        f.write_str("<article class=\"recipe-card\">\n")?;
        f.write_str("  <header>\n")?;
        writeln!(
            f,
            "    <span class=\"difficulty\">{}</span>",
            capitalized(recipe.difficulty)
        )?;
        writeln!(f, "    <h1>{}</h1>", encode_text(&recipe.title))?;
        writeln!(f, "    <p>{}</p>", encode_text(&recipe.description))?;
        f.write_str("  </header>\n")?;

        f.write_str("  <dl class=\"times\">\n")?;
        writeln!(f, "    <dt>Prep</dt><dd>{}m</dd>", recipe.prep_time_minutes)?;
        writeln!(f, "    <dt>Cook</dt><dd>{}m</dd>", recipe.cook_time_minutes)?;
        writeln!(f, "    <dt>Servings</dt><dd>{}</dd>", recipe.servings)?;
        f.write_str("  </dl>\n")?;

        if recipe.cuisine_type.is_some() || !recipe.dietary_restrictions.is_empty() {
            f.write_str("  <section class=\"info\">\n")?;
            if let Some(cuisine) = &recipe.cuisine_type {
                writeln!(
                    f,
                    "    <div><strong>Cuisine:</strong> {}</div>",
                    encode_text(cuisine)
                )?;
            }
            if !recipe.dietary_restrictions.is_empty() {
                f.write_str("    <div><strong>Dietary:</strong>")?;
                for restriction in &recipe.dietary_restrictions {
                    write!(f, " <span class=\"tag\">{}</span>", encode_text(restriction))?;
                }
                f.write_str("</div>\n")?;
            }
            f.write_str("  </section>\n")?;
        }

        f.write_str("  <h2>Ingredients</h2>\n  <ul>\n")?;
        for ingredient in &recipe.ingredients {
            writeln!(
                f,
                "    <li><strong>{} {}</strong> {}</li>",
                encode_text(&ingredient.amount),
                encode_text(&ingredient.unit),
                encode_text(&ingredient.name)
            )?;
        }
        f.write_str("  </ul>\n")?;

        f.write_str("  <h2>Instructions</h2>\n  <ol>\n")?;
        for instruction in &recipe.instructions {
            writeln!(f, "    <li>{}</li>", encode_text(instruction))?;
        }
        f.write_str("  </ol>\n")?;

        if !recipe.narrative_note.is_empty() {
            writeln!(
                f,
                "  <aside class=\"note\">{}</aside>",
                encode_text(&recipe.narrative_note)
            )?;
        }

        f.write_str("</article>\n")
    }
}

pub fn render_text(recipe: &GeneratedRecipe) -> String {
    TextCard(recipe).to_string()
}

pub fn render_html(recipe: &GeneratedRecipe) -> String {
    HtmlCard(recipe).to_string()
}
