use recipe_forge::card::{render_html, render_text};
use recipe_forge::{
    enhance, generate_from_prompt, Catalog, CollectionStats, Difficulty, Enhancement,
    GenerationRequest, GeneratorConfig, GeneratorError, RecipeFilter, RecipeGenerator,
    SeededRandom, ShoppingList,
};
use std::sync::Arc;

/// Prompt → recipe with every option set
#[test]
fn test_builder_full_request() {
    let recipe = RecipeGenerator::builder()
        .prompt("a creamy pasta with mushrooms")
        .cuisine("Italian")
        .difficulty(Difficulty::Easy)
        .servings(2)
        .dietary("Vegetarian")
        .max_total_minutes(15)
        .build()
        .unwrap();

    assert_eq!(recipe.template_id, "creamy_mushroom_pasta");
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.difficulty, Difficulty::Easy);
    assert_eq!(recipe.cuisine_type.as_deref(), Some("Italian"));
    assert_eq!(recipe.dietary_restrictions, vec!["Vegetarian".to_string()]);
    // 10/20 squeezed into 15 minutes
    assert_eq!(recipe.prep_time_minutes, 5);
    assert_eq!(recipe.cook_time_minutes, 10);
    assert!(recipe
        .narrative_note
        .ends_with("This recipe has been customized for Vegetarian dietary preferences."));
}

/// Same seed, same fallback pick
#[test]
fn test_builder_seed_is_reproducible() {
    let picks: Vec<String> = (0..5)
        .map(|_| {
            RecipeGenerator::builder()
                .prompt("surprise me with anything")
                .seed(2024)
                .build()
                .unwrap()
                .template_id
        })
        .collect();

    assert!(picks.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_builder_rejects_short_prompt() {
    let result = RecipeGenerator::builder().prompt("pasta").build();
    match result {
        Err(GeneratorError::InvalidRequest(msg)) => assert!(msg.contains("at least 10")),
        other => panic!("expected invalid request, got {:?}", other),
    }
}

#[test]
fn test_builder_rejects_too_many_servings() {
    let result = RecipeGenerator::builder()
        .prompt("a creamy pasta with mushrooms")
        .servings(50)
        .build();
    assert!(matches!(result, Err(GeneratorError::InvalidRequest(_))));
}

#[test]
fn test_builder_with_custom_catalog() {
    let toml = r#"
        [[templates]]
        id = "pancakes"
        title = "Fluffy Pancakes"
        description = "Weekend breakfast"
        instructions = ["Whisk.", "Fry."]
        prep_time_minutes = 10
        cook_time_minutes = 15
        narrative_note = "Rest the batter."
        keywords = ["pancake", "breakfast"]

        [[templates.ingredients]]
        name = "Flour"
        amount = "1 1/2"
        unit = "cups"
    "#;
    let catalog = Arc::new(Catalog::from_toml_str(toml).unwrap());

    let recipe = RecipeGenerator::builder()
        .prompt("breakfast for the kids")
        .catalog(catalog)
        .build()
        .unwrap();
    assert_eq!(recipe.title, "Fluffy Pancakes");
    assert_eq!(recipe.ingredients[0].amount, "1 1/2");
}

#[test]
fn test_generator_shares_catalog() {
    let generator = RecipeGenerator::new(Arc::new(Catalog::builtin()));
    let clone = generator.clone();
    let request = GenerationRequest::new("fried rice please");

    let a = generator.generate(&request, &mut SeededRandom::new(1)).unwrap();
    let b = clone.generate(&request, &mut SeededRandom::new(2)).unwrap();
    assert_eq!(a, b);
    assert_eq!(generator.catalog().len(), 16);
}

#[test]
fn test_generator_with_seeded_config() {
    let config = GeneratorConfig {
        seed: Some(99),
        ..Default::default()
    };
    let generator = RecipeGenerator::with_config(config).unwrap();
    let request = GenerationRequest::new("nothing in particular");

    let first = generator.generate_with_default_rng(&request).unwrap();
    let second = generator.generate_with_default_rng(&request).unwrap();
    assert_eq!(first.template_id, second.template_id);
}

#[test]
fn test_convenience_generate_from_prompt() {
    let recipe = generate_from_prompt("bacon and egg dish").unwrap();
    assert_eq!(recipe.template_id, "carbonara_pasta");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.difficulty, Difficulty::Medium);
}

/// Generated recipes flow into the card, shopping list, filter and stats
#[test]
fn test_downstream_consumers() {
    let recipes: Vec<_> = [
        ("fried rice please", Some("Chinese")),
        ("butter chicken tonight", Some("Indian")),
        ("classic caesar salad", None),
    ]
    .into_iter()
    .map(|(prompt, cuisine)| {
        let mut builder = RecipeGenerator::builder().prompt(prompt);
        if let Some(cuisine) = cuisine {
            builder = builder.cuisine(cuisine);
        }
        builder.build().unwrap()
    })
    .collect();

    let text = render_text(&recipes[0]);
    assert!(text.starts_with("Classic Vegetable Fried Rice [Medium]"));
    let html = render_html(&recipes[1]);
    assert!(html.contains("<h1>Creamy Butter Chicken</h1>"));

    let ids = ["a", "b", "c"];
    let list = ShoppingList::from_recipes(ids.iter().copied().zip(recipes.iter()));
    let expected_items: usize = recipes.iter().map(|r| r.ingredients.len()).sum();
    assert_eq!(list.len(), expected_items);
    assert!(list.to_text().contains("(Classic Caesar Salad)"));

    let quick = RecipeFilter::new().max_total_minutes(20).apply(&recipes);
    assert_eq!(quick.len(), 2);

    let stats = CollectionStats::from_recipes(&recipes);
    assert_eq!(stats.total_recipes, 3);
    assert_eq!(stats.top_cuisines.len(), 2);
}

#[test]
fn test_enhancements_chain_on_generated_recipe() {
    let recipe = RecipeGenerator::builder()
        .prompt("a decadent chocolate cake")
        .build()
        .unwrap();
    assert_eq!(recipe.template_id, "chocolate_cake");

    let lighter = Enhancement::ALL
        .into_iter()
        .fold(recipe.clone(), |current, e| enhance(&current, e));

    let sugar = lighter.ingredients.iter().find(|i| i.name == "Sugar").unwrap();
    assert_eq!(sugar.amount, "1.5");
    assert!(lighter.ingredients.iter().any(|i| i.name == "Buttermilk"));
    assert_eq!(lighter.dietary_restrictions, vec!["Vegan".to_string()]);
    assert_eq!(lighter.instructions.len(), recipe.instructions.len() + 2);
    assert_ne!(lighter.narrative_note, recipe.narrative_note);
}
