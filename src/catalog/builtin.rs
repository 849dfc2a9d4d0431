use super::CategoryRule;
use crate::model::{Ingredient, RecipeTemplate};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    title: &str,
    description: &str,
    ingredients: &[(&str, &str, &str)],
    instructions: &[&str],
    prep_time_minutes: u32,
    cook_time_minutes: u32,
    narrative_note: &str,
    keywords: &[&str],
) -> RecipeTemplate {
    RecipeTemplate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        ingredients: ingredients
            .iter()
            .map(|(name, amount, unit)| Ingredient::new(*name, *amount, *unit))
            .collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        prep_time_minutes,
        cook_time_minutes,
        narrative_note: narrative_note.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn templates() -> Vec<RecipeTemplate> {
    vec![
        // Italian
        template(
            "creamy_mushroom_pasta",
            "Creamy Mushroom Garlic Pasta",
            "A rich and creamy pasta dish featuring sautéed mushrooms, garlic, and fresh herbs. Perfect comfort food that comes together in just 30 minutes.",
            &[
                ("Pasta (penne or fettuccine)", "12", "oz"),
                ("Mixed mushrooms, sliced", "1", "lb"),
                ("Garlic cloves, minced", "4", "cloves"),
                ("Heavy cream", "1", "cup"),
                ("Parmesan cheese, grated", "1/2", "cup"),
                ("Fresh thyme", "2", "tbsp"),
                ("Olive oil", "3", "tbsp"),
                ("Salt and pepper", "to", "taste"),
            ],
            &[
                "Cook pasta according to package directions until al dente. Reserve 1 cup pasta water before draining.",
                "Heat olive oil in a large skillet over medium-high heat. Add mushrooms and cook until golden brown, about 5-7 minutes.",
                "Add minced garlic and cook for another minute until fragrant.",
                "Pour in heavy cream and bring to a gentle simmer. Add fresh thyme and season with salt and pepper.",
                "Add the cooked pasta to the skillet and toss to combine. Add pasta water as needed to achieve desired consistency.",
                "Remove from heat and stir in Parmesan cheese. Serve immediately with additional cheese if desired.",
            ],
            10,
            20,
            "Earthy mixed mushrooms give this pasta its depth while garlic and thyme keep it aromatic. It tastes like a restaurant plate and still fits a weeknight.",
            &["creamy", "mushroom", "pasta", "alfredo", "cream", "garlic", "italian"],
        ),
        template(
            "spicy_arrabbiata",
            "Spicy Arrabbiata Pasta",
            "A fiery Italian pasta dish with tomatoes, garlic, and red chili peppers. This classic Roman recipe brings heat and flavor to your dinner table.",
            &[
                ("Penne pasta", "1", "lb"),
                ("Crushed tomatoes", "28", "oz can"),
                ("Garlic cloves, minced", "6", "cloves"),
                ("Red chili flakes", "2", "tsp"),
                ("Olive oil", "1/4", "cup"),
                ("Fresh basil leaves", "1/4", "cup"),
                ("Parmesan cheese", "1/2", "cup"),
                ("Salt and pepper", "to", "taste"),
            ],
            &[
                "Cook pasta according to package directions until al dente. Reserve 1 cup pasta water.",
                "Heat olive oil in a large skillet over medium heat. Add garlic and chili flakes, cook for 1 minute.",
                "Add crushed tomatoes and simmer for 15-20 minutes until sauce thickens.",
                "Season with salt and pepper. Add cooked pasta and toss with sauce.",
                "Add pasta water as needed for consistency. Remove from heat.",
                "Garnish with fresh basil and Parmesan cheese. Serve immediately.",
            ],
            10,
            25,
            "Arrabbiata means angry, and the chili earns the name. Garlic and tomato keep the sauce simple so the heat comes through clean.",
            &["spicy", "pasta", "arrabbiata", "hot", "chili", "tomato", "red sauce", "italian"],
        ),
        template(
            "carbonara_pasta",
            "Classic Spaghetti Carbonara",
            "An authentic Roman pasta dish with eggs, cheese, pancetta, and black pepper. Simple ingredients create an incredibly rich and satisfying meal.",
            &[
                ("Spaghetti", "1", "lb"),
                ("Pancetta, diced", "6", "oz"),
                ("Large eggs", "4", "eggs"),
                ("Pecorino Romano, grated", "1", "cup"),
                ("Black pepper, freshly ground", "2", "tsp"),
                ("Salt", "to", "taste"),
            ],
            &[
                "Cook spaghetti in salted boiling water until al dente. Reserve 1 cup pasta water.",
                "Cook pancetta in a large skillet until crispy, about 5-7 minutes.",
                "In a bowl, whisk together eggs, cheese, and black pepper.",
                "Add hot pasta to the skillet with pancetta and remove from heat.",
                "Quickly stir in egg mixture, adding pasta water as needed to create a creamy sauce.",
                "Serve immediately with extra cheese and black pepper.",
            ],
            10,
            15,
            "Roman carbonara has no cream. Eggs, cheese and the heat of the pasta make the sauce, so work fast and keep the pan off the flame.",
            &["carbonara", "pasta", "egg", "pancetta", "bacon", "cheese", "italian", "roman"],
        ),
        // Salads
        template(
            "quinoa_salad",
            "Rainbow Quinoa Power Bowl",
            "A vibrant, nutrient-packed salad featuring fluffy quinoa, roasted vegetables, and a zesty tahini dressing. This colorful bowl is both satisfying and energizing.",
            &[
                ("Quinoa, rinsed", "1", "cup"),
                ("Sweet potato, cubed", "1", "large"),
                ("Bell peppers, sliced", "2", "peppers"),
                ("Red onion, sliced", "1/2", "onion"),
                ("Chickpeas, drained", "1", "can"),
                ("Baby spinach", "4", "cups"),
                ("Tahini", "3", "tbsp"),
                ("Lemon juice", "2", "tbsp"),
                ("Olive oil", "2", "tbsp"),
                ("Maple syrup", "1", "tbsp"),
            ],
            &[
                "Preheat oven to 425°F. Cook quinoa according to package directions and let cool.",
                "Toss sweet potato, bell peppers, and red onion with olive oil, salt, and pepper. Roast for 25-30 minutes until tender.",
                "In a small bowl, whisk together tahini, lemon juice, maple syrup, and 2-3 tbsp water until smooth.",
                "In a large bowl, combine cooked quinoa, roasted vegetables, chickpeas, and spinach.",
                "Drizzle with tahini dressing and toss gently to combine.",
                "Serve immediately or chill for up to 2 hours before serving.",
            ],
            15,
            30,
            "Every color in this bowl pulls its weight. The tahini dressing ties the roasted vegetables and quinoa together into a full meal.",
            &["quinoa", "salad", "healthy", "bowl", "power bowl", "grain", "vegetables", "tahini"],
        ),
        template(
            "greek_salad",
            "Traditional Greek Village Salad",
            "A fresh and authentic Greek salad with ripe tomatoes, crisp cucumbers, red onions, olives, and creamy feta cheese, dressed with olive oil and herbs.",
            &[
                ("Large tomatoes, cut in wedges", "4", "tomatoes"),
                ("Cucumber, sliced thick", "1", "large"),
                ("Red onion, sliced thin", "1", "medium"),
                ("Kalamata olives", "1", "cup"),
                ("Feta cheese, cubed", "8", "oz"),
                ("Extra virgin olive oil", "1/3", "cup"),
                ("Red wine vinegar", "2", "tbsp"),
                ("Dried oregano", "1", "tsp"),
                ("Salt and pepper", "to", "taste"),
            ],
            &[
                "Cut tomatoes into wedges and place in a large bowl.",
                "Add thick cucumber slices and thin red onion slices.",
                "Add Kalamata olives and cubed feta cheese.",
                "In a small bowl, whisk together olive oil, vinegar, and oregano.",
                "Pour dressing over salad and toss gently.",
                "Season with salt and pepper. Let sit for 10 minutes before serving.",
            ],
            15,
            0,
            "Ripe tomatoes, good olive oil and real feta are the whole recipe. Nothing is cooked, so buy the best you can find.",
            &["greek", "salad", "feta", "olive", "tomato", "cucumber", "mediterranean"],
        ),
        template(
            "caesar_salad",
            "Classic Caesar Salad",
            "Crisp romaine lettuce with homemade Caesar dressing, parmesan cheese, and crunchy croutons. A timeless favorite that never goes out of style.",
            &[
                ("Romaine lettuce, chopped", "2", "heads"),
                ("Parmesan cheese, grated", "1/2", "cup"),
                ("Croutons", "1", "cup"),
                ("Mayonnaise", "1/2", "cup"),
                ("Lemon juice", "2", "tbsp"),
                ("Worcestershire sauce", "1", "tsp"),
                ("Garlic cloves, minced", "2", "cloves"),
                ("Anchovy paste", "1", "tsp"),
            ],
            &[
                "Wash and chop romaine lettuce, then chill in refrigerator.",
                "In a bowl, whisk together mayonnaise, lemon juice, Worcestershire, garlic, and anchovy paste.",
                "Place chilled lettuce in a large serving bowl.",
                "Drizzle with Caesar dressing and toss to coat evenly.",
                "Top with grated Parmesan cheese and croutons.",
                "Serve immediately while lettuce is crisp.",
            ],
            15,
            0,
            "A good Caesar lives in its dressing: creamy, tangy and full of umami. Keep the lettuce cold until the last second.",
            &["caesar", "salad", "romaine", "parmesan", "croutons", "anchovy"],
        ),
        // Chicken
        template(
            "herb_chicken",
            "Mediterranean Herb-Crusted Chicken",
            "Juicy baked chicken breasts with a flavorful herb crust, served with roasted vegetables. A healthy and delicious dinner that's ready in under an hour.",
            &[
                ("Chicken breasts, boneless", "4", "pieces"),
                ("Olive oil", "3", "tbsp"),
                ("Fresh oregano, chopped", "2", "tbsp"),
                ("Fresh basil, chopped", "2", "tbsp"),
                ("Garlic cloves, minced", "3", "cloves"),
                ("Lemon zest", "1", "lemon"),
                ("Panko breadcrumbs", "1/2", "cup"),
                ("Cherry tomatoes", "2", "cups"),
                ("Zucchini, sliced", "2", "medium"),
            ],
            &[
                "Preheat oven to 400°F. Line a baking sheet with parchment paper.",
                "In a bowl, mix olive oil, oregano, basil, garlic, and lemon zest.",
                "Season chicken breasts with salt and pepper, then brush with herb mixture.",
                "Press panko breadcrumbs onto the chicken to create a crust.",
                "Arrange chicken on baking sheet with cherry tomatoes and zucchini.",
                "Bake for 25-30 minutes until chicken reaches 165°F internal temperature.",
                "Let rest for 5 minutes before serving with the roasted vegetables.",
            ],
            15,
            30,
            "The herb crust keeps the chicken moist and adds crunch. Roasting the vegetables on the same sheet turns it into a one-pan dinner.",
            &["herb", "chicken", "mediterranean", "baked", "roasted", "herbs"],
        ),
        template(
            "honey_chicken",
            "Honey Garlic Glazed Chicken Thighs",
            "Succulent chicken thighs with a sweet and savory honey garlic glaze. This one-pan dinner is packed with flavor and incredibly easy to make.",
            &[
                ("Chicken thighs, bone-in", "8", "pieces"),
                ("Honey", "1/3", "cup"),
                ("Soy sauce", "1/4", "cup"),
                ("Garlic cloves, minced", "6", "cloves"),
                ("Fresh ginger, grated", "1", "tbsp"),
                ("Rice vinegar", "2", "tbsp"),
                ("Sesame oil", "1", "tbsp"),
                ("Green onions, chopped", "3", "stalks"),
                ("Sesame seeds", "1", "tbsp"),
            ],
            &[
                "Preheat oven to 425°F. Season chicken thighs with salt and pepper.",
                "In a bowl, whisk together honey, soy sauce, garlic, ginger, and rice vinegar.",
                "Heat sesame oil in an oven-safe skillet over medium-high heat.",
                "Sear chicken thighs skin-side down for 5 minutes until golden.",
                "Flip chicken and brush with honey glaze. Transfer to oven.",
                "Bake for 25-30 minutes, basting with glaze every 10 minutes.",
                "Garnish with green onions and sesame seeds before serving.",
            ],
            15,
            35,
            "The glaze caramelizes in the oven into a sticky coating. Baste often and the thighs come out lacquered.",
            &["honey", "chicken", "sweet", "glaze", "asian", "soy", "garlic"],
        ),
        template(
            "buffalo_chicken",
            "Crispy Buffalo Chicken Wings",
            "Perfectly crispy chicken wings tossed in tangy buffalo sauce. These crowd-pleasing wings are perfect for game day or any gathering.",
            &[
                ("Chicken wings, split", "2", "lbs"),
                ("Hot sauce", "1/2", "cup"),
                ("Butter", "1/4", "cup"),
                ("White vinegar", "1", "tbsp"),
                ("Garlic powder", "1", "tsp"),
                ("Celery sticks", "6", "stalks"),
                ("Blue cheese dressing", "1/2", "cup"),
            ],
            &[
                "Preheat oven to 425°F. Pat wings dry and season with salt and pepper.",
                "Arrange wings on a baking sheet lined with parchment paper.",
                "Bake for 45-50 minutes until crispy and golden brown.",
                "Meanwhile, melt butter and mix with hot sauce, vinegar, and garlic powder.",
                "Toss hot wings in buffalo sauce until well coated.",
                "Serve immediately with celery sticks and blue cheese dressing.",
            ],
            10,
            50,
            "Crisp the wings in the oven first and sauce them last. Hot sauce and butter give the classic tangy, rich finish.",
            &["buffalo", "chicken", "wings", "spicy", "hot sauce", "crispy"],
        ),
        // Soups
        template(
            "tomato_soup",
            "Roasted Tomato Basil Soup",
            "A velvety smooth soup made from roasted tomatoes and fresh basil. This comforting classic is perfect for any season and pairs beautifully with grilled cheese.",
            &[
                ("Roma tomatoes, halved", "3", "lbs"),
                ("Yellow onion, quartered", "1", "large"),
                ("Garlic cloves", "6", "cloves"),
                ("Olive oil", "1/4", "cup"),
                ("Vegetable broth", "2", "cups"),
                ("Heavy cream", "1/2", "cup"),
                ("Fresh basil leaves", "1/4", "cup"),
                ("Salt and pepper", "to", "taste"),
            ],
            &[
                "Preheat oven to 400°F. Toss tomatoes, onion, and garlic with olive oil.",
                "Roast vegetables for 45 minutes until caramelized and tender.",
                "Transfer roasted vegetables to a large pot with vegetable broth.",
                "Simmer for 15 minutes, then blend until smooth using an immersion blender.",
                "Stir in heavy cream and fresh basil. Season with salt and pepper.",
                "Simmer for 5 more minutes and serve hot with crusty bread.",
            ],
            15,
            60,
            "Roasting concentrates the tomatoes and brings out their sweetness. Fresh basil at the end keeps it bright.",
            &["tomato", "soup", "basil", "roasted", "comfort"],
        ),
        template(
            "chicken_noodle_soup",
            "Homemade Chicken Noodle Soup",
            "The ultimate comfort food with tender chicken, vegetables, and egg noodles in a rich, flavorful broth. Perfect for cold days or when you need some comfort.",
            &[
                ("Chicken breast, diced", "1", "lb"),
                ("Egg noodles", "8", "oz"),
                ("Carrots, sliced", "3", "large"),
                ("Celery stalks, chopped", "3", "stalks"),
                ("Yellow onion, diced", "1", "medium"),
                ("Chicken broth", "8", "cups"),
                ("Fresh thyme", "1", "tsp"),
                ("Bay leaves", "2", "leaves"),
            ],
            &[
                "In a large pot, sauté onion, carrots, and celery until softened, about 5 minutes.",
                "Add chicken broth, thyme, and bay leaves. Bring to a boil.",
                "Add diced chicken and simmer for 15 minutes until cooked through.",
                "Add egg noodles and cook according to package directions.",
                "Season with salt and pepper to taste.",
                "Remove bay leaves and serve hot with crackers or bread.",
            ],
            15,
            30,
            "Layer the aromatics before the broth goes in and the soup tastes like it simmered all day.",
            &["chicken", "noodle", "soup", "comfort", "broth", "vegetables"],
        ),
        // Desserts
        template(
            "chocolate_cake",
            "Decadent Double Chocolate Cake",
            "A rich, moist chocolate cake with layers of chocolate ganache. This indulgent dessert is perfect for special occasions or when you need a chocolate fix.",
            &[
                ("All-purpose flour", "2", "cups"),
                ("Cocoa powder", "3/4", "cup"),
                ("Sugar", "2", "cups"),
                ("Eggs", "2", "large"),
                ("Buttermilk", "1", "cup"),
                ("Vegetable oil", "1/2", "cup"),
                ("Hot coffee", "1", "cup"),
                ("Dark chocolate, chopped", "8", "oz"),
                ("Heavy cream", "1", "cup"),
            ],
            &[
                "Preheat oven to 350°F. Grease and flour two 9-inch cake pans.",
                "Mix flour, cocoa, sugar, baking soda, and salt in a large bowl.",
                "In another bowl, whisk eggs, buttermilk, and oil. Add to dry ingredients.",
                "Gradually stir in hot coffee until smooth. Divide between prepared pans.",
                "Bake for 30-35 minutes until a toothpick comes out clean.",
                "For ganache, heat cream and pour over chopped chocolate. Stir until smooth.",
                "Cool cakes completely, then layer with ganache between and on top.",
            ],
            20,
            35,
            "Hot coffee deepens the chocolate without tasting of coffee. The crumb stays moist for days.",
            &["chocolate", "cake", "dessert", "sweet", "decadent", "rich"],
        ),
        template(
            "chocolate_chip_cookies",
            "Perfect Chocolate Chip Cookies",
            "Soft, chewy chocolate chip cookies with crispy edges and gooey centers. These classic cookies are loaded with chocolate chips and pure vanilla flavor.",
            &[
                ("All-purpose flour", "2 1/4", "cups"),
                ("Butter, softened", "1", "cup"),
                ("Brown sugar", "3/4", "cup"),
                ("White sugar", "3/4", "cup"),
                ("Large eggs", "2", "eggs"),
                ("Vanilla extract", "2", "tsp"),
                ("Baking soda", "1", "tsp"),
                ("Salt", "1", "tsp"),
                ("Chocolate chips", "2", "cups"),
            ],
            &[
                "Preheat oven to 375°F. Line baking sheets with parchment paper.",
                "Cream together butter and both sugars until light and fluffy.",
                "Beat in eggs one at a time, then add vanilla extract.",
                "In a separate bowl, whisk together flour, baking soda, and salt.",
                "Gradually mix dry ingredients into wet ingredients until just combined.",
                "Fold in chocolate chips, then drop rounded tablespoons onto baking sheets.",
                "Bake for 9-11 minutes until edges are golden brown. Cool on baking sheet for 5 minutes.",
            ],
            15,
            11,
            "Brown and white sugar together give crisp edges and a chewy middle. Be generous with the vanilla.",
            &["cookie", "chocolate chip", "sweet", "dessert", "baked", "chewy"],
        ),
        // Asian
        template(
            "fried_rice",
            "Classic Vegetable Fried Rice",
            "A quick and flavorful fried rice with mixed vegetables, eggs, and soy sauce. This versatile dish is perfect for using up leftover rice and vegetables.",
            &[
                ("Cooked rice, day-old", "4", "cups"),
                ("Eggs, beaten", "3", "eggs"),
                ("Mixed vegetables, frozen", "1", "cup"),
                ("Green onions, chopped", "4", "stalks"),
                ("Garlic cloves, minced", "3", "cloves"),
                ("Soy sauce", "3", "tbsp"),
                ("Sesame oil", "1", "tbsp"),
                ("Vegetable oil", "2", "tbsp"),
            ],
            &[
                "Heat vegetable oil in a large wok or skillet over high heat.",
                "Add beaten eggs and scramble until just set. Remove and set aside.",
                "Add more oil if needed, then add garlic and cook for 30 seconds.",
                "Add cold rice, breaking up any clumps with a spatula.",
                "Stir-fry rice for 3-4 minutes until heated through and slightly crispy.",
                "Add mixed vegetables and cook for 2 minutes until heated.",
                "Return eggs to pan, add soy sauce and sesame oil, and toss to combine.",
                "Garnish with green onions and serve immediately.",
            ],
            10,
            10,
            "Day-old refrigerated rice fries up without going mushy. Keep the heat high and the pan moving.",
            &["fried rice", "rice", "asian", "chinese", "vegetables", "egg"],
        ),
        // Mexican
        template(
            "chicken_tacos",
            "Authentic Chicken Tacos",
            "Tender, seasoned chicken served in warm tortillas with fresh toppings. These authentic-style tacos are bursting with flavor and perfect for any meal.",
            &[
                ("Chicken thighs, boneless", "2", "lbs"),
                ("Corn tortillas", "12", "tortillas"),
                ("White onion, diced", "1", "medium"),
                ("Cilantro, chopped", "1/2", "cup"),
                ("Lime wedges", "2", "limes"),
                ("Chili powder", "2", "tsp"),
                ("Cumin", "1", "tsp"),
                ("Garlic powder", "1", "tsp"),
                ("Salt and pepper", "to", "taste"),
            ],
            &[
                "Season chicken thighs with chili powder, cumin, garlic powder, salt, and pepper.",
                "Heat a skillet over medium-high heat and cook chicken for 6-7 minutes per side.",
                "Let chicken rest for 5 minutes, then dice into small pieces.",
                "Warm tortillas in a dry skillet or over an open flame until slightly charred.",
                "Fill each tortilla with chicken, diced onion, and cilantro.",
                "Serve with lime wedges and your favorite hot sauce.",
            ],
            15,
            20,
            "Well seasoned meat, warm tortillas and fresh toppings. Keep it simple and let each flavor stand out.",
            &["taco", "chicken", "mexican", "tortilla", "cilantro", "lime"],
        ),
        // Indian
        template(
            "butter_chicken",
            "Creamy Butter Chicken",
            "Rich and creamy Indian curry with tender chicken in a tomato-based sauce with aromatic spices. Served with basmati rice or naan bread.",
            &[
                ("Chicken breast, cubed", "2", "lbs"),
                ("Crushed tomatoes", "28", "oz can"),
                ("Heavy cream", "1", "cup"),
                ("Butter", "4", "tbsp"),
                ("Onion, diced", "1", "large"),
                ("Garlic cloves, minced", "4", "cloves"),
                ("Fresh ginger, grated", "1", "tbsp"),
                ("Garam masala", "2", "tsp"),
                ("Paprika", "1", "tsp"),
            ],
            &[
                "Season chicken with salt, pepper, and half the garam masala.",
                "Heat butter in a large skillet and cook chicken until golden. Remove and set aside.",
                "In the same pan, sauté onion until softened, about 5 minutes.",
                "Add garlic, ginger, and remaining spices. Cook for 1 minute until fragrant.",
                "Add crushed tomatoes and simmer for 10 minutes until thickened.",
                "Stir in cream and return chicken to the pan.",
                "Simmer for 10 more minutes until chicken is cooked through.",
                "Serve over basmati rice with fresh cilantro.",
            ],
            15,
            30,
            "The tomato base cuts through the cream and butter while garam masala carries the aroma.",
            &["butter chicken", "indian", "curry", "creamy", "spicy", "tomato"],
        ),
    ]
}

pub(super) fn affinity() -> HashMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        (
            "italian",
            &["creamy_mushroom_pasta", "spicy_arrabbiata", "carbonara_pasta"],
        ),
        ("mexican", &["chicken_tacos"]),
        ("indian", &["butter_chicken"]),
        ("chinese", &["fried_rice"]),
        ("mediterranean", &["greek_salad", "herb_chicken"]),
    ];

    table
        .iter()
        .map(|(cuisine, ids)| {
            (
                cuisine.to_string(),
                ids.iter().map(|id| id.to_string()).collect(),
            )
        })
        .collect()
}

/// Checked in order; the first rule cued by the prompt wins.
pub(super) fn categories() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "pasta",
            &["pasta", "italian"],
            &["creamy_mushroom_pasta", "spicy_arrabbiata", "carbonara_pasta"],
        ),
        CategoryRule::new(
            "salad",
            &["salad", "healthy"],
            &["quinoa_salad", "greek_salad", "caesar_salad"],
        ),
        CategoryRule::new(
            "chicken",
            &["chicken"],
            &[
                "herb_chicken",
                "honey_chicken",
                "buffalo_chicken",
                "butter_chicken",
                "chicken_tacos",
                "chicken_noodle_soup",
            ],
        ),
        CategoryRule::new("soup", &["soup"], &["tomato_soup", "chicken_noodle_soup"]),
        CategoryRule::new(
            "dessert",
            &["dessert", "sweet", "chocolate", "cake", "cookie"],
            &["chocolate_cake", "chocolate_chip_cookies"],
        ),
        CategoryRule::new("mexican", &["mexican", "taco"], &["chicken_tacos"]),
        CategoryRule::new("indian", &["indian", "curry"], &["butter_chicken"]),
        CategoryRule::new("asian", &["asian", "chinese", "rice"], &["fried_rice"]),
    ]
}
