use crate::domain::recipe::entities::{Difficulty, Recipe};

fn recipe(
    name: &str,
    difficulty: Difficulty,
    prep_time: u32,
    cook_time: u32,
    cuisine: &str,
    ingredients: &[&str],
    instructions: &[&str],
) -> Recipe {
    Recipe {
        name: name.to_string(),
        difficulty,
        prep_time,
        cook_time,
        cuisine: cuisine.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

/// Fixed recipes served when no model credential is available.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Garlic Herb Pasta",
            Difficulty::Easy,
            5,
            15,
            "Italian",
            &[
                "8 oz spaghetti",
                "3 tbsp olive oil",
                "4 cloves garlic, minced",
                "1 tsp dried basil",
                "1 tsp dried oregano",
                "Salt and pepper to taste",
                "Grated Parmesan (optional)",
            ],
            &[
                "Cook pasta according to package directions. Reserve ¼ cup pasta water, then drain.",
                "Heat olive oil in a large pan over medium heat. Add garlic and cook until fragrant, about 1 minute.",
                "Add basil, oregano, salt, and pepper. Stir to combine.",
                "Toss in the cooked pasta and a splash of pasta water. Mix until coated.",
                "Serve with Parmesan if desired.",
            ],
        ),
        recipe(
            "Tomato Basil Rice Bowl",
            Difficulty::Easy,
            10,
            25,
            "Mediterranean",
            &[
                "1 cup long-grain rice",
                "2 cups water or broth",
                "2 medium tomatoes, diced",
                "¼ cup fresh basil, torn",
                "2 tbsp olive oil",
                "1 small onion, diced",
                "Salt and pepper to taste",
            ],
            &[
                "Rinse rice and combine with water in a pot. Bring to a boil, then reduce heat, cover, and simmer 18–20 minutes.",
                "Meanwhile, heat olive oil in a skillet. Sauté onion until soft, about 5 minutes.",
                "Add tomatoes and cook 3–4 minutes. Season with salt and pepper.",
                "Fluff rice and fold in tomato mixture and basil. Serve warm.",
            ],
        ),
        recipe(
            "Lemon Chicken Stir-Fry",
            Difficulty::Medium,
            15,
            20,
            "Asian",
            &[
                "1 lb chicken breast, sliced",
                "2 tbsp soy sauce",
                "2 tbsp lemon juice",
                "1 tbsp honey",
                "2 cloves garlic, minced",
                "2 cups mixed vegetables (e.g. bell pepper, broccoli)",
                "2 tbsp vegetable oil",
                "Cooked rice, to serve",
            ],
            &[
                "Whisk together soy sauce, lemon juice, honey, and garlic. Toss chicken in half of the mixture; set aside.",
                "Heat 1 tbsp oil in a wok or large skillet over high heat. Stir-fry chicken until cooked through, 5–6 minutes. Remove.",
                "Add remaining oil and vegetables. Stir-fry 3–4 minutes until crisp-tender.",
                "Return chicken to pan, add remaining sauce, and toss to coat. Serve over rice.",
            ],
        ),
    ]
}
