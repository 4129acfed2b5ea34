use crate::domain::recipe::entities::RecipeQuery;

pub const RECIPE_COUNT: usize = 3;

const RESPONSE_EXAMPLE: &str = r#"[
  {
    "name": "Recipe Name",
    "difficulty": "Easy",
    "prepTime": 10,
    "cookTime": 20,
    "cuisine": "Italian",
    "ingredients": ["1 cup rice", "2 chicken breasts"],
    "instructions": ["Step 1", "Step 2", "Step 3"]
  }
]"#;

/// Builds the instruction sent to the model. Only sanitized fields are
/// embedded.
pub fn build_recipe_prompt(query: &RecipeQuery) -> String {
    let dietary_line = if query.dietary_tags.is_empty() {
        String::new()
    } else {
        let tags: Vec<&str> = query.dietary_tags.iter().map(|t| t.as_str()).collect();
        format!("Dietary requirements: {}.\n", tags.join(", "))
    };

    format!(
        "You are a professional chef. Generate {count} different recipe suggestions based on:

Available ingredients: {ingredients}
Max cooking time: {minutes} minutes
{dietary_line}
For each recipe provide:
1. Recipe name
2. Difficulty (Easy/Medium/Hard)
3. Prep time (minutes)
4. Cook time (minutes)
5. Cuisine type (e.g., Italian, Mexican, Asian, American, Mediterranean, etc.)
6. Ingredient list with measurements
7. Short step-by-step instructions (4-6 steps max)

Respond ONLY with a JSON array like this:
{example}",
        count = RECIPE_COUNT,
        ingredients = query.ingredients,
        minutes = query.cooking_time_minutes,
        example = RESPONSE_EXAMPLE,
    )
}
