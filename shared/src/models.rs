//! Data models for the Recipe Book application

use crate::errors::ParseEnumError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

/// Rating given to a recipe when none is supplied
pub const DEFAULT_RATING: f64 = 5.0;

/// Categories seeded into a fresh database
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Appetizer",
    "Soup",
    "Salad",
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
];

/// How hard a recipe is to prepare
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseEnumError {
                kind: "difficulty",
                value: s.to_string(),
                allowed: "Easy, Medium, Hard",
            }),
        }
    }
}

/// Recipe category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub recipe_count: i64,
}

impl Category {
    /// Build the URL slug for a category name ("Gluten-Free" -> "gluten-free")
    pub fn slug_for(name: &str) -> String {
        static NON_ALNUM: OnceLock<regex_lite::Regex> = OnceLock::new();
        let re = NON_ALNUM
            .get_or_init(|| regex_lite::Regex::new(r"[^a-z0-9]+").expect("static slug pattern"));

        re.replace_all(&name.trim().to_lowercase(), "-")
            .trim_matches('-')
            .to_string()
    }
}

/// A recipe in the collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub cooking_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub rating: f64,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Ingredients, one per non-blank line
    pub fn ingredient_lines(&self) -> Vec<&str> {
        non_blank_lines(&self.ingredients)
    }

    /// Preparation steps, one per non-blank line
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .as_deref()
            .map(non_blank_lines)
            .unwrap_or_default()
    }

    /// True when the recipe has been modified since it was created
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_recipe() -> Recipe {
        let now = Utc::now();
        Recipe {
            id: Uuid::new_v4(),
            name: "Classic Pancakes".to_string(),
            ingredients: "2 cups flour\n\n  2 tbsp sugar  \n2 large eggs\n".to_string(),
            description: None,
            category: Some("Breakfast".to_string()),
            difficulty: Difficulty::Easy,
            cooking_time_minutes: Some(20),
            servings: Some(4),
            rating: 4.8,
            instructions: None,
            tips: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case("easy", Difficulty::Easy)]
    #[case("Medium", Difficulty::Medium)]
    #[case("HARD", Difficulty::Hard)]
    #[case("  hard ", Difficulty::Hard)]
    fn test_difficulty_parse(#[case] input: &str, #[case] expected: Difficulty) {
        assert_eq!(input.parse::<Difficulty>().unwrap(), expected);
    }

    #[test]
    fn test_difficulty_parse_invalid() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.kind, "difficulty");
        assert!(err.to_string().contains("Easy, Medium, Hard"));
    }

    #[test]
    fn test_difficulty_display_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[rstest]
    #[case("Breakfast", "breakfast")]
    #[case("Gluten-Free", "gluten-free")]
    #[case("  Quick & Easy  ", "quick-easy")]
    #[case("Soup!", "soup")]
    fn test_category_slug(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(Category::slug_for(name), expected);
    }

    #[test]
    fn test_default_categories_have_unique_slugs() {
        let mut slugs: Vec<String> = DEFAULT_CATEGORIES
            .iter()
            .map(|name| Category::slug_for(name))
            .collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_ingredient_lines_skip_blanks() {
        let recipe = sample_recipe();
        assert_eq!(
            recipe.ingredient_lines(),
            vec!["2 cups flour", "2 tbsp sugar", "2 large eggs"]
        );
    }

    #[test]
    fn test_instruction_steps_empty_when_missing() {
        let mut recipe = sample_recipe();
        assert!(recipe.instruction_steps().is_empty());

        recipe.instructions = Some("Whisk.\nCook.".to_string());
        assert_eq!(recipe.instruction_steps(), vec!["Whisk.", "Cook."]);
    }

    #[test]
    fn test_was_updated() {
        let mut recipe = sample_recipe();
        assert!(!recipe.was_updated());

        recipe.updated_at = recipe.created_at + chrono::Duration::seconds(5);
        assert!(recipe.was_updated());
    }
}
