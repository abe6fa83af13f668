//! Input validation functions
//!
//! This module provides validation utilities for recipe input.
//! Structural limits (lengths, ranges, URLs) are declared on the request
//! types with the `validator` derive; the checks here cover what the derive
//! cannot express and turn derive failures into field-labelled errors.

/// Maximum length of a recipe name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Lowest and highest accepted rating
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Validate recipe name
pub fn validate_recipe_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Recipe name must be at most {} characters",
            MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

/// Validate the ingredients text
pub fn validate_ingredients(ingredients: &str) -> Result<(), String> {
    if ingredients.trim().is_empty() {
        return Err("Ingredients cannot be empty".to_string());
    }
    Ok(())
}

/// Validate rating (0.0 - 5.0)
pub fn validate_rating(rating: f64) -> Result<(), String> {
    if rating.is_nan() || rating.is_infinite() {
        return Err("Rating must be a valid number".to_string());
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Recipe Name",
        "ingredients" => "Ingredients",
        "description" => "Description",
        "category" => "Category",
        "difficulty" => "Difficulty",
        "cooking_time_minutes" => "Cooking Time",
        "servings" => "Servings",
        "rating" => "Rating",
        "instructions" => "Instructions",
        "tips" => "Tips",
        "image_url" => "Image URL",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }

    /// Pick the first failing field (alphabetically) out of a derive result
    pub fn from_errors(errors: &validator::ValidationErrors) -> Option<Self> {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|err| (field.to_string(), describe_failure(err)))
            })
            .collect();
        fields.sort();

        fields
            .into_iter()
            .next()
            .map(|(field, message)| Self::new(&field, &message))
    }
}

fn describe_failure(err: &validator::ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let param = |name: &str| err.params.get(name).map(|v| v.to_string());
    match &*err.code {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {} and {}", min, max),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            _ => "is out of range".to_string(),
        },
        "url" => "must be a valid URL".to_string(),
        other => format!("failed '{}' check", other),
    }
}
