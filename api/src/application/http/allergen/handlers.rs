pub mod get_allergen;
pub mod list_allergens;
