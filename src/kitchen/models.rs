// Copyright 2023 Remi Bernotavicius

use derive_more::Display;
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct IngredientId(u32);

impl IngredientId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub amount: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(amount) = &self.amount {
            write!(f, " – {amount}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    pub name: String,
    pub amount: Option<String>,
}

impl NewIngredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount.into()),
        }
    }
}

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct RecipeId(u32);

impl RecipeId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: String,
    pub prep_time: String,
    pub difficulty: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub last_cooked: Option<String>,
    pub thumbnail: Option<String>,
    pub note: Option<String>,
}

impl Recipe {
    pub const DEFAULT_THUMBNAIL: &'static str = "📖";

    pub fn thumbnail(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(Self::DEFAULT_THUMBNAIL)
    }

    pub fn summary(&self) -> String {
        format!("{} • {}", self.prep_time, self.difficulty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub category: String,
    pub prep_time: String,
    pub difficulty: String,
    pub ingredients: Vec<NewIngredient>,
    pub steps: Vec<String>,
    pub last_cooked: Option<String>,
    pub thumbnail: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct FridgeItemId(u32);

impl FridgeItemId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FridgeItem {
    pub id: FridgeItemId,
    pub name: String,
    pub quantity: String,
    pub expiry: chrono::NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFridgeItem {
    pub name: String,
    pub quantity: String,
    pub expiry: chrono::NaiveDate,
}

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct ShoppingItemId(u32);

impl ShoppingItemId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub quantity: String,
    pub is_checked: bool,
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_checked { "x" } else { " " };
        write!(f, "[{mark}] {} ({})", self.name, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: String,
}

impl NewShoppingItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Which recipes the recipe list shows, by category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "All";

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Only(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            Self::All
        } else {
            Self::Only(s.into())
        }
    }
}

pub const DEFAULT_CATEGORIES: [&str; 3] = ["Breakfast", "Dinner", "Dessert"];

#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[display("Easy")]
    Easy,
    #[default]
    #[display("Medium")]
    Medium,
    #[display("Hard")]
    Hard,
}

impl Difficulty {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    #[display("Metric")]
    Metric,
    #[display("US Customary")]
    UsCustomary,
}

impl Units {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub vegetarian: bool,
    pub allergies: String,
    pub units: Units,
}

#[test]
fn ingredient_display() {
    let ingredient = Ingredient {
        id: IngredientId::INITIAL,
        name: "Cream Cheese".into(),
        amount: Some("600 g".into()),
    };
    assert_eq!(ingredient.to_string(), "Cream Cheese – 600 g");

    let ingredient = Ingredient {
        amount: None,
        ..ingredient
    };
    assert_eq!(ingredient.to_string(), "Cream Cheese");
}

#[test]
fn shopping_item_display() {
    let mut item = ShoppingItem {
        id: ShoppingItemId::INITIAL,
        name: "Parsley".into(),
        quantity: "1 bunch".into(),
        is_checked: false,
    };
    assert_eq!(item.to_string(), "[ ] Parsley (1 bunch)");

    item.is_checked = true;
    assert_eq!(item.to_string(), "[x] Parsley (1 bunch)");
}

#[test]
fn category_filter_from_str() {
    assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from("Dessert"),
        CategoryFilter::Only("Dessert".into())
    );
    // Exact match only, "all" is a category like any other.
    assert_eq!(CategoryFilter::from("all"), CategoryFilter::Only("all".into()));

    assert!(CategoryFilter::All.matches("Dinner"));
    assert!(CategoryFilter::from("Dinner").matches("Dinner"));
    assert!(!CategoryFilter::from("Dinner").matches("dinner"));
}

#[test]
fn choice_display() {
    let difficulties: Vec<_> = Difficulty::iter().map(|d| d.to_string()).collect();
    assert_eq!(difficulties, ["Easy", "Medium", "Hard"]);

    let units: Vec<_> = Units::iter().map(|u| u.to_string()).collect();
    assert_eq!(units, ["Metric", "US Customary"]);
}

#[test]
fn ids_advance() {
    assert_eq!(RecipeId::INITIAL.next(), RecipeId(2));
    assert!(FridgeItemId::INITIAL < FridgeItemId::INITIAL.next());
}
