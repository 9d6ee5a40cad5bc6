// Copyright 2023 Remi Bernotavicius

use chrono::NaiveDate;
use std::collections::BTreeSet;

pub mod expiry;
pub mod models;
pub mod sample;

use models::{
    FridgeItem, FridgeItemId, Ingredient, IngredientId, NewFridgeItem, NewRecipe,
    NewShoppingItem, Profile, Recipe, RecipeId, ShoppingItem, ShoppingItemId,
};
use sample::DataProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    /// Overrides the reference date used for expiry status, otherwise the local date is used.
    pub today: Option<NaiveDate>,
    pub expiring_soon_days: u64,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            today: None,
            expiring_soon_days: expiry::DEFAULT_EXPIRING_SOON_DAYS,
        }
    }
}

impl KitchenConfig {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// All the application state, shared by every screen.
pub struct Kitchen {
    pub config: KitchenConfig,
    pub recipes: Vec<Recipe>,
    pub fridge: Vec<FridgeItem>,
    pub shopping: Vec<ShoppingItem>,
    pub profile: Profile,
    pub planned: BTreeSet<RecipeId>,
    pub suggestion: Option<RecipeId>,

    next_recipe_id: RecipeId,
    next_ingredient_id: IngredientId,
    next_fridge_item_id: FridgeItemId,
    next_shopping_item_id: ShoppingItemId,
}

impl Kitchen {
    pub fn empty(config: KitchenConfig) -> Self {
        Self {
            config,
            recipes: vec![],
            fridge: vec![],
            shopping: vec![],
            profile: Profile::default(),
            planned: BTreeSet::new(),
            suggestion: None,

            next_recipe_id: RecipeId::INITIAL,
            next_ingredient_id: IngredientId::INITIAL,
            next_fridge_item_id: FridgeItemId::INITIAL,
            next_shopping_item_id: ShoppingItemId::INITIAL,
        }
    }

    pub fn new(provider: &impl DataProvider, config: KitchenConfig) -> Self {
        let today = config.today();
        let mut kitchen = Self::empty(config);
        for recipe in provider.recipes() {
            kitchen.insert_recipe(recipe);
        }
        for item in provider.fridge_items(today) {
            kitchen.insert_fridge_item(item);
        }
        for item in provider.shopping_items() {
            kitchen.insert_shopping_item(item);
        }
        kitchen.suggestion = provider
            .suggested_recipe()
            .and_then(|title| kitchen.recipes.iter().find(|r| r.title == title))
            .map(|r| r.id);

        log::debug!(
            "loaded {} recipes, {} fridge items, {} shopping items",
            kitchen.recipes.len(),
            kitchen.fridge.len(),
            kitchen.shopping.len()
        );
        kitchen
    }

    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn insert_recipe(&mut self, new: NewRecipe) -> RecipeId {
        let id = self.next_recipe_id;
        self.next_recipe_id = id.next();

        let ingredients = new
            .ingredients
            .into_iter()
            .map(|i| {
                let ingredient_id = self.next_ingredient_id;
                self.next_ingredient_id = ingredient_id.next();
                Ingredient {
                    id: ingredient_id,
                    name: i.name,
                    amount: i.amount,
                }
            })
            .collect();

        self.recipes.push(Recipe {
            id,
            title: new.title,
            category: new.category,
            prep_time: new.prep_time,
            difficulty: new.difficulty,
            ingredients,
            steps: new.steps,
            last_cooked: new.last_cooked,
            thumbnail: new.thumbnail,
            note: new.note,
        });
        id
    }

    pub fn insert_fridge_item(&mut self, new: NewFridgeItem) -> FridgeItemId {
        let id = self.next_fridge_item_id;
        self.next_fridge_item_id = id.next();
        self.fridge.push(FridgeItem {
            id,
            name: new.name,
            quantity: new.quantity,
            expiry: new.expiry,
        });
        id
    }

    pub fn insert_shopping_item(&mut self, new: NewShoppingItem) -> ShoppingItemId {
        let id = self.next_shopping_item_id;
        self.next_shopping_item_id = id.next();
        self.shopping.push(ShoppingItem {
            id,
            name: new.name,
            quantity: new.quantity,
            is_checked: false,
        });
        id
    }
}

#[cfg(test)]
pub(crate) struct Fixture {
    pub recipes: Vec<NewRecipe>,
    pub fridge: Vec<NewFridgeItem>,
    pub shopping: Vec<NewShoppingItem>,
    pub suggestion: Option<String>,
}

#[cfg(test)]
impl DataProvider for Fixture {
    fn recipes(&self) -> Vec<NewRecipe> {
        self.recipes.clone()
    }

    fn fridge_items(&self, _today: NaiveDate) -> Vec<NewFridgeItem> {
        self.fridge.clone()
    }

    fn shopping_items(&self) -> Vec<NewShoppingItem> {
        self.shopping.clone()
    }

    fn suggested_recipe(&self) -> Option<String> {
        self.suggestion.clone()
    }
}

#[cfg(test)]
pub(crate) fn test_recipe(title: &str, category: &str) -> NewRecipe {
    NewRecipe {
        title: title.into(),
        category: category.into(),
        prep_time: "10 min".into(),
        difficulty: "Easy".into(),
        ingredients: vec![],
        steps: vec![],
        last_cooked: None,
        thumbnail: None,
        note: None,
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> KitchenConfig {
    KitchenConfig {
        today: NaiveDate::from_ymd_opt(2025, 9, 11),
        ..Default::default()
    }
}

#[test]
fn new_kitchen_assigns_unique_ids() {
    use maplit::btreeset;
    use models::NewIngredient;

    let mut cake = test_recipe("Cake", "Dessert");
    cake.ingredients = vec![
        NewIngredient::new("Flour", "200 g"),
        NewIngredient::new("Sugar", "100 g"),
    ];
    let mut soup = test_recipe("Soup", "Dinner");
    soup.ingredients = vec![NewIngredient::new("Leek", "1")];

    let fixture = Fixture {
        recipes: vec![cake, soup],
        fridge: vec![],
        shopping: vec![
            NewShoppingItem::new("Milk", "1"),
            NewShoppingItem::new("Bread", "1"),
        ],
        suggestion: Some("Soup".into()),
    };
    let kitchen = Kitchen::new(&fixture, test_config());

    let recipe_ids: BTreeSet<_> = kitchen.recipes.iter().map(|r| r.id).collect();
    assert_eq!(recipe_ids.len(), 2);

    let ingredient_ids: BTreeSet<_> = kitchen
        .recipes
        .iter()
        .flat_map(|r| r.ingredients.iter().map(|i| i.id))
        .collect();
    assert_eq!(ingredient_ids.len(), 3);

    let shopping_ids: BTreeSet<_> = kitchen.shopping.iter().map(|i| i.id).collect();
    assert_eq!(
        shopping_ids,
        btreeset! { ShoppingItemId::INITIAL, ShoppingItemId::INITIAL.next() }
    );

    assert_eq!(
        kitchen.suggestion.and_then(|id| kitchen.recipe(id)).map(|r| r.title.as_str()),
        Some("Soup")
    );
}

#[test]
fn unknown_suggestion_is_dropped() {
    let fixture = Fixture {
        recipes: vec![test_recipe("Cake", "Dessert")],
        fridge: vec![],
        shopping: vec![],
        suggestion: Some("Pie".into()),
    };
    let kitchen = Kitchen::new(&fixture, test_config());
    assert_eq!(kitchen.suggestion, None);
}

#[test]
fn config_today_override() {
    let config = test_config();
    assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 9, 11).unwrap());
    assert_eq!(config.expiring_soon_days, 3);
}

#[test]
fn sample_kitchen_loads() {
    let kitchen = Kitchen::new(&sample::SampleData, test_config());
    assert_eq!(kitchen.recipes.len(), 2);
    assert_eq!(kitchen.fridge.len(), 3);
    assert_eq!(kitchen.shopping.len(), 3);
    assert!(kitchen.shopping.iter().all(|i| !i.is_checked));
    assert!(kitchen.suggestion.is_some());
}
