// Copyright 2023 Remi Bernotavicius

use super::models::{NewFridgeItem, NewIngredient, NewRecipe, NewShoppingItem};
use chrono::NaiveDate;

/// Supplies the records a [`super::Kitchen`] starts out with.
pub trait DataProvider {
    fn recipes(&self) -> Vec<NewRecipe>;

    /// Fridge items, with expiry dates relative to `today`.
    fn fridge_items(&self, today: NaiveDate) -> Vec<NewFridgeItem>;

    fn shopping_items(&self) -> Vec<NewShoppingItem>;

    /// Title of the recipe shown as tonight's suggestion on the dashboard.
    fn suggested_recipe(&self) -> Option<String> {
        None
    }
}

pub struct SampleData;

fn days_from(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_add_signed(chrono::TimeDelta::days(days))
        .unwrap_or(today)
}

impl SampleData {
    fn basque_cheesecake() -> NewRecipe {
        NewRecipe {
            title: "Basque Cheesecake".into(),
            category: "Dessert".into(),
            prep_time: "60 min".into(),
            difficulty: "Medium".into(),
            ingredients: vec![
                NewIngredient::new("Cream Cheese", "600 g"),
                NewIngredient::new("Sugar", "180 g"),
                NewIngredient::new("Eggs", "4"),
                NewIngredient::new("Heavy Cream", "240 ml"),
                NewIngredient::new("Cake Flour", "20 g"),
                NewIngredient::new("Vanilla Extract", "1 tsp"),
            ],
            steps: vec![
                "Preheat oven to 230°C. Line a springform pan with parchment, ensuring tall sides."
                    .into(),
                "Beat cream cheese and sugar until smooth.".into(),
                "Add eggs one by one, then heavy cream and vanilla. Sift in flour and mix just \
                 to combine."
                    .into(),
                "Pour batter into pan. Bake until deeply browned on top and just set in center."
                    .into(),
                "Cool completely. The center will sink slightly as it sets.".into(),
            ],
            last_cooked: Some("6 months ago".into()),
            thumbnail: Some("🔥".into()),
            note: None,
        }
    }

    fn garlic_butter_chicken() -> NewRecipe {
        NewRecipe {
            title: "Garlic Butter Chicken".into(),
            category: "Dinner".into(),
            prep_time: "30 min".into(),
            difficulty: "Easy".into(),
            ingredients: vec![
                NewIngredient::new("Chicken Thighs", "600 g"),
                NewIngredient::new("Garlic", "4 cloves"),
                NewIngredient::new("Butter", "40 g"),
                NewIngredient::new("Parsley", "A handful"),
            ],
            steps: vec![
                "Season chicken and sear until golden.".into(),
                "Add butter and garlic, baste to finish.".into(),
                "Rest and garnish with chopped parsley.".into(),
            ],
            last_cooked: None,
            thumbnail: Some("🍴".into()),
            note: None,
        }
    }
}

impl DataProvider for SampleData {
    fn recipes(&self) -> Vec<NewRecipe> {
        vec![Self::basque_cheesecake(), Self::garlic_butter_chicken()]
    }

    fn fridge_items(&self, today: NaiveDate) -> Vec<NewFridgeItem> {
        [("Beef", "500 g", 2), ("Milk", "1 L", -1), ("Eggs", "12", 10)]
            .into_iter()
            .map(|(name, quantity, days)| NewFridgeItem {
                name: name.into(),
                quantity: quantity.into(),
                expiry: days_from(today, days),
            })
            .collect()
    }

    fn shopping_items(&self) -> Vec<NewShoppingItem> {
        vec![
            NewShoppingItem::new("Heavy Cream", "1"),
            NewShoppingItem::new("Vanilla Extract", "1"),
            NewShoppingItem::new("Parsley", "1 bunch"),
        ]
    }

    fn suggested_recipe(&self) -> Option<String> {
        Some("Basque Cheesecake".into())
    }
}

#[test]
fn sample_fridge_covers_every_status() {
    use super::expiry::ExpiryStatus;

    let today = NaiveDate::from_ymd_opt(2025, 9, 11).unwrap();
    let statuses: Vec<_> = SampleData
        .fridge_items(today)
        .into_iter()
        .map(|i| ExpiryStatus::classify(today, i.expiry, 3))
        .collect();
    assert_eq!(
        statuses,
        [
            ExpiryStatus::ExpiringSoon,
            ExpiryStatus::Expired,
            ExpiryStatus::Fresh
        ]
    );
}

#[test]
fn sample_suggestion_is_a_sample_recipe() {
    let suggestion = SampleData.suggested_recipe().unwrap();
    assert!(SampleData.recipes().iter().any(|r| r.title == suggestion));
}
