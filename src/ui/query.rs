use crate::kitchen::models::{
    CategoryFilter, Difficulty, FridgeItem, NewFridgeItem, NewRecipe, NewShoppingItem, Recipe,
    RecipeId, ShoppingItem, ShoppingItemId, DEFAULT_CATEGORIES,
};
use crate::kitchen::Kitchen;
use std::collections::HashSet;

pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| category.matches(&r.category))
        .filter(|r| query.is_empty() || r.title.to_lowercase().contains(&query))
        .collect()
}

/// "All", then every category in use or offered by default, in first-seen order.
pub fn recipe_categories(kitchen: &Kitchen) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];
    for c in DEFAULT_CATEGORIES
        .into_iter()
        .chain(kitchen.recipes.iter().map(|r| r.category.as_str()))
    {
        if seen.insert(c) {
            categories.push(CategoryFilter::Only(c.into()));
        }
    }
    categories
}

pub fn add_recipe(
    kitchen: &mut Kitchen,
    title: &str,
    category: &str,
    prep_time: &str,
    difficulty: Difficulty,
    note: &str,
) -> RecipeId {
    let id = kitchen.insert_recipe(NewRecipe {
        title: title.into(),
        category: category.into(),
        prep_time: prep_time.into(),
        difficulty: difficulty.to_string(),
        ingredients: vec![],
        steps: vec![],
        last_cooked: None,
        thumbnail: None,
        note: (!note.is_empty()).then(|| note.into()),
    });
    log::info!("added recipe {title:?}");
    id
}

pub fn set_recipe_planned(kitchen: &mut Kitchen, id: RecipeId, planned: bool) {
    if planned {
        kitchen.planned.insert(id);
    } else {
        kitchen.planned.remove(&id);
    }
    log::debug!("recipe {id:?} planned: {planned}");
}

pub fn add_fridge_item(
    kitchen: &mut Kitchen,
    name: &str,
    quantity: &str,
    expiry: chrono::NaiveDate,
) {
    kitchen.insert_fridge_item(NewFridgeItem {
        name: name.into(),
        quantity: quantity.into(),
        expiry,
    });
    log::info!("added fridge item {name:?} expiring {expiry}");
}

pub fn delete_fridge_item(kitchen: &mut Kitchen, index: usize) -> Option<FridgeItem> {
    delete_at(&mut kitchen.fridge, index).inspect(|item| {
        log::info!("deleted fridge item {:?}", item.name);
    })
}

pub fn add_shopping_item(kitchen: &mut Kitchen, name: &str, quantity: &str) -> ShoppingItemId {
    let id = kitchen.insert_shopping_item(NewShoppingItem::new(name, quantity));
    log::info!("added shopping item {name:?}");
    id
}

pub fn delete_shopping_item(kitchen: &mut Kitchen, index: usize) -> Option<ShoppingItem> {
    delete_at(&mut kitchen.shopping, index).inspect(|item| {
        log::info!("deleted shopping item {:?}", item.name);
    })
}

/// Returns false if there is no item with the given id.
pub fn toggle_shopping_item(kitchen: &mut Kitchen, id: ShoppingItemId) -> bool {
    if let Some(item) = kitchen.shopping.iter_mut().find(|i| i.id == id) {
        item.is_checked = !item.is_checked;
        log::debug!("shopping item {:?} checked: {}", item.name, item.is_checked);
        true
    } else {
        false
    }
}

pub fn remove_checked_shopping_items(kitchen: &mut Kitchen) -> usize {
    let before = kitchen.shopping.len();
    kitchen.shopping.retain(|i| !i.is_checked);
    let removed = before - kitchen.shopping.len();
    log::info!("removed {removed} checked shopping items");
    removed
}

/// Adds a shopping item for every ingredient of the planned recipes that isn't on the list yet.
pub fn generate_shopping_items(kitchen: &mut Kitchen) -> usize {
    let mut on_list: HashSet<String> = kitchen
        .shopping
        .iter()
        .map(|i| i.name.to_lowercase())
        .collect();

    let mut to_add = vec![];
    for recipe in kitchen
        .recipes
        .iter()
        .filter(|r| kitchen.planned.contains(&r.id))
    {
        for ingredient in &recipe.ingredients {
            if on_list.insert(ingredient.name.to_lowercase()) {
                to_add.push(NewShoppingItem::new(
                    ingredient.name.clone(),
                    ingredient.amount.clone().unwrap_or_else(|| "1".into()),
                ));
            }
        }
    }

    let added = to_add.len();
    for item in to_add {
        kitchen.insert_shopping_item(item);
    }
    log::info!("generated {added} shopping items from planned recipes");
    added
}

pub fn shopping_list_text(kitchen: &Kitchen) -> String {
    kitchen
        .shopping
        .iter()
        .map(|i| format!("{i}\n"))
        .collect()
}

fn delete_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

#[cfg(test)]
use crate::kitchen::{models::NewIngredient, test_config, test_recipe, Fixture};

#[cfg(test)]
fn shopping_kitchen(names: &[&str]) -> Kitchen {
    let fixture = Fixture {
        recipes: vec![],
        fridge: vec![],
        shopping: names.iter().map(|n| NewShoppingItem::new(*n, "1")).collect(),
        suggestion: None,
    };
    Kitchen::new(&fixture, test_config())
}

#[cfg(test)]
fn shopping_names(kitchen: &Kitchen) -> Vec<&str> {
    kitchen.shopping.iter().map(|i| i.name.as_str()).collect()
}

#[cfg(test)]
fn recipe_kitchen() -> Kitchen {
    let mut cheesecake = test_recipe("Basque Cheesecake", "Dessert");
    cheesecake.ingredients = vec![
        NewIngredient::new("Cream Cheese", "600 g"),
        NewIngredient {
            name: "Heavy Cream".into(),
            amount: None,
        },
    ];
    let mut chicken = test_recipe("Garlic Butter Chicken", "Dinner");
    chicken.ingredients = vec![
        NewIngredient::new("Garlic", "4 cloves"),
        NewIngredient::new("Butter", "40 g"),
        NewIngredient::new("Heavy cream", "100 ml"),
    ];
    let fixture = Fixture {
        recipes: vec![
            cheesecake,
            chicken,
            test_recipe("Butter Toast", "Breakfast"),
            test_recipe("Chocolate Cake", "Dessert"),
        ],
        fridge: vec![],
        shopping: vec![],
        suggestion: None,
    };
    Kitchen::new(&fixture, test_config())
}

#[cfg(test)]
fn titles<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn filter_all_with_empty_query_returns_everything() {
    let kitchen = recipe_kitchen();
    let filtered = filter_recipes(&kitchen.recipes, &CategoryFilter::All, "");
    assert_eq!(filtered.len(), kitchen.recipes.len());
    for (a, b) in filtered.iter().zip(&kitchen.recipes) {
        assert!(std::ptr::eq(*a, b));
    }
}

#[test]
fn filter_by_category_and_query() {
    let kitchen = recipe_kitchen();
    let filtered = filter_recipes(&kitchen.recipes, &"Dessert".into(), "basque");
    assert_eq!(titles(&filtered), ["Basque Cheesecake"]);
}

#[test]
fn filter_query_is_case_insensitive_substring() {
    let kitchen = recipe_kitchen();
    let filtered = filter_recipes(&kitchen.recipes, &CategoryFilter::All, "BUTTER");
    assert_eq!(titles(&filtered), ["Garlic Butter Chicken", "Butter Toast"]);
}

#[test]
fn filter_category_only_preserves_order() {
    let kitchen = recipe_kitchen();
    let filtered = filter_recipes(&kitchen.recipes, &"Dessert".into(), "");
    assert_eq!(titles(&filtered), ["Basque Cheesecake", "Chocolate Cake"]);

    let filtered = filter_recipes(&kitchen.recipes, &"Lunch".into(), "");
    assert!(filtered.is_empty());
}

#[test]
fn filter_no_title_match() {
    let kitchen = recipe_kitchen();
    let filtered = filter_recipes(&kitchen.recipes, &"Dinner".into(), "cake");
    assert!(filtered.is_empty());
}

#[test]
fn categories_include_defaults_and_in_use() {
    let mut kitchen = recipe_kitchen();
    kitchen.insert_recipe(test_recipe("Ramen", "Lunch"));
    let categories: Vec<_> = recipe_categories(&kitchen)
        .iter()
        .map(|c| c.as_str().to_owned())
        .collect();
    assert_eq!(categories, ["All", "Breakfast", "Dinner", "Dessert", "Lunch"]);
}

#[test]
fn toggle_twice_restores_state() {
    let mut kitchen = shopping_kitchen(&["Milk", "Bread", "Eggs"]);
    let id = kitchen.shopping[1].id;

    assert!(toggle_shopping_item(&mut kitchen, id));
    assert!(kitchen.shopping[1].is_checked);
    assert_eq!(kitchen.shopping[1].id, id);
    assert_eq!(shopping_names(&kitchen), ["Milk", "Bread", "Eggs"]);

    assert!(toggle_shopping_item(&mut kitchen, id));
    assert!(!kitchen.shopping[1].is_checked);
}

#[test]
fn toggle_unknown_item() {
    let mut kitchen = shopping_kitchen(&["Milk"]);
    let missing = kitchen.shopping[0].id.next();
    assert!(!toggle_shopping_item(&mut kitchen, missing));
    assert!(!kitchen.shopping[0].is_checked);
}

#[test]
fn remove_checked_all_or_none() {
    let mut kitchen = shopping_kitchen(&["Milk", "Bread"]);
    assert_eq!(remove_checked_shopping_items(&mut kitchen), 0);
    assert_eq!(shopping_names(&kitchen), ["Milk", "Bread"]);

    let ids: Vec<_> = kitchen.shopping.iter().map(|i| i.id).collect();
    for id in ids {
        toggle_shopping_item(&mut kitchen, id);
    }
    assert_eq!(remove_checked_shopping_items(&mut kitchen), 2);
    assert!(kitchen.shopping.is_empty());
}

#[test]
fn remove_checked_keeps_survivor_order() {
    let mut kitchen = shopping_kitchen(&["Milk", "Bread", "Eggs", "Jam"]);
    let bread = kitchen.shopping[1].id;
    let jam = kitchen.shopping[3].id;
    toggle_shopping_item(&mut kitchen, bread);
    toggle_shopping_item(&mut kitchen, jam);

    assert_eq!(remove_checked_shopping_items(&mut kitchen), 2);
    assert_eq!(shopping_names(&kitchen), ["Milk", "Eggs"]);
}

#[test]
fn delete_by_index() {
    let mut kitchen = shopping_kitchen(&["Milk", "Bread", "Eggs"]);
    let id = kitchen.shopping[1].id;
    toggle_shopping_item(&mut kitchen, id);

    let removed = delete_shopping_item(&mut kitchen, 0).unwrap();
    assert_eq!(removed.name, "Milk");
    assert_eq!(shopping_names(&kitchen), ["Bread", "Eggs"]);
    assert!(kitchen.shopping[0].is_checked);

    assert_eq!(delete_shopping_item(&mut kitchen, 2), None);
    assert_eq!(kitchen.shopping.len(), 2);
}

#[test]
fn fridge_add_and_delete() {
    let mut kitchen = Kitchen::empty(test_config());
    let today = kitchen.today();
    add_fridge_item(&mut kitchen, "Beef", "500 g", today);
    add_fridge_item(&mut kitchen, "Milk", "1 L", today);
    add_fridge_item(&mut kitchen, "Eggs", "12", today);

    let removed = delete_fridge_item(&mut kitchen, 1).unwrap();
    assert_eq!(removed.name, "Milk");
    let names: Vec<_> = kitchen.fridge.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Beef", "Eggs"]);
    assert!(delete_fridge_item(&mut kitchen, 5).is_none());
}

#[test]
fn added_shopping_items_start_unchecked() {
    let mut kitchen = shopping_kitchen(&[]);
    let id = add_shopping_item(&mut kitchen, "Parsley", "1 bunch");
    assert_eq!(kitchen.shopping.len(), 1);
    assert_eq!(kitchen.shopping[0].id, id);
    assert!(!kitchen.shopping[0].is_checked);
}

#[test]
fn add_recipe_without_note() {
    let mut kitchen = Kitchen::empty(test_config());
    let id = add_recipe(&mut kitchen, "Pancakes", "Breakfast", "20 min", Difficulty::Easy, "");
    let recipe = kitchen.recipe(id).unwrap();
    assert_eq!(recipe.difficulty, "Easy");
    assert_eq!(recipe.note, None);
    assert!(recipe.ingredients.is_empty());

    let id = add_recipe(&mut kitchen, "Stew", "Dinner", "2 h", Difficulty::Hard, "slow");
    assert_eq!(kitchen.recipe(id).unwrap().note.as_deref(), Some("slow"));
}

#[test]
fn generate_from_planned_recipes() {
    let mut kitchen = recipe_kitchen();
    add_shopping_item(&mut kitchen, "garlic", "1");

    assert_eq!(generate_shopping_items(&mut kitchen), 0);

    let cheesecake = kitchen.recipes[0].id;
    let chicken = kitchen.recipes[1].id;
    set_recipe_planned(&mut kitchen, chicken, true);
    set_recipe_planned(&mut kitchen, cheesecake, true);

    assert_eq!(generate_shopping_items(&mut kitchen), 3);
    assert_eq!(
        shopping_names(&kitchen),
        ["garlic", "Cream Cheese", "Heavy Cream", "Butter"]
    );
    let quantities: Vec<_> = kitchen.shopping.iter().map(|i| i.quantity.as_str()).collect();
    assert_eq!(quantities, ["1", "600 g", "1", "40 g"]);

    assert_eq!(generate_shopping_items(&mut kitchen), 0);

    set_recipe_planned(&mut kitchen, cheesecake, false);
    assert!(!kitchen.planned.contains(&cheesecake));
}

#[test]
fn shopping_text() {
    let mut kitchen = shopping_kitchen(&["Milk", "Bread"]);
    let id = kitchen.shopping[0].id;
    toggle_shopping_item(&mut kitchen, id);
    assert_eq!(shopping_list_text(&kitchen), "[x] Milk (1)\n[ ] Bread (1)\n");
}
