use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::quantity::Quantity;

/// One named amount of food, e.g. `1 1/2 cup flour`.
///
/// Every field is optional: "salt to taste" has no quantity, "2 eggs" has no unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            self.quantity.map(|q| q.to_string()),
            self.unit.clone(),
            self.name.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// A named mix of earlier ingredients, e.g. "the dough".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateIngredient {
    pub name: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

/// Ledger of what is still available while walking through the steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientState {
    /// Ingredients not yet used up, in declaration order
    pub remaining: Vec<Ingredient>,
    pub intermediate: Vec<IntermediateIngredient>,
    /// Index into `intermediate` of the mix currently being worked on, -1 for none
    pub focus: i32,
}

impl IngredientState {
    pub fn new(remaining: Vec<Ingredient>) -> Self {
        Self {
            remaining,
            intermediate: Vec::new(),
            focus: -1,
        }
    }

    /// Looks up a remaining ingredient by exact name.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.remaining
            .iter()
            .find(|ingr| ingr.name.as_deref() == Some(name))
    }
}

impl Default for IngredientState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// One atomic instruction sentence and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    /// Ingredients consumed by this step
    pub ingredients: Vec<Ingredient>,
    /// Ledger after this step has taken its ingredients
    pub state: IngredientState,
    pub tools: Vec<String>,
    pub methods: Vec<String>,
    pub times: Vec<String>,
    /// Temperatures and other measures of doneness
    pub temps: Vec<String>,
}

impl Step {
    pub fn new(text: impl Into<String>, state: IngredientState) -> Self {
        Self {
            text: text.into(),
            ingredients: Vec::new(),
            state,
            tools: Vec::new(),
            methods: Vec::new(),
            times: Vec::new(),
            temps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    /// Full ingredient list as declared by the source
    pub ingredients: Vec<Ingredient>,
    pub tools: Vec<String>,
    pub steps: Vec<Step>,
    /// Overview fields such as "prep time" or "servings"
    pub other: BTreeMap<String, String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            title: title.into(),
            ingredients,
            ..Default::default()
        }
    }

    /// The ledger the next step starts from: the last step's, or the
    /// untouched ingredient list before any step exists.
    pub fn current_state(&self) -> IngredientState {
        match self.steps.last() {
            Some(step) => step.state.clone(),
            None => IngredientState::new(self.ingredients.clone()),
        }
    }
}
