//! Drink model, recipe types, and request DTOs.

use canteen_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One ingredient of a drink recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// A row from the `drinks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<Ingredient>>,
}

impl Drink {
    /// Short representation: recipe reduced to color and parts.
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| IngredientShort {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }

    /// Long representation: the full recipe.
    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }
}

/// Public listing shape: ingredient names withheld.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientShort>,
}

/// Ingredient as exposed in the short representation.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientShort {
    pub color: String,
    pub parts: i32,
}

/// Detail shape for scoped listings and write responses.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Recipe as accepted on the wire: the legacy API let clients send a single
/// ingredient object where an array was expected, so both shapes normalize
/// to a `Vec<Ingredient>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(v) => v,
            RecipeInput::One(i) => vec![i],
        }
    }
}

/// Body of `POST /drinks`. Both fields are required; optionality exists so
/// the handler can answer incomplete bodies with 422.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrink {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// Body of `PATCH /drinks/{id}`. Only present fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}
