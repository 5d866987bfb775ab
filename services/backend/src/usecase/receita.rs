//! Recipe listing, favorite partitioning and calorie aggregation.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use futures::future::join_all;

use crate::domain::repository::{
    FavoriteRepository, IngredientRepository, RecipeRepository, StockRepository,
};
use crate::domain::types::{
    CalorieLine, CalorieSummary, FavoritePartition, FavoriteRelation, Receita, RecipeFilter,
    RecipeIngredient,
};
use crate::error::BackendError;

/// Split `all_ids` by the user's relation rows.
///
/// Relations pointing at ids outside `all_ids` are ignored, so the three sets
/// always partition `all_ids` exactly. When a recipe has several rows the last
/// one wins.
pub fn partition_favorites(
    all_ids: impl IntoIterator<Item = i64>,
    relations: &[FavoriteRelation],
) -> FavoritePartition {
    let all: BTreeSet<i64> = all_ids.into_iter().collect();
    let flags: BTreeMap<i64, bool> = relations
        .iter()
        .filter(|r| all.contains(&r.id_receita))
        .map(|r| (r.id_receita, r.favorita))
        .collect();

    let mut partition = FavoritePartition::default();
    for id in all {
        match flags.get(&id) {
            Some(true) => partition.favorite.insert(id),
            Some(false) => partition.not_favorite.insert(id),
            None => partition.unrelated.insert(id),
        };
    }
    partition
}

/// Resolve each join row against the ingredient table and sum
/// `quantidade * calorias / 100`.
///
/// Lookups run concurrently. A missing or failed lookup drops the line and
/// contributes nothing to the total.
pub async fn aggregate_calories<I: IngredientRepository>(
    ingredients: &I,
    lines: &[RecipeIngredient],
) -> CalorieSummary {
    let lookups = join_all(lines.iter().map(|l| ingredients.find_by_id(l.id_ingrediente))).await;

    let mut resolved = Vec::with_capacity(lines.len());
    for (line, lookup) in lines.iter().zip(lookups) {
        match lookup {
            Ok(Some(ingrediente)) => resolved.push(CalorieLine {
                id: ingrediente.id,
                name: ingrediente.nome,
                quantity: line.quantidade,
                calories_per_unit: ingrediente.calorias.unwrap_or(0.0) / 100.0,
                unit: ingrediente.unidade_medida,
            }),
            Ok(None) => {
                tracing::debug!(ingredient = line.id_ingrediente, "ingredient not found, skipping")
            }
            Err(e) => {
                tracing::warn!(error = %e, ingredient = line.id_ingrediente, "ingredient lookup failed, skipping")
            }
        }
    }

    let total_calories = resolved
        .iter()
        .map(|l| l.quantity * l.calories_per_unit)
        .sum();
    CalorieSummary {
        ingredient_count: resolved.len(),
        ingredients: resolved,
        total_calories,
    }
}

/// Favorite relations of `user`, degrading to none when the table is unreachable.
async fn relations_or_empty<F: FavoriteRepository>(favorites: &F, user: &str) -> Vec<FavoriteRelation> {
    match favorites.relations(user).await {
        Ok(relations) => relations,
        Err(e) => {
            tracing::warn!(error = %e, user, "favorite relations unavailable, treating as none");
            Vec::new()
        }
    }
}

fn present(user: Option<&str>) -> Option<&str> {
    user.map(str::trim).filter(|u| !u.is_empty())
}

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Receita>, BackendError> {
        self.recipes.list(&RecipeFilter::default()).await
    }
}

// ── ListMyRecipes ────────────────────────────────────────────────────────────

/// The user's favorites. Empty without a user.
pub struct ListMyRecipesUseCase<R: RecipeRepository, F: FavoriteRepository> {
    pub recipes: R,
    pub favorites: F,
}

impl<R: RecipeRepository, F: FavoriteRepository> ListMyRecipesUseCase<R, F> {
    pub async fn execute(&self, user: Option<&str>) -> Result<Vec<Receita>, BackendError> {
        let Some(user) = present(user) else {
            return Ok(Vec::new());
        };
        let relations = relations_or_empty(&self.favorites, user).await;
        if relations.is_empty() {
            return Ok(Vec::new());
        }
        let all = self.recipes.list(&RecipeFilter::default()).await?;
        let partition = partition_favorites(all.iter().map(|r| r.id), &relations);
        Ok(all
            .into_iter()
            .filter(|r| partition.favorite.contains(&r.id))
            .collect())
    }
}

// ── ListOtherRecipes ─────────────────────────────────────────────────────────

pub struct OtherRecipesQuery<'a> {
    pub user: Option<&'a str>,
    pub filter: RecipeFilter,
    /// Keep only recipes whose every ingredient is in the user's inventory.
    pub only_my_ingredients: bool,
}

/// Explicitly-not-favorite and unrelated recipes, optionally filtered.
pub struct ListOtherRecipesUseCase<R, F, S>
where
    R: RecipeRepository,
    F: FavoriteRepository,
    S: StockRepository,
{
    pub recipes: R,
    pub favorites: F,
    pub inventory: S,
}

impl<R, F, S> ListOtherRecipesUseCase<R, F, S>
where
    R: RecipeRepository,
    F: FavoriteRepository,
    S: StockRepository,
{
    pub async fn execute(&self, query: OtherRecipesQuery<'_>) -> Result<Vec<Receita>, BackendError> {
        let candidates = self.recipes.list(&query.filter).await?;
        let Some(user) = present(query.user) else {
            return Ok(candidates);
        };

        let relations = relations_or_empty(&self.favorites, user).await;
        let partition = partition_favorites(candidates.iter().map(|r| r.id), &relations);
        let others: Vec<Receita> = candidates
            .into_iter()
            .filter(|r| partition.is_other(r.id))
            .collect();

        if !query.only_my_ingredients || others.is_empty() {
            return Ok(others);
        }
        self.keep_cookable(user, others).await
    }

    async fn keep_cookable(
        &self,
        user: &str,
        recipes: Vec<Receita>,
    ) -> Result<Vec<Receita>, BackendError> {
        let pantry: HashSet<i64> = self
            .inventory
            .list(user)
            .await?
            .into_iter()
            .map(|e| e.line.id_ingrediente)
            .collect();

        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
        let mut needed: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for line in self.recipes.ingredient_lines(&ids).await? {
            needed
                .entry(line.id_receita)
                .or_default()
                .push(line.id_ingrediente);
        }

        Ok(recipes
            .into_iter()
            .filter(|r| {
                needed
                    .get(&r.id)
                    .is_none_or(|ingredients| ingredients.iter().all(|i| pantry.contains(i)))
            })
            .collect())
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub receita: Receita,
    pub calories: CalorieSummary,
}

pub struct GetRecipeUseCase<R: RecipeRepository, I: IngredientRepository> {
    pub recipes: R,
    pub ingredients: I,
}

impl<R: RecipeRepository, I: IngredientRepository> GetRecipeUseCase<R, I> {
    pub async fn execute(&self, id: i64) -> Result<RecipeDetail, BackendError> {
        let receita = self
            .recipes
            .find_by_id(id)
            .await?
            .ok_or(BackendError::RecipeNotFound)?;
        let lines = match self.recipes.ingredient_lines(&[id]).await {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, recipe = id, "recipe composition unavailable");
                Vec::new()
            }
        };
        let calories = aggregate_calories(&self.ingredients, &lines).await;
        Ok(RecipeDetail { receita, calories })
    }
}

// ── ToggleFavorite ───────────────────────────────────────────────────────────

/// Flip the user's favorite flag; the first toggle creates the relation as favorite.
pub struct ToggleFavoriteUseCase<R: RecipeRepository, F: FavoriteRepository> {
    pub recipes: R,
    pub favorites: F,
}

impl<R: RecipeRepository, F: FavoriteRepository> ToggleFavoriteUseCase<R, F> {
    pub async fn execute(
        &self,
        recipe_id: i64,
        user: &str,
    ) -> Result<FavoriteRelation, BackendError> {
        let user = present(Some(user)).ok_or(BackendError::MissingEmail)?;
        if self.recipes.find_by_id(recipe_id).await?.is_none() {
            return Err(BackendError::RecipeNotFound);
        }
        match self.favorites.find(user, recipe_id).await? {
            Some(existing) => {
                self.favorites
                    .set_favorita(user, recipe_id, !existing.favorita)
                    .await
            }
            None => {
                self.favorites
                    .insert(&FavoriteRelation {
                        id_utilizador: user.to_owned(),
                        id_receita: recipe_id,
                        favorita: true,
                    })
                    .await
            }
        }
    }
}
