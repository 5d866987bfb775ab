use crate::domain::repository::IngredientRepository;
use crate::domain::types::{Ingrediente, NewIngrediente};
use crate::error::BackendError;

pub struct ListIngredientsUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> ListIngredientsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Ingrediente>, BackendError> {
        self.repo.list().await
    }
}

pub struct CreateIngredientUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> CreateIngredientUseCase<R> {
    pub async fn execute(&self, input: NewIngrediente) -> Result<Ingrediente, BackendError> {
        let input = input.validate()?;
        self.repo.create(&input).await
    }
}
