use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::errors::FoodError;
use crate::domain::food::model::{validate_updates, FoodItem};
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};
use crate::domain::logger::Logger;

pub struct UpdateFoodUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFoodUseCase for UpdateFoodUseCaseImpl {
    async fn execute(&self, params: UpdateFoodParams) -> Result<FoodItem, FoodError> {
        self.logger.info(&format!(
            "Updating food {} of restaurant {}",
            params.id, params.restaurant_id
        ));

        validate_updates(&params.updates)?;

        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => FoodError::NotFound,
            other => FoodError::Repository(other),
        };

        // A restaurant may only touch its own menu.
        let existing = self.repository.get_by_id(params.id).await.map_err(not_found)?;
        if existing.restaurant_id != params.restaurant_id {
            self.logger.warn(&format!(
                "Food {} does not belong to restaurant {}",
                params.id, params.restaurant_id
            ));
            return Err(FoodError::NotFound);
        }

        let updated = self
            .repository
            .update(params.id, &params.updates)
            .await
            .map_err(not_found)?;

        self.logger.info(&format!("Food updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::value_objects::{FoodType, FoodUpdate};
    use crate::testing::in_memory_store::InMemoryStore;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub FoodRepo {}

        #[async_trait]
        impl FoodRepository for FoodRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<FoodItem, RepositoryError>;
            async fn update(&self, id: Uuid, updates: &[FoodUpdate]) -> Result<FoodItem, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_apply_several_fields_at_once() {
        let store = Arc::new(InMemoryStore::new());
        let restaurant = store.add_restaurant("Anjappar");
        let food = store.add_food(restaurant, "Chicken 65", 150.0, 8);

        let use_case = UpdateFoodUseCaseImpl {
            repository: store.clone(),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateFoodParams {
                id: food,
                restaurant_id: restaurant,
                updates: vec![
                    FoodUpdate::Rate(165.0),
                    FoodUpdate::FoodType(FoodType::NonVeg),
                    FoodUpdate::Quantity(20),
                ],
            })
            .await
            .unwrap();

        assert_eq!(updated.rate, 165.0);
        assert_eq!(updated.food_type, FoodType::NonVeg);
        assert_eq!(updated.quantity, 20);
        assert_eq!(updated.name, "Chicken 65");
        assert_eq!(store.food_quantity(food), 20);
    }

    #[tokio::test]
    async fn should_reject_negative_quantity_without_touching_store() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: Uuid::new_v4(),
                restaurant_id: Uuid::new_v4(),
                updates: vec![FoodUpdate::Name("Kothu Parotta".to_string()), FoodUpdate::Quantity(-1)],
            })
            .await;

        assert!(matches!(result, Err(FoodError::QuantityNegative)));
    }

    #[tokio::test]
    async fn should_reject_empty_update_list() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: Uuid::new_v4(),
                restaurant_id: Uuid::new_v4(),
                updates: vec![],
            })
            .await;

        assert!(matches!(result, Err(FoodError::NoChanges)));
    }

    #[tokio::test]
    async fn should_hide_food_of_another_restaurant() {
        let store = Arc::new(InMemoryStore::new());
        let owner = store.add_restaurant("Anjappar");
        let intruder = store.add_restaurant("Saravana Bhavan");
        let food = store.add_food(owner, "Chicken 65", 150.0, 8);

        let use_case = UpdateFoodUseCaseImpl {
            repository: store.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: food,
                restaurant_id: intruder,
                updates: vec![FoodUpdate::Quantity(0)],
            })
            .await;

        assert!(matches!(result, Err(FoodError::NotFound)));
        assert_eq!(store.food_quantity(food), 8);
    }

    #[tokio::test]
    async fn should_map_missing_food_to_not_found() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: Uuid::new_v4(),
                restaurant_id: Uuid::new_v4(),
                updates: vec![FoodUpdate::Rate(99.0)],
            })
            .await;

        assert!(matches!(result, Err(FoodError::NotFound)));
    }
}
