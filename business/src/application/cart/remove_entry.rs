use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_entry::{
    RemoveCartEntryParams, RemoveCartEntryUseCase,
};
use crate::domain::cart::value_objects::RemovalOutcome;
use crate::domain::logger::Logger;

pub struct RemoveCartEntryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartEntryUseCase for RemoveCartEntryUseCaseImpl {
    async fn execute(&self, params: RemoveCartEntryParams) -> Result<RemovalOutcome, CartError> {
        self.logger
            .info(&format!("Removing cart entry: {}", params.id));

        let removed = self
            .repository
            .remove_active(params.id, &params.user_id)
            .await?;

        if removed {
            self.logger
                .info(&format!("Cart entry removed: {}", params.id));
            Ok(RemovalOutcome::Removed)
        } else {
            self.logger
                .debug(&format!("No active cart entry {} to remove", params.id));
            Ok(RemovalOutcome::NotFound)
        }
    }
}
