use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError> {
        self.logger
            .info(&format!("Clearing cart of {}", params.user_id));

        let count = self.repository.clear_active(&params.user_id).await?;

        self.logger
            .info(&format!("Cleared {} cart entries", count));
        Ok(count)
    }
}
