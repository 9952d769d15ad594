use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<CartLine>, CartError> {
        self.logger
            .debug(&format!("Getting cart of {}", params.user_id));
        let lines = self.repository.get_active_lines(&params.user_id).await?;
        self.logger
            .info(&format!("Retrieved {} cart lines", lines.len()));
        Ok(lines)
    }
}
