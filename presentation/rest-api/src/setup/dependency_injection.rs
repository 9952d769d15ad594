use std::sync::Arc;
use std::time::Duration;

use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::address::repository::AddressRepositoryPostgres;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::food::repository::FoodRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;

use business::application::address::create::CreateAddressUseCaseImpl;
use business::application::address::get_all::GetAddressesUseCaseImpl;
use business::application::cart::add_food::AddFoodToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_entry::RemoveCartEntryUseCaseImpl;
use business::application::food::get_by_id::GetFoodUseCaseImpl;
use business::application::food::update::UpdateFoodUseCaseImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;

use crate::api::address::routes::AddressApi;
use crate::api::cart::routes::CartApi;
use crate::api::food::routes::FoodApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
    pub address_api: AddressApi,
    pub food_api: FoodApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, lock_timeout: Duration) -> Self {
        let cart_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("cart"));
        let order_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("order"));
        let address_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("address"));
        let food_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("food"));

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone(), lock_timeout));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone(), lock_timeout));
        let address_repository = Arc::new(AddressRepositoryPostgres::new(pool.clone()));
        let food_repository = Arc::new(FoodRepositoryPostgres::new(pool.clone()));

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(AddFoodToCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(RemoveCartEntryUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger,
            }),
        );

        // Order use cases
        let order_api = OrderApi::new(
            Arc::new(PlaceOrderUseCaseImpl {
                cart_repository,
                order_repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(GetOrdersUseCaseImpl {
                repository: order_repository,
                logger: order_logger,
            }),
        );

        // Address use cases
        let address_api = AddressApi::new(
            Arc::new(CreateAddressUseCaseImpl {
                repository: address_repository.clone(),
                logger: address_logger.clone(),
            }),
            Arc::new(GetAddressesUseCaseImpl {
                repository: address_repository,
                logger: address_logger,
            }),
        );

        // Food use cases
        let food_api = FoodApi::new(
            Arc::new(GetFoodUseCaseImpl {
                repository: food_repository.clone(),
                logger: food_logger.clone(),
            }),
            Arc::new(UpdateFoodUseCaseImpl {
                repository: food_repository,
                logger: food_logger,
            }),
        );

        Self {
            health_api: HealthApi::new(pool),
            cart_api,
            order_api,
            address_api,
            food_api,
        }
    }
}
