use std::sync::{Mutex, MutexGuard};

use crate::error::AppError;
use crate::models::{ProductId, UserId};
use crate::shop::Shop;

/// Everything the handlers work on, shared across workers through `web::Data`.
#[derive(Debug)]
pub struct AppState {
    shop: Mutex<Shop>,
    customer: UserId,
    catalog: Vec<ProductId>,
}

impl AppState {
    /// `catalog` lists products in the order they were stocked.
    pub fn new(shop: Shop, customer: UserId, catalog: Vec<ProductId>) -> Self {
        AppState {
            shop: Mutex::new(shop),
            customer,
            catalog,
        }
    }

    /// The shop the service starts with: three products and one customer.
    pub fn demo() -> Self {
        let mut shop = Shop::new();
        let catalog = vec![
            shop.add_product("iPhone 14", 70000, 10).id,
            shop.add_product("Samsung TV", 45000, 5).id,
            shop.add_product("Sony Headphones", 3000, 20).id,
        ];
        let customer = shop.register_user("sundar_123").id;
        AppState::new(shop, customer, catalog)
    }

    pub fn shop(&self) -> Result<MutexGuard<'_, Shop>, AppError> {
        self.shop.lock().map_err(|_| AppError::StatePoisoned)
    }

    pub fn customer(&self) -> UserId {
        self.customer
    }

    pub fn catalog_product(&self, position: usize) -> Result<ProductId, AppError> {
        self.catalog
            .get(position)
            .copied()
            .ok_or(AppError::CatalogSlot(position))
    }
}
