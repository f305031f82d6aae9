use crate::cart::{CartError, ShoppingCart};
use crate::models::{Order, ProductDb, UserId};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub cart: ShoppingCart,
}

impl User {
    /// Creates a user together with its empty cart.
    pub fn new(username: impl Into<String>) -> Self {
        let id = UserId::new();
        User {
            id,
            username: username.into(),
            cart: ShoppingCart::new(id),
        }
    }

    pub fn checkout(&mut self, product_db: &ProductDb) -> Result<Order, CartError> {
        self.cart.checkout(&self.username, product_db)
    }
}
