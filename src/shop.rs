use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::cart::CartError;
use crate::models::{AddOutcome, CartView, Order, Product, ProductDb, ProductId, UserId};
use crate::user::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("unknown user {0}")]
    UnknownUser(UserId),
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Owns every product and user. Entries are never removed.
#[derive(Debug, Default)]
pub struct Shop {
    products: ProductDb,
    users: HashMap<UserId, User>,
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, name: impl Into<String>, price: u64, stock: u32) -> &Product {
        let product = Product::new(name, price, stock);
        debug!("Registered product {} ({})", product.name, product.id);
        self.products.entry(product.id).or_insert(product)
    }

    pub fn register_user(&mut self, username: impl Into<String>) -> &User {
        let user = User::new(username);
        debug!("Registered user {} ({})", user.username, user.id);
        self.users.entry(user.id).or_insert(user)
    }

    pub fn products(&self) -> &ProductDb {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    pub fn add_to_cart(
        &mut self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<AddOutcome, ShopError> {
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or(ShopError::UnknownUser(user_id))?;
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(ShopError::UnknownProduct(product_id))?;
        Ok(user.cart.add_item(product, quantity))
    }

    pub fn view_cart(&self, user_id: UserId) -> Result<CartView, ShopError> {
        let user = self.user(user_id).ok_or(ShopError::UnknownUser(user_id))?;
        Ok(user.cart.view_cart(&self.products)?)
    }

    pub fn checkout(&mut self, user_id: UserId) -> Result<Order, ShopError> {
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or(ShopError::UnknownUser(user_id))?;
        Ok(user.checkout(&self.products)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_assigns_unique_ids() {
        let mut shop = Shop::new();
        let a = shop.add_product("Widget", 100, 5).id;
        let b = shop.add_product("Widget", 100, 5).id;
        assert_ne!(a, b);
        assert_eq!(shop.products().len(), 2);

        let u1 = shop.register_user("same").id;
        let u2 = shop.register_user("same").id;
        assert_ne!(u1, u2);
        assert_eq!(shop.user(u1).unwrap().username, "same");
    }

    #[test]
    fn test_add_to_cart_updates_stored_stock() {
        let mut shop = Shop::new();
        let product = shop.add_product("Widget", 100, 5).id;
        let user = shop.register_user("buyer").id;

        let outcome = shop.add_to_cart(user, product, 2).unwrap();
        assert_eq!(outcome.to_string(), "Added 2 x Widget to cart.");
        assert_eq!(shop.product(product).unwrap().stock, 3);
        assert_eq!(shop.view_cart(user).unwrap().total, 200);

        let outcome = shop.add_to_cart(user, product, 10).unwrap();
        assert!(!outcome.is_added());
        assert_eq!(shop.product(product).unwrap().stock, 3);

        let order = shop.checkout(user).unwrap();
        assert_eq!(order.total_amount(), 200);
        assert_eq!(order.user(), "buyer");
        assert!(shop.user(user).unwrap().cart.is_empty());
        assert_eq!(shop.view_cart(user).unwrap().total, 0);
    }

    #[test]
    fn test_unknown_ids() {
        let mut shop = Shop::new();
        let product = shop.add_product("Widget", 100, 5).id;
        let stranger = UserId::new();
        let user = shop.register_user("buyer").id;
        let missing = ProductId::new();

        assert_eq!(
            shop.add_to_cart(stranger, product, 1),
            Err(ShopError::UnknownUser(stranger))
        );
        assert_eq!(
            shop.add_to_cart(user, missing, 1),
            Err(ShopError::UnknownProduct(missing))
        );
        assert_eq!(shop.view_cart(stranger), Err(ShopError::UnknownUser(stranger)));
        assert!(shop.checkout(stranger).is_err());
    }

    #[test]
    fn test_user_mut_exposes_cart() {
        let mut shop = Shop::new();
        let user = shop.register_user("buyer").id;
        let mut outside = Product::new("Off-catalog", 10, 1);

        shop.user_mut(user).unwrap().cart.add_item(&mut outside, 1);
        assert_eq!(
            shop.checkout(user).unwrap_err(),
            ShopError::Cart(CartError::UnknownProduct(outside.id))
        );
    }
}
