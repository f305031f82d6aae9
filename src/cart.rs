use std::collections::HashMap;

use thiserror::Error;

use crate::models::{AddOutcome, CartLine, CartView, Order, Product, ProductDb, ProductId, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("product {0} is in the cart but not in the shop")]
    UnknownProduct(ProductId),
}

/// Quantities a user intends to buy, keyed by product.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    owner: UserId,
    items: HashMap<ProductId, u32>,
}

impl ShoppingCart {
    pub fn new(owner: UserId) -> Self {
        ShoppingCart {
            owner,
            items: HashMap::new(),
        }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn items(&self) -> &HashMap<ProductId, u32> {
        &self.items
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserves `quantity` units of `product`.
    ///
    /// Stock is taken from the product immediately and is not returned if the
    /// cart is never checked out. When the product has fewer units than asked
    /// for, neither the cart nor the stock changes.
    pub fn add_item(&mut self, product: &mut Product, quantity: u32) -> AddOutcome {
        if product.stock < quantity {
            return AddOutcome::InsufficientStock {
                product: product.name.clone(),
                requested: quantity,
                available: product.stock,
            };
        }

        let entry = self.items.entry(product.id).or_insert(0);
        *entry = entry.saturating_add(quantity);
        product.stock -= quantity;

        AddOutcome::Added {
            product: product.name.clone(),
            quantity,
        }
    }

    pub fn view_cart(&self, product_db: &ProductDb) -> Result<CartView, CartError> {
        let mut view = CartView::default();
        for (product_id, &quantity) in &self.items {
            let product = product_db
                .get(product_id)
                .ok_or(CartError::UnknownProduct(*product_id))?;
            let cost = u64::from(quantity).saturating_mul(product.price);
            view.lines.push(CartLine {
                product: product.name.clone(),
                quantity,
                price: product.price,
                cost,
            });
            view.total = view.total.saturating_add(cost);
        }
        Ok(view)
    }

    /// Turns the cart into an order for `buyer` and empties it.
    ///
    /// The cart is left untouched if any of its products can't be priced.
    pub fn checkout(&mut self, buyer: &str, product_db: &ProductDb) -> Result<Order, CartError> {
        let view = self.view_cart(product_db)?;
        let order = Order::new(buyer, self.items.clone(), view.total);
        self.items.clear();
        Ok(order)
    }
}
