use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines a `Uuid` newtype so ids of different entities can't be mixed up.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);

/// Registry of products keyed by id, as handed to cart views and checkout.
pub type ProductDb = HashMap<ProductId, Product>;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub stock: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u64, stock: u32) -> Self {
        Product {
            id: ProductId::new(),
            name: name.into(),
            price,
            stock,
        }
    }
}

/// One row of a cart listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: String,
    pub quantity: u32,
    pub price: u64,
    pub cost: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: u64,
}

/// Result of putting units of a product into a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added {
        product: String,
        quantity: u32,
    },
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added { product, quantity } => {
                write!(f, "Added {} x {} to cart.", quantity, product)
            }
            AddOutcome::InsufficientStock { product, .. } => {
                write!(f, "Not enough stock for {}", product)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
}

/// A completed purchase. Built once by checkout and never changed.
#[derive(Debug, Clone)]
pub struct Order {
    order_id: OrderId,
    user: String,
    items: HashMap<ProductId, u32>,
    total_amount: u64,
    status: OrderStatus,
    created_at: DateTime<Local>,
}

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Order {
    pub fn new(user: impl Into<String>, items: HashMap<ProductId, u32>, total_amount: u64) -> Self {
        Order {
            order_id: OrderId::new(),
            user: user.into(),
            items,
            total_amount,
            status: OrderStatus::Placed,
            created_at: Local::now(),
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn items(&self) -> &HashMap<ProductId, u32> {
        &self.items
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Flattens the order into the record returned to clients.
    pub fn receipt(&self) -> OrderReceipt {
        OrderReceipt {
            order_id: self.order_id,
            user: self.user.clone(),
            total_amount: self.total_amount,
            status: self.status,
            created_at: self.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub user: String,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: String,
}
