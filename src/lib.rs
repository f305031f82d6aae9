//! In-memory shopping cart served over HTTP.
//!
//! A [`shop::Shop`] owns products and users, each user owns a
//! [`cart::ShoppingCart`], and checkout turns a cart into an
//! [`models::Order`]. The [`routes`] module exposes the demo customer's cart
//! through actix-web.

pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod shop;
pub mod state;
pub mod user;
