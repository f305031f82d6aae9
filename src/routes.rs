use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

pub const READY_MESSAGE: &str = "🛒 Shopping Cart App is running!";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/add", web::get().to(add_items))
        .route("/cart", web::get().to(view_cart))
        .route("/checkout", web::get().to(checkout));
}

async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(READY_MESSAGE)
}

// One unit each of the first two catalog products goes into the customer's cart.
async fn add_items(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let customer = state.customer();
    let first = state.catalog_product(0)?;
    let second = state.catalog_product(1)?;

    let mut shop = state.shop()?;
    let mut added = Vec::with_capacity(2);
    for product_id in [first, second] {
        let outcome = shop.add_to_cart(customer, product_id, 1)?;
        if outcome.is_added() {
            info!("{} (user {})", outcome, customer);
        } else {
            warn!("{} (user {})", outcome, customer);
        }
        added.push(outcome.to_string());
    }

    Ok(HttpResponse::Ok().json(json!({ "added": added })))
}

async fn view_cart(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.shop()?.view_cart(state.customer())?;
    Ok(HttpResponse::Ok().json(json!({
        "cart": view.lines,
        "total": view.total,
    })))
}

async fn checkout(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let order = state.shop()?.checkout(state.customer())?;
    info!(
        "Order {} placed by {} for {}",
        order.order_id(),
        order.user(),
        order.total_amount()
    );
    Ok(HttpResponse::Ok().json(json!({ "order": order.receipt() })))
}
