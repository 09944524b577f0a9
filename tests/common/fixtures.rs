//! Order fixtures and workflow helpers

use chrono::Utc;
use sqlx::SqlitePool;

use werkstatt::backend::orders::workflow::{self, Actor, OrderAction};
use werkstatt::backend::orders::db;
use werkstatt::shared::orders::{CreateOrderRequest, Order, OrderType};

/// Minimal valid order draft
pub fn draft(title: &str, order_type: OrderType) -> CreateOrderRequest {
    CreateOrderRequest {
        title: title.to_string(),
        description: "test order".to_string(),
        client_id: "client-1".to_string(),
        client_name: "Test Client".to_string(),
        deadline: None,
        cost_center: None,
        priority: Default::default(),
        estimated_hours: 2.5,
        assigned_to: None,
        notes: String::new(),
        order_type,
        sub_tasks: Vec::new(),
        title_image: None,
    }
}

/// Create an order straight through the store
pub async fn create_order(pool: &SqlitePool, title: &str, order_type: OrderType) -> Order {
    db::create_order(pool, &draft(title, order_type), Utc::now())
        .await
        .expect("Failed to create order")
}

/// Apply a sequence of workflow actions and persist after each step
pub async fn advance(pool: &SqlitePool, order: &mut Order, actions: &[OrderAction]) {
    let actor = Actor {
        user_id: "staff-1".to_string(),
        user_name: "Workshop".to_string(),
    };
    for action in actions {
        workflow::apply(order, action, &actor, Utc::now()).expect("workflow step failed");
        db::update_order(pool, order).await.expect("persist failed");
    }
}
