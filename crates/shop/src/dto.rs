use serde::Serialize;

use charolis_core::Entity;
use charolis_products::Product;
use charolis_sales::{Order, OrderItem, OrderKind};
use charolis_users::{User, UserKind};

// -------------------------
// Read-only views
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub available: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().get(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            price: p.price().minor(),
            available: p.is_available(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: u64,
    pub kind: UserKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&User> for UserView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id().get(),
            kind: u.kind(),
            name: u.name().to_string(),
            email: u.email().to_string(),
            phone: u.phone().to_string(),
            address: u.address().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&OrderItem> for OrderLineView {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product().id().get(),
            product_name: item.product().name().to_string(),
            quantity: item.quantity(),
            line_total: item.line_total().minor(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: u64,
    pub kind: OrderKind,
    pub status: String,
    pub lines: Vec<OrderLineView>,
    pub total_quantity: u64,
    pub total_price: u64,
}

impl From<&Order> for OrderView {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id().get(),
            kind: o.kind(),
            status: o.status().to_string(),
            lines: o.items().iter().map(OrderLineView::from).collect(),
            total_quantity: o.total_quantity(),
            total_price: o.total_price().minor(),
        }
    }
}
