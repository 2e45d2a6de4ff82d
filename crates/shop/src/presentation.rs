//! Human-readable and JSON rendering of shop entities.

use core::fmt::Write as _;

use serde::Serialize;

use charolis_core::{Entity, Money};
use charolis_products::Product;
use charolis_sales::Order;
use charolis_users::{User, UserKind};

use crate::config::OutputFormat;
use crate::dto::{OrderView, ProductView, UserView};

/// Renders read-only snapshots of entities.
#[derive(Debug, Clone)]
pub struct Presenter {
    format: OutputFormat,
    currency: String,
}

impl Presenter {
    pub fn new(format: OutputFormat, currency: impl Into<String>) -> Self {
        Self {
            format,
            currency: currency.into(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        format!("{}{}", self.currency, amount)
    }

    pub fn product(&self, product: &Product) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Json => json(&ProductView::from(product)),
            OutputFormat::Text => Ok(format!(
                "name: {}\ndesc: {}\nprice: {}\nstatus: {}",
                product.name(),
                product.description(),
                self.money(product.price()),
                if product.is_available() {
                    "available"
                } else {
                    "not available"
                }
            )),
        }
    }

    pub fn user(&self, user: &User) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Json => json(&UserView::from(user)),
            OutputFormat::Text => Ok(format!(
                "name: {}, email: {}, phone: {}, address: {}\n{}",
                user.name(),
                user.email(),
                user.phone(),
                user.address(),
                greeting(user)
            )),
        }
    }

    pub fn order(&self, order: &Order) -> serde_json::Result<String> {
        if self.format == OutputFormat::Json {
            return json(&OrderView::from(order));
        }

        let mut out = format!("order {} details:\n", order.id());
        for item in order.items() {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "product: {}, amount: {}, sum: {}",
                item.product().name(),
                item.quantity(),
                self.money(item.line_total())
            );
        }
        let _ = write!(
            out,
            "general amount: {}\ngeneral price: {}\nstatus: {}",
            order.total_quantity(),
            self.money(order.total_price()),
            order.status()
        );
        Ok(out)
    }
}

/// Per-kind line shown under a user's details.
pub fn greeting(user: &User) -> String {
    match user.kind() {
        UserKind::Administrator => format!("{} controls the shop", user.name()),
        UserKind::Registered => format!("welcome back, {}", user.name()),
        UserKind::Guest => format!("welcome, {}. Register to gain full access.", user.name()),
    }
}

fn json<T: Serialize>(view: &T) -> serde_json::Result<String> {
    serde_json::to_string(view)
}
