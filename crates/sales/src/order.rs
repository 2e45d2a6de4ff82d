use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use charolis_core::{DomainError, DomainResult, Entity, Money, OrderId, ProductId};
use charolis_events::Notifier;
use charolis_products::Product;

/// Order status.
///
/// Statuses are open-ended strings: any caller-supplied value is a valid target
/// and no transition table is enforced. Every order starts as [`OrderStatus::NEW`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(Cow<'static, str>);

impl OrderStatus {
    pub const NEW: OrderStatus = OrderStatus(Cow::Borrowed("new"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::NEW
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for OrderStatus {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Order variant. Only standard orders exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    Standard,
}

/// Order line: a shared product plus a positive quantity.
///
/// The product is shared, not owned: the order keeps the product as it was when
/// the line was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    product: Arc<Product>,
    quantity: u32,
    line_total: Money,
}

impl OrderItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity, computed once when the line is added.
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

/// Aggregate root: Order.
///
/// # Invariants
/// - Lines are kept in insertion order.
/// - A line is only added while its product is available; availability is not
///   re-checked afterwards (see [`Order::stale_items`]).
/// - Totals are derived from the lines on every read, and the price total of all
///   lines always fits in [`Money`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    kind: OrderKind,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId) -> Self {
        Self::with_kind(id, OrderKind::Standard)
    }

    pub fn with_kind(id: OrderId, kind: OrderKind) -> Self {
        Self {
            id,
            kind,
            items: Vec::new(),
            status: OrderStatus::NEW,
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> Money {
        // add_item rejects any line that would push this sum out of range.
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(Money::ZERO, Money::saturating_add)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Append a line for `product`.
    ///
    /// Rejects a zero quantity, refuses products that are not available right
    /// now and refuses lines whose price would overflow the order total. A
    /// refused call leaves the order untouched.
    pub fn add_item(&mut self, product: impl Into<Arc<Product>>, quantity: u32) -> DomainResult<()> {
        let product = product.into();

        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }

        if !product.is_available() {
            tracing::warn!(
                order_id = %self.id,
                product_id = %product.id(),
                "product \"{}\" is not available",
                product.name()
            );
            return Err(DomainError::unavailable(product.name()));
        }

        let line_total = product
            .price()
            .checked_mul(quantity)
            .filter(|line| self.total_price().checked_add(*line).is_some())
            .ok_or_else(|| {
                DomainError::overflow(format!(
                    "{} × {} does not fit in order {}",
                    product.price(),
                    quantity,
                    self.id
                ))
            })?;

        tracing::debug!(
            order_id = %self.id,
            product_id = %product.id(),
            quantity,
            "order line added"
        );
        self.items.push(OrderItem {
            product,
            quantity,
            line_total,
        });
        Ok(())
    }

    /// Set the status and tell the customer about it.
    ///
    /// The status change stands even when delivery fails; the delivery error is
    /// handed back to the caller.
    pub fn update_status<N>(&mut self, status: impl Into<OrderStatus>, notifier: &N) -> Result<(), N::Error>
    where
        N: Notifier + ?Sized,
    {
        let previous = core::mem::replace(&mut self.status, status.into());
        tracing::info!(
            order_id = %self.id,
            from = %previous,
            to = %self.status,
            "order status updated"
        );

        let message = format!("status of your request has been updated: {}", self.status);
        notifier.notify(&message).inspect_err(|err| {
            tracing::warn!(order_id = %self.id, error = %err, "status notification failed");
        })
    }

    /// Products whose lines would no longer be accepted.
    ///
    /// `current` resolves a product id to its present state; a product that is
    /// gone or no longer available is reported. Use before committing an order
    /// that has been sitting around.
    pub fn stale_items<'a, F>(&self, current: F) -> Vec<ProductId>
    where
        F: Fn(ProductId) -> Option<&'a Product>,
    {
        self.items
            .iter()
            .map(|item| item.product.id())
            .filter(|id| !current(*id).is_some_and(Product::is_available))
            .collect()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
