use serde::{Deserialize, Serialize};

use charolis_core::{Entity, Money, ProductId};

/// Catalog product.
///
/// Availability is the only field the shop flips at runtime; everything else
/// changes by replacing the record in its repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    available: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        available: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            available,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Check if product can be ordered right now.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
