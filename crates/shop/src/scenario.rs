//! The shop walkthrough: build a catalog and user base, place orders, and
//! exercise every repository operation.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use charolis_core::{Entity, Money, OrderId, ProductId, UserId};
use charolis_events::Notifier;
use charolis_infra::{
    InMemoryRepository, ProductRepository, ProductRepositoryExt, Repository, UserRepository,
    UserRepositoryExt,
};
use charolis_products::Product;
use charolis_sales::Order;
use charolis_users::{ContactDetails, User};

use crate::presentation::Presenter;

/// State left behind by [`run`], for callers that want to inspect it.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub users: UserRepository,
    pub products: ProductRepository,
    pub orders: Vec<Order>,
}

pub fn seed_products() -> anyhow::Result<ProductRepository> {
    let products = InMemoryRepository::with_items([
        Product::new(
            ProductId::new(1),
            "magic wand",
            "wand, full of magic",
            Money::from_minor(7000),
            true,
        ),
        Product::new(
            ProductId::new(2),
            "magic scent",
            "magic desc",
            "49.99".parse()?,
            false,
        ),
    ])?;
    Ok(products)
}

pub fn seed_users() -> anyhow::Result<UserRepository> {
    let users = InMemoryRepository::with_items([
        User::administrator(
            UserId::new(1),
            "Laura",
            ContactDetails::new("alice@charolis.com", "123456789", "st. magic, 1"),
        ),
        User::registered(
            UserId::new(2),
            "Tony",
            ContactDetails::new("bob@charolis.com", "987654321", "sq. some, 2"),
        ),
        User::guest(UserId::new(3), "guest"),
    ])?;
    Ok(users)
}

/// Run the walkthrough, writing narration to `out` and status emails to `notifier`.
pub fn run<W, N>(out: &mut W, presenter: &Presenter, notifier: &N) -> anyhow::Result<ScenarioOutcome>
where
    W: Write,
    N: Notifier,
{
    let mut products = seed_products().context("seeding products")?;
    let mut users = seed_users().context("seeding users")?;

    let wand = Arc::new(
        products
            .read(ProductId::new(1))
            .cloned()
            .context("magic wand missing from catalog")?,
    );
    let scent = Arc::new(
        products
            .read(ProductId::new(2))
            .cloned()
            .context("magic scent missing from catalog")?,
    );

    writeln!(out, "{}\n", presenter.product(&wand)?)?;

    for user in users.read_all() {
        writeln!(out, "{}\n", presenter.user(user)?)?;
    }

    // Identity is unique per repository.
    if let Err(err) = users.create(User::guest(UserId::new(1), "impostor")) {
        writeln!(out, "rejected: {err}\n")?;
    }

    let matches: Vec<_> = users
        .users_by_email("ALICE@CHAROLIS.COM")
        .map(User::name)
        .collect();
    writeln!(out, "users with email ALICE@CHAROLIS.COM: {}\n", matches.join(", "))?;

    let mut first = Order::new(OrderId::new(101));
    first.add_item(Arc::clone(&wand), 2)?;
    if let Err(err) = first.add_item(Arc::clone(&scent), 1) {
        writeln!(out, "{err}")?;
    }
    writeln!(out, "{}\n", presenter.order(&first)?)?;

    if let Err(err) = first.update_status("shipped", notifier) {
        writeln!(out, "notification failed: {err}")?;
    }
    writeln!(out, "{}\n", presenter.order(&first)?)?;

    let mut second = Order::new(OrderId::new(102));
    second.add_item(Arc::clone(&wand), 1)?;
    writeln!(out, "{}\n", presenter.order(&second)?)?;

    // The scent comes back in stock; the catalog record is replaced, not mutated.
    products.set_availability(ProductId::new(2), true)?;
    let restocked = Arc::new(
        products
            .read(ProductId::new(2))
            .cloned()
            .context("magic scent missing from catalog")?,
    );
    second.add_item(restocked, 3)?;
    let available: Vec<_> = products.available_products().map(Product::name).collect();
    writeln!(out, "available products: {}", available.join(", "))?;

    // The wand sells out after being ordered; re-validate before committing.
    products.set_availability(ProductId::new(1), false)?;
    let stale = second.stale_items(|id| products.read(id));
    if !stale.is_empty() {
        let ids: Vec<_> = stale.iter().map(ToString::to_string).collect();
        writeln!(out, "order {} has unavailable products: {}", second.id(), ids.join(", "))?;
    }
    writeln!(out, "{}\n", presenter.order(&second)?)?;

    let mut tony = users
        .read(UserId::new(2))
        .cloned()
        .context("registered user missing")?;
    tony.set_contact(ContactDetails::new("tony@charolis.com", "987654321", "sq. other, 5"));
    users.update(tony)?;

    if let Err(err) = users.update(User::guest(UserId::new(99), "nobody")) {
        writeln!(out, "rejected: {err}")?;
    }

    if let Some(removed) = users.delete(UserId::new(3)) {
        writeln!(out, "removed user {}", removed.name())?;
    }
    // Deleting an unknown id is a no-op.
    users.delete(UserId::new(3));

    users.create(User::registered(
        UserId::new(0),
        "Mia",
        ContactDetails::new("mia@charolis.com", "555", "st. new, 7"),
    ))?;

    writeln!(out, "\nusers by id:")?;
    for user in users.sorted_by_id() {
        writeln!(out, "{}", presenter.user(user)?)?;
    }

    tracing::info!(
        users = users.len(),
        products = products.len(),
        "walkthrough finished"
    );

    Ok(ScenarioOutcome {
        users,
        products,
        orders: vec![first, second],
    })
}
