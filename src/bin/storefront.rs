//! Storefront Demo
//!
//! Walks the whole mock storefront flow from fixture data: browse the
//! catalog, sign in, fill the cart, adjust it and check out.
//!
//! Use `-f` to load a fixture set by name
//! Use `-e` / `-p` to override the mock sign-in credentials

use std::io;

use anyhow::Result;
use clap::Parser;

use vitrine::{
    cart::Cart,
    catalog::Catalog,
    fixtures::Fixture,
    orders::{Order, checkout},
    receipt::Receipt,
    session::Session,
    utils::StorefrontArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Demo output")]
pub fn main() -> Result<()> {
    let args = StorefrontArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let (catalog, mut history) = fixture.into_parts();

    println!("\nCatalog ({} products):", catalog.len());
    print_catalog(&catalog);

    let mut session = Session::new();
    let user = session.login(&args.email, &args.password)?;

    println!("\nSigned in as {} <{}>", user.name, user.email);

    let currency = catalog
        .currency()
        .ok_or_else(|| anyhow::anyhow!("fixture set {} has no products", args.fixture))?;

    let mut cart = Cart::new(pick_static_currency(currency)?);

    // Browse: take the two cheapest in-stock products, doubling up on the
    // first one so the duplicate-merge path shows on the receipt.
    let mut picks: Vec<_> = catalog.iter().filter(|p| p.in_stock()).collect();
    picks.sort_by_key(|p| p.price.to_minor_units());

    for (idx, product) in picks.iter().take(2).enumerate() {
        cart.add((*product).clone())?;

        if idx == 0 {
            cart.add((*product).clone())?;
        }
    }

    let receipt = Receipt::from_cart(&cart)?;
    receipt.write_to(io::stdout())?;

    let order = checkout(&mut cart, &session, &mut history)?;

    println!("Order {} placed ({})", order.id(), order.status());
    println!("\nOrder history ({} orders):", history.len());

    for order in history.iter() {
        print_order(order);
    }

    Ok(())
}

#[expect(clippy::print_stdout, reason = "Demo output")]
fn print_catalog(catalog: &Catalog<'_>) {
    let mut products: Vec<_> = catalog.iter().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));

    for product in products {
        let stock = match product.stock {
            Some(count) => count.to_string(),
            None => "-".to_string(),
        };

        let price = product.price.to_string();

        println!("  {:<28} {price:>12}  stock: {stock}", product.name);
    }
}

#[expect(clippy::print_stdout, reason = "Demo output")]
fn print_order(order: &Order<'_>) {
    println!(
        "  {}  {}  {}  {} lines, total {}",
        order.id(),
        order.created_at().format("%Y-%m-%d"),
        order.status(),
        order.lines().len(),
        order.total(),
    );
}

/// Maps a borrowed fixture currency back to its `'static` ISO entry so the
/// cart can be constructed from it.
fn pick_static_currency(
    currency: &rusty_money::iso::Currency,
) -> Result<&'static rusty_money::iso::Currency> {
    use rusty_money::iso::{BRL, EUR, GBP, USD};

    match currency.iso_alpha_code {
        "BRL" => Ok(BRL),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(anyhow::anyhow!("unsupported currency {other}")),
    }
}
