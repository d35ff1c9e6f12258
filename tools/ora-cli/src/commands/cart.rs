//! Artifact cart commands.

use anyhow::{anyhow, bail, Result};
use ora_cache::FileStore;
use ora_commerce::cart::Cart;
use ora_commerce::catalog::Storefront;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let mut cart = open_cart(ctx)?;

    match args.command {
        CartCommand::Add { id } => add(&mut cart, &storefront, &id, ctx),
        CartCommand::Inc { id, by } => adjust(&mut cart, &id, i64::from(by), ctx),
        CartCommand::Dec { id, by } => adjust(&mut cart, &id, -i64::from(by), ctx),
        CartCommand::Remove { id } => {
            if cart.remove(&id) {
                ctx.output.success(&format!("Removed {} from the cart", id));
            } else {
                ctx.output.warn(&format!("{} is not in the cart", id));
            }
            Ok(())
        }
        CartCommand::Show => show(&cart, &storefront, ctx),
        CartCommand::Clear => {
            cart.clear();
            ctx.output.success("Cart cleared");
            Ok(())
        }
    }
}

fn open_cart(ctx: &Context) -> Result<Cart<FileStore>> {
    let store = ctx.store()?;
    let currency = ctx.config.pricing.currency()?;
    Ok(Cart::load(store, ctx.config.storage.cart_key.as_str()).with_currency(currency))
}

fn add(cart: &mut Cart<FileStore>, storefront: &Storefront, id: &str, ctx: &Context) -> Result<()> {
    let artifact = storefront
        .artifacts
        .get(id)
        .ok_or_else(|| anyhow!("Unknown artifact: {}", id))?;
    if !artifact.is_purchasable() {
        bail!("{} is sold out", artifact.name);
    }

    let quantity = cart.add(id);
    ctx.output
        .success(&format!("{} in cart: {}", artifact.name, quantity));
    Ok(())
}

fn adjust(cart: &mut Cart<FileStore>, id: &str, delta: i64, ctx: &Context) -> Result<()> {
    if !cart.contains(id) {
        bail!("{} is not in the cart; use `ora cart add` first", id);
    }

    match cart.update_quantity(id, delta) {
        0 => ctx.output.success(&format!("Removed {} from the cart", id)),
        quantity => ctx.output.success(&format!("{} in cart: {}", id, quantity)),
    }
    Ok(())
}

fn show(cart: &Cart<FileStore>, storefront: &Storefront, ctx: &Context) -> Result<()> {
    let summary = cart.summary(storefront);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "entries": cart.entries(),
            "count": cart.total_count(),
            "summary": summary,
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("The cart is empty");
        return Ok(());
    }

    for line in &summary.lines {
        let title = storefront.title_of(&line.item_id).unwrap_or("?");
        ctx.output.list_item(&format!(
            "{} × {} = {}  ({})",
            title, line.quantity, line.subtotal, line.item_id
        ));
    }
    for id in &summary.unpriced {
        ctx.output
            .warn(&format!("{} has no price in {} and is left out", id, cart.currency()));
    }

    ctx.output.kv("items", &cart.total_count().to_string());
    ctx.output.kv("total", &summary.total.to_string());
    Ok(())
}
