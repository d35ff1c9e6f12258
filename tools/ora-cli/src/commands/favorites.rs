//! Favorites, bookmarks and subscriptions.

use anyhow::{anyhow, Result};
use ora_cache::KeyValueStore;
use ora_commerce::catalog::{ItemKind, KindLookup, Storefront};
use ora_commerce::favorites::ToggleSet;
use ora_commerce::ItemId;

use super::{FavArgs, FavCommand, SetName};
use crate::context::Context;

/// Run the fav command.
pub fn run(args: FavArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let key = storage_key(args.set, ctx);
    let mut set = ToggleSet::load(ctx.store()?, key);

    match args.command {
        FavCommand::Toggle { id } => {
            let item = ItemId::new(id);
            let kind = storefront
                .kind_of(&item)
                .ok_or_else(|| anyhow!("Unknown item: {}", item))?;
            let title = storefront.title_of(&item).unwrap_or_default().to_string();

            if set.toggle(item) {
                ctx.output.success(&format!("Added {} {}", kind, title));
            } else {
                ctx.output.success(&format!("Removed {} {}", kind, title));
            }
            Ok(())
        }
        FavCommand::List { kind } => {
            let kind = kind
                .as_deref()
                .map(|k| {
                    ItemKind::from_str(k).ok_or_else(|| {
                        let known: Vec<&str> = ItemKind::ALL.iter().map(ItemKind::as_str).collect();
                        anyhow!("Unknown kind '{}'. Available: {}", k, known.join(", "))
                    })
                })
                .transpose()?;
            list(&set, kind, &storefront, ctx);
            Ok(())
        }
        FavCommand::Clear => {
            set.clear();
            ctx.output.success("Cleared");
            Ok(())
        }
    }
}

fn storage_key(set: SetName, ctx: &Context) -> &str {
    let storage = &ctx.config.storage;
    match set {
        SetName::Favorites => storage.favorites_key.as_str(),
        SetName::Bookmarks => storage.bookmarks_key.as_str(),
        SetName::Subscriptions => storage.subscriptions_key.as_str(),
    }
}

fn list<S: KeyValueStore>(
    set: &ToggleSet<S>,
    kind: Option<ItemKind>,
    storefront: &Storefront,
    ctx: &Context,
) {
    let ids: Vec<&ItemId> = match kind {
        Some(kind) => set.list_by_type(kind, storefront),
        None => set.ids().iter().collect(),
    };

    if ctx.output.is_json() {
        let entries: Vec<_> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "kind": storefront.kind_of(id),
                    "title": storefront.title_of(id),
                })
            })
            .collect();
        ctx.output.json(&entries);
        return;
    }

    if ids.is_empty() {
        ctx.output.info("Nothing here yet");
        return;
    }
    for id in ids {
        match (storefront.kind_of(id), storefront.title_of(id)) {
            (Some(kind), Some(title)) => {
                ctx.output.list_item(&format!("{:<10} {}  ({})", kind.as_str(), title, id))
            }
            _ => ctx
                .output
                .warn(&format!("{} is no longer in any catalog", id)),
        }
    }
}
