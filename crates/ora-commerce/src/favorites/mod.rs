//! Favorites, bookmarks and subscriptions.

mod toggle;

pub use toggle::{
    ToggleSet, DEFAULT_BOOKMARKS_KEY, DEFAULT_FAVORITES_KEY, DEFAULT_SUBSCRIPTIONS_KEY,
};
