//! Closed classification enumerations shared by the catalogs.
//!
//! Every attribute has a stable wire value (`as_str`, used in filter state
//! and persisted data) and a human-readable label (`label`, display only).

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed enumeration usable as a filter facet.
pub trait Attribute: Copy + Eq + 'static {
    /// Name of the attribute, used in error messages.
    const NAME: &'static str;

    /// Every value, in display order.
    fn all() -> &'static [Self];

    /// Stable wire value.
    fn as_str(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Look up a value by its wire form.
    fn lookup(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }

    /// Label for a wire value, if it belongs to this enumeration.
    fn label_of(value: &str) -> Option<&'static str> {
        Self::lookup(value).map(|v| v.label())
    }
}

macro_rules! define_attribute {
    (
        $(#[$meta:meta])*
        $name:ident, $attr:literal {
            $($variant:ident => $value:literal, $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Attribute for $name {
            const NAME: &'static str = $attr;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn label(&self) -> &'static str {
                $name::label(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CommerceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Attribute>::lookup(s).ok_or_else(|| CommerceError::UnknownVariant {
                    kind: $attr,
                    value: s.to_string(),
                })
            }
        }
    };
}

define_attribute!(
    /// School of practice a course, artifact or teacher belongs to.
    MagicDirection, "direction" {
        Kabbalah => "kabbalah", "Каббала",
        Astrology => "astrology", "Астрология",
        Tarot => "tarot", "Таро",
        Alchemy => "alchemy", "Алхимия",
        Runes => "runes", "Руны",
        Hermetics => "hermetics", "Герметизм",
        Numerology => "numerology", "Нумерология",
    }
);

define_attribute!(
    /// Difficulty level.
    Level, "level" {
        Beginner => "beginner", "Начальный",
        Intermediate => "intermediate", "Средний",
        Advanced => "advanced", "Продвинутый",
    }
);

define_attribute!(
    /// How a course is delivered.
    CourseFormat, "format" {
        Online => "online", "Онлайн",
        Offline => "offline", "Очно",
        Hybrid => "hybrid", "Смешанный",
    }
);

define_attribute!(
    JewelryType, "jewelry_type" {
        Ring => "ring", "Кольцо",
        Pendant => "pendant", "Кулон",
        Amulet => "amulet", "Амулет",
        Bracelet => "bracelet", "Браслет",
        Earrings => "earrings", "Серьги",
        Talisman => "talisman", "Талисман",
    }
);

define_attribute!(
    Stone, "stone" {
        Amethyst => "amethyst", "Аметист",
        Garnet => "garnet", "Гранат",
        Moonstone => "moonstone", "Лунный камень",
        Obsidian => "obsidian", "Обсидиан",
        Quartz => "quartz", "Горный хрусталь",
        Lapis => "lapis", "Лазурит",
        Malachite => "malachite", "Малахит",
        Onyx => "onyx", "Оникс",
    }
);

define_attribute!(
    Material, "material" {
        Silver => "silver", "Серебро",
        Gold => "gold", "Золото",
        Bronze => "bronze", "Бронза",
        Copper => "copper", "Медь",
    }
);

define_attribute!(
    /// Stock state of an artifact.
    Availability, "availability" {
        InStock => "in_stock", "В наличии",
        Preorder => "preorder", "Под заказ",
        SoldOut => "sold_out", "Нет в наличии",
    }
);

define_attribute!(
    BlogCategory, "category" {
        Practice => "practice", "Практика",
        Theory => "theory", "Теория",
        History => "history", "История",
        News => "news", "Новости",
    }
);

define_attribute!(
    /// Medium of a library item.
    LibraryFormat, "format" {
        Book => "book", "Книга",
        Article => "article", "Статья",
        Video => "video", "Видео",
        Audio => "audio", "Аудио",
    }
);

define_attribute!(
    Access, "access" {
        Free => "free", "Бесплатно",
        Premium => "premium", "Премиум",
    }
);

define_attribute!(
    /// Where a student is in an enrolled course.
    ProgressStatus, "status" {
        NotStarted => "not_started", "Не начат",
        InProgress => "in_progress", "В процессе",
        Completed => "completed", "Завершён",
    }
);
