//! Launcher result records: one `Item` per transformation, wrapped in `Items` for output.

use serde::Serialize;

use crate::core::app;

/// Icon reference, serialized as `{"path": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

/// Structured outcome of one transformation, as read by the launcher UI.
///
/// `title`, `subtitle` and `icon` are displayed; `arg` is what the launcher
/// acts on when the item is selected, and only if `valid` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub valid: bool,
    pub uid: String,
    pub icon: Icon,
    pub arg: String,
}

impl Item {
    /// Build an item. `icon` of `None` uses the default workflow icon.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        arg: impl Into<String>,
        valid: bool,
        uid: impl Into<String>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            valid,
            uid: uid.into(),
            icon: Icon {
                path: icon.unwrap_or(app::DEFAULT_ICON).to_string(),
            },
            arg: arg.into(),
        }
    }
}

/// Script filter envelope: `{"items": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Items {
    pub items: Vec<Item>,
}

impl Items {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Items {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
