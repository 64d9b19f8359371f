use serde::{Deserialize, Serialize};

/// One selectable catalog entry: an icon plus three text lines.
///
/// Items are passive records. They are not mutated after construction and
/// carry no identity of their own; the selector tracks them by position in
/// the collection it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Icon URL shown on the tile.
    pub icon: String,
    pub name: String,
    pub attribute1: String,
    pub attribute2: String,
}

impl Item {
    pub fn new(
        icon: impl Into<String>,
        name: impl Into<String>,
        attribute1: impl Into<String>,
        attribute2: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            attribute1: attribute1.into(),
            attribute2: attribute2.into(),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            icon: "http://sites.google.com/site/bananainblack/pic/avatar/hanged_banana.jpg"
                .to_string(),
            name: "Banana".to_string(),
            attribute1: "This is a banana.".to_string(),
            attribute2: "A real, banana.".to_string(),
        }
    }
}
