use super::{Component, ComponentKind};

/// A named image asset.
///
/// Stores the name and extension separately so registries can key on the bare
/// name while draw commands carry the full file name. The pixel data itself
/// lives with whatever backend consumes the draw stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    name: String,
    extension: String,
}

impl Texture {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The on-disk file name, `name.extension`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl Component for Texture {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Texture
    }
}
