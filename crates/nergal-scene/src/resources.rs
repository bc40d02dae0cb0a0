//! Shared asset storage.

use std::collections::HashMap;

use nergal_memory::SharedHandle;

use crate::component::Texture;

/// Keeps one shared handle per loaded asset, keyed by bare name.
///
/// Loading the same name twice hands out the same underlying asset, and
/// unloading only drops the registry's share: actors holding the texture keep
/// it alive until the last of them lets go.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    textures: HashMap<String, SharedHandle<Texture>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// The texture named `name`, loading it on first request.
    pub fn load_texture(&mut self, name: &str, extension: &str) -> SharedHandle<Texture> {
        if let Some(existing) = self.textures.get(name) {
            return existing.clone();
        }

        let handle = SharedHandle::new(Texture::new(name, extension));
        log::debug!("loaded texture '{name}.{extension}'");
        self.textures.insert(name.to_owned(), handle.clone());
        handle
    }

    /// An already-loaded texture, shared. Null handle when `name` was never
    /// loaded (or has been unloaded).
    pub fn texture(&self, name: &str) -> SharedHandle<Texture> {
        match self.textures.get(name) {
            Some(handle) => handle.clone(),
            None => SharedHandle::null(),
        }
    }

    /// Drops the registry's share of `name`. Returns whether anything was
    /// loaded under that name.
    pub fn unload_texture(&mut self, name: &str) -> bool {
        let unloaded = self.textures.remove(name).is_some();
        if unloaded {
            log::debug!("unloaded texture '{name}'");
        }
        unloaded
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_twice_shares_one_asset() {
        let mut registry = ResourceRegistry::new();
        let first = registry.load_texture("Map002", "png");
        let second = registry.load_texture("Map002", "png");

        assert!(first.ptr_eq(&second));
        assert_eq!(registry.len(), 1);
        // Registry plus the two handles above.
        assert_eq!(first.strong_count(), 3);
    }

    #[test]
    fn lookup_shares_the_loaded_asset() {
        let mut registry = ResourceRegistry::new();
        let loaded = registry.load_texture("Playa2", "png");

        let found = registry.texture("Playa2");
        assert!(found.ptr_eq(&loaded));
        assert_eq!(found.file_name(), "Playa2.png");
    }

    #[test]
    fn unknown_lookup_is_a_null_handle() {
        let registry = ResourceRegistry::new();
        assert!(registry.texture("Nowhere").is_null());
    }

    #[test]
    fn unload_keeps_outside_handles_alive() {
        let mut registry = ResourceRegistry::new();
        let held = registry.load_texture("Map002", "png");
        assert_eq!(held.strong_count(), 2);

        assert!(registry.unload_texture("Map002"));
        assert_eq!(held.strong_count(), 1);
        assert_eq!(held.name(), "Map002");
        assert!(registry.texture("Map002").is_null());
    }

    #[test]
    fn unload_of_an_unknown_name_reports_false() {
        let mut registry = ResourceRegistry::new();
        assert!(!registry.unload_texture("Nowhere"));
    }
}
