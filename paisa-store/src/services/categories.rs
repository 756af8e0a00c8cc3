//! Category list management.

use anyhow::Result;
use paisa_core::{Category, category_color, default_categories};
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct CategoryService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> CategoryService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Stored categories; an empty store reads as the five defaults
    pub fn list(&self) -> Vec<Category> {
        let stored: Vec<Category> = read_list(self.store, keys::CATEGORIES);
        if stored.is_empty() {
            default_categories()
        } else {
            stored
        }
    }

    /// Persist the default set, used by first-run setup
    pub fn seed_defaults(&self) -> Result<()> {
        write_list(self.store, keys::CATEGORIES, &default_categories())
    }

    pub fn add(&self, name: &str, icon: &str) -> Result<Category> {
        let category = Category::new(
            Uuid::new_v4().to_string(),
            name,
            category_color(name),
            icon,
        );
        let mut all = self.list();
        all.push(category.clone());
        write_list(self.store, keys::CATEGORIES, &all)?;
        Ok(category)
    }

    pub fn rename(&self, id: &str, new_name: &str) -> Result<bool> {
        let mut all = self.list();
        let Some(cat) = all.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        cat.name = new_name.to_string();
        write_list(self.store, keys::CATEGORIES, &all)?;
        Ok(true)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|c| c.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::CATEGORIES, &all)?;
        Ok(true)
    }
}
