//! Product and issue label catalogs.
//!
//! Both catalogs are plain JSON string arrays in the data directory. Any
//! read or parse failure degrades to an empty list with a logged warning;
//! the annotation core works fine with free-form labels.

use std::path::Path;

use crate::constants::{ISSUES_FILE, PRODUCTS_FILE};

/// Label lists offered to the user when tagging an export.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Known product names
    pub products: Vec<String>,
    /// Known issue labels
    pub issues: Vec<String>,
}

impl Catalog {
    /// Load both catalogs from the data directory.
    pub fn load(data_dir: &Path) -> Self {
        Self {
            products: load_list(&data_dir.join(PRODUCTS_FILE)),
            issues: load_list(&data_dir.join(ISSUES_FILE)),
        }
    }

    /// Check whether a product name is present in the catalog.
    pub fn has_product(&self, name: &str) -> bool {
        self.products.iter().any(|p| p == name)
    }

    /// Check whether an issue label is present in the catalog.
    pub fn has_issue(&self, name: &str) -> bool {
        self.issues.iter().any(|i| i == name)
    }
}

fn load_list(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<Vec<String>>(&json) {
            Ok(list) => {
                log::debug!("Loaded {} entries from {:?}", list.len(), path);
                list
            }
            Err(e) => {
                log::warn!("Failed to parse catalog {:?}: {}", path, e);
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("Failed to read catalog {:?}: {}", path, e);
            Vec::new()
        }
    }
}
