// Supplier directory widget
use crate::application::registry::CustomComponent;
use crate::domain::config::AppConfig;
use crate::domain::fragment::Fragment;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub contact: String,
}

impl Supplier {
    pub fn new(id: u32, name: &str, location: &str, contact: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
            contact: contact.to_string(),
        }
    }
}

/// The `supplierDatabase` tab override: a read-only table of the tenant's
/// accommodation suppliers.
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self { suppliers }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }
}

#[async_trait]
impl CustomComponent for SupplierDirectory {
    async fn render(&self, _config: &AppConfig) -> Fragment {
        Fragment::section(
            "Supplier Database",
            vec![Fragment::Table {
                headers: vec![
                    "Name".to_string(),
                    "Location".to_string(),
                    "Contact".to_string(),
                ],
                rows: self
                    .suppliers
                    .iter()
                    .map(|s| vec![s.name.clone(), s.location.clone(), s.contact.clone()])
                    .collect(),
            }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_renders_one_row_per_supplier() {
        let config = crate::tenant::app_config();
        let directory = SupplierDirectory::new(crate::tenant::suppliers());

        let fragment = directory.render(&config).await;
        let Fragment::Section { children, .. } = &fragment else {
            panic!("expected a section");
        };
        let Fragment::Table { headers, rows } = &children[0] else {
            panic!("expected a table");
        };

        assert_eq!(headers, &["Name", "Location", "Contact"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "Crystal Property Shortlets");
        assert_eq!(rows[1][1], "Manchester");
    }

    #[tokio::test]
    async fn test_empty_directory_renders_empty_table() {
        let config = crate::tenant::app_config();
        let directory = SupplierDirectory::new(Vec::new());

        let fragment = directory.render(&config).await;
        assert!(fragment.contains_text("Supplier Database"));
        assert!(!fragment.contains_text("Maison"));
    }
}
