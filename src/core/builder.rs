//! Manifest building
//!
//! This module provides the [`ManifestBuilder`], which loads the three input
//! files and joins the order entries against the catalog.
//!
//! The builder is responsible for:
//! - Loading the catalog (normalized once, up front)
//! - Loading the business info and the order description
//! - Resolving each order entry to a priced [`LineItem`]
//! - Formatting the order number
//!
//! Any failure aborts the build; a partial [`Manifest`] is never returned.

use crate::io::{load_business_info, load_catalog, load_order_description};
use crate::io::{OrderDescription, OrderEntry};
use crate::types::{
    format_catalog_no, format_order_no, BusinessInfo, Catalog, LineItem, Manifest, SlipError,
    TITLE_COLUMN, UNIT_PRICE_COLUMN, UNTITLED,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Locations of the three input files
///
/// Defaults are supplied by the caller (see `cli::CliArgs::to_sources`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSources {
    /// Tab-separated product catalog
    pub catalog: PathBuf,

    /// Business-info document
    pub business_info: PathBuf,

    /// Order description document
    pub order: PathBuf,
}

impl ManifestSources {
    /// All input paths, for existence checks
    pub fn paths(&self) -> [&PathBuf; 3] {
        [&self.catalog, &self.business_info, &self.order]
    }
}

/// Builds a [`Manifest`] from its input files
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    sources: ManifestSources,
}

impl ManifestBuilder {
    pub fn new(sources: ManifestSources) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &ManifestSources {
        &self.sources
    }

    /// Load all inputs and resolve the order
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be read or parsed, if a required
    /// key is missing, if a numeric field is invalid, or if an order entry
    /// references a catalog number that does not exist.
    pub fn build(&self) -> Result<Manifest, SlipError> {
        let catalog = load_catalog(&self.sources.catalog)?;
        let business_info = load_business_info(&self.sources.business_info)?;
        let order = load_order_description(&self.sources.order)?;

        assemble(&catalog, business_info, order)
    }
}

/// Join an order description against the catalog
pub fn assemble(
    catalog: &Catalog,
    business_info: BusinessInfo,
    order: OrderDescription,
) -> Result<Manifest, SlipError> {
    let items = order
        .manifest
        .iter()
        .map(|entry| resolve_entry(catalog, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest {
        items,
        bill_to: order.bill_to,
        ship_to: order.ship_to,
        order_no: format_order_no(order.order_no),
        order_date: order.order_date.to_string(),
        business_info,
    })
}

/// Resolve one order entry to a priced line item
///
/// The entry's numeric catalog number is formatted as `MSM-%05d` and matched
/// against the first catalog record with that code.
pub fn resolve_entry(catalog: &Catalog, entry: &OrderEntry) -> Result<LineItem, SlipError> {
    let catalog_no = format_catalog_no(entry.catalog_no);

    let record = catalog
        .find(&catalog_no)
        .ok_or_else(|| SlipError::unresolved_reference(&catalog_no))?;

    let quantity = entry
        .qty
        .to_count()
        .ok_or_else(|| SlipError::invalid_number("qty", &entry.qty.to_string(), &catalog_no))?;

    let raw_price = record
        .get(UNIT_PRICE_COLUMN)
        .ok_or_else(|| SlipError::missing_field(&catalog_no, UNIT_PRICE_COLUMN))?;
    let unit_price = Decimal::from_str(raw_price.trim())
        .ok()
        .filter(|price| !price.is_sign_negative())
        .ok_or_else(|| SlipError::invalid_number(UNIT_PRICE_COLUMN, raw_price, &catalog_no))?;

    let name = record.get(TITLE_COLUMN).unwrap_or(UNTITLED).to_string();

    log::debug!(
        "Resolved {} as '{}' ({} x {})",
        catalog_no,
        name,
        quantity,
        unit_price
    );

    Ok(LineItem {
        name,
        catalog_no,
        quantity,
        unit_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{Quantity, ScalarText};
    use crate::types::{CatalogRecord, CATALOG_NO_COLUMN};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn record(catalog_no: &str, title: &str, price: &str) -> CatalogRecord {
        CatalogRecord::from_fields([
            (CATALOG_NO_COLUMN, catalog_no),
            (TITLE_COLUMN, title),
            (UNIT_PRICE_COLUMN, price),
        ])
    }

    fn entry(catalog_no: u32, qty: Quantity) -> OrderEntry {
        OrderEntry { catalog_no, qty }
    }

    fn business_info() -> BusinessInfo {
        BusinessInfo {
            name: "Magenta Stripe Media".to_string(),
            address: "PO Box 1\nSpringfield".to_string(),
            signoff: "Thanks!".to_string(),
        }
    }

    fn order(entries: Vec<OrderEntry>, order_no: u64) -> OrderDescription {
        OrderDescription {
            manifest: entries,
            bill_to: "Jane Doe".to_string(),
            ship_to: "John Doe".to_string(),
            order_no,
            order_date: ScalarText::Text("2024-01-01".to_string()),
        }
    }

    #[test]
    fn test_resolves_formatted_catalog_no() {
        let catalog = Catalog::new(vec![record("MSM-00042", "Answer", "4.20")]);

        let item = resolve_entry(&catalog, &entry(42, Quantity::Count(1))).unwrap();
        assert_eq!(item.catalog_no, "MSM-00042");
        assert_eq!(item.name, "Answer");
        assert_eq!(item.unit_price, Decimal::new(420, 2));
    }

    #[test]
    fn test_resolves_numeric_catalog_entries() {
        let catalog = Catalog::new(vec![record("42", "Answer", "4.20")]);

        let item = resolve_entry(&catalog, &entry(42, Quantity::Count(1))).unwrap();
        assert_eq!(item.catalog_no, "MSM-00042");
    }

    #[test]
    fn test_unresolved_reference_fails() {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", "10.00")]);

        let result = resolve_entry(&catalog, &entry(2, Quantity::Count(1)));
        assert_eq!(result, Err(SlipError::unresolved_reference("MSM-00002")));
    }

    #[test]
    fn test_missing_title_is_untitled() {
        let catalog = Catalog::new(vec![CatalogRecord::from_fields([
            (CATALOG_NO_COLUMN, "MSM-00001"),
            (UNIT_PRICE_COLUMN, "1.00"),
        ])]);

        let item = resolve_entry(&catalog, &entry(1, Quantity::Count(1))).unwrap();
        assert_eq!(item.name, UNTITLED);
    }

    #[test]
    fn test_missing_price_fails() {
        let catalog = Catalog::new(vec![CatalogRecord::from_fields([
            (CATALOG_NO_COLUMN, "MSM-00001"),
            (TITLE_COLUMN, "Widget"),
        ])]);

        let result = resolve_entry(&catalog, &entry(1, Quantity::Count(1)));
        assert_eq!(
            result,
            Err(SlipError::missing_field("MSM-00001", UNIT_PRICE_COLUMN))
        );
    }

    #[rstest]
    #[case::words("ten")]
    #[case::negative("-1.00")]
    #[case::currency_sign("$1.00")]
    #[case::empty("")]
    fn test_invalid_price_fails(#[case] price: &str) {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", price)]);

        let result = resolve_entry(&catalog, &entry(1, Quantity::Count(1)));
        assert!(matches!(result, Err(SlipError::InvalidNumber { .. })));
    }

    #[rstest]
    #[case::negative(Quantity::Count(-2))]
    #[case::words(Quantity::Text("two".to_string()))]
    fn test_invalid_quantity_fails(#[case] qty: Quantity) {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", "10.00")]);

        let result = resolve_entry(&catalog, &entry(1, qty));
        assert!(matches!(
            result,
            Err(SlipError::InvalidNumber { ref field, .. }) if field == "qty"
        ));
    }

    #[rstest]
    #[case(Quantity::Count(3), 3)]
    #[case(Quantity::Text("3".to_string()), 3)]
    fn test_quantity_forms(#[case] qty: Quantity, #[case] expected: u32) {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", "10.00")]);

        let item = resolve_entry(&catalog, &entry(1, qty)).unwrap();
        assert_eq!(item.quantity, expected);
    }

    #[test]
    fn test_assemble_single_widget() {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", "10.00")]);

        let manifest = assemble(
            &catalog,
            business_info(),
            order(vec![entry(1, Quantity::Count(3))], 5),
        )
        .unwrap();

        assert_eq!(manifest.items.len(), 1);
        assert_eq!(manifest.items[0].name, "Widget");
        assert_eq!(manifest.items[0].unit_price, Decimal::new(1000, 2));
        assert_eq!(manifest.items[0].quantity, 3);
        assert_eq!(manifest.order_no, "00000005");
        assert_eq!(manifest.order_date, "2024-01-01");
        assert_eq!(manifest.business_info, business_info());
    }

    #[test]
    fn test_assemble_preserves_order_entry_order() {
        let catalog = Catalog::new(vec![
            record("MSM-00001", "A", "1.00"),
            record("MSM-00002", "B", "2.00"),
            record("MSM-00003", "C", "3.00"),
        ]);

        let manifest = assemble(
            &catalog,
            business_info(),
            order(
                vec![
                    entry(3, Quantity::Count(1)),
                    entry(1, Quantity::Count(1)),
                    entry(2, Quantity::Count(1)),
                    entry(1, Quantity::Count(2)),
                ],
                1,
            ),
        )
        .unwrap();

        let names: Vec<_> = manifest.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B", "A"]);
    }

    #[test]
    fn test_assemble_fails_without_partial_manifest() {
        let catalog = Catalog::new(vec![record("MSM-00001", "Widget", "10.00")]);

        let result = assemble(
            &catalog,
            business_info(),
            order(
                vec![entry(1, Quantity::Count(1)), entry(9, Quantity::Count(1))],
                1,
            ),
        );
        assert_eq!(result, Err(SlipError::unresolved_reference("MSM-00009")));
    }

    #[test]
    fn test_builder_loads_files() {
        let dir = TempDir::new().unwrap();
        let sources = ManifestSources {
            catalog: dir.path().join("catalog.tsv"),
            business_info: dir.path().join("business.yaml"),
            order: dir.path().join("order.yaml"),
        };
        fs::write(
            &sources.catalog,
            "CATALOG-NO\tTITLE\tUNIT-PRICE\nMSM-00001\tWidget\t10.00\n",
        )
        .unwrap();
        fs::write(
            &sources.business_info,
            "name: Shop\naddress: 1 Road\nsignoff: Bye\n",
        )
        .unwrap();
        fs::write(
            &sources.order,
            "manifest:\n  - catalog_no: 1\n    qty: 2\nbill_to: A\nship_to: B\norder_no: 7\norder_date: 2024-02-02\n",
        )
        .unwrap();

        let manifest = ManifestBuilder::new(sources).build().unwrap();
        assert_eq!(manifest.order_no, "00000007");
        assert_eq!(manifest.items[0].quantity, 2);
        assert_eq!(manifest.business_info.name, "Shop");
    }

    #[test]
    fn test_builder_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let sources = ManifestSources {
            catalog: dir.path().join("missing.tsv"),
            business_info: dir.path().join("business.yaml"),
            order: dir.path().join("order.yaml"),
        };

        let result = ManifestBuilder::new(sources).build();
        assert!(matches!(result, Err(SlipError::FileNotFound { .. })));
    }
}
