//! Read access to the product catalogue.
//!
//! The `Catalog` trait is the engine's only view of stored products. It is
//! passed into the pipeline explicitly; nothing in the engine caches it.

use crate::{Budget, Product, ProductError};

/// Read-only access to catalogue products.
///
/// Implementers typically front a database query. Results must come back in
/// a stable catalogue order, since ranking falls back to that order to break
/// exact ties.
///
/// # Examples
///
/// ```rust
/// use configurator_core::{Budget, Catalog, Product};
///
/// struct Shelf {
///     products: Vec<Product>,
/// }
///
/// impl Catalog for Shelf {
///     fn products_in_budget(
///         &self,
///         budget: &Budget,
///     ) -> Box<dyn Iterator<Item = Product> + Send + '_> {
///         let budget = *budget;
///         Box::new(
///             self.products
///                 .iter()
///                 .filter(move |p| budget.contains(p.price))
///                 .cloned(),
///         )
///     }
/// }
///
/// let shelf = Shelf {
///     products: vec![Product::new("a", "A", "office", 100)],
/// };
/// let budget = Budget::new(50.0, 150.0).unwrap();
/// assert_eq!(shelf.products_in_budget(&budget).count(), 1);
/// ```
pub trait Catalog {
    /// Return every product priced within `budget`, in catalogue order.
    ///
    /// Containment includes both bounds.
    fn products_in_budget(&self, budget: &Budget) -> Box<dyn Iterator<Item = Product> + Send + '_>;
}

/// Catalogue held in memory, validated on construction.
///
/// The store performs a linear scan. Hosts load it once per catalogue
/// snapshot and hand it to the recommender.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Validate every product and build the catalogue.
    ///
    /// # Errors
    /// Propagates the first [`ProductError`] found, unchanged.
    pub fn new(products: Vec<Product>) -> Result<Self, ProductError> {
        for product in &products {
            product.validate()?;
        }
        Ok(Self { products })
    }

    /// Products in catalogue order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn products_in_budget(&self, budget: &Budget) -> Box<dyn Iterator<Item = Product> + Send + '_> {
        let bounds = *budget;
        Box::new(
            self.products
                .iter()
                .filter(move |p| bounds.contains(p.price))
                .cloned(),
        )
    }
}
