//! Catalogue products as seen by the recommendation engine.
//!
//! Products are read-only during a recommendation run. The catalogue owns
//! them; the engine only clones what it returns.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Specs;

/// Highest average a rating may carry.
pub const MAX_RATING: f32 = 5.0;

/// Aggregated customer reviews for a product.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rating {
    /// Mean star rating in `0.0..=5.0`.
    pub average: f32,
    /// Number of reviews behind the average.
    pub count: u32,
}

impl Rating {
    /// Construct a rating without validation.
    #[must_use]
    pub const fn new(average: f32, count: u32) -> Self {
        Self { average, count }
    }
}

/// An item sold by the store.
///
/// Prices are whole CFA francs (XOF).
///
/// # Examples
/// ```
/// use configurator_core::{Product, Rating, SpecKey};
///
/// let product = Product::new("pc-1", "Tour Bureau", "office", 400_000)
///     .with_spec(SpecKey::Ram, 8)
///     .with_rating(Rating::new(4.2, 31))
///     .with_stock(5);
///
/// assert_eq!(product.price, 400_000);
/// assert!(product.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Product {
    /// Catalogue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalogue category, e.g. `gaming`, `office` or `desktop`.
    pub category: String,
    /// Selling price in XOF.
    pub price: u64,
    /// Reference price shown struck through when discounted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub compare_price: Option<u64>,
    /// Units on hand.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock: u32,
    /// Hardware attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub specs: Specs,
    /// Customer review summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Rating,
    /// Free-form merchandising labels such as `gaming`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: BTreeSet<String>,
}

/// Data-integrity faults reported by [`Product::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The identifier was blank.
    #[error("product identifier must not be empty")]
    EmptyId,
    /// The category was blank.
    #[error("product {id} has an empty category")]
    EmptyCategory {
        /// Identifier of the affected product.
        id: String,
    },
    /// The rating average was not a finite value in `0.0..=5.0`.
    #[error("product {id} has rating average {average} outside 0-5")]
    InvalidRating {
        /// Identifier of the affected product.
        id: String,
        /// Offending average.
        average: f32,
    },
    /// The compare price undercut the selling price.
    #[error("product {id} compare price {compare_price} is below its price {price}")]
    ComparePriceBelowPrice {
        /// Identifier of the affected product.
        id: String,
        /// Selling price.
        price: u64,
        /// Reference price.
        compare_price: u64,
    },
}

impl Product {
    /// Construct a product with no specs, reviews, stock or tags.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            compare_price: None,
            stock: 0,
            specs: Specs::new(),
            rating: Rating::default(),
            tags: BTreeSet::new(),
        }
    }

    /// Set a spec value while returning `self` for chaining.
    #[must_use]
    pub fn with_spec(mut self, key: crate::SpecKey, value: u32) -> Self {
        self.specs.set(key, value);
        self
    }

    /// Replace the rating while returning `self` for chaining.
    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Replace the stock level while returning `self` for chaining.
    #[must_use]
    pub const fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the compare price while returning `self` for chaining.
    #[must_use]
    pub const fn with_compare_price(mut self, compare_price: u64) -> Self {
        self.compare_price = Some(compare_price);
        self
    }

    /// Add a merchandising tag while returning `self` for chaining.
    ///
    /// Tags are stored lowercase.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_lowercase());
        self
    }

    /// Report whether the product carries `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whole-percent discount against the compare price, rounded down.
    ///
    /// Returns `None` when there is no compare price or it does not exceed
    /// the selling price.
    ///
    /// # Examples
    /// ```
    /// use configurator_core::Product;
    ///
    /// let product = Product::new("x", "X", "office", 850).with_compare_price(1_000);
    /// assert_eq!(product.discount_percent(), Some(15));
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "discount badges show whole percentages rounded down"
    )]
    pub fn discount_percent(&self) -> Option<u64> {
        let compare = self.compare_price?;
        if compare <= self.price {
            return None;
        }
        let saved = compare.saturating_sub(self.price);
        Some(saved.saturating_mul(100) / compare)
    }

    /// Check the record for data-integrity faults.
    ///
    /// # Errors
    /// Returns [`ProductError`] when the identifier or category is blank,
    /// the rating average is not a finite value in `0.0..=5.0`, or the
    /// compare price is below the selling price.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.category.trim().is_empty() {
            return Err(ProductError::EmptyCategory {
                id: self.id.clone(),
            });
        }
        let average = self.rating.average;
        if !average.is_finite() || !(0.0..=MAX_RATING).contains(&average) {
            return Err(ProductError::InvalidRating {
                id: self.id.clone(),
                average,
            });
        }
        if let Some(compare_price) = self.compare_price
            && compare_price < self.price
        {
            return Err(ProductError::ComparePriceBelowPrice {
                id: self.id.clone(),
                price: self.price,
                compare_price,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpecKey;
    use rstest::{fixture, rstest};

    #[fixture]
    fn desktop() -> Product {
        Product::new("pc-1", "Tour Gamer", "desktop", 650_000)
            .with_spec(SpecKey::Ram, 16)
            .with_tag("Gaming")
    }

    #[rstest]
    fn tags_are_case_insensitive(desktop: Product) {
        assert!(desktop.has_tag("gaming"));
        assert!(desktop.has_tag("GAMING"));
        assert!(!desktop.has_tag("office"));
    }

    #[rstest]
    fn valid_product_passes(desktop: Product) {
        assert_eq!(desktop.validate(), Ok(()));
    }

    #[rstest]
    fn blank_id_is_rejected(mut desktop: Product) {
        desktop.id = "  ".into();
        assert_eq!(desktop.validate(), Err(ProductError::EmptyId));
    }

    #[rstest]
    fn blank_category_is_rejected(mut desktop: Product) {
        desktop.category = String::new();
        assert!(matches!(
            desktop.validate(),
            Err(ProductError::EmptyCategory { .. })
        ));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(5.5)]
    #[case(f32::NAN)]
    fn out_of_range_rating_is_rejected(desktop: Product, #[case] average: f32) {
        let product = desktop.with_rating(Rating::new(average, 3));
        assert!(matches!(
            product.validate(),
            Err(ProductError::InvalidRating { .. })
        ));
    }

    #[rstest]
    fn compare_price_below_price_is_rejected(desktop: Product) {
        let product = desktop.with_compare_price(600_000);
        assert!(matches!(
            product.validate(),
            Err(ProductError::ComparePriceBelowPrice { .. })
        ));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(650_000), None)]
    #[case(Some(700_000), Some(7))]
    #[case(Some(1_300_000), Some(50))]
    fn discount_percent_rounds_down(
        desktop: Product,
        #[case] compare: Option<u64>,
        #[case] expected: Option<u64>,
    ) {
        let product = Product {
            compare_price: compare,
            ..desktop
        };
        assert_eq!(product.discount_percent(), expected);
    }
}
