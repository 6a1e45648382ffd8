//! Filter stage: budget containment, category fit and bounded widening.
//!
//! The filter asks the [`Catalog`] for products inside the profile's budget
//! and keeps those whose category suits the usage. When nothing survives,
//! the budget is widened step by step, always measured from the requested
//! bounds, until a product is found or the step limit is reached.

use std::collections::{BTreeMap, BTreeSet};

use configurator_core::{Budget, Catalog, Product, Usage, UsageProfile};
use log::debug;

use crate::WideningPolicyError;

/// Largest widening step count a policy may request.
pub const MAX_WIDENING_STEPS: u32 = 10;

/// Catalogue categories that may serve a usage when tagged for it.
///
/// A product always fits a usage whose name equals its category. A product
/// in a mapped category fits only when it also carries the usage as a tag,
/// so a plain office laptop is not offered to gamers.
///
/// # Examples
/// ```
/// use configurator_core::{Product, Usage};
/// use configurator_pipeline::CategoryCompatibility;
///
/// let compatibility = CategoryCompatibility::default();
/// let laptop = Product::new("l", "Laptop", "laptop", 500_000);
/// assert!(!compatibility.fits(&laptop, Usage::Gaming));
/// assert!(compatibility.fits(&laptop.with_tag("gaming"), Usage::Gaming));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCompatibility {
    categories: BTreeMap<Usage, BTreeSet<String>>,
}

impl Default for CategoryCompatibility {
    fn default() -> Self {
        Self::empty()
            .with_category(Usage::Gaming, "desktop")
            .with_category(Usage::Gaming, "laptop")
            .with_category(Usage::Office, "desktop")
            .with_category(Usage::Office, "laptop")
            .with_category(Usage::Creative, "desktop")
            .with_category(Usage::Creative, "laptop")
            .with_category(Usage::Creative, "workstation")
    }
}

impl CategoryCompatibility {
    /// A mapping where only exact category matches fit.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Allow tagged products in `category` to serve `usage`.
    #[must_use]
    pub fn with_category(mut self, usage: Usage, category: &str) -> Self {
        self.categories
            .entry(usage)
            .or_default()
            .insert(category.trim().to_ascii_lowercase());
        self
    }

    /// Categories mapped to `usage`, in sorted order.
    pub fn categories(&self, usage: Usage) -> impl Iterator<Item = &str> {
        self.categories
            .get(&usage)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Report whether `product` suits `usage` by category.
    #[must_use]
    pub fn fits(&self, product: &Product, usage: Usage) -> bool {
        let category = product.category.trim();
        if category.eq_ignore_ascii_case(usage.as_str()) {
            return true;
        }
        self.categories(usage)
            .any(|mapped| mapped.eq_ignore_ascii_case(category))
            && product.has_tag(usage.as_str())
    }
}

/// How far, and how many times, an empty budget may be widened.
///
/// Step `k` widens the requested budget to
/// `[min * (1 - step_ratio * k), max * (1 + step_ratio * k)]`, with the lower
/// bound floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WideningPolicy {
    step_ratio: f64,
    max_steps: u32,
}

impl Default for WideningPolicy {
    fn default() -> Self {
        Self {
            step_ratio: 0.2,
            max_steps: 3,
        }
    }
}

impl WideningPolicy {
    /// A policy that never widens.
    pub const DISABLED: Self = Self {
        step_ratio: 0.0,
        max_steps: 0,
    };

    /// Validate and construct a policy.
    ///
    /// # Errors
    /// Returns [`WideningPolicyError`] when `step_ratio` is not a finite,
    /// non-negative number or `max_steps` exceeds [`MAX_WIDENING_STEPS`].
    ///
    /// # Examples
    /// ```
    /// use configurator_pipeline::WideningPolicy;
    ///
    /// assert!(WideningPolicy::new(0.1, 5).is_ok());
    /// assert!(WideningPolicy::new(-0.1, 5).is_err());
    /// assert!(WideningPolicy::new(0.1, 50).is_err());
    /// ```
    pub fn new(step_ratio: f64, max_steps: u32) -> Result<Self, WideningPolicyError> {
        if !step_ratio.is_finite() {
            return Err(WideningPolicyError::NonFiniteStep { step_ratio });
        }
        if step_ratio < 0.0 {
            return Err(WideningPolicyError::NegativeStep { step_ratio });
        }
        if max_steps > MAX_WIDENING_STEPS {
            return Err(WideningPolicyError::TooManySteps {
                max_steps,
                limit: MAX_WIDENING_STEPS,
            });
        }
        Ok(Self {
            step_ratio,
            max_steps,
        })
    }

    /// Fraction of each bound added per step.
    #[must_use]
    pub const fn step_ratio(&self) -> f64 {
        self.step_ratio
    }

    /// Highest step attempted before giving up.
    #[must_use]
    pub const fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Budget for widening step `step`, measured from `requested`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "widening ratio grows linearly with the step"
    )]
    pub fn widen(&self, requested: &Budget, step: u32) -> Budget {
        requested.widened(self.step_ratio * f64::from(step))
    }
}

/// Settings for the filter stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Categories that may serve each usage.
    pub compatibility: CategoryCompatibility,
    /// Budget widening applied when nothing matches.
    pub widening: WideningPolicy,
    /// Drop products with no stock.
    pub require_in_stock: bool,
}

/// Products retained by the filter and the budget that retained them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Retained products in catalogue order.
    pub products: Vec<Product>,
    /// Budget the products were retained under.
    pub effective_budget: Budget,
    /// Widening steps applied; zero when the requested budget sufficed.
    pub widening_steps: u32,
}

/// Retain catalogue products that suit `profile`, widening the budget when
/// nothing matches.
///
/// When widening never finds a product, the outcome is empty and reports the
/// widest budget tried. Widening stops early once a step leaves the budget
/// unchanged, as happens for a `[0, 0]` budget.
///
/// # Examples
/// ```
/// use configurator_core::{Budget, MemoryCatalog, Product, Usage, UsageProfile};
/// use configurator_pipeline::{FilterConfig, filter};
///
/// let catalog = MemoryCatalog::new(vec![Product::new("a", "A", "office", 110)]).unwrap();
/// let profile = UsageProfile::new(Usage::Office, Budget::new(50.0, 100.0).unwrap());
/// let outcome = filter(&catalog, &profile, &FilterConfig::default());
/// assert_eq!(outcome.products.len(), 1);
/// assert_eq!(outcome.widening_steps, 1);
/// ```
#[must_use]
pub fn filter<C>(catalog: &C, profile: &UsageProfile, config: &FilterConfig) -> FilterOutcome
where
    C: Catalog + ?Sized,
{
    let requested = *profile.budget();
    let mut effective_budget = requested;
    let mut widening_steps = 0;
    for step in 0..=config.widening.max_steps() {
        let widened = config.widening.widen(&requested, step);
        if step > 0 && widened == effective_budget {
            debug!("filter step {step}: budget cannot widen further");
            break;
        }
        effective_budget = widened;
        widening_steps = step;
        let products = retain(catalog, profile.usage(), &effective_budget, config);
        debug!(
            "filter step {step}: budget [{:.0}, {:.0}] retained {} products",
            effective_budget.min(),
            effective_budget.max(),
            products.len()
        );
        if !products.is_empty() {
            return FilterOutcome {
                products,
                effective_budget,
                widening_steps: step,
            };
        }
    }
    FilterOutcome {
        products: Vec::new(),
        effective_budget,
        widening_steps,
    }
}

fn retain<C>(catalog: &C, usage: Usage, budget: &Budget, config: &FilterConfig) -> Vec<Product>
where
    C: Catalog + ?Sized,
{
    catalog
        .products_in_budget(budget)
        .filter(|product| budget.contains(product.price))
        .filter(|product| config.compatibility.fits(product, usage))
        .filter(|product| !config.require_in_stock || product.stock > 0)
        .collect()
}
