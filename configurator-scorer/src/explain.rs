//! Pros and cons shown next to each recommendation.

use configurator_core::{Product, Usage};

use crate::SpecThreshold;
use crate::criteria::meets;

/// Average at or above which a well-reviewed product earns a pro.
pub const HIGH_RATING: f32 = 4.5;
/// Average below which a well-reviewed product earns a con.
pub const LOW_RATING: f32 = 3.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Explanation {
    pub(crate) pros: Vec<String>,
    pub(crate) cons: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ExplainLimits {
    pub(crate) min_reviews: u32,
    pub(crate) low_stock: u32,
}

/// Derive pros and cons in a fixed order: thresholds, discount, reviews,
/// then stock.
pub(crate) fn explain(
    product: &Product,
    usage: Usage,
    thresholds: &[SpecThreshold],
    limits: ExplainLimits,
) -> Explanation {
    let mut explanation = Explanation::default();
    for threshold in thresholds {
        explain_threshold(&mut explanation, product, usage, threshold);
    }
    if let Some(percent) = product.discount_percent() {
        explanation
            .pros
            .push(format!("{percent}% off the usual price"));
    }
    explain_reviews(&mut explanation, product, limits.min_reviews);
    explain_stock(&mut explanation, product, limits.low_stock);
    explanation
}

fn explain_threshold(
    explanation: &mut Explanation,
    product: &Product,
    usage: Usage,
    threshold: &SpecThreshold,
) {
    let key = threshold.key;
    let Some(value) = product.specs.get(key) else {
        explanation.cons.push(format!("{} not listed", key.label()));
        return;
    };
    let recommended = key.describe(threshold.minimum);
    if meets(product, threshold) {
        explanation.pros.push(format!(
            "{} meets the {usage} recommendation of {recommended}",
            key.describe(value)
        ));
    } else {
        explanation.cons.push(format!(
            "{} is below the {usage} recommendation of {recommended}",
            key.describe(value)
        ));
    }
}

fn explain_reviews(explanation: &mut Explanation, product: &Product, min_reviews: u32) {
    let rating = product.rating;
    if rating.count < min_reviews {
        explanation.cons.push("few reviews".to_owned());
        return;
    }
    let summary = format!("{:.1}/5 from {} reviews", rating.average, rating.count);
    if rating.average >= HIGH_RATING {
        explanation.pros.push(format!("highly rated ({summary})"));
    } else if rating.average < LOW_RATING {
        explanation.cons.push(format!("poorly rated ({summary})"));
    }
}

fn explain_stock(explanation: &mut Explanation, product: &Product, low_stock: u32) {
    match product.stock {
        0 => explanation.cons.push("out of stock".to_owned()),
        n if n <= low_stock => explanation.cons.push(format!("only {n} left in stock")),
        _ => {}
    }
}
