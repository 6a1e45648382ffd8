//! Behavioural coverage for `ProfileScorer`.

use std::cell::RefCell;

use configurator_core::{
    Budget, Product, Rating, ScoredCandidate, Scorer, SpecKey, Usage, UsageProfile,
};
use configurator_scorer::{ProfileScorer, ScoreBreakdown};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const RIG: &str = "rig";
const TOWER: &str = "tower";

struct ScorerWorld {
    scorer: ProfileScorer,
    profile: RefCell<Option<UsageProfile>>,
    products: RefCell<Vec<Product>>,
    scored: RefCell<Vec<ScoredCandidate>>,
    breakdown: RefCell<Option<ScoreBreakdown>>,
}

impl ScorerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn profile(&self) -> UsageProfile {
        self.profile.borrow().clone().expect("profile is set")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn scored(&self, id: &str) -> ScoredCandidate {
        self.scored
            .borrow()
            .iter()
            .find(|candidate| candidate.product.id == id)
            .cloned()
            .expect("product was scored")
    }
}

#[fixture]
fn world() -> ScorerWorld {
    ScorerWorld {
        scorer: ProfileScorer::with_defaults(),
        profile: RefCell::new(None),
        products: RefCell::new(Vec::new()),
        scored: RefCell::new(Vec::new()),
        breakdown: RefCell::new(None),
    }
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn gaming_profile() -> UsageProfile {
    let budget = Budget::new(600_000.0, 1_000_000.0).expect("valid budget");
    UsageProfile::new(Usage::Gaming, budget)
}

fn gaming_rig() -> Product {
    Product::new(RIG, "Gaming Rig", "gaming", 800_000)
        .with_spec(SpecKey::Ram, 16)
        .with_spec(SpecKey::GpuMemory, 8)
        .with_spec(SpecKey::CpuCores, 8)
        .with_spec(SpecKey::Storage, 256)
        .with_rating(Rating::new(4.0, 30))
        .with_stock(5)
}

fn office_tower() -> Product {
    Product::new(TOWER, "Office Tower", "desktop", 800_000)
        .with_spec(SpecKey::Ram, 8)
        .with_spec(SpecKey::CpuCores, 4)
        .with_spec(SpecKey::Storage, 1000)
        .with_rating(Rating::new(4.0, 30))
        .with_stock(5)
}

#[given("a gaming profile between 600000 and 1000000 francs")]
fn given_gaming_profile(world: &ScorerWorld) {
    world.profile.replace(Some(gaming_profile()));
}

#[given("a gaming profile between 600000 and 1000000 francs that cares only about storage")]
fn given_storage_profile(world: &ScorerWorld) {
    let mut profile = gaming_profile();
    for key in [SpecKey::Ram, SpecKey::GpuMemory, SpecKey::CpuCores] {
        profile.set_preference(key, 0.0);
    }
    profile.set_preference(SpecKey::Storage, 1.0);
    world.profile.replace(Some(profile));
}

#[given("a gaming rig and an office tower at 800000 francs")]
fn given_rig_and_tower(world: &ScorerWorld) {
    world.products.replace(vec![gaming_rig(), office_tower()]);
}

#[given("a gaming rig with no reviews")]
fn given_unreviewed_rig(world: &ScorerWorld) {
    world
        .products
        .replace(vec![gaming_rig().with_rating(Rating::default())]);
}

#[when("I score both products")]
fn when_score_both(world: &ScorerWorld) {
    let profile = world.profile();
    let scored = world
        .products
        .borrow()
        .iter()
        .map(|product| world.scorer.score(product, &profile))
        .collect();
    world.scored.replace(scored);
}

#[when("I score the gaming rig")]
fn when_score_rig(world: &ScorerWorld) {
    when_score_both(world);
    let profile = world.profile();
    let breakdown = world
        .products
        .borrow()
        .first()
        .map(|product| world.scorer.breakdown(product, &profile));
    world.breakdown.replace(breakdown);
}

#[then("the gaming rig scores higher")]
fn then_rig_higher(world: &ScorerWorld) {
    assert!(world.scored(RIG).score > world.scored(TOWER).score);
}

#[then("the office tower scores higher")]
fn then_tower_higher(world: &ScorerWorld) {
    assert!(world.scored(TOWER).score > world.scored(RIG).score);
}

#[then("the office tower lists graphics memory as not listed")]
fn then_tower_missing_gpu(world: &ScorerWorld) {
    assert!(
        world
            .scored(TOWER)
            .cons
            .contains(&"graphics memory not listed".to_owned())
    );
}

#[then("its review criterion is 50")]
fn then_neutral_reviews(world: &ScorerWorld) {
    let reviews = world.breakdown.borrow().map(|breakdown| breakdown.reviews);
    assert!(reviews.is_some_and(|value| (value - 50.0).abs() < 1e-9));
}

#[then("its cons mention few reviews")]
fn then_few_reviews(world: &ScorerWorld) {
    assert!(world.scored(RIG).cons.contains(&"few reviews".to_owned()));
}

#[scenario(path = "tests/features/scorer.feature", index = 0)]
fn gaming_rig_wins_for_gaming(world: ScorerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scorer.feature", index = 1)]
fn preferences_reorder(world: ScorerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scorer.feature", index = 2)]
fn unreviewed_product_is_neutral(world: ScorerWorld) {
    let _ = world;
}
