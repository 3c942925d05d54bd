//! Built-in catalog of membership plans.
//!
//! This module provides the three membership tiers offered by the gym.

use crate::types::{MembershipPlan, PlanCatalog};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_PLANS: Lazy<PlanCatalog> = Lazy::new(build_default_plans_internal);

/// Get a reference to the cached default plan catalog
pub fn get_default_plans() -> &'static PlanCatalog {
    &DEFAULT_PLANS
}

/// Builds the default catalog of membership plans
///
/// **Note**: For production use, prefer `get_default_plans()` which returns a
/// cached reference. This function is retained for testing and custom catalog
/// creation.
pub fn build_default_plans() -> PlanCatalog {
    build_default_plans_internal()
}

fn build_default_plans_internal() -> PlanCatalog {
    let plans = vec![
        MembershipPlan {
            id: "basic".into(),
            name: "Basic".into(),
            price_per_month: 29,
            description: "Perfect for getting started".into(),
            features: vec![
                "Access to gym floor".into(),
                "Basic equipment".into(),
                "Locker room access".into(),
                "Mobile app access".into(),
                "Community events".into(),
            ],
            popular: false,
        },
        MembershipPlan {
            id: "pro".into(),
            name: "Pro".into(),
            price_per_month: 59,
            description: "Most popular choice".into(),
            features: vec![
                "Everything in Basic".into(),
                "24/7 facility access".into(),
                "Group fitness classes".into(),
                "Personal training session".into(),
                "Nutrition consultation".into(),
                "Guest passes (2/month)".into(),
            ],
            popular: true,
        },
        MembershipPlan {
            id: "elite".into(),
            name: "Elite".into(),
            price_per_month: 99,
            description: "Ultimate fitness experience".into(),
            features: vec![
                "Everything in Pro".into(),
                "Unlimited personal training".into(),
                "Premium locker".into(),
                "Spa & sauna access".into(),
                "Priority class booking".into(),
                "Unlimited guest passes".into(),
                "Custom meal plans".into(),
            ],
            popular: false,
        },
    ];

    PlanCatalog { plans }
}

impl PlanCatalog {
    /// Validate the catalog, returning a list of problems (empty when valid)
    ///
    /// Checks:
    /// - At least one plan exists
    /// - Ids and names are non-empty and ids are unique
    /// - Every plan lists at least one feature
    /// - Exactly one plan is flagged popular
    /// - Prices strictly increase in display order
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.plans.is_empty() {
            errors.push("catalog has no plans".into());
            return errors;
        }

        let mut seen_ids = std::collections::HashSet::new();
        for plan in &self.plans {
            if plan.id.is_empty() {
                errors.push(format!("plan '{}' has an empty id", plan.name));
            }
            if plan.name.is_empty() {
                errors.push(format!("plan '{}' has an empty name", plan.id));
            }
            if plan.features.is_empty() {
                errors.push(format!("plan '{}' lists no features", plan.id));
            }
            if !seen_ids.insert(&plan.id) {
                errors.push(format!("duplicate plan id '{}'", plan.id));
            }
        }

        let popular_count = self.plans.iter().filter(|p| p.popular).count();
        if popular_count != 1 {
            errors.push(format!(
                "expected exactly one popular plan, found {}",
                popular_count
            ));
        }

        for pair in self.plans.windows(2) {
            if pair[0].price_per_month >= pair[1].price_per_month {
                errors.push(format!(
                    "plan prices must increase: '{}' (${}) >= '{}' (${})",
                    pair[0].id, pair[0].price_per_month, pair[1].id, pair[1].price_per_month
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_plans();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default plan catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_three_tiers_in_price_order() {
        let catalog = build_default_plans();
        assert_eq!(catalog.plans.len(), 3);

        let prices: Vec<u32> = catalog.plans.iter().map(|p| p.price_per_month).collect();
        assert_eq!(prices, vec![29, 59, 99]);
    }

    #[test]
    fn test_pro_is_the_popular_plan() {
        let catalog = build_default_plans();
        let popular = catalog.popular().expect("a popular plan");
        assert_eq!(popular.id, "pro");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = build_default_plans();
        assert_eq!(catalog.get("elite").unwrap().price_per_month, 99);
        assert!(catalog.get("platinum").is_none());
    }

    #[test]
    fn test_validate_flags_duplicate_ids() {
        let mut catalog = build_default_plans();
        catalog.plans[2].id = "basic".into();

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("duplicate plan id")));
    }

    #[test]
    fn test_validate_flags_multiple_popular() {
        let mut catalog = build_default_plans();
        catalog.plans[0].popular = true;

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("popular")));
    }

    #[test]
    fn test_validate_flags_price_inversion() {
        let mut catalog = build_default_plans();
        catalog.plans[1].price_per_month = 120;

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("prices must increase")));
    }

    #[test]
    fn test_cached_catalog_matches_builder() {
        let cached = get_default_plans();
        let built = build_default_plans();
        assert_eq!(cached.plans.len(), built.plans.len());
    }
}
