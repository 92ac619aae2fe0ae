//! Requirement matching
//!
//! A fixed plan satisfies a selection when it provides at least every
//! entitlement the customer turned on. Each clause is its own predicate;
//! a plan is compatible only if all of them hold. This is a superset test,
//! not a similarity score.

use barbearia_core::catalog::FixedPlan;
use barbearia_core::models::{CustomPlanSelection, DayCode, PlanIncludes, Priority};

/// A single requirement clause
pub type Requirement = fn(&PlanIncludes, &CustomPlanSelection) -> bool;

pub fn covers_unlimited_cuts(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.unlimited_cuts || plan.unlimited_cuts
}

pub fn covers_unlimited_beard(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.unlimited_beard || plan.unlimited_beard
}

pub fn covers_eyebrow(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.eyebrow_included || plan.eyebrow_included
}

pub fn covers_friday(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.add_friday || plan.allows_day(DayCode::Sex)
}

pub fn covers_saturday(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.add_saturday || plan.allows_day(DayCode::Sab)
}

pub fn covers_fixed_schedule(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    !selection.fixed_schedule || plan.fixed_schedule
}

pub fn covers_product_discount(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    selection.product_discount == 0 || plan.product_discount >= selection.product_discount
}

/// Uses the tier order: a `Max` plan satisfies a `Medium` request.
pub fn covers_priority(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    match selection.priority {
        Priority::Normal => true,
        Priority::Medium => plan.priority != Priority::Normal,
        Priority::Max => plan.priority == Priority::Max,
    }
}

/// Every clause a compatible plan must satisfy
pub const REQUIREMENTS: [(&str, Requirement); 8] = [
    ("unlimited_cuts", covers_unlimited_cuts),
    ("unlimited_beard", covers_unlimited_beard),
    ("eyebrow", covers_eyebrow),
    ("friday", covers_friday),
    ("saturday", covers_saturday),
    ("fixed_schedule", covers_fixed_schedule),
    ("product_discount", covers_product_discount),
    ("priority", covers_priority),
];

/// Names of the clauses the entitlements fail, in clause order
pub fn unmet_requirements(
    plan: &PlanIncludes,
    selection: &CustomPlanSelection,
) -> Vec<&'static str> {
    REQUIREMENTS
        .iter()
        .filter(|(_, requirement)| !requirement(plan, selection))
        .map(|(name, _)| *name)
        .collect()
}

/// Check if entitlements cover everything the selection asks for
pub fn includes_meet_requirements(plan: &PlanIncludes, selection: &CustomPlanSelection) -> bool {
    REQUIREMENTS
        .iter()
        .all(|(_, requirement)| requirement(plan, selection))
}

/// Check if a fixed plan is compatible with a selection
pub fn plan_meets_requirements(plan: &FixedPlan, selection: &CustomPlanSelection) -> bool {
    includes_meet_requirements(&plan.includes, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbearia_core::models::PlanType;

    fn plan(id: PlanType) -> FixedPlan {
        FixedPlan::find(id).unwrap()
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let selection = CustomPlanSelection::default();
        for plan in FixedPlan::catalog() {
            assert!(plan_meets_requirements(&plan, &selection));
        }
    }

    #[test]
    fn test_unlimited_beard_excludes_corte() {
        let selection = CustomPlanSelection {
            unlimited_beard: true,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCorte), &selection));
        assert!(plan_meets_requirements(&plan(PlanType::ClubCombo), &selection));
        assert!(plan_meets_requirements(&plan(PlanType::ClubVip), &selection));
    }

    #[test]
    fn test_priority_uses_tier_order() {
        let medium = CustomPlanSelection {
            priority: Priority::Medium,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCorte), &medium));
        assert!(plan_meets_requirements(&plan(PlanType::ClubCombo), &medium));
        assert!(plan_meets_requirements(&plan(PlanType::ClubVip), &medium));

        let max = CustomPlanSelection {
            priority: Priority::Max,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCombo), &max));
        assert!(plan_meets_requirements(&plan(PlanType::ClubVip), &max));
    }

    #[test]
    fn test_discount_is_minimum() {
        let selection = CustomPlanSelection {
            product_discount: 5,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCorte), &selection));
        assert!(plan_meets_requirements(&plan(PlanType::ClubCombo), &selection));
        assert!(plan_meets_requirements(&plan(PlanType::ClubVip), &selection));
    }

    #[test]
    fn test_days() {
        let friday = CustomPlanSelection {
            add_friday: true,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCorte), &friday));
        assert!(plan_meets_requirements(&plan(PlanType::ClubCombo), &friday));

        let saturday = CustomPlanSelection {
            add_saturday: true,
            ..Default::default()
        };
        assert!(!plan_meets_requirements(&plan(PlanType::ClubCombo), &saturday));
        assert!(plan_meets_requirements(&plan(PlanType::ClubVip), &saturday));
    }

    #[test]
    fn test_one_missing_feature_disqualifies() {
        let selection = CustomPlanSelection {
            unlimited_cuts: true,
            unlimited_beard: true,
            fixed_schedule: true,
            ..Default::default()
        };
        let combo = plan(PlanType::ClubCombo);
        assert!(!plan_meets_requirements(&combo, &selection));
        assert_eq!(
            unmet_requirements(&combo.includes, &selection),
            vec!["fixed_schedule"]
        );
    }

    #[test]
    fn test_lowering_the_bar_never_disqualifies() {
        let loaded = CustomPlanSelection {
            unlimited_cuts: true,
            unlimited_beard: true,
            eyebrow_included: true,
            add_friday: true,
            add_saturday: true,
            priority: Priority::Max,
            product_discount: 10,
            fixed_schedule: true,
        };

        let relaxations: Vec<fn(&mut CustomPlanSelection)> = vec![
            |s| s.unlimited_cuts = false,
            |s| s.unlimited_beard = false,
            |s| s.eyebrow_included = false,
            |s| s.add_friday = false,
            |s| s.add_saturday = false,
            |s| s.fixed_schedule = false,
            |s| s.priority = Priority::Medium,
            |s| s.product_discount = 5,
        ];

        for plan in FixedPlan::catalog() {
            let before = plan_meets_requirements(&plan, &loaded);
            for relax in &relaxations {
                let mut relaxed = loaded.clone();
                relax(&mut relaxed);
                let after = plan_meets_requirements(&plan, &relaxed);
                assert!(!before || after, "{} lost compatibility", plan.id);
            }
        }
    }

    #[test]
    fn test_each_clause_alone() {
        let bare = PlanIncludes::default();
        let cases: Vec<(CustomPlanSelection, &str)> = vec![
            (
                CustomPlanSelection {
                    unlimited_cuts: true,
                    ..Default::default()
                },
                "unlimited_cuts",
            ),
            (
                CustomPlanSelection {
                    eyebrow_included: true,
                    ..Default::default()
                },
                "eyebrow",
            ),
            (
                CustomPlanSelection {
                    priority: Priority::Medium,
                    ..Default::default()
                },
                "priority",
            ),
            (
                CustomPlanSelection {
                    product_discount: 10,
                    ..Default::default()
                },
                "product_discount",
            ),
        ];

        for (selection, clause) in cases {
            assert_eq!(unmet_requirements(&bare, &selection), vec![clause]);
        }
    }
}
