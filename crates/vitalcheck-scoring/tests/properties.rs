use proptest::prelude::*;
use vitalcheck_core::models::input::{
    ActivityLevel, AlcoholUse, AssessmentInput, Gender, SugarType, TobaccoUse, WaistReference,
};
use vitalcheck_scoring::cbac::{calculate_cbac, RiskTier};
use vitalcheck_scoring::summary::AssessmentSummary;

fn pick<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = Option<T>> {
    proptest::option::of(proptest::sample::select(all))
}

prop_compose! {
    fn arb_input()(
        age in proptest::option::of(1u32..=120),
        gender in pick(Gender::ALL),
        activity_level in pick(ActivityLevel::ALL),
        height_cm in proptest::option::of(50.0f64..300.0),
        weight_kg in proptest::option::of(10.0f64..500.0),
        systolic in proptest::option::of(60u32..250),
        diastolic in proptest::option::of(40u32..150),
        sugar_type in pick(SugarType::ALL),
        sugar_value in proptest::option::of(1.0f64..400.0),
        tobacco_use in pick(TobaccoUse::ALL),
        alcohol_use in pick(AlcoholUse::ALL),
        waist_cm in proptest::option::of(40.0f64..160.0),
        waist_reference in pick(WaistReference::ALL),
        family_history in proptest::option::of(any::<bool>()),
    ) -> AssessmentInput {
        AssessmentInput {
            age,
            gender,
            activity_level,
            height_cm,
            weight_kg,
            systolic,
            diastolic,
            sugar_type,
            sugar_value,
            tobacco_use,
            alcohol_use,
            waist_cm,
            waist_reference,
            family_history,
            ..Default::default()
        }
    }
}

const FACTORS: usize = 6;

/// Copy one CBAC answer. The waist answer carries the gender its default
/// chart comes from.
fn copy_factor(factor: usize, from: &AssessmentInput, to: &mut AssessmentInput) {
    match factor {
        0 => to.age = from.age,
        1 => to.tobacco_use = from.tobacco_use,
        2 => to.alcohol_use = from.alcohol_use,
        3 => {
            to.waist_cm = from.waist_cm;
            to.waist_reference = from.waist_reference;
            to.gender = from.gender;
        }
        4 => to.activity_level = from.activity_level,
        _ => to.family_history = from.family_history,
    }
}

fn only_factor(factor: usize, from: &AssessmentInput) -> AssessmentInput {
    let mut input = AssessmentInput::default();
    copy_factor(factor, from, &mut input);
    input
}

proptest! {
    #[test]
    fn derived_values_are_idempotent(input in arb_input()) {
        let first = AssessmentSummary::compute(&input);
        let second = AssessmentSummary::compute(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cbac_total_matches_breakdown_and_bounds(input in arb_input()) {
        let score = calculate_cbac(&input);
        prop_assert_eq!(score.total, score.breakdown.total());
        prop_assert!(score.total <= 12);
        prop_assert_eq!(score.tier == RiskTier::HigherRisk, score.total > 4);
    }

    #[test]
    fn clearing_a_field_never_raises_the_score(input in arb_input()) {
        let full = calculate_cbac(&input).total;
        let cleared = AssessmentInput { family_history: None, tobacco_use: None, ..input.clone() };
        prop_assert!(calculate_cbac(&cleared).total <= full);
    }

    #[test]
    fn bmi_category_is_consistent_with_value(input in arb_input()) {
        if let Some(bmi) = AssessmentSummary::compute(&input).bmi {
            prop_assert!(bmi.value > 0.0);
            prop_assert_eq!(
                bmi.category,
                vitalcheck_scoring::measurements::bmi::BmiCategory::for_bmi(bmi.value)
            );
        }
    }

    #[test]
    fn cbac_is_independent_of_answer_order(
        input in arb_input(),
        order in Just((0..FACTORS).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut partial = AssessmentInput::default();
        let mut running = calculate_cbac(&partial).total;
        prop_assert_eq!(running, 0);

        for factor in order {
            copy_factor(factor, &input, &mut partial);
            let total = calculate_cbac(&partial).total;
            prop_assert_eq!(total - running, calculate_cbac(&only_factor(factor, &input)).total);
            running = total;
        }
        prop_assert_eq!(running, calculate_cbac(&input).total);
    }
}
