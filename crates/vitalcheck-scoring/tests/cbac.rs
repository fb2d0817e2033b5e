use vitalcheck_core::models::input::{
    ActivityLevel, AlcoholUse, AssessmentInput, Gender, TobaccoUse, WaistReference,
};
use vitalcheck_scoring::cbac::{
    age_points, calculate_cbac, resolve_waist_reference, waist_points, RiskTier,
};

fn high_risk_input() -> AssessmentInput {
    AssessmentInput {
        age: Some(55),
        tobacco_use: Some(TobaccoUse::Daily),
        alcohol_use: Some(AlcoholUse::Yes),
        waist_cm: Some(95.0),
        waist_reference: Some(WaistReference::Male),
        activity_level: Some(ActivityLevel::Sedentary),
        family_history: Some(true),
        ..Default::default()
    }
}

#[test]
fn full_example_scores_ten() {
    let score = calculate_cbac(&high_risk_input());
    assert_eq!(score.breakdown.age, 3);
    assert_eq!(score.breakdown.tobacco, 2);
    assert_eq!(score.breakdown.alcohol, 1);
    assert_eq!(score.breakdown.waist, 1);
    assert_eq!(score.breakdown.activity, 1);
    assert_eq!(score.breakdown.family_history, 2);
    assert_eq!(score.total, 10);
    assert_eq!(score.tier, RiskTier::HigherRisk);
    assert_eq!(score.tier.label(), "Higher risk");
}

#[test]
fn empty_input_scores_zero() {
    let score = calculate_cbac(&AssessmentInput::default());
    assert_eq!(score.total, 0);
    assert_eq!(score.tier, RiskTier::LowerRisk);
}

#[test]
fn age_bands() {
    assert_eq!(age_points(None), 0);
    assert_eq!(age_points(Some(29)), 0);
    assert_eq!(age_points(Some(30)), 1);
    assert_eq!(age_points(Some(40)), 2);
    assert_eq!(age_points(Some(59)), 3);
    assert_eq!(age_points(Some(60)), 4);
    assert_eq!(age_points(Some(95)), 4);
}

#[test]
fn tier_boundary_is_strictly_above_four() {
    assert_eq!(RiskTier::for_score(4), RiskTier::LowerRisk);
    assert_eq!(RiskTier::for_score(5), RiskTier::HigherRisk);
}

#[test]
fn waist_thresholds_by_reference() {
    let female = Some(WaistReference::Female);
    let male = Some(WaistReference::Male);
    assert_eq!(waist_points(Some(80.0), female), 0);
    assert_eq!(waist_points(Some(81.0), female), 1);
    assert_eq!(waist_points(Some(90.0), female), 1);
    assert_eq!(waist_points(Some(91.0), female), 2);
    assert_eq!(waist_points(Some(90.0), male), 0);
    assert_eq!(waist_points(Some(100.0), male), 1);
    assert_eq!(waist_points(Some(101.0), male), 2);
    assert_eq!(waist_points(None, male), 0);
}

#[test]
fn waist_reference_falls_back_to_gender() {
    assert_eq!(
        resolve_waist_reference(None, Some(Gender::Female)),
        Some(WaistReference::Female)
    );
    assert_eq!(
        resolve_waist_reference(Some(WaistReference::Male), Some(Gender::Female)),
        Some(WaistReference::Male)
    );
    assert_eq!(resolve_waist_reference(None, Some(Gender::Other)), None);
    assert_eq!(resolve_waist_reference(None, None), None);
}

#[test]
fn other_gender_without_reference_scores_no_waist_points() {
    let input = AssessmentInput {
        gender: Some(Gender::Other),
        waist_cm: Some(120.0),
        ..Default::default()
    };
    assert_eq!(calculate_cbac(&input).breakdown.waist, 0);

    let explicit = AssessmentInput {
        waist_reference: Some(WaistReference::Female),
        ..input
    };
    assert_eq!(calculate_cbac(&explicit).breakdown.waist, 2);
}

#[test]
fn past_tobacco_and_moderate_activity_score_one_each() {
    let input = AssessmentInput {
        tobacco_use: Some(TobaccoUse::Past),
        activity_level: Some(ActivityLevel::Moderate),
        alcohol_use: Some(AlcoholUse::No),
        family_history: Some(false),
        ..Default::default()
    };
    let score = calculate_cbac(&input);
    assert_eq!(score.total, 2);
}
