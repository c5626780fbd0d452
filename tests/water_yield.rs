//! 한계 반응물 기반 수분 생성량 계산 회귀 테스트.
use esterification_toolbox::esterification::stoichiometry::{
    compute, reaction_role, ReactionRole, ReagentEntry, StoichCalcError,
};
use esterification_toolbox::compound_db::CompoundCategory;

fn entry(name: &str, mass_kg: f64) -> ReagentEntry {
    ReagentEntry::from_name(name, mass_kg).expect("registered compound")
}

#[test]
fn reference_batch_water_yield() {
    // 기준 배치: 산 16.6128 mol / 알코올 25.2080 mol → 산이 한계 반응물
    let reagents = vec![
        entry("Palmitic acid (C16:0)", 2.0),
        entry("Stearic acid (C18:0)", 1.5),
        entry("Oleic acid (C18:1)", 1.0),
        entry("2-ethylhexanol", 3.0),
        entry("Glycerol", 0.2),
        entry("Adipic acid", 0.0),
    ];
    let res = compute(&reagents).expect("reference batch");

    assert!(
        (res.total_acid_moles - 16.6128).abs() < 1e-3,
        "acid={}",
        res.total_acid_moles
    );
    assert!(
        (res.total_alcohol_moles - 25.2080).abs() < 1e-3,
        "alcohol={}",
        res.total_alcohol_moles
    );
    assert!((res.limiting_moles - res.total_acid_moles).abs() < 1e-12);
    assert!((res.water_mass_kg - 0.29928).abs() < 1e-4, "water={} kg", res.water_mass_kg);
    assert!((res.total_reagent_mass_kg - 7.7).abs() < 1e-12);
    assert!(
        (res.mass_balance_error_pct - 96.113).abs() < 1e-2,
        "balance={}%",
        res.mass_balance_error_pct
    );
}

#[test]
fn limiting_reagent_invariant_holds() {
    let reagents = vec![
        entry("Lauric acid (C12:0)", 0.7),
        entry("Linoleic acid (C18:2)", 0.3),
        entry("Glycerol", 0.4),
    ];
    let res = compute(&reagents).expect("mixed batch");
    assert_eq!(
        res.water_moles,
        res.total_acid_moles.min(res.total_alcohol_moles)
    );
    // 물 질량은 항상 몰수 × 18.015로 일관되어야 한다.
    let expected_kg = res.water_moles * 18.015 / 1000.0;
    assert!((res.water_mass_kg - expected_kg).abs() <= 1e-9 * expected_kg.abs());
    assert!((res.water_mass_g - res.water_mass_kg * 1000.0).abs() < 1e-9);
}

#[test]
fn alcohol_can_be_limiting() {
    // 알코올이 부족한 배치
    let reagents = vec![
        entry("Stearic acid (C18:0)", 5.0),
        entry("2-ethylhexanol", 0.5),
    ];
    let res = compute(&reagents).expect("alcohol-poor batch");
    assert!(res.total_alcohol_moles < res.total_acid_moles);
    assert_eq!(res.water_moles, res.total_alcohol_moles);
}

#[test]
fn equal_totals_tie_gives_same_water() {
    // 산 1 mol = 알코올 1 mol이 되도록 질량을 맞춘 배치
    let reagents = vec![
        entry("Palmitic acid (C16:0)", 0.25642),
        entry("2-ethylhexanol", 0.13023),
    ];
    let res = compute(&reagents).expect("tie batch");
    assert!((res.total_acid_moles - 1.0).abs() < 1e-9);
    assert!((res.total_alcohol_moles - 1.0).abs() < 1e-9);
    assert!((res.water_moles - 1.0).abs() < 1e-9);
}

#[test]
fn dicarboxylic_acid_counts_only_toward_mass() {
    // 아디프산만 있으면 양쪽 몰수 합계는 0이지만 질량 수지는 정의된다.
    let reagents = vec![entry("Adipic acid", 0.5)];
    let res = compute(&reagents).expect("adipic-only batch");
    assert_eq!(res.total_acid_moles, 0.0);
    assert_eq!(res.total_alcohol_moles, 0.0);
    assert_eq!(res.water_moles, 0.0);
    assert!((res.total_reagent_mass_kg - 0.5).abs() < 1e-12);
    assert!((res.mass_balance_error_pct - 100.0).abs() < 1e-9);
}

#[test]
fn reaction_product_is_unclassified() {
    assert_eq!(
        reaction_role(CompoundCategory::ReactionProduct),
        ReactionRole::Unclassified
    );
    assert_eq!(
        reaction_role(CompoundCategory::DicarboxylicAcid),
        ReactionRole::Unclassified
    );
    assert_eq!(reaction_role(CompoundCategory::Polyol), ReactionRole::AlcoholLike);
    assert_eq!(
        reaction_role(CompoundCategory::SaturatedFattyAcid),
        ReactionRole::Acid
    );
}

#[test]
fn negative_mass_is_rejected() {
    let reagents = vec![
        entry("Oleic acid (C18:1)", 1.0),
        entry("Glycerol", -0.1),
    ];
    match compute(&reagents) {
        Err(StoichCalcError::NegativeMass(name)) => assert_eq!(name, "Glycerol"),
        other => panic!("expected NegativeMass, got {other:?}"),
    }
}

#[test]
fn zero_total_mass_is_an_error() {
    // 전부 0 kg이면 질량 수지 분모가 0이므로 오류로 처리한다.
    let reagents = vec![
        entry("Palmitic acid (C16:0)", 0.0),
        entry("2-ethylhexanol", 0.0),
    ];
    match compute(&reagents) {
        Err(StoichCalcError::ZeroTotalMass) => {}
        other => panic!("expected ZeroTotalMass, got {other:?}"),
    }
}

#[test]
fn empty_reagent_list_is_an_error() {
    match compute(&[]) {
        Err(StoichCalcError::ZeroTotalMass) => {}
        other => panic!("expected ZeroTotalMass, got {other:?}"),
    }
}

#[test]
fn compute_is_deterministic() {
    let reagents = vec![
        entry("Myristic acid (C14:0)", 1.1),
        entry("Glycerol", 0.9),
        entry("Water", 0.05),
    ];
    let first = compute(&reagents).expect("first run");
    let second = compute(&reagents).expect("second run");
    assert_eq!(first, second);
}
