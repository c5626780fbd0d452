//! 화합물 데이터베이스 테이블/조회 회귀 테스트.
use esterification_toolbox::compound_db::{
    compounds, find_compound, lookup_compound, CompoundCategory, CompoundLookupError,
    WATER_MOLAR_MASS_G_PER_MOL,
};

#[test]
fn registry_molecular_weights_are_verbatim() {
    let expected = [
        ("Lauric acid (C12:0)", 200.32),
        ("Myristic acid (C14:0)", 228.37),
        ("Palmitic acid (C16:0)", 256.42),
        ("Stearic acid (C18:0)", 284.48),
        ("Arachidic acid (C20:0)", 312.53),
        ("Oleic acid (C18:1)", 282.46),
        ("Linoleic acid (C18:2)", 280.45),
        ("Linolenic acid (C18:3)", 278.43),
        ("Arachidonic acid (C20:4)", 304.47),
        ("2-ethylhexanol", 130.23),
        ("Glycerol", 92.09),
        ("Adipic acid", 146.14),
        ("Water", 18.015),
    ];
    assert_eq!(compounds().len(), expected.len());
    for (name, mw) in expected {
        let c = lookup_compound(name).expect(name);
        assert_eq!(c.molecular_weight_g_per_mol, mw, "{name}");
    }
}

#[test]
fn find_is_case_insensitive() {
    let c = find_compound("glycerol").expect("lowercase lookup");
    assert_eq!(c.name, "Glycerol");
    assert_eq!(c.category, CompoundCategory::Polyol);
    assert!(find_compound("WATER").is_some());
}

#[test]
fn unknown_compound_is_an_error() {
    match lookup_compound("Benzoic acid") {
        Err(CompoundLookupError::UnknownCompound(name)) => assert_eq!(name, "Benzoic acid"),
        other => panic!("expected UnknownCompound, got {other:?}"),
    }
}

#[test]
fn water_constant_matches_registry_row() {
    let water = lookup_compound("Water").expect("water row");
    assert_eq!(water.molecular_weight_g_per_mol, WATER_MOLAR_MASS_G_PER_MOL);
    assert_eq!(water.category, CompoundCategory::ReactionProduct);
}
