//! 질량 단위 변환 회귀 테스트.
use esterification_toolbox::units::{convert_mass, to_kg, MassUnit};

#[test]
fn kg_to_gram() {
    let g = convert_mass(2.5, MassUnit::Kilogram, MassUnit::Gram);
    assert!((g - 2500.0).abs() < 1e-9);
}

#[test]
fn pound_to_kg() {
    let kg = to_kg(1.0, MassUnit::Pound);
    assert!((kg - 0.453592).abs() < 1e-9);
}

#[test]
fn gram_roundtrip() {
    let back = convert_mass(
        convert_mass(123.4, MassUnit::Gram, MassUnit::Pound),
        MassUnit::Pound,
        MassUnit::Gram,
    );
    assert!((back - 123.4).abs() < 1e-9, "got {back}");
}
