use crate::compound_db::{self, CompoundCategory, CompoundData, CompoundLookupError};
use crate::esterification::mass_balance::{self, MassBalanceError, MassBalanceInput};

/// 화합물이 에스터화 반응에서 맡는 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionRole {
    /// 산 측 반응물(지방산)
    Acid,
    /// 알코올 측 반응물(알코올, 다가 알코올)
    AlcoholLike,
    /// 양쪽 몰수 합계에 포함하지 않는 화합물(다이카복실산, 생성물)
    Unclassified,
}

/// 화합물 분류에서 반응 역할을 판정한다.
/// 다이카복실산은 반응점이 2개라 현재 수식 집합에서는 양쪽 합계에서 제외한다.
pub fn reaction_role(category: CompoundCategory) -> ReactionRole {
    match category {
        CompoundCategory::SaturatedFattyAcid | CompoundCategory::UnsaturatedFattyAcid => {
            ReactionRole::Acid
        }
        CompoundCategory::Alcohol | CompoundCategory::Polyol => ReactionRole::AlcoholLike,
        CompoundCategory::DicarboxylicAcid | CompoundCategory::ReactionProduct => {
            ReactionRole::Unclassified
        }
    }
}

/// 사용자 입력 한 줄. 질량만 들고 몰수는 항상 유도값으로 계산한다.
#[derive(Debug, Clone)]
pub struct ReagentEntry {
    pub compound: &'static CompoundData,
    pub mass_kg: f64,
}

impl ReagentEntry {
    /// 화합물 이름으로 항목을 만든다. 등록되지 않은 이름이면 오류.
    pub fn from_name(name: &str, mass_kg: f64) -> Result<Self, CompoundLookupError> {
        Ok(Self {
            compound: compound_db::lookup_compound(name)?,
            mass_kg,
        })
    }

    /// 몰수 [mol] = 질량 [kg] × 1000 / 분자량 [g/mol]
    pub fn moles(&self) -> f64 {
        self.mass_kg * 1000.0 / self.compound.molecular_weight_g_per_mol
    }
}

/// 수분 생성량 계산 결과. 호출마다 새로 만들어지는 스냅샷이다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// 산 측 몰수 합계 [mol]
    pub total_acid_moles: f64,
    /// 알코올 측 몰수 합계 [mol]
    pub total_alcohol_moles: f64,
    /// 한계 반응물 몰수 [mol]
    pub limiting_moles: f64,
    /// 생성 수분 몰수 [mol]
    pub water_moles: f64,
    /// 생성 수분 질량 [g]
    pub water_mass_g: f64,
    /// 생성 수분 질량 [kg]
    pub water_mass_kg: f64,
    /// 반응물 총 질량 [kg] (미분류 화합물 포함)
    pub total_reagent_mass_kg: f64,
    /// 질량 수지 차이 [%]
    pub mass_balance_error_pct: f64,
}

/// 수분 생성량 계산 오류를 표현한다.
#[derive(Debug)]
pub enum StoichCalcError {
    /// 음수 질량이 입력된 경우. 문제의 화합물 이름을 담는다.
    NegativeMass(&'static str),
    /// 반응물 총 질량이 0이라 질량 수지가 정의되지 않는 경우
    ZeroTotalMass,
}

impl std::fmt::Display for StoichCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoichCalcError::NegativeMass(name) => {
                write!(f, "질량 입력 오류: {name}의 질량은 0 이상이어야 합니다.")
            }
            StoichCalcError::ZeroTotalMass => {
                write!(f, "반응물 총 질량이 0이라 질량 수지를 계산할 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for StoichCalcError {}

impl From<MassBalanceError> for StoichCalcError {
    fn from(value: MassBalanceError) -> Self {
        match value {
            MassBalanceError::ZeroTotalMass => StoichCalcError::ZeroTotalMass,
        }
    }
}

/// 반응물 목록에서 생성 수분량과 질량 수지를 계산한다.
///
/// R-COOH + R'-OH → R-COO-R' + H2O
/// 한계 반응물 1몰당 물 1몰이 생성된다고 본다. 입력이 같으면 결과도 항상 같은
/// 순수 함수이며, 내부 상태나 입출력이 없다.
pub fn compute(reagents: &[ReagentEntry]) -> Result<CalculationResult, StoichCalcError> {
    for entry in reagents {
        if entry.mass_kg < 0.0 {
            return Err(StoichCalcError::NegativeMass(entry.compound.name));
        }
    }

    let mut total_acid_moles = 0.0;
    let mut total_alcohol_moles = 0.0;
    let mut total_reagent_mass_kg = 0.0;
    for entry in reagents {
        total_reagent_mass_kg += entry.mass_kg;
        match reaction_role(entry.compound.category) {
            ReactionRole::Acid => total_acid_moles += entry.moles(),
            ReactionRole::AlcoholLike => total_alcohol_moles += entry.moles(),
            ReactionRole::Unclassified => {}
        }
    }

    // 한계 반응물 규칙: 생성 수분 몰수 = min(산, 알코올). 동률이면 어느 쪽이든 같다.
    let limiting_moles = total_acid_moles.min(total_alcohol_moles);
    let water_moles = limiting_moles;
    let water_mass_g = water_moles * compound_db::WATER_MOLAR_MASS_G_PER_MOL;
    let water_mass_kg = water_mass_g / 1000.0;

    let balance = mass_balance::check_mass_balance(MassBalanceInput {
        total_reagent_mass_kg,
        water_mass_kg,
    })?;

    Ok(CalculationResult {
        total_acid_moles,
        total_alcohol_moles,
        limiting_moles,
        water_moles,
        water_mass_g,
        water_mass_kg,
        total_reagent_mass_kg,
        mass_balance_error_pct: balance.error_pct,
    })
}
