use std::io::{self, Write};

use crate::app::AppError;
use crate::compound_db::{self, CompoundCategory};
use crate::config::Config;
use crate::esterification::stoichiometry::{self, CalculationResult, ReagentEntry};
use crate::i18n::{keys, Translator};
use crate::units::{self, MassUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CompoundDatabase,
    WaterCalculation,
    MassConversion,
    Settings,
    Exit,
}

/// 계산 화면에 기본으로 띄우는 반응물 줄 목록.
const DEFAULT_REAGENTS: &[&str] = &[
    "Palmitic acid (C16:0)",
    "Stearic acid (C18:0)",
    "Oleic acid (C18:1)",
    "2-ethylhexanol",
    "Glycerol",
    "Adipic acid",
];

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPOUND_DB));
    println!("{}", tr.t(keys::MAIN_MENU_WATER_CALC));
    println!("{}", tr.t(keys::MAIN_MENU_MASS_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::CompoundDatabase),
            "2" => return Ok(MenuChoice::WaterCalculation),
            "3" => return Ok(MenuChoice::MassConversion),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 화합물 데이터베이스를 표 형태로 출력한다.
pub fn handle_compound_db(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPOUND_DB_HEADING));
    println!("{}", tr.t(keys::COMPOUND_DB_COLUMNS));
    for c in compound_db::compounds() {
        println!(
            "{:<26} {:<10} {:>8.3}  {}",
            c.name,
            c.formula,
            c.molecular_weight_g_per_mol,
            category_label(tr, c.category)
        );
    }
    Ok(())
}

/// 수분 생성량 계산 메뉴를 처리한다.
pub fn handle_water_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WATER_CALC_HEADING));
    println!("{}", tr.t(keys::WATER_CALC_EQUATION));
    let unit = cfg.mass_unit;

    let mut reagents = Vec::new();
    for name in DEFAULT_REAGENTS {
        let compound = compound_db::lookup_compound(name)?;
        let mass_kg = read_mass_kg(tr, compound.name, unit)?;
        reagents.push(ReagentEntry { compound, mass_kg });
    }

    // 기본 목록 외의 화합물도 데이터베이스에서 찾아 추가할 수 있다.
    loop {
        let name = read_line(tr.t(keys::PROMPT_EXTRA_COMPOUND))?;
        let name = name.trim();
        if name.is_empty() {
            break;
        }
        match compound_db::lookup_compound(name) {
            Ok(compound) => {
                let mass_kg = read_mass_kg(tr, compound.name, unit)?;
                reagents.push(ReagentEntry { compound, mass_kg });
            }
            Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
        }
    }

    let result = stoichiometry::compute(&reagents)?;
    print_result(tr, &reagents, &result);
    Ok(())
}

/// 질량 단위 변환 메뉴를 처리한다.
pub fn handle_mass_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MASS_CONV_HEADING));
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    let from = read_mass_unit(tr, keys::PROMPT_FROM_UNIT)?;
    let to = read_mass_unit(tr, keys::PROMPT_TO_UNIT)?;
    let result = units::convert_mass(value, from, to);
    println!("{} {result} {}", tr.t(keys::MASS_CONV_RESULT), to.symbol());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MASS_UNIT),
        cfg.mass_unit.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANG_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            match lang.trim() {
                "1" => cfg.language = "auto".to_string(),
                "2" => cfg.language = "ko".to_string(),
                "3" => cfg.language = "en-us".to_string(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
            println!("{}", tr.t(keys::SETTINGS_NOTE_LANG_RESTART));
        }
        "2" => {
            cfg.mass_unit = read_mass_unit(tr, keys::PROMPT_SELECT)?;
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn print_result(tr: &Translator, reagents: &[ReagentEntry], result: &CalculationResult) {
    println!("{}", tr.t(keys::SECTION_REAGENTS));
    println!("{}", tr.t(keys::REAGENT_TABLE_COLUMNS));
    for entry in reagents {
        println!(
            "{:<26} {:>10.4} {:>10.3} {:>12.4}",
            entry.compound.name,
            entry.mass_kg,
            entry.compound.molecular_weight_g_per_mol,
            entry.moles()
        );
    }
    println!("{}", tr.t(keys::SECTION_RESULT));
    println!(
        "{} {:.4} mol",
        tr.t(keys::RESULT_TOTAL_ACID),
        result.total_acid_moles
    );
    println!(
        "{} {:.4} mol",
        tr.t(keys::RESULT_TOTAL_ALCOHOL),
        result.total_alcohol_moles
    );
    println!(
        "{} {:.4} mol",
        tr.t(keys::RESULT_LIMITING),
        result.limiting_moles
    );
    println!(
        "{} {:.4} mol",
        tr.t(keys::RESULT_WATER_MOLES),
        result.water_moles
    );
    println!(
        "{} {:.1} g ({:.4} kg)",
        tr.t(keys::RESULT_WATER_MASS),
        result.water_mass_g,
        result.water_mass_kg
    );
    println!(
        "{} {:.4} kg",
        tr.t(keys::RESULT_TOTAL_MASS),
        result.total_reagent_mass_kg
    );
    println!(
        "{} {:.1} %",
        tr.t(keys::RESULT_BALANCE_ERROR),
        result.mass_balance_error_pct
    );
}

fn category_label(tr: &Translator, category: CompoundCategory) -> &'static str {
    match category {
        CompoundCategory::SaturatedFattyAcid => tr.t(keys::CATEGORY_SATURATED_FATTY_ACID),
        CompoundCategory::UnsaturatedFattyAcid => tr.t(keys::CATEGORY_UNSATURATED_FATTY_ACID),
        CompoundCategory::Alcohol => tr.t(keys::CATEGORY_ALCOHOL),
        CompoundCategory::Polyol => tr.t(keys::CATEGORY_POLYOL),
        CompoundCategory::DicarboxylicAcid => tr.t(keys::CATEGORY_DICARBOXYLIC_ACID),
        CompoundCategory::ReactionProduct => tr.t(keys::CATEGORY_REACTION_PRODUCT),
    }
}

/// 설정 단위로 질량을 입력받아 kg으로 환산한다. 빈 입력은 0으로 본다.
fn read_mass_kg(tr: &Translator, name: &str, unit: MassUnit) -> Result<f64, AppError> {
    let prompt = format!(
        "{name} - {} [{}]: ",
        tr.t(keys::PROMPT_REAGENT_MASS),
        unit.symbol()
    );
    loop {
        let s = read_line(&prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(units::to_kg(v, unit)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_mass_unit(tr: &Translator, prompt_key: &str) -> Result<MassUnit, AppError> {
    println!("{}", tr.t(keys::MASS_UNIT_OPTIONS));
    let sel = read_line(tr.t(prompt_key))?;
    let unit = match sel.trim() {
        "2" => MassUnit::Gram,
        "3" => MassUnit::Pound,
        _ => MassUnit::Kilogram,
    };
    Ok(unit)
}
