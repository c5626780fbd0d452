use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPOUND_DB: &str = "main_menu.compound_db";
    pub const MAIN_MENU_WATER_CALC: &str = "main_menu.water_calc";
    pub const MAIN_MENU_MASS_CONVERSION: &str = "main_menu.mass_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COMPOUND_DB_HEADING: &str = "compound_db.heading";
    pub const COMPOUND_DB_COLUMNS: &str = "compound_db.columns";

    pub const CATEGORY_SATURATED_FATTY_ACID: &str = "category.saturated_fatty_acid";
    pub const CATEGORY_UNSATURATED_FATTY_ACID: &str = "category.unsaturated_fatty_acid";
    pub const CATEGORY_ALCOHOL: &str = "category.alcohol";
    pub const CATEGORY_POLYOL: &str = "category.polyol";
    pub const CATEGORY_DICARBOXYLIC_ACID: &str = "category.dicarboxylic_acid";
    pub const CATEGORY_REACTION_PRODUCT: &str = "category.reaction_product";

    pub const WATER_CALC_HEADING: &str = "water_calc.heading";
    pub const WATER_CALC_EQUATION: &str = "water_calc.equation";
    pub const PROMPT_REAGENT_MASS: &str = "water_calc.prompt_reagent_mass";
    pub const PROMPT_EXTRA_COMPOUND: &str = "water_calc.prompt_extra_compound";
    pub const SECTION_REAGENTS: &str = "water_calc.section_reagents";
    pub const REAGENT_TABLE_COLUMNS: &str = "water_calc.reagent_table_columns";
    pub const SECTION_RESULT: &str = "water_calc.section_result";
    pub const RESULT_TOTAL_ACID: &str = "result.total_acid_moles";
    pub const RESULT_TOTAL_ALCOHOL: &str = "result.total_alcohol_moles";
    pub const RESULT_LIMITING: &str = "result.limiting_moles";
    pub const RESULT_WATER_MOLES: &str = "result.water_moles";
    pub const RESULT_WATER_MASS: &str = "result.water_mass";
    pub const RESULT_TOTAL_MASS: &str = "result.total_reagent_mass";
    pub const RESULT_BALANCE_ERROR: &str = "result.mass_balance_error";

    pub const MASS_CONV_HEADING: &str = "mass_conversion.heading";
    pub const MASS_UNIT_OPTIONS: &str = "mass_conversion.unit_options";
    pub const PROMPT_VALUE: &str = "mass_conversion.prompt_value";
    pub const PROMPT_FROM_UNIT: &str = "mass_conversion.prompt_from_unit";
    pub const PROMPT_TO_UNIT: &str = "mass_conversion.prompt_to_unit";
    pub const MASS_CONV_RESULT: &str = "mass_conversion.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_MASS_UNIT: &str = "settings.current_mass_unit";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_LANG_OPTIONS: &str = "settings.lang_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_NOTE_LANG_RESTART: &str = "settings.note_lang_restart";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// locales/ 디렉터리의 언어팩을 우선 적용하고, 없으면 내장 문자열을 쓴다.
    pub fn new_with_pack(lang_code: &str) -> Self {
        let overrides = load_overrides("locales", lang_code).or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Esterification Toolbox ===",
        MAIN_MENU_COMPOUND_DB => "1) 화합물 데이터베이스",
        MAIN_MENU_WATER_CALC => "2) 수분 생성량 계산",
        MAIN_MENU_MASS_CONVERSION => "3) 질량 단위 변환",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COMPOUND_DB_HEADING => "\n-- 화합물 데이터베이스 --",
        COMPOUND_DB_COLUMNS => "화합물 / 화학식 / 분자량 [g/mol] / 분류",
        CATEGORY_SATURATED_FATTY_ACID => "포화 지방산",
        CATEGORY_UNSATURATED_FATTY_ACID => "불포화 지방산",
        CATEGORY_ALCOHOL => "알코올",
        CATEGORY_POLYOL => "다가 알코올",
        CATEGORY_DICARBOXYLIC_ACID => "다이카복실산",
        CATEGORY_REACTION_PRODUCT => "반응 생성물",
        WATER_CALC_HEADING => "\n-- 에스터화 수분 생성량 계산 --",
        WATER_CALC_EQUATION => "반응식: R-COOH + R'-OH → R-COO-R' + H2O",
        PROMPT_REAGENT_MASS => "질량 (엔터=0)",
        PROMPT_EXTRA_COMPOUND => "추가 화합물 이름 (엔터=건너뛰기): ",
        SECTION_REAGENTS => "\n[반응물]",
        REAGENT_TABLE_COLUMNS => "화합물 / 질량 [kg] / 분자량 [g/mol] / 몰수 [mol]",
        SECTION_RESULT => "\n-- 계산 결과 --",
        RESULT_TOTAL_ACID => "산 몰수 합계:",
        RESULT_TOTAL_ALCOHOL => "알코올 몰수 합계:",
        RESULT_LIMITING => "한계 반응물 몰수:",
        RESULT_WATER_MOLES => "생성 수분 몰수:",
        RESULT_WATER_MASS => "생성 수분 질량:",
        RESULT_TOTAL_MASS => "반응물 총 질량:",
        RESULT_BALANCE_ERROR => "질량 수지 차이:",
        MASS_CONV_HEADING => "\n-- 질량 단위 변환 --",
        MASS_UNIT_OPTIONS => "질량 단위: 1=kg 2=g 3=lb",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위 선택: ",
        PROMPT_TO_UNIT => "변환 단위 선택: ",
        MASS_CONV_RESULT => "변환 결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_MASS_UNIT => "현재 질량 입력 단위:",
        SETTINGS_OPTIONS => "1) 언어  2) 질량 입력 단위",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_LANG_OPTIONS => "언어: 1=auto 2=ko 3=en-us",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_NOTE_LANG_RESTART => "언어 변경은 다음 실행부터 적용됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Esterification Toolbox ===",
        MAIN_MENU_COMPOUND_DB => "1) Compound Database",
        MAIN_MENU_WATER_CALC => "2) Water Production Calculation",
        MAIN_MENU_MASS_CONVERSION => "3) Mass Unit Conversion",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COMPOUND_DB_HEADING => "\n-- Compound Database --",
        COMPOUND_DB_COLUMNS => "Compound / Formula / MW [g/mol] / Category",
        CATEGORY_SATURATED_FATTY_ACID => "Saturated fatty acid",
        CATEGORY_UNSATURATED_FATTY_ACID => "Unsaturated fatty acid",
        CATEGORY_ALCOHOL => "Alcohol",
        CATEGORY_POLYOL => "Polyol",
        CATEGORY_DICARBOXYLIC_ACID => "Dicarboxylic acid",
        CATEGORY_REACTION_PRODUCT => "Reaction product",
        WATER_CALC_HEADING => "\n-- Esterification Water Production --",
        WATER_CALC_EQUATION => "Reaction: R-COOH + R'-OH → R-COO-R' + H2O",
        PROMPT_REAGENT_MASS => "mass (enter = 0)",
        PROMPT_EXTRA_COMPOUND => "Additional compound name (enter to skip): ",
        SECTION_REAGENTS => "\n[Reagents]",
        REAGENT_TABLE_COLUMNS => "Compound / Mass [kg] / MW [g/mol] / Moles [mol]",
        SECTION_RESULT => "\n-- Result --",
        RESULT_TOTAL_ACID => "Total acid moles:",
        RESULT_TOTAL_ALCOHOL => "Total alcohol moles:",
        RESULT_LIMITING => "Limiting reagent moles:",
        RESULT_WATER_MOLES => "Water produced:",
        RESULT_WATER_MASS => "Water mass:",
        RESULT_TOTAL_MASS => "Total reagent mass:",
        RESULT_BALANCE_ERROR => "Mass balance difference:",
        MASS_CONV_HEADING => "\n-- Mass Unit Conversion --",
        MASS_UNIT_OPTIONS => "Mass units: 1=kg 2=g 3=lb",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit: ",
        PROMPT_TO_UNIT => "To unit: ",
        MASS_CONV_RESULT => "Result:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_MASS_UNIT => "Current mass input unit:",
        SETTINGS_OPTIONS => "1) Language  2) Mass input unit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_LANG_OPTIONS => "Language: 1=auto 2=ko 3=en-us",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_NOTE_LANG_RESTART => "Language change takes effect on next launch.",
        _ => return None,
    })
}
