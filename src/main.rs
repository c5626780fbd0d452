use clap::Parser;

use esterification_toolbox::{app, config, i18n};

/// 에스터화 반응의 수분 생성량을 추정하는 CLI 계산기.
#[derive(Parser)]
#[command(name = "esterification_toolbox", version)]
struct Cli {
    /// 표시 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
