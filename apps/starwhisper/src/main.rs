mod console;
mod cues;
mod gate;
mod modes;

use anyhow::Context as _;
use console::{heading, hint, say_error, Console, GOLD, RESET};
use cues::{Cue, CueBoard, LogCuePlayer};
use modes::{Context, Mode};
use sibyl::{GeminiClient, ModelSet, Oracle};
use starwhisper_config::Settings;
use std::sync::Arc;

fn build_oracle(settings: &Settings) -> Oracle {
    let client = match &settings.base_url {
        Some(url) => GeminiClient::with_base_url(settings.api_key.clone(), url.clone()),
        None => GeminiClient::new(settings.api_key.clone()),
    };
    let defaults = ModelSet::default();
    let models = ModelSet {
        flash: settings.flash_model.clone().unwrap_or(defaults.flash),
        pro: settings.pro_model.clone().unwrap_or(defaults.pro),
    };
    log::info!("Using models {} / {}", models.flash, models.pro);
    Oracle::with_models(Arc::new(client), models)
}

fn print_menu(muted: bool) {
    println!();
    for (i, mode) in Mode::ALL.iter().enumerate() {
        println!("  {GOLD}{}{RESET}. {}", i + 1, mode.title());
    }
    let sound = if muted { "开启" } else { "关闭" };
    hint(&format!("  m. {sound}音效    q. 离开"));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = starwhisper_config::load_settings().context("Failed to load configuration")?;
    let oracle = build_oracle(&settings);
    let cues = CueBoard::new(Box::new(LogCuePlayer), settings.muted);
    let mut ctx = Context {
        oracle,
        cues,
        settings,
        console: Console::new(),
    };

    heading("星语者 Starwhisper");
    loop {
        print_menu(ctx.cues.is_muted());
        let Some(choice) = ctx.console.prompt("选择").await? else {
            break;
        };
        match choice.to_ascii_lowercase().as_str() {
            "q" => break,
            "m" => {
                let muted = !ctx.cues.is_muted();
                ctx.cues.set_muted(muted);
                ctx.cues.play(Cue::Click);
            }
            other => match Mode::from_choice(other) {
                Some(mode) => {
                    ctx.cues.play(Cue::Click);
                    modes::run(mode, &mut ctx).await?;
                }
                None => say_error("请选择菜单中的编号"),
            },
        }
    }

    println!("\n{GOLD}愿星光与你同在。{RESET}");
    Ok(())
}
