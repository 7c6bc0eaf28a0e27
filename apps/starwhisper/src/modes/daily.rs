use super::{run_gated, Context};
use crate::console::{heading, say_error, score_bar, BOLD, GOLD, RESET};
use crate::cues::Cue;
use crate::gate::RequestGate;
use chrono::Local;
use sibyl::HoroscopeResult;
use urania::zodiac::{find_sign, ZodiacSegment, ZODIAC};

pub async fn run(ctx: &mut Context) -> anyhow::Result<()> {
    heading("每日运势");
    let mut gate = RequestGate::new();

    loop {
        for (i, sign) in ZODIAC.iter().enumerate() {
            print!("{:>2}. {} {}   ", i + 1, sign.glyph, sign.label);
            if i % 4 == 3 {
                println!();
            }
        }
        ctx.cues.play(Cue::Hover);

        let Some(answer) = ctx.console.prompt("选择星座 (编号或名称，q 返回)").await? else {
            return Ok(());
        };
        if answer.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let Some(sign) = parse_sign(&answer) else {
            say_error("未识别的星座");
            continue;
        };
        ctx.cues.play(Cue::Click);

        let oracle = ctx.oracle.clone();
        let today = Local::now().date_naive();
        let work = async move { oracle.daily_horoscope(sign.label, today).await };
        if let Some(horoscope) = run_gated(&mut ctx.console, &mut gate, work).await? {
            ctx.cues.play(Cue::Success);
            print_horoscope(sign, &horoscope);
        }
    }
}

fn parse_sign(input: &str) -> Option<&'static ZodiacSegment> {
    match input.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| ZODIAC.get(i)),
        Err(_) => find_sign(input),
    }
}

fn print_horoscope(sign: &ZodiacSegment, h: &HoroscopeResult) {
    println!("\n{GOLD}{BOLD}{} {}{RESET}", sign.glyph, sign.label);
    println!("{}\n", h.summary);
    for (label, score) in [
        ("爱情", h.love_score),
        ("事业", h.career_score),
        ("财富", h.wealth_score),
        ("健康", h.health_score),
    ] {
        println!("  {label}  {}", score_bar(score));
    }
    println!();
    println!("  幸运色: {}   幸运数字: {}   幸运物: {}", h.lucky_color, h.lucky_number, h.lucky_item);
    println!("  速配星座: {}", h.compatibility);
    println!("\n{GOLD}「{}」{RESET}\n", h.advice);
}
