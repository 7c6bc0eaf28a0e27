use super::{library, run_gated, Context};
use crate::console::{heading, hint, say_error, BOLD, CYAN, GOLD, RESET};
use crate::cues::Cue;
use crate::gate::RequestGate;
use anyhow::Context as _;
use sibyl::fallback::NATAL_RETRY_MESSAGE;
use sibyl::{CorePlacement, NatalAnalysis, NatalRequest};
use std::path::{Path, PathBuf};
use urania::rendering::primitives::Point;
use urania::{DetailCard, NatalWheel, Propagation, WheelConfig};

/// A command typed while the wheel is on screen.
#[derive(Debug, Clone, PartialEq)]
enum WheelCommand {
    Select(usize),
    Click(Point),
    Close,
    List,
    Library,
    New,
    Back,
}

fn parse_command(input: &str) -> Option<WheelCommand> {
    let mut words = input.split_whitespace();
    let first = words.next()?;
    match first.to_ascii_lowercase().as_str() {
        "x" | "close" => Some(WheelCommand::Close),
        "l" | "list" => Some(WheelCommand::List),
        "lib" | "library" => Some(WheelCommand::Library),
        "new" => Some(WheelCommand::New),
        "q" | "back" => Some(WheelCommand::Back),
        "click" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            Some(WheelCommand::Click(Point { x, y }))
        }
        number => number
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(WheelCommand::Select),
    }
}

pub async fn run(ctx: &mut Context) -> anyhow::Result<()> {
    heading("灵魂星图");
    let mut gate = RequestGate::new();
    let mut wheel = NatalWheel::new(WheelConfig::with_size(ctx.settings.chart_size));

    loop {
        let birth = match read_form(ctx).await? {
            Form::Submitted(birth) => birth,
            Form::Library => {
                ctx.cues.play(Cue::Click);
                library::browse(ctx).await?;
                continue;
            }
            Form::Back => return Ok(()),
        };
        ctx.cues.play(Cue::Click);

        let oracle = ctx.oracle.clone();
        let request = birth.clone();
        let work = async move { oracle.analyze_natal_chart(&request).await };
        let analysis = match run_gated(&mut ctx.console, &mut gate, work).await? {
            Some(Some(analysis)) => analysis,
            Some(None) => {
                say_error(NATAL_RETRY_MESSAGE);
                continue;
            }
            None => continue,
        };

        ctx.cues.play(Cue::Magic);
        print_analysis(&analysis);
        wheel.set_positions(analysis.planetary_positions.clone());
        let path = chart_path(&ctx.settings.output_dir, &birth.name);

        if !explore(ctx, &mut wheel, &path).await? {
            return Ok(());
        }
        wheel.reset();
    }
}

enum Form {
    Submitted(NatalRequest),
    Library,
    Back,
}

async fn read_form(ctx: &mut Context) -> anyhow::Result<Form> {
    hint("输入出生信息 (任一项输入 q 返回，姓名处输入 lib 打开占星百科)");
    let mut request = NatalRequest::default();
    for (label, field) in [
        ("姓名", &mut request.name),
        ("出生日期 (如 1990-08-08)", &mut request.birth_date),
        ("出生时间 (如 07:30)", &mut request.birth_time),
        ("出生地点", &mut request.birth_place),
    ] {
        let Some(answer) = ctx.console.prompt_required(label).await? else {
            return Ok(Form::Back);
        };
        if answer.eq_ignore_ascii_case("q") {
            return Ok(Form::Back);
        }
        if label == "姓名" && is_library_command(&answer) {
            return Ok(Form::Library);
        }
        *field = answer;
    }
    Ok(Form::Submitted(request))
}

fn is_library_command(input: &str) -> bool {
    matches!(parse_command(input), Some(WheelCommand::Library))
}

/// Wheel interaction loop. Returns false when the user leaves the mode.
async fn explore(ctx: &mut Context, wheel: &mut NatalWheel, path: &Path) -> anyhow::Result<bool> {
    list_bodies(wheel);
    write_chart(wheel, path).await;

    loop {
        hint(&wheel.spec().metadata.hint);
        let Some(input) = ctx
            .console
            .prompt("编号选择行星 | click x y | x 关闭 | list | lib 百科 | new 新星盘 | q 返回")
            .await?
        else {
            return Ok(false);
        };

        match parse_command(&input) {
            Some(WheelCommand::Select(index)) => {
                if wheel.select(index) {
                    ctx.cues.play(Cue::Click);
                } else {
                    say_error("没有这个编号的行星");
                    continue;
                }
            }
            Some(WheelCommand::Click(point)) => match wheel.click(point) {
                Propagation::Stop => ctx.cues.play(Cue::Click),
                Propagation::Continue => {
                    hint("这里没有行星。");
                    continue;
                }
            },
            Some(WheelCommand::Close) => wheel.close(),
            Some(WheelCommand::List) => {
                list_bodies(wheel);
                continue;
            }
            Some(WheelCommand::Library) => {
                ctx.cues.play(Cue::Click);
                library::browse(ctx).await?;
                continue;
            }
            Some(WheelCommand::New) => {
                ctx.cues.play(Cue::Click);
                return Ok(true);
            }
            Some(WheelCommand::Back) => return Ok(false),
            None => {
                say_error("无法识别的指令");
                continue;
            }
        }

        if let Some(detail) = wheel.detail() {
            print_detail(&detail);
        }
        write_chart(wheel, path).await;
    }
}

fn list_bodies(wheel: &NatalWheel) {
    for placement in &wheel.layout().placements {
        println!(
            "  {:>2}. {} {}  {}",
            placement.index + 1,
            placement.glyph.glyph,
            placement.position.name,
            placement.position.sign
        );
    }
    if wheel.layout().is_empty() {
        hint("星图中没有行星位置。");
    }
}

fn print_detail(detail: &DetailCard) {
    println!(
        "\n  {GOLD}{BOLD}{}{RESET}  {}\n  {}  {}\n",
        detail.glyph,
        detail.name,
        detail.sign,
        detail.position_label()
    );
}

fn print_core(title: &str, placement: &CorePlacement) {
    println!("{CYAN}{title} · {}{RESET}  {}", placement.sign, placement.keywords.join(" "));
    println!("  {}", placement.description);
}

fn print_analysis(analysis: &NatalAnalysis) {
    println!();
    print_core("太阳", &analysis.sun);
    print_core("月亮", &analysis.moon);
    print_core("上升", &analysis.rising);

    println!("\n{GOLD}{BOLD}关键宫位{RESET}");
    for house in &analysis.key_houses {
        println!("  {} ({})  {}", house.house, house.sign, house.keywords.join(" · "));
        println!("    {}", house.description);
    }

    println!("\n{GOLD}{BOLD}天赋{RESET}  {}", analysis.talents.join("、"));
    println!("{GOLD}{BOLD}课题{RESET}  {}", analysis.challenges);
    println!("\n{GOLD}「{}」{RESET}\n", analysis.soul_message);
}

/// `natal-<name>.svg` inside `dir`, with unsafe filename characters replaced.
fn chart_path(dir: &Path, name: &str) -> PathBuf {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    dir.join(format!("natal-{slug}.svg"))
}

async fn write_chart(wheel: &NatalWheel, path: &Path) {
    let result: anyhow::Result<()> = async {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(path, wheel.to_svg())
            .await
            .with_context(|| format!("Failed to write chart to {}", path.display()))
    }
    .await;

    match result {
        Ok(()) => hint(&format!("星盘已保存: {}", path.display())),
        Err(e) => {
            log::error!("{:#}", e);
            say_error("星盘图保存失败");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(parse_command("3"), Some(WheelCommand::Select(2)));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("X"), Some(WheelCommand::Close));
        assert_eq!(
            parse_command("click 12.5 40"),
            Some(WheelCommand::Click(Point { x: 12.5, y: 40.0 }))
        );
        assert_eq!(parse_command("click 12"), None);
        assert_eq!(parse_command("new"), Some(WheelCommand::New));
        assert_eq!(parse_command("LIB"), Some(WheelCommand::Library));
        assert!(is_library_command("library"));
        assert!(!is_library_command("Libra"));
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn chart_path_is_sanitized() {
        let path = chart_path(Path::new("charts"), "Ada / 林");
        assert_eq!(path, PathBuf::from("charts/natal-Ada---林.svg"));
    }
}
