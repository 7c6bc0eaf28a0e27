use super::{run_gated, Context};
use crate::console::{heading, hint, render_markdown, GOLD, RESET};
use crate::cues::Cue;
use crate::gate::RequestGate;
use sibyl::{draw_spread, DrawnCard, Orientation};
use std::time::Duration;

const SHUFFLE_PAUSE: Duration = Duration::from_millis(2500);
const FLIP_PAUSE: Duration = Duration::from_millis(600);

pub async fn run(ctx: &mut Context) -> anyhow::Result<()> {
    heading("塔罗神谕");
    let mut gate = RequestGate::new();

    loop {
        hint("\"向宇宙敞开心扉，在心中默念你的疑惑...\"");
        let Some(question) = ctx.console.prompt_required("你的问题 (q 返回)").await? else {
            return Ok(());
        };
        if question.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        ctx.cues.play(Cue::Click);
        ctx.cues.play(Cue::Shuffle);
        println!("洗牌中…");
        tokio::time::sleep(SHUFFLE_PAUSE).await;

        let cards = draw_spread(&mut rand::thread_rng());
        for (i, _) in cards.iter().enumerate() {
            if ctx
                .console
                .prompt(&format!("按回车抽取第 {} 张牌", i + 1))
                .await?
                .is_none()
            {
                return Ok(());
            }
            ctx.cues.play(Cue::Draw);
        }

        for card in &cards {
            tokio::time::sleep(FLIP_PAUSE).await;
            ctx.cues.play(Cue::Flip);
            println!("{}", describe(card));
        }

        let oracle = ctx.oracle.clone();
        let work = async move { oracle.interpret_tarot(&question, &cards).await };
        if let Some(reading) = run_gated(&mut ctx.console, &mut gate, work).await? {
            ctx.cues.play(Cue::Magic);
            println!("\n{}\n", render_markdown(&reading));
        }

        match ctx.console.prompt("回车重新占卜，q 返回").await? {
            Some(answer) if !answer.eq_ignore_ascii_case("q") => ctx.cues.play(Cue::Click),
            _ => return Ok(()),
        }
    }
}

fn describe(card: &DrawnCard) -> String {
    let arrow = match card.orientation {
        Orientation::Upright => "↑",
        Orientation::Reversed => "↓",
    };
    format!(
        "  {}  {GOLD}{}{RESET} ({}) {} {}",
        card.position.label(),
        card.card.name_cn,
        card.card.name,
        arrow,
        card.orientation.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sibyl::{SpreadPosition, MAJOR_ARCANA};

    #[test]
    fn reversed_card_is_marked() {
        let card = DrawnCard {
            card: MAJOR_ARCANA[16],
            orientation: Orientation::Reversed,
            position: SpreadPosition::Present,
        };
        let line = describe(&card);
        assert!(line.contains("现在/现状"));
        assert!(line.contains("高塔"));
        assert!(line.ends_with("↓ 逆位"));
    }
}
