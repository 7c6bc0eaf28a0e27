use super::Context;
use crate::console::{heading, Console, GOLD, RESET};
use crate::cues::Cue;
use sibyl::ChatRole;

const SPEAKER: &str = "星语者";

pub async fn run(ctx: &mut Context) -> anyhow::Result<()> {
    heading("星语对话");
    let mut session = ctx.oracle.open_chat();
    for message in session.history() {
        if message.role == ChatRole::Model {
            println!("{GOLD}{SPEAKER}:{RESET} {}", message.text);
        }
    }

    loop {
        let Some(text) = ctx.console.prompt("你 (q 返回)").await? else {
            return Ok(());
        };
        if text.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        if text.is_empty() {
            continue;
        }
        ctx.cues.play(Cue::Message);

        print!("{GOLD}{SPEAKER}:{RESET} ");
        let mut printed = 0;
        let mut shown = String::new();
        let reply = session
            .send(&text, |partial| {
                if let Err(e) = Console::stream_delta(&mut printed, partial) {
                    log::debug!("stdout write failed: {}", e);
                }
                shown.clear();
                shown.push_str(partial);
            })
            .await;

        if reply.text == shown {
            println!();
        } else {
            // the turn failed, possibly after a partial reply
            if !shown.is_empty() {
                println!();
            }
            println!("{}", reply.text);
        }
    }
}
