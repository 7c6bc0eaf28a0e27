pub mod chat;
pub mod daily;
pub mod library;
pub mod meditation;
pub mod natal;
pub mod tarot;

use crate::console::{hint, Console};
use crate::cues::CueBoard;
use crate::gate::RequestGate;
use sibyl::Oracle;
use starwhisper_config::Settings;
use std::future::Future;
use std::io;

/// Everything a mode needs, owned by the main loop.
pub struct Context {
    pub oracle: Oracle,
    pub cues: CueBoard,
    pub settings: Settings,
    pub console: Console,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Daily,
    Tarot,
    Natal,
    Chat,
    Meditation,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Daily,
        Mode::Tarot,
        Mode::Natal,
        Mode::Chat,
        Mode::Meditation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Daily => "每日运势",
            Mode::Tarot => "塔罗神谕",
            Mode::Natal => "灵魂星图",
            Mode::Chat => "星语对话",
            Mode::Meditation => "星空冥想",
        }
    }

    /// Menu choice: 1-based number or English name.
    pub fn from_choice(choice: &str) -> Option<Mode> {
        let choice = choice.trim();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Mode::ALL.get(i).copied());
        }
        Mode::ALL
            .iter()
            .copied()
            .find(|m| format!("{m:?}").eq_ignore_ascii_case(choice))
    }
}

pub async fn run(mode: Mode, ctx: &mut Context) -> anyhow::Result<()> {
    log::debug!("Entering {:?}", mode);
    match mode {
        Mode::Daily => daily::run(ctx).await,
        Mode::Tarot => tarot::run(ctx).await,
        Mode::Natal => natal::run(ctx).await,
        Mode::Chat => chat::run(ctx).await,
        Mode::Meditation => meditation::run(ctx).await,
    }
}

/// Run `work` in the background while the console stays responsive.
///
/// Returns `None` if the gate is busy, the user cancels with `c`, input
/// ends, or the result arrives for a ticket that is no longer current.
pub async fn run_gated<T, F>(
    console: &mut Console,
    gate: &mut RequestGate,
    work: F,
) -> io::Result<Option<T>>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let Some(ticket) = gate.begin() else {
        hint("上一个请求仍在进行中，请稍候。");
        return Ok(None);
    };
    hint("正在连接星象… (输入 c 取消)");
    let mut task = tokio::spawn(work);

    loop {
        tokio::select! {
            joined = &mut task => {
                let current = gate.finish(ticket);
                return match joined {
                    Ok(value) if current => Ok(Some(value)),
                    Ok(_) => Ok(None),
                    Err(e) => {
                        log::error!("Request task failed: {}", e);
                        Ok(None)
                    }
                };
            }
            line = console.read_line() => match line? {
                Some(input) if input.eq_ignore_ascii_case("c") => {
                    gate.cancel();
                    task.abort();
                    hint("已取消。");
                    return Ok(None);
                }
                Some(_) => hint("星象仍在解读中… (输入 c 取消)"),
                None => {
                    gate.cancel();
                    task.abort();
                    return Ok(None);
                }
            },
        }
    }
}
