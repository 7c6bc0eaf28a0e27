use super::{run_gated, Context};
use crate::console::{heading, hint, CYAN, GOLD, RESET};
use crate::cues::Cue;
use crate::gate::RequestGate;
use std::time::Duration;
use tokio::time::Instant;

/// Length of each breathing phase.
pub const PHASE_SECS: u64 = 4;
const CYCLE_SECS: u64 = PHASE_SECS * 3;

const MANTRA_PLACEHOLDER: &str = "点击开始，获取今日灵性真言";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Phase of a 4-4-4 cycle after `elapsed` time in session.
    pub fn at(elapsed: Duration) -> Self {
        match (elapsed.as_secs() % CYCLE_SECS) / PHASE_SECS {
            0 => BreathPhase::Inhale,
            1 => BreathPhase::Hold,
            _ => BreathPhase::Exhale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "吸气",
            BreathPhase::Hold => "屏息",
            BreathPhase::Exhale => "呼气",
        }
    }
}

/// `m:ss`
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub async fn run(ctx: &mut Context) -> anyhow::Result<()> {
    heading("星空冥想");
    let mut gate = RequestGate::new();
    let mut mantra = MANTRA_PLACEHOLDER.to_string();
    let mut total = Duration::ZERO;

    loop {
        println!("\n{GOLD}「{mantra}」{RESET}");
        let Some(answer) = ctx.console.prompt("回车开始 | m 新的真言 | q 返回").await? else {
            return Ok(());
        };
        match answer.to_ascii_lowercase().as_str() {
            "q" => return Ok(()),
            "m" => refresh_mantra(ctx, &mut gate, &mut mantra).await?,
            "" => {
                ctx.cues.play(Cue::Click);
                if mantra == MANTRA_PLACEHOLDER {
                    refresh_mantra(ctx, &mut gate, &mut mantra).await?;
                    println!("\n{GOLD}「{mantra}」{RESET}");
                }
                total = breathe(ctx, total).await?;
            }
            _ => hint("回车开始呼吸练习"),
        }
    }
}

async fn refresh_mantra(
    ctx: &mut Context,
    gate: &mut RequestGate,
    mantra: &mut String,
) -> anyhow::Result<()> {
    ctx.cues.play(Cue::Click);
    let oracle = ctx.oracle.clone();
    let work = async move { oracle.generate_mantra().await };
    if let Some(fresh) = run_gated(&mut ctx.console, gate, work).await? {
        ctx.cues.play(Cue::Magic);
        *mantra = fresh;
    }
    Ok(())
}

/// Run the breathing guide until the user presses enter. The session timer
/// resumes from `already`; the new total is returned.
async fn breathe(ctx: &mut Context, already: Duration) -> anyhow::Result<Duration> {
    hint("回车暂停");
    let started = Instant::now();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut last_phase = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let elapsed = started.elapsed();
                let phase = BreathPhase::at(elapsed);
                if last_phase != Some(phase) {
                    if phase == BreathPhase::Inhale {
                        ctx.cues.play(Cue::BreathIn);
                    }
                    println!(
                        "{CYAN}{}{RESET}  {}",
                        format_time((already + elapsed).as_secs()),
                        phase.label()
                    );
                    last_phase = Some(phase);
                }
            }
            line = ctx.console.read_line() => {
                line?;
                ctx.cues.play(Cue::Click);
                let total = already + started.elapsed();
                hint(&format!("已暂停  {}", format_time(total.as_secs())));
                return Ok(total);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_second_cycle() {
        let phase = |s| BreathPhase::at(Duration::from_secs(s));
        assert_eq!(phase(0), BreathPhase::Inhale);
        assert_eq!(phase(3), BreathPhase::Inhale);
        assert_eq!(phase(4), BreathPhase::Hold);
        assert_eq!(phase(8), BreathPhase::Exhale);
        assert_eq!(phase(11), BreathPhase::Exhale);
        assert_eq!(phase(12), BreathPhase::Inhale);
        assert_eq!(BreathPhase::at(Duration::from_millis(7999)), BreathPhase::Hold);
    }

    #[test]
    fn timer_format() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(3600), "60:00");
    }
}
