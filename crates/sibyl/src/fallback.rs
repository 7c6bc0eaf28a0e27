//! Values shown when the collaborator fails or returns nothing.

use crate::types::HoroscopeResult;

pub const NEUTRAL_SCORE: i32 = 50;

pub const TAROT_FALLBACK: &str = "连接宇宙能量时遇到干扰，请稍后再试。";

/// Shown by the front-end when natal analysis yields nothing.
pub const NATAL_RETRY_MESSAGE: &str = "星盘解析失败，请检查网络或重试。";

pub const CHAT_FALLBACK: &str = "星象连接中断，请稍后再试。";

pub const CHAT_GREETING: &str =
    "你好，我是你的专属星象顾问。无论是关于星盘的困惑，还是生活中的迷茫，我都在这里倾听。你想聊些什么？";

pub const MANTRA_FALLBACK: &str = "我与宇宙同频，内心宁静如海。";

pub fn horoscope() -> HoroscopeResult {
    HoroscopeResult {
        summary: "星象迷雾笼罩，请静心冥想。".to_string(),
        love_score: NEUTRAL_SCORE,
        career_score: NEUTRAL_SCORE,
        wealth_score: NEUTRAL_SCORE,
        health_score: NEUTRAL_SCORE,
        lucky_color: "星空紫".to_string(),
        lucky_number: "7".to_string(),
        lucky_item: "水晶".to_string(),
        compatibility: "自己".to_string(),
        advice: "保持内心的平静。".to_string(),
    }
}
