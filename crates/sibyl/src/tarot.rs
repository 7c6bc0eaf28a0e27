//! The Major Arcana deck and the three-card spread.

use rand::seq::index::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance that a drawn card lands reversed.
pub const REVERSAL_PROBABILITY: f64 = 0.7;

pub const SPREAD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub id: u8,
    pub name: &'static str,
    pub name_cn: &'static str,
}

const fn card(id: u8, name_cn: &'static str, name: &'static str) -> TarotCard {
    TarotCard { id, name, name_cn }
}

pub const MAJOR_ARCANA: [TarotCard; 22] = [
    card(0, "愚者", "The Fool"),
    card(1, "魔术师", "The Magician"),
    card(2, "女祭司", "The High Priestess"),
    card(3, "皇后", "The Empress"),
    card(4, "皇帝", "The Emperor"),
    card(5, "教皇", "The Hierophant"),
    card(6, "恋人", "The Lovers"),
    card(7, "战车", "The Chariot"),
    card(8, "力量", "Strength"),
    card(9, "隐士", "The Hermit"),
    card(10, "命运之轮", "Wheel of Fortune"),
    card(11, "正义", "Justice"),
    card(12, "倒吊人", "The Hanged Man"),
    card(13, "死神", "Death"),
    card(14, "节制", "Temperance"),
    card(15, "恶魔", "The Devil"),
    card(16, "高塔", "The Tower"),
    card(17, "星星", "The Star"),
    card(18, "月亮", "The Moon"),
    card(19, "太阳", "The Sun"),
    card(20, "审判", "Judgement"),
    card(21, "世界", "The World"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Upright => "正位",
            Orientation::Reversed => "逆位",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadPosition {
    Past,
    Present,
    Future,
}

impl SpreadPosition {
    pub const ALL: [SpreadPosition; SPREAD_SIZE] = [
        SpreadPosition::Past,
        SpreadPosition::Present,
        SpreadPosition::Future,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpreadPosition::Past => "过去/根源",
            SpreadPosition::Present => "现在/现状",
            SpreadPosition::Future => "未来/结果",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card: TarotCard,
    pub orientation: Orientation,
    pub position: SpreadPosition,
}

impl DrawnCard {
    /// Prompt line, e.g. `- 过去/根源: 愚者 (The Fool) [正位]`.
    pub fn prompt_line(&self) -> String {
        format!(
            "- {}: {} ({}) [{}]",
            self.position.label(),
            self.card.name_cn,
            self.card.name,
            self.orientation.label()
        )
    }
}

/// Draw three distinct cards for the past/present/future spread.
pub fn draw_spread<R: Rng>(rng: &mut R) -> [DrawnCard; SPREAD_SIZE] {
    let picks = sample(&mut *rng, MAJOR_ARCANA.len(), SPREAD_SIZE).into_vec();
    SpreadPosition::ALL.map(|position| {
        let index = position as usize;
        let orientation = if rng.gen_bool(REVERSAL_PROBABILITY) {
            Orientation::Reversed
        } else {
            Orientation::Upright
        };
        DrawnCard {
            card: MAJOR_ARCANA[picks[index]],
            orientation,
            position,
        }
    })
}
