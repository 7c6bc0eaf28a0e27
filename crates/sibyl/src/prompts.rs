//! Request builders for each request kind.

use crate::client::GenerationRequest;
use crate::persona::SYSTEM_INSTRUCTION;
use crate::schema::{horoscope_schema, natal_schema};
use crate::tarot::DrawnCard;
use crate::types::NatalRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const HOROSCOPE_TEMPERATURE: f32 = 0.8;
pub const TAROT_TEMPERATURE: f32 = 0.85;
pub const MANTRA_TEMPERATURE: f32 = 1.0;
pub const NATAL_THINKING_BUDGET: u32 = 4096;

/// Question used when the tarot asker leaves theirs blank.
pub const DEFAULT_TAROT_QUESTION: &str = "我的近期运势指引";

const MANTRA_PROMPT: &str =
    "请生成一句简短、治愈、充满宇宙能量的中文冥想真言（Mantra），不要超过20个字。不要解释，直接返回句子。";

/// Model identifiers per request kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSet {
    /// Horoscope, tarot, chat and mantra.
    pub flash: String,
    /// Natal analysis.
    pub pro: String,
}

impl Default for ModelSet {
    fn default() -> Self {
        Self {
            flash: "gemini-3-flash-preview".to_string(),
            pro: "gemini-3-pro-preview".to_string(),
        }
    }
}

pub fn horoscope(models: &ModelSet, sign: &str, date: NaiveDate) -> GenerationRequest {
    let prompt = format!(
        "请为{}提供今天的详细运势预测。今天是 {}。",
        sign,
        date.format("%Y/%-m/%-d")
    );
    GenerationRequest::new(&models.flash, prompt)
        .with_system_instruction(SYSTEM_INSTRUCTION)
        .with_schema(horoscope_schema())
        .with_temperature(HOROSCOPE_TEMPERATURE)
}

pub fn tarot(models: &ModelSet, question: &str, cards: &[DrawnCard]) -> GenerationRequest {
    let question = match question.trim() {
        "" => DEFAULT_TAROT_QUESTION,
        q => q,
    };
    let spread = cards
        .iter()
        .map(DrawnCard::prompt_line)
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = format!(
        "求问者的问题是: \"{question}\"\n\n\
         抽出的牌阵如下 (圣三角牌阵):\n{spread}\n\n\
         请作为一位资深塔罗师，为求问者进行深度解读。请使用Markdown格式，包含【牌面启示】、【宇宙指引】和【行动建议】三个部分。"
    );
    GenerationRequest::new(&models.flash, prompt)
        .with_system_instruction(SYSTEM_INSTRUCTION)
        .with_temperature(TAROT_TEMPERATURE)
}

pub fn natal(models: &ModelSet, request: &NatalRequest) -> GenerationRequest {
    let prompt = format!(
        "请根据以下出生信息生成深度星盘解读：\n\
         姓名: {}\n\
         出生日期: {}\n\
         出生时间: {}\n\
         出生地点: {}\n\n\
         请重点分析：\n\
         1. 太阳、月亮、上升的基本格局。\n\
         2. 估算主要行星（太阳、月亮、水星、金星、火星、木星、土星、天王、海王、冥王）和上升点(ASC)的黄道位置（0-360度）。\n\
         3. 计算或推演最重要的3个宫位，并给出解读。",
        request.name, request.birth_date, request.birth_time, request.birth_place
    );
    GenerationRequest::new(&models.pro, prompt)
        .with_system_instruction(SYSTEM_INSTRUCTION)
        .with_schema(natal_schema())
        .with_thinking_budget(NATAL_THINKING_BUDGET)
}

/// Mantra requests carry no persona.
pub fn mantra(models: &ModelSet) -> GenerationRequest {
    GenerationRequest::new(&models.flash, MANTRA_PROMPT).with_temperature(MANTRA_TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tarot::{Orientation, SpreadPosition, MAJOR_ARCANA};

    fn spread() -> Vec<DrawnCard> {
        SpreadPosition::ALL
            .iter()
            .enumerate()
            .map(|(i, &position)| DrawnCard {
                card: MAJOR_ARCANA[i + 17],
                orientation: if i == 1 {
                    Orientation::Reversed
                } else {
                    Orientation::Upright
                },
                position,
            })
            .collect()
    }

    #[test]
    fn horoscope_prompt_names_sign_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let request = horoscope(&ModelSet::default(), "白羊座", date);
        assert_eq!(request.prompt(), "请为白羊座提供今天的详细运势预测。今天是 2026/3/5。");
        assert_eq!(request.temperature, Some(0.8));
        assert!(request.response_schema.is_some());
        assert_eq!(request.model, "gemini-3-flash-preview");
    }

    #[test]
    fn blank_tarot_question_uses_default() {
        let request = tarot(&ModelSet::default(), "   ", &spread());
        assert!(request.prompt().contains("\"我的近期运势指引\""));
        assert!(request.prompt().contains("- 现在/现状: 月亮 (The Moon) [逆位]"));
        assert!(request.prompt().contains("- 未来/结果: 太阳 (The Sun) [正位]"));
        assert!(request.response_schema.is_none());
    }

    #[test]
    fn natal_uses_pro_model_with_thinking() {
        let birth = NatalRequest {
            name: "Ada".into(),
            birth_date: "1990-08-08".into(),
            birth_time: "07:30".into(),
            birth_place: "上海".into(),
        };
        let request = natal(&ModelSet::default(), &birth);
        assert_eq!(request.model, "gemini-3-pro-preview");
        assert_eq!(request.thinking_budget, Some(4096));
        assert!(request.prompt().contains("出生地点: 上海"));
    }

    #[test]
    fn mantra_has_no_persona() {
        let request = mantra(&ModelSet::default());
        assert!(request.system_instruction.is_none());
        assert_eq!(request.temperature, Some(1.0));
    }
}
