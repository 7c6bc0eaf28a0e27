//! Payloads exchanged with the collaborator.

use serde::{Deserialize, Serialize};
use urania::CelestialPosition;

/// Structured daily forecast for one sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResult {
    pub summary: String,
    pub love_score: i32,
    pub career_score: i32,
    pub wealth_score: i32,
    pub health_score: i32,
    pub lucky_color: String,
    pub lucky_number: String,
    pub lucky_item: String,
    pub compatibility: String,
    pub advice: String,
}

/// Sun, moon or rising sign reading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorePlacement {
    pub sign: String,
    pub keywords: Vec<String>,
    pub description: String,
}

/// Keywords as the model may send them: one space-delimited string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    One(String),
    Many(Vec<String>),
}

impl Keywords {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Keywords::One(text) => text.split_whitespace().map(str::to_string).collect(),
            Keywords::Many(list) => list,
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::Many(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RawCorePlacement {
    #[serde(default)]
    sign: String,
    #[serde(default)]
    keywords: Keywords,
    #[serde(default)]
    description: String,
}

impl From<RawCorePlacement> for CorePlacement {
    fn from(raw: RawCorePlacement) -> Self {
        Self {
            sign: raw.sign,
            keywords: raw.keywords.into_vec(),
            description: raw.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RawKeyHouse {
    #[serde(default)]
    house: String,
    #[serde(default)]
    sign: String,
    #[serde(default)]
    keywords: Keywords,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyHouse {
    pub house: String,
    pub sign: String,
    pub keywords: Vec<String>,
    pub description: String,
}

/// The natal analysis as it comes off the wire, before keyword normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNatalAnalysis {
    sun: RawCorePlacement,
    moon: RawCorePlacement,
    rising: RawCorePlacement,
    planetary_positions: Vec<CelestialPosition>,
    key_houses: Vec<RawKeyHouse>,
    talents: Vec<String>,
    challenges: String,
    soul_message: String,
}

impl RawNatalAnalysis {
    pub fn normalize(self) -> NatalAnalysis {
        let key_houses = self
            .key_houses
            .into_iter()
            .map(|h| KeyHouse {
                house: h.house,
                sign: h.sign,
                keywords: h.keywords.into_vec(),
                description: h.description,
            })
            .collect();

        NatalAnalysis {
            sun: self.sun.into(),
            moon: self.moon.into(),
            rising: self.rising.into(),
            planetary_positions: self.planetary_positions,
            key_houses,
            talents: self.talents,
            challenges: self.challenges,
            soul_message: self.soul_message,
        }
    }
}

/// A complete natal chart reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalAnalysis {
    pub sun: CorePlacement,
    pub moon: CorePlacement,
    pub rising: CorePlacement,
    pub planetary_positions: Vec<CelestialPosition>,
    pub key_houses: Vec<KeyHouse>,
    pub talents: Vec<String>,
    pub challenges: String,
    pub soul_message: String,
}

impl NatalAnalysis {
    /// Parse and normalize a model response.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawNatalAnalysis>(text).map(RawNatalAnalysis::normalize)
    }
}

/// Birth data, passed to the model verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalRequest {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
}

impl NatalRequest {
    /// Name of the first required field left blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("birth_date", &self.birth_date),
            ("birth_time", &self.birth_time),
            ("birth_place", &self.birth_place),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Role name on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATAL_JSON: &str = r#"{
        "sun": {"sign": "狮子座", "keywords": "热情 自信 慷慨", "description": "..."},
        "moon": {"sign": "双鱼座", "keywords": "敏感 温柔 梦幻", "description": "..."},
        "rising": {"sign": "天蝎座", "keywords": "神秘 专注 深邃", "description": "..."},
        "planetaryPositions": [
            {"name": "Sun", "sign": "Leo", "angle": 135.2},
            {"name": "ASC", "sign": "Scorpio", "angle": 215.5}
        ],
        "keyHouses": [
            {"house": "第十宫 (官禄宫)", "sign": "狮子座", "keywords": "事业 名望", "description": "..."},
            {"house": "第四宫 (田宅宫)", "sign": "水瓶座", "keywords": ["家庭", "根基"], "description": "..."},
            {"house": "第七宫 (夫妻宫)", "sign": "金牛座", "keywords": "", "description": "..."}
        ],
        "talents": ["领导力", "艺术感", "直觉"],
        "challenges": "学会放下控制",
        "soulMessage": "星辰为你照亮归途。"
    }"#;

    #[test]
    fn keyword_string_splits_on_whitespace() {
        let keywords = Keywords::One("事业 名望".to_string()).into_vec();
        assert_eq!(keywords, vec!["事业", "名望"]);
    }

    #[test]
    fn keyword_list_is_unchanged() {
        let list = vec!["家庭".to_string(), "根基".to_string()];
        assert_eq!(Keywords::Many(list.clone()).into_vec(), list);
    }

    #[test]
    fn natal_analysis_normalizes_mixed_keywords() {
        let analysis = NatalAnalysis::from_json(NATAL_JSON).unwrap();
        assert_eq!(analysis.key_houses.len(), 3);
        assert_eq!(analysis.key_houses[0].keywords, vec!["事业", "名望"]);
        assert_eq!(analysis.key_houses[1].keywords, vec!["家庭", "根基"]);
        assert!(analysis.key_houses[2].keywords.is_empty());
        assert_eq!(analysis.sun.keywords, vec!["热情", "自信", "慷慨"]);
        assert_eq!(analysis.planetary_positions[1].name, "ASC");
        assert_eq!(analysis.soul_message, "星辰为你照亮归途。");
    }

    #[test]
    fn core_placement_accepts_keyword_list() {
        let json = NATAL_JSON.replace(
            r#""keywords": "敏感 温柔 梦幻""#,
            r#""keywords": ["敏感", "温柔", "梦幻"]"#,
        );
        let analysis = NatalAnalysis::from_json(&json).unwrap();
        assert_eq!(analysis.moon.keywords, vec!["敏感", "温柔", "梦幻"]);
        assert_eq!(analysis.rising.keywords, vec!["神秘", "专注", "深邃"]);
    }

    #[test]
    fn natal_analysis_rejects_missing_required_field() {
        assert!(NatalAnalysis::from_json(r#"{"sun": {}}"#).is_err());
    }

    #[test]
    fn horoscope_uses_camel_case_keys() {
        let json = r#"{
            "summary": "s", "loveScore": 80, "careerScore": 70, "wealthScore": 60,
            "healthScore": 90, "luckyColor": "金色", "luckyNumber": "3",
            "luckyItem": "羽毛", "compatibility": "天秤座", "advice": "a"
        }"#;
        let result: HoroscopeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.love_score, 80);
        assert_eq!(result.lucky_color, "金色");
    }

    #[test]
    fn blank_natal_field_is_reported() {
        let request = NatalRequest {
            name: "Ada".into(),
            birth_date: "1990-08-08".into(),
            birth_time: "  ".into(),
            birth_place: "Shanghai".into(),
        };
        assert_eq!(request.missing_field(), Some("birth_time"));
    }
}
