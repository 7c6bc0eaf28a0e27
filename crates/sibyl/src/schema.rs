//! Response schemas sent with the structured request kinds.

use serde_json::{json, Value};

pub fn horoscope_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING", "description": "今日整体运势的一段充满画面感的描述（约60字）。" },
            "loveScore": { "type": "INTEGER", "description": "爱情运势评分 (0-100)." },
            "careerScore": { "type": "INTEGER", "description": "事业运势评分 (0-100)." },
            "wealthScore": { "type": "INTEGER", "description": "财运评分 (0-100)." },
            "healthScore": { "type": "INTEGER", "description": "健康评分 (0-100)." },
            "luckyColor": { "type": "STRING", "description": "今天的幸运色。" },
            "luckyNumber": { "type": "STRING", "description": "今天的幸运数字。" },
            "luckyItem": { "type": "STRING", "description": "今天的幸运物品。" },
            "compatibility": { "type": "STRING", "description": "今日最速配的星座。" },
            "advice": { "type": "STRING", "description": "一条如同神谕般的一句话建议。" }
        },
        "required": [
            "summary", "loveScore", "careerScore", "wealthScore", "healthScore",
            "luckyColor", "luckyNumber", "luckyItem", "compatibility", "advice"
        ]
    })
}

fn core_placement(sign: &str, keywords: &str, description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sign": { "type": "STRING", "description": sign },
            "keywords": { "type": "STRING", "description": keywords },
            "description": { "type": "STRING", "description": description }
        }
    })
}

pub fn natal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sun": core_placement("太阳星座名称", "3个核心性格关键词，用空格分隔", "对核心本我的深度分析（约100字）"),
            "moon": core_placement("月亮星座名称", "3个情感关键词，用空格分隔", "对内在情感需求的深度分析（约100字）"),
            "rising": core_placement("上升星座名称", "3个外在表现关键词，用空格分隔", "对人格面具的深度分析（约100字）"),
            "planetaryPositions": {
                "type": "ARRAY",
                "description": "Calculate approximate absolute zodiac degrees (0-360, where 0 is Aries 0°) for: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto, and ASC (Ascendant).",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Planet Name (e.g., 'Sun', 'Moon', 'ASC')" },
                        "sign": { "type": "STRING", "description": "Zodiac Sign Name" },
                        "angle": { "type": "NUMBER", "description": "Absolute angle 0-360 degrees" }
                    }
                }
            },
            "keyHouses": {
                "type": "ARRAY",
                "description": "根据出生信息，选取3个对该用户最重要或最有特点的后天宫位进行解读（如第1、4、7、10宫，或群星聚集的宫位）。",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "house": { "type": "STRING", "description": "宫位名称，例如'第十宫 (官禄宫)'" },
                        "sign": { "type": "STRING", "description": "宫头落入的星座" },
                        "keywords": { "type": "STRING", "description": "宫位核心议题关键词，2-3个，空格分隔" },
                        "description": { "type": "STRING", "description": "针对该宫位的深度个人化解读（约80字）" }
                    }
                }
            },
            "talents": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3个主要天赋" },
            "challenges": { "type": "STRING", "description": "今生主要需要克服的课题" },
            "soulMessage": { "type": "STRING", "description": "一句富有哲理的灵魂寄语" }
        },
        "required": [
            "sun", "moon", "rising", "planetaryPositions", "keyHouses",
            "talents", "challenges", "soulMessage"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn every_required_field_has_a_property() {
        for schema in [horoscope_schema(), natal_schema()] {
            for field in required(&schema) {
                assert!(schema["properties"].get(field).is_some(), "{field} missing");
            }
        }
    }

    #[test]
    fn horoscope_requires_ten_fields() {
        assert_eq!(required(&horoscope_schema()).len(), 10);
    }
}
