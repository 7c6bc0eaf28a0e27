//! Reference pages for planets, signs and houses.
//!
//! Sign entries index into [`ZODIAC`] and planet entries resolve through the
//! body table, so the encyclopedia draws the same glyphs as the wheel.

use crate::placement::resolve_glyph;
use crate::zodiac::{ZodiacSegment, ZODIAC};

pub struct PlanetEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

pub struct SignEntry {
    /// Index into [`ZODIAC`].
    pub sign: usize,
    pub element: &'static str,
    pub ruler: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

impl SignEntry {
    pub fn segment(&self) -> &'static ZodiacSegment {
        &ZODIAC[self.sign]
    }
}

pub struct HouseEntry {
    pub number: u8,
    pub name: &'static str,
    pub meaning: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

pub const PLANETS: [PlanetEntry; 10] = [
    PlanetEntry {
        id: "sun",
        name: "太阳 (Sun)",
        keywords: &["自我", "活力", "目标", "父亲"],
        description: "太阳代表你的核心本质、自我意识和生命力。它是星盘中的国王，展示了你渴望成为什么样的人，以及你发光发热的领域。",
    },
    PlanetEntry {
        id: "moon",
        name: "月亮 (Moon)",
        keywords: &["情绪", "潜意识", "安全感", "母亲"],
        description: "月亮掌管你的情感需求、直觉和本能反应。它揭示了你私下里最真实的一面，以及你需要什么才能感到安全和被滋养。",
    },
    PlanetEntry {
        id: "mercury",
        name: "水星 (Mercury)",
        keywords: &["沟通", "思维", "逻辑", "学习"],
        description: "水星是信使之神，掌管我们的思考方式、沟通风格和信息处理能力。它影响着你的语言天赋和商业头脑。",
    },
    PlanetEntry {
        id: "venus",
        name: "金星 (Venus)",
        keywords: &["爱", "美", "金钱", "价值观"],
        description: "金星代表我们对爱与美的渴望，以及我们的社交方式。它揭示了你在感情中看重什么，以及你如何吸引财富和快乐。",
    },
    PlanetEntry {
        id: "mars",
        name: "火星 (Mars)",
        keywords: &["行动", "欲望", "竞争", "愤怒"],
        description: "火星是战士，代表我们的行动力、性驱力和生存本能。它展示了你如何追求你想要的东西，以及你如何处理冲突。",
    },
    PlanetEntry {
        id: "jupiter",
        name: "木星 (Jupiter)",
        keywords: &["扩张", "幸运", "哲学", "信仰"],
        description: "木星是幸运之星，代表成长、扩张和高等智慧。它指引我们在哪里能找到好运，以及我们的人生哲学是什么。",
    },
    PlanetEntry {
        id: "saturn",
        name: "土星 (Saturn)",
        keywords: &["责任", "限制", "结构", "考验"],
        description: "土星是严师，代表纪律、责任和长期的目标。虽然它带来考验和限制，但也通过磨练赋予我们要构建持久成就所需的能力。",
    },
    PlanetEntry {
        id: "uranus",
        name: "天王星 (Uranus)",
        keywords: &["变革", "自由", "创新", "反叛"],
        description: "天王星代表突变、觉醒和打破常规。它揭示了你在哪里与众不同，以及你在哪里寻求绝对的自由。",
    },
    PlanetEntry {
        id: "neptune",
        name: "海王星 (Neptune)",
        keywords: &["梦想", "灵感", "幻觉", "慈悲"],
        description: "海王星掌管潜意识、艺术灵感和灵性。它模糊了现实的界限，带来无条件的爱，但也可能带来迷茫和逃避。",
    },
    PlanetEntry {
        id: "pluto",
        name: "冥王星 (Pluto)",
        keywords: &["转化", "权力", "重生", "危机"],
        description: "冥王星代表深刻的心理转化、死亡与重生。它挖掘埋藏在深处的秘密，通过摧毁旧有的结构来带来彻底的蜕变。",
    },
];

pub const SIGNS: [SignEntry; 12] = [
    SignEntry {
        sign: 0,
        element: "火",
        ruler: "火星",
        keywords: &["开创", "冲动", "勇气"],
        description: "十二星座的开端，象征着新生的力量。白羊座充满了激情和斗志，总是冲在最前面，像孩子一样直率和无畏。",
    },
    SignEntry {
        sign: 1,
        element: "土",
        ruler: "金星",
        keywords: &["稳定", "感官", "固执"],
        description: "重视物质享受和安全感。金牛座脚踏实地，拥有极强的耐心和审美能力，喜欢按部就班地构建生活。",
    },
    SignEntry {
        sign: 2,
        element: "风",
        ruler: "水星",
        keywords: &["多变", "好奇", "沟通"],
        description: "思维敏捷，充满了好奇心。双子座像风一样自由，喜欢收集信息和交流，适应能力极强，但有时缺乏定性。",
    },
    SignEntry {
        sign: 3,
        element: "水",
        ruler: "月亮",
        keywords: &["滋养", "敏感", "家庭"],
        description: "拥有坚硬的外壳和柔软的内心。巨蟹座极具母性光辉，重视家庭和情感连接，有着超强的记忆力和感受力。",
    },
    SignEntry {
        sign: 4,
        element: "火",
        ruler: "太阳",
        keywords: &["表现", "尊严", "创造"],
        description: "天生的王者，渴望成为舞台的焦点。狮子座慷慨、热情且富有创造力，但也需要他人的掌声和认可。",
    },
    SignEntry {
        sign: 5,
        element: "土",
        ruler: "水星",
        keywords: &["完美", "服务", "分析"],
        description: "追求完美的细节控。处女座拥有清晰的逻辑和分析能力，乐于服务他人，在秩序和条理中寻找安全感。",
    },
    SignEntry {
        sign: 6,
        element: "风",
        ruler: "金星",
        keywords: &["平衡", "和谐", "关系"],
        description: "天生的外交官，追求公平与和谐。天秤座优雅迷人，擅长从多角度看问题，但在做决定时容易犹豫不决。",
    },
    SignEntry {
        sign: 7,
        element: "水",
        ruler: "冥王星/火星",
        keywords: &["深刻", "执着", "神秘"],
        description: "情感强烈而深沉。天蝎座拥有洞察人心的能力，意志力顽强，对待感情爱恨分明，极其重视忠诚。",
    },
    SignEntry {
        sign: 8,
        element: "火",
        ruler: "木星",
        keywords: &["自由", "探索", "乐观"],
        description: "追求真理的探险家。射手座向往自由，拥有宏大的视野和乐观的精神，总是看向远方，不愿被束缚。",
    },
    SignEntry {
        sign: 9,
        element: "土",
        ruler: "土星",
        keywords: &["野心", "务实", "成就"],
        description: "攀登高峰的山羊。摩羯座拥有极强的忍耐力和责任感，目标明确，一步一个脚印地构建自己的世俗成就。",
    },
    SignEntry {
        sign: 10,
        element: "风",
        ruler: "天王星/土星",
        keywords: &["独特", "人道", "革新"],
        description: "理性的革新者。水瓶座特立独行，关注群体利益和未来趋势，思维超前，不喜欢随波逐流。",
    },
    SignEntry {
        sign: 11,
        element: "水",
        ruler: "海王星/木星",
        keywords: &["梦幻", "包容", "牺牲"],
        description: "链接宇宙的梦想家。双鱼座富有同情心和想象力，界限模糊，容易感知他人的情绪，具有极强的艺术天赋。",
    },
];

pub const HOUSES: [HouseEntry; 12] = [
    HouseEntry {
        number: 1,
        name: "第一宫 (命宫)",
        meaning: "自我与面具",
        keywords: &["外貌", "性格", "开端"],
        description: "这是你的上升星座所在的位置，代表你给人的第一印象、你的外貌气质以及你在这个世界上的行事风格。",
    },
    HouseEntry {
        number: 2,
        name: "第二宫 (财帛宫)",
        meaning: "价值与资源",
        keywords: &["金钱", "资产", "价值观"],
        description: "掌管你的正财运、你拥有的物质资源以及你如何定义自我价值。它揭示了你的理财观念。",
    },
    HouseEntry {
        number: 3,
        name: "第三宫 (兄弟宫)",
        meaning: "沟通与思维",
        keywords: &["学习", "兄弟姐妹", "短途旅行"],
        description: "涉及基础教育、信息交流、兄弟姐妹关系以及短途的移动。它反映了你的思维模式和沟通方式。",
    },
    HouseEntry {
        number: 4,
        name: "第四宫 (田宅宫)",
        meaning: "根源与家庭",
        keywords: &["家庭", "晚年", "内心安全感"],
        description: "代表你的原生家庭、房地产、父亲（或母亲）以及你内心的安全感来源。这是你的避风港。",
    },
    HouseEntry {
        number: 5,
        name: "第五宫 (子女宫)",
        meaning: "创造与快乐",
        keywords: &["恋爱", "游戏", "子女", "赌博"],
        description: "掌管娱乐、创造力、恋爱关系（非婚姻）以及子女。这是你展现生命力、玩耍和享受生活的地方。",
    },
    HouseEntry {
        number: 6,
        name: "第六宫 (奴仆宫)",
        meaning: "责任与健康",
        keywords: &["工作", "健康", "日常事务"],
        description: "涉及日常生活琐事、工作环境、服务精神以及身体健康状况。它反映了你的工作态度和养生习惯。",
    },
    HouseEntry {
        number: 7,
        name: "第七宫 (夫妻宫)",
        meaning: "关系与合作",
        keywords: &["婚姻", "合伙", "公开敌人"],
        description: "代表一对一的伴侣关系，包括婚姻伴侣和商业合作伙伴。它揭示了你在契约关系中的需求。",
    },
    HouseEntry {
        number: 8,
        name: "第八宫 (疾厄宫)",
        meaning: "转化与再生",
        keywords: &["偏财", "性", "死亡", "玄学"],
        description: "涉及他人的资源（如遗产、投资）、深层的情感纠葛、性以及生死的奥秘。这是危机与转化的领域。",
    },
    HouseEntry {
        number: 9,
        name: "第九宫 (迁移宫)",
        meaning: "远方与信仰",
        keywords: &["高等教育", "长途旅行", "哲学"],
        description: "掌管高等智慧、法律、宗教信仰以及长途旅行。它代表了精神和身体上的远方探索。",
    },
    HouseEntry {
        number: 10,
        name: "第十宫 (官禄宫)",
        meaning: "事业与名誉",
        keywords: &["社会地位", "职业", "公众形象"],
        description: "星盘的最高点，代表你的公众形象、事业成就和社会地位。这是你渴望被世界看到的样子。",
    },
    HouseEntry {
        number: 11,
        name: "第十一宫 (福德宫)",
        meaning: "群体与愿景",
        keywords: &["朋友", "社团", "理想"],
        description: "涉及朋友团体、社会网络、人道主义以及未来的愿景。它反映了你与大众的连接。",
    },
    HouseEntry {
        number: 12,
        name: "第十二宫 (玄秘宫)",
        meaning: "潜意识与隐退",
        keywords: &["秘密", "潜意识", "业力"],
        description: "代表潜意识、梦境、秘密敌人以及隐居。这是业力消解和灵性成长的领域，也是黎明前的黑暗。",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryCategory {
    Planets,
    Signs,
    Houses,
}

impl LibraryCategory {
    pub const ALL: [LibraryCategory; 3] = [
        LibraryCategory::Planets,
        LibraryCategory::Signs,
        LibraryCategory::Houses,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LibraryCategory::Planets => "十大行星",
            LibraryCategory::Signs => "十二星座",
            LibraryCategory::Houses => "十二宫位",
        }
    }

    pub fn count(&self) -> usize {
        match self {
            LibraryCategory::Planets => PLANETS.len(),
            LibraryCategory::Signs => SIGNS.len(),
            LibraryCategory::Houses => HOUSES.len(),
        }
    }

    /// Entry at `index` in this category's table.
    pub fn item(&self, index: usize) -> Option<LibraryItem> {
        match self {
            LibraryCategory::Planets => PLANETS.get(index).map(LibraryItem::from),
            LibraryCategory::Signs => SIGNS.get(index).map(LibraryItem::from),
            LibraryCategory::Houses => HOUSES.get(index).map(LibraryItem::from),
        }
    }

    pub fn items(&self) -> Vec<LibraryItem> {
        (0..self.count()).filter_map(|i| self.item(i)).collect()
    }
}

/// One encyclopedia card, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryItem {
    pub id: String,
    pub name: &'static str,
    pub symbol: String,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    /// Element, for signs.
    pub element: Option<&'static str>,
    /// Ruling planet, for signs.
    pub ruler: Option<&'static str>,
    /// Core theme, for houses.
    pub meaning: Option<&'static str>,
}

impl From<&PlanetEntry> for LibraryItem {
    fn from(entry: &PlanetEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name,
            symbol: resolve_glyph(entry.name).glyph,
            keywords: entry.keywords,
            description: entry.description,
            element: None,
            ruler: None,
            meaning: None,
        }
    }
}

impl From<&SignEntry> for LibraryItem {
    fn from(entry: &SignEntry) -> Self {
        let segment = entry.segment();
        Self {
            id: segment.name.to_ascii_lowercase(),
            name: segment.label,
            symbol: segment.glyph.to_string(),
            keywords: entry.keywords,
            description: entry.description,
            element: Some(entry.element),
            ruler: Some(entry.ruler),
            meaning: None,
        }
    }
}

impl From<&HouseEntry> for LibraryItem {
    fn from(entry: &HouseEntry) -> Self {
        Self {
            id: format!("h{}", entry.number),
            name: entry.name,
            symbol: entry.number.to_string(),
            keywords: entry.keywords,
            description: entry.description,
            element: None,
            ruler: None,
            meaning: Some(entry.meaning),
        }
    }
}

/// Look an entry up by id (`"venus"`, `"scorpio"`, `"h7"`) or display name,
/// including the short form inside a planet's parentheses.
pub fn find_item(query: &str) -> Option<(LibraryCategory, LibraryItem)> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    LibraryCategory::ALL.iter().find_map(|&category| {
        category
            .items()
            .into_iter()
            .find(|item| {
                item.id.eq_ignore_ascii_case(query)
                    || item.name == query
                    || item.name.split(" (").next() == Some(query)
                    || crate::placement::strip_qualifier(item.name).eq_ignore_ascii_case(query)
            })
            .map(|item| (category, item))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(LibraryCategory::Planets.items().len(), 10);
        assert_eq!(LibraryCategory::Signs.items().len(), 12);
        assert_eq!(LibraryCategory::Houses.items().len(), 12);
        assert!(LibraryCategory::Houses.item(12).is_none());
    }

    #[test]
    fn signs_follow_zodiac_order() {
        for (i, entry) in SIGNS.iter().enumerate() {
            assert_eq!(entry.sign, i);
        }
        let scorpio = LibraryCategory::Signs.item(7).unwrap();
        assert_eq!(scorpio.name, "天蝎座");
        assert_eq!(scorpio.symbol, "♏");
        assert_eq!(scorpio.ruler, Some("冥王星/火星"));
        assert_eq!(scorpio.element, Some("水"));
    }

    #[test]
    fn planet_glyphs_match_the_wheel() {
        let symbols: Vec<String> = LibraryCategory::Planets
            .items()
            .into_iter()
            .map(|item| item.symbol)
            .collect();
        assert_eq!(symbols, ["☉", "☽", "☿", "♀", "♂", "♃", "♄", "♅", "♆", "♇"]);
    }

    #[test]
    fn houses_carry_meaning() {
        let seventh = LibraryCategory::Houses.item(6).unwrap();
        assert_eq!(seventh.id, "h7");
        assert_eq!(seventh.symbol, "7");
        assert_eq!(seventh.meaning, Some("关系与合作"));
        assert!(seventh.ruler.is_none());
    }

    #[test]
    fn find_by_id_or_name() {
        let (category, venus) = find_item("venus").unwrap();
        assert_eq!(category, LibraryCategory::Planets);
        assert_eq!(venus.name, "金星 (Venus)");

        assert_eq!(find_item("金星").map(|(_, i)| i.id), Some("venus".to_string()));
        assert_eq!(find_item("Scorpio").map(|(c, _)| c), Some(LibraryCategory::Signs));
        assert_eq!(find_item("天蝎座").map(|(_, i)| i.symbol), Some("♏".to_string()));
        assert_eq!(find_item("H10").map(|(_, i)| i.meaning), Some(Some("事业与名誉")));
        assert_eq!(find_item("第十宫").map(|(_, i)| i.id), Some("h10".to_string()));
        assert!(find_item("Chiron").is_none());
        assert!(find_item("").is_none());
    }
}
