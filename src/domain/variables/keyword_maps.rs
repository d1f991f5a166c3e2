//! Keyword maps and defaults for the four extraction dimensions.
//!
//! Keywords are lowercase and matched by substring containment against the
//! combined original and reframed text. English keywords must not occur in
//! any reframing template (see `templates_trigger_no_keywords` below).

/// One extractable label and the keywords that evidence it.
pub type KeywordEntry = (&'static str, &'static [&'static str]);

pub const GOAL_KEYWORDS: &[KeywordEntry] = &[
    (
        "financial security",
        &["收入", "工资", "薪水", "存款", "财务", "赚钱", "income", "salary", "savings", "financial security"],
    ),
    (
        "career growth",
        &["发展", "晋升", "升职", "职业", "前途", "事业", "career", "promotion"],
    ),
    (
        "personal fulfillment",
        &["梦想", "热爱", "兴趣", "意义", "自我实现", "创业", "passion", "dream", "fulfil"],
    ),
    (
        "work-life balance",
        &["生活", "平衡", "休息", "自由", "陪伴", "work-life", "balance", "burnout"],
    ),
    (
        "stability and security",
        &["稳定", "安稳", "保障", "铁饭碗", "stable", "stability", "security"],
    ),
    (
        "learning and growth",
        &["学习", "技能", "成长", "经验", "提升", "learn", "skill", "grow"],
    ),
];

pub const KEY_VARIABLE_KEYWORDS: &[KeywordEntry] = &[
    (
        "capital reserve",
        &["存款", "积蓄", "资金", "储蓄", "存了", "本金", "savings", "capital", "cash reserve", "funds", "budget"],
    ),
    (
        "time investment",
        &["时间", "两年", "三年", "几年", "年", "个月", "投入", "time", "years", "months"],
    ),
    (
        "market conditions",
        &["市场", "行业", "经济", "就业", "行情", "market", "industry", "economy"],
    ),
    (
        "personal capability",
        &["能力", "技能", "经验", "学历", "专业", "capability", "skills", "experience", "qualification"],
    ),
    (
        "social support",
        &["家人", "朋友", "父母", "伴侣", "人脉", "家里", "family", "friends", "parents", "partner", "network"],
    ),
    (
        "opportunity cost",
        &["机会", "放弃", "代价", "错过", "opportunity", "give up", "trade-off", "tradeoff"],
    ),
    (
        "health and energy",
        &["身体", "健康", "精力", "压力", "累", "health", "energy", "stress", "exhausted"],
    ),
];

pub const HARD_CONSTRAINT_KEYWORDS: &[KeywordEntry] = &[
    (
        "financial obligations",
        &["房贷", "车贷", "贷款", "负债", "欠债", "养家", "mortgage", "loan", "debt"],
    ),
    (
        "family responsibilities",
        &["孩子", "父母", "老人", "养老", "家庭", "child", "kids", "parents", "elderly"],
    ),
    (
        "contractual commitments",
        &["合同", "违约", "竞业", "协议", "服务期", "contract", "non-compete", "agreement"],
    ),
    (
        "age or time window",
        &["年龄", "岁", "窗口期", "截止", "期限", "years old", "deadline", "age limit"],
    ),
    (
        "legal or visa requirements",
        &["签证", "户口", "户籍", "法律", "身份", "visa", "legal", "permit", "residency"],
    ),
    (
        "health limitations",
        &["生病", "疾病", "身体不好", "慢性病", "illness", "disease", "medical condition"],
    ),
];

pub const UNCERTAINTY_KEYWORDS: &[KeywordEntry] = &[
    (
        "market volatility",
        &["市场", "经济", "行业", "波动", "裁员", "不景气", "market", "economy", "layoff", "recession"],
    ),
    (
        "personal capability fit",
        &["能不能", "适不适合", "适合", "胜任", "做得到", "whether i can", "suited", "capable"],
    ),
    (
        "outcome timing",
        &["多久", "什么时候", "多长时间", "周期", "回本", "how long", "timeline", "timing"],
    ),
    (
        "external support",
        &["支持", "帮助", "认可", "反对", "support", "approval", "oppose"],
    ),
    (
        "policy and regulation",
        &["政策", "法规", "监管", "规定", "policy", "regulation"],
    ),
    (
        "income stability",
        &["收入", "工资", "现金流", "回报", "income", "salary", "cash flow", "returns"],
    ),
];

pub const DEFAULT_GOALS: &[&str] = &[
    "maintain overall quality of life",
    "keep future options open",
    "avoid irreversible losses",
];

pub const DEFAULT_KEY_VARIABLES: &[&str] = &[
    "available resources",
    "decision time horizon",
    "external environment",
];

pub const DEFAULT_HARD_CONSTRAINTS: &[&str] = &[
    "basic living costs must stay covered",
    "legal and ethical boundaries",
    "existing commitments to other people",
];

pub const DEFAULT_UNCERTAINTIES: &[&str] = &[
    "unforeseen external changes",
    "own reaction to the outcome",
    "incomplete information",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reframing::{Reframer, Theme};

    fn all_tables() -> [&'static [KeywordEntry]; 4] {
        [
            GOAL_KEYWORDS,
            KEY_VARIABLE_KEYWORDS,
            HARD_CONSTRAINT_KEYWORDS,
            UNCERTAINTY_KEYWORDS,
        ]
    }

    #[test]
    fn keywords_are_lowercase() {
        for table in all_tables() {
            for (label, keywords) in table {
                for k in *keywords {
                    assert_eq!(*k, k.to_lowercase(), "keyword for '{}' not lowercase", label);
                }
            }
        }
    }

    #[test]
    fn labels_are_unique_within_each_dimension() {
        for table in all_tables() {
            let mut labels: Vec<_> = table.iter().map(|(l, _)| *l).collect();
            let before = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), before);
        }
    }

    #[test]
    fn templates_trigger_no_keywords() {
        // The life-decision restatement must leave a keyword-free input at
        // the defaults, so its template may not contain any keyword.
        let reframed = Reframer::reframe("xyzxyzxyz").reframed.to_lowercase();
        assert!(reframed.contains(Theme::LifeDecision.label()));
        for table in all_tables() {
            for (label, keywords) in table {
                for k in *keywords {
                    assert!(
                        !reframed.contains(k),
                        "template contains keyword '{}' of '{}'",
                        k,
                        label
                    );
                }
            }
        }
    }

    #[test]
    fn defaults_are_non_empty() {
        assert!(!DEFAULT_GOALS.is_empty());
        assert!(!DEFAULT_KEY_VARIABLES.is_empty());
        assert!(!DEFAULT_HARD_CONSTRAINTS.is_empty());
        assert!(!DEFAULT_UNCERTAINTIES.is_empty());
    }
}
