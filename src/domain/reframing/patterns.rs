//! Emotional and stance language libraries.
//!
//! Each entry is an ordered (label, regex) rule. Labels double as the
//! category names reported in `ReframedProblem::emotional_elements`, and
//! the bias detector matches marker substrings against them, so renaming a
//! label is a behavioural change.

use once_cell::sync::Lazy;
use regex::Regex;

/// Which library a language pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Feelings and rhetorical pressure carried by the wording.
    Emotional,
    /// A position the writer has already taken before analysing.
    Stance,
}

/// One category of loaded language.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePattern {
    pub label: &'static str,
    pub kind: PatternKind,
    pub pattern: &'static str,
}

const fn emotional(label: &'static str, pattern: &'static str) -> LanguagePattern {
    LanguagePattern {
        label,
        kind: PatternKind::Emotional,
        pattern,
    }
}

const fn stance(label: &'static str, pattern: &'static str) -> LanguagePattern {
    LanguagePattern {
        label,
        kind: PatternKind::Stance,
        pattern,
    }
}

/// Emotional-language library, in reporting order.
pub const EMOTIONAL_PATTERNS: &[LanguagePattern] = &[
    emotional(
        "anxiety",
        r"(?i)焦虑|担心|害怕|不安|紧张|心慌|\b(?:anxious|anxiety|worried|worry|afraid|nervous|scared)\b",
    ),
    emotional(
        "anger",
        r"(?i)生气|愤怒|气死|恼火|受够了|\b(?:angry|furious|fed up|pissed off)\b",
    ),
    emotional(
        "despair",
        r"(?i)绝望|没希望|没有希望|看不到希望|崩溃|走投无路|\b(?:hopeless|desperate|no way out)\b",
    ),
    emotional(
        "euphoria",
        r"(?i)太棒了|兴奋|激动|稳赚|\b(?:excited|thrilled|can't lose|amazing opportunity)\b",
    ),
    emotional(
        "compulsion wording",
        r"(?i)必须|一定要|不得不|只能|\b(?:must|have to|no choice)\b",
    ),
    emotional(
        "over-certainty",
        r"(?i)肯定|绝对|毫无疑问|百分之百|\b(?:definitely|absolutely|certainly|guaranteed)\b",
    ),
    emotional(
        "urgency framing",
        r"(?i)马上|立刻|立即|赶紧|来不及|最后的?机会|\b(?:now or never|last chance|right now|immediately|running out of time)\b",
    ),
    emotional(
        "group pressure framing",
        r"(?i)大家都|别人都|所有人都|身边的人|同龄人|同学都|朋友都|卷|\b(?:everyone|everybody|all my friends|all my peers)\b",
    ),
    emotional(
        "competitive anxiety",
        r"(?i)落后|被甩开|比不上|跟不上|被淘汰|\b(?:falling behind|fall behind|left behind)\b",
    ),
    emotional(
        "escapism",
        r"(?i)逃离|逃避|受不了|摆脱|不想再|\b(?:escape|get away from|can't stand|cannot stand)\b",
    ),
    emotional(
        "catastrophizing",
        r"(?i)毁了|一辈子|完蛋|彻底失败|万劫不复|\b(?:ruin|ruined|disaster|forever|the end of)\b",
    ),
    emotional(
        "decision anxiety",
        r"(?i)要不要|该不该|到底|纠结|犹豫|\b(?:should i|torn between|can't decide|whether or not)\b",
    ),
];

/// Stance library, reported after the emotional library.
pub const STANCE_PATTERNS: &[LanguagePattern] = &[
    stance(
        "preset conclusion",
        r"(?i)我已经决定|已经决定了|反正要|就是要|已经想好|\b(?:i've decided|i have decided|i already decided|my mind is made up)\b",
    ),
    stance(
        "preset preference",
        r"(?i)更想|倾向于|比较喜欢|当然是|显然|\b(?:i prefer|i'd rather|obviously|clearly better)\b",
    ),
    stance(
        "option belittling",
        r"(?i)没意思|没前途|浪费时间|毫无意义|不值得|没出息|\b(?:pointless|waste of time|dead end|dead-end)\b",
    ),
    stance(
        "false universality",
        r"(?i)所有人|每个人|谁都|没有人|从来|总是|\b(?:nobody|no one|always|never)\b",
    ),
];

/// Both libraries compiled once, emotional entries first.
static COMPILED: Lazy<Vec<(&'static LanguagePattern, Regex)>> = Lazy::new(|| {
    EMOTIONAL_PATTERNS
        .iter()
        .chain(STANCE_PATTERNS.iter())
        .map(|p| {
            let regex = Regex::new(p.pattern)
                .unwrap_or_else(|e| panic!("invalid language pattern '{}': {}", p.label, e));
            (p, regex)
        })
        .collect()
});

/// A category that matched, with its distinct matched substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    pub label: &'static str,
    pub kind: PatternKind,
    pub matches: Vec<String>,
}

impl PatternHit {
    /// Formats the hit as `"<label>: '<m1>, <m2>'"`.
    pub fn to_element(&self) -> String {
        format!("{}: '{}'", self.label, self.matches.join(", "))
    }
}

/// Runs both libraries over `text` in declaration order.
///
/// Categories without a match are omitted. Matched substrings keep their
/// order of first appearance; repeats are dropped.
pub fn scan(text: &str) -> Vec<PatternHit> {
    COMPILED
        .iter()
        .filter_map(|(pattern, regex)| {
            let mut matches: Vec<String> = Vec::new();
            for m in regex.find_iter(text) {
                let found = m.as_str();
                if !matches.iter().any(|existing| existing == found) {
                    matches.push(found.to_string());
                }
            }
            if matches.is_empty() {
                None
            } else {
                Some(PatternHit {
                    label: pattern.label,
                    kind: pattern.kind,
                    matches,
                })
            }
        })
        .collect()
}
