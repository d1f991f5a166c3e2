//! Bias rule table, emotion markers and the generic fallback entry.
//!
//! Rules are evaluated in table order against the original problem text.
//! Patterns are regular expressions; English alternatives carry `(?i)`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::BiasType;

/// One bias signature with its user-facing explanation.
#[derive(Debug, Clone, Copy)]
pub struct BiasRule {
    pub bias_type: BiasType,
    pub patterns: &'static [&'static str],
    pub description: &'static str,
    pub mitigation: &'static str,
}

pub const BIAS_RULES: &[BiasRule] = &[
    BiasRule {
        bias_type: BiasType::SunkCost,
        patterns: &[
            r"已经投入",
            r"投入了",
            r"花了(?:这么多|那么多|好几|[0-9一两三四五六七八九十]+)",
            r"付出了这么多",
            r"不甘心",
            r"白费",
            r"前功尽弃",
            r"(?i)\b(?:already invested|already spent|put so much into|sunk)\b",
        ],
        description: "The phrasing weighs what has already been spent. Past time, money and \
                      effort cannot be recovered by either choice and should not decide the \
                      path forward.",
        mitigation: "Ask which option you would choose if you were starting today with no prior \
                     investment.",
    },
    BiasRule {
        bias_type: BiasType::GroupPressure,
        patterns: &[
            r"大家都",
            r"别人都",
            r"身边的人",
            r"同龄人",
            r"都在",
            r"卷",
            r"(?i)\b(?:everyone|everybody|all my friends|my peers)\b",
        ],
        description: "The phrasing refers to what others are doing. Their resources, goals and \
                      constraints differ from yours, so their choices are weak evidence about \
                      your best option.",
        mitigation: "List your own goals and constraints, then check whether the option still \
                     wins without reference to anyone else.",
    },
    BiasRule {
        bias_type: BiasType::Survivorship,
        patterns: &[
            r"成功案例",
            r"别人成功了",
            r"(?:他|她|朋友|同学)都?(?:能|可以)?成功",
            r"那谁",
            r"马云",
            r"(?i)\b(?:success stor(?:y|ies)|made it big|got rich)\b",
        ],
        description: "The phrasing leans on visible success stories. People who tried the same \
                      path and failed are rarely seen, so the odds look better than they are.",
        mitigation: "Look for base rates: how many people attempted this, and what happened in \
                     the typical case?",
    },
    BiasRule {
        bias_type: BiasType::Confirmation,
        patterns: &[
            r"我就知道",
            r"果然",
            r"证明了",
            r"只看",
            r"肯定是对的",
            r"(?i)\b(?:i knew it|proves that|proof that)\b",
        ],
        description: "The phrasing suggests a conclusion was reached before the analysis, which \
                      tends to favour supporting evidence and discount the rest.",
        mitigation: "Write down the strongest case against your preferred option and the \
                     evidence that would change your mind.",
    },
    BiasRule {
        bias_type: BiasType::LossAversion,
        patterns: &[
            r"损失",
            r"亏",
            r"失去",
            r"丢掉",
            r"舍不得",
            r"(?i)\b(?:lose|losing|loss)\b",
        ],
        description: "The phrasing focuses on what could be lost. Losses tend to feel heavier \
                      than equivalent gains, which can make the status quo look safer than \
                      it is.",
        mitigation: "Describe staying put as a choice with its own losses, then compare both \
                     options on the same terms.",
    },
    BiasRule {
        bias_type: BiasType::Overconfidence,
        patterns: &[
            r"肯定能",
            r"一定能",
            r"绝对没问题",
            r"稳赚",
            r"不可能失败",
            r"(?i)\b(?:can't fail|cannot fail|guaranteed|sure to succeed)\b",
        ],
        description: "The phrasing expresses certainty about an outcome that depends on factors \
                      outside your control.",
        mitigation: "Assign an honest probability to success and plan explicitly for the case \
                     where it fails.",
    },
    BiasRule {
        bias_type: BiasType::Scarcity,
        patterns: &[
            r"最后的?机会",
            r"错过",
            r"来不及",
            r"再不.{0,4}就",
            r"(?i)\b(?:last chance|miss out|now or never|running out of time)\b",
        ],
        description: "The phrasing frames the decision as now-or-never. Urgency narrows attention \
                      and cuts short the search for alternatives.",
        mitigation: "Check whether the deadline is real; if it is, decide what minimum \
                     information you need before it passes.",
    },
];

/// Emotional-element label fragments that imply a bias.
pub const EMOTION_MARKERS: &[(&str, BiasType)] = &[
    ("group pressure", BiasType::GroupPressure),
    ("urgency framing", BiasType::Scarcity),
    ("preset conclusion", BiasType::Confirmation),
    ("over-certainty", BiasType::Overconfidence),
];

pub const FALLBACK_DESCRIPTION: &str = "No specific bias signature was found in the phrasing. \
     These checks are heuristic, so the absence of a flag does not rule a bias out.";

pub const FALLBACK_MITIGATION: &str =
    "Before deciding, explain your choice to someone who disagrees and note what they push back on.";

/// Compiled patterns, index-aligned with `BIAS_RULES`.
pub(crate) static COMPILED_RULES: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    BIAS_RULES
        .iter()
        .map(|rule| {
            rule.patterns
                .iter()
                .map(|p| {
                    Regex::new(p).unwrap_or_else(|e| {
                        panic!("invalid bias pattern for {:?}: {}", rule.bias_type, e)
                    })
                })
                .collect()
        })
        .collect()
});

/// Finds the rule of a bias type.
pub fn rule_for(bias_type: BiasType) -> Option<&'static BiasRule> {
    BIAS_RULES.iter().find(|r| r.bias_type == bias_type)
}
