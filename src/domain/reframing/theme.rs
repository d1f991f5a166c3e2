//! Core theme classification and the neutral reframing templates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The topic a decision problem is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    CareerDevelopment,
    GeographicRelocation,
    Education,
    PersonalFinance,
    Relationships,
    /// Fallback when no topic keyword group matches.
    LifeDecision,
}

/// Topic patterns in test order. The first group with a hit wins.
///
/// English terms are word-bounded so "quit" does not fire on "quite".
const THEME_PATTERNS: &[(Theme, &str)] = &[
    (
        Theme::CareerDevelopment,
        r"(?i)工作|辞职|跳槽|创业|职业|升职|加薪|公司|老板|\b(?:offers?|jobs?|careers?|resign(?:ed|ing)?|quit|quitting|start-?ups?|promotions?)\b",
    ),
    (
        Theme::GeographicRelocation,
        r"(?i)城市|搬家|出国|移民|回老家|定居|异地|\b(?:relocat\w*|move to|moving to|abroad|emigrat\w*)\b",
    ),
    (
        Theme::Education,
        r"(?i)考研|读研|留学|考公|学校|专业|学位|读博|\b(?:universit(?:y|ies)|degrees?|graduate school|master'?s|phd|college)\b",
    ),
    (
        Theme::PersonalFinance,
        r"(?i)买房|投资|存款|贷款|理财|股票|基金|房贷|\b(?:invest\w*|mortgages?|stocks?|buy a house|savings|loans?)\b",
    ),
    (
        Theme::Relationships,
        r"(?i)结婚|分手|恋爱|男朋友|女朋友|离婚|对象|婚姻|\b(?:marry|marriage|breakup|break up|divorce|boyfriend|girlfriend)\b",
    ),
];

/// Theme patterns compiled once, in test order.
static COMPILED_THEMES: Lazy<Vec<(Theme, Regex)>> = Lazy::new(|| {
    THEME_PATTERNS
        .iter()
        .map(|(theme, pattern)| {
            let regex = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid theme pattern for {:?}: {}", theme, e));
            (*theme, regex)
        })
        .collect()
});

impl Theme {
    /// Human-readable theme label substituted into the template.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::CareerDevelopment => "career development",
            Theme::GeographicRelocation => "geographic relocation",
            Theme::Education => "education",
            Theme::PersonalFinance => "personal finance",
            Theme::Relationships => "relationships",
            Theme::LifeDecision => "life decision",
        }
    }

    /// Classifies raw problem text by the first matching keyword group.
    pub fn classify(text: &str) -> Theme {
        COMPILED_THEMES
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(theme, _)| *theme)
            .unwrap_or(Theme::LifeDecision)
    }

    /// Fixed neutral restatement template; `{theme}` is the substitution slot.
    ///
    /// Templates deliberately avoid every variable-extraction keyword so
    /// the restatement adds no dimension hits beyond the theme label.
    fn template(&self) -> &'static str {
        match self {
            Theme::CareerDevelopment => {
                "Setting the feelings aside, this is a question of {theme}: which of the \
                 available paths best serves the long-term aims, what would each path cost \
                 and risk, and which observable signals would show that a path is working \
                 or failing?"
            }
            Theme::GeographicRelocation => {
                "Setting the feelings aside, this is a question of {theme}: what would \
                 staying and moving each change in daily life, work and relationships, \
                 what is reversible, and which facts still need to be checked on the ground?"
            }
            Theme::Education => {
                "Setting the feelings aside, this is a question of {theme}: what would each \
                 study path add in knowledge and credentials, what would it cost in money and \
                 effort, and how would it change the options available afterwards?"
            }
            Theme::PersonalFinance => {
                "Setting the feelings aside, this is a question of {theme}: what is the \
                 realistic range of results for each use of the money, how much of a setback \
                 could be absorbed without hardship, and how easily could each commitment \
                 be unwound?"
            }
            Theme::Relationships => {
                "Setting the feelings aside, this is a question of {theme}: what does each \
                 person involved need and expect, which of those needs are compatible, and \
                 what would each path mean for trust and shared plans in the long run?"
            }
            Theme::LifeDecision => {
                "Setting the feelings aside, this is a {theme}: what are the realistic \
                 options, what does each one require and put at stake, and which missing \
                 pieces of information would make the choice clearer?"
            }
        }
    }

    /// Renders the neutral restatement for this theme.
    pub fn reframe(&self) -> String {
        self.template().replace("{theme}", self.label())
    }
}
