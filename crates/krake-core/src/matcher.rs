//! Domain matcher
//!
//! Classifies free text that is not a recognized invocation. Rules are
//! evaluated top to bottom and the first match wins, so the order of
//! `MATCH_RULES` is part of the observable behavior: text mentioning both
//! "affiliate" and "email" opens the affiliate bot.

use crate::model::{Integration, Intent};

/// Substring condition a rule tests against the lower-cased input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// At least one phrase occurs
    AnyOf(&'static [&'static str]),
    /// Every phrase occurs
    AllOf(&'static [&'static str]),
}

impl Trigger {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::AnyOf(phrases) => phrases.iter().any(|p| text.contains(p)),
            Trigger::AllOf(phrases) => phrases.iter().all(|p| text.contains(p)),
        }
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Trigger::AnyOf(phrases) | Trigger::AllOf(phrases) => phrases,
        }
    }
}

/// One row of the fallback ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub trigger: Trigger,
    pub intent: Intent,
}

/// Fallback ladder in evaluation order
pub const MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        trigger: Trigger::AnyOf(&["hello", "hi"]),
        intent: Intent::Greeting,
    },
    MatchRule {
        trigger: Trigger::AllOf(&["task", "create"]),
        intent: Intent::CreateTask,
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["shopify"]),
        intent: Intent::OpenIntegration(Integration::Shopify),
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["gelato"]),
        intent: Intent::OpenIntegration(Integration::Gelato),
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["binance"]),
        intent: Intent::OpenIntegration(Integration::Binance),
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["agent", "sintra"]),
        intent: Intent::OpenAgents,
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["affiliate", "affiliate bot"]),
        intent: Intent::OpenIntegration(Integration::AffiliateBot),
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["trading", "profitpilot", "finance bot"]),
        intent: Intent::OpenIntegration(Integration::TradingBot),
    },
    MatchRule {
        trigger: Trigger::AnyOf(&["email"]),
        intent: Intent::OpenIntegration(Integration::Email),
    },
];

/// Pick the intent of the first rule whose trigger matches
///
/// Matching is case-insensitive substring containment. Returns
/// `Intent::Unrecognized` when no rule applies.
pub fn match_intent(raw: &str) -> Intent {
    let text = raw.to_lowercase();
    MATCH_RULES
        .iter()
        .find(|rule| rule.trigger.matches(&text))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unrecognized)
}
