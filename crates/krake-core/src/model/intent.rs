use std::fmt;

/// Integration panels an operator can open from a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    Shopify,
    Gelato,
    Binance,
    AffiliateBot,
    TradingBot,
    Email,
}

impl Integration {
    /// Wire name carried in the action's `integration` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Integration::Shopify => "shopify",
            Integration::Gelato => "gelato",
            Integration::Binance => "binance",
            Integration::AffiliateBot => "affiliate_bot",
            Integration::TradingBot => "trading_bot",
            Integration::Email => "email",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback classification for input that is not a recognized invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    CreateTask,
    OpenIntegration(Integration),
    OpenAgents,
    Unrecognized,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Greeting => f.write_str("greeting"),
            Intent::CreateTask => f.write_str("create_task"),
            Intent::OpenIntegration(integration) => write!(f, "open_integration({})", integration),
            Intent::OpenAgents => f.write_str("open_agents"),
            Intent::Unrecognized => f.write_str("unrecognized"),
        }
    }
}
