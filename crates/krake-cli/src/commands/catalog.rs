//! Catalog command
//!
//! Usage: krake catalog [--namespace <NAME>]

use clap::Args;
use krake_core::matcher::{Trigger, MATCH_RULES};
use krake_core::resolver::catalog::{self, NamespaceSpec, NAMESPACES};
use krake_engine::GatewayConfig;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only list this namespace
    #[arg(short, long)]
    pub namespace: Option<String>,
}

/// Execute catalog command
pub fn execute(args: CatalogArgs, config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = args.namespace {
        let ns = catalog::namespace(&name).ok_or_else(|| format!("Unknown namespace: {}", name))?;
        print_namespace(ns);
        return Ok(());
    }

    println!("{} command catalog", config.app_name);
    println!();
    println!("Namespaces:");
    for ns in NAMESPACES {
        print_namespace(ns);
    }

    println!();
    println!("Keyword rules (first match wins):");
    for (i, rule) in MATCH_RULES.iter().enumerate() {
        let (mode, phrases) = match rule.trigger {
            Trigger::AnyOf(phrases) => ("any of", phrases),
            Trigger::AllOf(phrases) => ("all of", phrases),
        };
        let quoted: Vec<String> = phrases.iter().map(|p| format!("\"{}\"", p)).collect();
        println!(
            "  {}. {} {} -> {}",
            i + 1,
            mode,
            quoted.join(", "),
            rule.intent
        );
    }

    Ok(())
}

fn print_namespace(ns: &NamespaceSpec) {
    println!("  {} ({})", ns.name, ns.action_type);
    for op in ns.operations {
        println!("    {}.{:<22} {}", ns.name, op.name, op.response);
    }
}
