//! Batch command
//!
//! Usage: krake batch [FILE] [--workspace <UUID>] [--history]
//!
//! Reads one command per line (stdin when no file is given) and prints one
//! JSON line per command. Blank lines are skipped. A command the gateway
//! rejects prints an error line and the batch continues.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Args;
use krake_core::errors::ExError;
use krake_engine::{CommandRequest, GatewayConfig};
use serde_json::json;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input file (default: stdin)
    pub file: Option<PathBuf>,

    /// Workspace the commands are issued from
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Print the command journal after the batch, newest first
    #[arg(long)]
    pub history: bool,
}

/// Execute batch command
pub fn execute(args: BatchArgs, config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_id = super::workspace(args.workspace.as_deref())?;
    let mut gateway = super::gateway(config);

    let source = match &args.file {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    };
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| super::input_error(&source, e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line.map_err(|e| super::input_error(&source, e))?;
        if line.trim().is_empty() {
            continue;
        }

        match gateway.submit(CommandRequest::new(workspace_id, line)) {
            Ok(reply) => println!("{}", super::to_json(&reply.result, false)?),
            Err(err) => {
                let ex_err: ExError = err.into();
                let line = json!({
                    "error": {
                        "code": ex_err.code(),
                        "message": ex_err.message(),
                    }
                });
                println!("{}", line);
            }
        }
    }

    if args.history {
        for item in gateway.recent(None) {
            println!("{}", super::to_json(item, false)?);
        }
    }

    Ok(())
}
