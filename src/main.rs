//! Session To-Do MCP Server - Main Entry Point
//!
//! This is the main entry point for the to-do MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use todo_mcp::TodoServerHandler;

/// Session to-do list served over the Model Context Protocol
///
/// All state is held in memory for the lifetime of the process; there is
/// nothing to configure and nothing is written to disk.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    let handler = TodoServerHandler::new();
    serve_stdio(handler).await?;
    Ok(())
}
