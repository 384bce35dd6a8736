/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. findash contributors
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use findash_core::config::BASE_URL_VAR;

mod commands;
use commands::{IpArgs, QueryArgs, ReportArgs};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the findash financial dashboard backend", long_about = None)]
#[command(name = "findash")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Function base URL every endpoint is appended to
  #[arg(long, global = true, env = BASE_URL_VAR)]
  base_url: Option<String>,

  /// Print the response body exactly as received
  #[arg(long, global = true)]
  raw: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Search companies by ticker or name
  Search(QueryArgs),
  /// Company profile
  Profile(ReportArgs),
  /// Trailing-twelve-month key metrics
  Metrics(ReportArgs),
  /// Income statements
  Income(ReportArgs),
  /// Balance sheets
  Balance(ReportArgs),
  /// Cash flow statements
  Cashflow(ReportArgs),
  /// 10-K filings
  Tenk(QueryArgs),
  /// Geolocation of an IP address
  Ip(IpArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = config::resolve(cli.base_url)?;
  let ctx = commands::Context::new(config, cli.raw)?;

  // Execute command
  match cli.command {
    Commands::Search(args) => commands::company::search(&ctx, args).await?,
    Commands::Profile(args) => commands::company::profile(&ctx, args).await?,
    Commands::Metrics(args) => commands::company::metrics(&ctx, args).await?,
    Commands::Tenk(args) => commands::company::ten_k(&ctx, args).await?,
    Commands::Income(args) => commands::statements::income(&ctx, args).await?,
    Commands::Balance(args) => commands::statements::balance(&ctx, args).await?,
    Commands::Cashflow(args) => commands::statements::cashflow(&ctx, args).await?,
    Commands::Ip(args) => commands::location::ip(&ctx, args).await?,
  }

  Ok(())
}
