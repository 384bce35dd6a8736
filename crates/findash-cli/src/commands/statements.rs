use super::summary::{self, metric_table, Metric};
use super::{Context, ReportArgs};
use anyhow::Result;
use colored::*;
use findash_client::{Endpoint, PeriodRecord};
use serde::Serialize;
use tracing::info;

pub async fn income(ctx: &Context, args: ReportArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::IncomeStatement, &args.symbol).await;
  }
  let statements = ctx.client.statements().income_statement(&args.symbol).await?;
  render(ctx, &args, "Income Statement", &statements, summary::INCOME)
}

pub async fn balance(ctx: &Context, args: ReportArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::BalanceSheet, &args.symbol).await;
  }
  let sheets = ctx.client.statements().balance_sheet(&args.symbol).await?;
  render(ctx, &args, "Balance Sheet", &sheets, summary::BALANCE_SHEET)
}

pub async fn cashflow(ctx: &Context, args: ReportArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::CashflowStatement, &args.symbol).await;
  }
  let flows = ctx.client.statements().cashflow_statement(&args.symbol).await?;
  render(ctx, &args, "Cash Flow", &flows, summary::CASH_FLOW)
}

fn render<T>(
  ctx: &Context,
  args: &ReportArgs,
  title: &str,
  records: &[T],
  metrics: &[Metric<T>],
) -> Result<()>
where
  T: PeriodRecord + Serialize,
{
  info!("Retrieved {} {} periods for {}", records.len(), title, args.symbol);
  if !args.summary {
    return ctx.print_json(records);
  }

  if records.is_empty() {
    ctx.emit(format!("No {} data available.", title.to_lowercase()).yellow())?;
    return Ok(());
  }

  let shown = &records[..records.len().min(args.limit)];
  ctx.emit(format!("{} {}", args.symbol, title).bold().cyan())?;
  ctx.emit(metric_table(shown, period_heading, metrics))?;
  Ok(())
}

/// `2023-09-30 FY`, or just the date when the period is unknown
fn period_heading<T: PeriodRecord>(record: &T) -> String {
  match record.period() {
    Some(period) => format!("{} {}", record.date(), period),
    None => record.date().to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::super::test_support::{context, mount};
  use super::*;
  use findash_client::{CompanyBalanceSheet, CompanyCashFlow};
  use serde_json::{json, Value};
  use wiremock::MockServer;

  fn report(symbol: &str, summary: bool, limit: usize) -> ReportArgs {
    ReportArgs { symbol: symbol.to_string(), summary, limit }
  }

  #[test]
  fn test_period_heading() {
    let sheets: Vec<CompanyBalanceSheet> = serde_json::from_value(json!([
      {"date": "2023-09-30", "symbol": "AAPL", "period": "FY"},
      {"date": "2023-07-01", "symbol": "AAPL"}
    ]))
    .unwrap();

    assert_eq!(period_heading(&sheets[0]), "2023-09-30 FY");
    assert_eq!(period_heading(&sheets[1]), "2023-07-01");
  }

  #[tokio::test]
  async fn test_cashflow_json_output_matches_body() {
    let server = MockServer::start().await;
    let body = json!([{
      "date": "2023-09-30",
      "symbol": "AAPL",
      "operatingCashFlow": 110543000000u64,
      "capitalExpenditure": -10959000000i64,
      "link": null
    }]);
    mount(&server, "/getCashflowStatement", "query", "AAPL", body.clone()).await;

    let (ctx, out) = context(&server, false);
    cashflow(&ctx, report("AAPL", false, 5)).await.unwrap();

    let printed: Value = serde_json::from_str(&out.text()).unwrap();
    assert_eq!(printed, body);
    let flows: Vec<CompanyCashFlow> = serde_json::from_value(printed).unwrap();
    assert!(flows[0].link.is_null());
  }

  #[tokio::test]
  async fn test_income_summary_is_limited() {
    let server = MockServer::start().await;
    let body = json!([
      { "date": "2023-09-30", "symbol": "AAPL", "period": "FY", "revenue": 383285000000u64 },
      { "date": "2022-09-24", "symbol": "AAPL", "period": "FY", "revenue": 394328000000u64 },
      { "date": "2021-09-25", "symbol": "AAPL", "period": "FY", "revenue": 365817000000u64 }
    ]);
    mount(&server, "/getIncomeStatement", "query", "AAPL", body).await;

    let (ctx, out) = context(&server, false);
    income(&ctx, report("AAPL", true, 2)).await.unwrap();

    let text = out.text();
    assert!(text.contains("AAPL Income Statement"));
    assert!(text.contains("2023-09-30 FY"));
    assert!(text.contains("$394.3B"));
    assert!(!text.contains("2021-09-25"));
  }

  #[tokio::test]
  async fn test_empty_balance_sheet_summary() {
    let server = MockServer::start().await;
    mount(&server, "/getBalanceSheet", "query", "ZZZZ", json!([])).await;

    let (ctx, out) = context(&server, false);
    balance(&ctx, report("ZZZZ", true, 5)).await.unwrap();

    assert!(out.text().contains("No balance sheet data available."));
  }
}
