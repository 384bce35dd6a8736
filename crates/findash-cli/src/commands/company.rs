use super::summary::{self, metric_table};
use super::{Context, QueryArgs, ReportArgs};
use anyhow::Result;
use colored::*;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use findash_client::{CompanySearch, CompanyTenK, Endpoint};
use tracing::info;

pub async fn search(ctx: &Context, args: QueryArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::SearchCompanies, &args.query).await;
  }

  let response = ctx.client.company().search_companies(&args.query).await?;
  info!("Found {} companies matching '{}'", response.data.len(), args.query);

  if response.data.is_empty() {
    ctx.emit("No companies found.".yellow())?;
    return Ok(());
  }
  ctx.emit(search_table(&response.data))?;
  Ok(())
}

pub async fn profile(ctx: &Context, args: ReportArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::CompanyProfile, &args.symbol).await;
  }

  let profiles = ctx.client.company().company_profile(&args.symbol).await?;
  if !args.summary {
    return ctx.print_json(&profiles);
  }

  for profile in &profiles {
    ctx.emit(format!("{} ({})", profile.company_name, profile.symbol).bold().cyan())?;
    ctx.emit(metric_table(std::slice::from_ref(profile), |p| p.symbol.clone(), summary::PROFILE))?;
    if let Some(description) = profile.description.value() {
      ctx.emit(format!("\n{}", description))?;
    }
  }
  Ok(())
}

pub async fn metrics(ctx: &Context, args: ReportArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::KeyMetrics, &args.symbol).await;
  }

  let metrics = ctx.client.company().key_metrics(&args.symbol).await?;
  if !args.summary {
    return ctx.print_json(&metrics);
  }

  let shown = &metrics[..metrics.len().min(args.limit)];
  ctx.emit(format!("{} key metrics (TTM)", args.symbol).bold().cyan())?;
  ctx.emit(metric_table(shown, |_| "TTM".to_string(), summary::KEY_METRICS))?;
  Ok(())
}

pub async fn ten_k(ctx: &Context, args: QueryArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::TenK, &args.query).await;
  }

  let filings = ctx.client.company().ten_k(&args.query).await?;
  info!("Retrieved {} 10-K filings for {}", filings.len(), args.query);

  if filings.is_empty() {
    ctx.emit("No 10-K filings found.".yellow())?;
    return Ok(());
  }
  ctx.emit(filings_table(&filings))?;
  Ok(())
}

fn search_table(hits: &[CompanySearch]) -> Table {
  let mut table = Table::new();
  table.set_content_arrangement(ContentArrangement::Dynamic);
  table.set_header(
    ["Symbol", "Name", "Currency", "Exchange"]
      .iter()
      .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
  );

  for hit in hits {
    table.add_row(vec![
      hit.symbol.clone(),
      hit.name.clone(),
      hit.currency.value().cloned().unwrap_or_default(),
      hit.exchange_short_name.value().or(hit.stock_exchange.value()).cloned().unwrap_or_default(),
    ]);
  }
  table
}

fn filings_table(filings: &[CompanyTenK]) -> Table {
  let mut table = Table::new();
  table.set_content_arrangement(ContentArrangement::Dynamic);
  table.set_header(
    ["Filed", "Type", "Link"].iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
  );

  for filing in filings {
    table.add_row(vec![
      filing.filling_date.value().cloned().unwrap_or_default(),
      filing.filing_type.value().cloned().unwrap_or_default(),
      filing.final_link.value().or(filing.link.value()).cloned().unwrap_or_default(),
    ]);
  }
  table
}

#[cfg(test)]
mod tests {
  use super::super::test_support::{context, mount};
  use super::*;
  use serde_json::{json, Value};
  use wiremock::MockServer;

  #[test]
  fn test_search_table_prefers_short_exchange_name() {
    let hits: Vec<CompanySearch> = serde_json::from_value(json!([
      {"symbol": "AAPL", "name": "Apple Inc.", "stockExchange": "NASDAQ Global Select", "exchangeShortName": "NASDAQ"},
      {"symbol": "APLE", "name": "Apple Hospitality REIT", "stockExchange": "NYSE"}
    ]))
    .unwrap();

    let rendered = search_table(&hits).to_string();
    assert!(rendered.contains("NASDAQ"));
    assert!(!rendered.contains("NASDAQ Global Select"));
    assert!(rendered.contains("NYSE"));
  }

  #[tokio::test]
  async fn test_search_prints_hits() {
    let server = MockServer::start().await;
    let body = json!({ "data": [{ "symbol": "AAPL", "name": "Apple Inc." }] });
    mount(&server, "/searchCompanies", "query", "appl", body).await;

    let (ctx, out) = context(&server, false);
    search(&ctx, QueryArgs { query: "appl".to_string() }).await.unwrap();

    let text = out.text();
    assert!(text.contains("AAPL"));
    assert!(text.contains("Apple Inc."));
  }

  #[tokio::test]
  async fn test_search_without_hits() {
    let server = MockServer::start().await;
    mount(&server, "/searchCompanies", "query", "qqqq", json!({ "data": [] })).await;

    let (ctx, out) = context(&server, false);
    search(&ctx, QueryArgs { query: "qqqq".to_string() }).await.unwrap();

    assert!(out.text().contains("No companies found."));
  }

  #[tokio::test]
  async fn test_profile_raw_and_summary() {
    let server = MockServer::start().await;
    let body = json!([{
      "symbol": "AAPL",
      "companyName": "Apple Inc.",
      "price": 189,
      "dcf": null,
      "sector": "Technology",
      "description": "Designs smartphones."
    }]);
    wiremock::Mock::given(wiremock::matchers::path("/getCompanyProfile"))
      .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(body.clone()))
      .expect(2)
      .mount(&server)
      .await;

    let (raw_ctx, raw_out) = context(&server, true);
    profile(&raw_ctx, ReportArgs { symbol: "AAPL".to_string(), summary: true, limit: 5 })
      .await
      .unwrap();
    assert_eq!(serde_json::from_str::<Value>(&raw_out.text()).unwrap(), body);

    let (ctx, out) = context(&server, false);
    profile(&ctx, ReportArgs { symbol: "AAPL".to_string(), summary: true, limit: 5 }).await.unwrap();
    let text = out.text();
    assert!(text.contains("$189.00"));
    assert!(text.contains("Technology"));
    assert!(text.contains("Designs smartphones."));
  }

  #[tokio::test]
  async fn test_ten_k_without_filings() {
    let server = MockServer::start().await;
    mount(&server, "/getTenK", "query", "NEWCO", json!([])).await;

    let (ctx, out) = context(&server, false);
    ten_k(&ctx, QueryArgs { query: "NEWCO".to_string() }).await.unwrap();

    assert!(out.text().contains("No 10-K filings found."));
  }
}
