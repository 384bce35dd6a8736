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

//! Dashboard summary tables
//!
//! A summary is a list of labelled metrics rendered for each record; one
//! column per reporting period, one row per metric.

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use findash_models::format::{format_large_non_monetary_number, format_optional_monetary, format_ratio};
use findash_models::{
  CompanyBalanceSheet, CompanyCashFlow, CompanyIncomeStatement, CompanyKeyMetrics, CompanyProfile,
};

pub struct Metric<T> {
  pub label: &'static str,
  pub render: fn(&T) -> String,
}

fn ratio(value: Option<f64>) -> String {
  value.map(format_ratio).unwrap_or_else(|| "-".to_string())
}

fn count(value: Option<f64>) -> String {
  value.map(format_large_non_monetary_number).unwrap_or_else(|| "-".to_string())
}

fn dollars(value: Option<f64>) -> String {
  value.map(|v| format!("${:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn text(value: Option<&str>) -> String {
  value.unwrap_or("-").to_string()
}

pub const CASH_FLOW: &[Metric<CompanyCashFlow>] = &[
  Metric { label: "Operating Cashflow", render: |c| format_optional_monetary(c.operating_cash_flow.as_f64()) },
  Metric {
    label: "Investing Cashflow",
    render: |c| format_optional_monetary(c.net_cash_used_for_investing_activites.as_f64()),
  },
  Metric {
    label: "Financing Cashflow",
    render: |c| format_optional_monetary(c.net_cash_used_provided_by_financing_activities.as_f64()),
  },
  Metric { label: "Cash At End of Period", render: |c| format_optional_monetary(c.cash_at_end_of_period.as_f64()) },
  Metric { label: "CapEX", render: |c| format_optional_monetary(c.capital_expenditure.as_f64()) },
  Metric { label: "Issuance Of Stock", render: |c| format_optional_monetary(c.common_stock_issued.as_f64()) },
  Metric { label: "Free Cash Flow", render: |c| format_optional_monetary(c.free_cash_flow.as_f64()) },
];

pub const INCOME: &[Metric<CompanyIncomeStatement>] = &[
  Metric { label: "Revenue", render: |s| format_optional_monetary(s.revenue.as_f64()) },
  Metric { label: "Cost Of Revenue", render: |s| format_optional_monetary(s.cost_of_revenue.as_f64()) },
  Metric { label: "Gross Profit", render: |s| format_optional_monetary(s.gross_profit.as_f64()) },
  Metric { label: "R&D Expenses", render: |s| format_optional_monetary(s.research_and_development_expenses.as_f64()) },
  Metric { label: "Operating Income", render: |s| format_optional_monetary(s.operating_income.as_f64()) },
  Metric { label: "EBITDA", render: |s| format_optional_monetary(s.ebitda.as_f64()) },
  Metric { label: "Net Income", render: |s| format_optional_monetary(s.net_income.as_f64()) },
  Metric { label: "Net Income Ratio", render: |s| ratio(s.net_income_ratio.as_f64()) },
  Metric { label: "Earnings Per Share", render: |s| ratio(s.eps.as_f64()) },
  Metric { label: "Earnings Per Diluted", render: |s| ratio(s.eps_diluted.as_f64()) },
  Metric { label: "Shares Outstanding", render: |s| count(s.weighted_average_shs_out.as_f64()) },
];

pub const BALANCE_SHEET: &[Metric<CompanyBalanceSheet>] = &[
  Metric { label: "Cash", render: |b| format_optional_monetary(b.cash_and_cash_equivalents.as_f64()) },
  Metric { label: "Total Current Assets", render: |b| format_optional_monetary(b.total_current_assets.as_f64()) },
  Metric { label: "Total Assets", render: |b| format_optional_monetary(b.total_assets.as_f64()) },
  Metric { label: "Total Current Liabilities", render: |b| format_optional_monetary(b.total_current_liabilities.as_f64()) },
  Metric { label: "Long Term Debt", render: |b| format_optional_monetary(b.long_term_debt.as_f64()) },
  Metric { label: "Total Liabilities", render: |b| format_optional_monetary(b.total_liabilities.as_f64()) },
  Metric { label: "Stockholders Equity", render: |b| format_optional_monetary(b.total_stockholders_equity.as_f64()) },
  Metric { label: "Total Debt", render: |b| format_optional_monetary(b.total_debt.as_f64()) },
  Metric { label: "Net Debt", render: |b| format_optional_monetary(b.net_debt.as_f64()) },
];

pub const KEY_METRICS: &[Metric<CompanyKeyMetrics>] = &[
  Metric { label: "Market Cap", render: |m| format_optional_monetary(m.market_cap_ttm.as_f64()) },
  Metric { label: "Enterprise Value", render: |m| format_optional_monetary(m.enterprise_value_ttm.as_f64()) },
  Metric { label: "P/E Ratio", render: |m| ratio(m.pe_ratio_ttm.as_f64()) },
  Metric { label: "P/B Ratio", render: |m| ratio(m.pb_ratio_ttm.as_f64()) },
  Metric { label: "Current Ratio", render: |m| ratio(m.current_ratio_ttm.as_f64()) },
  Metric { label: "Debt To Equity", render: |m| ratio(m.debt_to_equity_ttm.as_f64()) },
  Metric { label: "Return On Equity", render: |m| ratio(m.roe_ttm.as_f64()) },
  Metric { label: "Earnings Yield", render: |m| ratio(m.earnings_yield_ttm.as_f64()) },
  Metric { label: "Free Cashflow Yield", render: |m| ratio(m.free_cash_flow_yield_ttm.as_f64()) },
  Metric { label: "Dividend Yield", render: |m| ratio(m.dividend_yield_ttm.as_f64()) },
  Metric { label: "Book Value Per Share", render: |m| ratio(m.book_value_per_share_ttm.as_f64()) },
  Metric { label: "Graham Number", render: |m| ratio(m.graham_number_ttm.as_f64()) },
];

pub const PROFILE: &[Metric<CompanyProfile>] = &[
  Metric { label: "Company Name", render: |p| p.company_name.clone() },
  Metric { label: "Price", render: |p| dollars(p.price.as_f64()) },
  Metric { label: "DCF", render: |p| dollars(p.dcf.as_f64()) },
  Metric { label: "Sector", render: |p| text(p.sector.as_deref()) },
  Metric { label: "Industry", render: |p| text(p.industry.as_deref()) },
  Metric { label: "Market Cap", render: |p| format_optional_monetary(p.mkt_cap.as_f64()) },
  Metric { label: "Exchange", render: |p| text(p.exchange_short_name.as_deref()) },
  Metric { label: "CEO", render: |p| text(p.ceo.as_deref()) },
];

/// Build a table with a header cell per record and a row per metric
pub fn metric_table<T>(records: &[T], heading: impl Fn(&T) -> String, metrics: &[Metric<T>]) -> Table {
  let mut table = Table::new();
  table.set_content_arrangement(ContentArrangement::Dynamic);

  let mut header = vec![Cell::new("")];
  header.extend(records.iter().map(|r| Cell::new(heading(r)).add_attribute(Attribute::Bold)));
  table.set_header(header);

  for m in metrics {
    let mut row = vec![Cell::new(m.label).add_attribute(Attribute::Bold)];
    row.extend(records.iter().map(|r| Cell::new((m.render)(r))));
    table.add_row(row);
  }

  table
}
