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

//! Company search, profile, key metrics and filing records

use crate::common::{Extra, Nullable};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of the company search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
  /// Search hits, best match first
  pub data: Vec<CompanySearch>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// A single company search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearch {
  pub symbol: String,

  pub name: String,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub currency: Nullable<String>,

  /// Full exchange name, e.g. "NASDAQ Global Select"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub stock_exchange: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub exchange_short_name: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Company identity and descriptive data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
  pub symbol: String,

  pub company_name: String,

  /// Last traded price
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub price: Nullable<Number>,

  /// Discounted cash flow estimate of fair value per share
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub dcf: Nullable<Number>,

  /// Difference between price and DCF estimate
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub dcf_diff: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub sector: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub industry: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub description: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub beta: Nullable<Number>,

  /// Average traded volume
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub vol_avg: Nullable<Number>,

  /// Market capitalization
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub mkt_cap: Nullable<Number>,

  /// Last dividend paid
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub last_div: Nullable<Number>,

  /// 52 week range, e.g. "124.17-199.62"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub range: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub changes: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub currency: Nullable<String>,

  /// Central Index Key (CIK)
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cik: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub isin: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cusip: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub exchange: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub exchange_short_name: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub website: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub ceo: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub country: Nullable<String>,

  /// Headcount as reported, kept as text
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub full_time_employees: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub phone: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub address: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub city: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub state: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub zip: Nullable<String>,

  /// Logo URL
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub image: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub ipo_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub default_image: Nullable<bool>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub is_etf: Nullable<bool>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub is_actively_trading: Nullable<bool>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub is_adr: Nullable<bool>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub is_fund: Nullable<bool>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Trailing-twelve-month key metrics for a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyKeyMetrics {
  #[serde(rename = "revenuePerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub revenue_per_share_ttm: Nullable<Number>,

  #[serde(rename = "netIncomePerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub net_income_per_share_ttm: Nullable<Number>,

  #[serde(rename = "operatingCashFlowPerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub operating_cash_flow_per_share_ttm: Nullable<Number>,

  #[serde(rename = "freeCashFlowPerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub free_cash_flow_per_share_ttm: Nullable<Number>,

  #[serde(rename = "cashPerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub cash_per_share_ttm: Nullable<Number>,

  #[serde(rename = "bookValuePerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub book_value_per_share_ttm: Nullable<Number>,

  #[serde(rename = "tangibleBookValuePerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub tangible_book_value_per_share_ttm: Nullable<Number>,

  #[serde(rename = "marketCapTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub market_cap_ttm: Nullable<Number>,

  #[serde(rename = "enterpriseValueTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub enterprise_value_ttm: Nullable<Number>,

  /// Price to earnings
  #[serde(rename = "peRatioTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub pe_ratio_ttm: Nullable<Number>,

  #[serde(rename = "priceToSalesRatioTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub price_to_sales_ratio_ttm: Nullable<Number>,

  /// Price to book
  #[serde(rename = "pbRatioTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub pb_ratio_ttm: Nullable<Number>,

  #[serde(rename = "evToSalesTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub ev_to_sales_ttm: Nullable<Number>,

  #[serde(rename = "earningsYieldTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub earnings_yield_ttm: Nullable<Number>,

  #[serde(rename = "freeCashFlowYieldTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub free_cash_flow_yield_ttm: Nullable<Number>,

  #[serde(rename = "debtToEquityTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub debt_to_equity_ttm: Nullable<Number>,

  #[serde(rename = "debtToAssetsTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub debt_to_assets_ttm: Nullable<Number>,

  #[serde(rename = "currentRatioTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub current_ratio_ttm: Nullable<Number>,

  #[serde(rename = "interestCoverageTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub interest_coverage_ttm: Nullable<Number>,

  #[serde(rename = "dividendYieldTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub dividend_yield_ttm: Nullable<Number>,

  #[serde(rename = "payoutRatioTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub payout_ratio_ttm: Nullable<Number>,

  #[serde(rename = "grahamNumberTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub graham_number_ttm: Nullable<Number>,

  /// Return on invested capital
  #[serde(rename = "roicTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub roic_ttm: Nullable<Number>,

  #[serde(rename = "returnOnTangibleAssetsTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub return_on_tangible_assets_ttm: Nullable<Number>,

  #[serde(rename = "workingCapitalTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub working_capital_ttm: Nullable<Number>,

  /// Return on equity
  #[serde(rename = "roeTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub roe_ttm: Nullable<Number>,

  #[serde(rename = "capexPerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub capex_per_share_ttm: Nullable<Number>,

  #[serde(rename = "dividendPerShareTTM", default, skip_serializing_if = "Nullable::is_missing")]
  pub dividend_per_share_ttm: Nullable<Number>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Reference to a 10-K annual filing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTenK {
  pub symbol: String,

  /// Filing date (the backend spells it "fillingDate")
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub filling_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accepted_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cik: Nullable<String>,

  /// Filing form type, e.g. "10-K"
  #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_missing")]
  pub filing_type: Nullable<String>,

  /// Filing index page
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub link: Nullable<String>,

  /// Direct link to the filing document
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub final_link: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}
