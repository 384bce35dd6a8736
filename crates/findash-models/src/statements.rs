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

//! Financial statement records: income statement, balance sheet and cash flow
//!
//! Each endpoint returns one record per reporting period, most recent first.

use crate::common::{impl_period_record, Extra, Nullable};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One reporting period of an income statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIncomeStatement {
  /// Period end date, `YYYY-MM-DD`
  pub date: String,

  pub symbol: String,

  /// Central Index Key (CIK)
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cik: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub reported_currency: Nullable<String>,

  /// Filing date (the backend spells it "fillingDate")
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub filling_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accepted_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub calendar_year: Nullable<String>,

  /// Fiscal period label, e.g. "FY" or "Q1"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub period: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub revenue: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cost_of_revenue: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub gross_profit: Nullable<Number>,

  /// Gross profit as a fraction of revenue
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub gross_profit_ratio: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub research_and_development_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub general_and_administrative_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub selling_and_marketing_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub selling_general_and_administrative_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub operating_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cost_and_expenses: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub interest_income: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub interest_expense: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub depreciation_and_amortization: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub ebitda: Nullable<Number>,

  #[serde(rename = "ebitdaratio", default, skip_serializing_if = "Nullable::is_missing")]
  pub ebitda_ratio: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub operating_income: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub operating_income_ratio: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_other_income_expenses_net: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub income_before_tax: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub income_before_tax_ratio: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub income_tax_expense: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_income: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_income_ratio: Nullable<Number>,

  /// Basic earnings per share
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub eps: Nullable<Number>,

  #[serde(rename = "epsdiluted", default, skip_serializing_if = "Nullable::is_missing")]
  pub eps_diluted: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub weighted_average_shs_out: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub weighted_average_shs_out_dil: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub link: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub final_link: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl_period_record!(CompanyIncomeStatement);

/// One reporting period of a balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBalanceSheet {
  /// Period end date, `YYYY-MM-DD`
  pub date: String,

  pub symbol: String,

  /// Central Index Key (CIK)
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cik: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub reported_currency: Nullable<String>,

  /// Filing date (the backend spells it "fillingDate")
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub filling_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accepted_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub calendar_year: Nullable<String>,

  /// Fiscal period label, e.g. "FY" or "Q1"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub period: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cash_and_cash_equivalents: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub short_term_investments: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cash_and_short_term_investments: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_receivables: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub inventory: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_current_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_current_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub property_plant_equipment_net: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub goodwill: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub intangible_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub goodwill_and_intangible_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub long_term_investments: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub tax_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_non_current_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_non_current_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_assets: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub account_payables: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub short_term_debt: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub tax_payables: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub deferred_revenue: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_current_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_current_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub long_term_debt: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub deferred_revenue_non_current: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub deferred_tax_liabilities_non_current: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_non_current_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_non_current_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub capital_lease_obligations: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_liabilities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub preferred_stock: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub common_stock: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub retained_earnings: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accumulated_other_comprehensive_income_loss: Nullable<Number>,

  #[serde(rename = "othertotalStockholdersEquity", default, skip_serializing_if = "Nullable::is_missing")]
  pub other_total_stockholders_equity: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_stockholders_equity: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_equity: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_liabilities_and_stockholders_equity: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub minority_interest: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_liabilities_and_total_equity: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_investments: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub total_debt: Nullable<Number>,

  /// Total debt less cash and equivalents
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_debt: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub link: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub final_link: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl_period_record!(CompanyBalanceSheet);

/// One reporting period of a cash flow statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCashFlow {
  /// Period end date, `YYYY-MM-DD`
  pub date: String,

  pub symbol: String,

  /// Central Index Key (CIK)
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cik: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub reported_currency: Nullable<String>,

  /// Filing date (the backend spells it "fillingDate")
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub filling_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accepted_date: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub calendar_year: Nullable<String>,

  /// Fiscal period label, e.g. "FY" or "Q1"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub period: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_income: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub depreciation_and_amortization: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub deferred_income_tax: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub stock_based_compensation: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub change_in_working_capital: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accounts_receivables: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub inventory: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub accounts_payables: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_working_capital: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_non_cash_items: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_cash_provided_by_operating_activities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub investments_in_property_plant_and_equipment: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub acquisitions_net: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub purchases_of_investments: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub sales_maturities_of_investments: Nullable<Number>,

  /// Spelled as the backend sends it
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_investing_activites: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_cash_used_for_investing_activites: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub debt_repayment: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub common_stock_issued: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub common_stock_repurchased: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub dividends_paid: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub other_financing_activites: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_cash_used_provided_by_financing_activities: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub effect_of_forex_changes_on_cash: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub net_change_in_cash: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cash_at_end_of_period: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub cash_at_beginning_of_period: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub operating_cash_flow: Nullable<Number>,

  /// Reported as a negative amount
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub capital_expenditure: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub free_cash_flow: Nullable<Number>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub link: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub final_link: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl_period_record!(CompanyCashFlow);
