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

//! Common types shared by the record modules

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::ops::Deref;

/// Fields present in a response object that the record does not model.
///
/// Flattened into every record so re-serializing yields the object that was received.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A field the backend may leave out, send as `null`, or fill in.
///
/// Missing fields stay missing and explicit `null`s stay `null` when the
/// record is serialized again. Declare fields as
/// `#[serde(default, skip_serializing_if = "Nullable::is_missing")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Nullable<T> {
  /// The key was not in the object
  #[default]
  Missing,
  /// The key was present with a `null` value
  Null,
  Value(T),
}

impl<T> Nullable<T> {
  pub fn is_missing(&self) -> bool {
    matches!(self, Nullable::Missing)
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Nullable::Null)
  }

  /// The value, if one was sent
  pub fn value(&self) -> Option<&T> {
    match self {
      Nullable::Value(v) => Some(v),
      _ => None,
    }
  }

  pub fn into_option(self) -> Option<T> {
    match self {
      Nullable::Value(v) => Some(v),
      _ => None,
    }
  }
}

impl<T: Deref> Nullable<T> {
  pub fn as_deref(&self) -> Option<&T::Target> {
    self.value().map(Deref::deref)
  }
}

impl Nullable<Number> {
  /// The number as `f64`, for arithmetic and display
  pub fn as_f64(&self) -> Option<f64> {
    self.value().and_then(Number::as_f64)
  }
}

impl<T> From<T> for Nullable<T> {
  fn from(value: T) -> Self {
    Nullable::Value(value)
  }
}

impl<T: Serialize> Serialize for Nullable<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Nullable::Value(v) => serializer.serialize_some(v),
      // missing fields are skipped by the caller's skip_serializing_if
      Nullable::Missing | Nullable::Null => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(match Option::<T>::deserialize(deserializer)? {
      Some(v) => Nullable::Value(v),
      None => Nullable::Null,
    })
  }
}

/// A record describing one reporting period of a financial statement
pub trait PeriodRecord {
  /// Period end date, `YYYY-MM-DD`
  fn date(&self) -> &str;

  /// Ticker symbol the period belongs to
  fn symbol(&self) -> &str;

  /// Fiscal period label such as "FY" or "Q3", if reported
  fn period(&self) -> Option<&str>;

  /// Fiscal year, if reported
  fn calendar_year(&self) -> Option<&str>;
}

/// Implement `PeriodRecord` for a statement struct carrying the standard period header
macro_rules! impl_period_record {
  ($struct_name:ident) => {
    impl $crate::common::PeriodRecord for $struct_name {
      fn date(&self) -> &str {
        &self.date
      }

      fn symbol(&self) -> &str {
        &self.symbol
      }

      fn period(&self) -> Option<&str> {
        self.period.as_deref()
      }

      fn calendar_year(&self) -> Option<&str> {
        self.calendar_year.as_deref()
      }
    }
  };
}

pub(crate) use impl_period_record;

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[derive(Debug, Serialize, Deserialize)]
  #[serde(rename_all = "camelCase")]
  struct Row {
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    net_income: Nullable<Number>,

    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    link: Nullable<String>,

    #[serde(flatten)]
    extra: Extra,
  }

  #[test]
  fn test_missing_null_and_value_are_distinct() {
    let missing: Row = serde_json::from_value(json!({})).unwrap();
    assert!(missing.net_income.is_missing());

    let null: Row = serde_json::from_value(json!({ "netIncome": null, "link": null })).unwrap();
    assert!(null.net_income.is_null());
    assert_eq!(null.net_income.as_f64(), None);
    assert_eq!(null.link.as_deref(), None);

    let value: Row = serde_json::from_value(json!({ "netIncome": 96995000000u64 })).unwrap();
    assert_eq!(value.net_income.as_f64(), Some(96995000000.0));
  }

  #[test]
  fn test_integers_and_nulls_survive_reserialization() {
    let body = json!({
      "netIncome": 96995000000u64,
      "link": null,
      "calendarYear": "2023"
    });
    let row: Row = serde_json::from_value(body.clone()).unwrap();

    let out = serde_json::to_value(&row).unwrap();
    assert_eq!(out, body);
    assert!(out["netIncome"].is_u64());
  }

  #[test]
  fn test_negative_and_fractional_numbers() {
    let body = json!({ "netIncome": -10959000000i64, "ratio": 0.2531 });
    let row: Row = serde_json::from_value(body.clone()).unwrap();

    assert_eq!(row.net_income.as_f64(), Some(-10959000000.0));
    assert_eq!(serde_json::to_value(&row).unwrap(), body);
  }
}
