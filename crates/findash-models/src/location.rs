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

//! IP geolocation record

use crate::common::{Extra, Nullable};
use serde::{Deserialize, Serialize};

/// Geolocation details for an IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationGet {
  pub ip: String,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub city: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub region: Nullable<String>,

  /// ISO 3166 country code
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub country: Nullable<String>,

  /// "latitude,longitude"
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub loc: Nullable<String>,

  /// Owning organisation / ASN
  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub org: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub postal: Nullable<String>,

  #[serde(default, skip_serializing_if = "Nullable::is_missing")]
  pub timezone: Nullable<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl LocationGet {
  /// Latitude and longitude parsed from `loc`
  pub fn coordinates(&self) -> Option<(f64, f64)> {
    let (lat, lon) = self.loc.as_deref()?.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_location_deserialization() {
    let value = json!({
      "ip": "8.8.8.8",
      "city": "Mountain View",
      "region": "California",
      "country": "US",
      "loc": "37.4056,-122.0775",
      "org": "AS15169 Google LLC",
      "postal": "94043",
      "timezone": "America/Los_Angeles",
      "anycast": true
    });

    let location: LocationGet = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(location.ip, "8.8.8.8");
    assert_eq!(location.country.as_deref(), Some("US"));
    assert_eq!(location.coordinates(), Some((37.4056, -122.0775)));
    assert_eq!(location.extra.get("anycast"), Some(&json!(true)));
    assert_eq!(serde_json::to_value(&location).unwrap(), value);
  }

  #[test]
  fn test_location_nulls_round_trip() {
    let value = json!({
      "ip": "203.0.113.7",
      "city": null,
      "loc": null,
      "asn": 64496,
      "timezone": "UTC"
    });

    let location: LocationGet = serde_json::from_value(value.clone()).unwrap();
    assert!(location.city.is_null());
    assert!(location.region.is_missing());
    assert_eq!(location.coordinates(), None);
    assert_eq!(serde_json::to_value(&location).unwrap(), value);
  }

  #[test]
  fn test_coordinates_missing_or_malformed() {
    let mut location: LocationGet = serde_json::from_value(json!({ "ip": "10.0.0.1" })).unwrap();
    assert_eq!(location.coordinates(), None);

    location.loc = Nullable::Value("somewhere".to_string());
    assert_eq!(location.coordinates(), None);
  }
}
