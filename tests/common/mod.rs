// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use openfuel::core::net::Fetch;
use openfuel::error::FetchError;

/// One `div.gd-fuel-table-block` with a heading row and the given data rows.
pub fn block(title: &str, rows: &[(&str, &str)]) -> String {
    let mut out = format!(
        r#"<div class="gd-fuel-table-block">
  <div class="gd-fuel-table-data">
    <h2 class="gd-fuel-table-block-title">{title}</h2>
    <table class="gd-fuel-table-list">
      <tbody>
        <tr><th>City</th><th>Price</th><th>Change</th></tr>
"#
    );
    for (name, price) in rows {
        out.push_str(&format!(
            "        <tr>\n          <td><a href=\"/x\">{name}</a></td>\n          <td>{price}</td>\n          <td>0.00</td>\n        </tr>\n"
        ));
    }
    out.push_str("      </tbody>\n    </table>\n  </div>\n</div>\n");
    out
}

pub fn page(blocks: &[String]) -> String {
    format!("<html><head><title>Fuel</title></head><body><section>{}</section></body></html>", blocks.concat())
}

/// The two-block petrol page: metro cities, then states; Chandigarh is in both.
pub fn petrol_page() -> String {
    page(&[
        block("Petrol Price in Indian Metro Cities", &[("New Delhi", "₹94.77"), ("Chandigarh", "₹94.30")]),
        block("State-Wise Petrol Price in India", &[("Chandigarh", "₹94.30"), ("Punjab", "₹98.15")]),
    ])
}

pub fn diesel_page() -> String {
    page(&[block(
        "Diesel Price in Indian Metro Cities",
        &[("New Delhi", "₹87.67"), ("Mumbai", "₹89.97"), ("Kolkata", "₹90.76")],
    )])
}

/// Canned pages by URL; records every URL asked for.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Result<String, u16>>,
    pub calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), Ok(body));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}
