// src/config/consts.rs

// Sources
pub const PETROL_URL: &str = "https://www.goodreturns.in/petrol-price.html";
pub const DIESEL_URL: &str = "https://www.goodreturns.in/diesel-price.html";

// Net config
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0.0.0 Safari/537.36"
);
pub const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-IN,en;q=0.9";
pub const REQUEST_TIMEOUT_SECS: u64 = 30; // challenge pages can be slow
pub const MAX_REDIRECTS: usize = 5;

// Page structure (class markers on goodreturns.in)
pub const FUEL_TABLE_BLOCK: &str = "gd-fuel-table-block";
pub const FUEL_TABLE_LIST: &str = "gd-fuel-table-list";

// Mis-encoded rupee sign the site sometimes serves; contains a stray digit
pub const CURRENCY_ARTIFACT: &str = "ƒ,1";

// Output
pub const DEFAULT_OUT_FILE: &str = "prices.json";
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

// Sanity
pub const MIN_EXPECTED_ENTRIES: usize = 20;
