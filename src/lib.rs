//! # SBA API Client
//!
//! A Rust client for the U.S. Small Business Administration public REST
//! API (<http://www.sba.gov/api/>). Endpoint methods mirror the API's
//! path structure across its four resource families:
//!
//! - **Licenses & Permits**: requirements by category, business type,
//!   and location
//! - **Loans & Grants**: federal and state financing program searches
//! - **Recommended Sites**: curated sites by keyword, category, master
//!   term, and domain
//! - **City & County Web Data**: GNIS geographic data and government
//!   web site URLs
//!
//! Each call is a single blocking GET returning the JSON payload as a
//! [`serde_json::Value`]; the client imposes no response schema and
//! keeps no state between calls.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sba_api::api::SbaClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SbaClient::sba_gov()?;
//!
//! // Licenses required to run a restaurant in Albany, NY
//! let licenses = client
//!     .licenses_and_permits()
//!     .by_business_type_state_city("restaurant", "ny", "albany")?;
//! println!("{licenses}");
//!
//! // Financing programs for woman-owned manufacturing businesses in Maine
//! let programs = client
//!     .loans_and_grants()
//!     .by_state_industry_specialty("me", "manufacturing", "woman")?;
//! println!("{programs}");
//! # Ok(())
//! # }
//! ```

/// API client, resource family views, and error types
pub mod api;

/// Shared error types
pub mod errors;
