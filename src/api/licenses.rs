use serde_json::Value;

use super::client::SbaClient;
use super::errors::ApiClientError;
use super::types::ResourceFamily;

/// Endpoints under `/license_permit`: business license and permit
/// requirements by category, business type, and location.
#[derive(Clone, Copy)]
pub struct LicensesAndPermits<'a> {
    client: &'a SbaClient,
}

impl<'a> LicensesAndPermits<'a> {
    pub(crate) fn new(client: &'a SbaClient) -> Self {
        Self { client }
    }

    fn fetch(&self, segments: &[&str]) -> Result<Value, ApiClientError> {
        self.client
            .fetch(ResourceFamily::LicensesAndPermits, segments)
    }

    /// License and permit requirements matching a category (e.g.
    /// `doing business as`, `entity filing`, `tax registration`) for
    /// each of the 54 states and territories.
    pub fn by_category(&self, category: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["by_category", category])
    }

    /// All business licenses for all business types required to operate
    /// in a specific state or territory (two letter postal code).
    pub fn by_state(&self, state: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["all_by_state", state])
    }

    /// Licenses and permits required for a specific type of business
    /// (e.g. `child care services`, `restaurant`) across all states.
    pub fn by_business_type(&self, business_type: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["by_business_type", business_type])
    }

    /// Licenses and permits for a business type in a specific state.
    pub fn by_business_type_state(
        &self,
        business_type: &str,
        state: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&["state_only", business_type, state])
    }

    /// Licenses and permits for a business type in a specific state and
    /// county. County names include the word "county" (or "parish" etc.),
    /// e.g. `orange county`.
    pub fn by_business_type_state_county(
        &self,
        business_type: &str,
        state: &str,
        county: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&["state_and_county", business_type, state, county])
    }

    /// Licenses and permits for a business type in a specific state and
    /// city.
    pub fn by_business_type_state_city(
        &self,
        business_type: &str,
        state: &str,
        city: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&["state_and_city", business_type, state, city])
    }

    /// Licenses and permits for a business type in a specific zip code.
    pub fn by_business_type_zipcode(
        &self,
        business_type: &str,
        zipcode: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&["by_zip", business_type, zipcode])
    }
}
