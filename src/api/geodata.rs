use serde_json::Value;

use super::client::SbaClient;
use super::errors::ApiClientError;
use super::types::{LinkScope, ResourceFamily};

/// Endpoints under `/geodata`: city and county geographic data from
/// GNIS and the government web sites associated with it.
///
/// State-wide methods take a pair of flags selecting counties, cities,
/// or both; the flag routing is fixed by the upstream API (see
/// [`LinkScope::from_flags`]). Point lookups place the city or county
/// name before the state in the path.
#[derive(Clone, Copy)]
pub struct CityCountyWebData<'a> {
    client: &'a SbaClient,
}

impl<'a> CityCountyWebData<'a> {
    pub(crate) fn new(client: &'a SbaClient) -> Self {
        Self { client }
    }

    fn fetch(&self, segments: &[&str]) -> Result<Value, ApiClientError> {
        self.client
            .fetch(ResourceFamily::CityCountyWebData, segments)
    }

    /// All URLs associated with city and/or county governments in a
    /// given state. With both flags false the combined variant is
    /// fetched, same as both true.
    pub fn all_urls_by_state(
        &self,
        state: &str,
        show_county: bool,
        show_city: bool,
    ) -> Result<Value, ApiClientError> {
        let scope = LinkScope::from_flags(show_county, show_city);
        let template = format!("{}_links_for_state_of", scope.infix());
        self.fetch(&[template.as_str(), state])
    }

    /// All URLs for a specific county. The county name includes the
    /// word "county" (or its equivalent), e.g. `orange county`.
    pub fn all_urls_by_county(&self, state: &str, county: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["all_links_for_county_of", county, state])
    }

    /// All URLs for a specific city, town, or village.
    pub fn all_urls_by_city(&self, state: &str, city: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["all_links_for_city_of", city, state])
    }

    /// Primary URLs only. A primary URL is the official government web
    /// site for a city or county; when a government has several domains
    /// one is tagged primary upstream.
    pub fn primary_urls_by_state(
        &self,
        state: &str,
        show_county: bool,
        show_city: bool,
    ) -> Result<Value, ApiClientError> {
        let scope = LinkScope::from_flags(show_county, show_city);
        let template = format!("primary_{}_links_for_state_of", scope.infix());
        self.fetch(&[template.as_str(), state])
    }

    /// Primary URL for a specific county.
    pub fn primary_urls_by_county(
        &self,
        state: &str,
        county: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&["primary_links_for_county_of", county, state])
    }

    /// Primary URL for a specific city.
    pub fn primary_url_by_city(&self, state: &str, city: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["primary_links_for_city_of", city, state])
    }

    /// City and county records for a state, including those without any
    /// associated URL.
    pub fn all_data_by_state(
        &self,
        state: &str,
        show_county: bool,
        show_city: bool,
    ) -> Result<Value, ApiClientError> {
        let scope = LinkScope::from_flags(show_county, show_city);
        let template = format!("{}_data_for_state_of", scope.infix());
        self.fetch(&[template.as_str(), state])
    }

    /// Full record for a specific city.
    pub fn all_data_by_city(&self, state: &str, city: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["all_data_for_city_of", city, state])
    }

    /// Full record for a specific county.
    pub fn all_data_by_county(&self, state: &str, county: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["all_data_for_county_of", county, state])
    }
}
