use reqwest::blocking::{self, Client};
use serde_json::Value;
use url::Url;

use crate::errors::RequestFailure;

use super::errors::ApiClientError;
use super::geodata::CityCountyWebData;
use super::licenses::LicensesAndPermits;
use super::loans::LoansAndGrants;
use super::sites::RecommendedSites;
use super::types::ResourceFamily;

/// Well-known production host serving the SBA API.
pub const API_HOST: &str = "http://api.sba.gov";

/// Blocking client for the SBA API.
///
/// Holds only the base URL and a reusable HTTP client; every endpoint
/// method is an independent request/response round trip and the client
/// carries no session state between calls.
#[derive(Clone)]
pub struct SbaClient {
    base: Url,
    client: Client,
}

impl SbaClient {
    /// # Errors
    ///
    /// Fails if the provided `Url` cannot be a base. We rely on that
    /// invariant in other methods.
    pub fn new(base: Url) -> Result<Self, ApiClientError> {
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            Err(ApiClientError::CannotBeBase(base))
        } else {
            Ok(Self {
                base,
                client: blocking::Client::new(),
            })
        }
    }

    /// Client bound to the production host, `http://api.sba.gov`.
    ///
    /// # Errors
    ///
    /// Fails only if the well-known host constant fails to parse.
    pub fn sba_gov() -> Result<Self, ApiClientError> {
        Self::new(Url::parse(API_HOST)?)
    }

    pub fn licenses_and_permits(&self) -> LicensesAndPermits<'_> {
        LicensesAndPermits::new(self)
    }

    pub fn loans_and_grants(&self) -> LoansAndGrants<'_> {
        LoansAndGrants::new(self)
    }

    pub fn recommended_sites(&self) -> RecommendedSites<'_> {
        RecommendedSites::new(self)
    }

    pub fn city_county_web_data(&self) -> CityCountyWebData<'_> {
        CityCountyWebData::new(self)
    }

    /// Build the full request URL for an endpoint: base, family segment,
    /// caller segments, with the `.json` suffix on the final segment.
    ///
    /// Segments are appended through `Url::path_segments_mut`, which
    /// percent-encodes spaces and reserved characters (`doing business as`
    /// becomes `doing%20business%20as`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn endpoint_url(
        &self,
        family: ResourceFamily,
        segments: &[&str],
    ) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        let url_clone = url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiClientError::CannotBeBase(url_clone))?;
            path.pop_if_empty();
            match segments.split_last() {
                Some((last, init)) => {
                    path.push(family.base_segment());
                    path.extend(init);
                    path.push(&format!("{last}.json"));
                }
                None => {
                    path.push(&format!("{}.json", family.base_segment()));
                }
            }
        }
        Ok(url)
    }

    /// Perform one GET round trip and decode the JSON body.
    ///
    /// The payload is returned verbatim as a `serde_json::Value`; no
    /// response schema is imposed.
    ///
    /// # Errors
    ///
    /// Will return `Err` on connection failure, a non-success status
    /// code, or a body that is not valid JSON.
    pub fn fetch(
        &self,
        family: ResourceFamily,
        segments: &[&str],
    ) -> Result<Value, ApiClientError> {
        let url = self.endpoint_url(family, segments)?;
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::from(RequestFailure::new(
                url,
                status,
                response.text()?,
            )));
        }

        let response_text = response.text()?;
        log::debug!("Raw API Response: {response_text}");

        serde_json::from_str(&response_text).map_err(|source| {
            log::error!("Failed to parse JSON response: {source}");
            ApiClientError::Decode { url, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> SbaClient {
        SbaClient::sba_gov().unwrap()
    }

    #[test]
    fn test_single_segment_url() {
        let url = client()
            .endpoint_url(ResourceFamily::LoansAndGrants, &["federal"])
            .unwrap();
        assert_eq!(url.as_str(), "http://api.sba.gov/loans_grants/federal.json");
    }

    #[test]
    fn test_spaces_are_percent_encoded() {
        let url = client()
            .endpoint_url(
                ResourceFamily::LicensesAndPermits,
                &["by_category", "doing business as"],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.sba.gov/license_permit/by_category/doing%20business%20as.json"
        );
    }

    #[test]
    fn test_plain_segments_pass_through_unchanged() {
        let url = client()
            .endpoint_url(ResourceFamily::RecommendedSites, &["keywords", "contracting"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.sba.gov/rec_sites/keywords/contracting.json"
        );
    }

    #[test]
    fn test_json_suffix_lands_on_final_segment() {
        let url = client()
            .endpoint_url(
                ResourceFamily::CityCountyWebData,
                &["all_links_for_county_of", "orange county", "ca"],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.sba.gov/geodata/all_links_for_county_of/orange%20county/ca.json"
        );
    }

    #[test]
    fn test_base_with_trailing_slash_is_extended() {
        let base = Url::parse("http://localhost:4010/").unwrap();
        let url = SbaClient::new(base)
            .unwrap()
            .endpoint_url(ResourceFamily::LoansAndGrants, &["federal"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:4010/loans_grants/federal.json");
    }

    #[test]
    fn test_base_with_path_is_extended_not_replaced() {
        let base = Url::parse("http://localhost:4010/mirror").unwrap();
        let url = SbaClient::new(base)
            .unwrap()
            .endpoint_url(ResourceFamily::RecommendedSites, &["all_sites", "keywords"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4010/mirror/rec_sites/all_sites/keywords.json"
        );
    }

    #[test]
    fn test_empty_segments_fall_back_to_family_root() {
        let url = client()
            .endpoint_url(ResourceFamily::RecommendedSites, &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://api.sba.gov/rec_sites.json");
    }

    #[test]
    fn test_cannot_be_base_is_rejected() {
        let base = Url::parse("mailto:info@sba.gov").unwrap();
        assert!(matches!(
            SbaClient::new(base),
            Err(ApiClientError::CannotBeBase(_))
        ));
    }
}
