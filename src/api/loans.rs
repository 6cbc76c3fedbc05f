use serde_json::Value;

use super::client::SbaClient;
use super::errors::ApiClientError;
use super::types::ResourceFamily;

/// Literal segment the upstream API expects in place of an omitted
/// financing search parameter.
const NIL: &str = "nil";

/// Financing searches share the fixed path shape
/// `<state>/for_profit/<industry>/<specialty>`, with `nil` standing in
/// for any slot the caller leaves out.
fn financing_segments<'s>(
    state: Option<&'s str>,
    industry: Option<&'s str>,
    specialty: Option<&'s str>,
) -> [&'s str; 4] {
    [
        state.unwrap_or(NIL),
        "for_profit",
        industry.unwrap_or(NIL),
        specialty.unwrap_or(NIL),
    ]
}

/// Endpoints under `/loans_grants`: small business financing programs
/// sponsored by federal and state agencies.
#[derive(Clone, Copy)]
pub struct LoansAndGrants<'a> {
    client: &'a SbaClient,
}

impl<'a> LoansAndGrants<'a> {
    pub(crate) fn new(client: &'a SbaClient) -> Self {
        Self { client }
    }

    fn fetch(&self, segments: &[&str]) -> Result<Value, ApiClientError> {
        self.client.fetch(ResourceFamily::LoansAndGrants, segments)
    }

    /// Financing programs available from Federal government agencies and
    /// select non-profit organizations nationwide.
    pub fn federal(&self) -> Result<Value, ApiClientError> {
        self.fetch(&["federal"])
    }

    /// Financing programs sponsored by a state's government agencies and
    /// select non-profit and commercial organizations.
    pub fn state_financing(&self, state: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["state_financing_for", state])
    }

    /// Financing programs sponsored by both federal and state government
    /// agencies for a specific state.
    pub fn federal_and_state_financing(&self, state: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["federal_and_state_financing_for", state])
    }

    /// Financing programs for a specific industry (e.g. `manufacturing`,
    /// `agriculture`) in all states and territories.
    pub fn by_industry(&self, industry: &str) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(None, Some(industry), None))
    }

    /// Special financing programs for certain business owner groups or
    /// activities (e.g. `woman`, `veteran`, `exporting`). Multiple
    /// specialties are separated by dashes, e.g. `woman-minority`.
    pub fn by_specialty(&self, specialty: &str) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(None, None, Some(specialty)))
    }

    /// Financing programs for a specific industry and specialty.
    pub fn by_industry_specialty(
        &self,
        industry: &str,
        specialty: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(None, Some(industry), Some(specialty)))
    }

    /// Financing programs for a specific industry in a specific state.
    pub fn by_state_industry(
        &self,
        state: &str,
        industry: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(Some(state), Some(industry), None))
    }

    /// State programs for specific business groups or specialized
    /// business activities.
    pub fn by_state_specialty(
        &self,
        state: &str,
        specialty: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(Some(state), None, Some(specialty)))
    }

    /// State programs narrowed by both industry and specialty.
    pub fn by_state_industry_specialty(
        &self,
        state: &str,
        industry: &str,
        specialty: &str,
    ) -> Result<Value, ApiClientError> {
        self.fetch(&financing_segments(
            Some(state),
            Some(industry),
            Some(specialty),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots_filled() {
        assert_eq!(
            financing_segments(Some("me"), Some("manufacturing"), Some("woman")),
            ["me", "for_profit", "manufacturing", "woman"]
        );
    }

    #[test]
    fn test_omitted_state_becomes_nil() {
        assert_eq!(
            financing_segments(None, Some("manufacturing"), Some("woman")),
            ["nil", "for_profit", "manufacturing", "woman"]
        );
    }

    #[test]
    fn test_omitted_industry_and_specialty_become_nil() {
        assert_eq!(
            financing_segments(Some("ny"), None, None),
            ["ny", "for_profit", "nil", "nil"]
        );
    }

    #[test]
    fn test_all_slots_omitted() {
        assert_eq!(
            financing_segments(None, None, None),
            ["nil", "for_profit", "nil", "nil"]
        );
    }
}
