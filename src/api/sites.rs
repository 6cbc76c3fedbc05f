use serde_json::Value;

use super::client::SbaClient;
use super::errors::ApiClientError;
use super::types::ResourceFamily;

/// Endpoints under `/rec_sites`: sites recommended by the SBA, indexed
/// by keyword, category, master term, and domain.
#[derive(Clone, Copy)]
pub struct RecommendedSites<'a> {
    client: &'a SbaClient,
}

impl<'a> RecommendedSites<'a> {
    pub(crate) fn new(client: &'a SbaClient) -> Self {
        Self { client }
    }

    fn fetch(&self, segments: &[&str]) -> Result<Value, ApiClientError> {
        self.client
            .fetch(ResourceFamily::RecommendedSites, segments)
    }

    /// All recommended sites for all keywords and phrases.
    pub fn all_sites(&self) -> Result<Value, ApiClientError> {
        self.fetch(&["all_sites", "keywords"])
    }

    /// All recommended sites for a specific search word or phrase.
    pub fn by_keyword(&self, keyword: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["keywords", keyword])
    }

    /// All recommended sites for a standard category name.
    pub fn by_category(&self, category: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["category", category])
    }

    /// All recommended sites assigned a specific master term, a standard
    /// search word or phrase assigned to a group of synonyms.
    pub fn by_master_term(&self, term: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["keywords", "master_term", term])
    }

    /// All recommended sites belonging to a specific domain, given
    /// without the `www` prefix or `.com`/`.gov`/`.net` suffix.
    pub fn by_domain(&self, domain: &str) -> Result<Value, ApiClientError> {
        self.fetch(&["keywords", "domain", domain])
    }
}
