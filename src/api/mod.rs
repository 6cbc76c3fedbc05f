// Re-export the API module components
pub use self::{
    client::{SbaClient, API_HOST},
    errors::ApiClientError,
    geodata::CityCountyWebData,
    licenses::LicensesAndPermits,
    loans::LoansAndGrants,
    sites::RecommendedSites,
    types::{LinkScope, ResourceFamily},
};

// Module declarations
mod client;
mod errors;
mod geodata;
mod licenses;
mod loans;
mod sites;
mod types;
