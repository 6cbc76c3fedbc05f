/// Resource families exposed by the SBA API, each rooted at a fixed
/// leading path segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceFamily {
    LicensesAndPermits,
    LoansAndGrants,
    RecommendedSites,
    CityCountyWebData,
}

impl ResourceFamily {
    pub const fn base_segment(self) -> &'static str {
        match self {
            Self::LicensesAndPermits => "license_permit",
            Self::LoansAndGrants => "loans_grants",
            Self::RecommendedSites => "rec_sites",
            Self::CityCountyWebData => "geodata",
        }
    }
}

/// Which geographic scope a state-wide geodata query covers.
///
/// The upstream API routes the combined scope when both or neither flag
/// is set, so the flag pairs collapse to three URL variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkScope {
    CityCounty,
    County,
    City,
}

impl LinkScope {
    pub const fn from_flags(show_county: bool, show_city: bool) -> Self {
        match (show_county, show_city) {
            (true, false) => Self::County,
            (false, true) => Self::City,
            (true, true) | (false, false) => Self::CityCounty,
        }
    }

    pub const fn infix(self) -> &'static str {
        match self {
            Self::CityCounty => "city_county",
            Self::County => "county",
            Self::City => "city",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_flags_select_combined_scope() {
        assert_eq!(LinkScope::from_flags(true, true), LinkScope::CityCounty);
    }

    #[test]
    fn test_county_only_selects_county_scope() {
        assert_eq!(LinkScope::from_flags(true, false), LinkScope::County);
    }

    #[test]
    fn test_city_only_selects_city_scope() {
        assert_eq!(LinkScope::from_flags(false, true), LinkScope::City);
    }

    #[test]
    fn test_neither_flag_defaults_to_combined_scope() {
        assert_eq!(LinkScope::from_flags(false, false), LinkScope::CityCounty);
    }

    #[test]
    fn test_family_base_segments() {
        assert_eq!(
            ResourceFamily::LicensesAndPermits.base_segment(),
            "license_permit"
        );
        assert_eq!(ResourceFamily::LoansAndGrants.base_segment(), "loans_grants");
        assert_eq!(ResourceFamily::RecommendedSites.base_segment(), "rec_sites");
        assert_eq!(ResourceFamily::CityCountyWebData.base_segment(), "geodata");
    }
}
