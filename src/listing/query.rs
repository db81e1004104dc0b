// file: src/listing/query.rs
// description: url query string sync for listing filters
// reference: https://docs.rs/url/latest/url/form_urlencoded/index.html

use crate::models::DoctorFilters;
use url::form_urlencoded;

const PARAM_SPECIALTY: &str = "specialty";
const PARAM_LOCATION: &str = "location";
const PARAM_EXPERIENCE: &str = "experience";
const PARAM_AVAILABLE_TODAY: &str = "availableToday";
const PARAM_MAX_FEE: &str = "maxFee";
const PARAM_SEARCH: &str = "search";

impl DoctorFilters {
    /// Reads filters from a query string such as
    /// `?location=Delhi&experience=10&availableToday=true`.
    ///
    /// The specialty always comes from `default_specialty`; a `specialty`
    /// parameter in the query is ignored. Numbers are read from their
    /// leading integer (`10abc` is 10, `12.5` is 12). Empty values and
    /// numbers without leading digits leave their field unset.
    pub fn from_query(query: &str, default_specialty: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let first = |key: &str| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(k, v)| k == key && !v.is_empty())
                .map(|(_, v)| v.into_owned())
        };

        let mut filters = DoctorFilters::new().with_specialty(default_specialty);
        filters.location = first(PARAM_LOCATION);
        filters.experience_min = first(PARAM_EXPERIENCE).and_then(|v| parse_leading_int(&v));
        filters.available_today = first(PARAM_AVAILABLE_TODAY).map(|v| v == "true");
        filters.max_fee = first(PARAM_MAX_FEE).and_then(|v| parse_leading_int(&v));
        filters.search_query = first(PARAM_SEARCH);
        filters
    }

    /// Query string for the current filters, without a leading `?`.
    /// Unset and falsy values (zero, `false`, empty text) are left out.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(specialty) = self.specialty.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair(PARAM_SPECIALTY, specialty);
        }
        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair(PARAM_LOCATION, location);
        }
        if let Some(years) = self.experience_min.filter(|y| *y != 0) {
            serializer.append_pair(PARAM_EXPERIENCE, &years.to_string());
        }
        if self.available_today == Some(true) {
            serializer.append_pair(PARAM_AVAILABLE_TODAY, "true");
        }
        if let Some(fee) = self.max_fee.filter(|f| *f != 0) {
            serializer.append_pair(PARAM_MAX_FEE, &fee.to_string());
        }
        if let Some(search) = self.search_query.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair(PARAM_SEARCH, search);
        }

        serializer.finish()
    }
}

// Optional whitespace and sign, then the longest run of digits. Values past
// the i64 range saturate.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}
