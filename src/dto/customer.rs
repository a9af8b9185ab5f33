//! Query-string shape of the customer listing endpoint.

use crate::domain::criteria::CustomerCriteria;

/// Raw `GET /customers` parameters.
///
/// Built from the decoded key/value pairs of the query string. A repeated
/// key keeps its first value and unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub suspended: Option<String>,
}

impl FromIterator<(String, String)> for CustomerQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = CustomerQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "first_name" => &mut query.first_name,
                "last_name" => &mut query.last_name,
                "email" => &mut query.email,
                "phone_number" => &mut query.phone_number,
                "suspended" => &mut query.suspended,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// `true`, `1` and `yes` in any case; every other value reads as false.
fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Empty text parameters (`?email=`) impose no constraint.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<CustomerQuery> for CustomerCriteria {
    fn from(query: CustomerQuery) -> Self {
        CustomerCriteria {
            first_name: present(query.first_name),
            last_name: present(query.last_name),
            email: present(query.email),
            phone_number: present(query.phone_number),
            suspended: query.suspended.as_deref().map(parse_flag),
        }
    }
}
