//! US state names accepted on user profiles

/// The 50 US state names in canonical (title case) spelling
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Normalize user input to a canonical state name
///
/// Matching ignores case and surrounding/repeated whitespace. Returns `None`
/// when the input isn't one of the 50 states.
pub fn normalize_state(input: &str) -> Option<&'static str> {
    let wanted = title_case(input);
    US_STATES.iter().copied().find(|s| *s == wanted)
}

fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_state() {
        assert_eq!(normalize_state("texas"), Some("Texas"));
        assert_eq!(normalize_state("  new   YORK "), Some("New York"));
        assert_eq!(normalize_state("Arkansas"), Some("Arkansas"));
        assert_eq!(normalize_state("Ontario"), None);
        assert_eq!(normalize_state(""), None);
    }

    #[test]
    fn test_state_list_is_unique() {
        let mut sorted = US_STATES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 50);
    }
}
