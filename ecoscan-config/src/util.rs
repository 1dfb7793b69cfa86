/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Trimmed value of `name`, treating blank values as unset.
pub fn non_empty_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<String> {
    lookup(name)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_env_forms() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let lookup = |name: &str| match name {
            "BLANK" => Some("   ".to_string()),
            "SET" => Some(" value ".to_string()),
            _ => None,
        };
        assert_eq!(non_empty_var(&lookup, "BLANK"), None);
        assert_eq!(non_empty_var(&lookup, "MISSING"), None);
        assert_eq!(non_empty_var(&lookup, "SET").as_deref(), Some("value"));
    }
}
