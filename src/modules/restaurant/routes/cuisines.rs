/// The `cuisines` form field arrives as a JSON-encoded string array.
/// A parse failure propagates as an unexpected error, it is not reported as
/// bad input.
pub fn parse(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::de::from_str::<Vec<String>>(raw)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parses_a_json_string_array() {
        assert_eq!(
            parse(r#"["Italian","Thai"]"#).unwrap(),
            vec![String::from("Italian"), String::from("Thai")]
        );
    }

    #[test]
    fn parses_an_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse("Italian,Thai").is_err());
        assert!(parse(r#"{"cuisine":"Italian"}"#).is_err());
    }
}
