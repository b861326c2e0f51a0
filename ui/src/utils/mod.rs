/// Shorten `text` to `max_chars`, marking the cut with `...`. Missing or
/// empty values display as `-`.
pub fn truncate_text(text: Option<&str>, max_chars: usize) -> String {
    match text {
        None | Some("") => "-".to_string(),
        Some(text) if text.chars().count() > max_chars => {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{cut}...")
        }
        Some(text) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_are_a_dash() {
        assert_eq!(truncate_text(None, 10), "-");
        assert_eq!(truncate_text(Some(""), 10), "-");
    }

    #[test]
    fn long_values_are_cut() {
        assert_eq!(truncate_text(Some("North Zone"), 20), "North Zone");
        assert_eq!(
            truncate_text(Some("asha.rao@example.com"), 8),
            "asha.rao..."
        );
    }
}
