/// Joins CSS class fragments, skipping empty ones and collapsing whitespace.
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `class` when `on`, otherwise nothing. Pairs with [`class_names`].
pub fn class_if(on: bool, class: &str) -> &str {
    if on { class } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_skips_empty() {
        assert_eq!(class_names(&["btn", "", "  btn-lg  "]), "btn btn-lg");
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn conditional_fragments() {
        assert_eq!(class_names(&["card", class_if(true, "is-visible"), class_if(false, "x")]), "card is-visible");
    }
}
