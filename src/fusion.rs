use crate::error::ReportError;

/// Feature fusion keys and the LaTeX expression shown for each
const FUSION_EXPRESSIONS: [(&str, &str); 7] = [
    ("features_only", r"$x \oplus y$"),
    (
        "input_dis_and_square_diff_and_multiplication",
        r"$(x-y)^2 \oplus (x^2-y^2) \oplus (x \cdot y)$",
    ),
    ("multiplication_and_input_dis", r"$(x \cdot y) \oplus (x-y)^2$"),
    ("multiplication_only", r"$(x \cdot y)$"),
    ("square_diff_and_input_dis", r"$(x^2-y^2) \oplus (x-y)^2$"),
    ("square_diff_and_multiplication", r"$(x^2-y^2) \oplus (x \cdot y)$"),
    ("square_diff_only", r"$(x^2-y^2)$"),
];

/// Look up the LaTeX math expression for a fusion key
pub fn fusion_expression(key: &str) -> Result<&'static str, ReportError> {
    FUSION_EXPRESSIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, expression)| *expression)
        .ok_or_else(|| ReportError::UnknownFusionKey(key.to_string()))
}

/// All known fusion keys, in table order
pub fn known_fusion_keys() -> impl Iterator<Item = &'static str> {
    FUSION_EXPRESSIONS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        assert_eq!(fusion_expression("multiplication_only").unwrap(), r"$(x \cdot y)$");
        assert_eq!(fusion_expression("features_only").unwrap(), r"$x \oplus y$");
        assert_eq!(fusion_expression("square_diff_only").unwrap(), "$(x^2-y^2)$");

        for key in known_fusion_keys() {
            assert!(fusion_expression(key).is_ok(), "{} should resolve", key);
        }
        assert_eq!(known_fusion_keys().count(), 7);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        match fusion_expression("addition_only") {
            Err(ReportError::UnknownFusionKey(key)) => assert_eq!(key, "addition_only"),
            other => panic!("expected UnknownFusionKey, got {:?}", other),
        }
    }
}
