use regex::Regex;

use crate::error::ReportError;

/// Backbone and fusion key extracted from an accuracy CSV filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Backbone name with its first letter capitalized
    pub backbone: String,
    pub fusion_key: String,
}

/// Parser for `<backbone>_<fusion_key>_accuracy.csv` filenames
pub struct FilenameParser {
    pattern: Regex,
}

impl FilenameParser {
    pub fn new() -> Result<Self, ReportError> {
        // Format: resnet_multiplication_only_accuracy.csv
        let pattern = Regex::new(r"^([a-zA-Z0-9]+)_([a-zA-Z_]+)_accuracy\.csv$")?;
        Ok(FilenameParser { pattern })
    }

    /// Extract the backbone and fusion key, or `None` if the name does not follow the pattern
    pub fn parse(&self, filename: &str) -> Option<ParsedFilename> {
        let captures = self.pattern.captures(filename)?;
        let backbone = captures.get(1)?.as_str();
        let fusion_key = captures.get(2)?.as_str();

        Some(ParsedFilename {
            backbone: capitalize(backbone),
            fusion_key: fusion_key.to_string(),
        })
    }
}

// Uppercase the first character, leave the rest as written
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matching_names() {
        let parser = FilenameParser::new().unwrap();

        let parsed = parser.parse("Resnet_multiplication_only_accuracy.csv").unwrap();
        assert_eq!(parsed.backbone, "Resnet");
        assert_eq!(parsed.fusion_key, "multiplication_only");

        let parsed = parser.parse("vgg16_square_diff_and_input_dis_accuracy.csv").unwrap();
        assert_eq!(parsed.backbone, "Vgg16");
        assert_eq!(parsed.fusion_key, "square_diff_and_input_dis");
    }

    #[test]
    fn test_capitalize_keeps_remaining_case() {
        let parser = FilenameParser::new().unwrap();
        let parsed = parser.parse("efficientNet_features_only_accuracy.csv").unwrap();
        assert_eq!(parsed.backbone, "EfficientNet");
    }

    #[test]
    fn test_rebuilding_the_name_round_trips() {
        let parser = FilenameParser::new().unwrap();
        for name in [
            "resnet_multiplication_only_accuracy.csv",
            "densenet121_input_dis_and_square_diff_and_multiplication_accuracy.csv",
            "vit_features_only_accuracy.csv",
        ] {
            let parsed = parser.parse(name).unwrap();
            let rebuilt = format!(
                "{}_{}_accuracy.csv",
                parsed.backbone.to_lowercase(),
                parsed.fusion_key
            );
            assert_eq!(rebuilt, name);
        }
    }

    #[test]
    fn test_non_matching_names() {
        let parser = FilenameParser::new().unwrap();
        for name in [
            "readme.txt",
            "model-accuracy.csv",
            "resnet_accuracy.csv",
            "resnet_multiplication_only_accuracy.csv.bak",
            "resnet_multiplication_only_accuracy.csv.csv",
            "res-net_features_only_accuracy.csv",
            "resnet_features2_accuracy.csv",
            "",
        ] {
            assert_eq!(parser.parse(name), None, "{} should not match", name);
        }
    }
}
