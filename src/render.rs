use std::collections::HashSet;

use crate::error::ReportError;
use crate::fusion::fusion_expression;
use crate::table::AccuracyTable;

/// Number of table rows a backbone label spans
pub const BACKBONE_ROW_SPAN: usize = 7;

/// Renders LaTeX table rows, remembering which backbones already carry a label.
///
/// The first row of each backbone opens with a rule and a `\multirow` label;
/// later rows for the same backbone leave the first cell blank so LaTeX merges them.
/// One renderer covers exactly one document.
#[derive(Debug, Default)]
pub struct RowRenderer {
    seen_backbones: HashSet<String>,
    order: Vec<String>,
}

impl RowRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one row. An empty table renders as an empty string.
    pub fn render_row(
        &mut self,
        table: &AccuracyTable,
        backbone: &str,
        fusion_key: &str,
    ) -> Result<String, ReportError> {
        if table.is_empty() {
            return Ok(String::new());
        }

        let expression = fusion_expression(fusion_key)?;
        let comment = format!("% {}_{}", backbone, fusion_key);

        let mut row = if self.seen_backbones.contains(backbone) {
            format!("{} \n& {} ", comment, expression)
        } else {
            self.seen_backbones.insert(backbone.to_string());
            self.order.push(backbone.to_string());
            format!(
                "\\midrule \n{} \n\\multirow{{{}}}{{*}}{{{}}} & {} ",
                comment, BACKBONE_ROW_SPAN, backbone, expression
            )
        };

        for record in &table.records {
            row.push_str(" & ");
            row.push_str(&record.accuracy);
        }
        row.push_str(" \\\\\n");

        Ok(row)
    }

    /// Whether a labelled row has already been rendered for this backbone
    pub fn has_seen(&self, backbone: &str) -> bool {
        self.seen_backbones.contains(backbone)
    }

    /// Backbones in the order their labels were rendered
    pub fn backbones(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_carries_multirow_label() {
        let mut renderer = RowRenderer::new();
        let table = AccuracyTable::from_values(["0.91", "0.88"]);

        let row = renderer.render_row(&table, "Resnet", "multiplication_only").unwrap();
        assert_eq!(
            row,
            "\\midrule \n% Resnet_multiplication_only \n\\multirow{7}{*}{Resnet} & $(x \\cdot y)$  & 0.91 & 0.88 \\\\\n"
        );
        assert!(row.trim_end().ends_with(" & 0.91 & 0.88 \\\\"));
        assert!(renderer.has_seen("Resnet"));
    }

    #[test]
    fn test_second_row_is_a_continuation() {
        let mut renderer = RowRenderer::new();
        let table = AccuracyTable::from_values(["0.5"]);

        let first = renderer.render_row(&table, "Vgg", "features_only").unwrap();
        let second = renderer.render_row(&table, "Vgg", "square_diff_only").unwrap();

        assert!(first.contains("\\multirow{7}{*}{Vgg}"));
        assert!(!second.contains("\\multirow"));
        assert!(!second.contains("\\midrule"));
        assert_eq!(second, "% Vgg_square_diff_only \n& $(x^2-y^2)$  & 0.5 \\\\\n");
        assert_eq!(renderer.backbones(), ["Vgg".to_string()]);
    }

    #[test]
    fn test_backbones_are_tracked_independently() {
        let mut renderer = RowRenderer::new();
        let table = AccuracyTable::from_values(["1"]);

        renderer.render_row(&table, "Resnet", "features_only").unwrap();
        let other = renderer.render_row(&table, "Vit", "features_only").unwrap();
        assert!(other.starts_with("\\midrule \n% Vit_features_only"));
        assert_eq!(renderer.backbones(), ["Resnet".to_string(), "Vit".to_string()]);
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let mut renderer = RowRenderer::new();
        let row = renderer
            .render_row(&AccuracyTable::default(), "Resnet", "not_a_fusion")
            .unwrap();
        assert_eq!(row, "");
        assert!(!renderer.has_seen("Resnet"));
    }

    #[test]
    fn test_unknown_fusion_key_leaves_backbone_unseen() {
        let mut renderer = RowRenderer::new();
        let table = AccuracyTable::from_values(["0.7"]);

        let result = renderer.render_row(&table, "Resnet", "addition_only");
        assert!(matches!(result, Err(ReportError::UnknownFusionKey(_))));
        assert!(!renderer.has_seen("Resnet"));
    }
}
