//! Issue export input
//!
//! Parses a Jira-style issue export (see [`crate::source`]) and assembles the
//! ticket report document (see [`crate::report`]).

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::report::{build_report, ReportOptions};
use crate::source::IssueExport;
use crate::transduce::TransduceOptions;

/// Format implementation for issue exports
#[derive(Debug, Clone, Default)]
pub struct IssueFormat {
    report: ReportOptions,
    transduce: TransduceOptions,
}

impl IssueFormat {
    pub fn new(report: ReportOptions, transduce: TransduceOptions) -> Self {
        Self { report, transduce }
    }
}

impl Format for IssueFormat {
    fn name(&self) -> &str {
        "issue"
    }

    fn description(&self) -> &str {
        "Issue export (JSON) rendered as a ticket report"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let export = IssueExport::from_json_str(source)?;
        let report = export.to_report(&self.report);
        Ok(build_report(&report, &self.report, &self.transduce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::OutputBlock;

    #[test]
    fn builds_a_report() {
        let source = r#"{"key":"OPS-3","fields":{"summary":"Slow login","project":{"name":"Acme"}}}"#;
        let doc = IssueFormat::default().parse(source).unwrap();
        assert_eq!(doc.blocks[0].plain_text(), "Acme - OPS-3");
        assert_eq!(doc.blocks[2].plain_text(), "Slow login");
        assert!(matches!(doc.blocks[0], OutputBlock::Heading(_)));
    }

    #[test]
    fn uses_configured_labels() {
        let report = ReportOptions {
            summary_label: "Descrizione".into(),
            ..ReportOptions::default()
        };
        let format = IssueFormat::new(report, TransduceOptions::default());
        let doc = format.parse(r#"{"key":"OPS-4"}"#).unwrap();
        assert_eq!(doc.blocks[1].plain_text(), "Descrizione");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(IssueFormat::default().parse("not json").is_err());
    }
}
