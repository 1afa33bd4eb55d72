//! Validate command handler.

use color_eyre::Result;

use crate::error::AppError;
use crate::model::Model;
use crate::validation::{Severity, Validator};

use super::App;

impl App {
    /// Report integrity issues; fails if any is an error.
    pub(super) fn run_validate(&self, model: &Model) -> Result<()> {
        let issues = Validator::new(model).run_all();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&issues)?);
        } else if issues.is_empty() {
            println!("No issues found");
        } else {
            for issue in &issues {
                println!(
                    "[{:?}] {}: {}",
                    issue.severity, issue.identifier, issue.issue
                );
            }
        }

        let errors = issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count();
        if errors > 0 {
            tracing::error!(errors, "Validation failed");
            let message = format!("{} issue(s) with error severity", errors);
            return Err(AppError::Validation(message).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::models::Kind;

    const SCHEME: &str = "http://example.com/occi#";

    #[test]
    fn test_validate_fails_with_validation_error_on_cycle() {
        let mut model = Model::new();
        model.add_kind(Kind::new(SCHEME, "x").with_parent("http://example.com/occi#y"));
        model.add_kind(Kind::new(SCHEME, "y").with_parent("http://example.com/occi#x"));

        let app = App::try_parse_from(["occi-model", "--json", "validate"]).unwrap();
        let report = app.run_validate(&model).unwrap_err();
        match report.downcast_ref::<AppError>() {
            Some(AppError::Validation(message)) => assert!(message.starts_with("2 ")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_passes_with_warnings_only() {
        let mut model = Model::new();
        model.add_kind(Kind::new(SCHEME, "vm").with_parent("http://example.com/occi#ghost"));

        let app = App::try_parse_from(["occi-model", "--json", "validate"]).unwrap();
        assert!(app.run_validate(&model).is_ok());
    }
}
