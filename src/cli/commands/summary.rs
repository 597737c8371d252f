use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::source::ServiceEnvelope;
use crate::source::store::read_document;
use crate::ui::render::{render_data_summary, render_validation};

/// Prints a data-summary or validation response saved from the generator.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Summary { file } = cmd {
        let envelope = ServiceEnvelope::parse(&read_document(file)?)?.into_success()?;

        if envelope.summary.is_none() && envelope.validation.is_none() {
            return Err(AppError::Upstream(
                "response carries neither a summary nor a validation report".to_string(),
            ));
        }

        if let Some(message) = &envelope.message {
            println!("{message}");
        }
        if let Some(summary) = &envelope.summary {
            print!("{}", render_data_summary(summary));
        }
        if let Some(report) = &envelope.validation {
            print!("{}", render_validation(report));
        }
    }
    Ok(())
}
