use crate::cli::OutputFormat;
use colored::Colorize;
use gitlab_client::{DraftNote, NotePosition};
use serde::Serialize;

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", "No draft notes.".dimmed());
            }
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

/// Confirmation for operations that return no body
pub fn output_success(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "success": true, "message": message });
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", message.green()),
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<gitlab_client::GitLabError>() {
        Some(e) if e.is_unauthorized() => "unauthorized",
        Some(e) if e.is_not_found() => "not_found",
        Some(gitlab_client::GitLabError::Api { .. }) => "api",
        Some(gitlab_client::GitLabError::Decode { .. }) => "decode",
        Some(_) => "http",
        None => "error",
    }
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for DraftNote {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {}\n  {}: {}\n  {}: {}",
            "Draft".dimmed(),
            format!("#{}", self.id).cyan().bold(),
            "Author".dimmed(),
            self.author_id,
            "Merge request".dimmed(),
            self.merge_request_id,
        );

        if let Some(discussion) = &self.discussion_id {
            output.push_str(&format!("\n  {}: {}", "Reply to".dimmed(), discussion));
        }
        if self.resolve_discussion {
            output.push_str(&format!("\n  {}", "Resolves discussion".yellow()));
        }
        if let Some(commit) = &self.commit_id {
            output.push_str(&format!("\n  {}: {}", "Commit".dimmed(), commit));
        }
        if let Some(position) = &self.position {
            output.push_str(&format!("\n  {}: {}", "Position".dimmed(), position.display()));
        }

        output.push_str(&format!("\n  {}", self.note.white()));
        output
    }
}

impl Displayable for NotePosition {
    fn display(&self) -> String {
        let path = if self.new_path.is_empty() {
            &self.old_path
        } else {
            &self.new_path
        };

        match (self.new_line, self.old_line) {
            (Some(line), _) => format!("{}:{}", path.magenta(), line),
            (None, Some(line)) => format!("{}:{} (old)", path.magenta(), line),
            (None, None) => path.magenta().to_string(),
        }
    }
}
