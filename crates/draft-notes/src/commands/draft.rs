use crate::cli::{Commands, OutputFormat};
use crate::output::{output_list, output_result, output_success};
use anyhow::{anyhow, Context, Result};
use gitlab_client::{
    CreateDraftNoteOptions, DraftNotes, ListDraftNotesOptions, ProjectId, UpdateDraftNoteOptions,
};

/// Parse a project argument: all digits is a numeric ID, anything else a path
pub fn parse_project(project: &str) -> ProjectId {
    match project.parse::<u64>() {
        Ok(id) => ProjectId::Id(id),
        Err(_) => ProjectId::Path(project.to_string()),
    }
}

pub fn handle_draft(
    drafts: DraftNotes<'_>,
    project: &ProjectId,
    command: &Commands,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::List {
            mr,
            page,
            per_page,
            order_by,
            sort,
        } => {
            let options = ListDraftNotesOptions {
                page: *page,
                per_page: *per_page,
                order_by: order_by.clone(),
                sort: sort.map(|s| s.as_str().to_string()),
            };
            let (notes, _) = drafts
                .list_draft_notes(project.clone(), *mr, Some(&options))
                .with_context(|| format!("Failed to list draft notes on !{}", mr))?;
            output_list(&notes, format);
        }
        Commands::Get { mr, id } => {
            let (note, _) = drafts
                .get_draft_note(project.clone(), *mr, *id)
                .with_context(|| format!("Failed to get draft note {} on !{}", id, mr))?;
            output_result(&note, format);
        }
        Commands::Create {
            mr,
            note,
            commit,
            reply_to,
            resolve,
        } => {
            let options = CreateDraftNoteOptions {
                commit_id: commit.clone(),
                in_reply_to_discussion_id: reply_to.clone(),
                resolve_discussion: resolve.then_some(true),
                ..CreateDraftNoteOptions::new(note.as_str())
            };
            let (created, _) = drafts
                .create_draft_note(project.clone(), *mr, &options)
                .with_context(|| format!("Failed to create draft note on !{}", mr))?;
            output_result(&created, format);
        }
        Commands::Update { mr, id, note } => {
            let options = UpdateDraftNoteOptions {
                note: note.clone(),
                ..Default::default()
            };
            let (updated, _) = drafts
                .update_draft_note(project.clone(), *mr, *id, &options)
                .with_context(|| format!("Failed to update draft note {} on !{}", id, mr))?;
            output_result(&updated, format);
        }
        Commands::Delete { mr, id } => {
            drafts
                .delete_draft_note(project.clone(), *mr, *id)
                .with_context(|| format!("Failed to delete draft note {} on !{}", id, mr))?;
            output_success(&format!("Deleted draft note {}", id), format);
        }
        Commands::Publish { mr, id } => {
            drafts
                .publish_draft_note(project.clone(), *mr, *id)
                .with_context(|| format!("Failed to publish draft note {} on !{}", id, mr))?;
            output_success(&format!("Published draft note {}", id), format);
        }
        Commands::PublishAll { mr } => {
            drafts
                .publish_all_draft_notes(project.clone(), *mr)
                .with_context(|| format!("Failed to publish draft notes on !{}", mr))?;
            output_success(&format!("Published all draft notes on !{}", mr), format);
        }
        Commands::Config { .. } | Commands::Completions { .. } => {
            return Err(anyhow!("not a draft note command"));
        }
    }
    Ok(())
}
