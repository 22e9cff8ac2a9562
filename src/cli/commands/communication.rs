use crate::cli::Session;
use crate::cli::commands::{date_change, opt_date_arg, report_not_found, status_filter};
use crate::cli::parser::{CommAction, CommFields, Commands};
use crate::core::communication::CommunicationPatch;
use crate::core::filter::CommunicationFilter;
use crate::core::{AutoReply, CommunicationLogic};
use crate::errors::AppResult;
use crate::models::{CommunicationEntry, MessageType};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let Commands::Comm { action } = cmd else {
        return Ok(());
    };

    let mut store = session.open_store()?;

    match action {
        CommAction::Add(fields) => {
            let entry = new_entry(fields, session)?;
            let (saved, outcome) = CommunicationLogic::log(&mut store, &session.ctx, entry)?;
            if saved.professor.is_empty() {
                success(format!("{} logged with ID {}.", saved.message_type, saved.id));
            } else {
                success(format!(
                    "{} with '{}' logged with ID {}.",
                    saved.message_type, saved.professor, saved.id
                ));
            }
            report_auto_reply(&saved, outcome);
        }

        CommAction::List {
            professor,
            message_type,
        } => {
            let filter = CommunicationFilter {
                professor: professor.clone().unwrap_or_default(),
                message_type: status_filter(message_type, |s| {
                    MessageType::parse(s).ok().map(|v| v.as_str())
                }),
            };
            let rows = CommunicationLogic::list(&mut store, &filter)?;
            print_entries(&rows, session);
        }

        CommAction::Edit {
            id,
            fields,
            clear_follow_up,
        } => {
            let patch = CommunicationPatch {
                date: opt_date_arg(&fields.date)?.map(Some),
                professor: fields.professor.clone(),
                message_type: fields
                    .message_type
                    .as_deref()
                    .map(MessageType::parse)
                    .transpose()?,
                summary: fields.summary.clone(),
                next_action: fields.next_action.clone(),
                follow_up: date_change(&fields.follow_up, *clear_follow_up)?,
            };

            match CommunicationLogic::update(&mut store, *id, patch)? {
                Some(c) => success(format!("Entry {} updated.", c.id)),
                None => report_not_found("communication entry", *id),
            }
        }

        CommAction::Del { id } => {
            if CommunicationLogic::delete(&mut store, *id)? {
                success(format!("Entry {id} deleted."));
            } else {
                report_not_found("communication entry", *id);
            }
        }
    }

    Ok(())
}

fn new_entry(f: &CommFields, session: &Session) -> AppResult<CommunicationEntry> {
    let date = opt_date_arg(&f.date)?.unwrap_or_else(|| session.ctx.today());

    Ok(CommunicationEntry {
        date: date.into(),
        professor: f.professor.clone().unwrap_or_default(),
        message_type: f
            .message_type
            .as_deref()
            .map(MessageType::parse)
            .transpose()?
            .unwrap_or_default()
            .into(),
        summary: f.summary.clone().unwrap_or_default(),
        next_action: f.next_action.clone().unwrap_or_default(),
        follow_up: opt_date_arg(&f.follow_up)?.into(),
        ..CommunicationEntry::default()
    })
}

fn report_auto_reply(entry: &CommunicationEntry, outcome: AutoReply) {
    match outcome {
        AutoReply::NotApplicable => {}
        AutoReply::Updated { id } => {
            success(format!("Professor {id} ({}) marked as Replied.", entry.professor));
        }
        AutoReply::NotFound => {
            info(format!(
                "No professor named '{}'; contact status left unchanged.",
                entry.professor
            ));
        }
        AutoReply::Ambiguous { count } => {
            warning(format!(
                "{count} professors are named '{}'; contact status left unchanged.",
                entry.professor
            ));
        }
    }
}

fn print_entries(rows: &[CommunicationEntry], session: &Session) {
    if rows.is_empty() {
        info("No communication entries found.");
        return;
    }

    let mut table = Table::with_headers(&[
        "ID",
        "Date",
        "Professor",
        "Type",
        "Summary",
        "Next Action",
        "Follow-up",
    ])
    .limit("Summary", 36)
    .limit("Next Action", 24);

    for c in rows {
        table.add_row(vec![
            c.id.to_string(),
            colorize_optional(c.date.as_str()),
            c.professor.clone(),
            c.message_type.as_str().to_string(),
            c.summary.clone(),
            c.next_action.clone(),
            colorize_optional(c.follow_up.as_str()),
        ]);
    }

    print!("{}", table.render(session.separator()));
    println!("{} entr{}", rows.len(), if rows.len() == 1 { "y" } else { "ies" });
}
