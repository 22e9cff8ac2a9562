use crate::cli::Session;
use crate::cli::commands::{opt_date_arg, report_not_found, status_filter};
use crate::cli::parser::{Commands, TaskAction, TaskFields};
use crate::core::TimelineLogic;
use crate::core::filter::TimelineFilter;
use crate::core::timeline::TaskPatch;
use crate::errors::{AppError, AppResult};
use crate::models::{TaskStatus, TimelineTask};
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };

    let mut store = session.open_store()?;

    match action {
        TaskAction::Add(fields) => {
            let task = new_task(fields)?;
            let saved = TimelineLogic::add(&mut store, &session.ctx, task)?;
            success(format!("Task '{}' added with ID {}.", saved.task, saved.id));
        }

        TaskAction::List { status } => {
            let filter = TimelineFilter {
                status: status_filter(status, |s| TaskStatus::parse(s).ok().map(|v| v.as_str())),
            };
            let rows = TimelineLogic::list(&mut store, &filter)?;
            print_tasks(&rows, session);
        }

        TaskAction::Edit { id, fields } => {
            let patch = TaskPatch {
                date: opt_date_arg(&fields.date)?.map(Some),
                task: fields.task.clone(),
                status: fields.status.as_deref().map(TaskStatus::parse).transpose()?,
                notes: fields.notes.clone(),
            };

            match TimelineLogic::update(&mut store, *id, patch)? {
                Some(t) => success(format!("Task {} updated ({}).", t.id, t.task)),
                None => report_not_found("task", *id),
            }
        }

        TaskAction::Del { id } => {
            if TimelineLogic::delete(&mut store, *id)? {
                success(format!("Task {id} deleted."));
            } else {
                report_not_found("task", *id);
            }
        }
    }

    Ok(())
}

fn new_task(f: &TaskFields) -> AppResult<TimelineTask> {
    let task = f.task.clone().unwrap_or_default();
    if task.trim().is_empty() {
        return Err(AppError::MissingArgument("task"));
    }

    Ok(TimelineTask {
        task,
        date: opt_date_arg(&f.date)?.into(),
        status: f
            .status
            .as_deref()
            .map(TaskStatus::parse)
            .transpose()?
            .unwrap_or_default()
            .into(),
        notes: f.notes.clone().unwrap_or_default(),
        ..TimelineTask::default()
    })
}

fn print_tasks(rows: &[TimelineTask], session: &Session) {
    if rows.is_empty() {
        info("No tasks found.");
        return;
    }

    let mut table = Table::with_headers(&["ID", "Date", "Task", "Status", "Notes"])
        .limit("Task", 40)
        .limit("Notes", 30);

    for t in rows {
        table.add_row(vec![
            t.id.to_string(),
            colorize_optional(t.date.as_str()),
            t.task.clone(),
            colorize_status(t.status.as_str()),
            t.notes.clone(),
        ]);
    }

    print!("{}", table.render(session.separator()));
}
