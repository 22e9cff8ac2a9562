use crate::cli::Session;
use crate::cli::commands::{date_change, opt_date_arg, report_not_found, status_filter};
use crate::cli::parser::{Commands, ProfAction, ProfFields};
use crate::core::ProfessorLogic;
use crate::core::filter::ProfessorFilter;
use crate::core::professors::ProfessorPatch;
use crate::errors::{AppError, AppResult};
use crate::models::{ContactStatus, Professor};
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let Commands::Prof { action } = cmd else {
        return Ok(());
    };

    let mut store = session.open_store()?;

    match action {
        ProfAction::Add(fields) => {
            let professor = new_professor(fields)?;
            let saved = ProfessorLogic::add(&mut store, &session.ctx, professor)?;
            success(format!("Professor '{}' added with ID {}.", saved.name, saved.id));
        }

        ProfAction::List {
            country,
            status,
            search,
        } => {
            let filter = ProfessorFilter {
                country: country.clone().unwrap_or_default(),
                status: status_filter(status, |s| {
                    ContactStatus::parse(s).ok().map(|v| v.as_str())
                }),
                search: search.clone().unwrap_or_default(),
            };
            let rows = ProfessorLogic::list(&mut store, &filter)?;
            print_professors(&rows, session);
        }

        ProfAction::Edit {
            id,
            fields,
            clear_response_date,
        } => {
            let patch = ProfessorPatch {
                university: fields.university.clone(),
                country: fields.country.clone(),
                name: fields.name.clone(),
                department: fields.department.clone(),
                research_interests: fields.research_interests.clone(),
                email: fields.email.clone(),
                website: fields.website.clone(),
                status: fields.status.as_deref().map(ContactStatus::parse).transpose()?,
                response_date: date_change(&fields.response_date, *clear_response_date)?,
                notes: fields.notes.clone(),
            };

            match ProfessorLogic::update(&mut store, *id, patch)? {
                Some(p) => success(format!("Professor {} updated ({}).", p.id, p.name)),
                None => report_not_found("professor", *id),
            }
        }

        ProfAction::Del { id } => {
            if ProfessorLogic::delete(&mut store, *id)? {
                success(format!("Professor {id} deleted."));
            } else {
                report_not_found("professor", *id);
            }
        }
    }

    Ok(())
}

fn new_professor(f: &ProfFields) -> AppResult<Professor> {
    let name = f.name.clone().unwrap_or_default();
    if name.trim().is_empty() {
        return Err(AppError::MissingArgument("name"));
    }

    Ok(Professor {
        name,
        university: f.university.clone().unwrap_or_default(),
        country: f.country.clone().unwrap_or_default(),
        department: f.department.clone().unwrap_or_default(),
        research_interests: f.research_interests.clone().unwrap_or_default(),
        email: f.email.clone().unwrap_or_default(),
        website: f.website.clone().unwrap_or_default(),
        status: f
            .status
            .as_deref()
            .map(ContactStatus::parse)
            .transpose()?
            .unwrap_or_default()
            .into(),
        response_date: opt_date_arg(&f.response_date)?.into(),
        notes: f.notes.clone().unwrap_or_default(),
        ..Professor::default()
    })
}

fn print_professors(rows: &[Professor], session: &Session) {
    if rows.is_empty() {
        info("No professors found.");
        return;
    }

    let mut table = Table::with_headers(&[
        "ID",
        "Name",
        "University",
        "Country",
        "Interests",
        "Status",
        "Response",
    ])
    .limit("Interests", 30)
    .limit("University", 28);

    for p in rows {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.university.clone(),
            colorize_optional(&p.country),
            p.research_interests.clone(),
            colorize_status(p.status.as_str()),
            colorize_optional(p.response_date.as_str()),
        ]);
    }

    print!("{}", table.render(session.separator()));
    println!("{} professor(s)", rows.len());
}
