use crate::cli::Session;
use crate::cli::commands::{date_change, opt_date_arg, report_not_found, status_filter};
use crate::cli::parser::{Commands, SchAction, SchFields};
use crate::core::ScholarshipLogic;
use crate::core::filter::ScholarshipFilter;
use crate::core::scholarships::ScholarshipPatch;
use crate::errors::{AppError, AppResult};
use crate::models::{Scholarship, ScholarshipStatus};
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_deadline, colorize_optional, colorize_status};
use crate::utils::formatting::days_until;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let Commands::Sch { action } = cmd else {
        return Ok(());
    };

    let mut store = session.open_store()?;

    match action {
        SchAction::Add(fields) => {
            let scholarship = new_scholarship(fields)?;
            let saved = ScholarshipLogic::add(&mut store, &session.ctx, scholarship)?;
            success(format!("Scholarship '{}' added with ID {}.", saved.name, saved.id));
        }

        SchAction::List {
            country,
            status,
            due_within,
            soon,
        } => {
            let due_within = if *soon {
                Some(session.ctx.deadline_window_days())
            } else {
                *due_within
            };
            let filter = ScholarshipFilter {
                country: country.clone().unwrap_or_default(),
                status: status_filter(status, |s| {
                    ScholarshipStatus::parse(s).ok().map(|v| v.as_str())
                }),
                due_within,
            };
            let rows = ScholarshipLogic::list(&mut store, &session.ctx, &filter)?;
            print_scholarships(&rows, session);
        }

        SchAction::Edit {
            id,
            fields,
            clear_deadline,
        } => {
            let patch = ScholarshipPatch {
                name: fields.name.clone(),
                country: fields.country.clone(),
                deadline: date_change(&fields.deadline, *clear_deadline)?,
                eligibility: fields.eligibility.clone(),
                funding: fields.funding.clone(),
                link: fields.link.clone(),
                status: fields
                    .status
                    .as_deref()
                    .map(ScholarshipStatus::parse)
                    .transpose()?,
                notes: fields.notes.clone(),
            };

            match ScholarshipLogic::update(&mut store, *id, patch)? {
                Some(s) => success(format!("Scholarship {} updated ({}).", s.id, s.name)),
                None => report_not_found("scholarship", *id),
            }
        }

        SchAction::Del { id } => {
            if ScholarshipLogic::delete(&mut store, *id)? {
                success(format!("Scholarship {id} deleted."));
            } else {
                report_not_found("scholarship", *id);
            }
        }
    }

    Ok(())
}

fn new_scholarship(f: &SchFields) -> AppResult<Scholarship> {
    let name = f.name.clone().unwrap_or_default();
    if name.trim().is_empty() {
        return Err(AppError::MissingArgument("name"));
    }

    Ok(Scholarship {
        name,
        country: f.country.clone().unwrap_or_default(),
        deadline: opt_date_arg(&f.deadline)?.into(),
        eligibility: f.eligibility.clone().unwrap_or_default(),
        funding: f.funding.clone().unwrap_or_default(),
        link: f.link.clone().unwrap_or_default(),
        status: f
            .status
            .as_deref()
            .map(ScholarshipStatus::parse)
            .transpose()?
            .unwrap_or_default()
            .into(),
        notes: f.notes.clone().unwrap_or_default(),
        ..Scholarship::default()
    })
}

pub(crate) fn print_scholarships(rows: &[Scholarship], session: &Session) {
    if rows.is_empty() {
        info("No scholarships found.");
        return;
    }

    let today = session.ctx.today();
    let window = session.ctx.deadline_window_days();

    let mut table = Table::with_headers(&["ID", "Name", "Country", "Deadline", "Funding", "Status"])
        .limit("Name", 36)
        .limit("Funding", 24);

    for s in rows {
        let days_left = s.deadline.get().map(|d| days_until(d, today));
        table.add_row(vec![
            s.id.to_string(),
            s.name.clone(),
            colorize_optional(&s.country),
            colorize_deadline(s.deadline.as_str(), days_left, window),
            s.funding.clone(),
            colorize_status(s.status.as_str()),
        ]);
    }

    print!("{}", table.render(session.separator()));
    println!("{} scholarship(s)", rows.len());
}
