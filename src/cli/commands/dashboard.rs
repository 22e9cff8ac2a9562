use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::core::dashboard::UPCOMING_LIMIT;
use crate::core::{DashboardLogic, DashboardSummary};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_deadline, colorize_status};
use crate::utils::formatting::{bold, days_until, describe_days};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if !matches!(cmd, Commands::Dashboard) {
        return Ok(());
    }

    let mut store = session.open_store()?;
    let summary = DashboardLogic::summary(&mut store, &session.ctx)?;
    print_summary(&summary, session);
    Ok(())
}

fn print_summary(s: &DashboardSummary, session: &Session) {
    let today = session.ctx.today();
    let window = session.ctx.deadline_window_days();

    header(format!("PhD planner dashboard ({})", today.format("%Y-%m-%d")));

    println!("{:<28}{}", "Professors tracked:", bold(&s.total_professors.to_string()));
    println!("{:<28}{}", "  contacted:", s.contacted);
    println!("{:<28}{}", "  replied:", s.replied);
    println!("{:<28}{}", "Scholarships tracked:", bold(&s.total_scholarships.to_string()));
    println!(
        "{:<28}{}",
        format!("  deadline within {window}d:"),
        s.deadlines_soon
    );
    println!();

    if s.upcoming.is_empty() {
        info("No scholarship deadlines recorded.");
    } else {
        println!("{}", bold(&format!("Upcoming deadlines (max {UPCOMING_LIMIT})")));
        let mut table = Table::with_headers(&["ID", "Scholarship", "Country", "Deadline", "When", "Status"])
            .limit("Scholarship", 36);
        for sch in &s.upcoming {
            let days_left = sch.deadline.get().map(|d| days_until(d, today));
            table.add_row(vec![
                sch.id.to_string(),
                sch.name.clone(),
                sch.country.clone(),
                colorize_deadline(sch.deadline.as_str(), days_left, window),
                days_left.map(describe_days).unwrap_or_default(),
                colorize_status(sch.status.as_str()),
            ]);
        }
        print!("{}", table.render(session.separator()));
        println!();
    }

    if !s.by_country_status.is_empty() {
        println!("{}", bold("Professors by country and status"));
        let mut table = Table::with_headers(&["Country", "Status", "Count"]);
        for ((country, status), count) in &s.by_country_status {
            let country = if country.is_empty() { "(none)" } else { country.as_str() };
            table.add_row(vec![
                country.to_string(),
                colorize_status(status),
                count.to_string(),
            ]);
        }
        print!("{}", table.render(session.separator()));
    }
}
