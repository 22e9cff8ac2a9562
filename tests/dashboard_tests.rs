use phdplanner::core::dashboard::UPCOMING_LIMIT;
use phdplanner::core::{DashboardLogic, DashboardSummary, ProfessorLogic, ScholarshipLogic};
use phdplanner::models::{ContactStatus, Professor, Scholarship, ScholarshipStatus};

mod common;
use common::{ctx_on, d, memory_store};

fn sch(name: &str, deadline: Option<&str>) -> Scholarship {
    Scholarship {
        name: name.into(),
        deadline: deadline.map(d).into(),
        status: ScholarshipStatus::Applied.into(),
        ..Scholarship::default()
    }
}

fn prof(name: &str, country: &str, status: ContactStatus) -> Professor {
    Professor {
        name: name.into(),
        country: country.into(),
        status: status.into(),
        ..Professor::default()
    }
}

#[test]
fn summary_counts_and_deadlines() {
    let mut store = memory_store();
    let ctx = ctx_on("2025-01-01");

    for p in [
        prof("A", "Japan", ContactStatus::Contacted),
        prof("B", "Japan", ContactStatus::Contacted),
        prof("C", "Japan", ContactStatus::Replied),
        prof("D", "Germany", ContactStatus::NotContacted),
    ] {
        ProfessorLogic::add(&mut store, &ctx, p).unwrap();
    }
    for s in [
        sch("MEXT", Some("2025-01-15")),
        sch("DAAD", Some("2025-03-01")),
        sch("Old", Some("2024-12-01")),
        sch("Rolling", None),
    ] {
        ScholarshipLogic::add(&mut store, &ctx, s).unwrap();
    }

    let s = DashboardLogic::summary(&mut store, &ctx).unwrap();

    assert_eq!(s.total_professors, 4);
    assert_eq!(s.contacted, 2);
    assert_eq!(s.replied, 1);
    assert_eq!(s.total_scholarships, 4);
    assert_eq!(s.deadlines_soon, 2);

    let upcoming: Vec<&str> = s.upcoming.iter().map(|x| x.name.as_str()).collect();
    assert_eq!(upcoming, vec!["Old", "MEXT", "DAAD"]);

    assert_eq!(
        s.by_country_status
            .get(&("Japan".to_string(), "Contacted".to_string())),
        Some(&2)
    );
    assert_eq!(
        s.by_country_status
            .get(&("Germany".to_string(), "Not Contacted".to_string())),
        Some(&1)
    );
}

#[test]
fn upcoming_list_is_capped() {
    let many: Vec<Scholarship> = (1..=25)
        .map(|i| sch(&format!("S{i}"), Some(format!("2025-02-{i:02}").as_str())))
        .collect();

    let s = DashboardSummary::build(&[], &many, d("2025-01-01"), 30);
    assert_eq!(s.upcoming.len(), UPCOMING_LIMIT);
    assert_eq!(s.upcoming[0].name, "S1");
}

#[test]
fn empty_workbook_gives_zeroes() {
    let mut store = memory_store();
    let s = DashboardLogic::summary(&mut store, &ctx_on("2025-01-01")).unwrap();
    assert_eq!(s, DashboardSummary::default());
}
