use crate::infra::DirectoryRecordSource;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use talent_ops::config::AppConfig;
use talent_ops::error::AppError;
use talent_ops::table::{
    render_text, rows_from_csv_path, Column, Row, TableEngine, ViewIntent, ViewState,
};
use talent_ops::workforce::{ModuleKind, ModuleService, TeamScope};

#[derive(Args, Debug)]
pub(crate) struct TableRenderArgs {
    /// CSV file with a header row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Title printed above the table
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Comma separated fields to show (defaults to every CSV column)
    #[arg(long, value_delimiter = ',')]
    pub(crate) columns: Vec<String>,
    /// Search term applied across the shown columns
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Field to sort by
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub(crate) desc: bool,
    /// Page to show
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
}

#[derive(Args, Debug)]
pub(crate) struct ModuleShowArgs {
    /// Module slug: workforce, status, recruitment, leaves, payroll or policies
    pub(crate) module: String,
    /// Restrict people modules to one department
    #[arg(long)]
    pub(crate) team: Option<String>,
    /// Search term applied across the module columns
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Field to sort by
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub(crate) desc: bool,
    /// Page to show
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Print the view as JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_table_render(args: TableRenderArgs) -> Result<(), AppError> {
    let TableRenderArgs {
        csv,
        title,
        columns,
        search,
        sort,
        desc,
        page,
    } = args;

    let rows = rows_from_csv_path(&csv)?;
    let fields = if columns.is_empty() {
        csv_fields(&rows)
    } else {
        columns
    };
    let columns = fields
        .iter()
        .map(|field| Column::plain(field.as_str(), field.as_str()))
        .collect();

    let title = title.unwrap_or_else(|| csv.display().to_string());
    let engine = TableEngine::new(title, columns, rows);
    let state = replay(&engine, &command_intents(search, sort, desc, page));
    println!("{}", render_text(&engine.view(&state)));
    Ok(())
}

pub(crate) fn run_module_show(args: ModuleShowArgs) -> Result<(), AppError> {
    let ModuleShowArgs {
        module,
        team,
        search,
        sort,
        desc,
        page,
        json,
    } = args;

    let module = module.parse::<ModuleKind>()?;
    let team = TeamScope::from_param(team.as_deref());
    let service = module_service()?;

    let engine = service.engine(module, &team)?;
    let state = replay(&engine, &command_intents(search, sort, desc, page));
    let view = engine.view(&state);

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("View payload unavailable: {err}"),
        }
    } else {
        println!("{}", render_text(&view));
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = module_service()?;
    let engine = service.engine(ModuleKind::Workforce, &TeamScope::All)?;
    let mut state = ViewState::default();

    println!("Workforce table walkthrough");
    let steps = [
        ("Initial view", None),
        ("Open the search box", Some(ViewIntent::ToggleSearch)),
        (
            "Search for 'design'",
            Some(ViewIntent::SearchChanged {
                term: "design".to_string(),
            }),
        ),
        (
            "Clear the search",
            Some(ViewIntent::SearchChanged {
                term: String::new(),
            }),
        ),
        (
            "Sort by name",
            Some(ViewIntent::SortRequested {
                key: "name".to_string(),
            }),
        ),
        (
            "Sort by name again (descending)",
            Some(ViewIntent::SortRequested {
                key: "name".to_string(),
            }),
        ),
        (
            "Sort by join date",
            Some(ViewIntent::SortRequested {
                key: "joinDate".to_string(),
            }),
        ),
        ("Try the next page", Some(ViewIntent::NextPage)),
        (
            "Search for someone who is not on the team",
            Some(ViewIntent::SearchChanged {
                term: "zz-nobody".to_string(),
            }),
        ),
    ];

    for (label, intent) in steps {
        let changed = match &intent {
            Some(intent) => engine.dispatch(&mut state, intent),
            None => true,
        };
        println!("\n== {label}");
        if !changed {
            println!("(no change: the table already shows this state)");
        }
        println!("{}", render_text(&engine.view(&state)));
    }

    Ok(())
}

fn module_service() -> Result<ModuleService<DirectoryRecordSource>, AppError> {
    let config = AppConfig::load()?;
    let source = DirectoryRecordSource::new(config.data.data_dir);
    Ok(ModuleService::new(Arc::new(source)))
}

fn csv_fields(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.fields().keys().cloned().collect())
        .unwrap_or_default()
}

/// Intents a user would issue to reach the requested search, sort and page.
fn command_intents(
    search: Option<String>,
    sort: Option<String>,
    desc: bool,
    page: usize,
) -> Vec<ViewIntent> {
    let mut intents = Vec::new();
    if let Some(term) = search {
        intents.push(ViewIntent::ToggleSearch);
        intents.push(ViewIntent::SearchChanged { term });
    }
    if let Some(key) = sort {
        intents.push(ViewIntent::SortRequested { key: key.clone() });
        if desc {
            intents.push(ViewIntent::SortRequested { key });
        }
    }
    if page > 1 {
        intents.push(ViewIntent::PageRequested { page });
    }
    intents
}

fn replay(engine: &TableEngine, intents: &[ViewIntent]) -> ViewState {
    let mut state = ViewState::default();
    for intent in intents {
        if !engine.dispatch(&mut state, intent) {
            match intent {
                ViewIntent::SortRequested { key } if !engine.is_sortable(key) => {
                    println!("Column '{key}' is not sortable; keeping the current order");
                }
                ViewIntent::PageRequested { page } => {
                    println!(
                        "Page {page} is out of range (1-{}); showing page {}",
                        engine.total_pages(&state),
                        state.current_page
                    );
                }
                _ => {}
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: usize) -> TableEngine {
        let rows = (1..=count)
            .map(|index| {
                Row::new()
                    .with("name", format!("Person {index:02}"))
                    .with("dept", if index % 3 == 0 { "Design" } else { "Sales" })
            })
            .collect();
        TableEngine::new(
            "Roster",
            vec![Column::plain("Name", "name"), Column::plain("Dept", "dept")],
            rows,
        )
    }

    #[test]
    fn command_intents_open_search_and_toggle_direction() {
        let intents = command_intents(
            Some("design".to_string()),
            Some("name".to_string()),
            true,
            2,
        );
        assert_eq!(
            intents,
            vec![
                ViewIntent::ToggleSearch,
                ViewIntent::SearchChanged {
                    term: "design".to_string()
                },
                ViewIntent::SortRequested {
                    key: "name".to_string()
                },
                ViewIntent::SortRequested {
                    key: "name".to_string()
                },
                ViewIntent::PageRequested { page: 2 },
            ]
        );
    }

    #[test]
    fn replay_lands_on_requested_page_after_resets() {
        let engine = roster(25);
        let state = replay(
            &engine,
            &command_intents(None, Some("name".to_string()), true, 3),
        );
        assert_eq!(state.current_page, 3);
        let result = engine.query(&state);
        assert_eq!(
            result.page_rows()[0].text("name").as_deref(),
            Some("Person 05")
        );
    }

    #[test]
    fn replay_keeps_first_page_when_target_is_out_of_range() {
        let engine = roster(8);
        let state = replay(&engine, &command_intents(None, None, false, 4));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn csv_fields_follow_header_order() {
        let rows = vec![Row::new().with("name", "A").with("dept", "B").with("age", 3)];
        assert_eq!(csv_fields(&rows), vec!["name", "dept", "age"]);
    }
}
