use comfy_table::{Attribute, Cell, Color, Row, Table};
use sked_core::calendar::{parse_date, DISPLAY_DATE_FORMAT};
use sked_core::models::Task;

/// Renders tasks as a table, due date first.
pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id));
        row.add_cell(Cell::new(display_date(&task.date)));

        let mut title = Cell::new(&task.title).add_attribute(Attribute::Bold);
        if task.is_recurring() {
            title = title.fg(Color::Cyan);
        }
        row.add_cell(title);

        row.add_cell(repeat_cell(task));
        row.add_cell(Cell::new(&task.comment).fg(Color::DarkGrey));
        table.add_row(row);
    }

    table.to_string()
}

pub fn display_tasks(tasks: &[Task]) {
    println!("{}", render_tasks(tasks));
}

/// Stored dates shown as DD.MM.YYYY; anything unparsable is shown as is.
fn display_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Canonical rule text; a rule that no longer parses is shown raw, in red.
fn repeat_cell(task: &Task) -> Cell {
    match task.rule() {
        Ok(rule) => Cell::new(rule).fg(Color::Yellow),
        Err(_) => Cell::new(&task.repeat).fg(Color::Red),
    }
}
