//! Table rendering for the roster

use crate::roster::Student;

/// Shown instead of a table when there is nothing to list
pub const EMPTY_MESSAGE: &str = "store is empty";

const NUMBER_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const GROUP_WIDTH: usize = 20;
const GRADES_WIDTH: usize = 14;

fn separator() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(GROUP_WIDTH),
        "-".repeat(GRADES_WIDTH)
    )
}

/// Render students as a numbered table, or [`EMPTY_MESSAGE`] when there are none.
///
/// Rows are numbered from 1 in the order given. Every line ends with a newline.
pub fn render_table<'a, I>(students: I) -> String
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut rows = students.into_iter().peekable();
    if rows.peek().is_none() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let line = separator();
    let mut out = String::new();
    out.push_str(&line);
    out.push('\n');
    out.push_str(&format!(
        "| {:^nw$} | {:^namew$} | {:^gw$} | {:^gradesw$} |\n",
        "No",
        "Name",
        "Group",
        "Grades",
        nw = NUMBER_WIDTH,
        namew = NAME_WIDTH,
        gw = GROUP_WIDTH,
        gradesw = GRADES_WIDTH,
    ));
    out.push_str(&line);
    out.push('\n');

    for (idx, student) in rows.enumerate() {
        out.push_str(&format!(
            "| {:>nw$} | {:<namew$} | {:<gw$} | {:>gradesw$} |\n",
            idx + 1,
            student.name,
            student.group_number,
            student.grades_display(),
            nw = NUMBER_WIDTH,
            namew = NAME_WIDTH,
            gw = GROUP_WIDTH,
            gradesw = GRADES_WIDTH,
        ));
    }

    out.push_str(&line);
    out.push('\n');
    out
}
