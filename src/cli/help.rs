//! Help text and logging verbosity

/// REPL command summary printed by `help`
pub const REPL_HELP: &str = "\
Commands:

add          - add a student
list         - list all students
select       - list students whose grades are all 4 or higher
save <file>  - save students to a JSON file
load <file>  - load students from a JSON file (replaces the current list)
help         - show this help
exit         - quit the program
";

/// Get the log filter based on verbosity
///
/// With no `-v` the filter is `warn`, not `info`, so that tracing output on
/// stderr stays out of the way of the interactive prompt.
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
