//! Line-oriented driver for `tasklist_core`.
//!
//! # Responsibility
//! - Drive one `TaskSession` from stdin commands for local sanity checks.
//! - Enable file logging only when `TASKLIST_LOG_DIR` is set.

use std::io::{self, BufRead, Write};
use tasklist_core::{TaskGroup, TaskId, TaskSession, ViewProjection};

const USAGE: &str = "commands: add <title> | sub <parent-id> <title> | toggle <id> | list | quit";

fn main() {
    if let Ok(dir) = std::env::var("TASKLIST_LOG_DIR") {
        let level = std::env::var("TASKLIST_LOG_LEVEL")
            .unwrap_or_else(|_| tasklist_core::default_log_level().to_string());
        if let Err(err) = tasklist_core::init_logging(&level, &dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());
    println!("{USAGE}");

    let mut session = TaskSession::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match run_command(&mut session, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(message) => eprintln!("{message}"),
        }
    }
}

/// Runs one command line. Returns `Ok(false)` when the driver should stop.
fn run_command(session: &mut TaskSession, line: &str) -> Result<bool, String> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "" => {}
        "add" => {
            let id = session.try_add_task(rest).map_err(|err| err.to_string())?;
            println!("added {id}");
        }
        "sub" => {
            let (parent, title) = rest.split_once(' ').unwrap_or((rest, ""));
            let id = session
                .try_add_subtask(parse_id(parent)?, title)
                .map_err(|err| err.to_string())?;
            println!("added {id}");
        }
        "toggle" => {
            session
                .try_toggle_completion(parse_id(rest)?)
                .map_err(|err| err.to_string())?;
        }
        "list" => print_board(&session.project()),
        "quit" | "exit" => return Ok(false),
        other => return Err(format!("unknown command `{other}`; {USAGE}")),
    }
    io::stdout().flush().map_err(|err| err.to_string())?;
    Ok(true)
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("invalid task id `{raw}`: {err}"))
}

fn print_board(view: &ViewProjection<'_>) {
    if view.is_empty {
        println!("(no tasks)");
        return;
    }
    println!("incomplete ({})", view.incomplete_count());
    view.incomplete_top_level.iter().for_each(print_group);
    println!("completed ({})", view.completed_count());
    view.completed_top_level.iter().for_each(print_group);
}

fn print_group(group: &TaskGroup<'_>) {
    println!("  {} {} {}", mark(group.task.completed), group.task.id, group.task.title);
    for child in group
        .incomplete_children
        .iter()
        .chain(group.completed_children.iter())
    {
        println!("    {} {} {}", mark(child.completed), child.id, child.title);
    }
}

fn mark(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::run_command;
    use tasklist_core::TaskSession;

    #[test]
    fn add_sub_toggle_round() {
        let mut session = TaskSession::new();
        assert_eq!(run_command(&mut session, "add A"), Ok(true));
        let parent = session.snapshot().tasks()[0].id;

        run_command(&mut session, &format!("sub {parent} A1")).unwrap();
        let child = session.snapshot().children_of(parent)[0].id;
        run_command(&mut session, &format!("toggle {child}")).unwrap();

        assert!(session.snapshot().get(child).unwrap().completed);
        assert_eq!(run_command(&mut session, "list"), Ok(true));
    }

    #[test]
    fn rejects_blank_title_and_bad_id() {
        let mut session = TaskSession::new();
        assert!(run_command(&mut session, "add    ").is_err());
        assert!(run_command(&mut session, "toggle nope").is_err());
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = TaskSession::new();
        assert_eq!(run_command(&mut session, "quit"), Ok(false));
    }
}
