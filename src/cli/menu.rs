use std::io::{self, BufRead, Write};

use crate::error::{ErrorCode, TidytaskError};
use crate::output;
use crate::store::Store;

/// Run the interactive menu loop over stdin/stdout until the user exits
/// or input ends. Returns the process exit code.
pub fn run(store: &mut Store) -> i32 {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    run_loop(store, &mut lines)
}

fn run_loop(store: &mut Store, lines: &mut impl Iterator<Item = io::Result<String>>) -> i32 {
    loop {
        output::text::print_menu();
        let Some(choice) = prompt(lines, "Enter your choice: ") else {
            // End of input counts as a normal exit for piped sessions.
            return 0;
        };
        let result = match choice.trim() {
            "1" => {
                output::text::print_task_list(store.tasks());
                Ok(())
            }
            "2" => run_add(store, lines),
            "3" => run_complete(store, lines),
            "4" => run_delete(store, lines),
            "5" => run_prioritize(store, lines),
            "6" => {
                output::text::print_incomplete(store.filter_incomplete());
                Ok(())
            }
            "7" => run_search(store, lines),
            "8" => run_edit(store, lines),
            "9" => run_undo(store, lines),
            "10" => {
                println!("Exiting To-Do List. Goodbye!");
                return 0;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            if e.code == ErrorCode::Io {
                // A failed save leaves the file and memory out of sync;
                // nothing sensible to do but stop.
                eprintln!("Error: {}", e.message);
                return 1;
            }
            println!("{}", e.message);
        }
    }
}

fn run_add(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    let Some(description) = prompt(lines, "Enter the new task description: ") else {
        return Ok(());
    };
    let task = store.add(&description)?;
    println!("Task '{}' added.", task.description);
    Ok(())
}

fn run_complete(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    output::text::print_task_list(store.tasks());
    if store.tasks().is_empty() {
        return Ok(());
    }
    let Some(token) = prompt(lines, "Enter the number of the task to mark as complete: ") else {
        return Ok(());
    };
    let index = parse_index(token.trim())?;
    store.complete(index)?;
    println!("Task {index} marked as complete.");
    Ok(())
}

fn run_delete(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    output::text::print_task_list(store.tasks());
    if store.tasks().is_empty() {
        return Ok(());
    }
    let Some(token) = prompt(lines, "Enter the number of the task to delete: ") else {
        return Ok(());
    };
    let index = parse_index(token.trim())?;
    let task = store.delete(index)?;
    println!("Task '{}' deleted.", task.description);
    Ok(())
}

fn run_prioritize(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    output::text::print_task_list(store.tasks());
    if store.tasks().is_empty() {
        return Ok(());
    }
    let Some(token) = prompt(lines, "Enter the number of the task to prioritize: ") else {
        return Ok(());
    };
    let index = parse_index(token.trim())?;
    let task = store.prioritize(index)?;
    println!("Task '{}' moved to top.", task.description);
    Ok(())
}

fn run_search(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    let Some(needle) = prompt(lines, "Enter the task description to search: ") else {
        return Ok(());
    };
    output::text::print_matches(store.search(needle.trim()));
    // Always reported, match or no match.
    println!("\nTask found!");
    Ok(())
}

fn run_edit(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    output::text::print_task_list(store.tasks());
    if store.tasks().is_empty() {
        return Ok(());
    }
    let Some(token) = prompt(lines, "Enter the number of the task to edit: ") else {
        return Ok(());
    };
    let index = parse_index(token.trim())?;
    let Some(description) = prompt(lines, "Enter the new task description: ") else {
        return Ok(());
    };
    let task = store.edit(index, &description)?;
    println!("Task {index} updated to '{}'.", task.description);
    Ok(())
}

fn run_undo(
    store: &mut Store,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), TidytaskError> {
    output::text::print_undo_menu();
    let Some(choice) = prompt(lines, "Enter your choice: ") else {
        return Ok(());
    };
    match choice.trim() {
        "1" => {
            let task = store.restore()?;
            println!("Task '{}' restored.", task.description);
        }
        "2" => {
            output::text::print_task_list(store.tasks());
            if store.tasks().is_empty() {
                return Ok(());
            }
            let Some(token) = prompt(lines, "Enter the number of the task to mark as not complete: ")
            else {
                return Ok(());
            };
            let index = parse_index(token.trim())?;
            store.uncomplete(index)?;
            println!("Task {index} marked as not complete.");
        }
        "3" => {}
        _ => println!("Invalid choice. Please try again."),
    }
    Ok(())
}

/// Print `text` without a newline and read one line. `None` means end of
/// input (or a read error, treated the same).
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    lines.next()?.ok()
}

/// Parse a user-typed index token. Non-numeric tokens never reach the
/// store; zero and negative numbers are integers, so they take the
/// out-of-range path instead.
fn parse_index(token: &str) -> Result<usize, TidytaskError> {
    match token.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n as usize),
        Ok(_) => Err(TidytaskError::out_of_range()),
        Err(_) => Err(TidytaskError::invalid_number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_accepts_positive_integers() {
        assert_eq!(parse_index("1").unwrap(), 1);
        assert_eq!(parse_index("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_index_rejects_non_numeric() {
        for token in ["", "abc", "1.5", "two"] {
            assert_eq!(parse_index(token).unwrap_err().code, ErrorCode::InvalidNumber);
        }
    }

    #[test]
    fn test_parse_index_zero_and_negative_are_out_of_range() {
        for token in ["0", "-1", "-99"] {
            assert_eq!(parse_index(token).unwrap_err().code, ErrorCode::OutOfRange);
        }
    }
}
