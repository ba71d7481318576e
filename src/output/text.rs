use crate::models::Task;

pub fn print_menu() {
    println!("\n--- To-Do List Menu ---");
    println!("1. View Tasks");
    println!("2. Add Task");
    println!("3. Mark Task as Complete");
    println!("4. Delete Task");
    println!("5. Prioritize Task");
    println!("6. Filter Tasks");
    println!("7. Search Tasks");
    println!("8. Edit Task");
    println!("9. Undo");
    println!("10. Exit");
    println!("-------------------------");
}

pub fn print_undo_menu() {
    println!("\n--- Undo Menu ---");
    println!("1. Undo last delete");
    println!("2. Undo a completion");
    println!("3. Back");
    println!("-----------------");
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("\nYour to-do list is empty! Time to add some tasks.");
        return;
    }
    println!("\n--- Your To-Do List ---");
    for (i, task) in tasks.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, task.status_mark(), task.description);
    }
    println!("-----------------------\n");
}

pub fn print_incomplete<'a>(tasks: impl Iterator<Item = (usize, &'a Task)>) {
    println!("Displaying only incomplete tasks.\n");
    for (i, task) in tasks {
        println!("{i}. [ ] {}", task.description);
    }
    println!("----------------------------\n");
}

pub fn print_matches<'a>(tasks: impl Iterator<Item = (usize, &'a Task)>) {
    for (i, task) in tasks {
        println!("{i}. [{}] {}", task.status_mark(), task.description);
    }
}
