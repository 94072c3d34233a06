//! Interactive menu shell.
//!
//! Two nested loops: the welcome menu (create / open / exit) and the working
//! menu over one open project. Cancelling a prompt aborts the current
//! operation and falls back to the nearest enclosing menu; cancelling at the
//! welcome prompt leaves the program. Control flow between menus is carried
//! by [`MenuOutcome`] values, never by signals.

pub mod query;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::console;
use crate::stopwatch::Stopwatch;
use crate::store::HistoryStore;

/// Where control goes after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Stay in the current menu.
    Continue,
    /// Return to the enclosing menu.
    Back,
    /// Leave the program.
    Exit,
}

/// Actions reachable from the working menu, keyed by their option digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkingAction {
    StartWork,
    PrintAll,
    PrintSome,
    DescribeAll,
    DescribeSome,
    Rename,
    Close,
}

fn parse_working_option(option: &str) -> Option<WorkingAction> {
    match option {
        "1" => Some(WorkingAction::StartWork),
        "2" => Some(WorkingAction::PrintAll),
        "3" => Some(WorkingAction::PrintSome),
        "4" => Some(WorkingAction::DescribeAll),
        "5" => Some(WorkingAction::DescribeSome),
        "6" => Some(WorkingAction::Rename),
        "7" => Some(WorkingAction::Close),
        _ => None,
    }
}

/// Matches inputs that already end in a JSON extension; everything else gets
/// the extension appended.
static JSON_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[~:.\w /\\-]+\.json$").expect("file pattern is valid"));

/// Run the shell. With `file` set, that project is opened directly and the
/// working menu starts without the welcome round-trip.
pub fn run(file: Option<PathBuf>) -> Result<()> {
    println!("Welcome to Hourly");
    println!("-----------------\n");

    if let Some(path) = file
        && open_from_path(&path)? == MenuOutcome::Exit
    {
        return farewell();
    }

    loop {
        if welcome_menu()? == MenuOutcome::Exit {
            return farewell();
        }
    }
}

fn farewell() -> Result<()> {
    println!("\nExiting Hourly...");
    Ok(())
}

fn open_from_path(path: &Path) -> Result<MenuOutcome> {
    match HistoryStore::open(path) {
        Ok(mut store) => {
            println!("Opening {}\n", path.display());
            project_loop(&mut store)
        }
        Err(err) => {
            eprintln!("{err}\n");
            Ok(MenuOutcome::Continue)
        }
    }
}

fn welcome_menu() -> Result<MenuOutcome> {
    loop {
        println!("What do you want to do?\n");
        println!("1: Create a new project");
        println!("2: Open an existing project");
        println!("3: Exit\n");

        let Some(option) = console::read_line(">>> ")? else {
            return Ok(MenuOutcome::Exit);
        };
        match option.trim() {
            "1" => return create_project(),
            "2" => return open_project(),
            "3" => return Ok(MenuOutcome::Exit),
            other => invalid_option(other),
        }
    }
}

fn create_project() -> Result<MenuOutcome> {
    println!("\nCreating a project\n");

    let name = loop {
        let Some(name) = console::read_line("What is the name of the project?\n\n>>> ")? else {
            return cancelled();
        };
        if name.is_empty() {
            println!("\nPlease enter a valid name\n");
            continue;
        }
        break name;
    };
    println!("\nCreating '{name}' project\n");

    match select_file(Some(&name))? {
        Some(mut store) => project_loop(&mut store),
        None => cancelled(),
    }
}

fn open_project() -> Result<MenuOutcome> {
    println!("\nOpening an existing project\n");

    match select_file(None)? {
        Some(mut store) => project_loop(&mut store),
        None => cancelled(),
    }
}

/// Prompt for a project file until one opens, the user cancels, or (for a new
/// project) the target is confirmed. `new_project_name` selects between the
/// create and open flows.
fn select_file(new_project_name: Option<&str>) -> Result<Option<HistoryStore>> {
    loop {
        let Some(input) = console::read_line("Select the project file (JSON)\n\n>>> ")? else {
            return Ok(None);
        };
        let path = normalize_project_path(&input);

        if let Some(name) = new_project_name {
            let parent = path.parent().unwrap_or(Path::new("/"));
            if !parent.exists() {
                println!("\nPath {} does not exist", parent.display());
                println!("Please enter a valid path\n");
                continue;
            }
            if path.exists() {
                println!("\nFile {} already exists", path.display());
                println!("Do you want to overwrite it?\n");
                match console::confirm()? {
                    None => return Ok(None),
                    Some(false) => continue,
                    Some(true) => println!("\nOverwriting {}\n", path.display()),
                }
            } else {
                println!("\nCreating {}\n", path.display());
            }
            match HistoryStore::create(&path, name) {
                Ok(store) => return Ok(Some(store)),
                Err(err) => {
                    eprintln!("{err}\n");
                    continue;
                }
            }
        } else {
            if !path.exists() {
                println!("\nPath {} does not exist", path.display());
                println!("Please enter a valid path\n");
                continue;
            }
            println!("\nOpening {}\n", path.display());
            match HistoryStore::open(&path) {
                Ok(store) => return Ok(Some(store)),
                Err(err) => {
                    eprintln!("{err}");
                    println!("Please select another file\n");
                    continue;
                }
            }
        }
    }
}

/// Append `.json` unless the input already names a JSON file, then resolve
/// relative inputs against the current directory.
fn normalize_project_path(input: &str) -> PathBuf {
    let mut file = input.to_string();
    if !JSON_FILE_RE.is_match(&file) {
        file.push_str(".json");
    }
    std::path::absolute(&file).unwrap_or_else(|_| PathBuf::from(file))
}

/// Keep serving the working menu until the project is closed or the program
/// should exit.
fn project_loop(store: &mut HistoryStore) -> Result<MenuOutcome> {
    loop {
        match working_menu(store)? {
            MenuOutcome::Continue => {}
            MenuOutcome::Back => {
                println!("\nClosing '{}' project", store.project_name());
                println!("Getting back to the main menu\n");
                return Ok(MenuOutcome::Continue);
            }
            MenuOutcome::Exit => return Ok(MenuOutcome::Exit),
        }
    }
}

/// One round of the working menu.
fn working_menu(store: &mut HistoryStore) -> Result<MenuOutcome> {
    println!("\nWorking on '{}' project\n", store.project_name());
    println!("What do you want to do?\n");
    println!("1: Start working");
    println!("2: Print the whole history");
    println!("3: Print some entries of the history");
    println!("4: Print all task descriptions");
    println!("5: Print some task descriptions");
    println!("6: Change the project name");
    println!("7: Close the project\n");

    let Some(option) = console::read_line(">>> ")? else {
        return Ok(MenuOutcome::Back);
    };
    let Some(action) = parse_working_option(option.trim()) else {
        invalid_option(option.trim());
        return Ok(MenuOutcome::Continue);
    };

    match action {
        WorkingAction::StartWork => start_work(store),
        WorkingAction::PrintAll => {
            println!("{}", store.render(None)?);
            Ok(MenuOutcome::Continue)
        }
        WorkingAction::PrintSome => {
            let Some(query) = query_prompt(store)? else {
                return cancelled();
            };
            println!("{}", store.render(Some(&query))?);
            Ok(MenuOutcome::Continue)
        }
        WorkingAction::DescribeAll => {
            println!("{}", store.render_descriptions(None)?);
            Ok(MenuOutcome::Continue)
        }
        WorkingAction::DescribeSome => {
            let Some(query) = query_prompt(store)? else {
                return cancelled();
            };
            println!("{}", store.render_descriptions(Some(&query))?);
            Ok(MenuOutcome::Continue)
        }
        WorkingAction::Rename => rename_project(store),
        WorkingAction::Close => Ok(MenuOutcome::Back),
    }
}

fn start_work(store: &mut HistoryStore) -> Result<MenuOutcome> {
    let session = Stopwatch::new().run()?;

    let Some(description) =
        console::read_line("\nDescribe what you did during the session\n\n>>> ")?
    else {
        return cancelled();
    };
    store.add_entry(session.start, session.end, session.elapsed, &description)?;
    Ok(MenuOutcome::Continue)
}

/// Ask for an index/range query until it parses, the user cancels, or there
/// is nothing to query.
fn query_prompt(store: &HistoryStore) -> Result<Option<BTreeSet<usize>>> {
    let max_entries = store.entry_count();
    if max_entries == 0 {
        println!("\nThe history has no entries yet\n");
        return Ok(None);
    }

    loop {
        println!("\nEnter one or more entries to print");
        println!("Numbers must be between 0 and {}", max_entries - 1);
        println!("You can enter several numbers separated by commas, like 2,4,7");
        println!("You can also enter ranges, like 5-10, 33-39");
        println!("(Ctrl+C or Ctrl+D cancels)\n");

        let Some(rows) = console::read_line(">>> ")? else {
            return Ok(None);
        };
        match query::parse_query(&rows, max_entries) {
            Ok(parsed) => return Ok(Some(parsed)),
            Err(err) => {
                println!("\n{err}");
                println!("Please enter valid values.\n");
            }
        }
    }
}

fn rename_project(store: &mut HistoryStore) -> Result<MenuOutcome> {
    let current = store.project_name().to_string();
    println!("\nEnter a new name for the '{current}' project");
    println!("(Ctrl+C or Ctrl+D cancels)\n");

    let Some(new_name) = console::read_line(">>> ")? else {
        return cancelled();
    };
    if new_name.is_empty() {
        println!("\nPlease enter a valid name\n");
        return Ok(MenuOutcome::Continue);
    }

    println!("\nAre you sure you want to rename the project");
    println!("from '{current}' to '{new_name}'?\n");
    match console::confirm()? {
        None => cancelled(),
        Some(false) => Ok(MenuOutcome::Continue),
        Some(true) => {
            store.rename(&new_name)?;
            println!("\nRenamed the project to '{new_name}'\n");
            Ok(MenuOutcome::Continue)
        }
    }
}

fn cancelled() -> Result<MenuOutcome> {
    println!("\nCancelling operation\n");
    Ok(MenuOutcome::Continue)
}

fn invalid_option(option: &str) {
    println!("\nUnrecognized option '{option}'");
    println!("Please enter a valid option\n");
}
