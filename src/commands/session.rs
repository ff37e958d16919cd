use std::io::{self, BufRead};

use crate::cli::Cli;
use crate::commands::calc::emit;
use crate::domain::models::SessionState;
use crate::services::output::print_one;
use crate::services::session::{
    calculate, group_view, reset, set_field, switch_group,
};

/// Line-driven interactive session. Reads commands from stdin until EOF
/// or `quit`; all calculator state lives in memory and dies with the
/// process.
pub fn handle_session(cli: &Cli) -> anyhow::Result<()> {
    let mut state = SessionState::default();
    if !cli.json {
        println!("adops session (cpm group active)");
        println!("commands: use <cpm|ctr> | set <field> <value> | calc | show | reset | quit");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        match (command, words.next(), words.next()) {
            ("quit" | "exit", _, _) => break,
            ("use", Some(group), _) => {
                if let Err(err) = switch_group(&mut state, group) {
                    eprintln!("{err}");
                } else if !cli.json {
                    println!("group: {}", group);
                }
            }
            ("set", Some(field), value) => {
                // A missing value clears the field back to unset.
                if let Err(err) = set_field(&mut state, field, value.unwrap_or("")) {
                    eprintln!("{err}");
                }
            }
            ("calc", _, _) => {
                let resolution = calculate(&mut state);
                emit(cli.json, &resolution)?;
            }
            ("show", _, _) => {
                print_one(cli.json, group_view(&state), |view| {
                    let mut lines = vec![format!("group: {}", view.group)];
                    for f in &view.fields {
                        lines.push(format!("{}: {:?}", f.name, f.value));
                    }
                    match &view.result {
                        Some(r) => lines.push(format!(
                            "result: {} {:.2}",
                            r.label.as_deref().unwrap_or_default(),
                            r.value.unwrap_or_default()
                        )),
                        None => lines.push("result: none".to_string()),
                    }
                    lines.join("\n")
                })?;
            }
            ("reset", _, _) => {
                reset(&mut state);
                if !cli.json {
                    println!("reset: {} group cleared", group_view(&state).group);
                }
            }
            (other, _, _) => {
                eprintln!("unknown command {other:?}");
            }
        }
    }
    Ok(())
}
