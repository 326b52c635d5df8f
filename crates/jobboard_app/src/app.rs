//! Interactive demo session hosting the widget.
//!
//! Typed commands are translated into clicks on concrete page elements and
//! fed through the widget's real dispatch path; nothing here mutates the
//! board behind the handlers' back.

use std::io::{self, BufRead, Write};

use board_logging::board_info;
use jobboard_core::{markup, JobBoard};
use jobboard_dom::ElementId;

use crate::commands::Command;
use crate::{page, render};

pub fn run() -> anyhow::Result<()> {
    let seeds = page::seed_jobs()?;
    let document = page::build_page(&seeds);
    let mut board = JobBoard::mount(document);
    board_info!("session started with {} seed jobs", board.jobs().len());

    print!("{}", render::render_page(&board));
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session.
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Show) => print!("{}", render::render_page(&board)),
            Ok(Command::Tab(label)) => {
                click_tab(&mut board, &label);
                print!("{}", render::render_page(&board));
            }
            Ok(Command::Interview(n)) => {
                click_status(&mut board, n, markup::INTERVIEW_LABEL);
                print!("{}", render::render_page(&board));
            }
            Ok(Command::Reject(n)) => {
                click_status(&mut board, n, markup::REJECTED_LABEL);
                print!("{}", render::render_page(&board));
            }
            Ok(Command::Delete(n)) => {
                click_delete(&mut board, n);
                print!("{}", render::render_page(&board));
            }
            Err(err) => println!("{err}"),
        }
    }

    board_info!("session ended with {} jobs tracked", board.jobs().len());
    Ok(())
}

fn print_help() {
    println!("commands: tab <label> | interview <n> | reject <n> | delete <n> | show | quit");
}

/// The n-th visible card (1-based), as the user sees the list.
fn visible_card(board: &JobBoard, n: usize) -> Option<ElementId> {
    board
        .view()
        .jobs
        .into_iter()
        .filter(|job| job.visible)
        .nth(n.checked_sub(1)?)
        .map(|job| job.entry)
}

fn click_status(board: &mut JobBoard, n: usize, label: &str) {
    let Some(card) = visible_card(board, n) else {
        println!("no visible card {n}");
        return;
    };
    let button = board.document().find_descendant(card, |d, id| {
        d.tag(id) == markup::CONTROL_TAG && d.label_text(id).trim().eq_ignore_ascii_case(label)
    });
    match button {
        Some(button) => board.on_list_click(button),
        None => println!("card {n} has no {label} button"),
    }
}

fn click_delete(board: &mut JobBoard, n: usize) {
    let Some(card) = visible_card(board, n) else {
        println!("no visible card {n}");
        return;
    };
    let control = board
        .document()
        .find_descendant(card, |d, id| d.has_class(id, markup::TRASH_ICON_CLASS));
    match control {
        Some(control) => board.on_list_click(control),
        None => println!("card {n} has no delete control"),
    }
}

fn click_tab(board: &mut JobBoard, label: &str) {
    let doc = board.document();
    let tab = doc
        .find_descendant(doc.root(), |d, id| d.has_class(id, markup::TAB_BAR_CLASS))
        .and_then(|tab_bar| {
            doc.find_descendant(tab_bar, |d, id| {
                d.tag(id) == markup::CONTROL_TAG
                    && d.label_text(id).trim().eq_ignore_ascii_case(label)
            })
        });
    match tab {
        Some(tab) => board.on_tab_click(tab),
        None => println!("no tab labelled {label:?}"),
    }
}
