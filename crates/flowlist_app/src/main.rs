use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use flowlist_app::config;
use flowlist_app::logging::{self, LogDestination};
use flowlist_app::session::ListSession;
use flowlist_core::{ListViewModel, Msg, QueryState};
use flowlist_engine::{HttpDataSource, SchedulerSettings, SourceSettings};
use tokio::io::{AsyncBufReadExt, BufReader};

const CONFIG_PATH: &str = "flowlist.ron";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let config = config::load(Path::new(CONFIG_PATH));
    let source = HttpDataSource::new(
        &config.base_url,
        SourceSettings {
            connect_timeout: config.connect_timeout(),
            request_timeout: config.request_timeout(),
        },
    )
    .context("building data source")?;

    let settings = SchedulerSettings {
        quiet_interval: config.quiet_interval(),
    };
    // An optional initial query string, e.g. `flowlist "page=2&flowName=x"`.
    let initial_query = std::env::args().nth(1).unwrap_or_default();
    let (mut session, mut view_rx, mut settled_rx) =
        ListSession::new(Arc::new(source), settings, &initial_query);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&view_rx.borrow_and_update());
            }
            maybe_settled = settled_rx.recv() => {
                match maybe_settled {
                    Some(settled) => session.handle_settled(settled),
                    None => break,
                }
            }
            maybe_line = lines.next_line() => {
                let Some(line) = maybe_line.context("reading stdin")? else {
                    break;
                };
                if !apply_command(&mut session, line.trim()) {
                    break;
                }
            }
        }
    }

    session.close();
    Ok(())
}

/// Translates one console command into session input. Returns false when
/// the user asked to quit.
fn apply_command(session: &mut ListSession, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match (command, rest) {
        ("quit", _) | ("q", _) => return false,
        ("search", text) => session.handle(Msg::SearchChanged {
            text: text.to_string(),
        }),
        ("page", number) => match number.parse::<u32>() {
            Ok(page) => {
                let filter_text = session.view().filter_text;
                session.navigate(QueryState::new(page, filter_text).encode());
            }
            Err(_) => println!("usage: page <number>"),
        },
        ("open", raw_query) => session.navigate(raw_query.to_string()),
        ("duplicate", _) => session.handle(Msg::ItemDuplicated),
        ("delete", _) => session.handle(Msg::ItemDeleted),
        ("", _) => {}
        _ => print_help(),
    }
    true
}

fn render(view: &ListViewModel) {
    if view.loading {
        println!("... loading (page {}, filter {:?})", view.page, view.filter_text);
        return;
    }
    if let Some(error) = &view.error {
        println!("fetch failed: {}", error.message);
        return;
    }
    if view.items.is_empty() {
        println!("no flows found");
        return;
    }
    for item in &view.items {
        let marker = if item.active { "*" } else { " " };
        println!("{marker} {} {}", item.id, item.name);
    }
    if let Some(info) = view.page_info {
        if info.total_pages > 1 {
            println!("page {}/{}", info.current_page, info.total_pages);
        }
    }
}

fn print_help() {
    println!("commands: search <text> | page <n> | open <query> | duplicate | delete | quit");
}
