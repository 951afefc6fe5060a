//! Command-line front end for the QuickNote core.
//!
//! # Responsibility
//! - Drive `ListProjection` against a terminal view and SQLite storage.
//! - Keep output line-oriented so it is easy to script against.

use log::info;
use quicknote_core::{
    init_logging, HtmlView, KeyValueStorage, ListProjection, MessageId, Note, NoteId, NoteStore,
    NoteView, QuickNoteConfig, SqliteStorage, SubmitOutcome, SystemClock, TransientMessage,
};
use std::process::ExitCode;

const USAGE: &str =
    "usage: quicknote <ping|version|list|html|add <title> <body>|view <id>|delete <id>>";

/// Prints view mutations as they happen.
struct TerminalView {
    list_items: bool,
}

impl NoteView for TerminalView {
    fn append_item(&mut self, note: &Note) {
        if self.list_items {
            println!("[{}] {}: {}", note.id, note.title, note.body);
        }
    }

    fn remove_item(&mut self, _id: NoteId) -> bool {
        true
    }

    fn clear_inputs(&mut self) {}

    fn focus_title(&mut self) {}

    fn insert_message(&mut self, message: &TransientMessage) {
        println!("{}", message.text);
    }

    fn remove_message(&mut self, _id: MessageId) -> bool {
        true
    }

    fn show_modal(&mut self, title: &str, body: &str) {
        println!("{title}\n\n{body}");
    }

    fn hide_modal(&mut self) {}
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    match command {
        "ping" => {
            println!("quicknote_core ping={}", quicknote_core::ping());
            return ExitCode::SUCCESS;
        }
        "version" => {
            println!("quicknote_core version={}", quicknote_core::core_version());
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let config = match QuickNoteConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::from(2);
        }
    };
    if let Some(log_dir) = config.log_dir.as_ref() {
        if let Err(err) = init_logging(config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }
    let storage = match SqliteStorage::open(&config.db_path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open `{}`: {err}", config.db_path.display());
            return ExitCode::from(2);
        }
    };

    let store = NoteStore::with_key(storage, config.storage_key.as_str());
    if command == "html" && args.len() == 1 {
        let mut projection = ListProjection::new(store, HtmlView::new(), SystemClock);
        projection.render_all();
        println!("{}", projection.view().to_html());
        return ExitCode::SUCCESS;
    }

    let view = TerminalView {
        list_items: command == "list",
    };
    let mut projection =
        ListProjection::new(store, view, SystemClock).with_dismiss_after(config.dismiss_after);
    projection.render_all();
    info!("event=cli_command module=cli status=start command={command}");

    match run(&mut projection, command, &args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run<S: KeyValueStorage>(
    projection: &mut ListProjection<S, TerminalView, SystemClock>,
    command: &str,
    rest: &[String],
) -> Result<(), String> {
    match (command, rest) {
        ("list", []) => {
            if projection.rendered().is_empty() {
                println!("No notes.");
            }
            Ok(())
        }
        ("add", [title, body]) => match projection
            .on_submit(title, body)
            .map_err(|err| format!("add failed: {err}"))?
        {
            SubmitOutcome::Added(note) => {
                println!("id={}", note.id);
                Ok(())
            }
            SubmitOutcome::Rejected(reason) => Err(reason.to_string()),
        },
        ("view", [id]) => {
            let id = parse_id(id)?;
            if projection.on_view_requested(id) {
                Ok(())
            } else {
                Err(format!("no note with id {id}"))
            }
        }
        ("delete", [id]) => {
            let id = parse_id(id)?;
            projection
                .on_delete_requested(id)
                .map(|_| ())
                .map_err(|err| format!("delete failed: {err}"))
        }
        _ => Err(USAGE.to_string()),
    }
}

fn parse_id(raw: &str) -> Result<NoteId, String> {
    raw.parse::<NoteId>().map_err(|err| err.to_string())
}
