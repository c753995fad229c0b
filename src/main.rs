// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! By default this opens a session file and runs the interactive navigator;
//! activating a topic row prints its start time on exit.
//!
//! Use `--dump` to print every section's topics to stdout instead (intended
//! for scripting).

use std::error::Error;

use triton::model::{SessionDoc, StartTime};
use triton::query::{topics, Section, LAST_MINUTE_PHASES};
use triton::render::{format_clock, format_millis};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <session.xml>\n  {program} --dump <session.xml>\n\nThe default mode runs the interactive navigator; activating a topic row\nprints its start time on exit.\n\n--dump prints all sections' topics to stdout in document order."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    dump: bool,
    session_file: Option<String>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--dump" => {
                if options.dump {
                    return Err(());
                }
                options.dump = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.session_file.is_some() {
                    return Err(());
                }
                options.session_file = Some(arg);
            }
        }
    }

    if options.session_file.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "triton".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        let Some(session_file) = options.session_file else {
            print_usage(&program);
            std::process::exit(2);
        };

        let doc = SessionDoc::open(&session_file)?;

        if options.dump {
            dump_sections(&doc);
            return Ok(());
        }

        if let Some(ms) = triton::tui::run(&doc)? {
            println!("{}", format_clock(ms));
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn dump_sections(doc: &SessionDoc) {
    dump_section(doc, "greeting", Section::Greeting);
    dump_section(doc, "initial-narrative", Section::InitialNarrative);
    for phase in LAST_MINUTE_PHASES {
        dump_section(
            doc,
            &format!("last-minute/{phase}"),
            Section::LastMinutePhase(phase),
        );
    }
    dump_section(doc, "farewell", Section::Farewell);
}

fn dump_section(doc: &SessionDoc, label: &str, section: Section) {
    for record in topics(doc, section) {
        let topic_id = record.topic_id().unwrap_or("");
        match record.start() {
            StartTime::Anchored(ms) => {
                println!("{label}\t{topic_id}\t{}", format_millis(*ms));
            }
            StartTime::Unanchored => println!("{label}\t{topic_id}\t-"),
            StartTime::Unresolved(err) => {
                println!("{label}\t{topic_id}\tunresolved: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_options;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|arg| (*arg).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parse_options_requires_a_session_file() {
        assert!(parse_options(args(&[])).is_err());
        assert!(parse_options(args(&["--dump"])).is_err());
    }

    #[test]
    fn parse_options_accepts_dump_in_any_position() {
        let from_front = parse_options(args(&["--dump", "session.xml"])).expect("options");
        let from_back = parse_options(args(&["session.xml", "--dump"])).expect("options");
        assert_eq!(from_front, from_back);
        assert!(from_front.dump);
        assert_eq!(from_front.session_file.as_deref(), Some("session.xml"));
    }

    #[test]
    fn parse_options_rejects_unknown_flags_and_extra_files() {
        assert!(parse_options(args(&["--mcp", "session.xml"])).is_err());
        assert!(parse_options(args(&["a.xml", "b.xml"])).is_err());
        assert!(parse_options(args(&["--dump", "--dump", "a.xml"])).is_err());
    }
}
