//! Tessera demo host
//!
//! Line-oriented REPL on stdin/stdout that drives shard sessions through
//! the full contract: resolve by name, configure, warm up, activate once
//! per input, clean up.
//!
//! Commands:
//! - shards: list registered shard descriptors as JSON
//! - meta <name>: describe one shard
//! - use <name>: open a session (closes any current one)
//! - set <param> <value> / get <param>: parameter access
//! - warmup: run the setup hook now (feed also runs it lazily)
//! - feed <value>: activate with one input value
//! - close, help, quit
//!
//! Logs go to stderr, command output to stdout.

mod command;

use command::{parse, Command};
use std::env;
use std::io::{self, BufRead};
use tessera::{Host, Session};
use tessera_core::{ShardError, Value};
use tessera_shard::ShardRegistry;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &str = "\
Commands:
  shards               list registered shards
  meta <name>          describe one shard
  use <name>           open a session on <name>, closing any current one
  set <param> <value>  set a parameter on the current session
  get <param>          read a parameter back
  warmup               run the setup hook now (feed also runs it lazily)
  feed <value>         activate with one input value
  close                close the current session
  help                 this text
  quit                 exit

Values for set and feed parse as Float when numeric, Text otherwise:
feed a word to trip INPUT_KIND, set a number on a Text parameter to
trip PARAM_KIND.";

/// Build the host from the calculator pack
fn create_host() -> Host {
    let registry = tessera_calc::load_calculator_shards(ShardRegistry::new());
    Host::new(registry)
}

/// Numeric text becomes a Float, everything else Text.
///
/// Applies to both feed inputs and set values: a word fed to a
/// Float-input shard trips INPUT_KIND, a number set on a Text parameter
/// trips PARAM_KIND.
fn literal(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(x) => Value::Float(x),
        Err(_) => Value::Text(text.to_string()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("serialization failed: {}", e),
    }
}

/// Shard errors print as single-line JSON, the way a host boundary would
/// surface them.
fn print_error(err: &ShardError) {
    match serde_json::to_string(err) {
        Ok(json) => println!("error: {}", json),
        Err(_) => println!("error: {}", err),
    }
}

fn no_session() {
    println!("no session open, try 'use <name>'");
}

fn close_session(session: Session) {
    let name = session.name();
    let steps = session.steps();
    match session.close() {
        Ok(()) => info!(shard = name, steps, "session closed"),
        Err(e) => print_error(&e),
    }
    println!("closed {}", name);
}

fn run(host: &Host, session: &mut Option<Session>, cmd: Command) {
    match cmd {
        Command::Shards => print_json(&host.shards()),
        Command::Meta(name) => match host.meta(&name) {
            Some(meta) => print_json(meta),
            None => println!("no shard named '{}'", name),
        },
        Command::Use(name) => match host.spawn(&name) {
            Ok(new) => {
                if let Some(old) = session.take() {
                    close_session(old);
                }
                info!(shard = new.name(), "session opened");
                println!("using {}", new.name());
                *session = Some(new);
            }
            Err(e) => print_error(&e),
        },
        Command::Set { param, value } => match session.as_mut() {
            Some(s) => match s.set_param(&param, literal(&value)) {
                Ok(()) => println!("ok"),
                Err(e) => print_error(&e),
            },
            None => no_session(),
        },
        Command::Get(param) => match session.as_ref() {
            Some(s) => match s.get_param(&param) {
                Ok(value) => println!("{}", value),
                Err(e) => print_error(&e),
            },
            None => no_session(),
        },
        Command::Warmup => match session.as_mut() {
            Some(s) => match s.warmup() {
                Ok(()) => {
                    debug!(shard = s.name(), "warmed up");
                    println!("ok");
                }
                Err(e) => print_error(&e),
            },
            None => no_session(),
        },
        Command::Feed(text) => match session.as_mut() {
            Some(s) => {
                let input = literal(&text);
                match s.activate(&input) {
                    Ok(output) => {
                        debug!(shard = s.name(), step = s.steps(), "activated");
                        println!("{}", output);
                    }
                    Err(e) => print_error(&e),
                }
            }
            None => no_session(),
        },
        Command::Close => match session.take() {
            Some(s) => close_session(s),
            None => no_session(),
        },
        Command::Help => println!("{}", HELP),
        // quit is handled by the main loop
        Command::Quit => {}
    }
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let host = create_host();
    info!(version = VERSION, shards = host.shards().len(), "host ready");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    let mut session: Option<Session> = None;

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("stdin closed");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match parse(line) {
                    Ok(Command::Quit) => break,
                    Ok(cmd) => run(&host, &mut session, cmd),
                    Err(e) => println!("error: {}", e),
                }
            }
            Err(e) => {
                error!("failed to read input: {}", e);
                break;
            }
        }
    }

    if let Some(s) = session.take() {
        close_session(s);
    }
}
