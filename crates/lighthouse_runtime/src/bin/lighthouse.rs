//! Lighthouse CLI entry point.

use lighthouse_engine::Resolver;
use lighthouse_runtime::{GameConfig, LineEditor, Repl, RustylineEditor, ScriptEditor, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config_path: Option<PathBuf>,
    script: Option<PathBuf>,
    log_filter: Option<String>,
    no_banner: bool,
    dump_state: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "--dump-state" => config.dump_state = true,
            "-c" | "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                config.config_path = Some(PathBuf::from(path));
            }
            "-s" | "--script" => {
                let path = args.next().ok_or("--script requires a path")?;
                config.script = Some(PathBuf::from(path));
            }
            "--log" => {
                let filter = args.next().ok_or("--log requires a filter")?;
                config.log_filter = Some(filter);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("lighthouse {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match &cli.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.no_banner {
        config = config.with_banner(false);
    }
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    init_tracing(&config.log_filter)?;

    let session = Session::start(Resolver::standard())?;
    info!(script = ?cli.script, "starting game");

    match &cli.script {
        Some(path) => {
            let editor = ScriptEditor::load(path)?;
            play(Repl::with_editor(editor, session, config), cli.dump_state)
        }
        None => {
            let editor = RustylineEditor::new(
                config.history_size,
                session.resolver().vocabulary(),
                session.resolver().table(),
            )?;
            play(Repl::with_editor(editor, session, config), cli.dump_state)
        }
    }
}

fn play<E: LineEditor>(
    mut repl: Repl<E>,
    dump_state: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    repl.run()?;

    if dump_state {
        println!("\x1b[1;36m=== Final State ===\x1b[0m");
        println!("{}", toml::to_string(&repl.session().scene())?);
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mThe Lighthouse of Forgotten Souls\x1b[0m - A text adventure

\x1b[1mUSAGE:\x1b[0m
    lighthouse [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -c, --config PATH    Load settings from a TOML file
    -s, --script PATH    Replay commands from a file, one per line
    --no-banner          Skip the title banner
    --dump-state         Print the final game state as TOML on exit
    --log FILTER         Log filter when RUST_LOG is unset (e.g. lighthouse_engine=debug)

\x1b[1mEXAMPLES:\x1b[0m
    lighthouse                          Play interactively
    lighthouse -s walkthrough.txt       Replay a script
    lighthouse -c lighthouse.toml       Play with custom settings

\x1b[1mIN-GAME COMMANDS:\x1b[0m
    LOOK [object]        Describe the room or something in it
    GET <item>           Pick something up
    USE <item>           Use, combine or give items
    TALK                 Speak to whoever is here
    GO <direction>       Move (N/S/E/W/UP/DOWN)
    INVENTORY            List what you carry
    Ctrl+C               Clear the current line
    Ctrl+D, QUIT         Leave the game"
    );
}
