use flsh::config::Options;
use flsh::input::{EditorSource, LineSource, StdinSource};
use flsh::{Interpreter, PROGRAM};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let options: Options = argh::from_env();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{PROGRAM}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let mut source: Box<dyn LineSource> = if options.use_editor() {
        debug!("reading from the line editor");
        Box::new(EditorSource::new()?)
    } else {
        debug!("reading plain lines from standard input");
        Box::new(StdinSource::stdin())
    };

    Interpreter::default().repl(source.as_mut(), &options.prompt)
}
