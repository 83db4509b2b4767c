use brook::config::Config;
use brook::core::commands::Outcome;
use brook::core::state::ShellContext;
use brook::error::ShellError;
use brook::flags::Flags;
use brook::highlight::SyntaxHighlighter;
use brook::input::{EditorReader, StreamReader};
use brook::shell::Shell;
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() -> Result<(), ShellError> {
    let flags = Flags::parse();
    let context = ShellContext::from_env()?;
    let config = Config::new(&flags, context.home());
    init_logging(&config);

    let code = if let Some(line) = &flags.command {
        let mut shell = Shell::new(
            StreamReader::new(io::empty()),
            io::stdout(),
            io::stderr(),
            context,
        );
        match shell.execute_line(line) {
            Outcome::Terminate(code) => code,
            Outcome::Continue => 0,
        }
    } else if io::stdin().is_terminal() {
        let reader = EditorReader::new(&config, &context)?;
        Shell::new(reader, io::stdout(), io::stderr(), context)
            .with_highlighter(SyntaxHighlighter::new())
            .run()?
    } else {
        Shell::new(
            StreamReader::new(io::stdin().lock()),
            io::stdout().lock(),
            io::stderr(),
            context,
        )
        .run()?
    };

    std::process::exit(code)
}

fn init_logging(config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = config.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
