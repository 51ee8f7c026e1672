use std::fmt;

use clap::Subcommand;

use crate::command;

///////////////////////////////
/// Possible subcommands to parse
#[derive(Subcommand)]
pub enum Commands {
    Demo(command::DemoCMD),
    Run(command::RunCMD),
    Sort(command::SortCMD),
}

impl Commands {
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        match self {
            Commands::Demo(cmd) => cmd.try_execute(),
            Commands::Run(cmd) => cmd.try_execute(),
            Commands::Sort(cmd) => cmd.try_execute(),
        }
    }
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmd = match self {
            Commands::Demo(_) => "Demo",
            Commands::Run(_) => "Run",
            Commands::Sort(_) => "Sort",
        };
        write!(f, "{}", cmd)
    }
}
