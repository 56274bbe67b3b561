//! `man` command: long-form description plus per-command help

use clap::{Command, CommandFactory};

use super::Cli;

const MAN_HEAD: &str = "\
3xd is a tool for extracting information row by row. A number of commands and options are supported.
3xd supports config files in JSON and YAML format. Please check config_template.[json/yaml]. If a config is present in the root directory then the arguments
will be provided from there. Note that the JSON file has priority over the YAML file.
To get help for all the commands use $3xd [-h | --help].
To get help for an individual command use $3xd <command> [-h | --help].";

/// Subcommands whose generated help is appended to the man text.
const DOCUMENTED_COMMANDS: [&str; 2] = ["import", "sync"];

pub fn render() -> String {
    let mut cmd = Cli::command();
    cmd.build();

    let mut sections = vec![MAN_HEAD.to_string()];
    for name in DOCUMENTED_COMMANDS {
        if let Some(sub) = cmd.find_subcommand_mut(name) {
            sections.push(render_subcommand_help(sub));
        }
    }
    sections.join("\n\n")
}

fn render_subcommand_help(sub: &mut Command) -> String {
    sub.render_help().to_string().trim_end().to_string()
}

pub fn run() {
    println!("{}", render());
}
