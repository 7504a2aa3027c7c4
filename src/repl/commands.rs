//! Command table
//!
//! Names and help text for every REPL command. Behaviour lives on
//! [`Explorer`](super::Explorer).

/// A command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Stats,
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Stats,
    ];

    /// Looks up a command by the word the user typed.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Stats => "stats",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Get the next page of locations",
            Command::Mapb => "Get the previous page of locations",
            Command::Explore => "Explore a location area: explore <area>",
            Command::Catch => "Try to catch a pokemon in the current area: catch <name>",
            Command::Inspect => "Inspect a pokemon in your pokedex: inspect <name>",
            Command::Pokedex => "Lists all pokemon in your pokedex",
            Command::Stats => "Show response cache statistics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_command() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
    }
}
