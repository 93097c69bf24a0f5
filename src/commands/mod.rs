//! Commands Module
//!
//! The interactive REPL: an explicitly constructed command registry and the
//! loop that reads user input, dispatches commands, and tracks pagination
//! state between them.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::Result;

// == Input Cleaning ==
/// Lowercases the input and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Command Table ==
/// What a command does, dispatched on by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
}

/// One entry in the command table.
#[derive(Debug, Clone)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// The REPL's command table.
///
/// Constructed explicitly and handed to the REPL rather than living in
/// process-wide state, so tests can build their own tables.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// The standard Pokédex command set.
    pub fn standard() -> Self {
        Self {
            commands: vec![
                Command {
                    name: "help",
                    description: "Displays a help message",
                    kind: CommandKind::Help,
                },
                Command {
                    name: "exit",
                    description: "Exit the Pokedex",
                    kind: CommandKind::Exit,
                },
                Command {
                    name: "map",
                    description: "Displays the names of the next 20 location areas",
                    kind: CommandKind::Map,
                },
                Command {
                    name: "mapb",
                    description: "Displays the names of the previous 20 location areas",
                    kind: CommandKind::MapBack,
                },
                Command {
                    name: "explore",
                    description: "Lists the Pokemon found in a location area",
                    kind: CommandKind::Explore,
                },
            ],
        }
    }

    /// Looks up a command by name.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Iterates the table in registration order, for the help listing.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

// == REPL ==
/// The interactive loop. Owns the API client, the command table, and the
/// pagination cursors shared by `map` and `mapb`.
pub struct Repl {
    client: PokeApiClient,
    registry: CommandRegistry,
    next: Option<String>,
    previous: Option<String>,
}

impl Repl {
    pub fn new(client: PokeApiClient, registry: CommandRegistry) -> Self {
        Self {
            client,
            registry,
            next: None,
            previous: None,
        }
    }

    /// Runs the prompt loop until `exit` or end of input.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Pokedex > ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // stdin closed
                break;
            };

            let words = clean_input(&line);
            let Some(first) = words.first() else {
                continue;
            };

            let Some(command) = self.registry.lookup(first) else {
                println!("Unknown command");
                continue;
            };

            let kind = command.kind;
            debug!(command = command.name, "dispatching");

            if kind == CommandKind::Exit {
                println!("Closing the Pokedex... Goodbye!");
                break;
            }

            if let Err(err) = self.dispatch(kind, &words).await {
                println!("{err}");
            }
        }

        Ok(())
    }

    async fn dispatch(&mut self, kind: CommandKind, words: &[String]) -> Result<()> {
        match kind {
            CommandKind::Help => {
                self.command_help();
                Ok(())
            }
            CommandKind::Map => self.command_map().await,
            CommandKind::MapBack => self.command_map_back().await,
            CommandKind::Explore => self.command_explore(words.get(1)).await,
            // handled by the loop before dispatch
            CommandKind::Exit => Ok(()),
        }
    }

    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in self.registry.iter() {
            println!("{}: {}", command.name, command.description);
        }
    }

    /// `map`: the next page of location areas (the first page on the first
    /// call).
    async fn command_map(&mut self) -> Result<()> {
        let page = self.client.location_page(self.next.as_deref()).await?;

        self.next = page.next;
        self.previous = page.previous;

        for location in &page.results {
            println!("{}", location.name);
        }
        Ok(())
    }

    /// `mapb`: the previous page of location areas.
    async fn command_map_back(&mut self) -> Result<()> {
        let Some(url) = self.previous.clone() else {
            println!("you're on the first page");
            return Ok(());
        };

        let page = self.client.location_page(Some(&url)).await?;

        self.next = page.next;
        self.previous = page.previous;

        for location in &page.results {
            println!("{}", location.name);
        }
        Ok(())
    }

    /// `explore <area>`: the Pokémon encountered in one location area.
    async fn command_explore(&mut self, area: Option<&String>) -> Result<()> {
        let Some(area) = area else {
            println!("usage: explore <area-name>");
            return Ok(());
        };

        println!("Exploring {area}...");
        let names = self.client.pokemon_in_area(area).await?;

        println!("Found Pokemon:");
        for name in names {
            println!(" - {name}");
        }
        Ok(())
    }
}
