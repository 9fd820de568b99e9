use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "valor",
    bin_name = "valor",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse and search hero records from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data source: a file path or an http(s) URL
    #[arg(short, long, global = true, value_name = "LOCATION", help_heading = "Options")]
    pub data: Option<String>,

    /// Use the global configuration
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Record,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Record => "Record Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "browse" | "filters" => Some(CommandGroup::Browse),
            "view" => Some(CommandGroup::Record),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Browse, CommandGroup::Record, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("valor {version}\n"));
    output.push_str("Browse and search hero records from the terminal\n");
    output.push('\n');
    output.push_str("Usage: valor [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -d, --data <LOCATION>  Data source: a file path or an http(s) URL\n");
    output.push_str("  -g, --global           Use the global configuration\n");
    output.push_str("  -v, --verbose          Verbose output\n");
    output.push_str("  -h, --help             Print help\n");
    output.push_str("  -V, --version          Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::List { .. }) => "list",
        Some(Commands::Browse) => "browse",
        Some(Commands::Filters) => "filters",
        Some(Commands::View { .. }) => "view",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally searched and filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search term, matched against name and stories
        #[arg(short, long)]
        search: Option<String>,

        /// Only records from this war
        #[arg(long)]
        war: Option<String>,

        /// Only records from this state
        #[arg(long)]
        state: Option<String>,

        /// Only records with this award
        #[arg(long)]
        award: Option<String>,

        /// Hide the "Showing N of M" line
        #[arg(long)]
        no_count: bool,
    },

    /// Interactive search: type to filter, `:help` for commands
    #[command(alias = "b", display_order = 2)]
    Browse,

    /// Show the wars, states and awards available for filtering
    #[command(display_order = 3)]
    Filters,

    /// Show one record in full
    #[command(alias = "v", display_order = 10)]
    View {
        /// Record id
        id: String,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., data-source)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for valor or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("valor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_defaults_to_none() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.global);
    }

    #[test]
    fn list_takes_search_and_category_filters() {
        let cli = parse(&["list", "-s", "soldiers", "--war", "WWI", "--no-count"]);
        match cli.command {
            Some(Commands::List {
                search,
                war,
                state,
                no_count,
                ..
            }) => {
                assert_eq!(search.as_deref(), Some("soldiers"));
                assert_eq!(war.as_deref(), Some("WWI"));
                assert_eq!(state, None);
                assert!(no_count);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = parse(&["view", "7", "--data", "https://example.com/heroes.json", "-v"]);
        assert_eq!(cli.data.as_deref(), Some("https://example.com/heroes.json"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::View { ref id }) if id == "7"));
    }

    #[test]
    fn grouped_help_lists_every_group() {
        let help = get_grouped_help();
        assert!(help.contains("Browse Commands:"));
        assert!(help.contains("Record Commands:"));
        assert!(help.contains("Miscellaneous:"));
        assert!(help.contains("  view"));
    }

    #[test]
    fn view_requires_an_id() {
        assert!(Cli::try_parse_from(["valor", "view"]).is_err());
    }
}
