use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section to read from the profile file. Default is 'default'.
    /// A missing profile leaves the endpoint to --endpoint or SYNTAXGUARD_ENDPOINT.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Correction endpoint URL, overrides environment and profile
    #[clap(short = 'e', long, help = "correction service endpoint URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[clap(
        short = 't',
        long,
        help = "request timeout in seconds",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: Option<u64>,

    /// Disable coloured output
    #[clap(long, help = "disable coloured output", default_value = "false")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<ClapCommand>,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Interactive correction form (default)
    Session,
    /// Print the style guide and exit
    Guide,
    /// Correct one piece of text and exit
    Correct {
        /// Text to correct; read from --file or stdin when omitted
        text: Option<String>,
        /// Read the text from a file
        #[clap(short = 'f', long)]
        file: Option<PathBuf>,
        /// Copy the corrected text to the clipboard
        #[clap(short = 'c', long, default_value = "false")]
        copy: bool,
    },
}

/// What the program should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Session,
    Guide,
    Correct {
        text: Option<String>,
        file: Option<PathBuf>,
        copy: bool,
    },
}

impl AppCommand {
    fn from_clap(command: Option<ClapCommand>) -> Self {
        match command {
            None | Some(ClapCommand::Session) => AppCommand::Session,
            Some(ClapCommand::Guide) => AppCommand::Guide,
            Some(ClapCommand::Correct { text, file, copy }) => {
                AppCommand::Correct { text, file, copy }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    color: bool,
    command: AppCommand,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn command(&self) -> &AppCommand {
        &self.command
    }
}

impl CommandLineArgs {
    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            endpoint: args.endpoint,
            timeout: args.timeout.map(Duration::from_secs),
            color: !args.no_color,
            command: AppCommand::from_clap(args.command),
        }
    }
}
