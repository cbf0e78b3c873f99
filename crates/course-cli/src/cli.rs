use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `course` binary.
#[derive(Debug, Parser)]
#[command(name = "course", version, about = "Course content service - local RPC transport")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Extra TOML config file layered below environment variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// CreateCourse: insert a course tree read as JSON
    Create {
        /// Request file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// UpdateCourse: update a course tree read as JSON
    Update {
        /// Request file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// GetCourse: print a course with its themes and lessons
    Get { id: i64 },
    /// GetAllCourses: list course summaries
    List,
    /// DeleteCourse: delete a course row
    Delete { id: i64 },
    /// Print the JSON schema of a wire message
    Schema { message: MessageKind },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum MessageKind {
    CreateCourseRequest,
    CreateCourseResponse,
    UpdateCourseRequest,
    SuccessResponse,
    GetCourseRequest,
    GetCourseResponse,
    GetAllCoursesResponse,
    DeleteCourseRequest,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, MessageKind, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["course", "--format", "raw", "--db", ":memory:", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.db.as_deref(), Some(":memory:"));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn get_takes_positional_id() {
        let cli = Cli::try_parse_from(["course", "get", "42", "--verbose"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Get { id: 42 }));
    }

    #[test]
    fn schema_takes_message_kind() {
        let cli = Cli::try_parse_from(["course", "schema", "update-course-request"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema {
                message: MessageKind::UpdateCourseRequest
            }
        ));
    }
}
