//! CLI command definitions

use analyzer_domain::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Banner with the result text
    Text,
    /// One JSON object per result
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for doc-analyzer
#[derive(Parser, Debug)]
#[command(name = "doc-analyzer")]
#[command(author, version, about = "Summarize documents and answer questions about them with Gemini")]
#[command(long_about = r#"
doc-analyzer sends a document to the Gemini API and shows either a
three-sentence summary or an answer grounded only in the document.

Front ends:
  summarize   One-shot summary, then exit
  ask         One-shot question, then exit
  chat        Interactive loop (default)
  form        Full-screen form with key, document and question fields

The API key is read from GEMINI_API_KEY (see [gemini] api_key_env).

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. DOC_ANALYZER_* environment variables     e.g. DOC_ANALYZER_GEMINI__MODEL
3. ./analyzer.toml                          Project-level config
4. ~/.config/doc-analyzer/config.toml       Global config

Example:
  doc-analyzer summarize --file resume.txt
  doc-analyzer ask --question "Which degree does the candidate hold?" --file resume.txt
  cat notes.md | doc-analyzer summarize --file - --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Model to use (overrides [gemini] model)
    #[arg(short, long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subcommand to run; `chat` when none was given
    pub fn subcommand_or_default(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::Chat {
            document: DocumentArgs::default(),
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Summarize the document in three sentences
    Summarize {
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Answer a question using only the document
    Ask {
        /// The question to answer
        #[arg(short = 'Q', long, value_name = "QUESTION")]
        question: String,

        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Interactive loop: summarize, ask and exit against one document
    Chat {
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Full-screen form with key, document and question fields
    Form {
        #[command(flatten)]
        document: DocumentArgs,
    },
}

impl CliCommand {
    pub fn document(&self) -> &DocumentArgs {
        match self {
            CliCommand::Summarize { document }
            | CliCommand::Ask { document, .. }
            | CliCommand::Chat { document }
            | CliCommand::Form { document } => document,
        }
    }
}

/// Where the document comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentArgs {
    /// Read the document from a file (`-` for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Use this text as the document
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl DocumentArgs {
    /// Read the document text, if a source was given.
    ///
    /// `None` means the caller should fall back to the built-in sample.
    pub fn read(&self) -> std::io::Result<Option<String>> {
        if let Some(text) = &self.text {
            return Ok(Some(text.clone()));
        }
        match self.file.as_deref() {
            None => Ok(None),
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)?;
                Ok(Some(buf))
            }
            Some(path) => std::fs::read_to_string(path).map(Some),
        }
    }

    pub fn is_given(&self) -> bool {
        self.file.is_some() || self.text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_chat() {
        let cli = Cli::try_parse_from(["doc-analyzer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.subcommand_or_default(), CliCommand::Chat { .. }));
    }

    #[test]
    fn test_ask_parses_question_and_text() {
        let cli = Cli::try_parse_from([
            "doc-analyzer",
            "ask",
            "--question",
            "What degree?",
            "--text",
            "B.Tech in CS",
        ])
        .unwrap();

        assert_eq!(
            cli.subcommand_or_default(),
            CliCommand::Ask {
                question: "What degree?".to_string(),
                document: DocumentArgs {
                    file: None,
                    text: Some("B.Tech in CS".to_string()),
                },
            }
        );
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["doc-analyzer", "ask", "--text", "x"]).is_err());
    }

    #[test]
    fn test_file_and_text_conflict() {
        let result = Cli::try_parse_from([
            "doc-analyzer",
            "summarize",
            "--file",
            "a.txt",
            "--text",
            "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "doc-analyzer",
            "summarize",
            "-vv",
            "--output",
            "json",
            "--model",
            "gemini-2.5-pro",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_read_text_and_missing_source() {
        let args = DocumentArgs {
            file: None,
            text: Some("inline".to_string()),
        };
        assert_eq!(args.read().unwrap().as_deref(), Some("inline"));
        assert_eq!(DocumentArgs::default().read().unwrap(), None);
        assert!(!DocumentArgs::default().is_given());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let args = DocumentArgs {
            file: Some(PathBuf::from("/nonexistent/doc-analyzer/input.txt")),
            text: None,
        };
        assert!(args.read().is_err());
    }
}
