use clap::Parser;

/// Top-level CLI definition. The tool takes no options of its own; clap
/// still provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "wordfiles",
    version,
    about = "Create ./words and fill it with word0001.txt through word2000.txt"
)]
pub struct Cli {}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_bare_invocation() {
        assert!(Cli::try_parse_from(["wordfiles"]).is_ok());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["wordfiles", "other-dir"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["wordfiles", "--count", "10"]).is_err());
    }
}
