//! CLI argument definitions using clap

use clap::Parser;

/// precis - Summarize text, web articles and YouTube videos with Gemini
#[derive(Parser, Debug)]
#[command(name = "precis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text, article URL or YouTube URL to summarize.
    /// Read from stdin, or prompted for, when omitted.
    pub input: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_optional() {
        let cli = Cli::try_parse_from(["precis"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn input_is_taken_verbatim() {
        let cli = Cli::try_parse_from(["precis", "https://youtu.be/abc?t=1"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("https://youtu.be/abc?t=1"));
    }

    #[test]
    fn only_one_input_is_accepted() {
        assert!(Cli::try_parse_from(["precis", "one", "two"]).is_err());
    }
}
