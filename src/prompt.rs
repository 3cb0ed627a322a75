//! Interactive prompts.
//!
//! Every gate prints its informational lines, reads one line and compares it
//! against a literal token. There is no validation and no re-prompting: an
//! unrecognised answer is a decline. End of input counts as an empty answer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, SetupError};
use crate::steps::dotfiles::InstallLocation;

/// Token that opts in to a yes/no gate, compared after lowercasing.
pub const AFFIRMATIVE: &str = "y";

/// Token that selects the local chezmoi location, compared verbatim.
pub const LOCAL_LOCATION_CODE: &str = "L";

/// The yes/no questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Zsh,
    NerdFonts,
    Chezmoi,
    Flatpak,
}

impl Gate {
    fn info_lines(self) -> &'static [&'static str] {
        match self {
            Self::Zsh => &["This requires to have zsh installed or have it in the packages.txt file"],
            Self::NerdFonts => &[
                "This will download 1GB of fonts from ryanoasis/nerd-fonts github repo and install them",
            ],
            Self::Chezmoi => &[
                "You can install all your dotfiles using chezmoi",
                "This requires you to have a public github repo called dotfiles with all your dotfiles in it uploaded using chezmoi",
                "This will overwrite your current dotfiles",
            ],
            Self::Flatpak => &[
                "Do you want to install flatpaks?",
                "This will install every entry of the flatpak list as a flatpak application id",
            ],
        }
    }

    fn question(self) -> &'static str {
        match self {
            Self::Zsh => "Do you want to make zsh your default shell? y/n: ",
            Self::NerdFonts => "Do you want to install nerd fonts? y/n: ",
            Self::Chezmoi => "Do you want to install chezmoi and dotfiles? y/n: ",
            Self::Flatpak => "y/n: ",
        }
    }
}

/// True only for the affirmative token, case-insensitively.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase() == AFFIRMATIVE
}

/// Local only for the exact location code; the system path otherwise.
pub fn location_from_answer(answer: &str) -> InstallLocation {
    if answer == LOCAL_LOCATION_CODE {
        InstallLocation::Local
    } else {
        InstallLocation::System
    }
}

/// Line-based prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a yes/no gate.
    pub fn confirm(&mut self, gate: Gate) -> Result<bool> {
        for line in gate.info_lines() {
            writeln!(self.output, "{}", line)?;
        }
        let answer = self.ask_line(gate.question())?;
        let accepted = is_affirmative(&answer);
        debug!("{:?} gate answered {:?} -> {}", gate, answer, accepted);
        Ok(accepted)
    }

    /// Ask where chezmoi should be installed.
    pub fn ask_location(&mut self) -> Result<InstallLocation> {
        writeln!(self.output, "Where do you want to install chezmoi?")?;
        writeln!(self.output, "Recommended is system wide install at /bin")?;
        writeln!(self.output, "But you can also install it in your home directory at ~/bin")?;
        let answer = self.ask_line("Enter location L if you want to install it locally: ")?;
        Ok(location_from_answer(&answer))
    }

    /// Ask for the GitHub account holding the dotfiles repo.
    pub fn ask_username(&mut self) -> Result<String> {
        Ok(self.ask_line("Enter your GitHub username: ")?.trim().to_string())
    }

    /// Print `question` without a newline and read one answer line, line
    /// ending stripped.
    pub fn ask_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| SetupError::prompt(format!("failed to read answer: {}", e)))?;
        if read == 0 {
            debug!("End of input while prompting; treating as empty answer");
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    /// Consume the prompter and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_confirm_accepts_y_in_any_case() {
        assert!(prompter("y\n").confirm(Gate::Zsh).unwrap());
        assert!(prompter("Y\n").confirm(Gate::Zsh).unwrap());
    }

    #[test]
    fn test_confirm_declines_everything_else() {
        for answer in ["n\n", "yes\n", "\n", " y\n", ""] {
            assert!(
                !prompter(answer).confirm(Gate::NerdFonts).unwrap(),
                "answer {:?} should decline",
                answer
            );
        }
    }

    #[test]
    fn test_confirm_handles_crlf() {
        assert!(prompter("y\r\n").confirm(Gate::Flatpak).unwrap());
    }

    #[test]
    fn test_confirm_prints_info_and_question() {
        let mut p = prompter("n\n");
        p.confirm(Gate::Chezmoi).unwrap();
        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("You can install all your dotfiles using chezmoi"));
        assert!(shown.ends_with("Do you want to install chezmoi and dotfiles? y/n: "));
    }

    #[test]
    fn test_location_is_case_sensitive() {
        assert_eq!(prompter("L\n").ask_location().unwrap(), InstallLocation::Local);
        assert_eq!(prompter("l\n").ask_location().unwrap(), InstallLocation::System);
        assert_eq!(prompter("\n").ask_location().unwrap(), InstallLocation::System);
    }

    #[test]
    fn test_username_is_trimmed() {
        assert_eq!(prompter("  octocat \n").ask_username().unwrap(), "octocat");
    }

    #[test]
    fn test_sequential_answers() {
        let mut p = prompter("y\nn\n");
        assert!(p.confirm(Gate::Zsh).unwrap());
        assert!(!p.confirm(Gate::NerdFonts).unwrap());
        // Input exhausted
        assert!(!p.confirm(Gate::Chezmoi).unwrap());
    }
}
