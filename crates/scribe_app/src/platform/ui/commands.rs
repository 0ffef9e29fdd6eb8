use scribe_core::Msg;

pub const HELP_TEXT: &str = "\
Paste a YouTube watch URL and press Enter to extract its transcript.
  :outline  (:o)  condense the displayed text into a quote outline
  :copy     (:c)  copy the displayed text to the clipboard
  :help     (:h)  show this help
  :quit     (:q)  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a command is the URL field's new content.
    Submit(String),
    Outline,
    Copy,
    Help,
    Quit,
}

impl Command {
    /// Messages the command feeds into the core, in order.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Submit(text) => vec![Msg::InputChanged(text), Msg::SubmitClicked],
            Command::Outline => vec![Msg::OutlineClicked],
            Command::Copy => vec![Msg::CopyClicked],
            Command::Help | Command::Quit => Vec::new(),
        }
    }
}

pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        ":outline" | ":o" => Command::Outline,
        ":copy" | ":c" => Command::Copy,
        ":help" | ":h" => Command::Help,
        ":quit" | ":q" => Command::Quit,
        _ => Command::Submit(line.to_string()),
    }
}
