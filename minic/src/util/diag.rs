use color_print::cprintln;
use minic::Error;

/// An error together with the source it was raised on, ready to be shown.
#[derive(Debug)]
pub struct Diag {
    error: Error,
    source: Option<(String, String)>,
}

impl Diag {
    pub fn with_source(mut self, file: &str, src: &str) -> Self {
        self.source = Some((file.to_string(), src.to_string()));
        self
    }

    pub fn report(&self) {
        cprintln!("<red,bold>error</>: {}", self.error);
        let Some((file, src)) = &self.source else {
            return;
        };
        match self.error.location() {
            Some(at) => {
                let raw = src.lines().nth(at.line.saturating_sub(1)).unwrap_or("");
                cprintln!("     <blue>--></> <underline>{}</>", at);
                cprintln!("      <blue>|</>");
                cprintln!(" <blue>{:>4} |</> {}", at.line, raw);
                let pad = " ".repeat(at.col.saturating_sub(1));
                cprintln!("      <blue>|</> {}<red,bold>^</>", pad);
            }
            None => cprintln!("     <blue>--></> <underline>{}</>", file),
        }
        if let Some(note) = self.note() {
            cprintln!("<green,bold>note</>: {}", note);
        }
    }

    fn note(&self) -> Option<&'static str> {
        match self.error {
            Error::UndeclaredVariable(..)
            | Error::DuplicateDeclaration(..)
            | Error::DivisionByZero(..)
            | Error::ReservedName(..) => {
                Some("line numbers count top-level statements inside `main`")
            }
            Error::UnexpectedEOF => Some("the program must end with the closing `}` of `main`"),
            _ => None,
        }
    }
}

impl From<Error> for Diag {
    fn from(error: Error) -> Self {
        Diag {
            error,
            source: None,
        }
    }
}
