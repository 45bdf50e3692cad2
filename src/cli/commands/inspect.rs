//! head and history commands - Read-only views of a repository

use std::io::{BufRead, Write};

use anyhow::Result;

use super::{repository, Flow, INVALID_COUNT, NO_COMMITS};
use crate::cli::repl::Session;
use crate::ui::prompts;

/// Show the id of the current head.
pub fn head<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let reply = repository(session, name)?
        .head()
        .map(ToString::to_string)
        .unwrap_or_else(|| NO_COMMITS.to_string());
    session.say(reply)?;
    Ok(Flow::Continue)
}

/// Prompt for a count and show that many recent commits, newest first.
pub fn history<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let Some(answer) = session.ask("How many commits back? ")? else {
        return Ok(Flow::Quit);
    };

    let text = match prompts::parse_count(&answer) {
        Some(n) => repository(session, name)?.history_text(n).ok(),
        None => None,
    };

    match text {
        Some(text) => session.say_raw(&text)?,
        None => session.say(INVALID_COUNT)?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::types::CommitId;
    use crate::ui::output::Verbosity;
    use std::io::Cursor;

    fn session_with(
        input: &'static str,
        messages: &[&str],
    ) -> (Session<Cursor<&'static str>, Vec<u8>>, Vec<CommitId>) {
        let mut session =
            Session::new(Cursor::new(input), Vec::new(), Config::default(), Verbosity::Quiet);
        session.registry_mut().create("r1").unwrap();
        let repo = session.registry_mut().get_mut("r1").unwrap();
        let ids = messages.iter().map(|m| repo.commit(*m)).collect();
        (session, ids)
    }

    fn output(session: Session<Cursor<&'static str>, Vec<u8>>) -> String {
        String::from_utf8(session.into_writer()).unwrap()
    }

    #[test]
    fn head_of_empty_repository() {
        let (mut session, _) = session_with("", &[]);
        head(&mut session, "r1").unwrap();
        assert_eq!(output(session), "No commits\n");
    }

    #[test]
    fn head_shows_latest_id() {
        let (mut session, ids) = session_with("", &["a", "b"]);
        head(&mut session, "r1").unwrap();
        assert_eq!(output(session), format!("{}\n", ids[1]));
    }

    #[test]
    fn history_bounded() {
        let (mut session, ids) = session_with("2\n", &["a", "b", "c"]);
        assert_eq!(history(&mut session, "r1").unwrap(), Flow::Continue);
        assert_eq!(
            output(session),
            format!("{}: c\n{}: b\n", ids[2], ids[1])
        );
    }

    #[test]
    fn history_negative_count() {
        let (mut session, _) = session_with("-1\n", &["a"]);
        history(&mut session, "r1").unwrap();
        assert_eq!(output(session), "Please enter a positive integer\n");
    }

    #[test]
    fn history_not_a_number() {
        let (mut session, _) = session_with("lots\n", &["a"]);
        history(&mut session, "r1").unwrap();
        assert_eq!(output(session), "Please enter a positive integer\n");
    }

    #[test]
    fn history_end_of_input_quits() {
        let (mut session, _) = session_with("", &["a"]);
        assert_eq!(history(&mut session, "r1").unwrap(), Flow::Quit);
    }
}
