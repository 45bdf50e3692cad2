//! commit, reset, drop and squash commands - Operations that change history

use std::io::{BufRead, Write};

use anyhow::Result;

use super::{repository, Flow, INVALID_COUNT, NO_COMMITS};
use crate::cli::repl::Session;
use crate::ui::prompts;

/// Prompt for a message and record a new commit.
pub fn commit<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let Some(message) = session.ask("Enter commit message: ")? else {
        return Ok(Flow::Quit);
    };

    let id = repository(session, name)?.commit(message);
    session.say(format!("  New commit: {}", id))?;
    Ok(Flow::Continue)
}

/// Prompt for a count and move head back that many commits.
pub fn reset<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let Some(answer) = session.ask("How many commits back? ")? else {
        return Ok(Flow::Quit);
    };

    let new_head = match prompts::parse_count(&answer) {
        Some(n) => {
            let repo = repository(session, name)?;
            repo.reset(n).ok().map(|()| {
                repo.head()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| NO_COMMITS.to_string())
            })
        }
        None => None,
    };

    match new_head {
        Some(head) => session.say(format!("  New head: {}", head))?,
        None => session.say(INVALID_COUNT)?,
    }
    Ok(Flow::Continue)
}

/// Prompt for an id and remove that commit.
pub fn drop<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let Some(answer) = session.ask("Enter ID to drop: ")? else {
        return Ok(Flow::Quit);
    };

    let reply = match repository(session, name)?.drop(answer.trim()) {
        Some(id) => format!("  Dropped {}", id),
        None => "  No commit dropped!".to_string(),
    };
    session.say(reply)?;
    Ok(Flow::Continue)
}

/// Prompt for an id and fold its newer neighbour into it.
pub fn squash<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let Some(answer) = session.ask("Enter ID to squash: ")? else {
        return Ok(Flow::Quit);
    };

    let reply = match repository(session, name)?.squash(answer.trim()) {
        Some(id) => format!("  Squashed and removed {}", id),
        None => "  No commits squashed!".to_string(),
    };
    session.say(reply)?;
    Ok(Flow::Continue)
}
