//! Headless driver: one command per input line, one JSON snapshot per output line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::core::game::Game;

#[derive(Serialize)]
struct ScriptError {
    error: String,
}

/// Run `game` against the commands in `input`, writing snapshots to `output`.
///
/// The initial state is written before any command. Blank lines and `#`
/// comments are skipped; a line that does not parse writes an error object
/// and the run carries on.
pub fn run_script<G, I, O>(game: &mut G, input: I, mut output: O) -> Result<()>
where
    G: Game,
    I: BufRead,
    O: Write,
{
    write_json(&mut output, game.state())?;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read script input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<G::Action>() {
            Ok(action) => {
                game.apply(action);
                write_json(&mut output, game.state())?;
            }
            Err(e) => {
                warn!(line = number + 1, "bad command: {}", e);
                write_json(&mut output, &ScriptError { error: e.to_string() })?;
            }
        }
    }

    output.flush().context("failed to flush script output")
}

fn write_json<W: Write, T: Serialize + ?Sized>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, value).context("failed to encode snapshot")?;
    output.write_all(b"\n").context("failed to write snapshot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::play_nine::PlayNineGame;
    use serde_json::Value;

    fn run(script: &str) -> Vec<Value> {
        let mut game = PlayNineGame::new(Some(3));
        let mut out = Vec::new();
        run_script(&mut game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initial_snapshot_only() {
        let snapshots = run("");
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0]["redraws_remaining"], 5);
        assert_eq!(snapshots[0]["outcome"], "in_progress");
        assert_eq!(snapshots[0]["verdict"], "unknown");
    }

    #[test]
    fn test_commands_produce_snapshots() {
        let snapshots = run("select 2\n\n# comment\nselect 5\nunselect 2\nredraw\n");
        assert_eq!(snapshots.len(), 5);
        assert_eq!(snapshots[2]["selected"], serde_json::json!([2, 5]));
        assert_eq!(snapshots[3]["selected"], serde_json::json!([5]));
        assert_eq!(snapshots[4]["selected"], serde_json::json!([]));
        assert_eq!(snapshots[4]["redraws_remaining"], 4);
    }

    #[test]
    fn test_bad_line_reports_and_continues() {
        let snapshots = run("select nine\nselect 9\n");
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1]["error"], "'nine' is not a digit");
        assert_eq!(snapshots[2]["selected"], serde_json::json!([9]));
    }

    #[test]
    fn test_out_of_range_digits_are_noops() {
        let snapshots = run("select 300\nselect -1\nselect 0\n");
        assert_eq!(snapshots.len(), 4);
        for snapshot in &snapshots[1..] {
            assert!(snapshot.get("error").is_none());
            assert_eq!(snapshot, &snapshots[0]);
        }
    }

    #[test]
    fn test_redraws_run_out() {
        let snapshots = run(&"redraw\n".repeat(6));
        let last = snapshots.last().unwrap();
        assert_eq!(last["redraws_remaining"], 0);
        assert_eq!(last["outcome"], "lost");
    }
}
