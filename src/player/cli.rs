use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::AttackResult,
    coord::{format_coord, parse_coord},
};

use super::Player;

/// Human player reading coordinates such as `B7` from `input` and drawing
/// boards to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    reveal_opponent: bool,
    line: String,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reveal_opponent: false,
            line: String::new(),
        }
    }

    /// Also draw the opponent's ships unhidden at the start of each turn.
    pub fn reveal_opponent(mut self, reveal: bool) -> Self {
        self.reveal_opponent = reveal;
        self
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<&str> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            bail!("input closed before the game ended");
        }
        Ok(self.line.trim())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn begin_turn(&mut self, own: &Board, target: &Board) -> anyhow::Result<()> {
        writeln!(self.output, "\n\tMY FLEET")?;
        write!(self.output, "{}", own.full_view())?;
        writeln!(self.output, "\n\tMY SHOTS")?;
        write!(self.output, "{}", target.fog_view())?;
        if self.reveal_opponent {
            writeln!(self.output, "\n\tOPPONENT FLEET")?;
            write!(self.output, "{}", target.full_view())?;
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        loop {
            write!(self.output, "Enter attack coordinates (letter number): ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_coord(line, target.size()) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "Invalid coordinate: {}", e)?,
            }
        }
    }

    fn handle_guess_result(
        &mut self,
        coord: (usize, usize),
        result: AttackResult,
    ) -> anyhow::Result<()> {
        let at = format_coord(coord.0, coord.1);
        match result {
            AttackResult::Hit => writeln!(self.output, "{} -> hit!", at)?,
            AttackResult::Miss => writeln!(self.output, "{} -> miss.", at)?,
            AttackResult::AlreadyAttacked => {
                writeln!(self.output, "You already fired at {}, try again.", at)?
            }
            AttackResult::OutOfBounds => {
                writeln!(self.output, "{} is outside the board, try again.", at)?
            }
        }
        Ok(())
    }

    fn handle_opponent_guess(
        &mut self,
        coord: (usize, usize),
        result: AttackResult,
    ) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Opponent fired at {} -> {:?}",
            format_coord(coord.0, coord.1),
            result
        )?;
        Ok(())
    }
}
