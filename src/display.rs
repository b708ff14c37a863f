use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use gomoku_core::{Cell, Game, Position};

/// Draws the full board with row and column labels
pub fn display(game: &Game) -> Result<()> {
    let mut stdout = stdout();
    let size = game.board().size();

    // column header
    stdout.queue(PrintStyledContent(style(format!("{:>3}", ""))))?;
    for col in 0..size {
        stdout.queue(PrintStyledContent(style(format!("{:>2} ", col))))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;

    for row in 0..size {
        stdout.queue(PrintStyledContent(style(format!("{:>2} ", row))))?;
        for col in 0..size {
            let cell = game.cell(Position::new(row as i32, col as i32))?;
            stdout.queue(PrintStyledContent(
                style(match cell {
                    Cell::Empty => " . ",
                    _ => " O ",
                })
                .attribute(Attribute::Bold)
                .on(Color::DarkYellow)
                .with(match cell {
                    Cell::Black => Color::Black,
                    Cell::White => Color::White,
                    Cell::Empty => Color::DarkGrey,
                }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
