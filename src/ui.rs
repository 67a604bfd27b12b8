#![cfg(feature = "std")]

use std::string::String;

use crate::{Board, Side, TrackingBoard};

const GAP: &str = "    ";

/// Lay two rendered grids next to each other, padding the left column.
pub fn side_by_side(left: &str, right: &str) -> String {
    let width = left.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut left_lines = left.lines();
    let mut right_lines = right.lines();
    let mut out = String::new();
    loop {
        let (l, r) = (left_lines.next(), right_lines.next());
        if l.is_none() && r.is_none() {
            break;
        }
        let l = l.unwrap_or("");
        let pad = width - l.chars().count();
        out.push_str(l);
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(GAP);
        out.push_str(r.unwrap_or(""));
        out.push('\n');
    }
    out
}

/// Print a player's own fleet next to what it knows about the opponent.
pub fn print_player_view(name: &str, board: &Board, tracking: &TrackingBoard) {
    std::println!("\n{}: own fleet / opponent", name);
    std::print!("{}", side_by_side(&board.render(), &tracking.to_string()));
}

/// Print both sides of a match.
pub fn print_match_view(sides: &[Side; 2]) {
    for side in sides {
        print_player_view(side.name(), side.board(), side.tracking());
    }
}
