use std::collections::{BTreeMap, HashSet};

use crate::game::grid::Grid;
use crate::models::{Match, Position, WordInfo};

/// Scan the grid for dictionary words along rows and columns.
///
/// Every run of contiguous occupied cells is tested at every length, both in
/// reading order and with its characters reversed, so a word stacked in the
/// opposite physical order still counts as the same word. A single `visited`
/// set is shared across both passes: a span is emitted only if it claims at
/// least one fresh cell, which allows nested and crossing matches while
/// suppressing a second report of an identical span. A hit never stops the
/// run from extending, so longer words containing shorter ones are still
/// found.
///
/// Matches come back in discovery order: all horizontal matches row by row,
/// then all vertical matches column by column. No match is not an error; the
/// result is simply empty.
pub fn find_matches(grid: &Grid, words: &BTreeMap<String, WordInfo>) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut visited: HashSet<Position> = HashSet::new();

    // Horizontal pass (left to right).
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let mut current = String::new();
            for k in x..grid.width() {
                let Some(token) = grid.get(k, y) else {
                    break;
                };
                current.push_str(token);
                if let Some(info) = resolve(words, &current) {
                    let cells: Vec<Position> =
                        (x..=k).map(|cx| Position { x: cx, y }).collect();
                    emit_if_new(&mut matches, &mut visited, cells, info);
                }
            }
        }
    }

    // Vertical pass (top to bottom).
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let mut current = String::new();
            for k in y..grid.height() {
                let Some(token) = grid.get(x, k) else {
                    break;
                };
                current.push_str(token);
                if let Some(info) = resolve(words, &current) {
                    let cells: Vec<Position> =
                        (y..=k).map(|cy| Position { x, y: cy }).collect();
                    emit_if_new(&mut matches, &mut visited, cells, info);
                }
            }
        }
    }

    matches
}

/// Look a candidate up as-is, then with its character order reversed.
fn resolve<'a>(words: &'a BTreeMap<String, WordInfo>, text: &str) -> Option<&'a WordInfo> {
    if let Some(info) = words.get(text) {
        return Some(info);
    }
    let reversed: String = text.chars().rev().collect();
    words.get(&reversed)
}

fn emit_if_new(
    matches: &mut Vec<Match>,
    visited: &mut HashSet<Position>,
    cells: Vec<Position>,
    info: &WordInfo,
) {
    let is_new = cells.iter().any(|cell| !visited.contains(cell));
    if !is_new {
        return;
    }
    visited.extend(cells.iter().copied());
    matches.push(Match {
        cells,
        kanji: info.kanji.clone(),
        level: info.level,
    });
}
