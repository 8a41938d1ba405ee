//! Text formats for puzzles and programs.
//!
//! The engine core is format-free; loading saved puzzles and programs is
//! this Host's concern. Both formats are line-oriented: `;` starts a
//! comment, blank lines are ignored.
//!
//! Puzzle files:
//!
//! ```text
//! ; a 3-wide red strip
//! grid
//! rrR
//! end
//! robot 0 0 right
//! slots 3 0 0 0 0
//! allow advance turn-left turn-right paint no-op call
//! ```
//!
//! Grid characters: `.` void, `r`/`g`/`b` colored tile, `R`/`G`/`B`
//! colored tile with a goal, `n` uncolored tile, `N` uncolored with a
//! goal. Row 0 is y = 0; columns are x. The `allow` line is optional and
//! defaults to every kind.
//!
//! Program files, one line per function, `-` for an empty slot, `?color`
//! for a guard:
//!
//! ```text
//! f1: advance?red call-f2 -
//! f2: paint-blue advance
//! ```

use std::collections::BTreeSet;

use gridbot_common::{
    instruction::ALL_KIND_TAGS, Direction, FuncName, Grid, Instruction, Kind, KindTag, PaintColor,
    Position, Program, Puzzle, PuzzleError, Robot, Tile, FUNCTION_COUNT,
};
use thiserror::Error;

/// Errors from parsing puzzle or program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: unknown grid character '{ch}'")]
    BadGridChar { line: usize, ch: char },

    #[error("line {line}: malformed '{what}' line")]
    Malformed { line: usize, what: &'static str },

    #[error("line {line}: unknown instruction '{token}'")]
    UnknownInstruction { line: usize, token: String },

    #[error("line {line}: unknown color '{token}'")]
    UnknownColor { line: usize, token: String },

    #[error("line {line}: unknown direction '{token}'")]
    UnknownDirection { line: usize, token: String },

    #[error("line {line}: unknown kind '{token}' in allow list")]
    UnknownKind { line: usize, token: String },

    #[error("line {line}: unknown function '{token}'")]
    UnknownFunctionName { line: usize, token: String },

    #[error("line {line}: {count} instructions but {function} has {capacity} slots")]
    TooManyInstructions {
        line: usize,
        function: &'static str,
        count: usize,
        capacity: usize,
    },

    #[error("missing '{0}' section")]
    MissingSection(&'static str),

    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] PuzzleError),
}

/// Strip a `;` comment and surrounding whitespace.
fn clean(line: &str) -> &str {
    let line = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };
    line.trim()
}

fn parse_color(token: &str, line: usize) -> Result<PaintColor, ParseError> {
    match token {
        "red" => Ok(PaintColor::Red),
        "green" => Ok(PaintColor::Green),
        "blue" => Ok(PaintColor::Blue),
        _ => Err(ParseError::UnknownColor {
            line,
            token: token.to_string(),
        }),
    }
}

fn parse_direction(token: &str, line: usize) -> Result<Direction, ParseError> {
    match token {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        _ => Err(ParseError::UnknownDirection {
            line,
            token: token.to_string(),
        }),
    }
}

fn parse_func_name(token: &str, line: usize) -> Result<FuncName, ParseError> {
    match token {
        "f1" => Ok(FuncName::F1),
        "f2" => Ok(FuncName::F2),
        "f3" => Ok(FuncName::F3),
        "f4" => Ok(FuncName::F4),
        "f5" => Ok(FuncName::F5),
        _ => Err(ParseError::UnknownFunctionName {
            line,
            token: token.to_string(),
        }),
    }
}

fn parse_kind_tag(token: &str, line: usize) -> Result<KindTag, ParseError> {
    match token {
        "advance" => Ok(KindTag::Advance),
        "turn-left" => Ok(KindTag::TurnLeft),
        "turn-right" => Ok(KindTag::TurnRight),
        "paint" => Ok(KindTag::Paint),
        "no-op" => Ok(KindTag::NoOp),
        "call" => Ok(KindTag::Call),
        _ => Err(ParseError::UnknownKind {
            line,
            token: token.to_string(),
        }),
    }
}

fn tile_for(ch: char, line: usize) -> Result<Option<Tile>, ParseError> {
    let tile = match ch {
        '.' => return Ok(None),
        'r' => Tile::new(Some(PaintColor::Red), false),
        'g' => Tile::new(Some(PaintColor::Green), false),
        'b' => Tile::new(Some(PaintColor::Blue), false),
        'R' => Tile::new(Some(PaintColor::Red), true),
        'G' => Tile::new(Some(PaintColor::Green), true),
        'B' => Tile::new(Some(PaintColor::Blue), true),
        'n' => Tile::new(None, false),
        'N' => Tile::new(None, true),
        _ => return Err(ParseError::BadGridChar { line, ch }),
    };
    Ok(Some(tile))
}

/// Parse a puzzle definition from text.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, ParseError> {
    let mut grid: Option<Grid> = None;
    let mut robot: Option<Robot> = None;
    let mut slots: Option<[usize; FUNCTION_COUNT]> = None;
    let mut allowed: Option<BTreeSet<KindTag>> = None;

    let mut lines = text.lines().enumerate();
    while let Some((idx, raw)) = lines.next() {
        let line_num = idx + 1;
        let line = clean(raw);
        if line.is_empty() {
            continue;
        }
        let mut words = line.split_whitespace();
        match words.next() {
            Some("grid") => {
                let mut tiles = Grid::new();
                let mut y = 0;
                loop {
                    let Some((row_idx, row_raw)) = lines.next() else {
                        return Err(ParseError::MissingSection("end"));
                    };
                    let row = clean(row_raw);
                    if row == "end" {
                        break;
                    }
                    if row.is_empty() {
                        continue;
                    }
                    for (x, ch) in row.chars().enumerate() {
                        if let Some(tile) = tile_for(ch, row_idx + 1)? {
                            tiles.insert(Position::new(x as i32, y), tile);
                        }
                    }
                    y += 1;
                }
                grid = Some(tiles);
            }
            Some("robot") => {
                let x: i32 = words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .ok_or(ParseError::Malformed {
                        line: line_num,
                        what: "robot",
                    })?;
                let y: i32 = words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .ok_or(ParseError::Malformed {
                        line: line_num,
                        what: "robot",
                    })?;
                let facing = words.next().ok_or(ParseError::Malformed {
                    line: line_num,
                    what: "robot",
                })?;
                robot = Some(Robot::new(
                    Position::new(x, y),
                    parse_direction(facing, line_num)?,
                ));
            }
            Some("slots") => {
                let mut caps = [0usize; FUNCTION_COUNT];
                for cap in &mut caps {
                    *cap = words
                        .next()
                        .and_then(|w| w.parse().ok())
                        .ok_or(ParseError::Malformed {
                            line: line_num,
                            what: "slots",
                        })?;
                }
                slots = Some(caps);
            }
            Some("allow") => {
                let mut set = BTreeSet::new();
                for word in words {
                    set.insert(parse_kind_tag(word, line_num)?);
                }
                allowed = Some(set);
            }
            _ => {
                return Err(ParseError::Malformed {
                    line: line_num,
                    what: "puzzle",
                })
            }
        }
    }

    let grid = grid.ok_or(ParseError::MissingSection("grid"))?;
    let robot = robot.ok_or(ParseError::MissingSection("robot"))?;
    let slots = slots.ok_or(ParseError::MissingSection("slots"))?;
    let allowed = allowed.unwrap_or_else(|| ALL_KIND_TAGS.into_iter().collect());

    Ok(Puzzle::new(grid, robot, slots, allowed)?)
}

/// Parse one instruction token, e.g. `advance`, `paint-red`, `call-f2`,
/// or any of those with a `?color` guard suffix.
fn parse_instruction(token: &str, line: usize) -> Result<Instruction, ParseError> {
    let (body, guard) = match token.split_once('?') {
        Some((body, color)) => (body, Some(parse_color(color, line)?)),
        None => (token, None),
    };

    let kind = match body {
        "advance" => Kind::Advance,
        "turn-left" => Kind::TurnLeft,
        "turn-right" => Kind::TurnRight,
        "no-op" => Kind::NoOp,
        _ => {
            if let Some(color) = body.strip_prefix("paint-") {
                Kind::Paint(parse_color(color, line)?)
            } else if let Some(func) = body.strip_prefix("call-") {
                Kind::Call(parse_func_name(func, line)?)
            } else {
                return Err(ParseError::UnknownInstruction {
                    line,
                    token: token.to_string(),
                });
            }
        }
    };

    Ok(Instruction { kind, guard })
}

/// Parse a program shaped to the puzzle's slot capacities.
///
/// Functions not mentioned stay empty; mentioned functions may list fewer
/// tokens than their capacity (the rest stay empty) but never more.
pub fn parse_program(text: &str, puzzle: &Puzzle) -> Result<Program, ParseError> {
    let mut program = puzzle.empty_program();

    for (idx, raw) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = clean(raw);
        if line.is_empty() {
            continue;
        }
        let (name, rest) = line.split_once(':').ok_or(ParseError::Malformed {
            line: line_num,
            what: "program",
        })?;
        let function = parse_func_name(name.trim(), line_num)?;

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let capacity = program.capacity(function);
        if tokens.len() > capacity {
            return Err(ParseError::TooManyInstructions {
                line: line_num,
                function: function.name(),
                count: tokens.len(),
                capacity,
            });
        }
        for (slot, token) in tokens.iter().enumerate() {
            if *token == "-" {
                continue;
            }
            program.set(function, slot, Some(parse_instruction(token, line_num)?));
        }
    }

    puzzle.validate_program(&program)?;
    Ok(program)
}
