use crate::engine::{Board, PuzzleError, BOARD_SIZE};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, starting from row 0, with one digit
/// per cell. The blank is written as `0` and tiles as `1` through `8`. The
/// input must describe the full board: exactly `BOARD_SIZE` rows of exactly
/// `BOARD_SIZE` digits each, with every value `0..=8` appearing exactly
/// once. Leading or trailing whitespace is not stripped, so callers reading
/// from files should trim line endings first.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`), one per board row from top
///   to bottom.
///
/// # Returns
/// * `Ok(Board)` when the input describes a well-formed board.
/// * `Err(PuzzleError)` naming the first problem found: wrong row count,
///   wrong row length, a character outside `0..=8`, or a repeated value.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let rows = ["321", "408", "756"];
/// let board = board_from_str_array(&rows).unwrap();
/// assert_eq!(board.get_tile(0, 0), 3);
/// assert_eq!(board.get_tile(1, 1), 0);
///
/// assert!(board_from_str_array(&["321", "408"]).is_err());
/// assert!(board_from_str_array(&["3x1", "408", "756"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PuzzleError> {
    if s.len() != BOARD_SIZE {
        return Err(PuzzleError::WrongRowCount {
            expected: BOARD_SIZE,
            found: s.len(),
        });
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    let mut seen = [false; BOARD_SIZE * BOARD_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        let cells = row_str.chars().count();
        if cells != BOARD_SIZE {
            return Err(PuzzleError::WrongRowLength {
                row: r,
                expected: BOARD_SIZE,
                found: cells,
            });
        }

        for (c, ch) in row_str.chars().enumerate() {
            let value = match ch.to_digit(10) {
                Some(digit) if (digit as usize) < BOARD_SIZE * BOARD_SIZE => digit as u8,
                _ => {
                    return Err(PuzzleError::UnrecognizedCharacter { ch, row: r, col: c });
                }
            };
            if seen[value as usize] {
                return Err(PuzzleError::DuplicateTile { value });
            }
            seen[value as usize] = true;
            grid[r][c] = value;
        }
    }
    Ok(Board::from_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board_str = ["321", "408", "756"];
        let board = board_from_str_array(&board_str).unwrap();
        assert_eq!(board.get_tile(0, 0), 3);
        assert_eq!(board.get_tile(0, 2), 1);
        assert_eq!(board.get_tile(1, 1), 0);
        assert_eq!(board.get_tile(2, 2), 6);
        assert_eq!(board.blank_position().unwrap(), (1, 1));
    }

    #[test]
    fn test_board_from_str_array_wrong_row_count() {
        let result = board_from_str_array(&["123", "456"]);
        assert_eq!(
            result,
            Err(PuzzleError::WrongRowCount {
                expected: BOARD_SIZE,
                found: 2
            })
        );

        let result = board_from_str_array(&["123", "456", "780", "000"]);
        assert_eq!(
            result,
            Err(PuzzleError::WrongRowCount {
                expected: BOARD_SIZE,
                found: 4
            })
        );
    }

    #[test]
    fn test_board_from_str_array_wrong_row_length() {
        let result = board_from_str_array(&["123", "45", "780"]);
        assert_eq!(
            result,
            Err(PuzzleError::WrongRowLength {
                row: 1,
                expected: BOARD_SIZE,
                found: 2
            })
        );
    }

    #[test]
    fn test_board_from_str_array_unrecognized_character() {
        let result = board_from_str_array(&["123", "4x6", "780"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                ch: 'x',
                row: 1,
                col: 1
            })
        );

        // '9' is a digit but not a legal tile value.
        let result = board_from_str_array(&["123", "456", "789"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                ch: '9',
                row: 2,
                col: 2
            })
        );
    }

    #[test]
    fn test_board_from_str_array_rejects_spaces() {
        let result = board_from_str_array(&["1 3", "456", "780"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                ch: ' ',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_board_from_str_array_duplicate_tile() {
        let result = board_from_str_array(&["123", "456", "783"]);
        assert_eq!(result, Err(PuzzleError::DuplicateTile { value: 3 }));
    }

    #[test]
    fn test_parsed_board_is_searchable() {
        let board = board_from_str_array(&["321", "408", "756"]).unwrap();
        let moves = board.possible_moves().unwrap();
        assert_eq!(moves.len(), 4, "center blank has all four moves");
    }
}
