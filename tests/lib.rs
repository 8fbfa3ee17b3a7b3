use nonet::{Col, Digit, DigitSet, Grid, GroupRef, Row};

const WIKI: &str = include_str!("../puzzles/wiki.txt");
const MEDIUM: &str = include_str!("../puzzles/medium.txt");
const EVIL: &str = include_str!("../puzzles/evil.txt");

const WIKI_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn solved_grid(puzzle: &str) -> Grid {
    let mut grid = Grid::new();
    grid.parse(puzzle).unwrap_or_else(|err| panic!("{}", err));
    grid.solve().unwrap_or_else(|err| panic!("{}", err));
    grid
}

#[test]
fn wiki_puzzle_has_the_known_solution() {
    assert_eq!(solved_grid(WIKI).number_string(), WIKI_SOLUTION);
}

#[test]
fn spaces_count_as_empty_cells() {
    let puzzle =
        "53  7    6  195    98    6 8   6   34  8 3  17   2   6 6    28    419  5    8  79";
    assert_eq!(solved_grid(puzzle).number_string(), WIKI_SOLUTION);
}

#[test]
fn solved_grids_use_every_digit_once_per_group() {
    for &puzzle in &[WIKI, MEDIUM, EVIL] {
        let grid = solved_grid(puzzle);
        for group_ref in GroupRef::all() {
            assert_eq!(grid.group(group_ref).used_numbers(&grid), DigitSet::ALL);
        }
    }
}

#[test]
fn number_string_round_trip() {
    let mut grid = Grid::new();
    grid.parse(WIKI).unwrap();
    let line = grid.number_string();

    let mut reparsed = Grid::new();
    reparsed.parse(&line).unwrap();
    assert_eq!(reparsed.number_string(), line);
}

#[test]
fn from_str_matches_parse() {
    let grid: Grid = WIKI.parse().unwrap();
    let mut reference = Grid::new();
    reference.parse(WIKI).unwrap();
    assert_eq!(grid.number_string(), reference.number_string());
}

#[test]
fn duplicate_in_a_row_is_unsolvable() {
    // the wiki puzzle with an extra 5 at the end of the first row
    let puzzle = "\
53..7...5
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79";

    let mut grid = Grid::new();
    grid.parse(puzzle).unwrap();
    assert!(grid.solve().is_err());
}

#[test]
fn cell_with_no_candidates_is_stuck() {
    // the corner cell sees 1-8 in its row and the 9 in its column
    let mut puzzle = String::from("12345678.");
    puzzle.push_str("........9");
    puzzle.push_str(&".".repeat(63));

    let mut grid = Grid::new();
    grid.parse(&puzzle).unwrap();

    let corner = grid.cell_at(Row::new(0), Col::new(8));
    assert_eq!(corner.value(), None);
    assert!(corner.available_numbers(&grid).is_empty());
    assert!(grid.is_stuck());
    assert!(grid.solve().is_err());
}

#[test]
fn short_input_is_rejected() {
    let mut grid = Grid::new();
    let err = grid.parse("53..7....").unwrap_err();
    assert_eq!(err.0, 9);
}

#[test]
fn surplus_characters_are_ignored() {
    let mut input = String::from(WIKI_SOLUTION);
    input.push_str("12345");

    let mut grid = Grid::new();
    grid.parse(&input).unwrap();
    assert_eq!(grid.number_string(), WIKI_SOLUTION);
}

#[test]
fn is_solved_before_and_after_solving() {
    let mut grid = Grid::new();
    grid.parse(WIKI).unwrap();
    assert!(!grid.is_solved());
    grid.solve().unwrap();
    assert!(grid.is_solved());
}

#[test]
fn propagation_reaches_a_fixed_point() {
    let mut grid = Grid::new();
    grid.parse(WIKI).unwrap();
    while grid.solve_one_square() {}
    // once it reports false it must keep reporting false
    for _ in 0..3 {
        assert!(!grid.solve_one_square());
    }
}

#[test]
fn candidate_sets_subtract_all_three_groups() {
    let mut grid = Grid::new();
    grid.parse(WIKI).unwrap();

    // a filled cell has no candidates at all
    let filled = grid.cell_at(Row::new(0), Col::new(0));
    assert_eq!(filled.value(), Some(Digit::new(5)));
    assert!(filled.available_numbers(&grid).is_empty());

    // row {5,3,7}, column {8}, block {5,3,6,9,8} leave {1,2,4}
    let empty = grid.cell_at(Row::new(0), Col::new(2));
    let expected: DigitSet = [1, 2, 4].iter().map(|&d| Digit::new(d)).collect();
    assert_eq!(empty.available_numbers(&grid), expected);
}
