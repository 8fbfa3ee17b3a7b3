use nonet::Grid;
use std::fs;
use std::process::ExitCode;

// Demo puzzles: the Wikipedia example plus a medium and an evil puzzle
// from websudoku.com
const WIKI: &str = include_str!("../puzzles/wiki.txt");
const MEDIUM: &str = include_str!("../puzzles/medium.txt");
const EVIL: &str = include_str!("../puzzles/evil.txt");

fn solve(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new();
    grid.parse(input)?;
    println!("{}\n", grid);
    grid.solve()?;
    println!("{}\n", grid);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = if args.is_empty() {
        [WIKI, MEDIUM, EVIL]
            .iter()
            .try_for_each(|puzzle| solve(puzzle))
    } else {
        args.iter().try_for_each(|path| {
            let contents = fs::read_to_string(path)?;
            solve(&contents)
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
