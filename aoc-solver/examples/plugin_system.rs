//! Example demonstrating plugin registration and tag filtering
//!
//! Run with: cargo run --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverPlugin, SolverRegistryBuilder,
};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {line}")))
        })
        .collect()
}

/// Registered through the derive macros
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["easy"])]
pub struct Depths;

impl AocParser for Depths {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Depths {
    fn solve(depths: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
    }
}

impl PartSolver<2> for Depths {
    fn solve(depths: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(depths.windows(4).filter(|w| w[3] > w[0]).count().to_string())
    }
}

/// Registered by hand, for comparison
pub struct Product;

impl AocParser for Product {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl Solver for Product {
    const PARTS: u8 = 1;

    fn solve_part(numbers: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(numbers.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

aoc_solver::inventory::submit! {
    SolverPlugin {
        year: 2021,
        day: 2,
        solver: &Product,
        tags: &["hard"],
    }
}

fn main() {
    let input = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";

    println!("=== All plugins ===");
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins use distinct days")
        .build();
    for info in registry.iter_info() {
        println!("  {}/day{:02}: {} part(s)", info.year, info.day, info.parts);
    }

    for info in registry.iter_info() {
        let mut solver = registry
            .create_solver(info.year, info.day, input)
            .expect("example input parses");
        for part in 1..=solver.parts() {
            match solver.solve(part) {
                Ok(result) => println!(
                    "  {}/day{:02} part {part}: {} ({})",
                    info.year,
                    info.day,
                    result.answer,
                    result.duration()
                ),
                Err(e) => println!("  {}/day{:02} part {part}: {e}", info.year, info.day),
            }
        }
    }

    println!("\n=== Only \"easy\" plugins ===");
    let easy = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))
        .expect("plugins use distinct days")
        .build();
    for info in easy.iter_info() {
        println!("  {}/day{:02}", info.year, info.day);
    }
}
