//! Property tests for part dispatch and range checking

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegisterableSolver, SolveError,
    Solver, SolverExt, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Answers every part with its own number
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => Echo::<1>::solve_part_checked_range(&mut (), part),
        2 => Echo::<2>::solve_part_checked_range(&mut (), part),
        _ => Echo::<3>::solve_part_checked_range(&mut (), part),
    }
}

/// Sums, multiplies or takes the maximum of a list of integers
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Numbers;

impl AocParser for Numbers {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Numbers {
    fn solve(numbers: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(numbers.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(numbers: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(numbers.iter().product::<i64>().to_string())
    }
}

impl PartSolver<3> for Numbers {
    fn solve(numbers: &mut Vec<i64>) -> Result<String, SolveError> {
        numbers
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::NoSolution("no numbers".into()))
    }
}

fn render(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_out_of_range_parts_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(parts, part);
        if part == 0 || part > parts {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    #[test]
    fn prop_derive_dispatches_to_part_solver(
        numbers in prop::collection::vec(-20i64..20, 1..6),
        part in 1u8..=3,
    ) {
        let input = render(&numbers);
        let mut via_solver = Numbers::parse(&input).unwrap();
        let mut direct = Numbers::parse(&input).unwrap();

        let expected = match part {
            1 => <Numbers as PartSolver<1>>::solve(&mut direct),
            2 => <Numbers as PartSolver<2>>::solve(&mut direct),
            _ => <Numbers as PartSolver<3>>::solve(&mut direct),
        };
        prop_assert_eq!(Numbers::solve_part(&mut via_solver, part).unwrap(), expected.unwrap());
    }

    #[test]
    fn prop_instance_matches_direct_solve(numbers in prop::collection::vec(0i64..1000, 1..10)) {
        let registry = Numbers
            .register_with(SolverRegistryBuilder::new(), 2021, 1)
            .unwrap()
            .build();
        let input = render(&numbers);
        let mut solver = registry.create_solver(2021, 1, &input).unwrap();

        prop_assert_eq!(solver.parts(), 3);
        prop_assert_eq!(solver.solve(1).unwrap().answer, numbers.iter().sum::<i64>().to_string());
        let max = numbers.iter().max().unwrap().to_string();
        prop_assert_eq!(solver.solve(3).unwrap().answer, max);
    }
}

#[test]
fn test_derived_parts_constant() {
    assert_eq!(<Numbers as Solver>::PARTS, 3);
}

#[test]
fn test_derived_solver_rejects_unknown_part() {
    let mut numbers = vec![1, 2];
    assert!(matches!(
        Numbers::solve_part(&mut numbers, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        Numbers::solve_part_checked_range(&mut numbers, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn test_part_error_surfaces_through_instance() {
    let registry = Numbers
        .register_with(SolverRegistryBuilder::new(), 2021, 1)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2021, 1, "").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::NoSolution(_))));
}
