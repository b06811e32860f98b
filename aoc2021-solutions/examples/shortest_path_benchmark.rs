//! Benchmark for the corner-to-corner risk search on expanded caves.
//!
//! Run with: cargo run --example shortest_path_benchmark --release
//!
//! Random base caves are expanded 5x5 the way day 15 part 2 does it, then
//! searched in every direction. The right/down-only DP gives an upper bound
//! for each answer, which the search must never exceed.

use aoc2021_solutions::solutions::day_15::expand_risk_levels;
use aoc2021_solutions::utils::{Grid, GridSearch, Pos, corner_to_corner_cost};
use std::time::Instant;

const BASE_SIZE: usize = 100;
const NUM_CAVES: usize = 10;
const TILES: usize = 5;

/// Random risk levels in 1..=9
fn generate_random_cave(seed: u64, size: usize) -> Grid<u8> {
    let mut rng = seed;
    let cells = (0..size * size)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) % 9) as u8 + 1
        })
        .collect();
    Grid::from_vec(size, size, cells).expect("size * size cells")
}

/// Cheapest route that only moves right or down
fn monotone_cost(cave: &Grid<u8>) -> u32 {
    let mut dp = cave.same_shape(0u32);
    for pos in cave.positions() {
        let risk = u32::from(cave[pos]);
        let from_up = pos.row.checked_sub(1).map(|row| dp[Pos::new(row, pos.col)]);
        let from_left = pos.col.checked_sub(1).map(|col| dp[Pos::new(pos.row, col)]);
        dp[pos] = match (from_up, from_left) {
            (None, None) => 0,
            (Some(a), None) | (None, Some(a)) => a + risk,
            (Some(a), Some(b)) => a.min(b) + risk,
        };
    }
    dp[cave.last_pos()]
}

fn main() {
    println!("Chiton Search Benchmark");
    println!("=======================\n");

    let caves: Vec<Grid<u8>> = (0..NUM_CAVES)
        .map(|i| {
            let base = generate_random_cave(42 + i as u64, BASE_SIZE);
            expand_risk_levels(&base, TILES, TILES).expect("non-zero tiles")
        })
        .collect();
    println!(
        "{} caves of {}x{} cells\n",
        caves.len(),
        caves[0].rows(),
        caves[0].cols()
    );

    let start = Instant::now();
    let search_results: Vec<Option<u32>> = caves.iter().map(corner_to_corner_cost).collect();
    let search_time = start.elapsed();
    println!("Dijkstra (any direction):   {:?}", search_time);

    let start = Instant::now();
    let dp_results: Vec<u32> = caves.iter().map(monotone_cost).collect();
    let dp_time = start.elapsed();
    println!("DP (right/down only):       {:?}", dp_time);

    // Work counters for one full search
    let mut search = GridSearch::new(&caves[0], Pos::new(0, 0), |&r| Some(u32::from(r)))
        .expect("start inside cave");
    search.run_until(caves[0].last_pos());
    let stats = search.stats();
    println!(
        "\nCave 0: pushed={} settled={} stale={}",
        stats.pushed, stats.settled, stats.stale
    );

    println!("\nVerifying results...");
    let mut violations = 0;
    for (i, (search, dp)) in search_results.iter().zip(&dp_results).enumerate() {
        match search {
            Some(cost) if cost <= dp => {
                println!("  Cave {i}: search={cost} dp={dp}");
            }
            other => {
                println!("  Cave {i}: search={other:?} exceeds dp={dp}");
                violations += 1;
            }
        }
    }

    if violations == 0 {
        println!("✓ Search never exceeds the monotone route");
    } else {
        println!("✗ {violations} caves violate the bound");
    }
}
