//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;
use life_automaton::domain::{Algorithm, Automaton, GameOfLifeRule};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut automaton = match Automaton::new(size, size, Box::new(GameOfLifeRule)) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("skipping {size}x{size}: {err}");
            return 0.0;
        }
    };
    automaton.set_algorithm(algorithm);
    automaton.seed(4);

    let start = Instant::now();
    for _ in 0..iterations {
        automaton.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Automaton Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::ParallelRows, size, iterations);

        let speedup_str = if parallel_ms > 0.0 {
            format!("{:>9.1}x", serial_ms / parallel_ms)
        } else {
            format!("{:>10}", "-")
        };

        println!(
            "{:>10} {:>12.3} {:>12.3} {}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            speedup_str
        );
    }

    let size = 2048;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::ParallelRows, size, iterations);
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!(
        "Parallel:    {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
