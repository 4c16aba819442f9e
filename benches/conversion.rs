//! Benchmark suite for the in-memory conversion
//!
//! Measures load, transform and write over generated epidemiology tables
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use uq_disease_transform::{convert, StagedSeirTransform};

fn main() {
    divan::main();
}

/// Build a scaled design with `rows` samples
fn design(rows: usize) -> String {
    let mut csv = String::from("incubation_time,infectious_time,r_zero\n");
    for i in 0..rows {
        let t = i as f64 / rows.max(1) as f64;
        csv.push_str(&format!(
            "{},{},{}\n",
            2.0 + 12.0 * t,
            3.0 + 11.0 * t,
            0.8 + 3.2 * t
        ));
    }
    csv
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn convert_design(bencher: divan::Bencher, rows: usize) {
    let input = design(rows);
    bencher.bench(|| {
        let mut output = Vec::with_capacity(input.len() * 2);
        convert(input.as_bytes(), &mut output, &StagedSeirTransform).expect("Conversion failed");
        output
    });
}
