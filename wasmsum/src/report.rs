//! Human-readable output. Nothing here is meant to be parsed.

use crate::metrics::BenchmarkResult;

const HEADERS: [&str; 6] = [
    "(index)",
    "name",
    "timeNanoSeconds",
    "cycles",
    "cyclesPerAdd",
    "addsPerCycle",
];

/// Block printed as soon as one function under test finishes.
pub fn format_metrics(result: &BenchmarkResult) -> String {
    let metrics = &result.metrics;
    let mut output = String::new();
    output.push_str(&format!("FunctionToTest: {}\n", result.name));
    output.push_str(&format!("Time: {} nanoseconds\n", metrics.time_ns));
    output.push_str(&format!("Cycles: {} cycles\n", metrics.cycles));
    output.push_str(&format!("Cycles/add: {}\n", metrics.cycles_per_element));
    output.push_str(&format!("Adds/cycle: {}\n", metrics.elements_per_cycle));
    output.push('\n');
    output
}

/// Summary of all results, in the order they were measured.
pub fn format_table(results: &[BenchmarkResult]) -> String {
    let rows: Vec<[String; 6]> = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let metrics = &result.metrics;
            [
                index.to_string(),
                result.name.to_string(),
                metrics.time_ns.to_string(),
                format!("{:.1}", metrics.cycles),
                format!("{:.4}", metrics.cycles_per_element),
                format!("{:.4}", metrics.elements_per_cycle),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut output = String::new();
    output.push_str(&separator);
    push_row(&mut output, &HEADERS.map(String::from), &widths);
    output.push_str(&separator);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output.push_str(&separator);
    output
}

fn push_row(output: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    output.push('|');
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        // name left-aligned, numbers right-aligned
        if i == 1 {
            output.push_str(&format!(" {:<width$} |", cell, width = *width));
        } else {
            output.push_str(&format!(" {:>width$} |", cell, width = *width));
        }
    }
    output.push('\n');
}
