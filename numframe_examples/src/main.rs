// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `numframe_core` and `numframe_transforms`.

use numframe_core::{EntryVector, Frame, FrameError};
use numframe_transforms::{
    CompareOp, Predicate, Program, ReduceOp, Transform, compute_column, expand, project, select,
    summarize,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut frame = Frame::from_values(["a", "b"], [[1.0, 2.0], [3.0, 4.0]])?;
    print_frame("input", &frame);
    println!("value(1, \"b\") = {}", frame.value(1, "b")?);

    print_frame("project([\"b\"])", &project(&frame, ["b"])?);
    print_frame("expand(1, [\"c\"])", &expand(&frame, 1, ["c"])?);

    let with_c = compute_column(&frame, "c", |row| {
        row.get("a").unwrap_or(0.0) + row.get("b").unwrap_or(0.0)
    })?;
    print_frame("compute_column(\"c\", a + b)", &with_c);

    let big = select(&with_c, |row| row.get("c").is_some_and(|c| c > 5.0))?;
    print_frame("select(c > 5)", &big);

    print_vector(&summarize(&frame, "sum", |x, y| x + y)?);
    let op = ReduceOp::Max;
    print_vector(&summarize(&with_c, op.name(), |x, y| op.combine(x, y))?);

    let program: Program = [
        Transform::Expand {
            rows: 0,
            columns: vec!["flag".into()],
            fill: 1.0,
        },
        Transform::Filter {
            predicate: Predicate::new("a", CompareOp::Ge, 2.0),
        },
        Transform::Project {
            columns: vec!["flag".into(), "a".into()],
        },
    ]
    .into_iter()
    .collect();
    print_frame("program", &program.execute(&frame)?);

    frame.set_value(0, "a", 10.0)?;
    print_frame("after set_value(0, \"a\", 10)", &frame);

    match frame.value(2, "a") {
        Err(err @ FrameError::OutOfRange { .. }) => println!("value(2, \"a\"): {err}"),
        other => println!("value(2, \"a\"): unexpected {other:?}"),
    }
    Ok(())
}

fn print_frame(title: &str, frame: &Frame) {
    println!("{title}: {}x{}", frame.row_count(), frame.column_count());
    let header: Vec<String> = frame
        .column_names()
        .iter()
        .map(|n| format!("{n:>8}"))
        .collect();
    println!("  {:>6}{}", "", header.join(""));
    for row in frame.rows() {
        let cells: Vec<String> = row.values().iter().map(|v| format!("{v:>8.2}")).collect();
        println!("  {:>6}{}", row.name(), cells.join(""));
    }
}

fn print_vector(vector: &EntryVector) {
    let entries: Vec<String> = vector.iter().map(|(k, v)| format!("{k}={v}")).collect();
    println!("{}: {}", vector.name(), entries.join(", "));
}
