//! Four-panel text diagram of the array's evolution.
//!
//! Each panel draws one array as a row of boxes with the cell index above
//! the value, mirroring the trace's phase order: input, frequency,
//! cumulative, sorted output. Rendering is pure string layout; saving is
//! the only fallible part, and the command layer treats any failure here
//! as a warning rather than a sort failure.

use crate::core::SortArtifacts;
use std::fmt::Display;
use std::fmt::Write as _;
use std::path::Path;

const TITLE: &str = "Counting Sort Algorithm Steps";

/// Renders all four panels under a shared title.
pub fn render_diagram(artifacts: &SortArtifacts) -> String {
    let panels = [
        panel("STEP 1: Input Array", &artifacts.input),
        panel("STEP 3: Frequency Array (Count)", &artifacts.frequency),
        panel("STEP 4: Cumulative Count Array", &artifacts.cumulative),
        panel("FINAL STEP: Sorted Output Array", &artifacts.sorted),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "─".repeat(TITLE.len()));
    for panel in panels {
        let _ = writeln!(out);
        out.push_str(&panel);
    }
    out
}

/// Writes the rendered diagram to `path`.
pub fn save_diagram(path: &Path, artifacts: &SortArtifacts) -> anyhow::Result<()> {
    crate::io::write_file(path, &render_diagram(artifacts))
}

/// Draws one array as a box-drawn row, indices above the cells:
///
/// ```text
/// STEP 1: Input Array
///   0   1   2
/// ┌───┬───┬───┐
/// │ 4 │ 2 │ 8 │
/// └───┴───┴───┘
/// ```
fn panel<T: Display>(title: &str, values: &[T]) -> String {
    let cells: Vec<String> = values.iter().map(ToString::to_string).collect();
    let width = cell_width(&cells);

    let border = |left: &str, mid: &str, right: &str| {
        let bar = vec!["─".repeat(width + 2); cells.len()];
        format!("{left}{}{right}", bar.join(mid))
    };

    let index_row: Vec<String> = (0..cells.len())
        .map(|i| format!(" {:>width$} ", i))
        .collect();
    let value_row: Vec<String> = cells.iter().map(|c| format!(" {c:>width$} ")).collect();

    let index_line = format!(" {}", index_row.join(" "));

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", index_line.trim_end());
    let _ = writeln!(out, "{}", border("┌", "┬", "┐"));
    let _ = writeln!(out, "│{}│", value_row.join("│"));
    let _ = writeln!(out, "{}", border("└", "┴", "┘"));
    out
}

/// Widest rendered value or index; every cell in a panel shares it.
fn cell_width(cells: &[String]) -> usize {
    let value_width = cells.iter().map(String::len).max().unwrap_or(1);
    let index_width = cells.len().saturating_sub(1).to_string().len();
    value_width.max(index_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panel_layout_single_digit_values() {
        let rendered = panel("STEP 1: Input Array", &[4u64, 2, 8]);
        let expected = indoc! {"
            STEP 1: Input Array
              0   1   2
            ┌───┬───┬───┐
            │ 4 │ 2 │ 8 │
            └───┴───┴───┘
        "};
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_panel_pads_to_widest_value() {
        let rendered = panel("counts", &[7u64, 120]);
        let expected = indoc! {"
            counts
                0     1
            ┌─────┬─────┐
            │   7 │ 120 │
            └─────┴─────┘
        "};
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_panel_pads_to_widest_index() {
        // Eleven zero-count cells: the two-digit index 10 sets the width.
        let rendered = panel("counts", &vec![0usize; 11]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[1].trim_end().ends_with("10"));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        assert_eq!(lines[3].chars().count(), lines[4].chars().count());
    }

    #[test]
    fn test_render_diagram_has_four_panels() {
        let artifacts = sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap();
        let diagram = render_diagram(&artifacts);

        assert!(diagram.starts_with(TITLE));
        assert!(diagram.contains("STEP 1: Input Array"));
        assert!(diagram.contains("STEP 3: Frequency Array (Count)"));
        assert!(diagram.contains("STEP 4: Cumulative Count Array"));
        assert!(diagram.contains("FINAL STEP: Sorted Output Array"));
    }

    #[test]
    fn test_save_diagram_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steps.txt");
        let artifacts = sort(&[1, 0]).unwrap();

        save_diagram(&path, &artifacts).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("FINAL STEP: Sorted Output Array"));
    }
}
