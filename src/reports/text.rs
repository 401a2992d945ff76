//! Text renderers for trees, tables, and side-by-side comparisons.

use crate::diff::ComparisonResult;
use crate::model::{BomTree, Highlight};
use crate::table::FlatTable;

fn marker(tag: Highlight) -> char {
    match tag {
        Highlight::None => ' ',
        Highlight::New => '+',
        Highlight::Changed => '~',
        Highlight::ToBeDeleted => '-',
    }
}

/// Render a tree as an indented outline, one node per line.
#[must_use]
pub fn render_tree(tree: &BomTree) -> String {
    let mut out = String::new();
    for (id, depth) in tree.preorder() {
        let node = tree.node(id);
        out.push(marker(node.highlight));
        out.push(' ');
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.identifier);
        if !node.fields.description.is_empty() {
            out.push_str("  ");
            out.push_str(&node.fields.description);
        }
        if !node.fields.quantity.is_empty() {
            out.push_str("  x");
            out.push_str(&node.fields.quantity);
            if !node.fields.unit.is_empty() {
                out.push(' ');
                out.push_str(&node.fields.unit);
            }
        }
        out.push('\n');
    }
    out
}

/// Column-aligned lines for one table: header first, then one line per row.
/// All lines are padded to a common width so callers can pair them up.
fn table_lines(table: &FlatTable) -> Vec<String> {
    let headers = table.column_names();
    let mut grid: Vec<Vec<String>> = vec![headers.iter().map(ToString::to_string).collect()];
    for row in &table.rows {
        let mut line = vec![
            row.level.to_string(),
            row.parent.clone(),
            row.prefix.clone(),
        ];
        line.extend(row.cells().map(|cell| {
            if cell.color.is_none() {
                cell.text.clone()
            } else {
                format!("{}{}", marker(cell.color), cell.text)
            }
        }));
        grid.push(line);
    }

    let columns = headers.len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .map(|line| line.get(c).map_or(0, |v| v.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    grid.iter()
        .map(|line| {
            let mut rendered = String::new();
            for (c, width) in widths.iter().enumerate() {
                if c > 0 {
                    rendered.push_str("  ");
                }
                let value = line.get(c).map_or("", String::as_str);
                rendered.push_str(value);
                rendered.extend(std::iter::repeat(' ').take(width - value.chars().count()));
            }
            rendered.trim_end().to_string()
        })
        .collect()
}

/// Render a flat table as aligned text.
#[must_use]
pub fn render_table(table: &FlatTable) -> String {
    let mut out = String::new();
    for line in table_lines(table) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render an aligned-old vs. new side-by-side view, the two tables joined
/// with a gutter. The aligned old table already carries blank placeholder
/// rows at each insertion point, so rows pair up line for line.
#[must_use]
pub fn render_side_by_side(result: &ComparisonResult, new: &FlatTable) -> String {
    let left = table_lines(&result.aligned_old);
    let right = table_lines(new);
    let left_width = left.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map_or("", String::as_str);
        let r = right.get(i).map_or("", String::as_str);
        out.push_str(l);
        out.extend(std::iter::repeat(' ').take(left_width - l.len()));
        out.push_str(" | ");
        out.push_str(r);
        out.push('\n');
    }
    out
}

/// One-line comparison summary.
#[must_use]
pub fn render_summary(result: &ComparisonResult) -> String {
    if result.has_differences() {
        format!(
            "{} row(s) in new revision missing from old (indices {:?}); old {} rows, new {} rows\n",
            result.summary.inserted,
            result.missing_from_old,
            result.summary.old_rows,
            result.summary.new_rows,
        )
    } else {
        format!(
            "no row-set differences; old {} rows, new {} rows\n",
            result.summary.old_rows, result.summary.new_rows
        )
    }
}

/// Full comparison report: summary line followed by the side-by-side view.
#[must_use]
pub fn render_comparison(result: &ComparisonResult, new: &FlatTable) -> String {
    let mut out = render_summary(result);
    out.push('\n');
    out.push_str(&render_side_by_side(result, new));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use crate::model::PartFields;
    use crate::table::FlatRow;

    fn sample_table() -> FlatTable {
        FlatTable::new(vec![
            FlatRow::plain(1, "ROOT", "4", "A", "upper assy", "1", "EA"),
            FlatRow::plain(2, "A", "1", "C1", "bolt", "4", "EA"),
        ])
    }

    #[test]
    fn tree_outline_indents_by_depth() {
        let mut tree = BomTree::new();
        let root = tree.add_root("ROOT");
        let a = tree.add_child_after(root, None, "A", PartFields::default());
        tree.add_child_after(a, None, "C1", PartFields::default());

        let out = render_tree(&tree);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  ROOT");
        assert!(lines[1].starts_with("+   A")); // manual adds are tagged new
        assert!(lines[2].contains("    C1"));
    }

    #[test]
    fn table_render_has_header_and_aligned_rows() {
        let out = render_table(&sample_table());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("LVL  PARENT"));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("upper assy"));
    }

    #[test]
    fn side_by_side_pairs_rows_with_a_gutter() {
        let old = sample_table();
        let mut new = sample_table();
        new.rows.push(FlatRow::plain(2, "A", "1", "C2", "nut", "4", "EA"));
        let result = compare(&old, &new).unwrap();

        let out = render_side_by_side(&result, &new);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 paired rows
        assert!(lines.iter().all(|l| l.contains(" | ")));
        assert!(lines[3].contains("nut"));
    }

    #[test]
    fn summary_states_missing_indices() {
        let old = sample_table();
        let mut new = sample_table();
        new.rows.push(FlatRow::plain(2, "A", "1", "C2", "nut", "4", "EA"));
        let result = compare(&old, &new).unwrap();
        assert!(render_summary(&result).contains("[2]"));

        let same = compare(&old, &old).unwrap();
        assert!(render_summary(&same).contains("no row-set differences"));
    }
}
