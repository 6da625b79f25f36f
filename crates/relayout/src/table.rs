use relayout_core::WindowRecord;
use relayout_core::restore::RestoreOutcome;
use relayout_core::window::WindowInfo;

/// A column: header text plus the width range its cells are clamped to.
struct Column {
    header: &'static str,
    min: usize,
    max: usize,
}

const fn column(header: &'static str, min: usize, max: usize) -> Column {
    Column { header, min, max }
}

/// Print a formatted table of open windows
pub fn print_windows_table(windows: &[WindowInfo]) {
    let columns = [
        column("Title", 5, 50),
        column("App", 3, 20),
        column("Size", 9, 11),
        column("Position", 8, 15),
        column("Status", 9, 9),
    ];

    let rows: Vec<Vec<String>> = windows
        .iter()
        .map(|w| {
            let status = if w.is_minimized {
                "Minimized"
            } else {
                "Visible"
            };
            vec![
                w.title.clone(),
                w.app_name.clone(),
                format!("{}x{}", w.width, w.height),
                format!("x:{} y:{}", w.x, w.y),
                status.to_string(),
            ]
        })
        .collect();

    print_table(&columns, &rows);
    println!("\nTotal: {} window(s)", windows.len());
}

/// Print a formatted table of saved window records
pub fn print_records_table(records: &[&WindowRecord]) {
    let columns = [
        column("Title", 5, 50),
        column("App", 3, 20),
        column("Size", 9, 11),
        column("Position", 8, 15),
        column("Open", 4, 12),
    ];

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            let size = if r.position_only {
                "(keep)".to_string()
            } else {
                format!("{}x{}", r.width, r.height)
            };
            vec![
                r.title.clone(),
                r.app_name.clone(),
                size,
                format!("x:{} y:{}", r.x, r.y),
                r.open_method.clone(),
            ]
        })
        .collect();

    print_table(&columns, &rows);
    println!("\nTotal: {} saved window(s)", records.len());
}

/// Print one row per restored window
pub fn print_restore_table(outcomes: &[RestoreOutcome]) {
    let columns = [column("Title", 5, 50), column("Result", 6, 60)];

    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| vec![o.title.clone(), o.describe()])
        .collect();

    print_table(&columns, &rows);
}

fn print_table(columns: &[Column], rows: &[Vec<String>]) {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(col.header.chars().count()))
                .max()
                .unwrap_or(col.min)
                .clamp(col.min, col.max)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        println!("{}{}{}", left, segments.join(mid), right);
    };
    let line = |cells: Vec<&str>| {
        let cells: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
            .collect();
        println!("│{}│", cells.join("│"));
    };

    rule("┌", "┬", "┐");
    line(columns.iter().map(|c| c.header).collect());
    rule("├", "┼", "┤");
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
    rule("└", "┴", "┘");
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so multi-byte titles are cut on
/// character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Notes", 10), "Notes     ");
        assert_eq!(truncate("Inbox - Mail - Mozilla Firefox", 10), "Inbox -...");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_edge_cases() {
        assert_eq!(truncate("", 5), "     ");
        assert_eq!(truncate("abcd", 3), "...");
    }

    #[test]
    fn test_truncate_utf8_safety() {
        let title = "Explorateur de fichiers - Téléchargements";
        let result = truncate(title, 12);
        assert_eq!(result.chars().count(), 12);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_print_tables_do_not_panic() {
        print_windows_table(&[WindowInfo {
            id: 1,
            title: "Mobile connecté".to_string(),
            app_name: "phone".to_string(),
            x: -10,
            y: 0,
            width: 400,
            height: 800,
            is_minimized: true,
        }]);
        print_records_table(&[]);
        print_restore_table(&[]);
    }
}
