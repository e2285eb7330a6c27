//! Text rendering of a catalog for interactive selection.

use std::fmt::Write;

use super::Catalog;

/// Renders the catalog grouped by category.
///
/// Each group prints its header between two `=` rules of the header's length,
/// then one `N. title` line per entry with `N` right-aligned to the widest
/// number in the group, then a blank line.
#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    for group in catalog.groups() {
        let rule = "=".repeat(group.category.chars().count());
        let width = group.max_number().to_string().len();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "{rule}\n{}\n{rule}", group.category);
        for entry in &group.entries {
            let _ = writeln!(out, "{:>width$}. {}", entry.number, entry.title);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::catalog;

    #[test]
    fn test_render_single_group_layout() {
        let catalog = catalog(&[("Minimums", "TAKEOFF MINIMUMS")]);
        assert_eq!(
            render_catalog(&catalog),
            "========\nMinimums\n========\n1. TAKEOFF MINIMUMS\n\n"
        );
    }

    #[test]
    fn test_render_aligns_numbers_within_group() {
        let mut entries = vec![("Root", "AIRPORT DIAGRAM"); 12];
        entries[8] = ("Root", "NINTH");
        let rendered = render_catalog(&catalog(&entries));

        assert!(rendered.contains("\n 1. AIRPORT DIAGRAM\n"), "{rendered}");
        assert!(rendered.contains("\n 9. NINTH\n"), "{rendered}");
        assert!(rendered.contains("\n12. AIRPORT DIAGRAM\n"), "{rendered}");
    }

    #[test]
    fn test_render_alignment_is_per_group() {
        let mut entries = vec![("Root", "R"); 9];
        entries.push(("Hot Spots", "ORD Hot Spot 1"));
        let rendered = render_catalog(&catalog(&entries));

        // Root tops out at 9, so no padding there.
        assert!(rendered.contains("\n1. R\n"), "{rendered}");
        assert!(rendered.contains("\n10. ORD Hot Spot 1\n"), "{rendered}");
    }

    #[test]
    fn test_render_keeps_first_seen_category_order() {
        let catalog = catalog(&[
            ("Root", "A"),
            ("Standard Terminal Arrival (STAR) Charts", "B"),
            ("Hot Spots", "C"),
            ("Departure Procedure (DP) Charts", "D"),
        ]);
        let rendered = render_catalog(&catalog);

        let positions: Vec<usize> = [
            "\nRoot\n",
            "\nStandard Terminal Arrival (STAR) Charts\n",
            "\nHot Spots\n",
            "\nDeparture Procedure (DP) Charts\n",
        ]
        .iter()
        .map(|header| rendered.find(header).unwrap_or(usize::MAX))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(positions.iter().all(|p| *p != usize::MAX));
    }

    #[test]
    fn test_render_empty_catalog() {
        assert_eq!(render_catalog(&Catalog::default()), "");
    }
}
