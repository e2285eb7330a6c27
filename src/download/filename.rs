//! Category prefixes and chart file naming.

use std::collections::HashMap;

/// Category label to file-name prefix. Every category the listing page
/// publishes must appear here.
pub const CATEGORY_PREFIXES: &[(&str, &str)] = &[
    ("Root", "root"),
    ("Minimums", "minimums"),
    ("Standard Terminal Arrival (STAR) Charts", "star"),
    ("Departure Procedure (DP) Charts", "dp"),
    ("Obstacle Departure Procedures (ODP) Charts", "odp"),
    ("Instrument Approach Procedure (IAP) Charts", "iap"),
    ("Land and Hold-Short Operations (LAHSO)", "lahso"),
    ("Hot Spots", "hot-spots"),
];

/// Looks up the file prefix for a category label (exact match).
#[must_use]
pub fn category_prefix(category: &str) -> Option<&'static str> {
    CATEGORY_PREFIXES
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, prefix)| *prefix)
}

/// Replaces characters that are not allowed in file names with `_`.
pub(crate) fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Builds `"{prefix} - {title}.pdf"`.
#[must_use]
pub fn chart_file_name(prefix: &str, title: &str) -> String {
    format!("{prefix} - {}.pdf", sanitize_title(title))
}

/// Hands out file names that are unique within one run.
///
/// The first use of a name is returned unchanged; the second becomes
/// `name_2.pdf`, the third `name_3.pdf`. Names differing only in case count
/// as the same name. Files left by earlier runs are not considered.
#[derive(Debug, Default)]
pub(crate) struct RunFileNames {
    seen: HashMap<String, usize>,
}

impl RunFileNames {
    pub(crate) fn claim(&mut self, name: String) -> String {
        let count = self.seen.entry(name.to_lowercase()).or_insert(0);
        *count += 1;
        if *count == 1 {
            return name;
        }

        let (stem, ext) = match name.rfind('.') {
            Some(pos) => (&name[..pos], &name[pos..]),
            None => (name.as_str(), ""),
        };
        let mut suffix = *count;
        loop {
            let candidate = format!("{stem}_{suffix}{ext}");
            let key = candidate.to_lowercase();
            if !self.seen.contains_key(&key) {
                self.seen.insert(key, 1);
                return candidate;
            }
            suffix += 1;
        }
    }
}
