//! Parsers for the text listings printed by external archive tools.
//!
//! Both parsers keep entry order. The zip parser depends on the exact table
//! layout of `unzip -l`; a zip comment or a localized `unzip` build shifts
//! the header and breaks it. The native backend does not go through here.

/// Number of lines `unzip -l` prints before the first entry row.
const ZIP_HEADER_LINES: usize = 3;

/// Number of `\n`-separated pieces after the last entry row: the dashed
/// separator, the summary row and the empty piece after the final newline.
const ZIP_FOOTER_LINES: usize = 3;

/// Number of leading columns (length, date, time) before the name column.
const ZIP_FIELDS_BEFORE_NAME: usize = 3;

/// Parses the output of `unzip -l` into entry paths.
///
/// Header and footer rows are dropped. For each remaining row the length,
/// date and time columns are discarded and the remaining whitespace-split
/// fields are joined back with single spaces. Runs of whitespace inside a
/// name therefore collapse to one space.
///
/// # Examples
///
/// ```
/// use nestex_core::listing::parse_zip_listing;
///
/// let output = "\
/// Archive:  site.zip
///   Length      Date    Time    Name
/// ---------  ---------- -----   ----
///         0  2024-03-01 10:00   site/
///        12  2024-03-01 10:00   site/index.html
/// ---------                     -------
///        12                     2 files
/// ";
/// assert_eq!(parse_zip_listing(output), vec!["site/", "site/index.html"]);
/// ```
#[must_use]
pub fn parse_zip_listing(output: &str) -> Vec<String> {
    let lines: Vec<&str> = output.split('\n').collect();
    if lines.len() <= ZIP_HEADER_LINES + ZIP_FOOTER_LINES {
        return Vec::new();
    }

    lines[ZIP_HEADER_LINES..lines.len() - ZIP_FOOTER_LINES]
        .iter()
        .map(|row| {
            row.split_whitespace()
                .skip(ZIP_FIELDS_BEFORE_NAME)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Parses the output of `tar -t` into entry paths, one per non-empty line.
#[must_use]
pub fn parse_tar_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
