//! Top-level directory detection over archive entry paths.
//!
//! Entry paths are split on `/`, the separator every zip and tar listing
//! uses regardless of platform. Empty and `.` segments are dropped, so
//! `./src//lib.rs` and `src/lib.rs` are the same entry.

/// Where an entry sits relative to the archive root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement<'a> {
    /// Nothing left after normalization (`""`, `./`, `/`).
    Empty,
    /// A file or directory directly at the archive root.
    Root,
    /// Nested under the named outermost directory.
    Under(&'a str),
}

fn placement(entry: &str) -> Placement<'_> {
    let segments: Vec<&str> = entry
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let Some((last, parents)) = segments.split_last() else {
        return Placement::Empty;
    };

    // A trailing slash marks a directory entry, which is its own parent.
    let outermost = if entry.ends_with('/') {
        segments.first().copied()
    } else {
        parents.first().copied()
    };

    match outermost {
        Some(name) => Placement::Under(name),
        None => {
            tracing::trace!(entry, name = *last, "entry sits at archive root");
            Placement::Root
        }
    }
}

/// Folds the entries into their shared outermost directory.
///
/// `Ok(None)` means every entry was skipped; `Err(())` means some entry
/// sits at the root or under a different directory.
fn shared_root<S: AsRef<str>>(entries: &[S]) -> Result<Option<&str>, ()> {
    entries
        .iter()
        .try_fold(None::<&str>, |expected, entry| match placement(entry.as_ref()) {
            Placement::Empty => Ok(expected),
            Placement::Root => Err(()),
            Placement::Under(name) => match expected {
                Some(seen) if seen != name => Err(()),
                _ => Ok(Some(name)),
            },
        })
}

/// Returns the directory every entry is nested under, if there is one.
///
/// Returns `None` when any entry sits at the archive root, when entries
/// live under different outermost directories, or when there are no
/// non-empty entries at all.
///
/// # Examples
///
/// ```
/// use nestex_core::layout::top_level_directory;
///
/// assert_eq!(top_level_directory(&["proj/a", "proj/sub/b"]), Some("proj"));
/// assert_eq!(top_level_directory(&["a/x", "b/y"]), None);
/// ```
#[must_use]
pub fn top_level_directory<S: AsRef<str>>(entries: &[S]) -> Option<&str> {
    shared_root(entries).ok().flatten()
}

/// Tests whether the entries already share a single top-level directory.
///
/// Empty strings (listing artifacts) are skipped. Any entry at the archive
/// root fails the test, as do entries under two different outermost
/// directories. An empty list, or one with only skipped entries, passes.
///
/// # Examples
///
/// ```
/// use nestex_core::layout::has_top_level_directory;
///
/// assert!(has_top_level_directory(&["proj/a", "proj/sub/b"]));
/// assert!(!has_top_level_directory(&["readme.txt", "dir/a"]));
/// assert!(has_top_level_directory::<&str>(&[]));
/// ```
#[must_use]
pub fn has_top_level_directory<S: AsRef<str>>(entries: &[S]) -> bool {
    shared_root(entries).is_ok()
}
