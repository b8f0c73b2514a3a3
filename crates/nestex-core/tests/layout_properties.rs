//! Property-based tests for the top-level directory check and format
//! guessing.

#![allow(clippy::unwrap_used)]

use nestex_core::ArchiveKind;
use nestex_core::formats::archive_stem;
use nestex_core::formats::guess_format;
use nestex_core::has_top_level_directory;
use nestex_core::layout::top_level_directory;
use proptest::prelude::*;
use std::path::PathBuf;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-][a-zA-Z0-9_ .-]{0,11}".prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segments| segments.join("/"))
}

proptest! {
    /// Everything under one root passes, whatever the depth.
    #[test]
    fn prop_shared_root_passes(
        root in segment(),
        rest in prop::collection::vec(relative_path(), 1..20)
    ) {
        let entries: Vec<String> = rest.iter().map(|p| format!("{root}/{p}")).collect();
        prop_assert!(has_top_level_directory(&entries));
        prop_assert_eq!(top_level_directory(&entries), Some(root.as_str()));
    }

    /// A single root-level file anywhere in the list fails the check.
    #[test]
    fn prop_root_level_entry_fails(
        root in segment(),
        rest in prop::collection::vec(relative_path(), 0..10),
        file in segment(),
        position in any::<prop::sample::Index>()
    ) {
        let mut entries: Vec<String> = rest.iter().map(|p| format!("{root}/{p}")).collect();
        let at = position.index(entries.len() + 1);
        entries.insert(at, file);
        prop_assert!(!has_top_level_directory(&entries));
    }

    /// Two distinct roots always fail.
    #[test]
    fn prop_two_roots_fail(a in segment(), b in segment(), tail_a in relative_path(), tail_b in relative_path()) {
        prop_assume!(a != b);
        let entries = vec![format!("{a}/{tail_a}"), format!("{b}/{tail_b}")];
        prop_assert!(!has_top_level_directory(&entries));
    }

    /// Blank listing lines never change the outcome.
    #[test]
    fn prop_blank_lines_ignored(
        entries in prop::collection::vec(relative_path(), 0..10),
        blanks in 0usize..5
    ) {
        let expected = has_top_level_directory(&entries);
        let mut padded = entries.clone();
        padded.extend(std::iter::repeat_n(String::new(), blanks));
        padded.insert(0, String::new());
        prop_assert_eq!(has_top_level_directory(&padded), expected);
    }

    /// Any name ending in `.zip` is a zip archive whose stem is the prefix.
    #[test]
    fn prop_zip_suffix(stem in "[a-zA-Z0-9_-]{1,16}") {
        let path = PathBuf::from(format!("{stem}.zip"));
        prop_assert_eq!(guess_format(&path).unwrap(), ArchiveKind::Zip);
        prop_assert_eq!(archive_stem(&path), Some(stem.as_str()));
    }

    /// Every tar suffix is a tar archive, and only its last extension is
    /// dropped from the directory name.
    #[test]
    fn prop_tar_suffixes(
        stem in "[a-zA-Z0-9_-]{1,16}",
        suffix in prop::sample::select(vec![".tar", ".tar.gz", ".tgz", ".tar.bz", ".tbz"])
    ) {
        let path = PathBuf::from(format!("{stem}{suffix}"));
        prop_assert_eq!(guess_format(&path).unwrap(), ArchiveKind::Tar);

        let expected = match suffix.rsplit_once('.') {
            Some((inner, _)) => format!("{stem}{inner}"),
            None => stem.clone(),
        };
        prop_assert_eq!(archive_stem(&path), Some(expected.as_str()));
    }

    /// Names without a recognized suffix are rejected.
    #[test]
    fn prop_unknown_suffix_rejected(stem in "[a-z]{1,8}", ext in "[a-y]{1,3}") {
        prop_assume!(!["tar", "tgz", "tbz", "zip"].contains(&ext.as_str()));
        let path = PathBuf::from(format!("{stem}.{ext}"));
        prop_assert!(guess_format(&path).is_err());
    }
}
