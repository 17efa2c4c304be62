//! Directory-listing data model
//!
//! Pure data: the HTTP layer enumerates the directory and turns this model
//! into HTML. Entry order is whatever the filesystem handed back — no
//! sorting, no filtering.

/// One entry of a rendered directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display name, exactly as enumerated
    pub name: String,
    /// Directories navigate, files download
    pub is_dir: bool,
    /// Link target relative to the service root, percent-encoded per segment
    pub href: String,
}

/// Build listing entries for `request_path` (the client-visible relative
/// path of the directory being listed) from `(name, is_dir)` pairs in
/// enumeration order.
///
/// The request path arrives percent-decoded, so every href segment is
/// re-encoded — the prefix included, or a directory named `my#dir` would
/// emit links the browser truncates at the fragment marker.
pub fn build_listing<I>(request_path: &str, entries: I) -> Vec<ListingEntry>
where
    I: IntoIterator<Item = (String, bool)>,
{
    let prefix = request_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    entries
        .into_iter()
        .map(|(name, is_dir)| {
            let encoded = urlencoding::encode(&name).into_owned();
            let href = if prefix.is_empty() {
                format!("/{encoded}")
            } else {
                format!("/{prefix}/{encoded}")
            };
            ListingEntry { name, is_dir, href }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_enumeration_order() {
        let entries = build_listing(
            "",
            vec![
                ("zebra.txt".to_string(), false),
                ("apple".to_string(), true),
                ("Mango.pdf".to_string(), false),
            ],
        );
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zebra.txt", "apple", "Mango.pdf"]);
        assert!(entries[1].is_dir);
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn hrefs_join_the_request_path() {
        let entries = build_listing("reports/2023", vec![("q4.pdf".to_string(), false)]);
        assert_eq!(entries[0].href, "/reports/2023/q4.pdf");

        let at_root = build_listing("/", vec![("readme.md".to_string(), false)]);
        assert_eq!(at_root[0].href, "/readme.md");
    }

    #[test]
    fn names_are_percent_encoded_in_hrefs_only() {
        let entries = build_listing("", vec![("with space#.txt".to_string(), false)]);
        assert_eq!(entries[0].name, "with space#.txt");
        assert_eq!(entries[0].href, "/with%20space%23.txt");
    }

    #[test]
    fn request_path_prefix_is_percent_encoded_too() {
        // The prefix arrives decoded; a raw '#' or '%' in it would break
        // every link in the directory.
        let entries = build_listing("my#dir", vec![("file.txt".to_string(), false)]);
        assert_eq!(entries[0].href, "/my%23dir/file.txt");

        let nested = build_listing(
            "reports/100% done",
            vec![("q4.pdf".to_string(), false)],
        );
        assert_eq!(nested[0].href, "/reports/100%25%20done/q4.pdf");
    }
}
