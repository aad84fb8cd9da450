//! Raw remote ref listings

/// Raw output of a remote tag listing: newline-delimited `<oid>\t<ref>`
/// records, as produced by `git ls-remote --tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefListing {
    raw: String,
}

impl RefListing {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Iterates over tag names in the listing.
    ///
    /// The `refs/tags/` prefix is stripped, as is the `^{}` suffix that marks
    /// an annotated-tag dereference, so both records of an annotated tag
    /// yield the same name. Records without a tab or outside the tags
    /// namespace are skipped.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.lines().filter_map(|line| {
            let (_oid, r) = line.split_once('\t')?;
            let tag = r.strip_prefix("refs/tags/")?;
            Some(tag.strip_suffix("^{}").unwrap_or(tag))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_strips_prefix_and_dereference_suffix() {
        let listing = RefListing::new(
            "f5cbb7a1\trefs/tags/v1.2.3\n\
             9d2c8a00\trefs/tags/v1.2.3^{}\n",
        );

        assert_eq!(
            listing.tag_names().collect::<Vec<_>>(),
            vec!["v1.2.3", "v1.2.3"]
        );
    }

    #[test]
    fn tag_names_skips_records_outside_tags_namespace() {
        let listing = RefListing::new(
            "f5cbb7a1\trefs/heads/main\n\
             not a ref record\n\
             9d2c8a00\trefs/tags/v2.0.0\n",
        );

        assert_eq!(listing.tag_names().collect::<Vec<_>>(), vec!["v2.0.0"]);
    }

    #[test]
    fn tag_names_is_empty_for_empty_listing() {
        let listing = RefListing::new("");
        assert_eq!(listing.tag_names().count(), 0);
    }
}
