use proptest::prelude::*;
use repocost_lang::LanguageCatalog;

proptest! {
    #[test]
    fn classification_ignores_directories(
        dirs in prop::collection::vec("[a-z]{1,8}", 0..6),
        stem in "[a-z]{1,8}",
        ext in prop::sample::select(vec!["r", "py", "js", "sql", "md", "zzz", "tar"]),
    ) {
        let catalog = LanguageCatalog::default_catalog();
        let name = format!("{stem}.{ext}");
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        prop_assert_eq!(
            catalog.classify(std::path::Path::new(&path)),
            catalog.classify_name(&name)
        );
    }

    #[test]
    fn extension_case_does_not_matter(stem in "[a-z]{1,8}", ext in prop::sample::select(vec!["r", "py", "js", "html", "yaml"])) {
        let catalog = LanguageCatalog::default_catalog();
        let lower = format!("{stem}.{ext}");
        let upper = format!("{stem}.{}", ext.to_uppercase());
        prop_assert_eq!(catalog.classify_name(&lower), catalog.classify_name(&upper));
    }
}
