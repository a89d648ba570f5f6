use super::*;

#[test]
fn alt_text_uses_file_stem_words() {
    assert_eq!(alt_text("/images/sunset-beach.jpg"), "sunset beach");
    assert_eq!(alt_text("/images/studio_portrait_02.webp"), "studio portrait 02");
}

#[test]
fn alt_text_without_directory_or_extension() {
    assert_eq!(alt_text("hero"), "hero");
    assert_eq!(alt_text("/images/--x--.png"), "x");
}
