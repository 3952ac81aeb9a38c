// src/application/ports/util.rs
/// Turns free text (titles, categories, author names) into a URL path segment.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
