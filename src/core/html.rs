// src/core/html.rs
//
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::ParseError;

pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        css: s!(css),
        reason: format!("{e:?}"),
    })
}

/// All descendant text of `el`, concatenated as-is (no separators added).
pub fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// Trimmed text, the usual shape for labels and transcript blocks.
pub fn trimmed_text(el: &ElementRef) -> String {
    s!(element_text(el).trim())
}

/// Elements whose text is code or markup, not prose.
const NON_PROSE: &[&str] = &["script", "style", "template"];

/// Trimmed text of a transcript block. Text nested in `<script>`, `<style>` or
/// `<template>` below `el` is skipped; if `el` is itself one of those, its own
/// text is kept.
pub fn block_text(el: &ElementRef) -> String {
    let root = el.id();
    let mut out = String::new();
    for node in el.descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node
            .ancestors()
            .take_while(|a| a.id() != root)
            .filter_map(|a| a.value().as_element())
            .any(|e| NON_PROSE.contains(&e.name()));
        if !hidden {
            out.push_str(text);
        }
    }
    s!(out.trim())
}

/// True if any class on `el` is one of `classes` (exact, case-sensitive).
pub fn has_any_class(el: &ElementRef, classes: &[String]) -> bool {
    el.value().classes().any(|c| classes.iter().any(|x| x == c))
}

/// Direct element children only; text and comment nodes are skipped.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn children_are_direct_elements_only() {
        let doc = Html::parse_document(
            "<main>lead text<div class=\"a\"><p>one</p></div><!-- c --><p>two</p></main>",
        );
        let main = doc.select(&selector("main").unwrap()).next().unwrap();
        let names: Vec<_> = child_elements(main).map(|e| e.value().name().to_string()).collect();
        assert_eq!(names, vec!["div", "p"]);
    }

    #[test]
    fn class_intersection() {
        let doc = Html::parse_document("<div class=\"section title big\">x</div><div>y</div>");
        let sel = selector("div").unwrap();
        let mut divs = doc.select(&sel);
        let first = divs.next().unwrap();
        let second = divs.next().unwrap();
        let excluded = vec![s!("title")];
        assert!(has_any_class(&first, &excluded));
        assert!(!has_any_class(&second, &excluded));
        assert!(!has_any_class(&first, &[s!("Title")]));
    }

    #[test]
    fn text_is_concatenated_then_trimmed() {
        let doc = Html::parse_document("<dt>  4 <b>January</b> 2024 \n</dt>");
        let dt = doc.select(&selector("dt").unwrap()).next().unwrap();
        assert_eq!(trimmed_text(&dt), "4 January 2024");
    }

    #[test]
    fn block_text_skips_nested_code_but_not_its_own() {
        let doc = Html::parse_document(
            "<main><div> Body <script>var x = 1;</script><style>p{}</style>end </div><script> track(); </script></main>",
        );
        let main = doc.select(&selector("main").unwrap()).next().unwrap();
        let blocks: Vec<String> = child_elements(main).map(|e| block_text(&e)).collect();
        assert_eq!(blocks, vec!["Body end", "track();"]);
    }

    #[test]
    fn bad_selector_is_a_parse_error() {
        assert!(matches!(selector("div[").unwrap_err(), ParseError::Selector { .. }));
    }
}
