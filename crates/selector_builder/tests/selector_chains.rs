#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use css_selector_builder::{
    SelectorError, attr, class, combine, element, id, pseudo_class, pseudo_element,
};
use css_selector_builder::{Selector, Specificity};

#[test]
fn full_chain_renders_every_fragment_kind() -> Result<(), SelectorError> {
    let _init = env_logger::builder().is_test(true).try_init();
    let selector = element("a")
        .id("b")?
        .class("c")?
        .attr("d")?
        .pseudo_class("e")?
        .pseudo_element("f")?;
    assert_eq!(selector.stringify(), "a#b.c[d]:e::f");
    Ok(())
}

#[test]
fn id_then_repeated_classes() -> Result<(), SelectorError> {
    let selector = id("main").class("container")?.class("editable")?;
    assert_eq!(selector.stringify(), "#main.container.editable");
    Ok(())
}

#[test]
fn attribute_body_passes_through_verbatim() -> Result<(), SelectorError> {
    let selector = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
    Ok(())
}

#[test]
fn same_stage_repetition_is_permitted() -> Result<(), SelectorError> {
    let classes = class("a").class("b")?.class("c")?;
    assert_eq!(classes.stringify(), ".a.b.c");

    let attrs = attr("checked").attr("data-kind=\"primary\"")?;
    assert_eq!(attrs.stringify(), "[checked][data-kind=\"primary\"]");

    let pseudo_classes = pseudo_class("hover").pseudo_class("focus")?;
    assert_eq!(pseudo_classes.stringify(), ":hover:focus");
    Ok(())
}

#[test]
fn one_shot_fragments_reject_a_second_occurrence() -> Result<(), SelectorError> {
    assert_eq!(
        element("div").element("span"),
        Err(SelectorError::DuplicateSlot)
    );
    assert_eq!(
        id("main").id("other"),
        Err(SelectorError::DuplicateSlot)
    );
    assert_eq!(
        element("p").pseudo_element("before")?.pseudo_element("after"),
        Err(SelectorError::DuplicateSlot)
    );
    Ok(())
}

#[test]
fn earlier_stage_fragments_reject_after_later_stages() -> Result<(), SelectorError> {
    assert_eq!(
        class("x").id("y"),
        Err(SelectorError::OrderViolation)
    );
    assert_eq!(
        id("y").element("div"),
        Err(SelectorError::OrderViolation)
    );
    assert_eq!(
        element("a").pseudo_element("first-line")?.class("x"),
        Err(SelectorError::OrderViolation)
    );
    assert_eq!(
        pseudo_class("hover").attr("checked"),
        Err(SelectorError::OrderViolation)
    );
    Ok(())
}

#[test]
fn branching_from_one_base_keeps_chains_independent() -> Result<(), SelectorError> {
    let base = id("main");
    let left = base.class("a")?;
    let right = base.class("b")?;
    assert_eq!(left.stringify(), "#main.a");
    assert_eq!(right.stringify(), "#main.b");
    assert_eq!(base.stringify(), "#main");
    Ok(())
}

#[test]
fn combine_joins_with_single_spaces() -> Result<(), SelectorError> {
    let left = element("div").id("main")?;
    let combined = combine(&left, "+", &element("span"));
    assert_eq!(combined.stringify(), "div#main + span");
    Ok(())
}

#[test]
fn nested_combinations_join_recursively() -> Result<(), SelectorError> {
    let inner = combine(
        &element("p").pseudo_class("focus")?,
        "~",
        &attr("type=\"submit\""),
    );
    let outer = combine(&element("ul").class("menu")?, ">", &inner);
    assert_eq!(outer.stringify(), "ul.menu > p:focus ~ [type=\"submit\"]");
    Ok(())
}

#[test]
fn combinator_token_passes_through_unvalidated() {
    let combined = combine(&element("a"), "||", &element("b"));
    assert_eq!(combined.stringify(), "a || b");
}

#[test]
fn stringify_is_idempotent() -> Result<(), SelectorError> {
    let selector = element("nav").class("top")?;
    assert_eq!(selector.stringify(), "nav.top");
    assert_eq!(selector.stringify(), "nav.top");
    Ok(())
}

#[test]
fn fresh_selector_accepts_any_first_fragment() {
    assert_eq!(Selector::default().stringify(), "");
    assert_eq!(pseudo_element("selection").stringify(), "::selection");
    assert_eq!(pseudo_class("root").stringify(), ":root");
}

#[test]
fn error_messages_match_the_documented_sentences() {
    assert_eq!(
        SelectorError::DuplicateSlot.to_string(),
        "Element, id and pseudo-element should not occur more than one time inside the selector."
    );
    assert_eq!(
        SelectorError::OrderViolation.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element."
    );
}

#[test]
fn specificity_tracks_appends_and_sums_across_combine() -> Result<(), SelectorError> {
    let compound = element("a")
        .id("b")?
        .class("c")?
        .attr("d")?
        .pseudo_class("e")?
        .pseudo_element("f")?;
    assert_eq!(compound.specificity(), Specificity(1, 3, 2));

    let left = element("div").id("main")?;
    let combined = combine(&left, "+", &element("span"));
    assert_eq!(combined.specificity(), Specificity(1, 0, 2));
    Ok(())
}
