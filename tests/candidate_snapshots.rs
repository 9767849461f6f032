//! JSON shape of parsed candidates.

use atomic_candidates::candidate::parse_candidate;
use atomic_candidates::catalog;
use insta::assert_snapshot;

fn parse_json(raw: &str) -> String {
    let catalog = catalog::load_defaults().expect("default catalog to load");
    let candidate = parse_candidate(raw, &catalog);
    serde_json::to_string(&candidate).expect("candidate to serialize")
}

#[test]
fn static_candidate() {
    assert_snapshot!(parse_json("flex!"), @r#"{"kind":"static","root":"flex","important":true,"variants":[],"raw":"flex!"}"#);
}

#[test]
fn functional_candidate_with_fraction() {
    assert_snapshot!(parse_json("hover:bg-red-500/50"), @r#"{"kind":"functional","root":"bg","value":{"kind":"named","value":"red-500","fraction":"red-500/50"},"modifier":{"kind":"named","value":"50"},"important":false,"variants":[{"kind":"static","root":"hover"}],"raw":"hover:bg-red-500/50"}"#);
}

#[test]
fn functional_candidate_with_typed_arbitrary_value() {
    assert_snapshot!(parse_json("bg-[color:var(--brand)]"), @r#"{"kind":"functional","root":"bg","value":{"kind":"arbitrary","value":"var(--brand)","dataType":"color"},"modifier":null,"important":false,"variants":[],"raw":"bg-[color:var(--brand)]"}"#);
}

#[test]
fn bare_functional_root() {
    assert_snapshot!(parse_json("shadow/50"), @r#"{"kind":"functional","root":"shadow","value":null,"modifier":{"kind":"named","value":"50"},"important":false,"variants":[],"raw":"shadow/50"}"#);
}

#[test]
fn arbitrary_property() {
    assert_snapshot!(parse_json("[grid-template-areas:'a_b']"), @r#"{"kind":"arbitrary","property":"grid-template-areas","value":"'a b'","modifier":null,"important":false,"variants":[],"raw":"[grid-template-areas:'a_b']"}"#);
}

#[test]
fn nested_compound_variant() {
    assert_snapshot!(parse_json("group-not-[&_p]/card:flex"), @r#"{"kind":"static","root":"flex","important":false,"variants":[{"kind":"compound","root":"group","modifier":{"kind":"named","value":"card"},"variant":{"kind":"compound","root":"not","modifier":null,"variant":{"kind":"arbitrary","selector":"& p","relative":false}}}],"raw":"group-not-[&_p]/card:flex"}"#);
}

#[test]
fn functional_variant_with_arbitrary_value() {
    assert_snapshot!(parse_json("data-[state=open]:flex"), @r#"{"kind":"static","root":"flex","important":false,"variants":[{"kind":"functional","root":"data","value":{"kind":"arbitrary","value":"state=open","dataType":null},"modifier":null}],"raw":"data-[state=open]:flex"}"#);
}

#[test]
fn rejected_candidate() {
    assert_snapshot!(parse_json("unknown-utility"), @"null");
}
