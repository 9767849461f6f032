//! Property-based tests for candidate parsing and printing
//!
//! - Parsing is deterministic: re-parsing `raw` gives the same candidate
//! - Printing is the inverse of parsing, apart from `raw`
//! - The segmenter never panics and only ever cuts at delimiters

use atomic_candidates::candidate::{
    decode_arbitrary_value, parse_candidate, print_candidate, segment, Candidate,
};
use atomic_candidates::catalog::{self, Catalog};
use proptest::prelude::*;

fn defaults() -> Catalog {
    catalog::load_defaults().expect("default catalog to load")
}

fn without_raw(candidate: Candidate) -> Candidate {
    match candidate {
        Candidate::Static {
            root,
            important,
            variants,
            ..
        } => Candidate::Static {
            root,
            important,
            variants,
            raw: String::new(),
        },
        Candidate::Functional {
            root,
            value,
            modifier,
            important,
            variants,
            ..
        } => Candidate::Functional {
            root,
            value,
            modifier,
            important,
            variants,
            raw: String::new(),
        },
        Candidate::Arbitrary {
            property,
            value,
            modifier,
            important,
            variants,
            ..
        } => Candidate::Arbitrary {
            property,
            value,
            modifier,
            important,
            variants,
            raw: String::new(),
        },
    }
}

/// Variant text the default catalog accepts
fn variant_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hover"),
        Just("focus"),
        Just("md"),
        Just("dark"),
        Just("group-hover"),
        Just("peer-checked/name"),
        Just("not-first"),
        Just("group-not-hover"),
        Just("data-open"),
        Just("data-[state=open]"),
        Just("aria-checked"),
        Just("supports-[display:grid]"),
        Just("@md"),
        Just("@min-[400px]"),
        Just("[&_p]"),
        Just("[>_li]"),
        Just("group-[&:hover]/card"),
        Just("has-[img]"),
        Just("nth-3"),
        Just("min-[640px]"),
    ]
    .prop_map(str::to_string)
}

/// Utility text the default catalog accepts
fn utility_strategy() -> impl Strategy<Value = String> {
    let fixed = prop_oneof![
        Just("flex"),
        Just("shadow"),
        Just("shadow/50"),
        Just("bg-[#fff]"),
        Just("bg-[color:red]"),
        Just("bg-[color:var(--brand)]"),
        Just("bg-[var(--brand)]"),
        Just("bg-(--brand)"),
        Just("bg-(color:--brand)"),
        Just("bg-red/[50%]"),
        Just("text-red/(--alpha)"),
        Just("[mask-type:luminance]"),
        Just("[--gap:1rem]/50"),
        Just(r#"content-["a_b"]"#),
        Just("grid-cols-[1fr_2fr]"),
        Just("bg-[url(/a_b.png)_center]"),
        Just("-translate-x-4"),
        Just("p-0.5"),
    ]
    .prop_map(str::to_string);

    let named = (
        prop_oneof![Just("bg"), Just("text"), Just("w"), Just("m"), Just("-m"), Just("gap-x")],
        "[a-z0-9][a-z0-9.%-]{0,8}",
        proptest::option::of("[0-9]{1,3}"),
    )
        .prop_map(|(root, value, modifier)| match modifier {
            Some(modifier) => format!("{root}-{value}/{modifier}"),
            None => format!("{root}-{value}"),
        });

    prop_oneof![fixed, named]
}

fn candidate_strategy() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(variant_strategy(), 0..4),
        utility_strategy(),
        any::<bool>(),
    )
        .prop_map(|(variants, utility, important)| {
            let mut raw = String::new();
            for variant in variants {
                raw.push_str(&variant);
                raw.push(':');
            }
            raw.push_str(&utility);
            if important {
                raw.push('!');
            }
            raw
        })
}

/// Class-like noise: mostly grammar characters, no whitespace, quotes or escapes
fn noise_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9:/!@&>#=%.()\\[\\]_-]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_candidates_parse(raw in candidate_strategy()) {
        let catalog = defaults();
        prop_assert!(parse_candidate(&raw, &catalog).is_some(), "failed to parse {}", raw);
    }

    #[test]
    fn reparsing_raw_is_idempotent(raw in prop_oneof![candidate_strategy(), noise_strategy()]) {
        let catalog = defaults();
        if let Some(candidate) = parse_candidate(&raw, &catalog) {
            prop_assert_eq!(candidate.raw(), raw.as_str());
            prop_assert_eq!(parse_candidate(candidate.raw(), &catalog), Some(candidate));
        }
    }

    #[test]
    fn printing_round_trips(raw in prop_oneof![candidate_strategy(), noise_strategy()]) {
        let catalog = defaults();
        if let Some(candidate) = parse_candidate(&raw, &catalog) {
            let printed = print_candidate(&candidate, None);
            let reparsed = parse_candidate(&printed, &catalog);
            prop_assert!(reparsed.is_some(), "{} printed as {} which does not parse", raw, printed);
            prop_assert_eq!(
                reparsed.map(without_raw),
                Some(without_raw(candidate)),
                "{} printed as {}",
                raw,
                printed
            );
        }
    }

    #[test]
    fn segment_only_cuts_at_delimiters(
        input in "\\PC{0,32}",
        delimiter in prop_oneof![Just(':'), Just('/'), Just('-')],
    ) {
        let parts = segment(&input, delimiter);
        if !parts.is_empty() {
            prop_assert_eq!(parts.join(&delimiter.to_string()), input);
        }
    }

    #[test]
    fn segment_handles_bracket_noise(input in noise_strategy()) {
        let parts = segment(&input, ':');
        if !parts.is_empty() {
            prop_assert_eq!(parts.join(":"), input);
        }
    }

    #[test]
    fn decoding_never_panics(input in "\\PC{0,32}") {
        let decoded = decode_arbitrary_value(&input);
        prop_assert!(decoded.len() <= input.len());
    }
}

#[test]
fn prefixed_round_trip() {
    let catalog = catalog::Loader::new()
        .set_override("prefix", "tw")
        .unwrap()
        .build()
        .unwrap();
    let candidate = parse_candidate("tw:group-hover:bg-red-500/50!", &catalog).unwrap();
    let printed = print_candidate(&candidate, Some("tw"));
    assert_eq!(printed, "tw:group-hover:bg-red-500/50!");
    assert_eq!(parse_candidate(&printed, &catalog), Some(candidate));
}
