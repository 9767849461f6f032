//! Longest-first root search over hyphenated names.

/// Every `(root, value)` split of `input` whose root satisfies `exists`,
/// longest root first.
///
/// The whole input comes first with no value. Then each prefix ending before
/// a `-` is tried, never splitting off a leading `-` so negative roots such as
/// `-translate-x` stay whole. A registered root followed by an empty value
/// (`bg-`) ends the search. `@md` also yields the bare `@` root when it is
/// registered.
pub(super) fn find_roots<'a>(
    input: &'a str,
    exists: impl Fn(&str) -> bool,
) -> Vec<(&'a str, Option<&'a str>)> {
    let mut roots = Vec::new();
    if exists(input) {
        roots.push((input, None));
    }

    let mut end = input.len();
    while let Some(idx) = input[..end].rfind('-') {
        if idx == 0 {
            break;
        }
        let root = &input[..idx];
        if exists(root) {
            let value = &input[idx + 1..];
            if value.is_empty() {
                break;
            }
            roots.push((root, Some(value)));
        }
        end = idx;
    }

    if input.len() > 1 && input.starts_with('@') && exists("@") {
        roots.push(("@", Some(&input[1..])));
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(names: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |name| names.iter().any(|known| *known == name)
    }

    #[test]
    fn longest_root_first() {
        let roots = find_roots("bg-red-500", registered(&["bg", "bg-red"]));
        assert_eq!(roots, vec![("bg-red", Some("500")), ("bg", Some("red-500"))]);
    }

    #[test]
    fn whole_input_has_no_value() {
        let roots = find_roots("shadow", registered(&["shadow"]));
        assert_eq!(roots, vec![("shadow", None)]);
    }

    #[test]
    fn negative_roots_stay_whole() {
        let roots = find_roots("-translate-x-4", registered(&["-translate-x", "translate-x"]));
        assert_eq!(roots, vec![("-translate-x", Some("4"))]);
        assert!(find_roots("-m-4", registered(&["m", "-"])).is_empty());
    }

    #[test]
    fn trailing_hyphen_stops_search() {
        assert!(find_roots("bg-", registered(&["bg"])).is_empty());
    }

    #[test]
    fn at_root_for_container_queries() {
        let roots = find_roots("@md", registered(&["@"]));
        assert_eq!(roots, vec![("@", Some("md"))]);
    }
}
