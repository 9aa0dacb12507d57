//! Route reversal and resolution against the application's route table.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tut_urls::{UrlConf, UrlError, app_urls, names};

#[fixture]
fn urls() -> UrlConf {
    app_urls().expect("built-in routes are valid")
}

#[rstest]
fn homepage_access(urls: UrlConf) {
    let url = urls.reverse(names::HOME).unwrap();
    assert_eq!(url, "/");
}

#[rstest]
fn unknown_name_is_a_lookup_error(urls: UrlConf) {
    let err = urls.reverse("about").unwrap_err();
    assert_eq!(
        err,
        UrlError::NoReverseMatch {
            name: "about".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Reverse for 'about' not found: no route has this name"
    );
}

#[rstest]
#[case(names::HOME, &[], "/")]
#[case(names::TUTORIAL_LIST, &[], "/tutorials/")]
#[case(names::TUTORIAL_DETAIL, &[("id", "7")], "/tutorials/7/")]
#[case(names::TUTORIAL_DETAIL, &[("id", "pytest django")], "/tutorials/pytest%20django/")]
#[case(names::TUTORIAL_DETAIL, &[("id", "..")], "/tutorials/%2E%2E/")]
#[case(names::TUTORIAL_DETAIL, &[("id", ".")], "/tutorials/%2E/")]
fn reverse_then_resolve(
    urls: UrlConf,
    #[case] name: &str,
    #[case] args: &[(&str, &str)],
    #[case] expected: &str,
) {
    let path = urls.reverse_with(name, args).unwrap();
    assert_eq!(path, expected);

    let resolved = urls.resolve(&path).unwrap();
    assert_eq!(resolved.name, name);
    for (key, value) in args {
        assert_eq!(resolved.params.get(*key).map(String::as_str), Some(*value));
    }
}

#[rstest]
fn resolve_detail_exposes_pattern(urls: UrlConf) {
    let resolved = urls.resolve("/tutorials/12/").unwrap();
    assert_eq!(resolved.pattern, "/tutorials/{id}/");
    assert_eq!(
        serde_json::to_value(&resolved).unwrap(),
        serde_json::json!({
            "name": "tutorial-detail",
            "pattern": "/tutorials/{id}/",
            "params": { "id": "12" }
        })
    );
}

#[rstest]
fn undecodable_segment_does_not_resolve(urls: UrlConf) {
    assert!(matches!(
        urls.resolve("/tutorials/%FF/"),
        Err(UrlError::NoMatch { .. })
    ));
}

#[rstest]
fn trailing_slash_is_significant(urls: UrlConf) {
    assert!(matches!(
        urls.resolve("/tutorials"),
        Err(UrlError::NoMatch { .. })
    ));
}

#[rstest]
fn routes_listed_in_registration_order(urls: UrlConf) {
    let listed: Vec<String> = urls.routes().into_iter().map(|r| r.name).collect();
    assert_eq!(
        listed,
        vec![
            names::HOME.to_string(),
            names::TUTORIAL_LIST.to_string(),
            names::TUTORIAL_DETAIL.to_string()
        ]
    );
}
