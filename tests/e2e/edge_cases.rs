use super::*;

#[test]
fn upstream_404_fails_with_the_status_text() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create();

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-2024-9999"], &server.url());

    assert_failure(&result);
    assert_stderr_contains(&result, "404 Not Found");
    assert!(
        !result.stdout.contains("CVSS"),
        "no page should be rendered on a fetch failure"
    );
}

#[test]
fn empty_result_for_a_valid_body_is_a_lookup_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EMPTY_RESULT_BODY)
        .create();

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-1900-0000"], &server.url());

    assert_failure(&result);
    assert_stderr_contains(&result, "no record found for CVE-1900-0000");
}

#[test]
fn a_non_json_body_is_a_parse_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .create();

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-2024-0001"], &server.url());

    assert_failure(&result);
    assert_stderr_contains(&result, "parse");
}

#[test]
fn json_passes_an_empty_result_through() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EMPTY_RESULT_BODY)
        .create();

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["json", "CVE-1900-0000"], &server.url());

    // the raw dump is a fetch passthrough; an empty sequence is still a
    // well-formed response
    assert_success(&result);
    assert_output_contains(&result, "\"totalResults\": 0");
}
