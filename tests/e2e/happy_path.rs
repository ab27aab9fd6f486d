use super::*;

#[test]
fn show_renders_the_page_for_a_scored_cve() {
    let mut server = mockito::Server::new();
    let mock = mock_cve_response(&mut server, "CVE-2024-0001", &single_vuln_body("CVE-2024-0001"));

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-2024-0001"], &server.url());

    assert_success(&result);
    // the identifier, the English description and the 3.1 badge
    assert_output_contains(&result, "CVE-2024-0001");
    assert_output_contains(&result, "Heap overflow in the widget parser.");
    assert_output_contains(&result, "3.1");
    assert_output_contains(&result, "7.5");
    assert_output_contains(&result, "high");
    // supplemental sections
    assert_output_contains(&result, "Linux kernel");
    assert_output_contains(&result, "CWE-787");
    assert_output_contains(&result, "https://example.com/advisory");
    mock.assert();
}

#[test]
fn show_prefers_the_english_description() {
    let mut server = mockito::Server::new();
    let _mock = mock_cve_response(&mut server, "CVE-2024-0002", &single_vuln_body("CVE-2024-0002"));

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-2024-0002"], &server.url());

    assert_success(&result);
    assert_output_contains(&result, "Heap overflow in the widget parser.");
    assert!(
        !result.stdout.contains("Bonjour"),
        "non-English description should not be rendered when an English one exists"
    );
}

#[test]
fn show_marks_an_unscored_cve_as_not_available() {
    let mut server = mockito::Server::new();
    let _mock = mock_cve_response(
        &mut server,
        "CVE-2024-0003",
        &unscored_vuln_body("CVE-2024-0003"),
    );

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["show", "CVE-2024-0003"], &server.url());

    assert_success(&result);
    assert_output_contains(&result, "not available");
    assert_output_contains(&result, "Unscored issue in the widget parser.");
}

#[test]
fn json_prints_the_raw_record() {
    let mut server = mockito::Server::new();
    let _mock = mock_cve_response(&mut server, "CVE-2024-0004", &single_vuln_body("CVE-2024-0004"));

    let ctx = TestContext::new();
    let result = ctx.run_nvdq(&["json", "CVE-2024-0004"], &server.url());

    assert_success(&result);
    assert_output_contains(&result, "\"CVE-2024-0004\"");
    assert_output_contains(&result, "\"cvssMetricV31\"");
    assert_output_contains(&result, "\"vulnerabilities\"");
}
