//! End-to-end scenarios through the public API.

use link_uri::{
    ParamValue, Params, ParseErrorKind, Uri, UrlBuilder, UrlConfig, UrlError, UrlOptions,
    path_for,
};

#[test]
fn parse_then_mutate() {
    let mut uri = Uri::parse("http://myapp.test/page?id#me").unwrap();

    assert_eq!(uri.scheme(), Some("http"));
    assert_eq!(uri.protocol(), "http://");
    assert_eq!(uri.host(), Some("myapp.test"));
    assert_eq!(uri.path(), "/page");
    assert_eq!(uri.fragment(), Some("me"));

    uri.set_port(Some(444));
    assert!(!uri.is_standard_port());
    assert_eq!(uri.standard_port(), 80);
    assert_eq!(uri.port_string(), ":444");

    uri.set_host("we.are");
    assert_eq!(uri.host_with_port(), "we.are:444");
    assert_eq!(uri.to_string(), "http://we.are:444/page?id#me");
}

#[test]
fn faulty_strings() {
    assert_eq!(
        Uri::parse_faulty("http://2001:0db8:85a3:0000:0000:8a2e:0370:7334").to_string(),
        "http://[2001:0db8:85a3:0000:0000:8a2e:0370:7334]"
    );
    assert_eq!(Uri::parse_faulty(":").to_string(), "");
}

#[test]
fn strict_parse_propagates_errors() {
    let err = Uri::parse("::not a uri::").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::Invalid(_)));
    assert_eq!(err.input, "::not a uri::");
}

#[test]
fn subdomain_table() {
    let uri = Uri::from_host_header("sub.do.main.app.test", false);

    assert_eq!(uri.subdomain(), "sub.do.main");
    assert_eq!(uri.subdomain_for_tld(2), "sub.do");
    assert_eq!(uri.subdomain_for_tld(3), "sub");
    assert_eq!(uri.subdomains(), vec!["sub", "do", "main"]);
    assert_eq!(uri.subdomains_for_tld(3), vec!["sub"]);
    assert_eq!(uri.domain().as_deref(), Some("app.test"));
    assert_eq!(uri.domain_for_tld(2).as_deref(), Some("main.app.test"));
}

#[test]
fn full_url_without_host_fails() {
    let result = UrlBuilder::default().full_url_for(&UrlOptions::new().with_path("/x"));
    assert_eq!(result, Err(UrlError::MissingHost));
}

#[test]
fn only_path_with_anchor() {
    let options = UrlOptions::new()
        .with_only_path(true)
        .with_path("/x")
        .with_anchor("y z");
    let path = UrlBuilder::default().url_for(&options).unwrap();

    assert!(path.ends_with("#y%20z"));
    assert!(!path.contains("://"));
    assert!(path.starts_with('/'));
}

#[test]
fn request_host_drives_link_generation() {
    // A request arrives on a subdomain; links point at a sibling subdomain.
    let request = Uri::from_host_header("blog.example.com:3000", false);
    let options = UrlOptions::new()
        .with_host(request.host_with_port())
        .with_subdomain("shop")
        .with_path("/cart")
        .with_params(Params::new().with("ref", "blog").with("empty", ParamValue::Null));

    assert_eq!(
        UrlBuilder::default().url_for(&options).unwrap(),
        "http://shop.example.com:3000/cart?ref=blog"
    );
}

#[test]
fn secure_configuration_changes_default_protocol_only() {
    let builder = UrlBuilder::new(UrlConfig::new().with_secure_protocol(true));

    let options = UrlOptions::new().with_host("example.com");
    assert_eq!(builder.url_for(&options).unwrap(), "https://example.com");

    let options = UrlOptions::new().with_host("http://example.com");
    assert_eq!(builder.url_for(&options).unwrap(), "http://example.com");
}

#[test]
fn credentials_and_relative_protocol() {
    let options = UrlOptions::new()
        .with_host("files.example.com")
        .with_relative_protocol()
        .with_port(8080)
        .with_credentials("bot", "s3cret")
        .with_path("/f");

    assert_eq!(
        UrlBuilder::default().url_for(&options).unwrap(),
        "//bot:s3cret@files.example.com:8080/f"
    );
}

#[test]
fn path_for_ignores_host_options() {
    let options = UrlOptions::new()
        .with_host("example.com")
        .with_protocol("not:valid")
        .with_path("/a");
    assert_eq!(path_for(&options), "/a");
}
