//! Library API surface tests.

use docready::config::{Config, DEFAULT_BIND_ADDR};
use docready::probe::ToolStatus;
use docready::ReadyError;

#[test]
fn error_types_are_public() {
    let err = ReadyError::InvalidBindAddr {
        addr: "bad".into(),
        message: "test".into(),
    };
    assert!(err.to_string().contains("bad"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> docready::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn status_strings_are_stable() {
    assert_eq!(ToolStatus::Ok.to_string(), "ok");
    assert_eq!(
        ToolStatus::OkVia("pdftoppm".into()).to_string(),
        "ok (via pdftoppm)"
    );
    assert_eq!(ToolStatus::Error.to_string(), "error");
    assert_eq!(ToolStatus::Missing.to_string(), "missing");
}

#[test]
fn default_config_is_valid() {
    let config = Config::from_bind_addr(DEFAULT_BIND_ADDR).unwrap();
    assert_eq!(config.bind_addr.port(), 8000);
}

#[test]
fn router_is_constructible() {
    let _app = docready::server::router();
}
