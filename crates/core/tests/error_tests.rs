// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use stock_control_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api() {
        let err = CoreError::Api {
            endpoint: "/api/produtos".into(),
            message: "unexpected body".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (/api/produtos): unexpected body"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn rejected() {
        let err = CoreError::Rejected("Estoque insuficiente".into());
        assert_eq!(
            err.to_string(),
            "Backend rejected the request: Estoque insuficiente"
        );
    }

    #[test]
    fn rejected_empty_message() {
        let err = CoreError::Rejected(String::new());
        assert_eq!(err.to_string(), "Backend rejected the request: ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("missing field `nome`".into());
        assert_eq!(
            err.to_string(),
            "Deserialization error: missing field `nome`"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("Movement quantity must be positive".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Movement quantity must be positive"
        );
    }

    #[test]
    fn product_not_found() {
        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let parse_err = serde_json::from_str::<i64>("not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn deserialization_keeps_serde_message() {
        let parse_err = serde_json::from_str::<i64>("{}").unwrap_err();
        let message = parse_err.to_string();
        let err: CoreError = parse_err.into();
        assert!(err.to_string().contains(&message));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::ProductNotFound(1));
    }

    #[test]
    fn debug_is_distinct_from_display() {
        let err = CoreError::Network("boom".into());
        assert_eq!(format!("{err:?}"), "Network(\"boom\")");
        assert_eq!(format!("{err}"), "Network error: boom");
    }
}
