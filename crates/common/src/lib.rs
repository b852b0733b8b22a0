//! Shared building blocks for the workspace: tracing setup and small
//! response types used by more than one crate.

pub mod types;

pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_status_field() {
        let json = serde_json::to_string(&types::Health::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
