//! Config Module Tests
//!
//! Validates flag parsing and the derived bind address.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::search::HighlightMode;
    use clap::Parser;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    // ============================================================
    // FLAG PARSING TESTS
    // ============================================================

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "folio-search",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--corpus",
            "works.txt",
            "--static-dir",
            "public",
            "--highlight",
            "pattern",
        ])
        .expect("flags should parse");

        assert_eq!(config.port, 8080);
        assert_eq!(config.corpus_path, PathBuf::from("works.txt"));
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.highlight_mode, HighlightMode::Pattern);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    // ============================================================
    // REJECTION TESTS
    // ============================================================

    #[test]
    fn test_rejects_unknown_highlight_mode() {
        let result = Config::try_parse_from(["folio-search", "--highlight", "fuzzy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = Config::try_parse_from(["folio-search", "--port", "70000"]);
        assert!(result.is_err());
    }
}
