//! Build-time feature flags.

/// Name of the build-time variable enabling preview mode.
pub const PREVIEW_MODE_VAR: &str = "MEGILANCE_PREVIEW_MODE";

/// Whether this build was made with `MEGILANCE_PREVIEW_MODE=1`.
///
/// Never fails: an unset or unexpected value is `false`.
pub fn is_preview_mode() -> bool {
    flag_enabled(option_env!("MEGILANCE_PREVIEW_MODE"))
}

/// `"1"` enables a flag; anything else (including absence) disables it.
pub fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_enables() {
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some(" 1 ")));
        assert!(!flag_enabled(Some("0")));
        assert!(!flag_enabled(Some("true")));
        assert!(!flag_enabled(Some("")));
        assert!(!flag_enabled(None));
    }
}
