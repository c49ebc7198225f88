//! Pure conversion functions: TOML config structs -> crate API config types.

use daycount_calendar::SweepConfig;

use crate::cli::VerifyArgs;
use crate::config::VerifyToml;

/// Builds a sweep configuration, with CLI flags taking precedence over TOML.
pub fn build_sweep_config(toml: &VerifyToml, args: &VerifyArgs) -> SweepConfig {
    SweepConfig {
        years: args.years.unwrap_or(toml.years),
        chunk_years: args.chunk_years.unwrap_or(toml.chunk_years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(years: Option<i32>, chunk_years: Option<i32>) -> VerifyArgs {
        VerifyArgs {
            config: None,
            years,
            chunk_years,
        }
    }

    #[test]
    fn toml_values_without_flags() {
        let toml = VerifyToml {
            years: 800,
            chunk_years: 80,
        };
        let cfg = build_sweep_config(&toml, &args(None, None));
        assert_eq!(cfg.years, 800);
        assert_eq!(cfg.chunk_years, 80);
    }

    #[test]
    fn flags_override_toml() {
        let toml = VerifyToml::default();
        let cfg = build_sweep_config(&toml, &args(Some(5), None));
        assert_eq!(cfg.years, 5);
        assert_eq!(cfg.chunk_years, toml.chunk_years);

        let cfg = build_sweep_config(&toml, &args(None, Some(7)));
        assert_eq!(cfg.years, toml.years);
        assert_eq!(cfg.chunk_years, 7);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cfg = build_sweep_config(&VerifyToml::default(), &args(None, None));
        assert_eq!(cfg, SweepConfig::default());
    }
}
