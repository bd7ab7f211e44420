use clap::ValueEnum;
use projext_rollup::BuildType;

/// Build type of the configuration to print
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum BuildTypeArg {
    /// Unminified output, dev server or node runner when enabled
    #[value(name = "development")]
    Development,

    /// Hashed, minified and compressed output
    #[value(name = "production")]
    Production,
}

impl From<BuildTypeArg> for BuildType {
    fn from(value: BuildTypeArg) -> Self {
        match value {
            BuildTypeArg::Development => BuildType::Development,
            BuildTypeArg::Production => BuildType::Production,
        }
    }
}
