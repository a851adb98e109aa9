//! Starter files written by `seokit init`.
//!
//! The templates are kept as real TOML so tests can parse them. They are
//! written out with every setting commented, so a fresh file changes nothing
//! until the user opts in.

/// Which starter file to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// A project file next to the articles.
    Local,
    /// The per-user `~/.seokit.toml`.
    Global,
}

impl Template {
    /// Returns the uncommented TOML source.
    fn source(self) -> &'static str {
        match self {
            Self::Local => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }

    /// Returns the template with every setting commented out.
    pub fn render(self) -> String {
        self.source()
            .lines()
            .map(|line| {
                if line.is_empty() || line.starts_with('#') {
                    format!("{line}\n")
                } else {
                    format!("# {line}\n")
                }
            })
            .collect()
    }
}
