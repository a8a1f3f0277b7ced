//! Locale resolution.

use curricula_core::{Error, Result};

/// Supported base languages.
///
/// English is deliberately outside the supported set for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Spanish.
    Es,
    /// Portuguese.
    Pt,
}

impl Lang {
    /// Resolve a full locale tag (e.g. `es-ES`, `pt_BR`) to a supported
    /// base language.
    ///
    /// The base language is the substring before the first separator,
    /// lowercased.
    pub fn resolve(tag: &str) -> Result<Self> {
        let base = tag
            .split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_lowercase();

        match base.as_str() {
            "es" => Ok(Self::Es),
            "pt" => Ok(Self::Pt),
            _ => Err(Error::UnsupportedLanguage(base)),
        }
    }

    /// The language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Pt => "pt",
        }
    }

    /// Canonical summary-section heading phrase for this language.
    pub(crate) fn summary_heading(&self) -> &'static str {
        match self {
            Self::Es => "resumen del proyecto",
            Self::Pt => "resumo do projeto",
        }
    }
}

/// README filename for an optional translation suffix.
pub fn readme_filename(suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("README.{suffix}.md"),
        None => "README.md".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_tags() {
        assert_eq!(Lang::resolve("es-ES").unwrap(), Lang::Es);
        assert_eq!(Lang::resolve("pt-BR").unwrap(), Lang::Pt);
        assert_eq!(Lang::resolve("pt_BR").unwrap(), Lang::Pt);
        assert_eq!(Lang::resolve("ES").unwrap(), Lang::Es);
        assert_eq!(Lang::resolve("pt").unwrap(), Lang::Pt);
    }

    #[test]
    fn test_english_unsupported() {
        let err = Lang::resolve("en-GB").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: en");
    }

    #[test]
    fn test_unknown_language() {
        let err = Lang::resolve("fr-FR").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: fr");
    }

    #[test]
    fn test_readme_filename() {
        assert_eq!(readme_filename(None), "README.md");
        assert_eq!(readme_filename(Some("pt")), "README.pt.md");
    }
}
