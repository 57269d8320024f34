//! Loader for the currency reference file the form validates against.

use std::fs;
use std::path::{Path, PathBuf};

use jobrec_model::Currency;
use thiserror::Error;

/// The currency reference file is missing or unparsable.
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("failed to read currency data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse currency data {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the full currency reference list.
pub fn load_currencies(path: &Path) -> Result<Vec<Currency>, CurrencyError> {
    let contents = fs::read_to_string(path).map_err(|source| CurrencyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CurrencyError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the selector choices (`"$ - USD"` style strings) for the form.
///
/// Missing or malformed reference data is logged and yields an empty list,
/// which leaves the currency field permanently failing its membership check
/// until the data is corrected. No valid currency is ever guessed.
pub fn load_currency_choices_or_empty(path: &Path) -> Vec<String> {
    match load_currencies(path) {
        Ok(currencies) => currencies.iter().map(Currency::display_choice).collect(),
        Err(error) => {
            tracing::warn!(%error, "currency reference unavailable, no currency selectable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_choices_from_reference_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"code":"USD","numeric":"840","name":"United States dollar","shortName":"dollar","decimals":2,"symbol":"$"}},
                {{"code":"EUR","numeric":"978","name":"Euro","shortName":"euro","decimals":2,"symbol":"€"}}
            ]"#
        )
        .expect("write currency data");

        let choices = load_currency_choices_or_empty(file.path());
        assert_eq!(choices, ["$ - USD", "€ - EUR"]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().expect("temp dir");
        let choices = load_currency_choices_or_empty(&dir.path().join("nope.json"));
        assert!(choices.is_empty());
    }

    #[test]
    fn malformed_file_yields_empty_list() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write garbage");
        assert!(load_currency_choices_or_empty(file.path()).is_empty());
        assert!(matches!(
            load_currencies(file.path()),
            Err(CurrencyError::Json { .. })
        ));
    }
}
