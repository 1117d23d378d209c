use std::{
    env::VarError,
    fs,
    io::{self, Read},
    path::PathBuf,
};

use log::debug;
use spotify_search_decoder::{errors::Result, search::SAMPLE_RESPONSE};

/// Environment variable naming the document to decode when `--input` is absent
pub const INPUT_ENV_VAR: &str = "SPOTIFY_SEARCH_INPUT";

/// Where the JSON document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    BundledSample,
}

impl InputSource {
    /// `-` selects standard input, anything else is a file path
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(value))
        }
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            InputSource::File(path) => fs::read(path)?,
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
            InputSource::BundledSample => SAMPLE_RESPONSE.as_bytes().to_vec(),
        };
        debug!("Read {} bytes from {self:?}", bytes.len());
        Ok(bytes)
    }
}

/// Which part of the decoded response gets printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    /// Genres of the first artist
    #[default]
    Genres,
    /// One line per artist
    Artists,
    /// Envelope metadata
    Pagination,
}

// Configuration for a single decode run
#[derive(Debug)]
pub struct Config {
    pub input: InputSource,
    pub view: View,
}

pub struct ConfigBuilder {
    input: Option<InputSource>,
    view: Option<View>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            view: None,
        }
    }

    pub fn input(mut self, input: Option<&str>) -> Self {
        self.input = input.map(InputSource::parse);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn build(self) -> Result<Config> {
        let env = std::env::var(INPUT_ENV_VAR);
        self.resolve(env)
    }

    // Flag wins over environment, environment over the bundled sample
    fn resolve(self, env: std::result::Result<String, VarError>) -> Result<Config> {
        let input = match self.input {
            Some(input) => input,
            None => match env {
                Ok(value) if !value.is_empty() => InputSource::parse(&value),
                Ok(_) | Err(VarError::NotPresent) => InputSource::BundledSample,
                Err(err) => return Err(err.into()),
            },
        };
        Ok(Config {
            input,
            view: self.view.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{env::VarError, ffi::OsString, path::PathBuf};

    use spotify_search_decoder::errors::Error;

    use super::{ConfigBuilder, InputSource, View};

    #[test]
    fn flag_overrides_environment() {
        let config = ConfigBuilder::new()
            .input(Some("search.json"))
            .resolve(Ok("other.json".to_string()))
            .unwrap();
        assert_eq!(config.input, InputSource::File(PathBuf::from("search.json")));
        assert_eq!(config.view, View::Genres);
    }

    #[test]
    fn environment_used_without_flag() {
        let config = ConfigBuilder::new()
            .view(View::Artists)
            .resolve(Ok("-".to_string()))
            .unwrap();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.view, View::Artists);
    }

    #[test]
    fn falls_back_to_bundled_sample() {
        for env in [Err(VarError::NotPresent), Ok(String::new())] {
            let config = ConfigBuilder::new().resolve(env).unwrap();
            assert_eq!(config.input, InputSource::BundledSample);
        }
    }

    #[test]
    fn non_unicode_environment_is_a_configuration_error() {
        let env = Err(VarError::NotUnicode(OsString::from("x")));
        let err = ConfigBuilder::new().resolve(env).unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/search.json"));
        assert!(matches!(source.read().unwrap_err(), Error::InputError(_)));
    }
}
