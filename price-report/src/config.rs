use crate::errors::ReportError;

pub const FORMAT_ENV_VAR: &str = "PRICE_REPORT_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ReportError> {
        Self::from_value(std::env::var(FORMAT_ENV_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, ReportError> {
        let format = match value.map(str::trim) {
            None | Some("") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(v) => return Err(ReportError::UnknownFormat(v.to_string())),
        };
        Ok(Self { format })
    }
}
