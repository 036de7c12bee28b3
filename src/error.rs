use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config file error: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Climate data error: {0}")]
    ClimateParse(#[from] serde_json::Error),
    #[error("Sensor error: {0}")]
    SensorError(String),
    #[error("Actuator error: {0}")]
    ActuatorError(String),
}
