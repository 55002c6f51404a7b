//! Command line configuration of the desktop app.

use crate::profile::Profile;
use clap::{value_parser, Arg, Command};
use percept::{PerceptronError, PerceptronParams};
use std::error::Error;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub profile: Profile,
    pub params: PerceptronParams<f64>,
}

fn command() -> Command {
    Command::new("perceptron-desk")
        .about("Record keeping with a perceptron that predicts the outcome of new entries")
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_parser(["employee", "student"])
                .default_value("employee")
                .help("Which kind of records to manage"),
        )
        .arg(
            Arg::new("learning-rate")
                .long("learning-rate")
                .value_parser(value_parser!(f64))
                .default_value("0.01")
                .help("Step size of the weight updates"),
        )
        .arg(
            Arg::new("iterations")
                .long("iterations")
                .value_parser(value_parser!(u32))
                .default_value("100")
                .help("Number of passes over the records per training"),
        )
}

impl AppConfig {
    pub fn from_args<I, T>(args: I) -> Result<Self, Box<dyn Error + Send + Sync>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let profile = matches
            .get_one::<String>("profile")
            .map(|s| s.parse::<Profile>())
            .transpose()?
            .unwrap_or(Profile::Employee);
        let learning_rate = matches
            .get_one::<f64>("learning-rate")
            .copied()
            .ok_or(PerceptronError::InvalidLearningRate)?;
        let iterations = matches
            .get_one::<u32>("iterations")
            .copied()
            .ok_or(PerceptronError::InvalidIterations)?;

        let params = PerceptronParams::new(learning_rate, iterations)?;
        Ok(Self { profile, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_args(["perceptron-desk"]).unwrap();
        assert_eq!(config.profile, Profile::Employee);
        assert_eq!(config.params, PerceptronParams::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_args([
            "perceptron-desk",
            "--profile",
            "student",
            "--learning-rate",
            "0.1",
            "--iterations",
            "10",
        ])
        .unwrap();
        assert_eq!(config.profile, Profile::Student);
        assert_eq!(config.params.learning_rate(), 0.1);
        assert_eq!(config.params.iterations(), 10);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(AppConfig::from_args(["perceptron-desk", "--iterations", "0"]).is_err());
        assert!(AppConfig::from_args(["perceptron-desk", "--learning-rate", "-1"]).is_err());
        assert!(AppConfig::from_args(["perceptron-desk", "--profile", "manager"]).is_err());
    }
}
