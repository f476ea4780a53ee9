use std::path::Path;

use futures::future::{self, TryFutureExt};
use futures::Future;
use serde::Deserialize;

use crate::dot::DotParams;
use crate::error::Error;
use crate::surface::Rgb;

/// Tunables of a dot field, read from a JSON file such as
///
/// ```json
/// { "dot_color": [250, 250, 250], "dot_count": 70, "dot_distance": 100 }
/// ```
///
/// Missing keys take their default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub dot_color: Rgb,
    pub dot_count: usize,
    pub dot_distance: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            dot_color: Rgb(250, 250, 250),
            dot_count: 100,
            dot_distance: 100.0,
            min_speed: 0.1,
            max_speed: 1.1,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<(), Error> {
        for &speed in &[self.min_speed, self.max_speed] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(Error::InvalidSpeed(speed));
            }
        }
        if self.min_speed > self.max_speed {
            return Err(Error::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !self.dot_distance.is_finite() || self.dot_distance <= 0.0 {
            return Err(Error::InvalidDotDistance(self.dot_distance));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Options, Error> {
        let options: Options = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and validates an options file.
    pub fn load<P: AsRef<Path>>(path: P) -> impl Future<Output = Result<Options, Error>> {
        tokio::fs::read_to_string(path.as_ref().to_path_buf())
            .map_err(Error::from)
            .and_then(|text| future::ready(Options::from_json(&text)))
    }

    pub fn params(&self) -> DotParams {
        DotParams {
            dot_distance: self.dot_distance,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.dot_color, Rgb(250, 250, 250));
        assert_eq!(options.dot_count, 100);
        assert_eq!(options.dot_distance, 100.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = Options::from_json(r#"{ "dot_count": 70, "dot_color": [10, 20, 30] }"#).unwrap();
        assert_eq!(options.dot_count, 70);
        assert_eq!(options.dot_color, Rgb(10, 20, 30));
        assert_eq!(options.min_speed, 0.1);
        assert_eq!(options.max_speed, 1.1);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        assert!(matches!(
            Options::from_json(r#"{ "dot_count": -1 }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_inverted_speed_range_is_rejected() {
        let options = Options {
            min_speed: 2.0,
            max_speed: 1.0,
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(Error::SpeedRange { min, max }) if min == 2.0 && max == 1.0
        ));
    }

    #[test]
    fn test_equal_speeds_are_valid() {
        let options = Options {
            min_speed: 1.0,
            max_speed: 1.0,
            ..Options::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_bad_distance_and_speed() {
        let options = Options {
            dot_distance: 0.0,
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidDotDistance(_))));

        let options = Options {
            min_speed: f32::NAN,
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidSpeed(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("connected_dots_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "dot_distance": 50, "max_speed": 2.5 }"#).unwrap();

        let options = Options::load(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.dot_distance, 50.0);
        assert_eq!(options.max_speed, 2.5);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Options::load("/nonexistent/connected_dots.json").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
