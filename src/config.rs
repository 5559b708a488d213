//! Mechanism for loading and sharing the scan configuration

use crate::{
    binning::GEV,
    numeric::Float,
};

use anyhow::{ensure, format_err, Context, Result};

use std::{fs::File, io::Read, str::FromStr};

/// Cut-flow scan configuration
pub struct Configuration {
    /// Path of the candidate list to scan
    pub candidates_file: String,

    /// Transverse-energy preselection (MeV); candidates below it are
    /// counted but not classified
    pub et_min: Float,

    /// Whether every robuster-tight candidate should be echoed on stdout as
    /// it is classified
    pub list_passing: bool,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: &str) -> Result<Self> {
        // Read out the scan's configuration file or die trying
        let config_str = {
            let mut config_file = File::open(file_name)
                .with_context(|| format!("Could not open configuration file {file_name}"))?;
            let mut buffer = String::new();
            config_file.read_to_string(&mut buffer)?;
            buffer
        };

        // Configuration items are the first non-whitespace chunk of text on
        // each line; blank lines are ignored
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| format_err!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values; the
        // preselection is quoted in GeV and stored in the MeV-based unit
        // system of the calibration tables
        let config = Configuration {
            candidates_file: next_item("candidates_file")?.data.to_owned(),
            et_min: next_item("et_min_gev")?.parse::<Float>()? * GEV,
            list_passing: next_item("list_passing")?.parse::<bool>()?,
        };

        // Display it before validating, to ease troubleshooting
        config.print();

        // A negative preselection would silently select everything
        ensure!(
            config.et_min >= 0.,
            "The eT preselection must not be negative"
        );

        // If nothing bad occured, we can now return the configuration
        Ok(config)
    }

    /// Display the configuration
    pub fn print(&self) {
        println!("CANDIDATES  : {}", self.candidates_file);
        println!("ETMIN (MeV) : {}", self.et_min);
        println!("LISTPASSING : {}", self.list_passing);
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .with_context(|| format!("Could not parse configuration of {}", self.name))
    }
}
