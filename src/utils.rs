// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub debug: bool,
}

impl fmt::Display for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Host: {}, Port: {}, Debug: {}", self.host, self.port, self.debug)
	}
}

/// Default settings: localhost:8080 with debug enabled.
pub fn get_config() -> Config {
	Config {
		host: String::from("localhost"),
		port: 8080,
		debug: true,
	}
}

/// Print `cfg` to stdout on a single line.
pub fn print_config(cfg: &Config) {
	println!("{cfg}");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_config() {
		let cfg = get_config();
		assert_eq!(cfg.host, "localhost");
		assert_eq!(cfg.port, 8080);
		assert!(cfg.debug);
	}

	#[test]
	fn test_get_config_is_pure() {
		assert_eq!(get_config(), get_config());
	}

	#[test]
	fn test_config_display() {
		assert_eq!(get_config().to_string(), "Host: localhost, Port: 8080, Debug: true");
	}
}
