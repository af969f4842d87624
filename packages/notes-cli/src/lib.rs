use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

/// Builds an `EnvFilter` directive, falling back to `info` for blank input.
pub fn log_directive(raw: &str) -> &str {
	let trimmed = raw.trim();

	if trimmed.is_empty() { "info" } else { trimmed }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_log_level_falls_back_to_info() {
		assert_eq!(log_directive("  "), "info");
		assert_eq!(log_directive(" debug "), "debug");
	}
}
