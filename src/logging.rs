//! Routes `log` records to the browser console, or to the terminal when running natively.

use log::LevelFilter;
use std::sync::Once;

static INSTALL: Once = Once::new();

/// Installs the logger. Only the first call has any effect.
pub fn init(level: LevelFilter) {
	INSTALL.call_once(|| backend::install(level));
}

#[cfg(target_family = "wasm")]
mod backend {
	use log::LevelFilter;

	pub fn install(level: LevelFilter) {
		if let Some(level) = level.to_level() {
			wasm_logger::init(wasm_logger::Config::new(level));
		}
	}
}

#[cfg(not(target_family = "wasm"))]
mod backend {
	use log::LevelFilter;

	pub fn install(level: LevelFilter) {
		if simplelog::SimpleLogger::init(level, simplelog::Config::default()).is_err() {
			log::debug!("logger already installed");
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn later_calls_keep_the_first_logger() {
		init(LevelFilter::Info);
		init(LevelFilter::Trace);
		assert_eq!(log::max_level(), LevelFilter::Info);
		log::info!(target: "calendar", "still logging");
	}
}
