use log::LevelFilter;
use std::convert::TryFrom;
use tini::Ini;

pub struct OffboardConfig {
	pub log_level_filter: LevelFilter,
	/// Vehicle name prepended to every topic, empty for a single vehicle.
	pub link_prefix: String,
	pub setpoint_rate_hz: f32,
	pub hold_seconds: f32,
	pub takeoff_height: f32,
	pub offboard_mode: String,
}

pub fn read() -> anyhow::Result<OffboardConfig> {
	const CONFIG_FILE_NAME: &'static str = "offboard.ini";

	let ini = Ini::from_file(CONFIG_FILE_NAME)
		.map_err(|e| anyhow!("Failed to load configuration file: {}", e))?;

	OffboardConfig::try_from(&ini)
}

impl TryFrom<&Ini> for OffboardConfig {
	type Error = anyhow::Error;

	fn try_from(ini: &Ini) -> Result<Self, Self::Error> {
		const LOG_SECTION: &'static str = "log";
		const LEVEL_FILTER: &'static str = "level";

		let log_level_filter = match ini
			.get::<String>(LOG_SECTION, LEVEL_FILTER)
			.ok_or(Self::error(LOG_SECTION, LEVEL_FILTER))?
			.as_str()
		{
			"none" => LevelFilter::Off,
			"error" => LevelFilter::Error,
			"warn" => LevelFilter::Warn,
			"info" => LevelFilter::Info,
			"debug" => LevelFilter::Debug,
			"all" => LevelFilter::Trace,
			other => return Err(anyhow!("Invalid log level filter \"{}\"", other)),
		};

		const LINK_SECTION: &'static str = "link";
		const PREFIX: &'static str = "prefix";

		let link_prefix = ini
			.get::<String>(LINK_SECTION, PREFIX)
			.unwrap_or_else(String::new);

		const SETPOINT_SECTION: &'static str = "setpoint";
		const RATE: &'static str = "rate";
		const HOLD: &'static str = "hold";

		let setpoint_rate_hz = ini
			.get::<f32>(SETPOINT_SECTION, RATE)
			.ok_or(Self::error(SETPOINT_SECTION, RATE))?;

		if setpoint_rate_hz <= 0. {
			return Err(anyhow!("Setpoint rate must be positive, got {}", setpoint_rate_hz));
		}

		let hold_seconds = ini
			.get::<f32>(SETPOINT_SECTION, HOLD)
			.ok_or(Self::error(SETPOINT_SECTION, HOLD))?;

		const TAKEOFF_SECTION: &'static str = "takeoff";
		const HEIGHT: &'static str = "height";

		let takeoff_height = ini
			.get::<f32>(TAKEOFF_SECTION, HEIGHT)
			.ok_or(Self::error(TAKEOFF_SECTION, HEIGHT))?;

		const MODE_SECTION: &'static str = "mode";
		const OFFBOARD: &'static str = "offboard";

		let offboard_mode = ini
			.get::<String>(MODE_SECTION, OFFBOARD)
			.ok_or(Self::error(MODE_SECTION, OFFBOARD))?;

		Ok(Self {
			log_level_filter,
			link_prefix,
			setpoint_rate_hz,
			hold_seconds,
			takeoff_height,
			offboard_mode,
		})
	}
}

impl OffboardConfig {
	fn error(section: &str, key: &str) -> anyhow::Error {
		anyhow!("Failed to read configuration: section \"{}\", key \"{}\"", section, key)
	}
}
