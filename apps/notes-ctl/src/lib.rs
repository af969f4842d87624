use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use notes_client::{Board, DEFAULT_BASE_URL, Note, NotesApi};

#[derive(Debug, Parser)]
#[command(
	version = notes_cli::VERSION,
	rename_all = "kebab",
	styles = notes_cli::styles(),
)]
pub struct Args {
	#[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
	pub base_url: String,
	#[arg(long, value_name = "MS", default_value_t = 5_000)]
	pub timeout_ms: u64,
	#[arg(long, value_name = "DIRECTIVE", default_value = "warn")]
	pub log_level: String,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Print every note.
	List,
	/// Create a note.
	Add {
		#[arg(long)]
		title: String,
		#[arg(long)]
		content: String,
	},
	/// Edit a note; omitted fields keep their current value.
	Edit {
		id: i32,
		#[arg(long)]
		title: Option<String>,
		#[arg(long)]
		content: Option<String>,
	},
	/// Delete a note.
	Delete { id: i32 },
}

pub async fn run(args: Args) -> Result<()> {
	init_tracing(&args.log_level);

	let api = NotesApi::new(&args.base_url, Duration::from_millis(args.timeout_ms))?;
	let mut board = Board::new();

	if !board.load(&api).await {
		return Err(eyre::eyre!("Could not load notes from {}.", api.base_url()));
	}

	let notice = match args.command {
		Command::List => {
			print_notes(board.notes());

			return Ok(());
		},
		Command::Add { title, content } => {
			board.set_title(title);
			board.set_content(content);
			board.submit(&api).await
		},
		Command::Edit { id, title, content } => {
			if !board.select(id) {
				return Err(eyre::eyre!("Note {id} is not on the board."));
			}
			if let Some(title) = title {
				board.set_title(title);
			}
			if let Some(content) = content {
				board.set_content(content);
			}

			board.submit(&api).await
		},
		Command::Delete { id } => board.delete(&api, id).await,
	};

	// Failures were already logged by the board; the list shows what the board holds now.
	if let Some(notice) = notice {
		println!("{notice}");
	}

	print_notes(board.notes());

	Ok(())
}

fn init_tracing(log_level: &str) {
	let filter = EnvFilter::try_new(notes_cli::log_directive(log_level))
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_notes(notes: &[Note]) {
	if notes.is_empty() {
		println!("No notes.");

		return;
	}

	let now = OffsetDateTime::now_utc();

	for note in notes {
		println!("#{} {}", note.id, render_line(note, now));
	}
}

fn render_line(note: &Note, now: OffsetDateTime) -> String {
	let content = note.content.lines().next().unwrap_or_default();

	format!("{}: {content} (posted {} ago)", note.title, relative_age(note.created_at, now))
}

/// Coarse, rounded distance between two instants, e.g. `about 3 hours`. Future instants read as
/// `less than a minute`.
fn relative_age(then: OffsetDateTime, now: OffsetDateTime) -> String {
	const HOUR: i64 = 60;
	const DAY: i64 = 24 * HOUR;
	const MONTH: i64 = 30 * DAY;
	const YEAR: i64 = 365 * DAY;

	let minutes = ((now - then).whole_seconds().max(0) + 30) / 60;

	match minutes {
		0 => "less than a minute".to_string(),
		1 => "1 minute".to_string(),
		2..45 => format!("{minutes} minutes"),
		45..90 => "about 1 hour".to_string(),
		90..DAY => format!("about {} hours", (minutes + HOUR / 2) / HOUR),
		DAY..2520 => "1 day".to_string(),
		2520..MONTH => format!("{} days", (minutes + DAY / 2) / DAY),
		MONTH..64_800 => "about 1 month".to_string(),
		64_800..86_400 => "about 2 months".to_string(),
		86_400..YEAR => format!("{} months", (minutes + MONTH / 2) / MONTH),
		_ => {
			let months = minutes / MONTH;
			let (years, rest) = (months / 12, months % 12);

			match rest {
				0..3 => format!("about {}", plural(years, "year")),
				3..9 => format!("over {}", plural(years, "year")),
				_ => format!("almost {}", plural(years + 1, "year")),
			}
		},
	}
}

fn plural(count: i64, unit: &str) -> String {
	if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	#[test]
	fn parses_edit_with_partial_fields() {
		let args = Args::try_parse_from(["notes-ctl", "edit", "3", "--title", "T"])
			.expect("Expected edit to parse.");

		assert_eq!(args.base_url, DEFAULT_BASE_URL);

		match args.command {
			Command::Edit { id, title, content } => {
				assert_eq!(id, 3);
				assert_eq!(title.as_deref(), Some("T"));
				assert_eq!(content, None);
			},
			other => panic!("Unexpected command: {other:?}."),
		}
	}

	#[test]
	fn add_requires_both_fields() {
		assert!(Args::try_parse_from(["notes-ctl", "add", "--title", "T"]).is_err());
	}

	#[test]
	fn renders_first_content_line_and_age() {
		let posted = datetime!(2024-05-06 07:00 UTC);
		let note = Note {
			id: 1,
			title: "A".to_string(),
			content: "first\nsecond".to_string(),
			created_at: posted,
			updated_at: posted,
		};

		assert_eq!(
			render_line(&note, posted + Duration::from_secs(5 * 60)),
			"A: first (posted 5 minutes ago)"
		);
	}

	#[test]
	fn ages_round_into_coarse_buckets() {
		let posted = datetime!(2024-01-01 00:00 UTC);
		let age = |offset: time::Duration| relative_age(posted, posted + offset);

		assert_eq!(age(time::Duration::seconds(10)), "less than a minute");
		assert_eq!(age(time::Duration::seconds(45)), "1 minute");
		assert_eq!(age(time::Duration::minutes(44)), "44 minutes");
		assert_eq!(age(time::Duration::minutes(50)), "about 1 hour");
		assert_eq!(age(time::Duration::hours(5)), "about 5 hours");
		assert_eq!(age(time::Duration::hours(30)), "1 day");
		assert_eq!(age(time::Duration::days(12)), "12 days");
		assert_eq!(age(time::Duration::days(35)), "about 1 month");
		assert_eq!(age(time::Duration::days(50)), "about 2 months");
		assert_eq!(age(time::Duration::days(200)), "7 months");
		assert_eq!(age(time::Duration::days(400)), "about 1 year");
		assert_eq!(age(time::Duration::days(550)), "over 1 year");
		assert_eq!(age(time::Duration::days(700)), "almost 2 years");
		assert_eq!(age(time::Duration::days(1100)), "about 3 years");
	}

	#[test]
	fn future_timestamps_read_as_just_posted() {
		let posted = datetime!(2024-01-01 00:10 UTC);

		assert_eq!(relative_age(posted, datetime!(2024-01-01 00:00 UTC)), "less than a minute");
	}
}
