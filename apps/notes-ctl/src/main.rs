use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = notes_ctl::Args::parse();
	notes_ctl::run(args).await
}
