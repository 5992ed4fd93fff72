use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = hogar_api::Args::parse();
	hogar_api::run(args).await
}
